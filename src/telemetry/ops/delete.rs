use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Delete;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Confirm, Delete, Reload }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Confirm => "confirm",
        Phase::Delete => "delete",
        Phase::Reload => "reload",
    }}
    fn span(&self) -> Span { match self {
        Phase::Confirm => info_span!("confirm"),
        Phase::Delete => info_span!("delete"),
        Phase::Reload => info_span!("reload"),
    }}
}

impl OpMarker for Delete {
    const NAME: &'static str = "delete";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("delete") }
}
