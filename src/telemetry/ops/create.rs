use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Create;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Submit, Reload }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self { Phase::Submit => "submit", Phase::Reload => "reload" } }
    fn span(&self) -> Span { match self { Phase::Submit => info_span!("submit"), Phase::Reload => info_span!("reload") } }
}

impl OpMarker for Create {
    const NAME: &'static str = "create";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("create") }
}
