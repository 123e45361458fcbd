use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Feed;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Reset, Fetch, Render, Discard }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Reset => "reset",
        Phase::Fetch => "fetch",
        Phase::Render => "render",
        Phase::Discard => "discard",
    }}
    fn span(&self) -> Span { match self {
        Phase::Reset => info_span!("reset"),
        Phase::Fetch => info_span!("fetch"),
        Phase::Render => info_span!("render"),
        Phase::Discard => info_span!("discard"),
    }}
}

impl OpMarker for Feed {
    const NAME: &'static str = "feed";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("feed") }
}
