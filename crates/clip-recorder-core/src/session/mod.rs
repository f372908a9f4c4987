mod phase;
#[allow(clippy::module_inception)]
mod session;

pub use {
    phase::Phase,
    session::{ReadyOutcome, RecordingSession, StopDecision, TickOutcome},
};
