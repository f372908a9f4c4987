use serde::{Deserialize, Serialize};

/// Lifecycle phase of a recording attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No session.
    #[default]
    Idle,
    /// Capture launched, camera not yet producing usable frames.
    WarmingUp,
    /// Camera is recording and a stop may take effect.
    Recording,
    /// A stop was requested and is pending or in flight.
    StoppingRequested,
    /// The camera acknowledged the stop.
    Stopped,
}

impl Phase {
    /// Any phase other than [`Phase::Idle`] belongs to a live session.
    pub fn is_active(self) -> bool {
        self != Phase::Idle
    }

    /// Phases in which the countdown advances.
    pub fn is_counting(self) -> bool {
        matches!(self, Phase::WarmingUp | Phase::Recording)
    }
}
