use crate::{
    RecorderError,
    capability::{Facing, MediaReference, PermissionStatus},
    session::Phase,
};

/// Whether a notice reports a good or a bad outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Clip recorded.
    Success,
    /// Session ended without a usable clip, or an action was refused.
    Failure,
}

/// Blocking, user-facing message raised by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Outcome class.
    pub kind: NoticeKind,
    /// Short heading.
    pub title: String,
    /// Plain-language body.
    pub message: String,
}

impl Notice {
    pub(crate) fn recorded() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success".to_string(),
            message: "Video recorded successfully!".to_string(),
        }
    }

    /// Plain-language notice for a controller error.
    pub fn failure(error: &RecorderError) -> Self {
        let message = match error {
            RecorderError::CapabilityNotReady { .. } => "Camera is not ready yet",
            RecorderError::CaptureStartFailed { .. } => "Failed to start recording",
            RecorderError::RecordingTooShort { .. } => {
                "Recording was too short. Record for at least a second and a half"
            }
            RecorderError::CaptureStopFailed { .. } => "Failed to stop recording",
            RecorderError::SessionActive { .. } => "A recording is already in progress",
            RecorderError::PermissionDenied { .. } => "No access to camera or microphone",
            RecorderError::ControllerClosed { .. } => "Recorder is shutting down",
        };

        Self {
            kind: NoticeKind::Failure,
            title: "Error".to_string(),
            message: message.to_string(),
        }
    }
}

/// State changes published by the controller for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecorderEvent {
    /// Session moved to a new phase.
    PhaseChanged(Phase),
    /// Countdown advanced.
    Tick {
        /// Seconds counted in this session.
        elapsed_seconds: u32,
    },
    /// Camera selector changed.
    FacingChanged(Facing),
    /// Permission request resolved.
    Permissions(PermissionStatus),
    /// A finished clip is ready for review.
    ReviewReady(MediaReference),
    /// Review dismissed; ready to record again.
    ReviewCleared,
    /// Message the UI must show.
    Notice(Notice),
}
