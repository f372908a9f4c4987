use crate::{capability::PermissionStatus, controller::RecorderCommand};

use std::time::Duration;

use error_location::ErrorLocation;
use thiserror::Error;

/// Recording lifecycle errors with source location tracking.
#[derive(Error, Debug)]
pub enum RecorderError {
    /// Start attempted before the camera reported readiness.
    #[error("Camera is not ready {location}")]
    CapabilityNotReady {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The camera rejected or aborted the capture.
    #[error("Capture start failed: {source} {location}")]
    CaptureStartFailed {
        /// Underlying error from the camera capability.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Stop requested before the minimum clip length elapsed.
    #[error("Recording too short: {elapsed:?} {location}")]
    RecordingTooShort {
        /// Time between warm-up start and the stop attempt.
        elapsed: Duration,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The camera rejected the stop, or never delivered the clip after it.
    #[error("Capture stop failed: {source} {location}")]
    CaptureStopFailed {
        /// Underlying error from the camera capability.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Start requested while a session is already live.
    #[error("A recording session is already active {location}")]
    SessionActive {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Camera, microphone or media library access was refused.
    #[error("Permissions not granted: {status:?} {location}")]
    PermissionDenied {
        /// Permission state reported by the camera.
        status: PermissionStatus,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The controller loop has exited and no longer accepts commands.
    #[error("Controller closed, dropped {command:?} {location}")]
    ControllerClosed {
        /// Command that could not be delivered.
        command: RecorderCommand,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`RecorderError`].
pub type Result<T> = std::result::Result<T, RecorderError>;
