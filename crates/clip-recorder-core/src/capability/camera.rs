use crate::capability::{CaptureConfig, MediaReference, PermissionStatus};

use async_trait::async_trait;

/// Error type returned by camera implementations.
pub type CapabilityError = Box<dyn std::error::Error + Send + Sync>;

/// Platform camera that performs the actual capture.
///
/// The controller never touches device state directly; it only drives this
/// trait. Implementations must resolve a pending [`start_capture`] once
/// [`stop_capture`] has been issued or `max_duration` elapses, and must
/// release the device if the `start_capture` future is dropped.
///
/// [`start_capture`]: CameraCapability::start_capture
/// [`stop_capture`]: CameraCapability::stop_capture
#[async_trait]
pub trait CameraCapability: Send + Sync {
    /// Ask the platform for camera, microphone and storage access.
    async fn request_permissions(&self) -> PermissionStatus;

    /// Whether the camera is prepared to begin frame capture.
    fn is_ready(&self) -> bool;

    /// Begin recording. Resolves only when capture actually ends.
    async fn start_capture(&self, config: CaptureConfig) -> Result<MediaReference, CapabilityError>;

    /// Ask an in-flight capture to finish.
    async fn stop_capture(&self) -> Result<(), CapabilityError>;
}
