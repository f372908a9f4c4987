//! Clip Recorder Core Library
//!
//! Short-clip camera recording lifecycle: warm-up handling, a minimum clip
//! length, an automatic stop before the camera's hard cap, and guaranteed
//! teardown on every exit path. Platform capture sits behind
//! [`CameraCapability`].
//!
//! # Example
//!
//! ```no_run
//! use clip_recorder_core::{
//!     CameraCapability, RecorderCommand, RecordingController, TimingConfig, command_channel,
//! };
//!
//! use std::sync::Arc;
//!
//! async fn record(camera: Arc<dyn CameraCapability>) -> clip_recorder_core::CoreResult<()> {
//!     let controller = RecordingController::new(camera, TimingConfig::default());
//!     let mut events = controller.subscribe();
//!     let (handle, commands) = command_channel(32);
//!
//!     tokio::spawn(controller.run(commands));
//!
//!     handle.send(RecorderCommand::Start).await?;
//!     tokio::time::sleep(std::time::Duration::from_secs(5)).await;
//!     handle.send(RecorderCommand::Stop).await?;
//!
//!     while let Ok(event) = events.recv().await {
//!         println!("{:?}", event);
//!     }
//!     Ok(())
//! }
//! ```

mod capability;
mod controller;
mod error;
mod format;
mod session;

pub use {
    capability::{
        CameraCapability, CapabilityError, CaptureConfig, Facing, MediaReference,
        PermissionStatus, QualityTier,
    },
    controller::{
        Notice, NoticeKind, PlatformClass, RecorderCommand, RecorderEvent, RecorderHandle,
        RecordingController, TimingConfig, command_channel,
    },
    error::RecorderError,
    error::Result as CoreResult,
    format::format_elapsed,
    session::{Phase, ReadyOutcome, RecordingSession, StopDecision, TickOutcome},
};

#[cfg(test)]
mod tests;
