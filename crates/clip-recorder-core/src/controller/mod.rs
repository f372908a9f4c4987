mod command;
#[allow(clippy::module_inception)]
mod controller;
mod event;
mod timing;

pub use {
    command::{RecorderCommand, RecorderHandle},
    controller::RecordingController,
    event::{Notice, NoticeKind, RecorderEvent},
    timing::{PlatformClass, TimingConfig},
};

use tokio::sync::mpsc;

/// Create the command channel between a UI layer and
/// [`RecordingController::run`].
pub fn command_channel(capacity: usize) -> (RecorderHandle, mpsc::Receiver<RecorderCommand>) {
    let (tx, rx) = mpsc::channel(capacity);
    (RecorderHandle::new(tx), rx)
}
