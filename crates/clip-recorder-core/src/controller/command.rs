use crate::{CoreResult, RecorderError};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::sync::mpsc;

/// Requests sent from the UI layer to the controller loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecorderCommand {
    /// Begin a new recording session.
    Start,
    /// Stop the current session.
    Stop,
    /// Switch between front and back camera.
    ToggleFacing,
    /// Ask the camera for access grants.
    RequestPermissions,
    /// Dismiss the review and prepare to record again.
    ResetReview,
    /// Tear down and exit the loop.
    Shutdown,
}

/// Cloneable sender for [`RecorderCommand`]s.
#[derive(Debug, Clone)]
pub struct RecorderHandle {
    tx: mpsc::Sender<RecorderCommand>,
}

impl RecorderHandle {
    pub(crate) fn new(tx: mpsc::Sender<RecorderCommand>) -> Self {
        Self { tx }
    }

    /// Queue a command for the controller.
    ///
    /// The error location points at the caller, not at this method.
    ///
    /// # Errors
    ///
    /// Returns [`RecorderError::ControllerClosed`] once the loop has exited.
    #[track_caller]
    pub fn send(&self, command: RecorderCommand) -> impl Future<Output = CoreResult<()>> + '_ {
        let location = ErrorLocation::from(Location::caller());

        async move {
            self.tx
                .send(command)
                .await
                .map_err(|e| RecorderError::ControllerClosed {
                    command: e.0,
                    location,
                })
        }
    }
}
