//! Desktop integration: notifications and opening finished clips.

use crate::{AppError, AppResult, config::BehaviourConfig};

use std::panic::Location;

use clip_recorder_core::{MediaReference, Notice};
use error_location::ErrorLocation;
use notify_rust::Notification;
use tracing::{debug, info, instrument};

const APP_NAME: &str = "Clip Recorder";

/// Surfaces controller results outside the terminal.
pub struct OutputHandler {
    pub(crate) behaviour: BehaviourConfig,
}

impl OutputHandler {
    /// Create a handler honouring `behaviour`.
    pub fn new(behaviour: BehaviourConfig) -> Self {
        Self { behaviour }
    }

    /// Show `notice` as a desktop notification when enabled.
    ///
    /// Returns `Ok(false)` when notifications are switched off.
    #[instrument(skip(self))]
    pub async fn notify(&self, notice: &Notice) -> AppResult<bool> {
        if !self.behaviour.desktop_notifications {
            return Ok(false);
        }

        let summary = format!("{}: {}", APP_NAME, notice.title);
        let body = notice.message.clone();

        // notify-rust blocks on the platform notification service.
        tokio::task::spawn_blocking(move || {
            Notification::new()
                .appname(APP_NAME)
                .summary(&summary)
                .body(&body)
                .show()
                .map(|_| ())
                .map_err(|e| AppError::NotificationFailed {
                    reason: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
        })
        .await
        .map_err(|e| AppError::NotificationFailed {
            reason: format!("Notification task panicked: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })??;

        debug!("Desktop notification shown");

        Ok(true)
    }

    /// Open `clip` in the system's default viewer.
    #[instrument(skip(self))]
    pub fn open_clip(&self, clip: &MediaReference) -> AppResult<()> {
        open::that_detached(clip.path()).map_err(|e| AppError::OpenClipFailed {
            reason: format!("{}: {}", clip, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!(clip = %clip, "Clip opened");

        Ok(())
    }

    /// Whether each new clip should open automatically.
    pub fn open_on_review(&self) -> bool {
        self.behaviour.open_on_review
    }
}
