use crate::config::{default_desktop_notifications, default_open_on_review};

use serde::{Deserialize, Serialize};

/// How the app surfaces results outside the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviourConfig {
    /// Mirror success and failure notices as desktop notifications.
    #[serde(default = "default_desktop_notifications")]
    pub desktop_notifications: bool,
    /// Open each finished clip in the system viewer.
    #[serde(default = "default_open_on_review")]
    pub open_on_review: bool,
}

impl Default for BehaviourConfig {
    fn default() -> Self {
        Self {
            desktop_notifications: default_desktop_notifications(),
            open_on_review: default_open_on_review(),
        }
    }
}
