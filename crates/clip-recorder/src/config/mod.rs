mod behaviour_config;
mod camera_config;
#[allow(clippy::module_inception)]
mod config;
mod recording_config;

pub(crate) use {
    behaviour_config::BehaviourConfig, camera_config::CameraConfig, config::Config,
    recording_config::RecordingConfig,
};

pub(crate) const DEFAULT_DESKTOP_NOTIFICATIONS: bool = true;
pub(crate) const DEFAULT_OPEN_ON_REVIEW: bool = false;
pub(crate) const DEFAULT_FFMPEG_PATH: &str = "ffmpeg";

#[cfg(target_os = "linux")]
pub(crate) const DEFAULT_BACK_DEVICE: &str = "/dev/video0";
#[cfg(target_os = "linux")]
pub(crate) const DEFAULT_FRONT_DEVICE: &str = "/dev/video1";
#[cfg(target_os = "linux")]
pub(crate) const DEFAULT_MICROPHONE_DEVICE: &str = "default";

#[cfg(target_os = "macos")]
pub(crate) const DEFAULT_BACK_DEVICE: &str = "0";
#[cfg(target_os = "macos")]
pub(crate) const DEFAULT_FRONT_DEVICE: &str = "1";
#[cfg(target_os = "macos")]
pub(crate) const DEFAULT_MICROPHONE_DEVICE: &str = "0";

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub(crate) const DEFAULT_BACK_DEVICE: &str = "Integrated Camera";
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub(crate) const DEFAULT_FRONT_DEVICE: &str = "Integrated Camera";
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub(crate) const DEFAULT_MICROPHONE_DEVICE: &str = "Microphone";

pub(crate) fn default_desktop_notifications() -> bool {
    DEFAULT_DESKTOP_NOTIFICATIONS
}

pub(crate) fn default_open_on_review() -> bool {
    DEFAULT_OPEN_ON_REVIEW
}
