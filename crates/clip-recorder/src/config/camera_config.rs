use crate::config::{
    DEFAULT_BACK_DEVICE, DEFAULT_FFMPEG_PATH, DEFAULT_FRONT_DEVICE, DEFAULT_MICROPHONE_DEVICE,
};

use std::path::PathBuf;

use clip_recorder_core::Facing;
use serde::{Deserialize, Serialize};

/// ffmpeg binary and capture device names.
///
/// Device names are passed to ffmpeg verbatim: a `/dev/videoN` path for
/// v4l2, an index for avfoundation, a friendly name for dshow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// ffmpeg executable, looked up on `PATH` when not absolute.
    pub ffmpeg_path: PathBuf,
    /// Device used when facing the user.
    pub front_device: String,
    /// Device used when facing away.
    pub back_device: String,
    /// Audio input device.
    pub microphone_device: String,
}

impl CameraConfig {
    /// Video device for the selected camera.
    pub fn video_device(&self, facing: Facing) -> &str {
        match facing {
            Facing::Front => &self.front_device,
            Facing::Back => &self.back_device,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: PathBuf::from(DEFAULT_FFMPEG_PATH),
            front_device: DEFAULT_FRONT_DEVICE.to_string(),
            back_device: DEFAULT_BACK_DEVICE.to_string(),
            microphone_device: DEFAULT_MICROPHONE_DEVICE.to_string(),
        }
    }
}
