use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

/// Which camera the capture should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// User-facing camera.
    Front,
    /// Rear camera.
    #[default]
    Back,
}

impl Facing {
    /// The opposite camera.
    pub fn toggled(self) -> Self {
        match self {
            Facing::Front => Facing::Back,
            Facing::Back => Facing::Front,
        }
    }
}

/// Output resolution class requested from the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityTier {
    /// 480 lines.
    #[serde(rename = "480p")]
    P480,
    /// 720 lines.
    #[serde(rename = "720p")]
    P720,
    /// 1080 lines.
    #[serde(rename = "1080p")]
    P1080,
}

impl QualityTier {
    /// Vertical resolution in pixels.
    pub fn height(self) -> u32 {
        match self {
            QualityTier::P480 => 480,
            QualityTier::P720 => 720,
            QualityTier::P1080 => 1080,
        }
    }
}

/// Parameters handed to [`CameraCapability::start_capture`](crate::CameraCapability::start_capture).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureConfig {
    /// Requested resolution class.
    pub quality: QualityTier,
    /// Hard cap after which the camera stops on its own.
    pub max_duration: Duration,
    /// Record the microphone alongside video.
    pub audio_enabled: bool,
    /// Camera to record from.
    pub facing: Facing,
}

/// Opaque handle to wherever the camera persisted a finished clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaReference(PathBuf);

impl MediaReference {
    /// Wrap a path written by the camera.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// Location of the clip.
    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for MediaReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Access grants reported by the camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionStatus {
    /// Video capture allowed.
    pub camera: bool,
    /// Audio capture allowed.
    pub microphone: bool,
    /// Writing clips to storage allowed.
    pub media_library: bool,
}

impl PermissionStatus {
    /// Status with every permission granted.
    pub fn granted() -> Self {
        Self {
            camera: true,
            microphone: true,
            media_library: true,
        }
    }

    /// True only when recording can proceed.
    pub fn all_granted(&self) -> bool {
        self.camera && self.microphone && self.media_library
    }
}
