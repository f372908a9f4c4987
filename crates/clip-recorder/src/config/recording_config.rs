use std::{path::PathBuf, time::Duration};

use clip_recorder_core::{QualityTier, TimingConfig};
use serde::{Deserialize, Serialize};

/// Where clips go and optional overrides of the platform timing defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingConfig {
    /// Directory finished clips are written to.
    pub clips_dir: PathBuf,
    /// Output resolution; platform default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityTier>,
    /// Warm-up after capture launch, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_delay_ms: Option<u64>,
    /// Delay before the capture call, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pre_start_delay_ms: Option<u64>,
    /// Shortest clip that is kept, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_duration_ms: Option<u64>,
}

impl RecordingConfig {
    /// Recording with platform timing into `clips_dir`.
    pub fn new(clips_dir: PathBuf) -> Self {
        Self {
            clips_dir,
            quality: None,
            ready_delay_ms: None,
            pre_start_delay_ms: None,
            min_duration_ms: None,
        }
    }

    /// Platform timing with this section's overrides applied.
    pub fn timing(&self) -> TimingConfig {
        let mut timing = TimingConfig::default();

        if let Some(quality) = self.quality {
            timing.quality = quality;
        }
        if let Some(ms) = self.ready_delay_ms {
            timing.ready_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = self.pre_start_delay_ms {
            timing.pre_start_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = self.min_duration_ms {
            timing.min_duration = Duration::from_millis(ms);
        }

        timing
    }
}
