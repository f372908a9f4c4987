use crate::capability::QualityTier;

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Camera start-up latency class of the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformClass {
    /// Apple platforms: fast camera start.
    Apple,
    /// Everything else: slower start, extra pre-start delay.
    Other,
}

impl PlatformClass {
    /// Class of the platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(any(target_os = "macos", target_os = "ios")) {
            PlatformClass::Apple
        } else {
            PlatformClass::Other
        }
    }
}

/// Every timing constant the controller uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Countdown period.
    pub tick_interval: Duration,
    /// Shortest clip a stop may produce.
    pub min_duration: Duration,
    /// Tick count at which recording stops automatically.
    pub auto_stop_ticks: u32,
    /// Cap handed to the camera; it stops on its own after this.
    pub hard_cap: Duration,
    /// Delay after capture launch before stops may take effect.
    pub ready_delay: Duration,
    /// Delay between start and the capture call.
    pub pre_start_delay: Duration,
    /// Resolution requested from the camera.
    pub quality: QualityTier,
    /// How long to wait for the clip once the camera acknowledged a stop.
    pub capture_settle_timeout: Duration,
}

impl TimingConfig {
    /// Defaults for the given platform class.
    pub fn for_platform(platform: PlatformClass) -> Self {
        let (ready_delay, pre_start_delay, quality) = match platform {
            PlatformClass::Apple => (Duration::from_millis(800), Duration::ZERO, QualityTier::P720),
            PlatformClass::Other => (
                Duration::from_millis(1500),
                Duration::from_millis(500),
                QualityTier::P480,
            ),
        };

        Self {
            tick_interval: Duration::from_secs(1),
            min_duration: Duration::from_millis(1500),
            auto_stop_ticks: 29,
            hard_cap: Duration::from_secs(30),
            ready_delay,
            pre_start_delay,
            quality,
            capture_settle_timeout: Duration::from_secs(5),
        }
    }

    /// Time from start until the ready flag is set.
    pub fn warm_up(&self) -> Duration {
        self.pre_start_delay + self.ready_delay
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self::for_platform(PlatformClass::current())
    }
}
