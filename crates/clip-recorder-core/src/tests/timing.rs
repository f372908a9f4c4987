use crate::{PlatformClass, QualityTier, TimingConfig};

use std::time::Duration;

/// WHAT: Apple platforms warm up in 800ms with no pre-start delay
/// WHY: Their cameras start quickly and record at 720p
#[test]
fn given_apple_platform_when_building_timing_then_short_warm_up_and_720p() {
    // Given/When: Timing for the Apple platform class
    let timing = TimingConfig::for_platform(PlatformClass::Apple);

    // Then: Short warm-up and higher quality
    assert_eq!(timing.ready_delay, Duration::from_millis(800));
    assert_eq!(timing.pre_start_delay, Duration::ZERO);
    assert_eq!(timing.warm_up(), Duration::from_millis(800));
    assert_eq!(timing.quality, QualityTier::P720);
}

/// WHAT: Other platforms add a pre-start delay and a longer warm-up
/// WHY: Slower camera start-up must not let a stop land before frames flow
#[test]
fn given_other_platform_when_building_timing_then_warm_up_includes_pre_start() {
    // Given/When: Timing for the slower platform class
    let timing = TimingConfig::for_platform(PlatformClass::Other);

    // Then: Warm-up is the sum of both delays
    assert_eq!(timing.pre_start_delay, Duration::from_millis(500));
    assert_eq!(timing.ready_delay, Duration::from_millis(1500));
    assert_eq!(timing.warm_up(), Duration::from_millis(2000));
    assert_eq!(timing.quality, QualityTier::P480);
}

/// WHAT: Limits shared by every platform
/// WHY: Auto-stop must fire one tick before the camera's hard cap
#[test]
fn given_any_platform_when_building_timing_then_auto_stop_precedes_hard_cap() {
    for platform in [PlatformClass::Apple, PlatformClass::Other] {
        // Given/When: Timing for each platform class
        let timing = TimingConfig::for_platform(platform);

        // Then: 1.5s minimum, 29 ticks of 1s, 30s cap
        assert_eq!(timing.min_duration, Duration::from_millis(1500));
        assert_eq!(timing.tick_interval, Duration::from_secs(1));
        assert_eq!(timing.auto_stop_ticks, 29);
        assert_eq!(timing.hard_cap, Duration::from_secs(30));
        assert!(timing.tick_interval * timing.auto_stop_ticks < timing.hard_cap);
    }
}
