use crate::config::{BehaviourConfig, CameraConfig, Config};

use std::{path::PathBuf, time::Duration};

use clip_recorder_core::{Facing, QualityTier, TimingConfig};

/// WHAT: Default config survives a TOML round trip
/// WHY: The file written on first run must load on the next run
#[test]
#[allow(clippy::unwrap_used)]
fn given_default_config_when_round_tripped_through_toml_then_unchanged() {
    // Given: Defaults with a clips directory
    let config = Config::with_clips_dir(PathBuf::from("/tmp/clips"));

    // When: Rendering and parsing back
    let text = config.to_toml().unwrap();
    let parsed = Config::parse(&text).unwrap();

    // Then: Identical, and unset overrides are not written
    assert_eq!(parsed, config);
    assert!(!text.contains("ready_delay_ms"));
}

/// WHAT: Only the recording section is required
/// WHY: Users may hand-write a minimal file
#[test]
#[allow(clippy::unwrap_used)]
fn given_minimal_file_when_parsing_then_defaults_fill_in() {
    // Given: Only a clips directory
    let text = "[recording]\nclips_dir = \"/data/clips\"\n";

    // When: Parsing
    let config = Config::parse(text).unwrap();

    // Then: Other sections take defaults
    assert_eq!(config.recording.clips_dir, PathBuf::from("/data/clips"));
    assert_eq!(config.camera, CameraConfig::default());
    assert_eq!(config.behaviour, BehaviourConfig::default());
    assert!(config.behaviour.desktop_notifications);
    assert!(!config.behaviour.open_on_review);
}

/// WHAT: Missing recording section is a config error
/// WHY: Clips need somewhere to go
#[test]
fn given_missing_recording_section_when_parsing_then_error() {
    // Given: Camera section only
    let text = "[camera]\nffmpeg_path = \"/usr/bin/ffmpeg\"\n";

    // When: Parsing
    let result = Config::parse(text);

    // Then: Rejected
    assert!(result.is_err());
}

/// WHAT: Timing overrides replace platform defaults
/// WHY: Slow cameras need a longer warm-up
#[test]
#[allow(clippy::unwrap_used)]
fn given_timing_overrides_when_building_timing_then_applied() {
    // Given: Overrides for warm-up, pre-start, minimum and quality
    let text = r#"
[recording]
clips_dir = "/data/clips"
quality = "1080p"
ready_delay_ms = 2500
pre_start_delay_ms = 0
min_duration_ms = 2000
"#;
    let config = Config::parse(text).unwrap();

    // When: Building the controller timing
    let timing = config.recording.timing();

    // Then: Overrides win, fixed limits stay
    assert_eq!(timing.quality, QualityTier::P1080);
    assert_eq!(timing.ready_delay, Duration::from_millis(2500));
    assert_eq!(timing.pre_start_delay, Duration::ZERO);
    assert_eq!(timing.min_duration, Duration::from_millis(2000));
    assert_eq!(timing.auto_stop_ticks, 29);
    assert_eq!(timing.hard_cap, Duration::from_secs(30));
}

/// WHAT: No overrides yields the platform defaults
/// WHY: Out of the box timing matches the host platform
#[test]
#[allow(clippy::unwrap_used)]
fn given_no_overrides_when_building_timing_then_platform_defaults() {
    // Given: Minimal config
    let config = Config::parse("[recording]\nclips_dir = \"/c\"\n").unwrap();

    // When/Then: Same as the core defaults
    assert_eq!(config.recording.timing(), TimingConfig::default());
}

/// WHAT: Facing selects the matching device
/// WHY: Flip must switch the ffmpeg input
#[test]
fn given_camera_config_when_selecting_device_then_matches_facing() {
    // Given: Distinct front and back devices
    let camera = CameraConfig {
        front_device: "front-cam".to_string(),
        back_device: "back-cam".to_string(),
        ..CameraConfig::default()
    };

    // When/Then
    assert_eq!(camera.video_device(Facing::Front), "front-cam");
    assert_eq!(camera.video_device(Facing::Back), "back-cam");
}
