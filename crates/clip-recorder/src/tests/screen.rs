use crate::Screen;

use clip_recorder_core::{
    MediaReference, Notice, NoticeKind, Phase, PermissionStatus, RecorderEvent,
};

/// WHAT: Ticks render as MM:SS
/// WHY: The countdown is the main feedback while recording
#[test]
fn given_tick_when_rendering_then_minutes_and_seconds() {
    // Given: Fresh screen
    let mut screen = Screen::default();

    // When: Tick at 29 seconds
    let lines = screen.apply(&RecorderEvent::Tick { elapsed_seconds: 29 });

    // Then: Zero-padded countdown
    assert_eq!(lines, vec!["REC 00:29".to_string()]);
}

/// WHAT: Denied permissions show the access message and what is missing
/// WHY: Users need to know which grant to fix
#[test]
fn given_denied_permissions_when_rendering_then_missing_listed() {
    // Given: Microphone denied
    let mut screen = Screen::default();
    let status = PermissionStatus {
        camera: true,
        microphone: false,
        media_library: true,
    };

    // When: Rendering
    let lines = screen.apply(&RecorderEvent::Permissions(status));

    // Then: Access message and the missing grant
    assert_eq!(lines[0], "No access to camera or microphone");
    assert_eq!(lines[1], "Missing: microphone");
}

/// WHAT: A finished clip is remembered with its length
/// WHY: Open and record-again act on the clip under review
#[test]
fn given_clip_ready_when_rendering_then_review_shown_with_length() {
    // Given: Seven seconds recorded
    let mut screen = Screen::default();
    screen.apply(&RecorderEvent::PhaseChanged(Phase::Recording));
    screen.apply(&RecorderEvent::Tick { elapsed_seconds: 7 });
    screen.apply(&RecorderEvent::PhaseChanged(Phase::Idle));
    let clip = MediaReference::new("/clips/a.mp4");

    // When: The clip arrives
    let lines = screen.apply(&RecorderEvent::ReviewReady(clip.clone()));

    // Then: Length and path shown, clip kept
    assert_eq!(lines[0], "Clip saved (00:07): /clips/a.mp4");
    assert_eq!(screen.review(), Some(&clip));
    assert_eq!(screen.phase(), Phase::Idle);
}

/// WHAT: Record-again clears the review
/// WHY: Open must not reopen a dismissed clip
#[test]
fn given_review_when_cleared_then_ready_prompt() {
    // Given: A clip under review
    let mut screen = Screen::default();
    screen.apply(&RecorderEvent::ReviewReady(MediaReference::new("/clips/a.mp4")));

    // When: Review cleared
    let lines = screen.apply(&RecorderEvent::ReviewCleared);

    // Then: Prompt shown and nothing left to open
    assert_eq!(lines, vec!["Ready to record.".to_string()]);
    assert!(screen.review().is_none());
}

/// WHAT: Notices are tagged by outcome
/// WHY: Failures must stand out from successes
#[test]
fn given_notices_when_rendering_then_tagged_by_kind() {
    // Given: One failure, one success
    let mut screen = Screen::default();
    let failure = Notice {
        kind: NoticeKind::Failure,
        title: "Error".to_string(),
        message: "Failed to stop recording".to_string(),
    };
    let success = Notice {
        kind: NoticeKind::Success,
        title: "Success".to_string(),
        message: "Video recorded successfully!".to_string(),
    };

    // When/Then
    assert_eq!(
        screen.apply(&RecorderEvent::Notice(failure)),
        vec!["[!!] Error: Failed to stop recording".to_string()]
    );
    assert_eq!(
        screen.apply(&RecorderEvent::Notice(success)),
        vec!["[OK] Success: Video recorded successfully!".to_string()]
    );
}

/// WHAT: Recording again from review announces the warm-up only
/// WHY: "Ready to record." after the start would contradict the camera starting
#[test]
fn given_review_when_restarting_then_no_ready_line() {
    // Given: A clip under review
    let mut screen = Screen::default();
    screen.apply(&RecorderEvent::ReviewReady(MediaReference::new("/clips/a.mp4")));

    // When: The controller starts warming up and then drops the review
    let warm_up = screen.apply(&RecorderEvent::PhaseChanged(Phase::WarmingUp));
    let cleared = screen.apply(&RecorderEvent::ReviewCleared);

    // Then: Only the warm-up line, review gone
    assert_eq!(warm_up, vec!["Starting back camera...".to_string()]);
    assert!(cleared.is_empty());
    assert_eq!(screen.review(), None);
}
