//! Terminal rendering of controller events.

use clip_recorder_core::{
    Facing, MediaReference, NoticeKind, Phase, PermissionStatus, RecorderEvent, format_elapsed,
};

pub(crate) const HELP: &str = "\
Commands:
  r, record       start recording
  s, stop         stop recording
  f, flip         switch front/back camera
  p, permissions  check camera and microphone access
  o, open         open the last clip
  n, new          dismiss the clip and record again
  h, help         show this list
  q, quit         exit";

/// What the terminal currently shows.
#[derive(Debug, Default)]
pub struct Screen {
    phase: Phase,
    elapsed_seconds: u32,
    facing: Facing,
    review: Option<MediaReference>,
}

impl Screen {
    /// Fold `event` into the screen state and return the lines to print.
    pub fn apply(&mut self, event: &RecorderEvent) -> Vec<String> {
        match event {
            RecorderEvent::PhaseChanged(phase) => {
                self.phase = *phase;
                match phase {
                    Phase::WarmingUp => vec![format!("Starting {} camera...", facing_name(self.facing))],
                    Phase::Recording => vec!["Recording".to_string()],
                    Phase::StoppingRequested => vec!["Stopping...".to_string()],
                    Phase::Stopped | Phase::Idle => Vec::new(),
                }
            }
            RecorderEvent::Tick { elapsed_seconds } => {
                self.elapsed_seconds = *elapsed_seconds;
                vec![format!("REC {}", format_elapsed(*elapsed_seconds))]
            }
            RecorderEvent::FacingChanged(facing) => {
                self.facing = *facing;
                vec![format!("Camera: {}", facing_name(*facing))]
            }
            RecorderEvent::Permissions(status) => {
                if status.all_granted() {
                    vec!["Camera ready. Type 'r' to record, 'h' for help.".to_string()]
                } else {
                    vec![
                        "No access to camera or microphone".to_string(),
                        format!("Missing: {}", missing_permissions(status).join(", ")),
                        "Type 'p' to check again.".to_string(),
                    ]
                }
            }
            RecorderEvent::ReviewReady(clip) => {
                self.review = Some(clip.clone());
                vec![
                    format!("Clip saved ({}): {}", format_elapsed(self.elapsed_seconds), clip),
                    "Type 'o' to open it or 'n' to record again.".to_string(),
                ]
            }
            RecorderEvent::ReviewCleared => {
                let had_review = self.review.take().is_some();
                self.elapsed_seconds = 0;
                if had_review && !self.phase.is_active() {
                    vec!["Ready to record.".to_string()]
                } else {
                    Vec::new()
                }
            }
            RecorderEvent::Notice(notice) => {
                let tag = match notice.kind {
                    NoticeKind::Success => "OK",
                    NoticeKind::Failure => "!!",
                };
                vec![format!("[{}] {}: {}", tag, notice.title, notice.message)]
            }
        }
    }

    /// Current phase as last reported.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Clip awaiting review.
    pub fn review(&self) -> Option<&MediaReference> {
        self.review.as_ref()
    }
}

fn facing_name(facing: Facing) -> &'static str {
    match facing {
        Facing::Front => "front",
        Facing::Back => "back",
    }
}

fn missing_permissions(status: &PermissionStatus) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !status.camera {
        missing.push("camera");
    }
    if !status.microphone {
        missing.push("microphone");
    }
    if !status.media_library {
        missing.push("clip storage");
    }
    missing
}
