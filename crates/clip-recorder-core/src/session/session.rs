//! Recording session state machine.
//!
//! Every field is private; callers move the session forward only through the
//! transition methods below, each of which reports what the driver must do
//! next. No method performs I/O or reads the clock.

use crate::{CoreResult, RecorderError, session::Phase};

use std::{panic::Location, time::Duration};

use error_location::ErrorLocation;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

/// Result of the warm-up delay elapsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyOutcome {
    /// Camera is now recording; stops may take effect.
    Recording,
    /// A stop arrived during warm-up and must be performed now.
    StopDue,
    /// No warm-up was pending.
    Ignored,
}

/// Result of a stop request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopDecision {
    /// Camera not ready yet; the stop runs when warm-up completes.
    Deferred,
    /// Caller must perform the stop now.
    Proceed,
    /// No session, or a stop is already in flight.
    Ignored,
}

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Counter advanced.
    Counted(u32),
    /// Counter reached the ceiling; an automatic stop is due.
    AutoStop(u32),
    /// Session is not in a counting phase.
    Inactive,
}

/// State of the single live recording attempt.
#[derive(Debug, Clone, Default)]
pub struct RecordingSession {
    id: Option<Uuid>,
    phase: Phase,
    started_at: Option<Instant>,
    ready: bool,
    stop_requested_early: bool,
    elapsed_seconds: u32,
}

impl RecordingSession {
    /// Enter warm-up. Fails if a session is already live.
    #[track_caller]
    pub fn begin(&mut self, now: Instant) -> CoreResult<Uuid> {
        if self.phase.is_active() {
            return Err(RecorderError::SessionActive {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let id = Uuid::new_v4();
        *self = Self {
            id: Some(id),
            phase: Phase::WarmingUp,
            started_at: Some(now),
            ready: false,
            stop_requested_early: false,
            elapsed_seconds: 0,
        };

        debug!(session_id = %id, "Session entered warm-up");

        Ok(id)
    }

    /// Warm-up delay elapsed: the camera is presumed to be capturing.
    pub fn mark_ready(&mut self) -> ReadyOutcome {
        match self.phase {
            Phase::WarmingUp => {
                self.ready = true;
                self.phase = Phase::Recording;
                ReadyOutcome::Recording
            }
            Phase::StoppingRequested if !self.ready => {
                self.ready = true;
                if self.stop_requested_early {
                    ReadyOutcome::StopDue
                } else {
                    ReadyOutcome::Ignored
                }
            }
            _ => ReadyOutcome::Ignored,
        }
    }

    /// Record a stop request and decide whether it may take effect now.
    pub fn request_stop(&mut self) -> StopDecision {
        match self.phase {
            Phase::WarmingUp => {
                self.stop_requested_early = true;
                self.phase = Phase::StoppingRequested;
                StopDecision::Deferred
            }
            Phase::StoppingRequested if !self.ready => StopDecision::Deferred,
            Phase::Recording => {
                self.phase = Phase::StoppingRequested;
                StopDecision::Proceed
            }
            _ => StopDecision::Ignored,
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self, auto_stop_ticks: u32) -> TickOutcome {
        if !self.phase.is_counting() {
            return TickOutcome::Inactive;
        }

        self.elapsed_seconds = self.elapsed_seconds.saturating_add(1);

        if self.elapsed_seconds == auto_stop_ticks {
            TickOutcome::AutoStop(self.elapsed_seconds)
        } else {
            TickOutcome::Counted(self.elapsed_seconds)
        }
    }

    /// The camera acknowledged the stop.
    pub fn mark_stopped(&mut self) -> bool {
        if self.phase == Phase::StoppingRequested {
            self.phase = Phase::Stopped;
            true
        } else {
            false
        }
    }

    /// Teardown: return to Idle. The elapsed count survives for the review
    /// display and is cleared on the next [`begin`](Self::begin).
    pub fn reset(&mut self) {
        self.id = None;
        self.phase = Phase::Idle;
        self.started_at = None;
        self.ready = false;
        self.stop_requested_early = false;
    }

    /// Zero the countdown shown after a clip ("record again").
    pub fn clear_elapsed(&mut self) {
        self.elapsed_seconds = 0;
    }

    /// Wall time since warm-up began, zero when idle.
    pub fn elapsed_since_start(&self, now: Instant) -> Duration {
        self.started_at
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or_default()
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Session id for log correlation.
    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    /// When warm-up began.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Whether warm-up has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Whether a stop arrived during warm-up.
    pub fn stop_requested_early(&self) -> bool {
        self.stop_requested_early
    }

    /// Countdown value in seconds.
    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_seconds
    }
}
