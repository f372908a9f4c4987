//! Recording controller.
//!
//! Owns the single [`RecordingSession`] together with the countdown ticker,
//! the warm-up timer and the in-flight capture task. All three are polled from
//! one `select!` loop in [`RecordingController::run`], so every transition is
//! applied by this type and nothing else.

use crate::{
    CoreResult, RecorderError,
    capability::{
        CameraCapability, CapabilityError, CaptureConfig, Facing, MediaReference, PermissionStatus,
    },
    controller::{Notice, RecorderCommand, RecorderEvent, TimingConfig},
    session::{Phase, ReadyOutcome, RecordingSession, StopDecision, TickOutcome},
};

use std::{future, panic::Location, pin::Pin, sync::Arc};

use error_location::ErrorLocation;
use tokio::{
    sync::{broadcast, mpsc},
    task::{JoinError, JoinHandle},
    time::{self, Instant, Interval, MissedTickBehavior, Sleep},
};
use tracing::{Instrument, debug, error, info, info_span, instrument, warn};
use uuid::Uuid;

const EVENT_CAPACITY: usize = 64;

type CaptureOutcome = Result<MediaReference, CapabilityError>;

/// Drives a [`CameraCapability`] through the recording lifecycle.
pub struct RecordingController {
    camera: Arc<dyn CameraCapability>,
    timing: TimingConfig,
    session: RecordingSession,
    facing: Facing,
    permissions: Option<PermissionStatus>,
    review: Option<MediaReference>,
    ticker: Option<Interval>,
    ready_timer: Option<Pin<Box<Sleep>>>,
    capture: Option<JoinHandle<CaptureOutcome>>,
    events: broadcast::Sender<RecorderEvent>,
}

impl RecordingController {
    /// Create an idle controller for `camera`.
    pub fn new(camera: Arc<dyn CameraCapability>, timing: TimingConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);

        Self {
            camera,
            timing,
            session: RecordingSession::default(),
            facing: Facing::default(),
            permissions: None,
            review: None,
            ticker: None,
            ready_timer: None,
            capture: None,
            events,
        }
    }

    /// Receive every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<RecorderEvent> {
        self.events.subscribe()
    }

    /// Process commands and timer wake-ups until shutdown.
    ///
    /// Returns when a [`RecorderCommand::Shutdown`] arrives or every
    /// [`RecorderHandle`](crate::RecorderHandle) has been dropped. A live
    /// session is torn down on the way out.
    #[instrument(skip_all)]
    pub async fn run(mut self, mut commands: mpsc::Receiver<RecorderCommand>) {
        info!(timing = ?self.timing, "Recording controller running");

        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(RecorderCommand::Shutdown) | None => break,
                    Some(command) => self.handle_command(command).await,
                },

                _ = next_tick(&mut self.ticker) => {
                    self.tick().await;
                }

                _ = warm_up_elapsed(&mut self.ready_timer) => {
                    self.on_warm_up_elapsed().await;
                }

                result = capture_finished(&mut self.capture) => {
                    self.on_capture_finished(result);
                }
            }
        }

        if self.session.phase().is_active() {
            warn!(session_id = ?self.session.id(), "Discarding active session on shutdown");
            self.teardown();
        }

        info!("Recording controller stopped");
    }

    async fn handle_command(&mut self, command: RecorderCommand) {
        debug!(?command, phase = ?self.session.phase(), "Command received");

        match command {
            RecorderCommand::Start => self.start(),
            RecorderCommand::Stop => self.request_stop().await,
            RecorderCommand::ToggleFacing => {
                self.toggle_facing();
            }
            RecorderCommand::RequestPermissions => {
                self.request_permissions().await;
            }
            RecorderCommand::ResetReview => self.reset_review(),
            RecorderCommand::Shutdown => {}
        }
    }

    /// Begin a session: warm-up, countdown and capture launch.
    ///
    /// Refusals (session already live, permissions denied, camera not ready)
    /// raise a notice and leave any live session untouched.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        match self.try_start() {
            Ok(session_id) => info!(session_id = %session_id, "Recording started"),
            Err(e) => {
                warn!(error = ?e, "Start refused");
                self.notify(Notice::failure(&e));
            }
        }
    }

    #[track_caller]
    fn try_start(&mut self) -> CoreResult<Uuid> {
        if self.session.phase().is_active() {
            return Err(RecorderError::SessionActive {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let Some(status) = self.permissions.filter(|s| !s.all_granted()) {
            return Err(RecorderError::PermissionDenied {
                status,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !self.camera.is_ready() {
            return Err(RecorderError::CapabilityNotReady {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = Instant::now();
        let session_id = self.session.begin(now)?;
        self.emit(RecorderEvent::PhaseChanged(Phase::WarmingUp));

        if self.review.take().is_some() {
            self.emit(RecorderEvent::ReviewCleared);
        }

        let period = self.timing.tick_interval;
        let mut ticker = time::interval_at(now + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.ticker = Some(ticker);

        self.ready_timer = Some(Box::pin(time::sleep_until(now + self.timing.warm_up())));

        let config = CaptureConfig {
            quality: self.timing.quality,
            max_duration: self.timing.hard_cap,
            audio_enabled: true,
            facing: self.facing,
        };
        let pre_start = self.timing.pre_start_delay;
        let camera = Arc::clone(&self.camera);

        self.capture = Some(tokio::spawn(
            async move {
                if !pre_start.is_zero() {
                    time::sleep(pre_start).await;
                }
                camera.start_capture(config).await
            }
            .instrument(info_span!("capture", session_id = %session_id)),
        ));

        self.emit(RecorderEvent::Tick { elapsed_seconds: 0 });

        Ok(session_id)
    }

    /// Ask the live session to stop.
    ///
    /// Before warm-up completes the stop is only recorded; the warm-up timer
    /// performs it later. After warm-up the stop runs immediately.
    #[instrument(skip(self))]
    pub async fn request_stop(&mut self) {
        let previous = self.session.phase();

        match self.session.request_stop() {
            StopDecision::Deferred => {
                if previous != Phase::StoppingRequested {
                    self.emit(RecorderEvent::PhaseChanged(Phase::StoppingRequested));
                }
                info!(session_id = ?self.session.id(), "Stop deferred until warm-up completes");
            }
            StopDecision::Proceed => {
                self.emit(RecorderEvent::PhaseChanged(Phase::StoppingRequested));
                self.finish().await;
            }
            StopDecision::Ignored => debug!(phase = ?previous, "Stop ignored"),
        }
    }

    /// Advance the countdown; stops automatically at the ceiling.
    ///
    /// Returns the count to display.
    pub async fn tick(&mut self) -> u32 {
        match self.session.tick(self.timing.auto_stop_ticks) {
            TickOutcome::Counted(elapsed_seconds) => {
                self.emit(RecorderEvent::Tick { elapsed_seconds });
                elapsed_seconds
            }
            TickOutcome::AutoStop(elapsed_seconds) => {
                self.emit(RecorderEvent::Tick { elapsed_seconds });
                info!(
                    session_id = ?self.session.id(),
                    elapsed_seconds,
                    "Maximum duration reached, stopping"
                );
                self.request_stop().await;
                elapsed_seconds
            }
            TickOutcome::Inactive => self.session.elapsed_seconds(),
        }
    }

    /// Switch cameras. Refused while a session is live.
    pub fn toggle_facing(&mut self) -> Facing {
        if self.session.phase().is_active() {
            warn!(facing = ?self.facing, "Camera switch refused while recording");
            return self.facing;
        }

        self.facing = self.facing.toggled();
        info!(facing = ?self.facing, "Camera switched");
        self.emit(RecorderEvent::FacingChanged(self.facing));

        self.facing
    }

    /// Ask the camera for access and remember the answer.
    #[instrument(skip(self))]
    pub async fn request_permissions(&mut self) -> PermissionStatus {
        let status = self.camera.request_permissions().await;

        if status.all_granted() {
            info!("Camera permissions granted");
        } else {
            warn!(?status, "Camera permissions denied");
        }

        self.permissions = Some(status);
        self.emit(RecorderEvent::Permissions(status));

        status
    }

    /// Dismiss the review and zero the countdown ("record again").
    pub fn reset_review(&mut self) {
        if self.session.phase().is_active() {
            debug!("Review reset ignored while recording");
            return;
        }

        self.review = None;
        self.session.clear_elapsed();
        self.emit(RecorderEvent::ReviewCleared);
    }

    /// Warm-up timer fired: stops may take effect from now on.
    pub(crate) async fn on_warm_up_elapsed(&mut self) {
        self.ready_timer = None;

        match self.session.mark_ready() {
            ReadyOutcome::Recording => {
                info!(session_id = ?self.session.id(), "Camera warmed up");
                self.emit(RecorderEvent::PhaseChanged(Phase::Recording));
            }
            ReadyOutcome::StopDue => {
                info!(session_id = ?self.session.id(), "Camera warmed up, running deferred stop");
                self.finish().await;
            }
            ReadyOutcome::Ignored => {}
        }
    }

    /// The capture task resolved without a stop from us: either the camera
    /// hit its hard cap or it failed.
    pub(crate) fn on_capture_finished(&mut self, result: Result<CaptureOutcome, JoinError>) {
        self.capture = None;

        let outcome = match result {
            Ok(Ok(media)) => Ok(media),
            Ok(Err(source)) => Err(RecorderError::CaptureStartFailed {
                source,
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => Err(RecorderError::CaptureStartFailed {
                source: Box::new(e),
                location: ErrorLocation::from(Location::caller()),
            }),
        };

        match outcome {
            Ok(media) => {
                info!(session_id = ?self.session.id(), media = %media, "Capture ended at the camera's limit");
                self.complete(media);
            }
            Err(e) => {
                error!(session_id = ?self.session.id(), error = ?e, "Recording error");
                self.teardown();
                self.notify(Notice::failure(&e));
            }
        }
    }

    /// Perform the physical stop and resolve the session either way.
    async fn finish(&mut self) {
        let session_id = self.session.id();

        match self.stop_and_collect().await {
            Ok(media) => {
                info!(session_id = ?session_id, media = %media, "Recording stopped successfully");
                self.complete(media);
            }
            Err(e) => {
                error!(session_id = ?session_id, error = ?e, "Error stopping recording");
                self.teardown();
                self.notify(Notice::failure(&e));
            }
        }
    }

    async fn stop_and_collect(&mut self) -> CoreResult<MediaReference> {
        let elapsed = self.session.elapsed_since_start(Instant::now());

        if elapsed < self.timing.min_duration {
            return Err(RecorderError::RecordingTooShort {
                elapsed,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.camera
            .stop_capture()
            .await
            .map_err(|source| RecorderError::CaptureStopFailed {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        if self.session.mark_stopped() {
            self.emit(RecorderEvent::PhaseChanged(Phase::Stopped));
        }

        let Some(mut capture) = self.capture.take() else {
            return Err(RecorderError::CaptureStopFailed {
                source: "capture was not running".into(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        match time::timeout(self.timing.capture_settle_timeout, &mut capture).await {
            Ok(Ok(Ok(media))) => Ok(media),
            Ok(Ok(Err(source))) => Err(RecorderError::CaptureStopFailed {
                source,
                location: ErrorLocation::from(Location::caller()),
            }),
            Ok(Err(e)) => Err(RecorderError::CaptureStopFailed {
                source: Box::new(e),
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => {
                capture.abort();
                Err(RecorderError::CaptureStopFailed {
                    source: Box::new(e),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    fn complete(&mut self, media: MediaReference) {
        self.review = Some(media.clone());
        self.teardown();
        self.emit(RecorderEvent::ReviewReady(media));
        self.notify(Notice::recorded());
    }

    /// Clear timers, drop any unfinished capture, and return to Idle.
    /// Runs on every exit path.
    fn teardown(&mut self) {
        self.ticker = None;
        self.ready_timer = None;

        if let Some(capture) = self.capture.take() {
            capture.abort();
            debug!("Discarded unfinished capture");
        }

        let was_active = self.session.phase().is_active();
        self.session.reset();

        if was_active {
            self.emit(RecorderEvent::PhaseChanged(Phase::Idle));
        }
    }

    fn notify(&self, notice: Notice) {
        self.emit(RecorderEvent::Notice(notice));
    }

    fn emit(&self, event: RecorderEvent) {
        // No subscribers is fine; the UI may not be attached.
        let _ = self.events.send(event);
    }

    /// Current session state.
    pub fn session(&self) -> &RecordingSession {
        &self.session
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    /// Selected camera.
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Clip from the last successful session, until dismissed.
    pub fn review(&self) -> Option<&MediaReference> {
        self.review.as_ref()
    }

    /// Whether the countdown timer is armed.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    /// Whether a capture task is outstanding.
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(ticker) => {
            ticker.tick().await;
        }
        None => future::pending().await,
    }
}

async fn warm_up_elapsed(timer: &mut Option<Pin<Box<Sleep>>>) {
    match timer {
        Some(timer) => timer.as_mut().await,
        None => future::pending().await,
    }
}

async fn capture_finished(
    capture: &mut Option<JoinHandle<CaptureOutcome>>,
) -> Result<CaptureOutcome, JoinError> {
    match capture {
        Some(capture) => capture.await,
        None => future::pending().await,
    }
}
