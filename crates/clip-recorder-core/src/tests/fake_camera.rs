use crate::{CameraCapability, CapabilityError, CaptureConfig, MediaReference, PermissionStatus};

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use tokio::{sync::Notify, time};

/// Scripted camera: capture runs until `stop_capture` or `max_duration`.
pub(crate) struct FakeCamera {
    ready: AtomicBool,
    permissions: PermissionStatus,
    fail_start: bool,
    fail_stop: bool,
    start_calls: AtomicUsize,
    stop_calls: AtomicUsize,
    stopped: Notify,
    last_config: Mutex<Option<CaptureConfig>>,
}

impl FakeCamera {
    fn build(ready: bool, permissions: PermissionStatus, fail_start: bool, fail_stop: bool) -> Arc<Self> {
        Arc::new(Self {
            ready: AtomicBool::new(ready),
            permissions,
            fail_start,
            fail_stop,
            start_calls: AtomicUsize::new(0),
            stop_calls: AtomicUsize::new(0),
            stopped: Notify::new(),
            last_config: Mutex::new(None),
        })
    }

    pub(crate) fn ready() -> Arc<Self> {
        Self::build(true, PermissionStatus::granted(), false, false)
    }

    pub(crate) fn not_ready() -> Arc<Self> {
        Self::build(false, PermissionStatus::granted(), false, false)
    }

    pub(crate) fn denied() -> Arc<Self> {
        let status = PermissionStatus {
            camera: true,
            microphone: false,
            media_library: true,
        };
        Self::build(true, status, false, false)
    }

    pub(crate) fn failing_start() -> Arc<Self> {
        Self::build(true, PermissionStatus::granted(), true, false)
    }

    pub(crate) fn failing_stop() -> Arc<Self> {
        Self::build(true, PermissionStatus::granted(), false, true)
    }

    pub(crate) fn start_calls(&self) -> usize {
        self.start_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn stop_calls(&self) -> usize {
        self.stop_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_config(&self) -> Option<CaptureConfig> {
        *self.last_config.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl CameraCapability for FakeCamera {
    async fn request_permissions(&self) -> PermissionStatus {
        self.permissions
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    async fn start_capture(&self, config: CaptureConfig) -> Result<MediaReference, CapabilityError> {
        let call = self.start_calls.fetch_add(1, Ordering::SeqCst) + 1;
        *self.last_config.lock().unwrap_or_else(|e| e.into_inner()) = Some(config);

        if self.fail_start {
            return Err("camera is busy".into());
        }

        tokio::select! {
            _ = self.stopped.notified() => {}
            _ = time::sleep(config.max_duration) => {}
        }

        Ok(MediaReference::new(format!("/tmp/clip-{}.mp4", call)))
    }

    async fn stop_capture(&self) -> Result<(), CapabilityError> {
        self.stop_calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_stop {
            return Err("camera refused to stop".into());
        }

        self.stopped.notify_one();
        Ok(())
    }
}
