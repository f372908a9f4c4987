//! Camera capability backed by an `ffmpeg` child process.
//!
//! Each capture spawns one ffmpeg process writing an MP4 into the clips
//! directory. ffmpeg enforces the hard cap itself through `-t`; a graceful
//! stop writes `q` to its stdin so the container is finalised. The child is
//! killed if the capture future is dropped, and any output file of a capture
//! that did not finish cleanly is deleted.

use crate::{AppError, AppResult, config::CameraConfig};

use std::{
    ffi::OsString,
    panic::Location,
    path::{Path, PathBuf},
    process::Stdio,
    sync::atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use clip_recorder_core::{
    CameraCapability, CapabilityError, CaptureConfig, MediaReference, PermissionStatus,
};
use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    process::{ChildStderr, ChildStdin, Command},
    sync::Mutex,
};
use tracing::{Instrument, debug, info, instrument, warn};
use uuid::Uuid;

/// ffmpeg capture input device family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Video4Linux2 video with ALSA audio.
    V4l2,
    /// macOS AVFoundation, video and audio in one input.
    AvFoundation,
    /// Windows DirectShow, video and audio in one input.
    DShow,
}

impl InputFormat {
    /// Input family of the platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            InputFormat::AvFoundation
        } else if cfg!(target_os = "windows") {
            InputFormat::DShow
        } else {
            InputFormat::V4l2
        }
    }

    /// Whether device names refer to filesystem nodes.
    fn uses_device_nodes(self) -> bool {
        self == InputFormat::V4l2
    }
}

/// Build the ffmpeg argument list for one capture.
pub fn capture_args(
    format: InputFormat,
    devices: &CameraConfig,
    config: &CaptureConfig,
    output: &Path,
) -> Vec<OsString> {
    let video = devices.video_device(config.facing);
    let microphone = devices.microphone_device.as_str();

    let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "warning", "-nostats", "-y"]
        .iter()
        .map(OsString::from)
        .collect();

    let mut push = |items: &[&str]| args.extend(items.iter().map(OsString::from));

    match format {
        InputFormat::V4l2 => {
            push(&["-f", "v4l2", "-i", video]);
            if config.audio_enabled {
                push(&["-f", "alsa", "-i", microphone]);
            }
        }
        InputFormat::AvFoundation => {
            let audio = if config.audio_enabled {
                microphone
            } else {
                "none"
            };
            let input = format!("{}:{}", video, audio);
            push(&["-f", "avfoundation", "-i", input.as_str()]);
        }
        InputFormat::DShow => {
            let input = if config.audio_enabled {
                format!("video={}:audio={}", video, microphone)
            } else {
                format!("video={}", video)
            };
            push(&["-f", "dshow", "-i", input.as_str()]);
        }
    }

    let max_duration = format!("{:.3}", config.max_duration.as_secs_f64());
    let scale = format!("scale=-2:{}", config.quality.height());
    push(&[
        "-t",
        max_duration.as_str(),
        "-vf",
        scale.as_str(),
        "-c:v",
        "libx264",
        "-preset",
        "veryfast",
        "-pix_fmt",
        "yuv420p",
    ]);

    if config.audio_enabled {
        push(&["-c:a", "aac"]);
    } else {
        push(&["-an"]);
    }

    push(&["-movflags", "+faststart"]);
    args.push(output.as_os_str().to_owned());

    args
}

/// [`CameraCapability`] that records through ffmpeg.
pub struct FfmpegCamera {
    devices: CameraConfig,
    clips_dir: PathBuf,
    format: InputFormat,
    ready: AtomicBool,
    stdin: Mutex<Option<ChildStdin>>,
}

impl FfmpegCamera {
    /// Camera for the current platform writing into `clips_dir`.
    ///
    /// Not ready until [`probe`](Self::probe) succeeds.
    pub fn new(devices: CameraConfig, clips_dir: PathBuf) -> Self {
        Self {
            devices,
            clips_dir,
            format: InputFormat::current(),
            ready: AtomicBool::new(false),
            stdin: Mutex::new(None),
        }
    }

    /// Check that the ffmpeg binary runs and mark the camera ready.
    #[instrument(skip(self), fields(ffmpeg = ?self.devices.ffmpeg_path))]
    pub async fn probe(&self) -> AppResult<()> {
        let status = Command::new(&self.devices.ffmpeg_path)
            .arg("-version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| AppError::CameraError {
                reason: format!("Failed to launch ffmpeg: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if !status.success() {
            return Err(AppError::CameraError {
                reason: format!("ffmpeg -version exited with {}", status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.ready.store(true, Ordering::SeqCst);
        info!(format = ?self.format, "ffmpeg available, camera ready");

        Ok(())
    }

    fn device_available(&self, device: &str) -> bool {
        if device.trim().is_empty() {
            return false;
        }
        !self.format.uses_device_nodes() || Path::new(device).exists()
    }

    async fn clips_dir_writable(&self) -> bool {
        if let Err(e) = tokio::fs::create_dir_all(&self.clips_dir).await {
            warn!(clips_dir = ?self.clips_dir, error = ?e, "Cannot create clips directory");
            return false;
        }

        match tokio::fs::metadata(&self.clips_dir).await {
            Ok(meta) => meta.is_dir() && !meta.permissions().readonly(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl CameraCapability for FfmpegCamera {
    #[instrument(skip(self))]
    async fn request_permissions(&self) -> PermissionStatus {
        let camera = self.device_available(&self.devices.back_device)
            || self.device_available(&self.devices.front_device);
        let microphone = !self.devices.microphone_device.trim().is_empty();
        let media_library = self.clips_dir_writable().await;

        let status = PermissionStatus {
            camera,
            microphone,
            media_library,
        };
        debug!(?status, "Device access checked");

        status
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    #[instrument(skip(self))]
    async fn start_capture(&self, config: CaptureConfig) -> Result<MediaReference, CapabilityError> {
        tokio::fs::create_dir_all(&self.clips_dir).await?;
        let output = self.clips_dir.join(format!("clip-{}.mp4", Uuid::new_v4()));
        let args = capture_args(self.format, &self.devices, &config, &output);
        let partial = PartialClip::new(output.clone());

        let mut child = Command::new(&self.devices.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let stdin = child.stdin.take().ok_or("ffmpeg stdin unavailable")?;
        if let Some(stderr) = child.stderr.take() {
            tokio::spawn(log_stderr(stderr).in_current_span());
        }

        *self.stdin.lock().await = Some(stdin);
        info!(output = ?output, "ffmpeg capture started");

        let status = child.wait().await;
        self.stdin.lock().await.take();
        let status = status?;

        if status.success() {
            partial.keep();
            info!(output = ?output, "ffmpeg capture finished");
            Ok(MediaReference::new(output))
        } else {
            Err(format!("ffmpeg exited with {}", status).into())
        }
    }

    #[instrument(skip(self))]
    async fn stop_capture(&self) -> Result<(), CapabilityError> {
        let Some(mut stdin) = self.stdin.lock().await.take() else {
            return Err("no ffmpeg capture running".into());
        };

        stdin.write_all(b"q\n").await?;
        stdin.flush().await?;
        debug!("Sent quit to ffmpeg");

        Ok(())
    }
}

/// Output file that is removed on drop unless [`keep`](Self::keep) was called.
struct PartialClip {
    path: Option<PathBuf>,
}

impl PartialClip {
    fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn keep(mut self) {
        self.path = None;
    }
}

impl Drop for PartialClip {
    fn drop(&mut self) {
        let Some(path) = self.path.take() else {
            return;
        };

        match std::fs::remove_file(&path) {
            Ok(()) => debug!(path = ?path, "Discarded partial clip"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = ?path, error = ?e, "Failed to discard partial clip"),
        }
    }
}

async fn log_stderr(stderr: ChildStderr) {
    let mut lines = BufReader::new(stderr).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        debug!(line = %line, "ffmpeg");
    }
}
