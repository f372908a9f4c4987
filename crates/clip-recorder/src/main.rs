//! Clip-Recorder: short camera clips from the terminal, recorded through ffmpeg.

mod app;
mod app_command;
mod config;
mod error;
mod ffmpeg_camera;
mod input_handler;
mod output_handler;
mod screen;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::AppCommand,
    error::{AppError, Result as AppResult},
    ffmpeg_camera::FfmpegCamera,
    input_handler::InputHandler,
    output_handler::OutputHandler,
    screen::Screen,
};

use crate::config::Config;

use std::{sync::Arc, time::Duration};

use clip_recorder_core::{CameraCapability, RecorderCommand, RecordingController, command_channel};
use tokio::sync::{mpsc, watch};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "clip_recorder=debug,clip_recorder_core=debug";

/// Application entry point.
fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Logs go to stderr so the terminal screen on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(run(config));

    // The stdin reader may still be parked in a blocking read.
    rt.shutdown_timeout(Duration::from_secs(1));
}

async fn run(config: Config) {
    let timing = config.recording.timing();
    let camera = Arc::new(FfmpegCamera::new(
        config.camera.clone(),
        config.recording.clips_dir.clone(),
    ));

    // Not fatal: the controller refuses to start until the camera is ready.
    if let Err(e) = camera.probe().await {
        warn!(error = ?e, "ffmpeg probe failed, recording disabled");
    }

    let controller = RecordingController::new(camera as Arc<dyn CameraCapability>, timing);
    let events = controller.subscribe();
    let (recorder, recorder_rx) = command_channel(32);
    let controller_task = tokio::spawn(controller.run(recorder_rx));

    let (command_tx, command_rx) = mpsc::channel(32);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    if let Err(e) = recorder.send(RecorderCommand::RequestPermissions).await {
        error!(error = ?e, "Failed to request permissions");
    }

    let input_handler = InputHandler::new(command_tx);

    let app = App {
        recorder,
        events,
        output_handler: OutputHandler::new(config.behaviour.clone()),
        screen: Screen::default(),
        command_rx,
        shutdown_tx,
    };

    tokio::join!(
        async {
            if let Err(e) = input_handler.run(shutdown_rx).await {
                error!(error = ?e, "Input handler error");
            }
        },
        async {
            if let Err(e) = app.run().await {
                error!(error = ?e, "App error");
            }
        }
    );

    match tokio::time::timeout(Duration::from_secs(2), controller_task).await {
        Ok(Ok(())) => info!("Recording controller stopped cleanly"),
        Ok(Err(e)) => error!(error = ?e, "Recording controller task panicked"),
        Err(_) => warn!("Recording controller did not stop within timeout"),
    }
}
