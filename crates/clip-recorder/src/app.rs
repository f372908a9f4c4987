use crate::{AppCommand, AppResult, OutputHandler, Screen, screen::HELP};

use clip_recorder_core::{RecorderCommand, RecorderEvent, RecorderHandle};
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{error, info, instrument, warn};

/// Main application state.
///
/// Bridges terminal commands to the recording controller and renders the
/// controller's events.
pub struct App {
    pub(crate) recorder: RecorderHandle,
    pub(crate) events: broadcast::Receiver<RecorderEvent>,
    pub(crate) output_handler: OutputHandler,
    pub(crate) screen: Screen,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Clip-Recorder starting");
        println!("{}", HELP);

        loop {
            tokio::select! {
                Some(command) = self.command_rx.recv() => {
                    if command == AppCommand::Shutdown {
                        info!("Shutdown requested");
                        break;
                    }
                    if let Err(e) = self.handle_command(command).await {
                        error!(error = ?e, "Command failed");
                    }
                }

                event = self.events.recv() => match event {
                    Ok(event) => self.handle_event(event).await,
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Renderer fell behind controller events");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        info!("Controller stopped, shutting down");
                        break;
                    }
                },

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        if let Err(e) = self.recorder.send(RecorderCommand::Shutdown).await {
            warn!(error = ?e, "Controller already stopped");
        }

        let _ = self.shutdown_tx.send(true);
        info!("Clip-Recorder shut down successfully");

        Ok(())
    }

    pub(crate) async fn handle_command(&mut self, command: AppCommand) -> AppResult<()> {
        match command {
            AppCommand::Recorder(command) => self.recorder.send(command).await?,
            AppCommand::OpenReview if self.screen.phase().is_active() => {
                println!("Stop recording first.");
            }
            AppCommand::OpenReview => match self.screen.review() {
                Some(clip) => {
                    if let Err(e) = self.output_handler.open_clip(clip) {
                        error!(error = ?e, "Failed to open clip");
                    }
                }
                None => println!("No clip to open."),
            },
            AppCommand::Help => println!("{}", HELP),
            AppCommand::Shutdown => {}
        }

        Ok(())
    }

    async fn handle_event(&mut self, event: RecorderEvent) {
        for line in self.screen.apply(&event) {
            println!("{}", line);
        }

        match event {
            RecorderEvent::Notice(notice) => {
                if let Err(e) = self.output_handler.notify(&notice).await {
                    warn!(error = ?e, "Desktop notification failed");
                }
            }
            RecorderEvent::ReviewReady(clip) if self.output_handler.open_on_review() => {
                if let Err(e) = self.output_handler.open_clip(&clip) {
                    error!(error = ?e, "Failed to open clip");
                }
            }
            _ => {}
        }
    }
}
