//! Terminal input handler.
//!
//! Reads stdin line by line and forwards recognised commands to the main
//! application. Stops on a shutdown signal, or on EOF after asking the app to
//! shut down.

use crate::{AppCommand, AppError, AppResult};

use std::panic::Location;

use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::{mpsc, watch},
};
use tracing::{debug, info, instrument, warn};

/// Forwards typed commands to the app.
pub struct InputHandler {
    command_tx: mpsc::Sender<AppCommand>,
}

impl InputHandler {
    /// Create a handler that sends on `command_tx`.
    pub fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self { command_tx }
    }

    /// Read process stdin until shutdown or EOF.
    pub async fn run(&self, shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        self.run_with(BufReader::new(tokio::io::stdin()), shutdown_rx)
            .await
    }

    /// Read `input` until shutdown or EOF.
    #[instrument(skip_all)]
    pub async fn run_with<R>(
        &self,
        input: R,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> AppResult<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Input handler shutting down");
                    break;
                }

                line = lines.next_line() => match line? {
                    Some(line) => {
                        if self.handle_line(&line).await? {
                            break;
                        }
                    }
                    None => {
                        info!("Input closed, requesting shutdown");
                        self.send(AppCommand::Shutdown).await?;
                        break;
                    }
                },
            }
        }

        Ok(())
    }

    /// Returns `true` once a shutdown has been forwarded.
    async fn handle_line(&self, line: &str) -> AppResult<bool> {
        if line.trim().is_empty() {
            return Ok(false);
        }

        let Some(command) = AppCommand::parse(line) else {
            warn!(input = line.trim(), "Unknown command, type 'h' for help");
            return Ok(false);
        };

        debug!(?command, "Input parsed");
        self.send(command).await?;

        Ok(command == AppCommand::Shutdown)
    }

    async fn send(&self, command: AppCommand) -> AppResult<()> {
        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", command, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
