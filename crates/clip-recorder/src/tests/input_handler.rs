use crate::{AppCommand, InputHandler};

use clip_recorder_core::RecorderCommand;
use tokio::sync::{mpsc, watch};

/// WHAT: Recognised lines are forwarded in order, unknown lines skipped
/// WHY: The app must see exactly what the user asked for
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_typed_lines_when_running_then_commands_forwarded_in_order() {
    // Given: Input with a typo and a blank line, ending in quit
    let (command_tx, mut command_rx) = mpsc::channel(32);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);
    let handler = InputHandler::new(command_tx);
    let input: &[u8] = b"r\nbogus\n\ns\no\nq\nr\n";

    // When: Running over the input
    handler.run_with(input, shutdown_rx).await.unwrap();
    drop(handler);

    // Then: Commands arrive in order and nothing after quit
    let mut received = Vec::new();
    while let Some(command) = command_rx.recv().await {
        received.push(command);
    }
    assert_eq!(
        received,
        vec![
            AppCommand::Recorder(RecorderCommand::Start),
            AppCommand::Recorder(RecorderCommand::Stop),
            AppCommand::OpenReview,
            AppCommand::Shutdown,
        ]
    );
}

/// WHAT: End of input requests shutdown
/// WHY: A closed terminal must not leave the recorder running
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_input_closed_when_running_then_shutdown_sent() {
    // Given: Input without a quit command
    let (command_tx, mut command_rx) = mpsc::channel(32);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);
    let handler = InputHandler::new(command_tx);
    let input: &[u8] = b"f\n";

    // When: Running to EOF
    handler.run_with(input, shutdown_rx).await.unwrap();

    // Then: Flip, then shutdown
    assert_eq!(
        command_rx.recv().await,
        Some(AppCommand::Recorder(RecorderCommand::ToggleFacing))
    );
    assert_eq!(command_rx.recv().await, Some(AppCommand::Shutdown));
}

/// WHAT: Sending fails cleanly when the app is gone
/// WHY: Channel errors surface as AppError instead of panicking
#[tokio::test]
async fn given_closed_channel_when_command_typed_then_error() {
    // Given: The app side has been dropped
    let (command_tx, command_rx) = mpsc::channel(1);
    drop(command_rx);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);
    let handler = InputHandler::new(command_tx);
    let input: &[u8] = b"r\n";

    // When: Running
    let result = handler.run_with(input, shutdown_rx).await;

    // Then: Send failure reported
    assert!(result.is_err());
}

/// WHAT: Shutdown signal stops the handler while input is pending
/// WHY: The app ends the input loop when it exits first
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_shutdown_signal_when_waiting_for_input_then_returns() {
    // Given: A reader that never produces a line
    let (command_tx, _command_rx) = mpsc::channel(1);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let handler = InputHandler::new(command_tx);
    let (_writer, reader) = tokio::io::duplex(64);

    // When: Shutdown is signalled
    shutdown_tx.send(true).unwrap();
    let result = handler
        .run_with(tokio::io::BufReader::new(reader), shutdown_rx)
        .await;

    // Then: Returns without error
    assert!(result.is_ok());
}
