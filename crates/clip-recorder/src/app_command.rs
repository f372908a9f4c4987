use clip_recorder_core::RecorderCommand;

/// Commands sent from the input handler to the main application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Forward to the recording controller.
    Recorder(RecorderCommand),
    /// Open the clip under review in the system viewer.
    OpenReview,
    /// Print the command list.
    Help,
    /// Request application shutdown.
    Shutdown,
}

impl AppCommand {
    /// Map one line of terminal input to a command.
    ///
    /// Matching ignores case and surrounding whitespace. Blank or unknown
    /// input yields `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let command = match line.trim().to_ascii_lowercase().as_str() {
            "r" | "record" => AppCommand::Recorder(RecorderCommand::Start),
            "s" | "stop" => AppCommand::Recorder(RecorderCommand::Stop),
            "f" | "flip" => AppCommand::Recorder(RecorderCommand::ToggleFacing),
            "p" | "permissions" => AppCommand::Recorder(RecorderCommand::RequestPermissions),
            "n" | "new" => AppCommand::Recorder(RecorderCommand::ResetReview),
            "o" | "open" => AppCommand::OpenReview,
            "h" | "help" | "?" => AppCommand::Help,
            "q" | "quit" | "exit" => AppCommand::Shutdown,
            _ => return None,
        };

        Some(command)
    }
}
