//! # Input Events
//!
//! User actions read from the session input. Lines starting with `:` are
//! commands; anything else is appended to the draft. A leading `::` escapes
//! a literal colon.

/// Action requested by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Append one line to the draft
    AppendLine(String),
    /// Replace the whole draft
    Edit(String),
    Submit,
    Copy,
    Clear,
    ShowGuide,
    /// Redraw the complete frame
    ShowState,
    Help,
    Quit,
    /// Unrecognised `:command`
    Unknown(String),
}

impl UserAction {
    /// Parse one line of session input
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(literal) = line.strip_prefix("::") {
            return UserAction::AppendLine(format!(":{literal}"));
        }

        let Some(command_line) = line.strip_prefix(':') else {
            return UserAction::AppendLine(line.to_string());
        };

        let (command, argument) = match command_line.split_once(char::is_whitespace) {
            Some((command, argument)) => (command, argument.trim_start()),
            None => (command_line.trim(), ""),
        };

        match command {
            "submit" | "s" => UserAction::Submit,
            "copy" | "y" => UserAction::Copy,
            "clear" | "c" => UserAction::Clear,
            "guide" | "g" => UserAction::ShowGuide,
            "show" => UserAction::ShowState,
            "help" | "h" => UserAction::Help,
            "quit" | "q" => UserAction::Quit,
            "draft" => UserAction::Edit(argument.to_string()),
            other => UserAction::Unknown(other.to_string()),
        }
    }
}
