//! # Input Management
//!
//! Draft editing and the clear action.

use crate::repl::events::ViewEvent;
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Replace the draft. A configuration error is dropped while typing; it
    /// comes back on the next submit if the service is still unconfigured.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.state.input_text = text.into();
        self.emit_view_event([ViewEvent::InputChanged]);

        if self.state.has_configuration_error() {
            self.state.error = None;
            self.emit_view_event([ViewEvent::StatusChanged]);
        }
    }

    /// Append one line to the draft
    pub fn append_line(&mut self, line: &str) {
        let text = if self.state.input_text.is_empty() {
            line.to_string()
        } else {
            format!("{}\n{}", self.state.input_text, line)
        };
        self.edit(text);
    }

    /// Reset draft and output. Only a configuration error survives.
    pub fn clear(&mut self) {
        self.state.input_text.clear();
        self.state.output_text.clear();
        self.state.notes.clear();
        self.state.alternatives.clear();
        self.state.copied = false;

        if !self.state.has_configuration_error() {
            self.state.error = None;
        }

        tracing::debug!("Form cleared");
        self.emit_view_event([
            ViewEvent::InputChanged,
            ViewEvent::OutputChanged,
            ViewEvent::StatusChanged,
        ]);
    }
}

#[cfg(test)]
mod tests {
    use crate::repl::models::{ErrorKind, ErrorNotice};
    use crate::repl::view_models::ViewModel;

    #[test]
    fn edit_should_set_input_and_clear_configuration_error() {
        let mut vm = ViewModel::new(false, "guide");
        vm.edit("Jane Doe");
        assert_eq!(vm.state().input_text, "Jane Doe");
        assert!(vm.error().is_none());
    }

    #[test]
    fn edit_should_keep_other_errors() {
        let mut vm = ViewModel::new(true, "guide");
        vm.set_error(ErrorNotice::new(ErrorKind::Service, "boom"));
        vm.edit("text");
        assert_eq!(vm.error().map(|e| e.message.as_str()), Some("boom"));
    }

    #[test]
    fn append_line_should_join_with_newlines() {
        let mut vm = ViewModel::new(true, "guide");
        vm.append_line("John Doe,");
        vm.append_line("President of Technology at StarTech");
        assert_eq!(
            vm.state().input_text,
            "John Doe,\nPresident of Technology at StarTech"
        );
    }

    #[test]
    fn clear_should_reset_everything_but_configuration_error() {
        let mut vm = ViewModel::new(false, "guide");
        vm.state.input_text = "in".to_string();
        vm.state.output_text = "out".to_string();
        vm.state.notes = vec!["note".to_string()];
        vm.state.alternatives = vec!["alt".to_string()];
        vm.state.copied = true;

        vm.clear();

        let state = vm.state();
        assert!(state.input_text.is_empty());
        assert!(state.output_text.is_empty());
        assert!(state.notes.is_empty());
        assert!(state.alternatives.is_empty());
        assert!(!state.copied);
        assert!(state.has_configuration_error());
    }

    #[test]
    fn clear_should_drop_non_configuration_errors() {
        let mut vm = ViewModel::new(true, "guide");
        vm.set_error(ErrorNotice::validation("Please enter some text to correct."));
        vm.clear();
        assert!(vm.error().is_none());
    }
}
