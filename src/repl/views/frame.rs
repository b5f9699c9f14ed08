//! # View Frame
//!
//! Derives everything the user can see from a `ViewState`. Composition is
//! pure and total: any reachable state yields a frame.

use crate::repl::models::ViewState;

pub const INPUT_TEXT_LABEL: &str = "Original Text";
pub const INPUT_TEXT_PLACEHOLDER: &str = "Paste your text here...";
pub const OUTPUT_TEXT_LABEL: &str = "Corrected Text";
pub const OUTPUT_TEXT_PLACEHOLDER: &str = "Corrected text will appear here...";
pub const NOTES_LABEL: &str = "Editor's Notes";
pub const ALTERNATIVES_LABEL: &str = "Alternative Formats:";
pub const SUBMIT_BUTTON_TEXT: &str = "Correct Text";
pub const SUBMIT_BUTTON_LOADING_TEXT: &str = "Correcting...";
pub const COPY_BUTTON_TEXT: &str = "Copy";
pub const COPIED_BUTTON_TEXT: &str = "Copied!";
pub const CLEAR_BUTTON_TEXT: &str = "Clear";

/// A labelled action and whether it can be used right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Control {
    pub label: &'static str,
    pub enabled: bool,
}

/// Everything visible for one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFrame {
    pub submit: Control,
    pub clear: Control,
    /// Only present when there is corrected text
    pub copy: Option<Control>,
    pub input_enabled: bool,
    pub input_lines: usize,
    pub loading: bool,
    pub output_text: Option<String>,
    pub notes: Vec<String>,
    pub alternatives: Vec<String>,
    pub error: Option<String>,
}

impl ViewFrame {
    pub fn compose(state: &ViewState, configured: bool) -> Self {
        let has_input = state.has_input();
        let has_output_text = !state.output_text.trim().is_empty();

        let submit = Control {
            label: if state.is_loading {
                SUBMIT_BUTTON_LOADING_TEXT
            } else {
                SUBMIT_BUTTON_TEXT
            },
            enabled: !state.is_loading && has_input && configured,
        };

        let clear = Control {
            label: CLEAR_BUTTON_TEXT,
            enabled: !state.is_loading && (has_input || has_output_text),
        };

        let copy = state.has_output().then_some(Control {
            label: if state.copied {
                COPIED_BUTTON_TEXT
            } else {
                COPY_BUTTON_TEXT
            },
            enabled: !state.copied,
        });

        Self {
            submit,
            clear,
            copy,
            input_enabled: !state.is_loading,
            input_lines: state.input_text.lines().count(),
            loading: state.is_loading,
            output_text: state.has_output().then(|| state.output_text.clone()),
            notes: state.notes.clone(),
            alternatives: state.alternatives.clone(),
            error: state.error.as_ref().map(|e| e.message.clone()),
        }
    }

    pub fn has_notes_section(&self) -> bool {
        !self.notes.is_empty() || !self.alternatives.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::models::ErrorNotice;

    #[test]
    fn idle_empty_state_should_disable_submit_and_clear_and_hide_copy() {
        let frame = ViewFrame::compose(&ViewState::new(), true);
        assert_eq!(frame.submit.label, SUBMIT_BUTTON_TEXT);
        assert!(!frame.submit.enabled);
        assert!(!frame.clear.enabled);
        assert!(frame.copy.is_none());
        assert!(frame.input_enabled);
        assert!(frame.output_text.is_none());
        assert!(!frame.has_notes_section());
    }

    #[test]
    fn loading_state_should_show_loading_label_and_lock_controls() {
        let state = ViewState {
            input_text: "Jane Doe".to_string(),
            is_loading: true,
            ..ViewState::default()
        };
        let frame = ViewFrame::compose(&state, true);
        assert_eq!(frame.submit.label, SUBMIT_BUTTON_LOADING_TEXT);
        assert!(!frame.submit.enabled);
        assert!(!frame.clear.enabled);
        assert!(!frame.input_enabled);
        assert!(frame.loading);
    }

    #[test]
    fn unconfigured_service_should_disable_submit() {
        let state = ViewState {
            input_text: "Jane Doe".to_string(),
            ..ViewState::default()
        };
        assert!(!ViewFrame::compose(&state, false).submit.enabled);
        assert!(ViewFrame::compose(&state, true).submit.enabled);
    }

    #[test]
    fn output_should_show_copy_control_with_copied_label() {
        let mut state = ViewState {
            output_text: "President, Technology, StarTech".to_string(),
            notes: vec!["Removed 'of' and 'at'".to_string()],
            ..ViewState::default()
        };
        let frame = ViewFrame::compose(&state, true);
        assert_eq!(
            frame.copy,
            Some(Control {
                label: COPY_BUTTON_TEXT,
                enabled: true
            })
        );
        assert!(frame.clear.enabled);
        assert!(frame.has_notes_section());

        state.copied = true;
        let frame = ViewFrame::compose(&state, true);
        assert_eq!(frame.copy.map(|c| c.label), Some(COPIED_BUTTON_TEXT));
    }

    #[test]
    fn error_should_be_carried_as_message() {
        let state = ViewState {
            error: Some(ErrorNotice::validation("Please enter some text to correct.")),
            ..ViewState::default()
        };
        let frame = ViewFrame::compose(&state, true);
        assert_eq!(
            frame.error.as_deref(),
            Some("Please enter some text to correct.")
        );
    }
}
