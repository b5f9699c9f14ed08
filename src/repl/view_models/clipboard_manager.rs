//! # Clipboard Management
//!
//! The copy action and the timed reset of the copied indicator.

use crate::repl::events::ViewEvent;
use crate::repl::models::ErrorNotice;
use crate::repl::services::Clipboard;
use crate::repl::view_models::core::ViewModel;

/// What happened when copy was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing to copy, or already showing as copied
    Skipped,
    /// Text written; the caller schedules `reset_copied`
    Copied,
    Failed,
}

impl ViewModel {
    /// Copy the corrected text to `clipboard`
    pub fn copy_output(&mut self, clipboard: &mut dyn Clipboard) -> CopyOutcome {
        if self.state.output_text.is_empty() || self.state.copied {
            return CopyOutcome::Skipped;
        }

        match clipboard.write_text(&self.state.output_text) {
            Ok(()) => {
                self.state.copied = true;
                self.emit_view_event([ViewEvent::StatusChanged]);
                CopyOutcome::Copied
            }
            Err(e) => {
                tracing::error!("Failed to copy text: {e}");
                self.state.copied = false;
                self.set_error(ErrorNotice::validation(format!(
                    "Failed to copy text to clipboard: {e}"
                )));
                CopyOutcome::Failed
            }
        }
    }

    /// Turn the copied indicator off again
    pub fn reset_copied(&mut self) {
        if self.state.copied {
            self.state.copied = false;
            self.emit_view_event([ViewEvent::StatusChanged]);
        }
    }
}
