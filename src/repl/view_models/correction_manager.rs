//! # Correction Management
//!
//! The submit transition, split into a guarded start that hands back the
//! request to send and a completion that records the outcome.

use crate::repl::events::ViewEvent;
use crate::repl::models::{CorrectionRequest, CorrectionResult, ErrorNotice};
use crate::repl::services::CorrectionError;
use crate::repl::view_models::core::ViewModel;

/// Shown when submit is pressed with a blank draft
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to correct.";

impl ViewModel {
    /// Start a submission. Returns the request to send, or `None` when the
    /// draft is blank (an error is shown) or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<CorrectionRequest> {
        if self.state.is_loading {
            tracing::debug!("Submit ignored: a correction is already in flight");
            return None;
        }

        if !self.state.has_input() {
            self.set_error(ErrorNotice::validation(EMPTY_INPUT_MESSAGE));
            return None;
        }

        self.state.is_loading = true;
        self.state.error = None;
        self.state.output_text.clear();
        self.state.notes.clear();
        self.state.alternatives.clear();
        tracing::debug!("Correction started");
        self.emit_view_event([ViewEvent::OutputChanged, ViewEvent::StatusChanged]);

        Some(CorrectionRequest::new(
            self.state.input_text.clone(),
            self.reference_document.clone(),
        ))
    }

    /// Record the outcome of the in-flight submission
    pub fn finish_submit(&mut self, result: Result<CorrectionResult, CorrectionError>) {
        self.state.is_loading = false;

        match result {
            Ok(result) => {
                tracing::debug!(
                    "Correction finished: {} notes, {} alternatives",
                    result.notes.len(),
                    result.alternatives.len()
                );
                self.state.output_text = result.corrected_text;
                self.state.notes = result.notes;
                self.state.alternatives = result.alternatives;
                self.state.error = None;
            }
            Err(e) => {
                tracing::debug!("Correction failed: {e}");
                self.state.error = Some(e.to_notice());
            }
        }

        self.emit_view_event([ViewEvent::OutputChanged, ViewEvent::StatusChanged]);
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }
}
