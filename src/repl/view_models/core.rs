//! # Core ViewModel Structure
//!
//! Owns the single `ViewState` and the queue of pending view events.
//! Transitions are split across the manager modules by concern.

use crate::repl::events::ViewEvent;
use crate::repl::models::{ErrorNotice, ViewState};
use crate::repl::services::CorrectionError;

/// Authoritative state of the form plus change notifications
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub(super) state: ViewState,
    pub(super) configured: bool,
    pub(super) reference_document: String,
    pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    /// Create a view model for a service that is (or is not) configured.
    /// An unconfigured service shows the configuration error straight away.
    pub fn new(configured: bool, reference_document: impl Into<String>) -> Self {
        let mut state = ViewState::new();
        if !configured {
            state.error = Some(CorrectionError::Configuration.to_notice());
        }

        Self {
            state,
            configured,
            reference_document: reference_document.into(),
            pending_view_events: vec![ViewEvent::StatusChanged],
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_configured(&self) -> bool {
        self.configured
    }

    pub fn reference_document(&self) -> &str {
        &self.reference_document
    }

    pub fn error(&self) -> Option<&ErrorNotice> {
        self.state.error.as_ref()
    }

    /// Replace the current error, if any, with `notice`
    pub(super) fn set_error(&mut self, notice: ErrorNotice) {
        tracing::debug!("Showing {:?} error: {}", notice.kind, notice.message);
        self.state.error = Some(notice);
        self.emit_view_event([ViewEvent::StatusChanged]);
    }

    /// Queue view events; duplicates are collapsed
    pub(super) fn emit_view_event(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        for event in events {
            if !self.pending_view_events.contains(&event) {
                self.pending_view_events.push(event);
            }
        }
    }

    /// Take all view events queued since the last call
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}
