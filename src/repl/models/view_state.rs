//! View state model
//!
//! The single piece of mutable UI state. It holds data only; every
//! transition lives in the view model so that re-rendering can be derived
//! from this struct alone.

/// Category of a user-facing error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Correction endpoint is not set up
    Configuration,
    /// Remote service answered with an error
    Service,
    /// Remote service answered with something we could not use
    Protocol,
    /// Network-level failure
    Transport,
    /// Local problem with the user's action (blank input, clipboard)
    Validation,
}

/// Error shown to the user; at most one at a time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorNotice {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn is_configuration(&self) -> bool {
        self.kind == ErrorKind::Configuration
    }
}

/// Complete interactive state of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub input_text: String,
    pub output_text: String,
    pub notes: Vec<String>,
    pub alternatives: Vec<String>,
    pub is_loading: bool,
    pub copied: bool,
    pub error: Option<ErrorNotice>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_input(&self) -> bool {
        !self.input_text.trim().is_empty()
    }

    pub fn has_output(&self) -> bool {
        !self.output_text.is_empty()
    }

    pub fn has_configuration_error(&self) -> bool {
        self.error.as_ref().is_some_and(ErrorNotice::is_configuration)
    }
}
