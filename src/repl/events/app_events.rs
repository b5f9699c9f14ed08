//! # Application Events
//!
//! Completions reported back to the controller by spawned tasks.

use crate::repl::models::CorrectionResult;
use crate::repl::services::CorrectionError;

/// Message sent from a background task to the controller loop
#[derive(Debug)]
pub enum AppEvent {
    /// The in-flight correction request finished
    CorrectionFinished(Result<CorrectionResult, CorrectionError>),
    /// The copied indicator delay elapsed
    CopiedExpired,
}
