//! # Correction Form
//!
//! The form as a terminal session. Models hold data, view models own
//! transitions, views draw, services talk to the outside and controllers
//! drive the loop.

pub mod controllers;
pub mod events;
pub mod guide;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use controllers::{run_correct, AppController, COPIED_RESET_DELAY};
pub use events::{AppEvent, UserAction, ViewEvent};
pub use guide::{render, DisplayBlock, InlineSpan, InlineText, ParagraphStyle};
pub use models::{CorrectionRequest, CorrectionResult, ErrorKind, ErrorNotice, ViewState};
pub use services::{Clipboard, CorrectionError, CorrectionService, MemoryClipboard};
pub use view_models::ViewModel;
pub use views::{TerminalRenderer, ViewFrame};
