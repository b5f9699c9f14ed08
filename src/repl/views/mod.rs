//! # Views
//!
//! `frame` derives the visible form from the view state; the terminal
//! renderer draws frames and style guide blocks.

pub mod frame;
pub mod terminal_renderer;

pub use frame::{Control, ViewFrame};
pub use terminal_renderer::TerminalRenderer;
