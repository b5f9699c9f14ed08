//! # Syntax Guard - Style Guide Corrections in the Terminal
//!
//! Collects free text, sends it with the company style guide to a remote
//! correction service, and shows the corrected text, editor's notes and
//! alternative phrasings next to the rendered style guide.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ViewEvents  ┌──────────────┐   Mutations  ┌───────────┐
//! │    View     │◄──────────────│  ViewModel   │─────────────▶│ ViewState │
//! │             │               │              │              │           │
//! │ - Frame     │               │ - Edit/Clear │              │ - Input   │
//! │ - Terminal  │               │ - Submit     │              │ - Output  │
//! │   Renderer  │               │ - Copy       │              │ - Flags   │
//! └─────────────┘               └──────────────┘              └───────────┘
//!                                      ▲
//!                                      │ UserActions / AppEvents
//!                                      ▼
//!                               ┌──────────────┐   requests  ┌────────────┐
//!                               │  Controller  │────────────▶│  Services  │
//!                               │ - Event Loop │◀────────────│ - HTTP     │
//!                               └──────────────┘   results   │ - Clipboard│
//!                                                            └────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod logging;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
