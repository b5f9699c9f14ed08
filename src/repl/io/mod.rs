//! # I/O Layer
//!
//! Input arrives as a channel of `UserAction`s; output goes to any `Write`.
//!
//! ```text
//! Production:  AppController ◀── spawn_stdin_reader ◀── stdin
//!                            ──▶ TerminalRenderer<Stdout>
//!
//! Testing:     AppController ◀── scripted_input(Vec<UserAction>)
//!                            ──▶ TerminalRenderer<SharedBuffer>
//! ```

pub mod mock;
pub mod terminal;

pub use mock::{scripted_input, SharedBuffer};
pub use terminal::spawn_stdin_reader;
