//! # Services Layer
//!
//! Services wrap the external resources the form talks to: the remote
//! correction endpoint and the clipboard.

pub mod clipboard;
pub mod correction;

pub use clipboard::{system_clipboard, Clipboard, MemoryClipboard, SystemClipboard, UnavailableClipboard};
pub use correction::{CorrectionError, CorrectionService, ProtocolFault};
