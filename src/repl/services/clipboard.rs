//! # Clipboard
//!
//! Write-only clipboard abstraction used by the copy action.
//! The system implementation wraps arboard; the memory implementation keeps
//! the text in-process so it can be inspected.

use anyhow::Result;
use std::sync::{Arc, Mutex};

/// Destination for copied text
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// System clipboard-based implementation
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("clipboard", &"<system clipboard>")
            .finish()
    }
}

impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let clipboard = arboard::Clipboard::new()
            .map_err(|e| anyhow::anyhow!("Failed to access system clipboard: {}", e))?;
        Ok(Self { clipboard })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        tracing::debug!("Copying {} characters to system clipboard", text.len());
        self.clipboard
            .set_text(text.to_string())
            .map_err(|e| anyhow::anyhow!("Failed to set clipboard text: {}", e))
    }
}

/// In-process clipboard; clones share the same contents
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    content: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last text written, if any
    pub fn contents(&self) -> Option<String> {
        self.content.lock().ok().and_then(|content| content.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        tracing::debug!("Copying {} characters to memory clipboard", text.len());
        let mut content = self
            .content
            .lock()
            .map_err(|e| anyhow::anyhow!("Failed to lock clipboard: {}", e))?;
        *content = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that always refuses writes, carrying the reason
#[derive(Debug, Clone)]
pub struct UnavailableClipboard {
    reason: String,
}

impl UnavailableClipboard {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Clipboard for UnavailableClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        Err(anyhow::anyhow!("{}", self.reason))
    }
}

/// Open the system clipboard, or a placeholder that reports why it could not be opened
pub fn system_clipboard() -> Box<dyn Clipboard> {
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            tracing::warn!("System clipboard unavailable: {}", e);
            Box::new(UnavailableClipboard::new(e.to_string()))
        }
    }
}
