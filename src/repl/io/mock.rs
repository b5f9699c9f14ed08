//! # Mock I/O Implementations for Testing
//!
//! A cloneable in-memory writer for capturing rendered output and a helper
//! that turns a fixed list of actions into a closed input channel.

use crate::repl::events::UserAction;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Writer whose clones all append to the same buffer
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded
    pub fn contents(&self) -> String {
        self.bytes
            .lock()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut bytes = self
            .bytes
            .lock()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Channel pre-filled with `actions` whose sender is already dropped
pub fn scripted_input(actions: Vec<UserAction>) -> mpsc::Receiver<UserAction> {
    let (sender, receiver) = mpsc::channel(actions.len().max(1));
    for action in actions {
        if sender.try_send(action).is_err() {
            tracing::warn!("Scripted input channel full");
        }
    }
    receiver
}
