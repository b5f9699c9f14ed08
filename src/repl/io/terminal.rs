//! # Terminal Input
//!
//! Reads session input from stdin on a dedicated thread and forwards parsed
//! actions over a channel. The thread is detached so a pending read never
//! blocks shutdown.

use crate::repl::events::UserAction;
use std::io::BufRead;
use tokio::sync::mpsc;

/// Start reading stdin; the receiver closes at end of input
pub fn spawn_stdin_reader(buffer: usize) -> mpsc::Receiver<UserAction> {
    let (sender, receiver) = mpsc::channel(buffer);

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to read input: {e}");
                    break;
                }
            };

            let action = UserAction::parse(&line);
            let quit = action == UserAction::Quit;
            if sender.blocking_send(action).is_err() || quit {
                break;
            }
        }
        tracing::debug!("Input reader finished");
    });

    receiver
}
