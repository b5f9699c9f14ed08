//! # One-shot Correction
//!
//! Non-interactive path: correct one piece of text, print the result and
//! optionally copy it.

use crate::repl::models::CorrectionResult;
use crate::repl::services::{Clipboard, CorrectionService};
use crate::repl::views::TerminalRenderer;
use anyhow::Result;
use std::io::Write;

/// Correct `text`, render the outcome and return the result
pub async fn run_correct<W: Write>(
    service: &CorrectionService,
    renderer: &mut TerminalRenderer<W>,
    text: &str,
    reference_document: &str,
    clipboard: Option<Box<dyn Clipboard>>,
) -> Result<CorrectionResult> {
    let result = match service.correct(text, reference_document).await {
        Ok(result) => result,
        Err(e) => {
            renderer.render_error(&e.to_string())?;
            return Err(e.into());
        }
    };

    renderer.render_result(&result)?;

    if let Some(mut clipboard) = clipboard {
        if !result.corrected_text.is_empty() {
            if let Err(e) = clipboard.write_text(&result.corrected_text) {
                let message = format!("Failed to copy text to clipboard: {e}");
                renderer.render_error(&message)?;
                return Err(anyhow::anyhow!(message));
            }
            renderer.render_notice("Copied!")?;
        }
    }

    Ok(result)
}
