//! # Syntax Guard Main Entry Point
//!
//! Style guide corrections from the terminal.

use anyhow::{Context, Result};
use std::io::Read;
use syntaxguard::cmd_args::{AppCommand, CommandLineArgs};
use syntaxguard::config;
use syntaxguard::logging::init_tracing_subscriber;
use syntaxguard::repl::guide::{render, STYLE_GUIDE_CONTENT, STYLE_GUIDE_TITLE};
use syntaxguard::repl::io::spawn_stdin_reader;
use syntaxguard::repl::services::system_clipboard;
use syntaxguard::{run_correct, AppController, CorrectionService, TerminalRenderer};

const INPUT_BUFFER: usize = 64;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing_subscriber()?;

    let cmd_args = CommandLineArgs::parse();
    let color = cmd_args.color() && atty::is(atty::Stream::Stdout);
    let mut renderer = TerminalRenderer::new(std::io::stdout(), color);

    if *cmd_args.command() == AppCommand::Guide {
        return renderer.render_guide(STYLE_GUIDE_TITLE, &render(STYLE_GUIDE_CONTENT));
    }

    let service_config = config::load_service_config(
        cmd_args.profile(),
        cmd_args.endpoint(),
        cmd_args.timeout(),
    )?;
    let service = CorrectionService::new(&service_config)?;

    match cmd_args.command() {
        AppCommand::Correct { text, file, copy } => {
            let text = read_correction_text(text.as_deref(), file.as_deref())?;
            let clipboard = copy.then(system_clipboard);
            let outcome = run_correct(
                &service,
                &mut renderer,
                &text,
                STYLE_GUIDE_CONTENT,
                clipboard,
            )
            .await;
            if let Err(e) = outcome {
                // Already rendered for the user
                tracing::debug!("Correction failed: {e:#}");
                std::process::exit(1);
            }
            Ok(())
        }
        AppCommand::Session | AppCommand::Guide => {
            let input = spawn_stdin_reader(INPUT_BUFFER);
            let mut app = AppController::new(
                service,
                system_clipboard(),
                renderer,
                input,
                STYLE_GUIDE_CONTENT,
            );
            app.run().await
        }
    }
}

/// Text from the argument, the file, or stdin, in that order
fn read_correction_text(text: Option<&str>, file: Option<&std::path::Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text.to_string());
    }

    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read text from stdin")?;
    Ok(text)
}
