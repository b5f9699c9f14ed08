//! # Application Controller
//!
//! Runs the interactive session: reads user actions, applies them to the
//! view model, starts background work and redraws after every change.
//!
//! Correction requests and the copied-indicator timer run on spawned tasks
//! that report back through an internal channel, so input keeps flowing
//! while a request is in flight. There is no cancellation: a submitted
//! request always runs to completion.

use crate::repl::events::{AppEvent, UserAction, ViewEvent};
use crate::repl::guide::{render, DisplayBlock, STYLE_GUIDE_TITLE};
use crate::repl::services::{Clipboard, CorrectionService};
use crate::repl::view_models::{CopyOutcome, ViewModel};
use crate::repl::views::{TerminalRenderer, ViewFrame};
use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long the copy control shows "Copied!"
pub const COPIED_RESET_DELAY: Duration = Duration::from_secs(2);

const APP_EVENT_BUFFER: usize = 16;

/// What woke the event loop
enum LoopEvent {
    Input(Option<UserAction>),
    Task(AppEvent),
    Idle,
}

/// The main application controller
pub struct AppController<W: Write> {
    view_model: ViewModel,
    service: Arc<CorrectionService>,
    clipboard: Box<dyn Clipboard>,
    renderer: TerminalRenderer<W>,
    guide_blocks: Vec<DisplayBlock>,
    input: mpsc::Receiver<UserAction>,
    input_closed: bool,
    app_event_sender: mpsc::Sender<AppEvent>,
    app_event_receiver: mpsc::Receiver<AppEvent>,
    pending_copied_resets: usize,
    should_quit: bool,
}

impl<W: Write> AppController<W> {
    pub fn new(
        service: CorrectionService,
        clipboard: Box<dyn Clipboard>,
        renderer: TerminalRenderer<W>,
        input: mpsc::Receiver<UserAction>,
        reference_document: &str,
    ) -> Self {
        let (app_event_sender, app_event_receiver) = mpsc::channel(APP_EVENT_BUFFER);
        let view_model = ViewModel::new(service.is_configured(), reference_document);

        Self {
            view_model,
            service: Arc::new(service),
            clipboard,
            renderer,
            guide_blocks: render(reference_document),
            input,
            input_closed: false,
            app_event_sender,
            app_event_receiver,
            pending_copied_resets: 0,
            should_quit: false,
        }
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    /// Work started by this controller that has not reported back yet
    fn has_outstanding_work(&self) -> bool {
        self.view_model.is_loading() || self.pending_copied_resets > 0
    }

    /// Run until the user quits, or input ends and outstanding work settles
    pub async fn run(&mut self) -> Result<()> {
        self.renderer.render_banner()?;
        self.renderer
            .render_guide(STYLE_GUIDE_TITLE, &self.guide_blocks)?;
        self.renderer.render_notice("Type :help for commands.")?;
        self.refresh()?;

        while !self.should_quit {
            if self.input_closed && !self.has_outstanding_work() {
                break;
            }

            let input_open = !self.input_closed;
            let event = tokio::select! {
                action = self.input.recv(), if input_open => LoopEvent::Input(action),
                Some(event) = self.app_event_receiver.recv() => LoopEvent::Task(event),
                else => LoopEvent::Idle,
            };

            match event {
                LoopEvent::Input(Some(action)) => self.handle_action(action)?,
                LoopEvent::Input(None) => {
                    tracing::debug!("Input closed");
                    self.input_closed = true;
                }
                LoopEvent::Task(event) => self.handle_app_event(event)?,
                LoopEvent::Idle => break,
            }
        }

        tracing::info!("Session finished");
        Ok(())
    }

    /// Apply one user action and redraw
    pub fn handle_action(&mut self, action: UserAction) -> Result<()> {
        tracing::debug!("Handling action: {:?}", action);

        match action {
            UserAction::AppendLine(line) => {
                if self.view_model.is_loading() {
                    self.renderer
                        .render_notice("Still correcting; input ignored.")?;
                } else {
                    self.view_model.append_line(&line);
                }
            }
            UserAction::Edit(text) => {
                if self.view_model.is_loading() {
                    self.renderer
                        .render_notice("Still correcting; input ignored.")?;
                } else {
                    self.view_model.edit(text);
                }
            }
            UserAction::Submit => self.submit(),
            UserAction::Copy => self.copy(),
            UserAction::Clear => {
                if self.view_model.is_loading() {
                    self.renderer
                        .render_notice("Still correcting; clear ignored.")?;
                } else {
                    self.view_model.clear();
                }
            }
            UserAction::ShowGuide => {
                self.renderer
                    .render_guide(STYLE_GUIDE_TITLE, &self.guide_blocks)?;
            }
            UserAction::ShowState => {
                let frame = self.frame();
                self.renderer.render_full(&frame)?;
            }
            UserAction::Help => self.renderer.render_help()?,
            UserAction::Quit => self.should_quit = true,
            UserAction::Unknown(command) => {
                self.renderer.render_notice(&format!(
                    "Unknown command ':{command}'. Type :help for commands."
                ))?;
            }
        }

        self.refresh()
    }

    /// Apply a completion reported by a background task and redraw
    pub fn handle_app_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::CorrectionFinished(result) => self.view_model.finish_submit(result),
            AppEvent::CopiedExpired => {
                self.pending_copied_resets = self.pending_copied_resets.saturating_sub(1);
                self.view_model.reset_copied();
            }
        }
        self.refresh()
    }

    fn submit(&mut self) {
        let Some(request) = self.view_model.begin_submit() else {
            return;
        };

        let service = Arc::clone(&self.service);
        let sender = self.app_event_sender.clone();
        tokio::spawn(async move {
            let result = service.execute(&request).await;
            // Ignore send errors (controller might have been dropped)
            let _ = sender.send(AppEvent::CorrectionFinished(result)).await;
        });
    }

    fn copy(&mut self) {
        if self.view_model.copy_output(self.clipboard.as_mut()) != CopyOutcome::Copied {
            return;
        }

        self.pending_copied_resets += 1;
        let sender = self.app_event_sender.clone();
        tokio::spawn(async move {
            tokio::time::sleep(COPIED_RESET_DELAY).await;
            let _ = sender.send(AppEvent::CopiedExpired).await;
        });
    }

    fn frame(&self) -> ViewFrame {
        ViewFrame::compose(self.view_model.state(), self.view_model.is_configured())
    }

    /// Redraw whatever the last mutations touched
    fn refresh(&mut self) -> Result<()> {
        let events: Vec<ViewEvent> = self.view_model.collect_pending_view_events();
        if events.is_empty() {
            return Ok(());
        }
        let frame = self.frame();
        self.renderer.render_frame(&frame, &events)
    }
}
