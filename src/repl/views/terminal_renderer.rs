//! # Terminal Renderer
//!
//! Draws display blocks and view frames to any `Write` sink with crossterm
//! styling. With colour off the same layout is written as plain text.

use super::frame::{
    Control, ViewFrame, ALTERNATIVES_LABEL, INPUT_TEXT_LABEL, INPUT_TEXT_PLACEHOLDER, NOTES_LABEL,
    OUTPUT_TEXT_LABEL, OUTPUT_TEXT_PLACEHOLDER,
};
use crate::repl::events::ViewEvent;
use crate::repl::guide::{
    DisplayBlock, InlineSpan, InlineText, ParagraphStyle, APP_SUBTITLE, APP_TITLE,
};
use crate::repl::models::CorrectionResult;
use anyhow::Result;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;

const BULLET: &str = "‣";
const NOTE_MARK: &str = "✓";
const SEPARATOR_WIDTH: usize = 48;
const LIST_INDENT: &str = "   ";

const HELP_TEXT: &[(&str, &str)] = &[
    ("<text>", "append a line to the Original Text"),
    (":draft <text>", "replace the Original Text"),
    (":submit, :s", "send the text for correction"),
    (":copy, :y", "copy the Corrected Text to the clipboard"),
    (":clear, :c", "clear text, notes and errors"),
    (":guide, :g", "show the style guide"),
    (":show", "show the whole form"),
    (":help, :h", "show this help"),
    (":quit, :q", "exit"),
    ("::<text>", "append a line starting with ':'"),
];

/// Text style used for a run of output
#[derive(Debug, Clone, Copy, Default)]
struct TextStyle {
    color: Option<Color>,
    bold: bool,
    dim: bool,
}

impl TextStyle {
    const PLAIN: TextStyle = TextStyle {
        color: None,
        bold: false,
        dim: false,
    };

    fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::PLAIN
        }
    }

    fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

/// Terminal-based view renderer using crossterm
pub struct TerminalRenderer<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, text: &str, style: TextStyle) -> Result<()> {
        if !self.color {
            queue!(self.out, Print(text))?;
            return Ok(());
        }

        if let Some(color) = style.color {
            queue!(self.out, SetForegroundColor(color))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        queue!(
            self.out,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;
        Ok(())
    }

    fn newline(&mut self) -> Result<()> {
        queue!(self.out, Print("\n"))?;
        Ok(())
    }

    fn println(&mut self, text: &str, style: TextStyle) -> Result<()> {
        self.print(text, style)?;
        self.newline()
    }

    fn print_inline(&mut self, text: &InlineText, base: TextStyle) -> Result<()> {
        for span in text.spans() {
            match span {
                InlineSpan::Plain(plain) => self.print(plain, base)?,
                InlineSpan::Strong(strong) => {
                    self.print(strong, TextStyle::color(Color::White).bold())?
                }
            }
        }
        Ok(())
    }

    fn print_control(&mut self, control: &Control) -> Result<()> {
        let label = format!("[{}]", control.label);
        let style = if control.enabled {
            TextStyle::color(Color::Cyan).bold()
        } else {
            TextStyle::color(Color::DarkGrey).dim()
        };
        self.print(&label, style)
    }

    /// Application title and subtitle
    pub fn render_banner(&mut self) -> Result<()> {
        self.println(APP_TITLE, TextStyle::color(Color::Blue).bold())?;
        self.println(APP_SUBTITLE, TextStyle::color(Color::Grey))?;
        self.newline()?;
        self.out.flush()?;
        Ok(())
    }

    /// Draw the style guide blocks under `title`
    pub fn render_guide(&mut self, title: &str, blocks: &[DisplayBlock]) -> Result<()> {
        self.println(title, TextStyle::color(Color::Blue).bold())?;

        for block in blocks {
            match block {
                DisplayBlock::Heading(text) => {
                    self.newline()?;
                    self.print_inline(text, TextStyle::color(Color::Cyan).bold())?;
                    self.newline()?;
                }
                DisplayBlock::Paragraph { text, style } => {
                    if *style == ParagraphStyle::Label {
                        self.newline()?;
                        self.print_inline(text, TextStyle::color(Color::White).bold())?;
                    } else {
                        self.print_inline(text, TextStyle::color(Color::Grey))?;
                    }
                    self.newline()?;
                }
                DisplayBlock::ListStart | DisplayBlock::ListEnd => {}
                DisplayBlock::ListItem { depth, text } => {
                    self.print(&LIST_INDENT.repeat(*depth), TextStyle::PLAIN)?;
                    self.print(&format!("{BULLET} "), TextStyle::color(Color::Cyan))?;
                    self.print_inline(text, TextStyle::color(Color::Grey))?;
                    self.newline()?;
                }
                DisplayBlock::Separator => {
                    self.newline()?;
                    self.println(
                        &"─".repeat(SEPARATOR_WIDTH),
                        TextStyle::color(Color::DarkGrey),
                    )?;
                }
            }
        }

        self.newline()?;
        self.out.flush()?;
        Ok(())
    }

    /// Command summary for the interactive session
    pub fn render_help(&mut self) -> Result<()> {
        let width = HELP_TEXT
            .iter()
            .map(|(command, _)| command.chars().count())
            .max()
            .unwrap_or(0);
        for (command, description) in HELP_TEXT {
            self.print(
                &format!("  {command:<width$}  "),
                TextStyle::color(Color::Cyan),
            )?;
            self.println(description, TextStyle::PLAIN)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Informational line that is not part of the frame
    pub fn render_notice(&mut self, message: &str) -> Result<()> {
        self.println(message, TextStyle::color(Color::Yellow))?;
        self.out.flush()?;
        Ok(())
    }

    /// Redraw the sections selected by `events`
    pub fn render_frame(&mut self, frame: &ViewFrame, events: &[ViewEvent]) -> Result<()> {
        if events.contains(&ViewEvent::InputChanged) && frame.input_lines == 0 {
            self.print(&format!("{INPUT_TEXT_LABEL}: "), TextStyle::PLAIN.bold())?;
            self.println(INPUT_TEXT_PLACEHOLDER, TextStyle::color(Color::DarkGrey))?;
        }
        if events.contains(&ViewEvent::OutputChanged) && frame.output_text.is_some() {
            self.render_output(frame)?;
        }
        if events.contains(&ViewEvent::StatusChanged) {
            self.render_status(frame)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Draw every section of the frame
    pub fn render_full(&mut self, frame: &ViewFrame) -> Result<()> {
        self.print(&format!("{INPUT_TEXT_LABEL}: "), TextStyle::PLAIN.bold())?;
        if frame.input_lines == 0 {
            self.println(INPUT_TEXT_PLACEHOLDER, TextStyle::color(Color::DarkGrey))?;
        } else {
            self.println(
                &format!("{} line(s)", frame.input_lines),
                TextStyle::color(Color::Grey),
            )?;
        }

        if frame.output_text.is_some() {
            self.render_output(frame)?;
        } else {
            self.print(&format!("{OUTPUT_TEXT_LABEL}: "), TextStyle::PLAIN.bold())?;
            self.println(OUTPUT_TEXT_PLACEHOLDER, TextStyle::color(Color::DarkGrey))?;
        }

        self.render_status(frame)?;
        self.out.flush()?;
        Ok(())
    }

    fn render_output(&mut self, frame: &ViewFrame) -> Result<()> {
        self.newline()?;
        self.println(OUTPUT_TEXT_LABEL, TextStyle::color(Color::Cyan).bold())?;
        if let Some(text) = &frame.output_text {
            self.println(text, TextStyle::PLAIN)?;
        }
        self.render_notes(&frame.notes, &frame.alternatives)
    }

    fn render_notes(&mut self, notes: &[String], alternatives: &[String]) -> Result<()> {
        if notes.is_empty() && alternatives.is_empty() {
            return Ok(());
        }

        self.newline()?;
        self.println(NOTES_LABEL, TextStyle::color(Color::Cyan).bold())?;
        for note in notes {
            self.print(&format!("  {NOTE_MARK} "), TextStyle::color(Color::Cyan))?;
            self.println(note, TextStyle::PLAIN)?;
        }

        if !alternatives.is_empty() {
            self.newline()?;
            self.println(ALTERNATIVES_LABEL, TextStyle::color(Color::Cyan).bold())?;
            for alternative in alternatives {
                for line in alternative.lines() {
                    self.print("  │ ", TextStyle::color(Color::DarkGrey))?;
                    self.println(line, TextStyle::color(Color::White))?;
                }
                self.newline()?;
            }
        }
        Ok(())
    }

    fn render_status(&mut self, frame: &ViewFrame) -> Result<()> {
        if let Some(error) = &frame.error {
            self.print("Error: ", TextStyle::color(Color::Red).bold())?;
            self.println(error, TextStyle::color(Color::Red))?;
        }

        self.print_control(&frame.submit)?;
        self.print(" ", TextStyle::PLAIN)?;
        self.print_control(&frame.clear)?;
        if let Some(copy) = &frame.copy {
            self.print(" ", TextStyle::PLAIN)?;
            self.print_control(copy)?;
        }
        self.newline()
    }

    /// Print a correction result outside the interactive session
    pub fn render_result(&mut self, result: &CorrectionResult) -> Result<()> {
        self.println(OUTPUT_TEXT_LABEL, TextStyle::color(Color::Cyan).bold())?;
        self.println(&result.corrected_text, TextStyle::PLAIN)?;
        self.render_notes(&result.notes, &result.alternatives)?;
        self.out.flush()?;
        Ok(())
    }

    /// Print an error message outside the interactive session
    pub fn render_error(&mut self, message: &str) -> Result<()> {
        self.print("Error: ", TextStyle::color(Color::Red).bold())?;
        self.println(message, TextStyle::color(Color::Red))?;
        self.out.flush()?;
        Ok(())
    }
}
