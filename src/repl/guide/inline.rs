//! # Inline Formatting
//!
//! Splits a single rendered line into plain and strong-emphasis spans.
//! `**text**` pairs are matched non-greedily, so several bold runs may share a line.

use regex::Regex;
use std::sync::LazyLock;

static STRONG_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("Invalid strong span regex"));

/// One run of text inside a rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Text outside any emphasis markers, kept untouched
    Plain(String),
    /// Text that appeared between `**` markers (markers removed)
    Strong(String),
}

impl InlineSpan {
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Plain(text) | InlineSpan::Strong(text) => text,
        }
    }

    pub fn is_strong(&self) -> bool {
        matches!(self, InlineSpan::Strong(_))
    }
}

/// Inline-formatted text carried by every display block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineText {
    spans: Vec<InlineSpan>,
}

impl InlineText {
    /// Parse `**strong**` spans out of a line
    pub fn parse(line: &str) -> Self {
        let mut spans = Vec::new();
        let mut last_end = 0;

        for captures in STRONG_SPAN_REGEX.captures_iter(line) {
            let Some(whole) = captures.get(0) else {
                continue;
            };

            if whole.start() > last_end {
                spans.push(InlineSpan::Plain(line[last_end..whole.start()].to_string()));
            }

            let inner = captures.get(1).map_or("", |m| m.as_str());
            spans.push(InlineSpan::Strong(inner.to_string()));
            last_end = whole.end();
        }

        if last_end < line.len() {
            spans.push(InlineSpan::Plain(line[last_end..].to_string()));
        }

        Self { spans }
    }

    /// Build text with no emphasis at all
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self {
            spans: vec![InlineSpan::Plain(text)],
        }
    }

    pub fn spans(&self) -> &[InlineSpan] {
        &self.spans
    }

    /// Concatenated text of all spans, markers stripped
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(InlineSpan::text).collect()
    }

    pub fn has_emphasis(&self) -> bool {
        self.spans.iter().any(InlineSpan::is_strong)
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}
