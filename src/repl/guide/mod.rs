//! # Style Guide
//!
//! The reference document and the renderer that turns it into display blocks.
//! Rendering is a pure function of the input text; presentation lives in `views`.

pub mod inline;
pub mod renderer;
pub mod style_guide;

pub use inline::{InlineSpan, InlineText};
pub use renderer::{classify_line, list_depth, render, DisplayBlock, LineKind, ParagraphStyle};
pub use style_guide::{APP_SUBTITLE, APP_TITLE, STYLE_GUIDE_CONTENT, STYLE_GUIDE_TITLE};
