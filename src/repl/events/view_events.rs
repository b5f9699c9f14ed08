//! # View Events
//!
//! Emitted by the view model after a mutation so the renderer knows which
//! sections of the frame to redraw.

/// Events emitted when view updates are needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    /// The draft text changed
    InputChanged,

    /// Corrected text, notes or alternatives changed
    OutputChanged,

    /// Loading flag, copied flag or error changed
    StatusChanged,
}
