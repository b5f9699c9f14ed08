//! # Events Module
//!
//! Input actions from the user, completion events from background tasks
//! and view events from the view model.

pub mod app_events;
pub mod input_events;
pub mod view_events;

pub use app_events::AppEvent;
pub use input_events::UserAction;
pub use view_events::ViewEvent;
