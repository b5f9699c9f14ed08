//! # Models Module
//!
//! Plain data carried between the services, the view model and the views.

pub mod correction;
pub mod view_state;

pub use correction::{CorrectionRequest, CorrectionResult};
pub use view_state::{ErrorKind, ErrorNotice, ViewState};
