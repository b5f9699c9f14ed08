//! # Controllers
//!
//! The interactive session loop and the one-shot correction path.

pub mod app_controller;
pub mod oneshot;

pub use app_controller::{AppController, COPIED_RESET_DELAY};
pub use oneshot::run_correct;
