//! # View Models
//!
//! The view state controller. `core` holds the struct; the manager modules
//! add the transitions for editing, submitting and copying.

pub mod clipboard_manager;
pub mod core;
pub mod correction_manager;
pub mod input_manager;

pub use clipboard_manager::CopyOutcome;
pub use self::core::ViewModel;
pub use correction_manager::EMPTY_INPUT_MESSAGE;
