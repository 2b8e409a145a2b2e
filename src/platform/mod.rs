//! Platform abstraction layer
//!
//! Handles browser-side concerns for:
//! - Keyboard input events

pub mod input;

pub use input::{Action, Direction, InputState, action_for_code};
