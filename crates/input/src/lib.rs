//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`types::GameAction`] values and provides the grid cursor used
//! for keyboard cell selection.

pub mod cursor;
pub mod map;

pub use tui_tictactoe_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
