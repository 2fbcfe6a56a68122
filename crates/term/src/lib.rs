//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into
//! a plain framebuffer that is flushed to the terminal backend, keeping the
//! view itself pure and unit-testable.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Draw the whole frame from one snapshot plus the view-side selection state
//! - Keep precise control over the board geometry so mouse hits map to cells

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, RejectFlash, SelectionView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
