//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules, state management, and scoring for a
//! two-player tic-tac-toe session. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: the same move sequence always produces the same state
//! - **Testable**: every rule is covered without a terminal attached
//! - **Portable**: usable from any front end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: flat 3x3 cell storage
//! - [`game_state`]: the move state machine, turn order, and round lifecycle
//! - [`rules`]: win and draw evaluation over the 8 fixed triples
//! - [`score`]: session score counters, kept across rounds
//! - [`snapshot`]: read-only state for views
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::GameState;
//! use tui_tictactoe_core::types::{CellIndex, MoveOutcome, Player};
//!
//! let mut game = GameState::new();
//!
//! // X opens in the center, O answers in a corner.
//! let ix = |i| CellIndex::new(i).unwrap();
//! let outcome = game.apply_move(ix(4)).unwrap();
//! assert_eq!(outcome, MoveOutcome::Continued { next_player: Player::O });
//! game.apply_move(ix(0)).unwrap();
//!
//! assert_eq!(game.to_move(), Some(Player::X));
//! ```

pub mod board;
pub mod game_state;
pub mod rules;
pub mod score;
pub mod snapshot;

pub use tui_tictactoe_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use rules::{evaluate, winning_triple};
pub use score::ScoreBoard;
pub use snapshot::GameSnapshot;
