//! Read-only state snapshot consumed by views
//!
//! The engine exposes its full visible state as a plain value so rendering
//! never needs mutable or structural access to the engine itself.

use tui_tictactoe_types::{Cell, GameStatus, Player, CELL_COUNT};

use crate::score::ScoreBoard;

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Board contents, row-major.
    pub board: [Cell; CELL_COUNT as usize],
    /// Player to move. `None` once the round has ended.
    pub to_move: Option<Player>,
    pub status: GameStatus,
    pub score: ScoreBoard,
    /// Current round number, starting at 1. Bumped by each reset.
    pub round: u32,
}

impl GameSnapshot {
    /// Whether moves are currently being accepted.
    pub fn in_progress(&self) -> bool {
        self.status == GameStatus::InProgress
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [None; CELL_COUNT as usize],
            to_move: Some(Player::X),
            status: GameStatus::InProgress,
            score: ScoreBoard::new(),
            round: 1,
        }
    }
}
