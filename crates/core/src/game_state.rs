//! Game state module - the move state machine
//!
//! Ties together board, rules, and score. One instance is one session:
//! `apply_move` drives a round forward, `reset` starts the next round, and
//! the score accumulates across rounds until the instance is dropped.

use tui_tictactoe_types::{CellIndex, GameStatus, MoveError, MoveOutcome, Player};

use crate::board::Board;
use crate::rules;
use crate::score::ScoreBoard;
use crate::snapshot::GameSnapshot;

/// Complete engine state for one session.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    to_move: Player,
    status: GameStatus,
    score: ScoreBoard,
    /// Rejects a duplicate interaction event delivered while a move is being
    /// applied. Never held across a return.
    processing: bool,
    round: u32,
}

impl GameState {
    /// Create a fresh session: empty board, X to move, zero score.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            score: ScoreBoard::new(),
            processing: false,
            round: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or `None` once the round has ended.
    pub fn to_move(&self) -> Option<Player> {
        if self.status.is_terminal() {
            None
        } else {
            Some(self.to_move)
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Current round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    #[cfg(test)]
    pub fn set_processing(&mut self, value: bool) {
        self.processing = value;
    }

    /// Attempt to place the current player's mark at `index`.
    ///
    /// Rejections are checked in a fixed order and leave all state untouched:
    /// a re-entrant call fails with [`MoveError::Busy`], a finished round with
    /// [`MoveError::GameOver`], and an occupied target cell with
    /// [`MoveError::CellOccupied`] naming the occupant.
    ///
    /// An accepted move writes exactly one mark, then either ends the round
    /// (status and one score counter update together) or passes the turn to
    /// the opponent.
    pub fn apply_move(&mut self, index: CellIndex) -> Result<MoveOutcome, MoveError> {
        if self.processing {
            return Err(MoveError::Busy);
        }
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if let Some(occupant) = self.board.get(index) {
            return Err(MoveError::CellOccupied(occupant));
        }

        self.processing = true;
        self.board.set(index, Some(self.to_move));

        let outcome = match rules::evaluate(&self.board) {
            GameStatus::InProgress => {
                self.to_move = self.to_move.opponent();
                MoveOutcome::Continued {
                    next_player: self.to_move,
                }
            }
            status @ GameStatus::Won { winner, triple } => {
                self.status = status;
                self.score.record_win(winner);
                MoveOutcome::Won { winner, triple }
            }
            GameStatus::Draw => {
                self.status = GameStatus::Draw;
                self.score.record_draw();
                MoveOutcome::Draw
            }
        };

        self.processing = false;
        Ok(outcome)
    }

    /// Start the next round: clear the board, X to move, status back to
    /// in-progress. The session score is kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.processing = false;
        self.round += 1;
    }

    /// Fill a caller-owned snapshot without allocating.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = *self.board.cells();
        out.to_move = self.to_move();
        out.status = self.status;
        out.score = self.score;
        out.round = self.round;
    }

    /// Read-only state for views.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
