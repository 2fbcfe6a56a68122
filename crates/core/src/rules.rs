//! Win and draw evaluation - pure functions of the board
//!
//! The 8 candidate triples are checked in a fixed order (rows top-to-bottom,
//! columns left-to-right, then the two diagonals). In a legal game at most one
//! triple can be complete, so the order only decides which triple gets
//! reported for an artificially constructed board.

use tui_tictactoe_types::{GameStatus, Player, Triple, WIN_TRIPLES};

use crate::board::Board;

/// Find the first completed triple, if any, together with its owner.
pub fn winning_triple(board: &Board) -> Option<(Player, Triple)> {
    let cells = board.cells();
    for triple in WIN_TRIPLES {
        let [a, b, c] = triple;
        if let Some(player) = cells[a as usize] {
            if cells[b as usize] == Some(player) && cells[c as usize] == Some(player) {
                return Some((player, triple));
            }
        }
    }
    None
}

/// Evaluate the board into a game status.
///
/// A completed triple wins; a full board with no winner is a draw; anything
/// else means the game continues.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some((winner, triple)) = winning_triple(board) {
        return GameStatus::Won { winner, triple };
    }
    if board.is_full() {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}
