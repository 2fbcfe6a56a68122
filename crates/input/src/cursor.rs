//! Grid cursor for keyboard cell selection.
//!
//! The cursor is view-binding state, not engine state: it survives rejected
//! moves and round resets, and the view highlights whichever cell it sits on.

use crate::types::{CellIndex, Direction, GRID_SIZE};

/// Current keyboard selection on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: CellIndex,
}

impl Cursor {
    /// Start on the center cell.
    pub fn new() -> Self {
        Self {
            index: CellIndex::CENTER,
        }
    }

    pub fn index(&self) -> CellIndex {
        self.index
    }

    /// Move the cursor somewhere directly (e.g. to follow a mouse click).
    pub fn set(&mut self, index: CellIndex) {
        self.index = index;
    }

    /// Step one cell in `direction`, stopping at the grid edge.
    pub fn step(&mut self, direction: Direction) {
        let row = self.index.row();
        let col = self.index.col();
        let (row, col) = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(GRID_SIZE - 1), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(GRID_SIZE - 1)),
        };
        if let Some(index) = CellIndex::from_row_col(row, col) {
            self.index = index;
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ix(i: u8) -> CellIndex {
        CellIndex::new(i).unwrap()
    }

    #[test]
    fn test_cursor_starts_in_center() {
        assert_eq!(Cursor::new().index(), ix(4));
    }

    #[test]
    fn test_step_moves_one_cell() {
        let mut cursor = Cursor::new();
        cursor.step(Direction::Up);
        assert_eq!(cursor.index(), ix(1));
        cursor.step(Direction::Left);
        assert_eq!(cursor.index(), ix(0));
        cursor.step(Direction::Down);
        assert_eq!(cursor.index(), ix(3));
        cursor.step(Direction::Right);
        assert_eq!(cursor.index(), ix(4));
    }

    #[test]
    fn test_step_clamps_at_edges() {
        let mut cursor = Cursor::new();
        cursor.set(ix(0));

        cursor.step(Direction::Up);
        assert_eq!(cursor.index(), ix(0));
        cursor.step(Direction::Left);
        assert_eq!(cursor.index(), ix(0));

        cursor.set(ix(8));
        cursor.step(Direction::Down);
        assert_eq!(cursor.index(), ix(8));
        cursor.step(Direction::Right);
        assert_eq!(cursor.index(), ix(8));
    }

    #[test]
    fn test_set_follows_external_selection() {
        let mut cursor = Cursor::new();
        cursor.set(ix(6));
        assert_eq!(cursor.index(), ix(6));
    }
}
