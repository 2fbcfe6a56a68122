//! Board module - manages the 3x3 game grid
//!
//! The board is a flat array of 9 cells in row-major order (index = row * 3 + col).
//! Each cell is empty or holds one player's mark. Marks are only ever written
//! into empty cells by the engine and only removed by a full clear.

use arrayvec::ArrayVec;

use tui_tictactoe_types::{Cell, CellIndex, CELL_COUNT};

/// The game board as flat cell storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT as usize],
}

impl Board {
    /// Create a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT as usize],
        }
    }

    /// Get the cell at `index`.
    pub fn get(&self, index: CellIndex) -> Cell {
        self.cells[index.get() as usize]
    }

    /// Write `mark` into the cell at `index`.
    pub fn set(&mut self, index: CellIndex, mark: Cell) {
        self.cells[index.get() as usize] = mark;
    }

    /// Whether the cell at `index` is empty.
    pub fn is_empty_cell(&self, index: CellIndex) -> bool {
        self.get(index).is_none()
    }

    /// Whether every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Indices of all empty cells, in board order. Allocation-free.
    pub fn empty_cells(&self) -> ArrayVec<CellIndex, { CELL_COUNT as usize }> {
        let mut empty = ArrayVec::new();
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                // Index comes from iterating the fixed-size array, always in range.
                if let Some(index) = CellIndex::new(i as u8) {
                    empty.push(index);
                }
            }
        }
        empty
    }

    /// Clear the entire board.
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT as usize];
    }

    /// Get a reference to the internal cells array.
    pub fn cells(&self) -> &[Cell; CELL_COUNT as usize] {
        &self.cells
    }

    /// Create from a flat array (for tests and tools).
    pub fn from_cells(cells: [Cell; CELL_COUNT as usize]) -> Self {
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
