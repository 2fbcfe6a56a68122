//! Core types shared across the application
//!
//! This crate contains pure data types with no external dependencies:
//! players and cells, validated board indices, game status, move outcomes
//! and rejection reasons, and the input-facing action vocabulary.

/// Board side length (the grid is square).
pub const GRID_SIZE: u8 = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: u8 = GRID_SIZE * GRID_SIZE;

/// Duration of the transient visual cue shown when a move is rejected
/// (milliseconds). Consumed by the view binding, not the engine.
pub const REJECT_FLASH_MS: u32 = 400;

/// One of the two players, identified by their mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who moves after this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    pub fn opponent(&self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark drawn on the board for this player.
    pub fn as_char(&self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }

    /// Uppercase string form, used in status and score text.
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A cell on the board
///
/// - `None`: empty cell
/// - `Some(Player)`: cell holding that player's mark
///
/// Used by the board as a flat array of cells.
pub type Cell = Option<Player>;

/// A validated board position in `0..CELL_COUNT`, row-major order.
///
/// Construction is fallible, so APIs taking a `CellIndex` never need to
/// bounds-check again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex(u8);

impl CellIndex {
    /// The center cell of the grid.
    pub const CENTER: CellIndex = CellIndex(GRID_SIZE / 2 * GRID_SIZE + GRID_SIZE / 2);

    /// Create an index from a raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::CellIndex;
    ///
    /// assert!(CellIndex::new(0).is_some());
    /// assert!(CellIndex::new(8).is_some());
    /// assert!(CellIndex::new(9).is_none());
    /// ```
    pub const fn new(index: u8) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Create an index from (row, col) grid coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::CellIndex;
    ///
    /// assert_eq!(CellIndex::from_row_col(1, 2).map(|i| i.get()), Some(5));
    /// assert_eq!(CellIndex::from_row_col(3, 0), None);
    /// ```
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Self(row * GRID_SIZE + col))
        } else {
            None
        }
    }

    /// The raw flat index, guaranteed `< CELL_COUNT`.
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Row of this cell, top to bottom.
    pub const fn row(&self) -> u8 {
        self.0 / GRID_SIZE
    }

    /// Column of this cell, left to right.
    pub const fn col(&self) -> u8 {
        self.0 % GRID_SIZE
    }
}

/// One of the 8 fixed index groupings checked for a win
/// (a row, a column, or a diagonal), as raw flat indices.
pub type Triple = [u8; 3];

/// The 8 win triples in evaluation order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals. The first matching triple is the
/// one reported to the view for highlighting.
pub const WIN_TRIPLES: [Triple; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Where the current game stands.
///
/// `Won` and `Draw` are terminal: further moves are rejected until a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { winner: Player, triple: Triple },
    Draw,
}

impl GameStatus {
    /// Whether the game has ended (no more moves accepted).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on; it is now `next_player`'s turn.
    Continued { next_player: Player },
    /// The move completed `triple` and ended the game.
    Won { winner: Player, triple: Triple },
    /// The move filled the last cell with no winner.
    Draw,
}

/// Why a move was rejected.
///
/// All rejections are non-fatal and leave board, turn, and score untouched;
/// the caller re-presents the unchanged state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// A prior move for the same interaction is still being applied.
    Busy,
    /// The game already ended; a reset is required first.
    GameOver,
    /// The targeted cell already holds the contained player's mark.
    CellOccupied(Player),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::Busy => write!(f, "a move is already being processed"),
            MoveError::GameOver => write!(f, "the game is over"),
            MoveError::CellOccupied(player) => {
                write!(f, "cell is already taken by {}", player.as_str())
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// A cursor movement direction on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// User actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Place the current player's mark at a specific cell (digit keys, mouse).
    SelectCell(CellIndex),
    /// Move the keyboard cursor one cell.
    MoveCursor(Direction),
    /// Place the current player's mark at the cursor cell.
    PlaceAtCursor,
    /// Clear the board for a new round. Session score is kept.
    NewRound,
}
