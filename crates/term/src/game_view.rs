//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested, and its layout math
//! is the single source of truth for mapping mouse positions back to cells.

use tui_tictactoe_core::GameSnapshot;
use tui_tictactoe_types::{CellIndex, GameStatus, MoveError, Player, GRID_SIZE};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Transient rejection feedback, cleared by the run loop after a short delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectFlash {
    /// The cell the rejected interaction targeted.
    pub cell: CellIndex,
    pub error: MoveError,
}

/// View-side interaction state rendered on top of the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionView {
    /// Keyboard cursor position.
    pub cursor: CellIndex,
    pub flash: Option<RejectFlash>,
}

/// A lightweight terminal renderer for the tic-tac-toe board.
pub struct GameView {
    /// Cell interior width in terminal columns.
    cell_w: u16,
    /// Cell interior height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 interiors give roughly square cells on common terminal fonts.
        Self {
            cell_w: 7,
            cell_h: 3,
        }
    }
}

/// Resolved pixel geometry for one viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    board_x: u16,
    board_y: u16,
    board_w: u16,
    board_h: u16,
    title_y: u16,
    score_y: u16,
    status_y: u16,
    message_y: u16,
    help_y: u16,
}

const BORDER: CellStyle = CellStyle::new(Rgb::new(150, 150, 160), Rgb::new(0, 0, 0));
const BOARD_BG: Rgb = Rgb::new(25, 25, 32);
const CURSOR_BG: Rgb = Rgb::new(60, 60, 85);
const WIN_BG: Rgb = Rgb::new(30, 90, 45);
const FLASH_BG: Rgb = Rgb::new(120, 40, 40);
const HINT_FG: Rgb = Rgb::new(95, 95, 105);
const X_FG: Rgb = Rgb::new(235, 110, 100);
const O_FG: Rgb = Rgb::new(110, 170, 235);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let stride_x = self.cell_w + 1;
        let stride_y = self.cell_h + 1;
        let board_w = GRID_SIZE as u16 * stride_x + 1;
        let board_h = GRID_SIZE as u16 * stride_y + 1;

        // Title, score, gap, board, gap, status, message, help.
        let total_h = board_h + 7;
        let top = viewport.height.saturating_sub(total_h) / 2;

        Layout {
            board_x: viewport.width.saturating_sub(board_w) / 2,
            board_y: top + 3,
            board_w,
            board_h,
            title_y: top,
            score_y: top + 1,
            status_y: top + 3 + board_h + 1,
            message_y: top + 3 + board_h + 2,
            help_y: top + 3 + board_h + 3,
        }
    }

    /// Map a terminal position to the board cell it falls inside.
    ///
    /// Returns `None` on grid lines and outside the board.
    pub fn cell_at(&self, viewport: Viewport, x: u16, y: u16) -> Option<CellIndex> {
        let layout = self.layout(viewport);
        let dx = x.checked_sub(layout.board_x)?;
        let dy = y.checked_sub(layout.board_y)?;
        if dx >= layout.board_w || dy >= layout.board_h {
            return None;
        }

        let stride_x = self.cell_w + 1;
        let stride_y = self.cell_h + 1;
        if dx % stride_x == 0 || dy % stride_y == 0 {
            return None;
        }
        CellIndex::from_row_col((dy / stride_y) as u8, (dx / stride_x) as u8)
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Callers keep one framebuffer across frames; it is resized and cleared
    /// here, so the previous frame never shows through.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        selection: &SelectionView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);

        self.put_centered(fb, layout.title_y, "T I C - T A C - T O E", CellStyle::default().bold());
        self.put_centered(fb, layout.score_y, &score_line(snap), CellStyle::default());

        self.draw_grid(fb, layout);
        for i in 0..(GRID_SIZE * GRID_SIZE) {
            // Indices stay inside the fixed grid.
            if let Some(index) = CellIndex::new(i) {
                self.draw_cell(fb, layout, snap, selection, index);
            }
        }

        self.put_centered(fb, layout.status_y, &status_line(snap), CellStyle::default().bold());
        let (message, message_style) = message_line(snap, selection);
        self.put_centered(fb, layout.message_y, &message, message_style);
        self.put_centered(
            fb,
            layout.help_y,
            "1-9 place   arrows move   enter place   r new round   q quit",
            CellStyle::new(HINT_FG, Rgb::new(0, 0, 0)),
        );
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: Layout) {
        let stride_x = self.cell_w + 1;
        let stride_y = self.cell_h + 1;

        for y in 0..layout.board_h {
            let on_row = y % stride_y == 0;
            for x in 0..layout.board_w {
                let on_col = x % stride_x == 0;
                let ch = match (on_row, on_col) {
                    (true, true) => junction(x / stride_x, y / stride_y),
                    (true, false) => '─',
                    (false, true) => '│',
                    (false, false) => continue,
                };
                fb.put_char(layout.board_x + x, layout.board_y + y, ch, BORDER);
            }
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        snap: &GameSnapshot,
        selection: &SelectionView,
        index: CellIndex,
    ) {
        let stride_x = self.cell_w + 1;
        let stride_y = self.cell_h + 1;
        let x0 = layout.board_x + 1 + index.col() as u16 * stride_x;
        let y0 = layout.board_y + 1 + index.row() as u16 * stride_y;

        let flashed = selection
            .flash
            .map(|flash| flash.cell == index && matches!(flash.error, MoveError::CellOccupied(_)))
            .unwrap_or(false);
        let winning = match snap.status {
            GameStatus::Won { triple, .. } => triple.contains(&index.get()),
            _ => false,
        };
        let under_cursor = snap.in_progress() && selection.cursor == index;

        let bg = if flashed {
            FLASH_BG
        } else if winning {
            WIN_BG
        } else if under_cursor {
            CURSOR_BG
        } else {
            BOARD_BG
        };

        fb.fill_rect(x0, y0, self.cell_w, self.cell_h, ' ', CellStyle::new(Rgb::default(), bg));

        let cx = x0 + self.cell_w / 2;
        let cy = y0 + self.cell_h / 2;
        match snap.board[index.get() as usize] {
            Some(player) => {
                let fg = match player {
                    Player::X => X_FG,
                    Player::O => O_FG,
                };
                fb.put_char(cx, cy, player.as_char(), CellStyle::new(fg, bg).bold());
            }
            None => {
                // Faint digit hint matching the 1-9 placement keys.
                let hint = (b'1' + index.get()) as char;
                fb.put_char(cx, cy, hint, CellStyle::new(HINT_FG, bg));
            }
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, y: u16, text: &str, style: CellStyle) {
        let len = text.chars().count() as u16;
        let x = fb.width().saturating_sub(len) / 2;
        fb.put_str(x, y, text, style);
    }
}

fn junction(cx: u16, cy: u16) -> char {
    let last = GRID_SIZE as u16;
    match (cx, cy) {
        (0, 0) => '┌',
        (c, 0) if c == last => '┐',
        (0, r) if r == last => '└',
        (c, r) if c == last && r == last => '┘',
        (0, _) => '├',
        (c, _) if c == last => '┤',
        (_, 0) => '┬',
        (_, r) if r == last => '┴',
        _ => '┼',
    }
}

fn score_line(snap: &GameSnapshot) -> String {
    format!(
        "round {}   X {}   O {}   draws {}",
        snap.round,
        snap.score.wins(Player::X),
        snap.score.wins(Player::O),
        snap.score.draws()
    )
}

fn status_line(snap: &GameSnapshot) -> String {
    match snap.status {
        GameStatus::InProgress => match snap.to_move {
            Some(player) => format!("{} to move", player.as_str()),
            None => String::new(),
        },
        GameStatus::Won { winner, .. } => format!("{} wins the round!", winner.as_str()),
        GameStatus::Draw => "round drawn".to_string(),
    }
}

fn message_line(snap: &GameSnapshot, selection: &SelectionView) -> (String, CellStyle) {
    if let Some(flash) = selection.flash {
        let style = CellStyle::new(Rgb::new(230, 120, 110), Rgb::new(0, 0, 0));
        return (flash.error.to_string(), style);
    }
    if snap.status.is_terminal() {
        return (
            "press r for a new round".to_string(),
            CellStyle::new(HINT_FG, Rgb::new(0, 0, 0)),
        );
    }
    (String::new(), CellStyle::default())
}
