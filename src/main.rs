//! Terminal tic-tac-toe runner (default binary).
//!
//! Two players share one keyboard (or mouse): the engine enforces whose turn
//! it is, this loop only translates events into engine calls and redraws the
//! returned state. Rejected moves surface as a short visual cue instead of
//! mutating anything.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use tui_tictactoe::core::GameState;
use tui_tictactoe::input::{handle_key_event, should_quit, Cursor};
use tui_tictactoe::term::{
    FrameBuffer, GameView, RejectFlash, SelectionView, TerminalRenderer, Viewport,
};
use tui_tictactoe::types::{CellIndex, GameAction, REJECT_FLASH_MS};

/// An active rejection cue and when it stops showing.
struct ActiveFlash {
    flash: RejectFlash,
    expires_at: Instant,
}

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new();
    let view = GameView::default();
    let mut cursor = Cursor::new();
    let mut fb = FrameBuffer::new(0, 0);
    let mut flash: Option<ActiveFlash> = None;

    loop {
        // Drop the rejection cue once its time is up.
        let now = Instant::now();
        if flash.as_ref().is_some_and(|active| active.expires_at <= now) {
            flash = None;
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let selection = SelectionView {
            cursor: cursor.index(),
            flash: flash.as_ref().map(|active| active.flash),
        };
        view.render_into(&game.snapshot(), &selection, viewport, &mut fb);
        term.draw(&fb)?;

        // Wait for input, waking up early to clear an expiring flash.
        let timeout = flash
            .as_ref()
            .map(|active| active.expires_at.saturating_duration_since(now))
            .unwrap_or(Duration::from_millis(250));

        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    apply_action(&mut game, &mut cursor, &mut flash, action);
                }
            }
            Event::Mouse(mouse) => {
                if let Some(index) = clicked_cell(&view, viewport, mouse) {
                    cursor.set(index);
                    attempt_move(&mut game, &mut flash, index);
                }
            }
            // The next iteration re-renders at the new size.
            Event::Resize(..) => {}
            _ => {}
        }
    }
}

fn apply_action(
    game: &mut GameState,
    cursor: &mut Cursor,
    flash: &mut Option<ActiveFlash>,
    action: GameAction,
) {
    match action {
        GameAction::SelectCell(index) => {
            cursor.set(index);
            attempt_move(game, flash, index);
        }
        GameAction::MoveCursor(direction) => cursor.step(direction),
        GameAction::PlaceAtCursor => attempt_move(game, flash, cursor.index()),
        GameAction::NewRound => {
            game.reset();
            *flash = None;
        }
    }
}

fn attempt_move(game: &mut GameState, flash: &mut Option<ActiveFlash>, index: CellIndex) {
    match game.apply_move(index) {
        Ok(_) => *flash = None,
        Err(error) => {
            *flash = Some(ActiveFlash {
                flash: RejectFlash { cell: index, error },
                expires_at: Instant::now() + Duration::from_millis(REJECT_FLASH_MS as u64),
            });
        }
    }
}

fn clicked_cell(view: &GameView, viewport: Viewport, mouse: MouseEvent) -> Option<CellIndex> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => view.cell_at(viewport, mouse.column, mouse.row),
        _ => None,
    }
}
