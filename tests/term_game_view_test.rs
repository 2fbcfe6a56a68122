//! GameView rendering tests: frames are plain data, so the whole view can be
//! checked without a terminal attached.

use tui_tictactoe::core::GameState;
use tui_tictactoe::term::{FrameBuffer, GameView, RejectFlash, SelectionView, Viewport};
use tui_tictactoe::types::{CellIndex, MoveError, Player};

fn ix(i: u8) -> CellIndex {
    CellIndex::new(i).unwrap()
}

fn render(game: &GameState, selection: SelectionView) -> FrameBuffer {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&game.snapshot(), &selection, Viewport::new(80, 24), &mut fb);
    fb
}

fn frame_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn default_selection() -> SelectionView {
    SelectionView {
        cursor: ix(4),
        flash: None,
    }
}

#[test]
fn test_fresh_game_frame() {
    let game = GameState::new();
    let text = frame_text(&render(&game, default_selection()));

    assert!(text.contains("T I C - T A C - T O E"));
    assert!(text.contains("round 1   X 0   O 0   draws 0"));
    assert!(text.contains("X to move"));
    assert!(text.contains("q quit"));
    // Empty cells carry their placement-key hints.
    for digit in '1'..='9' {
        assert!(text.contains(digit), "hint {} missing", digit);
    }
}

#[test]
fn test_marks_replace_hints() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut game = GameState::new();

    // Locate cell 0's center through the public hit map.
    let (cx, cy) = (0..viewport.height)
        .flat_map(|y| (0..viewport.width).map(move |x| (x, y)))
        .filter(|&(x, y)| view.cell_at(viewport, x, y) == Some(ix(0)))
        .nth((7 * 3) / 2) // middle of the 7x3 interior in scan order
        .unwrap();

    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&game.snapshot(), &default_selection(), viewport, &mut fb);
    assert_eq!(fb.get(cx, cy).unwrap().ch, '1');

    game.apply_move(ix(0)).unwrap();
    view.render_into(&game.snapshot(), &default_selection(), viewport, &mut fb);
    assert_eq!(fb.get(cx, cy).unwrap().ch, 'X');
}

#[test]
fn test_terminal_frame_prompts_for_reset() {
    let mut game = GameState::new();
    for &m in &[0u8, 3, 1, 4, 2] {
        game.apply_move(ix(m)).unwrap();
    }

    let text = frame_text(&render(&game, default_selection()));
    assert!(text.contains("X wins the round!"));
    assert!(text.contains("press r for a new round"));
}

#[test]
fn test_draw_frame() {
    let mut game = GameState::new();
    for &m in &[0u8, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.apply_move(ix(m)).unwrap();
    }

    let text = frame_text(&render(&game, default_selection()));
    assert!(text.contains("round drawn"));
    assert!(text.contains("draws 1"));
}

#[test]
fn test_rejection_flash_message() {
    let mut game = GameState::new();
    game.apply_move(ix(4)).unwrap();

    let selection = SelectionView {
        cursor: ix(4),
        flash: Some(RejectFlash {
            cell: ix(4),
            error: MoveError::CellOccupied(Player::X),
        }),
    };
    let text = frame_text(&render(&game, selection));
    assert!(text.contains("cell is already taken by X"));
}

#[test]
fn test_mouse_hit_testing_matches_rendered_grid() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);

    let mut seen = Vec::new();
    for y in 0..viewport.height {
        for x in 0..viewport.width {
            if let Some(index) = view.cell_at(viewport, x, y) {
                if !seen.contains(&index) {
                    seen.push(index);
                }
            }
        }
    }

    // Every cell is clickable exactly once in the hit map.
    assert_eq!(seen.len(), 9);
    for i in 0..9u8 {
        assert!(seen.contains(&ix(i)));
    }
}
