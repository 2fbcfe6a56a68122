//! End-to-end engine behavior over full games.

use tui_tictactoe::core::GameState;
use tui_tictactoe::types::{
    CellIndex, GameStatus, MoveError, MoveOutcome, Player, CELL_COUNT,
};

fn ix(i: u8) -> CellIndex {
    CellIndex::new(i).unwrap()
}

fn play(state: &mut GameState, moves: &[u8]) -> MoveOutcome {
    let mut last = None;
    for &m in moves {
        last = Some(state.apply_move(ix(m)).expect("scripted move is legal"));
    }
    last.expect("at least one move")
}

#[test]
fn test_every_accepted_move_fills_exactly_one_cell() {
    let mut state = GameState::new();
    let moves = [0u8, 1, 2, 4, 3, 5, 7, 6, 8];

    for (turn, &m) in moves.iter().enumerate() {
        let empty_before = state.board().empty_cells().len();
        let mover = state.to_move().unwrap();

        state.apply_move(ix(m)).unwrap();

        assert_eq!(state.board().empty_cells().len(), empty_before - 1);
        assert_eq!(state.board().get(ix(m)), Some(mover));
        assert_eq!(
            mover,
            if turn % 2 == 0 { Player::X } else { Player::O },
            "turn {} belongs to the wrong player",
            turn
        );
    }
}

#[test]
fn test_x_top_row_win_example() {
    let mut state = GameState::new();
    let outcome = play(&mut state, &[0, 3, 1, 4, 2]);

    assert_eq!(
        outcome,
        MoveOutcome::Won {
            winner: Player::X,
            triple: [0, 1, 2]
        }
    );
    assert_eq!(state.score().wins(Player::X), 1);
    assert_eq!(state.score().wins(Player::O), 0);
    assert_eq!(state.score().draws(), 0);
}

#[test]
fn test_draw_example() {
    let mut state = GameState::new();
    let outcome = play(&mut state, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(outcome, MoveOutcome::Draw);
    assert_eq!(state.status(), GameStatus::Draw);
    assert_eq!(state.score().draws(), 1);
}

#[test]
fn test_occupied_cell_example() {
    let mut state = GameState::new();
    state.apply_move(ix(0)).unwrap();

    let snapshot_before = state.snapshot();
    let err = state.apply_move(ix(0)).unwrap_err();

    assert_eq!(err, MoveError::CellOccupied(Player::X));
    assert_eq!(state.snapshot(), snapshot_before);
}

#[test]
fn test_diagonal_and_column_wins() {
    // O is handed the anti-diagonal.
    let mut state = GameState::new();
    let outcome = play(&mut state, &[0, 2, 1, 4, 5, 6]);
    assert_eq!(
        outcome,
        MoveOutcome::Won {
            winner: Player::O,
            triple: [2, 4, 6]
        }
    );

    // X takes the left column in a fresh session.
    let mut state = GameState::new();
    let outcome = play(&mut state, &[0, 1, 3, 2, 6]);
    assert_eq!(
        outcome,
        MoveOutcome::Won {
            winner: Player::X,
            triple: [0, 3, 6]
        }
    );
}

#[test]
fn test_terminal_state_blocks_moves_until_reset() {
    let mut state = GameState::new();
    play(&mut state, &[0, 3, 1, 4, 2]);

    for i in 0..CELL_COUNT {
        assert_eq!(state.apply_move(ix(i)).unwrap_err(), MoveError::GameOver);
    }

    state.reset();
    assert!(state.apply_move(ix(4)).is_ok());
}

#[test]
fn test_session_score_accumulates_and_never_decreases() {
    let mut state = GameState::new();
    let mut last_total = 0;

    let rounds: [&[u8]; 4] = [
        &[0, 3, 1, 4, 2],             // X wins
        &[0, 1, 2, 4, 3, 5, 7, 6, 8], // draw
        &[0, 2, 1, 5, 3, 8],          // O wins column 2-5-8
        &[4, 0, 2, 6, 3, 1, 5],       // X wins row 3-4-5
    ];

    for (i, moves) in rounds.iter().enumerate() {
        for &m in moves.iter() {
            if state.status().is_terminal() {
                break;
            }
            state.apply_move(ix(m)).unwrap();
            let total = state.score().rounds_finished();
            assert!(total >= last_total, "score went backwards in round {}", i);
            last_total = total;
        }
        let before_reset = state.score();
        let (x, o, d) = (
            before_reset.wins(Player::X),
            before_reset.wins(Player::O),
            before_reset.draws(),
        );
        state.reset();
        assert_eq!(state.score().wins(Player::X), x);
        assert_eq!(state.score().wins(Player::O), o);
        assert_eq!(state.score().draws(), d);
    }

    assert_eq!(state.score().rounds_finished(), last_total);
}

#[test]
fn test_reset_always_restores_initial_round_state() {
    // From mid-round, from a win, and from a draw.
    let scripts: [&[u8]; 3] = [
        &[4, 0],
        &[0, 3, 1, 4, 2],
        &[0, 1, 2, 4, 3, 5, 7, 6, 8],
    ];

    for moves in scripts {
        let mut state = GameState::new();
        for &m in moves {
            state.apply_move(ix(m)).unwrap();
        }

        state.reset();

        assert_eq!(state.status(), GameStatus::InProgress);
        assert_eq!(state.to_move(), Some(Player::X));
        assert_eq!(state.board().empty_cells().len(), CELL_COUNT as usize);
    }
}

#[test]
fn test_snapshot_exposes_full_view_state() {
    let mut state = GameState::new();
    play(&mut state, &[0, 3, 1, 4, 2]);
    state.reset();
    state.apply_move(ix(8)).unwrap();

    let snap = state.snapshot();
    assert_eq!(snap.round, 2);
    assert_eq!(snap.board[8], Some(Player::X));
    assert_eq!(snap.to_move, Some(Player::O));
    assert_eq!(snap.status, GameStatus::InProgress);
    assert_eq!(snap.score.wins(Player::X), 1);
}
