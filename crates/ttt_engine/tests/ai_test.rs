//! Tests for AI move selection.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;
use ttt_engine::{
    AiError, Board, Difficulty, GameOutcome, Mark, Square, apply_move, empty_indices, evaluate,
    select_move, select_move_with,
};

const E: Square = Square::Empty;
const X: Square = Square::Occupied(Mark::X);
const O: Square = Square::Occupied(Mark::O);

/// Plays a full game where each mark uses its own difficulty.
fn play_out(x: Difficulty, o: Difficulty, rng: &mut StdRng) -> GameOutcome {
    let mut board = Board::new();
    let mut mover = Mark::X;

    loop {
        let outcome = evaluate(&board);
        if outcome.is_over() {
            return outcome;
        }
        let difficulty = match mover {
            Mark::X => x,
            Mark::O => o,
        };
        let index = select_move_with(&board, difficulty, mover, rng).unwrap();
        board = apply_move(&board, index, mover).unwrap();
        mover = mover.opponent();
    }
}

/// Tries every X line against Hard O and returns the worst result for O.
fn worst_case_for_hard_o(board: Board) -> GameOutcome {
    let mut worst = GameOutcome::Won(Mark::O);

    for x_move in empty_indices(&board) {
        let after_x = apply_move(&board, x_move, Mark::X).unwrap();
        let outcome = match evaluate(&after_x) {
            GameOutcome::InProgress => {
                let reply = select_move(&after_x, Difficulty::Hard, Mark::O).unwrap();
                let after_o = apply_move(&after_x, reply, Mark::O).unwrap();
                match evaluate(&after_o) {
                    GameOutcome::InProgress => worst_case_for_hard_o(after_o),
                    done => done,
                }
            }
            done => done,
        };

        worst = match (worst, outcome) {
            (_, GameOutcome::Won(Mark::X)) | (GameOutcome::Won(Mark::X), _) => {
                GameOutcome::Won(Mark::X)
            }
            (_, GameOutcome::Draw) | (GameOutcome::Draw, _) => GameOutcome::Draw,
            (current, _) => current,
        };
    }

    worst
}

#[test]
fn test_hard_vs_hard_always_draws() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        play_out(Difficulty::Hard, Difficulty::Hard, &mut rng),
        GameOutcome::Draw
    );
}

#[test]
fn test_hard_never_loses_to_any_opponent() {
    assert_ne!(worst_case_for_hard_o(Board::new()), GameOutcome::Won(Mark::X));
}

#[test]
fn test_hard_as_x_never_loses_to_random() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let outcome = play_out(Difficulty::Hard, Difficulty::Easy, &mut rng);
        assert_ne!(outcome, GameOutcome::Won(Mark::O), "seed {seed}");
    }
}

#[test]
fn test_hard_completes_win_instead_of_blocking() {
    let board = Board::from_squares([O, O, E, X, X, E, E, E, E]);
    assert_eq!(select_move(&board, Difficulty::Hard, Mark::O), Ok(2));
}

#[test]
fn test_medium_blocks_immediate_threat() {
    let board = Board::from_squares([X, X, E, E, E, E, E, E, E]);
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        assert_eq!(
            select_move_with(&board, Difficulty::Medium, Mark::O, &mut rng),
            Ok(2)
        );
    }
}

#[test]
fn test_medium_takes_win() {
    let board = Board::from_squares([O, O, E, X, X, E, E, E, E]);
    assert_eq!(select_move(&board, Difficulty::Medium, Mark::O), Ok(2));
}

#[test]
fn test_easy_only_picks_empty_squares() {
    let board = Board::from_squares([X, O, E, E, X, E, O, E, E]);
    let legal = empty_indices(&board);
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..300 {
        let index = select_move_with(&board, Difficulty::Easy, Mark::X, &mut rng).unwrap();
        assert!(legal.contains(&index));
    }
}

#[test]
fn test_full_board_has_no_legal_move() {
    let board = Board::from_squares([X, O, X, X, O, O, O, X, X]);
    assert!(empty_indices(&board).is_empty());
    for difficulty in Difficulty::iter() {
        assert_eq!(
            select_move(&board, difficulty, Mark::O),
            Err(AiError::NoLegalMove)
        );
    }
}

#[test]
fn test_same_seed_same_game() {
    let first = play_out(Difficulty::Easy, Difficulty::Medium, &mut StdRng::seed_from_u64(5));
    let second = play_out(Difficulty::Easy, Difficulty::Medium, &mut StdRng::seed_from_u64(5));
    assert_eq!(first, second);
}
