//! Exhaustive depth-first minimax search.
//!
//! The search explores every legal continuation of the game, so the returned move is
//! exact, not an estimate. There is no pruning and no transposition table: for a
//! 9-cell game the full tree is at most 9! paths, far fewer in practice because of
//! early terminal cutoffs, and the brute-force walk keeps the tie-break order a
//! simple, testable contract. Moves are tried in the order the board yields them,
//! and a move replaces the incumbent only when it scores strictly higher, so the
//! first-encountered move wins ties.
//!
//! Exploration mutates the board in place and undoes each move after scoring it;
//! the board is restored to its exact input state before the search returns.

use crate::board::{Board, GameOutcome, Player};

/// Computes the optimal move for the searching player.
///
/// The searching player (the one the board reports as [`Player::Me`]) must be the
/// side to move. Returns `None` when no legal move exists, e.g. on a full or already
/// decided board; callers that check the outcome after every move never observe this.
pub fn best_move<T: Board>(board: &mut T) -> Option<T::Move> {
    let mut best_score = i32::MIN;
    let mut best = None;

    for candidate in board.get_available_moves() {
        board.perform_move(&candidate);
        let score = search(board, 0);
        board.undo_move(&candidate);

        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    best
}

/// Scores the position reached after a root move, `depth` plies below that move.
///
/// Terminal positions score `10 - depth` for a win and `depth - 10` for a loss, so
/// among equally decided branches the search prefers the fastest win and the slowest
/// loss. Draws score 0.
fn search<T: Board>(board: &mut T, depth: i32) -> i32 {
    match board.get_outcome() {
        GameOutcome::Win => return 10 - depth,
        GameOutcome::Lose => return depth - 10,
        GameOutcome::Draw => return 0,
        GameOutcome::InProgress => {}
    }

    let maximizing = board.get_current_player() == Player::Me;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for candidate in board.get_available_moves() {
        board.perform_move(&candidate);
        let score = search(board, depth + 1);
        board.undo_move(&candidate);

        best_score = if maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }

    best_score
}
