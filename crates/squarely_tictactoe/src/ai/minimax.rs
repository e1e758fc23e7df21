//! Unpruned minimax over the 3x3 game tree.
//!
//! The tree is small enough that the search runs to the bottom on every
//! call. Scores are depth-independent: a win in two plies and a win in
//! six both score +1, so the machine is indifferent among equally
//! winning lines and may take the slower one.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Outcome, Player};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::instrument;

/// Game-theoretic value of the board from the machine's perspective.
///
/// `maximizing` is true when the machine is the side to move. Terminal
/// positions score +1 for a machine win, -1 for a human win, and 0 for
/// a draw. Non-terminal positions recurse over every vacant square in
/// row-major order, placing and then clearing the mover's mark so the
/// board comes back untouched.
pub fn minimax_value(board: &mut Board, maximizing: bool) -> i32 {
    match rules::outcome(board) {
        Outcome::Won(Player::Machine) => return 1,
        Outcome::Won(Player::Human) => return -1,
        Outcome::Draw => return 0,
        Outcome::InProgress => {}
    }

    if maximizing {
        let mut best = i32::MIN;
        for position in Position::valid_moves(board) {
            board.place(position, Player::Machine);
            best = best.max(minimax_value(board, false));
            board.clear(position);
        }
        best
    } else {
        let mut best = i32::MAX;
        for position in Position::valid_moves(board) {
            board.place(position, Player::Human);
            best = best.min(minimax_value(board, true));
            board.clear(position);
        }
        best
    }
}

/// Strongest machine move on the board.
///
/// Scans vacant squares in row-major order and keeps the first square
/// whose value strictly beats every square seen before it. The scan
/// order is the tie-break: among equally valued moves the earliest
/// square wins, which keeps selection deterministic.
///
/// # Panics
///
/// Panics if the board has no vacant square. Callers gate on
/// [`rules::outcome`] first, so a full board here is a programming
/// error rather than a recoverable condition.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board) -> Position {
    let mut best_score = i32::MIN;
    let mut best = None;

    for position in Position::valid_moves(board) {
        board.place(position, Player::Machine);
        let score = minimax_value(board, false);
        board.clear(position);

        if score > best_score {
            best_score = score;
            best = Some(position);
        }
    }

    best.expect("best_move called on a board with no vacant squares")
}

/// Uniformly random vacant square.
///
/// # Panics
///
/// Panics if the board has no vacant square, like [`best_move`].
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Position {
    *Position::valid_moves(board)
        .choose(rng)
        .expect("random_move called on a board with no vacant squares")
}
