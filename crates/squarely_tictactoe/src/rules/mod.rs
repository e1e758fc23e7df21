//! Terminal-state detection for tic-tac-toe.

mod draw;
mod win;

pub use draw::is_full;
pub use win::check_winner;

use crate::types::{Board, Outcome};

/// Evaluates the board.
///
/// Checks wins before draws: a full board with a three-in-a-row is a
/// win, not a draw. The outcome is derived from the squares alone and
/// recomputed on every call; nothing is cached on the board.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_beats_draw_on_full_board() {
        // X X O / O O X / X X X - full board, bottom row wins
        let mut board = Board::new();
        for (pos, player) in [
            (Position::TopLeft, Player::Human),
            (Position::TopCenter, Player::Human),
            (Position::TopRight, Player::Machine),
            (Position::MiddleLeft, Player::Machine),
            (Position::Center, Player::Machine),
            (Position::MiddleRight, Player::Human),
            (Position::BottomLeft, Player::Human),
            (Position::BottomCenter, Player::Human),
            (Position::BottomRight, Player::Human),
        ] {
            board.place(pos, player);
        }
        assert_eq!(outcome(&board), Outcome::Won(Player::Human));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        for (pos, player) in [
            (Position::TopLeft, Player::Human),
            (Position::TopCenter, Player::Machine),
            (Position::TopRight, Player::Human),
            (Position::MiddleLeft, Player::Machine),
            (Position::Center, Player::Human),
            (Position::MiddleRight, Player::Human),
            (Position::BottomLeft, Player::Machine),
            (Position::BottomCenter, Player::Human),
            (Position::BottomRight, Player::Machine),
        ] {
            board.place(pos, player);
        }
        assert_eq!(outcome(&board), Outcome::Draw);
    }
}
