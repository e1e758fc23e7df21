//! Game engine: turn sequencing and validated move application.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe engine for a single round.
///
/// The engine owns the board and the turn order. Play goes through
/// [`play`](Game::play), which validates the move before touching the
/// board; the outcome is recomputed from the board on demand rather
/// than stored, so the two cannot diverge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new round with an empty board.
    ///
    /// The human always takes the first move of a round.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Human,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Evaluates the current outcome from the board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Returns valid positions for the next move, in row-major order.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }

    /// Applies a validated move and returns the resulting outcome.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round has already concluded.
    /// - [`MoveError::SquareOccupied`] if the target square is taken.
    /// - [`MoveError::WrongPlayer`] if it is not the mover's turn.
    ///
    /// A failed move leaves board and turn order untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, action: Move) -> Result<Outcome, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }

        self.board.place(action.position, action.player);
        self.to_move = action.player.opponent();
        debug_assert!(self.marks_balanced(), "mark counts drifted out of turn order");

        let outcome = self.outcome();
        debug!(%action, %outcome, "Move applied");
        Ok(outcome)
    }

    /// Alternating turns keep the mark counts within one of each other.
    fn marks_balanced(&self) -> bool {
        let human = self
            .board
            .squares()
            .iter()
            .filter(|s| **s == Square::Occupied(Player::Human))
            .count();
        let machine = self
            .board
            .squares()
            .iter()
            .filter(|s| **s == Square::Occupied(Player::Machine))
            .count();
        human.abs_diff(machine) <= 1
    }

    /// Clears the board for the next round.
    ///
    /// The human moves first again. Scores are not the engine's concern;
    /// see [`ScoreBoard`](crate::ScoreBoard).
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::Human;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
