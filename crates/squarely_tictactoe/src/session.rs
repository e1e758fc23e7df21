//! Session management: rounds against the machine and scores across them.

use crate::action::{Move, MoveError};
use crate::ai::{Difficulty, Opponent};
use crate::game::Game;
use crate::position::Position;
use crate::score::ScoreBoard;
use crate::types::{Outcome, Player};
use std::time::Duration;
use tracing::{info, instrument};

/// A human-versus-machine session: one round at a time, scores across
/// rounds.
///
/// The session owns the engine, the opponent, and the score board. It
/// is the call surface a front-end drives: play the human move, ask for
/// the machine's reply, start the next round. Rounds share the score
/// board; [`next_round`](Session::next_round) replaces only the board.
#[derive(Debug)]
pub struct Session {
    game: Game,
    opponent: Opponent,
    scores: ScoreBoard,
    thinking_time: Option<Duration>,
}

impl Session {
    /// Creates a session at the given difficulty.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        info!(?difficulty, "Starting session");
        Self {
            game: Game::new(),
            opponent: Opponent::new(difficulty),
            scores: ScoreBoard::new(),
            thinking_time: None,
        }
    }

    /// Creates a session with a fixed RNG seed for reproducible play.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            game: Game::new(),
            opponent: Opponent::with_seed(difficulty, seed),
            scores: ScoreBoard::new(),
            thinking_time: None,
        }
    }

    /// Returns the current round.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the running scores.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Returns the opponent's difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.opponent.difficulty()
    }

    /// Changes the difficulty; takes effect from the next machine reply.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.opponent.set_difficulty(difficulty);
    }

    /// Sets the artificial thinking delay applied before machine replies.
    ///
    /// Purely cosmetic pacing for front-ends; `None` replies instantly.
    pub fn set_thinking_time(&mut self, pause: Option<Duration>) {
        self.thinking_time = pause;
    }

    /// Plays the human's move and records the outcome if the round
    /// just ended.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, position: Position) -> Result<Outcome, MoveError> {
        let outcome = self.game.play(Move::new(Player::Human, position))?;
        self.record_if_over(outcome);
        Ok(outcome)
    }

    /// Asks the opponent for its move, applies it, and records the
    /// outcome if the round just ended.
    ///
    /// Returns the square the machine chose along with the outcome.
    /// Fails with [`MoveError::GameOver`] on a finished round - the
    /// same gate that keeps the search away from full boards - and
    /// with [`MoveError::WrongPlayer`] when it is the human's turn.
    #[instrument(skip(self))]
    pub fn machine_reply(&mut self) -> Result<(Position, Outcome), MoveError> {
        if self.game.outcome().is_over() {
            return Err(MoveError::GameOver);
        }
        if self.game.to_move() != Player::Machine {
            return Err(MoveError::WrongPlayer(Player::Machine));
        }

        // Search works on its own copy; the round's board only changes
        // through the validated play below.
        let mut scratch = self.game.board().clone();
        let position = self.opponent.choose_after(&mut scratch, self.thinking_time);

        let outcome = self.game.play(Move::new(Player::Machine, position))?;
        self.record_if_over(outcome);
        Ok((position, outcome))
    }

    /// Clears the board for the next round; scores carry over and the
    /// human moves first again.
    #[instrument(skip(self))]
    pub fn next_round(&mut self) {
        self.game.reset();
    }

    fn record_if_over(&mut self, outcome: Outcome) {
        if outcome.is_over() {
            self.scores.record(outcome);
            info!(%outcome, scores = %self.scores, "Round finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_machine_cannot_reply_out_of_turn() {
        let mut session = Session::with_seed(Difficulty::Hard, 3);
        assert_eq!(
            session.machine_reply(),
            Err(MoveError::WrongPlayer(Player::Machine))
        );
    }

    #[test]
    fn test_difficulty_can_change_mid_session() {
        let mut session = Session::with_seed(Difficulty::Easy, 3);
        session.set_difficulty(Difficulty::Hard);
        assert_eq!(session.difficulty(), Difficulty::Hard);
    }
}
