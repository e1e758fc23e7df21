//! Round-by-round score bookkeeping.

use crate::types::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Running tally of round results across a session.
///
/// Counters only grow while the session lasts: resetting the board for
/// the next round does not touch them. [`clear`](ScoreBoard::clear)
/// starts a fresh session from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    human_wins: u32,
    machine_wins: u32,
    draws: u32,
}

impl ScoreBoard {
    /// Creates an empty score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished round.
    ///
    /// Recording `InProgress` is a caller bug: nothing is counted and a
    /// warning is logged.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::Human) => self.human_wins += 1,
            Outcome::Won(Player::Machine) => self.machine_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => {
                warn!("Attempted to record an unfinished round");
            }
        }
    }

    /// Rounds won by the human.
    pub fn human_wins(&self) -> u32 {
        self.human_wins
    }

    /// Rounds won by the machine.
    pub fn machine_wins(&self) -> u32 {
        self.machine_wins
    }

    /// Rounds that ended in a draw.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Current counters as (human wins, machine wins, draws).
    pub fn tally(&self) -> (u32, u32, u32) {
        (self.human_wins, self.machine_wins, self.draws)
    }

    /// Total rounds recorded.
    pub fn games_played(&self) -> u32 {
        self.human_wins + self.machine_wins + self.draws
    }

    /// Zeroes all counters for a fresh session.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for ScoreBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "You: {}   Machine: {}   Draws: {}",
            self.human_wins, self.machine_wins, self.draws
        )
    }
}
