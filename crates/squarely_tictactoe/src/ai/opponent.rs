//! Difficulty tiers and the stateful machine opponent.

use super::minimax::{best_move, random_move};
use crate::position::Position;
use crate::types::Board;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Strength of the machine opponent.
///
/// Difficulty affects move selection only; board semantics are
/// identical across tiers. Parses case-insensitively from "easy",
/// "medium", and "hard".
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// A fair coin between a random and a perfect move, flipped per
    /// call rather than per game.
    Medium,
    /// Perfect play via full-depth minimax.
    Hard,
}

/// Machine opponent with a difficulty tier and its own RNG.
///
/// The RNG is seeded from OS entropy by default; [`with_seed`](Opponent::with_seed)
/// pins it for reproducible play in tests.
#[derive(Debug, Clone)]
pub struct Opponent {
    difficulty: Difficulty,
    rng: SmallRng,
}

impl Opponent {
    /// Creates an opponent at the given difficulty.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Creates an opponent with a fixed RNG seed.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns the difficulty tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty tier.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Chooses the machine's move on the board.
    ///
    /// Search explores by mutating the board in place and restores it
    /// before returning, hence the exclusive borrow: nothing may read
    /// the board mid-search.
    ///
    /// # Panics
    ///
    /// Panics if the board has no vacant square; callers gate on the
    /// round outcome first.
    #[instrument(skip(self, board))]
    pub fn choose(&mut self, board: &mut Board) -> Position {
        let position = match self.difficulty {
            Difficulty::Easy => random_move(board, &mut self.rng),
            Difficulty::Medium => {
                if self.rng.random_bool(0.5) {
                    random_move(board, &mut self.rng)
                } else {
                    best_move(board)
                }
            }
            Difficulty::Hard => best_move(board),
        };
        debug!(difficulty = ?self.difficulty, position = %position, "Opponent chose move");
        position
    }

    /// Chooses a move after an optional artificial thinking delay.
    ///
    /// The pause is presentation pacing only: it blocks the calling
    /// thread and has no effect on the chosen move. Callers that want a
    /// snappy opponent pass `None`.
    pub fn choose_after(
        &mut self,
        board: &mut Board,
        thinking_time: Option<Duration>,
    ) -> Position {
        if let Some(pause) = thinking_time {
            std::thread::sleep(pause);
        }
        self.choose(board)
    }
}
