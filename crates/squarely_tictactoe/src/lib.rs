//! Squarely Tic-Tac-Toe - pure game logic with a perfect-play opponent
//!
//! This library implements the full engine behind a human-versus-machine
//! tic-tac-toe match: board state, validated move application, terminal
//! detection, a difficulty-tiered minimax opponent, and score keeping
//! across rounds. It performs no I/O; a front-end (TUI, GUI, HTTP) owns
//! rendering and input and drives the engine through [`Session`].
//!
//! # Architecture
//!
//! - **Engine**: [`Game`] owns the board and turn order; [`rules`]
//!   recomputes the [`Outcome`] from the squares on every query.
//! - **Opponent**: [`Opponent`] selects moves per [`Difficulty`] -
//!   random, mixed, or perfect play via unpruned minimax.
//! - **Scores**: [`ScoreBoard`] tallies wins and draws across rounds.
//! - **Session**: [`Session`] bundles the three behind the call surface
//!   a front-end drives.
//!
//! # Example
//!
//! ```
//! use squarely_tictactoe::{Difficulty, Outcome, Position, Session};
//!
//! # fn main() -> Result<(), squarely_tictactoe::MoveError> {
//! let mut session = Session::new(Difficulty::Hard);
//!
//! let outcome = session.play_human(Position::Center)?;
//! if outcome == Outcome::InProgress {
//!     let (reply, _outcome) = session.machine_reply()?;
//!     println!("machine played {reply}");
//! }
//! println!("{}", session.scores());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod ai;
mod game;
mod position;
pub mod rules;
mod score;
mod session;
mod types;

// Crate-level exports - actions and errors
pub use action::{Move, MoveError};

// Crate-level exports - machine opponent
pub use ai::{Difficulty, Opponent, best_move, minimax_value, random_move};

// Crate-level exports - engine
pub use game::Game;
pub use position::Position;
pub use types::{Board, Outcome, Player, Square};

// Crate-level exports - score keeping and sessions
pub use score::ScoreBoard;
pub use session::Session;
