//! Tic-tac-toe engine with move history and time travel.
//!
//! The engine owns the authoritative game state: an append-only
//! history of board snapshots, a step pointer selecting the current
//! entry, and turn parity derived from the pointer. Presentation
//! layers read the engine's queries (board, outcome, history, step)
//! and forward user intents (a cell played, a history step selected)
//! back into it.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Outcome, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::TopLeft);
//! game.play(Position::Center);
//!
//! // Rewind to the start and branch: the O move is discarded once
//! // a new move is made.
//! game.jump_to(1)?;
//! game.play(Position::BottomRight);
//!
//! assert_eq!(game.history().len(), 3);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! assert_eq!(game.to_move(), Player::X);
//! # Ok::<(), rewind_tictactoe::StepOutOfRange>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
pub mod invariants;
mod position;
mod rules;
mod types;

pub use game::{Game, StepOutOfRange};
pub use history::{HistoryEntry, Move};
pub use position::Position;
pub use rules::{Outcome, evaluate};
pub use types::{Board, Player, Square};
