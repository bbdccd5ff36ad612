//! The game engine: history, step pointer, and the two mutating operations.

use crate::history::{HistoryEntry, Move};
use crate::position::Position;
use crate::rules::{Outcome, evaluate};
use crate::types::{Board, Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error returned when jumping outside the recorded history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("step {step} is out of range (history has {len} entries)")]
pub struct StepOutOfRange {
    /// The requested step.
    pub step: usize,
    /// Number of recorded entries.
    pub len: usize,
}

/// Tic-tac-toe game engine with full move history and time travel.
///
/// The engine is the single owner of game state: an append-only list
/// of board snapshots (entry 0 is the empty board) and a step pointer
/// selecting the currently displayed entry. Whose turn it is derives
/// from pointer parity alone; it is never stored separately.
///
/// Making a move while pointed at an earlier step truncates the
/// entries after the pointer before appending, so a new move branches
/// from the past and the discarded future is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) step: usize,
}

impl Game {
    /// Creates a new game: one empty-board entry, pointer at 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::initial()],
            step: 0,
        }
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        self.history[self.step].board()
    }

    /// Evaluates the board at the current step.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.board())
    }

    /// Returns the full history, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the current step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Whether X moves next. Derived from pointer parity.
    pub fn x_is_next(&self) -> bool {
        self.step % 2 == 0
    }

    /// Returns the player to move at the current step.
    pub fn to_move(&self) -> Player {
        if self.x_is_next() {
            Player::X
        } else {
            Player::O
        }
    }

    /// Places the current player's mark at the given position.
    ///
    /// A move against an occupied square, or against a board that is
    /// already won or drawn, is a defined no-op: the state is left
    /// unchanged and nothing is reported. On success the history is
    /// truncated to the current step, the new snapshot is appended,
    /// and the pointer advances to it.
    #[instrument(skip(self), fields(player = %self.to_move(), step = self.step))]
    pub fn play(&mut self, position: Position) {
        if self.outcome().is_terminal() {
            return;
        }
        if !self.board().is_empty(position) {
            return;
        }

        // Branch from the past: discard any future beyond the pointer.
        self.history.truncate(self.step + 1);

        let player = self.to_move();
        let mut board = self.board().clone();
        board.set(position, Square::Occupied(player));
        self.history
            .push(HistoryEntry::new(board, Move::new(position, player)));
        self.step = self.history.len() - 1;

        self.debug_check_invariants();
    }

    /// Moves the step pointer to a recorded entry.
    ///
    /// History contents are untouched; jumping to the already-current
    /// step is a no-op. Steps outside the recorded history are
    /// rejected.
    #[instrument(skip(self), fields(current = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), StepOutOfRange> {
        if step >= self.history.len() {
            return Err(StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        if step == self.step {
            return Ok(());
        }
        self.step = step;

        self.debug_check_invariants();
        Ok(())
    }

    fn debug_check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            use crate::invariants::{GameInvariants, InvariantSet};
            if let Err(violations) = GameInvariants::check_all(self) {
                panic!("game invariants violated: {violations:?}");
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
