//! Move records and board snapshots.

use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// A move recorded in the game history.
///
/// Carries the 1-based row and column alongside the position so the
/// move list can describe each step without recomputing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    position: Position,
    player: Player,
}

impl Move {
    /// Creates a move record for a mark placed at the given position.
    pub fn new(position: Position, player: Player) -> Self {
        Self { position, player }
    }

    /// Returns the position played.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the player who made the move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// 1-based row of the move.
    pub fn row(&self) -> usize {
        self.position.row()
    }

    /// 1-based column of the move.
    pub fn column(&self) -> usize {
        self.position.column()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.row(), self.column(), self.player)
    }
}

/// A recorded step: a complete board snapshot plus the move that
/// produced it.
///
/// The initial entry is the empty board and carries no move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub(crate) board: Board,
    pub(crate) placed: Option<Move>,
}

impl HistoryEntry {
    /// The initial entry: empty board, no move.
    pub(crate) fn initial() -> Self {
        Self {
            board: Board::new(),
            placed: None,
        }
    }

    /// A snapshot produced by a move.
    pub(crate) fn new(board: Board, placed: Move) -> Self {
        Self {
            board,
            placed: Some(placed),
        }
    }

    /// Returns the board snapshot at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the move that produced this snapshot, if any.
    pub fn placed(&self) -> Option<Move> {
        self.placed
    }
}
