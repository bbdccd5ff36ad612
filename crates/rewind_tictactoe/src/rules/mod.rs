//! Outcome evaluation for tic-tac-toe boards.

mod draw;
mod win;

use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

pub(crate) use draw::is_full;
pub(crate) use win::winning_line;

/// Terminal classification of a board.
///
/// Always recomputed from board contents, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// The winning player.
        player: Player,
        /// The three positions forming the winning line, for highlighting.
        line: [Position; 3],
    },
    /// Game ended with a full board and no winner.
    Draw,
}

impl Outcome {
    /// Whether the board has reached a terminal state.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Evaluates a board: win, draw, or still in progress.
///
/// Pure function over any board, current or historical. When more
/// than one line is complete, the first in the fixed enumeration
/// order (rows, columns, diagonals) is reported.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((player, line)) = winning_line(board) {
        return Outcome::Won { player, line };
    }
    if is_full(board) {
        return Outcome::Draw;
    }
    Outcome::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_reports_line_for_highlighting() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::O));
        board.set(Position::MiddleLeft, Square::Occupied(Player::O));
        board.set(Position::BottomLeft, Square::Occupied(Player::O));
        assert_eq!(
            evaluate(&board),
            Outcome::Won {
                player: Player::O,
                line: [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
            }
        );
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        for (pos, player) in [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ] {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_winner_is_won() {
        let mut board = Board::new();
        // X X X / O O X / O X O - top row completes on the final move
        for (pos, player) in [
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ] {
            board.set(pos, Square::Occupied(player));
        }
        assert_eq!(
            evaluate(&board),
            Outcome::Won {
                player: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_multiple_lines_tie_break_by_enumeration_order() {
        let mut board = Board::new();
        // X completes both the top row and the left column; the top row
        // comes first in the enumeration.
        for pos in [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ] {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert_eq!(
            evaluate(&board),
            Outcome::Won {
                player: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }
}
