//! Snapshot chain invariant: consecutive boards differ by one move.

use super::Invariant;
use crate::{Game, Position, Square};
use strum::IntoEnumIterator;

/// Invariant: each snapshot extends its predecessor by exactly the
/// square its move names.
///
/// For every k >= 1, board k and board k-1 agree everywhere except at
/// entry k's move position, which goes from empty to that move's mark.
/// The initial board is entirely empty.
pub struct SnapshotChainInvariant;

impl Invariant<Game> for SnapshotChainInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();

        let initial_empty = Position::iter().all(|pos| history[0].board().is_empty(pos));
        if !initial_empty {
            return false;
        }

        history.windows(2).all(|pair| {
            let (prev, cur) = (&pair[0], &pair[1]);
            let Some(mv) = cur.placed() else {
                return false;
            };
            Position::iter().all(|pos| {
                if pos == mv.position() {
                    prev.board().is_empty(pos)
                        && cur.board().get(pos) == Square::Occupied(mv.player())
                } else {
                    prev.board().get(pos) == cur.board().get(pos)
                }
            })
        })
    }

    fn description() -> &'static str {
        "Consecutive snapshots differ in exactly the square named by the move"
    }
}
