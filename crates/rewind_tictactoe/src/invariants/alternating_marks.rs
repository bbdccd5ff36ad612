//! Turn order invariant: recorded marks alternate X, O, X, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: history entry k holds an X move iff k is odd.
///
/// X always moves first, so odd entries are X moves and even entries
/// (other than the initial one) are O moves. The initial entry carries
/// no move at all.
pub struct AlternatingMarksInvariant;

impl Invariant<Game> for AlternatingMarksInvariant {
    fn holds(game: &Game) -> bool {
        game.history().iter().enumerate().all(|(k, entry)| {
            match entry.placed() {
                None => k == 0,
                Some(mv) => {
                    let expected = if k % 2 == 1 { Player::X } else { Player::O };
                    k > 0 && mv.player() == expected
                }
            }
        })
    }

    fn description() -> &'static str {
        "History marks alternate starting with X"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingMarksInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_through_a_full_game() {
        let mut game = Game::new();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.play(Position::from_index(index).unwrap());
        }
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_branching() {
        let mut game = Game::new();
        game.play(Position::TopLeft);
        game.play(Position::Center);
        game.jump_to(1).unwrap();
        game.play(Position::TopRight);
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_duplicated_mark_violates() {
        let mut game = Game::new();
        game.play(Position::TopLeft);
        game.play(Position::Center);

        // Rewrite entry 2's move as another X move.
        let position = game.history[2].placed.unwrap().position();
        game.history[2].placed = Some(crate::Move::new(position, Player::X));

        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
