//! Step pointer invariant: the pointer always names a recorded entry.

use super::Invariant;
use crate::Game;

/// Invariant: the step pointer is a valid index into the history.
///
/// The history always holds at least the initial empty-board entry,
/// so the pointer can never dangle.
pub struct StepInRangeInvariant;

impl Invariant<Game> for StepInRangeInvariant {
    fn holds(game: &Game) -> bool {
        game.step() < game.history().len()
    }

    fn description() -> &'static str {
        "Step pointer is a valid index into the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInRangeInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_holds_after_branching() {
        let mut game = Game::new();
        game.play(Position::TopLeft);
        game.play(Position::Center);
        game.jump_to(0).unwrap();
        game.play(Position::BottomRight);
        assert!(StepInRangeInvariant::holds(&game));
    }

    #[test]
    fn test_dangling_pointer_violates() {
        let mut game = Game::new();
        game.step = 5;
        assert!(!StepInRangeInvariant::holds(&game));
    }
}
