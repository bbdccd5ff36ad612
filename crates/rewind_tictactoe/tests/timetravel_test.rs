//! Scripted game scenarios exercising history and time travel.

use rewind_tictactoe::{Game, Outcome, Player, Position, Square};

fn play_indices(game: &mut Game, indices: &[usize]) {
    for &index in indices {
        let pos = Position::from_index(index).expect("test index in range");
        game.play(pos);
    }
}

#[test]
fn test_top_row_win_scenario() {
    // X: 0, 1, 2; O: 4, 3. X completes the top row on the fifth move.
    let mut game = Game::new();
    play_indices(&mut game, &[0, 4, 1, 3, 2]);

    assert_eq!(game.history().len(), 6);
    assert_eq!(game.step(), 5);
    assert_eq!(
        game.outcome(),
        Outcome::Won {
            player: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        }
    );
}

#[test]
fn test_draw_scenario() {
    // Fill order 0,1,2,4,3,5,7,6,8 completes no line.
    let mut game = Game::new();
    play_indices(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.history().len(), 10);
    assert_eq!(game.outcome(), Outcome::Draw);
}

#[test]
fn test_double_click_same_square() {
    let mut game = Game::new();
    game.play(Position::TopLeft);
    game.play(Position::TopLeft);

    assert_eq!(game.step(), 1);
    assert_eq!(game.history().len(), 2);
    assert_eq!(
        game.board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_jump_then_move_truncates() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 4, 1, 3]);
    assert_eq!(game.history().len(), 5);

    game.jump_to(2).unwrap();
    game.play(Position::BottomRight);

    // Truncated to [0..=2] before the append.
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.step(), 3);
    let mv = game.history()[3].placed().unwrap();
    assert_eq!(mv.player(), Player::X);
    assert_eq!(mv.position(), Position::BottomRight);
}

#[test]
fn test_parity_follows_pointer() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 4, 1, 3]);

    for step in 0..game.history().len() {
        game.jump_to(step).unwrap();
        assert_eq!(game.x_is_next(), step % 2 == 0);
    }
}

#[test]
fn test_every_snapshot_remains_reachable() {
    let mut game = Game::new();
    play_indices(&mut game, &[4, 0, 8]);

    // Entry 0 is empty, each later entry has one more mark.
    for (step, entry) in game.history().iter().enumerate() {
        let filled = entry
            .board()
            .squares()
            .iter()
            .filter(|sq| **sq != Square::Empty)
            .count();
        assert_eq!(filled, step);
    }

    // Jumping around never alters the recorded snapshots.
    let snapshot = game.history().to_vec();
    game.jump_to(0).unwrap();
    game.jump_to(3).unwrap();
    assert_eq!(game.history(), snapshot.as_slice());
}

#[test]
fn test_replayed_game_round_trips_through_json() {
    let mut game = Game::new();
    play_indices(&mut game, &[0, 4, 1]);
    game.jump_to(2).unwrap();

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, game);
    assert_eq!(restored.step(), 2);
}
