//! Application state and key handling.

use crossterm::event::KeyCode;
use rewind_tictactoe::{Game, Position};
use tracing::debug;

use crate::input;

/// Which pane has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    /// The 3x3 board.
    Board,
    /// The jump-to-move list.
    History,
}

/// Main application state: the engine plus pure view state.
pub struct App {
    game: Game,
    cursor: Position,
    pane: Pane,
    selected: usize,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            pane: Pane::Board,
            selected: 0,
        }
    }

    /// Returns the game engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the board cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the focused pane.
    pub fn pane(&self) -> Pane {
        self.pane
    }

    /// Returns the selected history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Handles a key press. Returns `false` when the app should exit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Tab => {
                self.pane = match self.pane {
                    Pane::Board => Pane::History,
                    Pane::History => Pane::Board,
                };
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Digits 1-9 play a cell directly, regardless of focus.
                if let Some(digit) = c.to_digit(10)
                    && digit >= 1
                    && let Some(pos) = Position::from_index(digit as usize - 1)
                {
                    self.play(pos);
                }
            }
            key => match self.pane {
                Pane::Board => self.handle_board_key(key),
                Pane::History => self.handle_history_key(key),
            },
        }
        true
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            _ => {}
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(self.game.history().len() - 1);
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Err(error) = self.game.jump_to(self.selected) {
                    // Selection is clamped to the list, so this only
                    // trips if the view state drifts from the engine.
                    debug!(%error, "history selection rejected");
                }
            }
            _ => {}
        }
    }

    fn play(&mut self, pos: Position) {
        self.game.play(pos);
        // Follow the pointer so the list tracks the latest move.
        self.selected = self.game.step();
    }

    fn restart(&mut self) {
        debug!("Restarting game");
        self.game = Game::new();
        self.cursor = Position::Center;
        self.selected = 0;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
