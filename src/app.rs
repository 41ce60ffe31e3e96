//! Application state and screen flow
//!
//! MainMenu <-> MapSelect -> Game, MainMenu <-> DifficultySelect and
//! MainMenu <-> Editor. Screens report clicks through action enums; the
//! methods here do the switching. The high score lives for the lifetime of
//! the process and is folded back in whenever a session ends or restarts.

use crate::editor::EditorState;
use crate::game::{Difficulty, Session};
use crate::input::InputState;
use crate::world::{MapStore, TileMap};

/// Which screen the frame dispatch draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    DifficultySelect,
    MapSelect,
    Editor,
    Game,
}

pub struct AppState {
    pub screen: Screen,
    pub store: MapStore,
    pub difficulty: Difficulty,
    pub high_score: u32,
    pub editor: EditorState,
    pub session: Option<Session>,
    /// Store index of the running map, for Play Again
    session_map: Option<usize>,
    pub input: InputState,
}

impl AppState {
    pub fn new(store: MapStore) -> Self {
        AppState {
            screen: Screen::MainMenu,
            store,
            difficulty: Difficulty::Easy,
            high_score: 0,
            editor: EditorState::new(),
            session: None,
            session_map: None,
            input: InputState::new(),
        }
    }

    /// Start a session on the stored map at `index`. A record that fails
    /// validation is logged and leaves the screen unchanged.
    pub fn start_session(&mut self, index: usize) {
        self.harvest_high_score();
        let Some(record) = self.store.get(index) else {
            return;
        };
        match TileMap::from_record(record) {
            Ok(map) => {
                self.session = Some(Session::new(map, self.difficulty, self.high_score));
                self.session_map = Some(index);
                self.screen = Screen::Game;
            }
            Err(e) => eprintln!("Failed to load map {}: {e}", record.name),
        }
    }

    /// Play Again: a fresh session on the same map
    pub fn restart_session(&mut self) {
        if let Some(index) = self.session_map {
            self.start_session(index);
        }
    }

    /// Drop the session and return to the menu
    pub fn end_session(&mut self) {
        self.harvest_high_score();
        self.session = None;
        self.session_map = None;
        self.screen = Screen::MainMenu;
    }

    fn harvest_high_score(&mut self) {
        if let Some(session) = &self.session {
            self.high_score = self.high_score.max(session.high_score());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> AppState {
        // Path is only touched on save, which these tests never do
        AppState::new(MapStore::with_defaults("maps.json"))
    }

    #[test]
    fn test_start_session_switches_to_game() {
        let mut app = app();
        app.start_session(0);
        assert_eq!(app.screen, Screen::Game);
        assert!(app.session.is_some());
    }

    #[test]
    fn test_start_session_ignores_bad_index() {
        let mut app = app();
        app.start_session(99);
        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.session.is_none());
    }

    #[test]
    fn test_end_session_returns_to_menu() {
        let mut app = app();
        app.start_session(0);
        app.end_session();
        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.session.is_none());
        // Play Again after leaving does nothing
        app.restart_session();
        assert!(app.session.is_none());
    }

    #[test]
    fn test_restart_reuses_the_same_map() {
        let mut app = app();
        app.start_session(0);
        app.restart_session();
        assert_eq!(app.screen, Screen::Game);
        assert!(app.session.is_some());
    }
}
