use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::{
    routes::{LYRICS_ROUTE, SEARCH_ROUTE, SETTINGS_ROUTE, entry_for},
    traits::Action,
};

/// App-wide keys, consulted after the active view declined the key.
pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<Action> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
            (KeyCode::Char('q'), _) => Some(Action::Quit),
            (KeyCode::Esc | KeyCode::Backspace, _) => Some(Action::Back),
            (KeyCode::Char('h'), _) => Some(Action::Home),
            (KeyCode::Tab, _) => Some(Action::NextTab),
            (KeyCode::Char(' '), _) => Some(Action::PlayPause),
            (KeyCode::Char('A'), _) => Some(Action::PlayingAlbum),
            (KeyCode::Char('R'), _) => Some(Action::PlayingArtist),
            (KeyCode::Char(c @ '1'..='3'), _) => Some(Action::SwitchTab(c as usize - '1' as usize)),
            (KeyCode::Char('/'), _) => entry_for(&SEARCH_ROUTE, (String::new(),)).map(Action::Push),
            (KeyCode::Char('s'), _) => entry_for(&SETTINGS_ROUTE, ()).map(Action::Push),
            (KeyCode::Char('y'), _) => entry_for(&LYRICS_ROUTE, ()).map(Action::Push),
            _ => None,
        }
    }
}
