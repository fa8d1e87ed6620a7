//! Helpers for view tests. Only compiled with `cfg(test)`.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    config::Config,
    lyrics::{PlaybackClock, SynchronizedLyrics},
    ui::{app::App, traits::ViewContext},
};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn with_context<R>(f: impl FnOnce(&ViewContext) -> R) -> R {
    let lyrics = SynchronizedLyrics::new(Vec::new(), PlaybackClock::new());
    let ctx = ViewContext {
        tab: 0,
        lyrics: &lyrics,
        plain_lyrics: &[],
        is_playing: false,
    };
    f(&ctx)
}

/// An app that never touches the state file.
pub fn test_app() -> App {
    let config = Config {
        restore_state: false,
        state_file: None,
        ..Config::default()
    };
    App::new(config).unwrap()
}
