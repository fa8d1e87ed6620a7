use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::{
    lyrics::{PlaybackClock, SynchronizedLyrics},
    routing::Entry,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Push(Entry),
    /// Pops the current screen, then pushes.
    Redirect(Entry),
    Global(Entry),
    Back,
    Home,
    SwitchTab(usize),
    NextTab,
    PlayPause,
    PlayingAlbum,
    PlayingArtist,
    /// Key consumed, nothing to do.
    None,
}

/// Read-only state the app lends to views while rendering and handling input.
pub struct ViewContext<'a> {
    pub tab: usize,
    pub lyrics: &'a SynchronizedLyrics<PlaybackClock>,
    pub plain_lyrics: &'a [String],
    pub is_playing: bool,
}

pub trait View: Send {
    fn title(&self) -> String;

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &ViewContext);

    fn handle_input(&mut self, key: KeyEvent, ctx: &ViewContext) -> Option<Action>;
}
