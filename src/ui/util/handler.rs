use std::time::Instant;

use ratatui::crossterm::event::{KeyEvent, KeyEventKind};
use tracing::{debug, info};

use crate::ui::{
    app::App,
    input::InputHandler,
    routes::{ALBUM_ROUTE, ARTIST_ROUTE, entry_for},
    traits::{Action, ViewContext},
    tui::{TerminalEvent, Tui},
    views::home::TABS,
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        match tui.next().await {
            Some(evt) => Self::handle_event(app, evt, tui).await,
            None => {
                app.should_quit = true;
                Ok(false)
            }
        }
    }

    pub async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {
                info!("Started at depth {}", app.router.depth());
            }
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key),
            TerminalEvent::Tick => {
                app.player.tick(Instant::now());
                app.slide.tick();
                return Ok(app.has_focus);
            }
            TerminalEvent::Resize(_, _) => {}
        }

        Ok(true)
    }

    pub fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctx = ViewContext {
            tab: app.tab,
            lyrics: &app.player.lyrics,
            plain_lyrics: &app.player.plain_lyrics,
            is_playing: app.player.is_playing,
        };
        let action = app
            .screen
            .as_mut()
            .and_then(|screen| screen.handle_input(key, &ctx))
            .or_else(|| InputHandler::handle_key(key));

        if let Some(action) = action {
            Self::dispatch_action(app, action);
        }
    }

    pub fn dispatch_action(app: &mut App, action: Action) {
        debug!("Dispatch {:?}", action);
        match action {
            Action::Quit => app.should_quit = true,
            Action::Push(entry) => {
                app.router.push_entry(entry);
                app.needs_render = true;
            }
            Action::Redirect(entry) => {
                app.router.pop();
                app.router.push_entry(entry);
                app.needs_render = true;
            }
            Action::Global(entry) => {
                app.emitter.emit(entry);
                app.needs_render = true;
            }
            Action::Back => {
                app.router.pop();
                app.needs_render = true;
            }
            Action::Home => {
                app.router.go_host();
                app.needs_render = true;
            }
            Action::SwitchTab(index) => Self::show_tab(app, index),
            Action::NextTab => {
                let next = (app.tab + 1) % TABS.len();
                Self::show_tab(app, next);
            }
            Action::PlayPause => app.player.toggle(),
            Action::PlayingAlbum => {
                let id = app.player.track.album_id.to_string();
                if let Some(entry) = entry_for(&ALBUM_ROUTE, (Some(id),)) {
                    Self::dispatch_action(app, Action::Global(entry));
                }
            }
            Action::PlayingArtist => {
                let id = app.player.track.artist_id.to_string();
                if let Some(entry) = entry_for(&ARTIST_ROUTE, (Some(id),)) {
                    Self::dispatch_action(app, Action::Global(entry));
                }
            }
            Action::None => {}
        }
    }

    fn show_tab(app: &mut App, index: usize) {
        if index >= TABS.len() {
            return;
        }
        app.tab = index;
        if app.router.depth() > 0 {
            app.router.go_host();
            app.needs_render = true;
        }
    }
}
