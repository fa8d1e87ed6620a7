use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListItem};

use crate::ui::{
    catalog,
    components::list::SelectList,
    routes::{ALBUM_ROUTE, ARTIST_ROUTE, PLAYLIST_ROUTE, entry_for},
    traits::{Action, View, ViewContext},
};

pub const TABS: [&str; 3] = ["Albums", "Artists", "Playlists"];

/// Host content: one list per tab.
#[derive(Default)]
pub struct Home {
    list: SelectList,
    shown_tab: usize,
}

impl Home {
    fn rows(tab: usize) -> Vec<String> {
        match tab {
            0 => catalog::ALBUMS
                .iter()
                .map(|a| format!("{} · {} ({})", a.title, catalog::artist_name(a.artist_id), a.year))
                .collect(),
            1 => catalog::ARTISTS.iter().map(|a| a.name.to_string()).collect(),
            _ => catalog::PLAYLISTS
                .iter()
                .map(|p| format!("{} ({} tracks)", p.title, p.tracks.len()))
                .collect(),
        }
    }

    fn open(tab: usize, index: usize) -> Option<Action> {
        let entry = match tab {
            0 => entry_for(&ALBUM_ROUTE, (Some(catalog::ALBUMS.get(index)?.id.to_string()),)),
            1 => entry_for(&ARTIST_ROUTE, (Some(catalog::ARTISTS.get(index)?.id.to_string()),)),
            _ => entry_for(
                &PLAYLIST_ROUTE,
                (Some(catalog::PLAYLISTS.get(index)?.id.to_string()),),
            ),
        };
        entry.map(Action::Push)
    }

    fn sync_tab(&mut self, tab: usize) {
        if tab != self.shown_tab {
            self.shown_tab = tab;
            self.list.reset();
        }
    }
}

impl View for Home {
    fn title(&self) -> String {
        "Home".to_string()
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        self.sync_tab(ctx.tab);
        let items = Self::rows(ctx.tab).into_iter().map(ListItem::new).collect();
        self.list.render(f, area, items);
    }

    fn handle_input(&mut self, key: KeyEvent, ctx: &ViewContext) -> Option<Action> {
        self.sync_tab(ctx.tab);
        let len = Self::rows(ctx.tab).len();
        if self.list.handle_key(key.code, len) {
            return Some(Action::None);
        }
        match key.code {
            KeyCode::Enter => Self::open(ctx.tab, self.list.selected()),
            _ => None,
        }
    }
}
