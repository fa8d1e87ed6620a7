use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{ListItem, Paragraph},
};

use crate::ui::{
    catalog::{self, Hit},
    components::list::SelectList,
    routes::{ALBUM_ROUTE, ARTIST_ROUTE, PLAYLIST_ROUTE, SEARCH_ROUTE, entry_for},
    traits::{Action, View, ViewContext},
};

pub struct SearchResult {
    query: String,
    hits: Vec<Hit>,
    list: SelectList,
}

impl SearchResult {
    pub fn new(query: String) -> Self {
        let hits = catalog::search(&query);
        Self {
            query,
            hits,
            list: SelectList::default(),
        }
    }

    fn label(hit: Hit) -> String {
        match hit {
            Hit::Album(id) => format!("Album · {}", catalog::album(id).map_or(id, |a| a.title)),
            Hit::Artist(id) => format!("Artist · {}", catalog::artist_name(id)),
            Hit::Playlist(id) => {
                format!("Playlist · {}", catalog::playlist(id).map_or(id, |p| p.title))
            }
        }
    }
}

impl View for SearchResult {
    fn title(&self) -> String {
        format!("Results for \"{}\"", self.query)
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        if self.hits.is_empty() {
            f.render_widget(Paragraph::new("No results. Press e to edit the query."), area);
            return;
        }
        let items = self
            .hits
            .iter()
            .map(|hit| ListItem::new(Self::label(*hit)))
            .collect();
        self.list.render(f, area, items);
    }

    fn handle_input(&mut self, key: KeyEvent, _ctx: &ViewContext) -> Option<Action> {
        if self.list.handle_key(key.code, self.hits.len()) {
            return Some(Action::None);
        }
        let entry = match key.code {
            KeyCode::Enter => match *self.hits.get(self.list.selected())? {
                Hit::Album(id) => entry_for(&ALBUM_ROUTE, (Some(id.to_string()),)),
                Hit::Artist(id) => entry_for(&ARTIST_ROUTE, (Some(id.to_string()),)),
                Hit::Playlist(id) => entry_for(&PLAYLIST_ROUTE, (Some(id.to_string()),)),
            },
            KeyCode::Char('e') => entry_for(&SEARCH_ROUTE, (self.query.clone(),)),
            _ => return None,
        };
        entry.map(Action::Push)
    }
}
