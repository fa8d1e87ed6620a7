use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{ListItem, Paragraph, Wrap},
};
use tracing::{error, warn};

use crate::{
    routing::{Entry, GlobalEmitter, RouteHandler},
    ui::{
        catalog::{self, Album, Artist, Playlist},
        components::list::SelectList,
        routes::{ALBUM_ROUTE, ARTIST_ROUTE, Screen, entry_for, global_routes, screen},
        theme,
        traits::{Action, View, ViewContext},
    },
};

enum Subject {
    Album(&'static Album),
    Artist(&'static Artist),
    Playlist(&'static Playlist),
    Missing(String),
}

/// Stands in for the page's own content while its nested stack is empty.
struct PageContent;

impl View for PageContent {
    fn title(&self) -> String {
        String::new()
    }

    fn render(&mut self, _f: &mut Frame, _area: Rect, _ctx: &ViewContext) {}

    fn handle_input(&mut self, _key: KeyEvent, _ctx: &ViewContext) -> Option<Action> {
        None
    }
}

/// Album, artist and playlist pages. The id is whatever the route carried;
/// an id the library does not know renders a notice.
///
/// Each page owns a dispatcher over the global routes, so pages opened from
/// here stack inside it and global emissions land here too.
pub struct Browse {
    subject: Subject,
    list: SelectList,
    nested: Option<RouteHandler<Screen>>,
    child: Option<Screen>,
    error: Option<String>,
    stale: bool,
}

impl Browse {
    pub fn album(browse_id: String, emitter: &GlobalEmitter) -> Self {
        Self::from(catalog::album(&browse_id).map(Subject::Album), browse_id, emitter)
    }

    pub fn artist(browse_id: String, emitter: &GlobalEmitter) -> Self {
        Self::from(catalog::artist(&browse_id).map(Subject::Artist), browse_id, emitter)
    }

    pub fn playlist(browse_id: String, emitter: &GlobalEmitter) -> Self {
        Self::from(catalog::playlist(&browse_id).map(Subject::Playlist), browse_id, emitter)
    }

    fn from(subject: Option<Subject>, browse_id: String, emitter: &GlobalEmitter) -> Self {
        let nested = global_routes(RouteHandler::builder(|| screen(PageContent)), emitter)
            .listen_to(emitter)
            .build()
            .inspect_err(|e| error!("Page for '{browse_id}' runs without nested routes: {e}"))
            .ok();

        Self {
            subject: subject.unwrap_or(Subject::Missing(browse_id)),
            list: SelectList::default(),
            nested,
            child: None,
            error: None,
            stale: false,
        }
    }

    fn rows(&self) -> Vec<String> {
        match self.subject {
            Subject::Album(album) => album
                .tracks
                .iter()
                .enumerate()
                .map(|(i, t)| format!("{:>2}. {t}", i + 1))
                .collect(),
            Subject::Artist(artist) => catalog::albums_by(artist.id)
                .map(|a| format!("{} ({})", a.title, a.year))
                .collect(),
            Subject::Playlist(playlist) => playlist
                .tracks
                .iter()
                .map(|(t, artist)| format!("{t} · {}", catalog::artist_name(artist)))
                .collect(),
            Subject::Missing(_) => Vec::new(),
        }
    }

    fn nested_depth(&self) -> usize {
        self.nested.as_ref().map_or(0, RouteHandler::depth)
    }

    /// Picks up global emissions and re-renders the nested top after it
    /// changed.
    fn sync_nested(&mut self) {
        let Some(nested) = self.nested.as_mut() else {
            return;
        };
        if nested.sync_global() {
            self.stale = true;
        }
        if !self.stale {
            return;
        }
        self.stale = false;

        match nested.render() {
            Ok(rendered) => {
                self.child = (rendered.depth > 0).then_some(rendered.screen);
                self.error = None;
            }
            Err(e) => {
                warn!("Nested route failed to render: {e}");
                self.child = None;
                self.error = Some(e.to_string());
            }
        }
    }

    fn open(&mut self, entry: Entry) -> Option<Action> {
        match self.nested.as_mut() {
            Some(nested) => {
                nested.push_entry(entry);
                self.stale = true;
                Some(Action::None)
            }
            None => Some(Action::Push(entry)),
        }
    }

    /// Applies stack actions of the nested top to the nested stack. Other
    /// actions go up unchanged.
    fn nested_action(&mut self, action: Option<Action>, key: KeyEvent) -> Option<Action> {
        let Some(nested) = self.nested.as_mut() else {
            return action;
        };
        match action {
            Some(Action::Push(entry)) => nested.push_entry(entry),
            Some(Action::Redirect(entry)) => {
                nested.pop();
                nested.push_entry(entry);
            }
            Some(Action::Back) => {
                nested.pop();
            }
            None if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) => {
                nested.pop();
            }
            other => return other,
        }
        self.stale = true;
        Some(Action::None)
    }

    fn own_input(&mut self, key: KeyEvent) -> Option<Action> {
        if self.list.handle_key(key.code, self.rows().len()) {
            return Some(Action::None);
        }
        let entry = match (key.code, &self.subject) {
            (KeyCode::Enter, Subject::Artist(artist)) => {
                let album = catalog::albums_by(artist.id).nth(self.list.selected())?;
                entry_for(&ALBUM_ROUTE, (Some(album.id.to_string()),))?
            }
            (KeyCode::Char('a'), Subject::Album(album)) => {
                entry_for(&ARTIST_ROUTE, (Some(album.artist_id.to_string()),))?
            }
            (KeyCode::Enter, Subject::Playlist(playlist)) => {
                let (_, artist_id) = playlist.tracks.get(self.list.selected())?;
                entry_for(&ARTIST_ROUTE, (Some(artist_id.to_string()),))?
            }
            _ => return None,
        };
        self.open(entry)
    }
}

impl View for Browse {
    fn title(&self) -> String {
        if let Some(child) = &self.child {
            return child.title();
        }
        match self.subject {
            Subject::Album(album) => {
                format!("{} · {}", album.title, catalog::artist_name(album.artist_id))
            }
            Subject::Artist(artist) => artist.name.to_string(),
            Subject::Playlist(playlist) => playlist.title.to_string(),
            Subject::Missing(ref id) => format!("Unknown item {id}"),
        }
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        self.sync_nested();
        if let Some(child) = self.child.as_mut() {
            child.render(f, area, ctx);
            return;
        }
        if let Some(error) = &self.error {
            f.render_widget(
                Paragraph::new(error.as_str())
                    .style(Style::default().fg(theme::ERROR))
                    .wrap(Wrap { trim: true }),
                area,
            );
            return;
        }
        if let Subject::Missing(id) = &self.subject {
            f.render_widget(Paragraph::new(format!("Nothing found for '{id}'")), area);
            return;
        }
        let items = self.rows().into_iter().map(ListItem::new).collect();
        self.list.render(f, area, items);
    }

    fn handle_input(&mut self, key: KeyEvent, ctx: &ViewContext) -> Option<Action> {
        self.sync_nested();
        let action = if self.nested_depth() > 0 {
            let action = self
                .child
                .as_mut()
                .and_then(|child| child.handle_input(key, ctx));
            self.nested_action(action, key)
        } else {
            self.own_input(key)
        };
        self.sync_nested();
        action
    }
}
