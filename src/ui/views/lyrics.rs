use ratatui::crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::ui::{
    components::lyrics::LyricsWidget,
    traits::{Action, View, ViewContext},
};

#[derive(Default)]
pub struct Lyrics;

impl View for Lyrics {
    fn title(&self) -> String {
        "Lyrics".to_string()
    }

    fn render(&mut self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        f.render_widget(LyricsWidget::new(ctx.lyrics, ctx.plain_lyrics), area);
    }

    fn handle_input(&mut self, _key: KeyEvent, _ctx: &ViewContext) -> Option<Action> {
        None
    }
}
