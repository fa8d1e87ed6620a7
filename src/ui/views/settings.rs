use ratatui::crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::Paragraph,
};

use crate::{
    config::Config,
    routing::UnmatchedPolicy,
    ui::traits::{Action, View, ViewContext},
};

pub struct Settings {
    config: Config,
}

impl Settings {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl View for Settings {
    fn title(&self) -> String {
        "Settings".to_string()
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let unmatched = match self.config.unmatched {
            UnmatchedPolicy::Error => "show error",
            UnmatchedPolicy::FallbackToHost => "return home",
        };
        let state_file = self
            .config
            .state_file
            .as_ref()
            .map_or("none".to_string(), |p| p.display().to_string());

        let lines = vec![
            Line::from(format!("Tick rate           {} ms", self.config.tick_rate_ms)),
            Line::from(format!("Unknown routes      {unmatched}")),
            Line::from(format!("Lyrics lead         {} ms", self.config.lyrics_offset_ms)),
            Line::from(format!("Restore navigation  {}", self.config.restore_state)),
            Line::from(format!("State file          {state_file}")),
        ];
        f.render_widget(Paragraph::new(lines), area);
    }

    fn handle_input(&mut self, _key: KeyEvent, _ctx: &ViewContext) -> Option<Action> {
        None
    }
}
