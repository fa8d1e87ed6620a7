use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{
    routes::{SEARCH_RESULT_ROUTE, entry_for},
    theme,
    traits::{Action, View, ViewContext},
};

/// Query input. Submitting replaces this screen with the results.
pub struct Search {
    input: String,
}

impl Search {
    pub fn new(initial_text_input: String) -> Self {
        Self {
            input: initial_text_input,
        }
    }
}

impl View for Search {
    fn title(&self) -> String {
        "Search".to_string()
    }

    fn render(&mut self, f: &mut Frame, area: Rect, _ctx: &ViewContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let input = Paragraph::new(Line::from(vec![
            self.input.clone().into(),
            "▏".fg(theme::PRIMARY),
        ]))
        .block(Block::default().borders(Borders::ALL).title("Query"));
        f.render_widget(input, chunks[0]);

        f.render_widget(
            Paragraph::new("Enter to search, Esc to go back").style(Style::default().fg(theme::NEUTRAL)),
            chunks[1],
        );
    }

    fn handle_input(&mut self, key: KeyEvent, _ctx: &ViewContext) -> Option<Action> {
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                Some(Action::None)
            }
            KeyCode::Backspace => {
                self.input.pop();
                Some(Action::None)
            }
            KeyCode::Enter => {
                let query = self.input.trim();
                if query.is_empty() {
                    return Some(Action::None);
                }
                entry_for(&SEARCH_RESULT_ROUTE, (query.to_string(),)).map(Action::Redirect)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{key, with_context};

    #[test]
    fn typing_is_consumed() {
        let mut view = Search::new(String::new());
        with_context(|ctx| {
            assert_eq!(view.handle_input(key(KeyCode::Char('q')), ctx), Some(Action::None));
            assert_eq!(view.input, "q");
        });
    }

    #[test]
    fn submit_redirects_to_results() {
        let mut view = Search::new("  tides ".to_string());
        with_context(|ctx| {
            let action = view.handle_input(key(KeyCode::Enter), ctx);
            let expected = SEARCH_RESULT_ROUTE.entry(("tides".to_string(),)).unwrap();
            assert_eq!(action, Some(Action::Redirect(expected)));
        });
    }
}
