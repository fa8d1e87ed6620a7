use ratatui::crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, ListState},
};

use crate::ui::theme;

/// Keyboard-driven selection shared by the list screens.
#[derive(Debug, Default)]
pub struct SelectList {
    state: ListState,
}

impl SelectList {
    /// Cursor position; the first row until the list has been drawn.
    pub fn selected(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.state.select(None);
    }

    /// Moves the cursor for navigation keys. Returns whether the key was one.
    pub fn handle_key(&mut self, code: KeyCode, len: usize) -> bool {
        if len == 0 {
            return matches!(code, KeyCode::Down | KeyCode::Up | KeyCode::Char('j' | 'k'));
        }
        let i = match code {
            KeyCode::Down | KeyCode::Char('j') => self
                .state
                .selected()
                .map_or(0, |i| if i >= len - 1 { i } else { i + 1 }),
            KeyCode::Up | KeyCode::Char('k') => {
                self.state.selected().map_or(0, |i| i.saturating_sub(1))
            }
            KeyCode::Home => 0,
            KeyCode::End => len - 1,
            _ => return false,
        };
        self.state.select(Some(i));
        true
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, items: Vec<ListItem>) {
        if !items.is_empty() && self.state.selected().is_none() {
            self.state.select(Some(0));
        }

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(theme::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.state);
    }
}
