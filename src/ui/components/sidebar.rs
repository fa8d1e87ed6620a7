use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};

use crate::ui::theme;

/// Vertical list with one highlighted row. Shows the home tabs at host and
/// the back stack elsewhere.
pub struct Sidebar<'a> {
    items: Vec<&'a str>,
    selected_index: Option<usize>,
}

impl<'a> Sidebar<'a> {
    pub fn new(items: Vec<&'a str>, selected_index: Option<usize>) -> Self {
        Self {
            items,
            selected_index,
        }
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if Some(i) == self.selected_index {
                    Style::default()
                        .fg(theme::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme::NEUTRAL)
                };
                ListItem::new(format!("  {item}")).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
