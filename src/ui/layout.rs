use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::{
    app::App,
    catalog,
    components::{player::PlayerWidget, sidebar::Sidebar},
    theme,
    traits::ViewContext,
    views::home::TABS,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let app = self.app;
        f.buffer_mut()
            .set_style(area, Style::new().bg(theme::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(area);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(25), Constraint::Min(1)])
            .split(chunks[0]);

        let sidebar_area = main_chunks[0];
        let content_area = main_chunks[1];

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("tuneroute")
            .title_alignment(Alignment::Center);

        let title = match (&app.screen, &app.render_error) {
            (_, Some(_)) => "Error".to_string(),
            (Some(screen), None) => screen.title(),
            (None, None) => String::new(),
        };
        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title(title);

        let sidebar_inner = sidebar_block.inner(sidebar_area);
        let content_inner = content_block.inner(content_area);

        f.render_widget(sidebar_block, sidebar_area);
        f.render_widget(content_block, content_area);

        // At host the sidebar lists the tabs, otherwise the back stack.
        let (items, selected) = if app.router.depth() == 0 {
            (TABS.iter().map(|t| t.to_string()).collect::<Vec<_>>(), app.tab)
        } else {
            let mut items = vec!["Home".to_string()];
            items.extend(
                app.router
                    .stack()
                    .entries()
                    .iter()
                    .map(|e| e.route.to_string()),
            );
            let last = items.len() - 1;
            (items, last)
        };
        f.render_widget(
            Sidebar::new(items.iter().map(String::as_str).collect(), Some(selected)),
            sidebar_inner,
        );

        if let Some(error) = &app.render_error {
            let text = vec![
                Line::from(error.as_str()).style(Style::default().fg(theme::ERROR)),
                Line::from(""),
                Line::from("Esc to go back").style(Style::default().fg(theme::NEUTRAL)),
            ];
            f.render_widget(Paragraph::new(text).wrap(Wrap { trim: true }), content_inner);
        } else if let Some(screen) = app.screen.as_mut() {
            let ctx = ViewContext {
                tab: app.tab,
                lyrics: &app.player.lyrics,
                plain_lyrics: &app.player.plain_lyrics,
                is_playing: app.player.is_playing,
            };
            screen.render(f, app.slide.apply(content_inner), &ctx);
        }

        let player = &app.player;
        f.render_widget(
            PlayerWidget {
                title: player.track.title,
                artist: catalog::artist_name(player.track.artist_id),
                progress: player.clock.progress(),
                is_playing: player.is_playing,
                lyric: player.current_line(),
                motion: app.motion,
            },
            chunks[1],
        );
    }
}
