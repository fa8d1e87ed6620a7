use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Widget},
};

use crate::{
    routing::{Animation, Transition},
    ui::theme,
};

/// Bottom bar: now playing, progress and the last navigation transition.
pub struct PlayerWidget<'a> {
    pub title: &'a str,
    pub artist: &'a str,
    pub progress: (u64, u64),
    pub is_playing: bool,
    pub lyric: Option<&'a str>,
    pub motion: Option<(Transition, Animation)>,
}

impl Widget for PlayerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (current, total) = self.progress;
        let ratio = if total > 0 {
            (current as f64 / total as f64).min(1.0)
        } else {
            0.0
        };

        let icon = if self.is_playing { "▶" } else { "⏸" };
        let track_info = format!("{icon}  {} by {}", self.title, self.artist);

        let motion = match self.motion {
            Some((transition, animation)) => {
                format!(" {} · {} ", transition_label(transition), animation_label(animation))
            }
            None => String::new(),
        };

        let mut block = Block::default()
            .title_top(Line::from(track_info).alignment(Alignment::Center))
            .title_top(Line::from(Span::raw(motion).fg(theme::ACCENT)).alignment(Alignment::Right))
            .borders(Borders::ALL)
            .border_set(border::ROUNDED);
        if let Some(lyric) = self.lyric.filter(|l| !l.is_empty()) {
            block = block.title_bottom(Line::from(lyric).alignment(Alignment::Center));
        }

        Gauge::default()
            .block(block)
            .ratio(ratio)
            .label(format!("{} / {}", format_duration(current), format_duration(total)))
            .gauge_style(Style::default().fg(theme::PRIMARY).bg(theme::BACKGROUND))
            .use_unicode(true)
            .render(area, buf);
    }
}

pub fn transition_label(transition: Transition) -> &'static str {
    match transition {
        Transition::Stacking => "push",
        Transition::Unstacking => "pop",
        Transition::Still => "still",
        Transition::Unknown => "swap",
    }
}

fn animation_label(animation: Animation) -> &'static str {
    match animation {
        Animation::SlideFromRight => "slide ←",
        Animation::SlideFromLeft => "slide →",
        Animation::Still => "fade",
    }
}

pub fn format_duration(duration: u64) -> String {
    let total_seconds = duration / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
