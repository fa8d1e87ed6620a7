use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    lyrics::{PlaybackClock, SynchronizedLyrics},
    ui::theme,
};

/// Shows the current sentence centered between its neighbours, with a
/// marker for how far through the line playback is. Untimed lyrics are
/// listed as they are.
pub struct LyricsWidget<'a> {
    lyrics: &'a SynchronizedLyrics<PlaybackClock>,
    plain: &'a [String],
}

impl<'a> LyricsWidget<'a> {
    pub fn new(lyrics: &'a SynchronizedLyrics<PlaybackClock>, plain: &'a [String]) -> Self {
        Self { lyrics, plain }
    }
}

fn centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    if y < area.y || y >= area.y + area.height {
        return;
    }
    let w = UnicodeWidthStr::width(text) as u16;
    let x = area.x + area.width.saturating_sub(w) / 2;
    buf.set_stringn(x, y, text, area.width as usize, style);
}

impl Widget for LyricsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let sentences = self.lyrics.sentences();
        let center_row = area.y + area.height / 2;

        if sentences.is_empty() {
            if self.plain.is_empty() {
                centered(buf, area, center_row, "No lyrics available", Style::default());
            }
            for (row, line) in (area.y..area.y + area.height).zip(self.plain) {
                centered(buf, area, row, line, Style::default());
            }
            return;
        }

        let idx = self.lyrics.index();
        let dim = Style::default().fg(theme::NEUTRAL);

        if idx > 0 {
            centered(buf, area, center_row.saturating_sub(1), &sentences[idx - 1].text, dim);
        }
        centered(
            buf,
            area,
            center_row,
            &sentences[idx].text,
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        );
        if let Some(next) = sentences.get(idx + 1) {
            centered(buf, area, center_row.saturating_add(1), &next.text, dim);
        }

        let max_bar_w = area.width.saturating_sub(8).min(30);
        if area.height >= 3 && max_bar_w > 2 {
            let bar_x = area.x + area.width.saturating_sub(max_bar_w) / 2;
            let bar_y = center_row.saturating_add(2);
            if bar_y >= area.y + area.height {
                return;
            }
            let frac = self.lyrics.line_progress();
            let pos = ((frac * (max_bar_w - 1) as f64).round() as u16).min(max_bar_w - 1);
            for i in 0..max_bar_w {
                let (symbol, style) = if i == pos {
                    ("•", Style::default().fg(theme::ACCENT))
                } else {
                    ("─", dim)
                };
                buf.set_string(bar_x + i, bar_y, symbol, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn plain_lines_are_listed_from_the_top() {
        let lyrics = SynchronizedLyrics::new(Vec::new(), PlaybackClock::new());
        let plain = vec!["first verse".to_string(), "second verse".to_string()];
        let area = Rect::new(0, 0, 20, 5);
        let mut buf = Buffer::empty(area);

        LyricsWidget::new(&lyrics, &plain).render(area, &mut buf);

        assert_eq!(row(&buf, 0).trim(), "first verse");
        assert_eq!(row(&buf, 1).trim(), "second verse");
        assert!(row(&buf, 2).trim().is_empty());
    }

    #[test]
    fn no_lyrics_at_all_says_so() {
        let lyrics = SynchronizedLyrics::new(Vec::new(), PlaybackClock::new());
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        LyricsWidget::new(&lyrics, &[]).render(area, &mut buf);

        assert_eq!(row(&buf, 1).trim(), "No lyrics available");
    }
}
