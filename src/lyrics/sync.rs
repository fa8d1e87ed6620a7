use super::{clock::PositionSource, lrc::Sentence};

pub const DEFAULT_OFFSET_MS: u64 = 50;

/// Tracks which sentence is current for a live playback position.
pub struct SynchronizedLyrics<C> {
    sentences: Vec<Sentence>,
    clock: C,
    offset_ms: u64,
    index: usize,
}

impl<C: PositionSource> SynchronizedLyrics<C> {
    pub fn new(sentences: Vec<Sentence>, clock: C) -> Self {
        Self::with_offset(sentences, clock, DEFAULT_OFFSET_MS)
    }

    /// `offset_ms` shows each line slightly ahead of its timestamp.
    pub fn with_offset(sentences: Vec<Sentence>, clock: C, offset_ms: u64) -> Self {
        let mut lyrics = Self {
            sentences,
            clock,
            offset_ms,
            index: 0,
        };
        lyrics.index = lyrics.compute_index();
        lyrics
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Sentence> {
        self.sentences.get(self.index)
    }

    /// Returns whether the current sentence changed.
    pub fn update(&mut self) -> bool {
        let index = self.compute_index();
        if index != self.index {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Fraction of the current sentence already played. The last sentence is
    /// treated as lasting one second.
    pub fn line_progress(&self) -> f64 {
        let Some(current) = self.current() else {
            return 0.0;
        };
        let start = current.time_ms;
        let end = self
            .sentences
            .get(self.index + 1)
            .map(|s| s.time_ms)
            .unwrap_or(start.saturating_add(1000));
        if end <= start {
            return 1.0;
        }
        let pos = self.position();
        (pos.saturating_sub(start) as f64 / (end - start) as f64).clamp(0.0, 1.0)
    }

    fn position(&self) -> u64 {
        self.clock.position_ms().saturating_add(self.offset_ms)
    }

    fn compute_index(&self) -> usize {
        let pos = self.position();
        self.sentences
            .iter()
            .take_while(|s| s.time_ms < pos)
            .count()
            .saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lyrics::{PlaybackClock, parse_lrc};
    use std::time::Duration;

    const SONG: &str = "[00:00.00]\n[00:01.00]one\n[00:02.50]two\n[00:04.00]three";

    #[test]
    fn index_follows_position() {
        let clock = PlaybackClock::new();
        let mut lyrics = SynchronizedLyrics::with_offset(parse_lrc(SONG), clock.clone(), 0);
        assert_eq!(lyrics.index(), 0);

        clock.set_position(Duration::from_millis(1000));
        assert!(!lyrics.update());

        clock.set_position(Duration::from_millis(1001));
        assert!(lyrics.update());
        assert_eq!(lyrics.current().unwrap().text, "one");

        clock.set_position(Duration::from_secs(10));
        assert!(lyrics.update());
        assert_eq!(lyrics.current().unwrap().text, "three");
    }

    #[test]
    fn offset_leads_the_position() {
        let lyrics = SynchronizedLyrics::new(parse_lrc(SONG), || 2_460u64);
        assert_eq!(lyrics.current().unwrap().text, "two");
    }

    #[test]
    fn seeking_back_moves_index_back() {
        let clock = PlaybackClock::new();
        clock.set_position(Duration::from_secs(5));
        let mut lyrics = SynchronizedLyrics::new(parse_lrc(SONG), clock.clone());
        assert_eq!(lyrics.index(), 3);

        clock.set_position(Duration::from_millis(1200));
        assert!(lyrics.update());
        assert_eq!(lyrics.index(), 1);
    }

    #[test]
    fn progress_through_line() {
        let lyrics = SynchronizedLyrics::with_offset(parse_lrc(SONG), || 1_750u64, 0);
        assert!((lyrics.line_progress() - 0.5).abs() < 1e-9);

        let last = SynchronizedLyrics::with_offset(parse_lrc(SONG), || 4_500u64, 0);
        assert!((last.line_progress() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn huge_offset_saturates() {
        let lyrics = SynchronizedLyrics::with_offset(parse_lrc(SONG), || 1_000u64, u64::MAX);
        assert_eq!(lyrics.current().unwrap().text, "three");

        let end = SynchronizedLyrics::with_offset(
            parse_lrc("[00:00.00]a\n[99:59.999]b"),
            || u64::MAX,
            0,
        );
        assert_eq!(end.current().unwrap().text, "b");
        assert_eq!(end.line_progress(), 1.0);
    }

    #[test]
    fn empty_lyrics_have_no_current_line() {
        let mut lyrics = SynchronizedLyrics::new(Vec::new(), || 1_000u64);
        assert!(lyrics.current().is_none());
        assert!(!lyrics.update());
        assert_eq!(lyrics.line_progress(), 0.0);
    }
}
