use std::time::{Duration, Instant};

use tracing::debug;

use crate::{
    lyrics::{Lyrics, PlaybackClock, SynchronizedLyrics},
    ui::catalog::Track,
};

/// Simulated playback of the current track. Advances the shared clock on
/// every tick and keeps the lyrics in step with it.
pub struct NowPlaying {
    pub track: &'static Track,
    pub clock: PlaybackClock,
    pub lyrics: SynchronizedLyrics<PlaybackClock>,
    /// Lines of a track whose lyrics carry no timestamps.
    pub plain_lyrics: Vec<String>,
    pub is_playing: bool,
    last_tick: Instant,
}

impl NowPlaying {
    pub fn new(track: &'static Track, lyrics_offset_ms: u64) -> Self {
        let clock = PlaybackClock::new();
        clock.reset(Duration::from_millis(track.duration_ms));

        let text = Lyrics::from_text(track.lrc);
        debug!("Loaded lyrics for '{}' (synced: {})", track.title, text.is_synced());
        let (sentences, plain_lyrics) = match text {
            Lyrics::Synced(sentences) => (sentences, Vec::new()),
            Lyrics::Plain(lines) => (Vec::new(), lines),
        };

        Self {
            track,
            lyrics: SynchronizedLyrics::with_offset(sentences, clock.clone(), lyrics_offset_ms),
            plain_lyrics,
            clock,
            is_playing: true,
            last_tick: Instant::now(),
        }
    }

    pub fn toggle(&mut self) {
        self.is_playing = !self.is_playing;
        self.last_tick = Instant::now();
    }

    /// Returns whether the visible lyric line changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        if !self.is_playing {
            return false;
        }

        self.clock.advance(elapsed);
        if self.clock.is_finished() {
            debug!("'{}' finished, starting over", self.track.title);
            self.clock.reset(Duration::from_millis(self.track.duration_ms));
        }
        self.lyrics.update()
    }

    /// The synced line for the current position. Plain lyrics have none.
    pub fn current_line(&self) -> Option<&str> {
        self.lyrics.current().map(|s| s.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::catalog::NOW_PLAYING;

    static UNTIMED: Track = Track {
        title: "Undertow",
        artist_id: "UC-harbor",
        album_id: "MPRE-tides",
        duration_ms: 10_000,
        lrc: "Pulled out past the pier\nand under again",
    };

    #[test]
    fn tick_moves_lyrics_forward() {
        let mut player = NowPlaying::new(&NOW_PLAYING, 0);
        let start = Instant::now();
        player.last_tick = start;

        assert!(player.tick(start + Duration::from_millis(2_500)));
        assert_eq!(player.current_line(), Some("The harbor hums below the stairs"));
    }

    #[test]
    fn untimed_lyrics_are_kept_as_plain_lines() {
        let mut player = NowPlaying::new(&UNTIMED, 0);
        assert_eq!(player.plain_lyrics, vec!["Pulled out past the pier", "and under again"]);
        assert!(player.lyrics.sentences().is_empty());

        let start = player.last_tick;
        assert!(!player.tick(start + Duration::from_secs(3)));
        assert_eq!(player.current_line(), None);
    }

    #[test]
    fn paused_player_does_not_advance() {
        let mut player = NowPlaying::new(&NOW_PLAYING, 0);
        player.toggle();
        let start = player.last_tick;
        assert!(!player.tick(start + Duration::from_secs(5)));
        assert_eq!(player.clock.progress().0, 0);
    }

    #[test]
    fn track_loops_at_the_end() {
        let mut player = NowPlaying::new(&NOW_PLAYING, 0);
        let start = player.last_tick;
        player.tick(start + Duration::from_millis(NOW_PLAYING.duration_ms + 10));
        assert_eq!(player.clock.progress().0, 0);
        assert_eq!(player.clock.generation(), 2);
    }
}
