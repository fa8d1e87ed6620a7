use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Anything that can report the playback position in milliseconds.
pub trait PositionSource {
    fn position_ms(&self) -> u64;
}

impl<F> PositionSource for F
where
    F: Fn() -> u64,
{
    fn position_ms(&self) -> u64 {
        self()
    }
}

/// Playback position shared between the player and the UI.
#[derive(Default, Debug, Clone)]
pub struct PlaybackClock {
    position_millis: Arc<AtomicU64>,
    duration_millis: Arc<AtomicU64>,
    generation: Arc<AtomicU64>,
}

impl PlaybackClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(&self, position: Duration) {
        self.position_millis
            .store(position.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn advance(&self, by: Duration) {
        let total = self.duration_millis.load(Ordering::Relaxed);
        let next = self.position_millis.load(Ordering::Relaxed) + by.as_millis() as u64;
        let next = if total > 0 { next.min(total) } else { next };
        self.position_millis.store(next, Ordering::Relaxed);
    }

    pub fn set_duration(&self, duration: Duration) {
        self.duration_millis
            .store(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn progress(&self) -> (u64, u64) {
        (
            self.position_millis.load(Ordering::Relaxed),
            self.duration_millis.load(Ordering::Relaxed),
        )
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Relaxed)
    }

    /// Starts a new track.
    pub fn reset(&self, duration: Duration) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.set_position(Duration::ZERO);
        self.set_duration(duration);
    }

    pub fn is_finished(&self) -> bool {
        let (pos, total) = self.progress();
        total > 0 && pos >= total
    }
}

impl PositionSource for PlaybackClock {
    fn position_ms(&self) -> u64 {
        self.position_millis.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stops_at_duration() {
        let clock = PlaybackClock::new();
        clock.reset(Duration::from_secs(2));
        clock.advance(Duration::from_millis(1500));
        assert_eq!(clock.position_ms(), 1500);
        clock.advance(Duration::from_secs(5));
        assert_eq!(clock.position_ms(), 2000);
        assert!(clock.is_finished());
    }

    #[test]
    fn clones_share_position() {
        let clock = PlaybackClock::new();
        let ui = clock.clone();
        clock.set_position(Duration::from_millis(700));
        assert_eq!(ui.position_ms(), 700);
    }

    #[test]
    fn reset_bumps_generation() {
        let clock = PlaybackClock::new();
        clock.set_position(Duration::from_secs(3));
        clock.reset(Duration::from_secs(10));
        assert_eq!(clock.generation(), 1);
        assert_eq!(clock.progress(), (0, 10_000));
    }
}
