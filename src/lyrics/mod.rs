pub mod clock;
pub mod lrc;
pub mod sync;

pub use clock::{PlaybackClock, PositionSource};
pub use lrc::{Lyrics, Sentence, parse_lrc};
pub use sync::SynchronizedLyrics;
