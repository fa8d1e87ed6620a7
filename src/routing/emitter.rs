use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, trace};

use super::route::Entry;

/// Single-slot navigation channel shared by the dispatchers that opt in.
///
/// A newer emission overwrites an unconsumed one. Emissions made while nobody
/// listens are dropped, and listeners only see what was emitted after they
/// subscribed.
#[derive(Clone)]
pub struct GlobalEmitter {
    tx: Arc<watch::Sender<Option<Entry>>>,
}

impl GlobalEmitter {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    pub fn emit(&self, entry: Entry) -> bool {
        let route = entry.route.clone();
        match self.tx.send(Some(entry)) {
            Ok(()) => {
                debug!("Emitted global route '{}'", route);
                true
            }
            Err(_) => {
                trace!("Dropped global route '{}': no listeners", route);
                false
            }
        }
    }

    pub fn subscribe(&self) -> GlobalListener {
        GlobalListener {
            rx: self.tx.subscribe(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for GlobalEmitter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct GlobalListener {
    rx: watch::Receiver<Option<Entry>>,
}

impl GlobalListener {
    /// Newest emission this listener has not seen yet.
    pub fn take(&mut self) -> Option<Entry> {
        if !self.rx.has_changed().unwrap_or(false) {
            return None;
        }
        (*self.rx.borrow_and_update()).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Route1;

    const ARTIST: Route1<Option<String>> = Route1::new("artistRoute");

    fn artist(id: &str) -> Entry {
        ARTIST.entry((Some(id.to_string()),)).unwrap()
    }

    #[test]
    fn emission_without_listeners_is_dropped() {
        let emitter = GlobalEmitter::new();
        assert!(!emitter.emit(artist("a")));

        let mut late = emitter.subscribe();
        assert_eq!(late.take(), None);
    }

    #[test]
    fn last_writer_wins() {
        let emitter = GlobalEmitter::new();
        let mut listener = emitter.subscribe();
        emitter.emit(artist("first"));
        emitter.emit(artist("second"));

        assert_eq!(listener.take(), Some(artist("second")));
        assert_eq!(listener.take(), None);
    }

    #[test]
    fn every_listener_sees_an_emission_once() {
        let emitter = GlobalEmitter::new();
        let mut a = emitter.subscribe();
        let mut b = emitter.subscribe();
        assert_eq!(emitter.listener_count(), 2);

        emitter.emit(artist("x"));
        assert_eq!(a.take(), Some(artist("x")));
        assert_eq!(b.take(), Some(artist("x")));
        assert_eq!(a.take(), None);
    }

    #[test]
    fn late_listener_misses_consumed_emission() {
        let emitter = GlobalEmitter::new();
        let mut early = emitter.subscribe();
        emitter.emit(artist("x"));
        assert!(early.take().is_some());

        let mut late = emitter.subscribe();
        assert_eq!(late.take(), None);
    }

    #[test]
    fn dropped_listener_stops_counting() {
        let emitter = GlobalEmitter::new();
        let listener = emitter.subscribe();
        drop(listener);
        assert!(!emitter.emit(artist("x")));
    }
}
