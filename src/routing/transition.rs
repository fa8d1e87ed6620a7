//! Derives an animation direction from two consecutive navigation states.
//!
//! Screens never see this; the front end reads the resolved [`Animation`]
//! next to the rendered screen.

use super::route::{Route, RouteId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    pub route: Option<RouteId>,
    pub depth: usize,
}

impl NavState {
    pub fn is<P>(&self, route: &Route<P>) -> bool {
        self.route.as_ref().is_some_and(|r| *r == route.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stacking,
    Unstacking,
    Still,
    Unknown,
}

impl Transition {
    pub fn classify(initial: &NavState, target: &NavState) -> Self {
        if target.depth > initial.depth {
            Transition::Stacking
        } else if target.depth < initial.depth {
            Transition::Unstacking
        } else if target.route != initial.route {
            Transition::Unknown
        } else {
            Transition::Still
        }
    }

    pub fn is_stacking(self) -> bool {
        self == Transition::Stacking
    }

    pub fn is_unstacking(self) -> bool {
        self == Transition::Unstacking
    }

    pub fn is_still(self) -> bool {
        self == Transition::Still
    }

    pub fn is_unknown(self) -> bool {
        self == Transition::Unknown
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    SlideFromRight,
    SlideFromLeft,
    Still,
}

type Override = Box<dyn Fn(&NavState, &NavState) -> Option<Animation> + Send>;

/// Maps classifications to animations. Same-depth route changes are passed
/// to the override, if any.
#[derive(Default)]
pub struct TransitionSpec {
    on_unknown: Option<Override>,
}

impl TransitionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_unknown<F>(mut self, f: F) -> Self
    where
        F: Fn(&NavState, &NavState) -> Option<Animation> + Send + 'static,
    {
        self.on_unknown = Some(Box::new(f));
        self
    }

    pub fn resolve(&self, transition: Transition, initial: &NavState, target: &NavState) -> Animation {
        match transition {
            Transition::Stacking => Animation::SlideFromRight,
            Transition::Unstacking => Animation::SlideFromLeft,
            Transition::Unknown => self
                .on_unknown
                .as_ref()
                .and_then(|f| f(initial, target))
                .unwrap_or(Animation::Still),
            Transition::Still => Animation::Still,
        }
    }
}

/// Remembers the last observed state so each render can be classified
/// against the one before it.
#[derive(Debug, Default)]
pub(crate) struct TransitionTracker {
    last: NavState,
}

impl TransitionTracker {
    pub(crate) fn new(initial: NavState) -> Self {
        Self { last: initial }
    }

    pub(crate) fn observe(&mut self, next: NavState) -> (Transition, NavState) {
        let transition = Transition::classify(&self.last, &next);
        let previous = std::mem::replace(&mut self.last, next);
        (transition, previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::Route1;

    const SEARCH: Route1<String> = Route1::new("searchRoute");
    const SEARCH_RESULT: Route1<String> = Route1::new("searchResultRoute");

    fn at(route: Option<&'static str>, depth: usize) -> NavState {
        NavState {
            route: route.map(RouteId::from_static),
            depth,
        }
    }

    #[test]
    fn depth_decides_direction() {
        for n in 0..4 {
            assert!(Transition::classify(&at(None, n), &at(Some("a"), n + 1)).is_stacking());
            assert!(Transition::classify(&at(Some("a"), n + 1), &at(None, n)).is_unstacking());
        }
    }

    #[test]
    fn same_route_same_depth_is_still() {
        let state = at(Some("albumRoute"), 2);
        assert!(Transition::classify(&state, &state.clone()).is_still());
    }

    #[test]
    fn replacement_is_unknown() {
        assert!(Transition::classify(&at(Some("a"), 1), &at(Some("b"), 1)).is_unknown());
    }

    #[test]
    fn override_applies_only_to_unknown() {
        let spec = TransitionSpec::new().on_unknown(|initial, target| {
            if initial.is(&SEARCH) && target.is(&SEARCH_RESULT) {
                Some(Animation::SlideFromRight)
            } else if initial.is(&SEARCH_RESULT) && target.is(&SEARCH) {
                Some(Animation::SlideFromLeft)
            } else {
                None
            }
        });

        let search = at(Some("searchRoute"), 1);
        let result = at(Some("searchResultRoute"), 1);
        let other = at(Some("settingsRoute"), 1);

        assert_eq!(spec.resolve(Transition::Unknown, &search, &result), Animation::SlideFromRight);
        assert_eq!(spec.resolve(Transition::Unknown, &result, &search), Animation::SlideFromLeft);
        assert_eq!(spec.resolve(Transition::Unknown, &search, &other), Animation::Still);
        assert_eq!(spec.resolve(Transition::Still, &search, &search), Animation::Still);
    }

    #[test]
    fn tracker_compares_with_previous_observation() {
        let mut tracker = TransitionTracker::new(at(None, 0));
        let (t, prev) = tracker.observe(at(Some("a"), 1));
        assert!(t.is_stacking());
        assert_eq!(prev, at(None, 0));
        let (t, _) = tracker.observe(at(Some("a"), 1));
        assert!(t.is_still());
    }
}
