use std::{collections::HashSet, str::FromStr};

use serde_json::Value;
use tracing::{debug, warn};

use super::{
    emitter::{GlobalEmitter, GlobalListener},
    error::{RenderError, RouteError, ScreenError},
    params::RouteParams,
    route::{Entry, Route, RouteId},
    stack::{NavStack, SavedStack},
    transition::{Animation, NavState, Transition, TransitionSpec, TransitionTracker},
};

/// What to do when the top entry names a route nobody handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnmatchedPolicy {
    Error,
    FallbackToHost,
}

impl Default for UnmatchedPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            UnmatchedPolicy::Error
        } else {
            UnmatchedPolicy::FallbackToHost
        }
    }
}

impl FromStr for UnmatchedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(UnmatchedPolicy::Error),
            "host" | "fallback" => Ok(UnmatchedPolicy::FallbackToHost),
            other => Err(format!("unknown unmatched policy '{other}'")),
        }
    }
}

/// Unwraps a parameter a screen cannot do without.
pub fn required<T>(value: Option<T>, name: &'static str) -> Result<T, ScreenError> {
    value.ok_or(ScreenError::MissingParameter(name))
}

type RenderFn<S> = Box<dyn Fn(&[Value]) -> Result<S, RenderError> + Send>;
type HostFn<S> = Box<dyn Fn() -> S + Send>;

struct Handler<S> {
    route: &'static str,
    render: RenderFn<S>,
}

#[derive(Debug)]
pub struct Rendered<S> {
    pub screen: S,
    pub route: Option<RouteId>,
    pub depth: usize,
    pub transition: Transition,
    pub animation: Animation,
}

pub struct RouteHandlerBuilder<S> {
    host: HostFn<S>,
    handlers: Vec<Handler<S>>,
    listener: Option<GlobalListener>,
    unmatched: UnmatchedPolicy,
    transitions: TransitionSpec,
}

impl<S> RouteHandlerBuilder<S> {
    /// Registers a screen for `route`. Handlers are tried in registration
    /// order.
    pub fn route<P, F>(mut self, route: &Route<P>, render: F) -> Self
    where
        P: RouteParams + 'static,
        F: Fn(P) -> Result<S, ScreenError> + Send + 'static,
    {
        let name = route.name();
        self.handlers.push(Handler {
            route: name,
            render: Box::new(move |values| {
                let params = P::decode(values).map_err(|source| RenderError::Params {
                    route: name.to_string(),
                    source,
                })?;
                render(params).map_err(|e| match e {
                    ScreenError::MissingParameter(param) => RenderError::MissingParameter {
                        route: name.to_string(),
                        param,
                    },
                })
            }),
        });
        self
    }

    pub fn listen_to(mut self, emitter: &GlobalEmitter) -> Self {
        self.listener = Some(emitter.subscribe());
        self
    }

    pub fn unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.unmatched = policy;
        self
    }

    pub fn transitions(mut self, spec: TransitionSpec) -> Self {
        self.transitions = spec;
        self
    }

    pub fn build(self) -> Result<RouteHandler<S>, RouteError> {
        let mut seen = HashSet::new();
        for handler in &self.handlers {
            if !seen.insert(handler.route) {
                return Err(RouteError::DuplicateRoute(handler.route));
            }
        }

        debug!(
            "Built route handler with {} routes (global: {})",
            self.handlers.len(),
            self.listener.is_some()
        );

        Ok(RouteHandler {
            stack: NavStack::new(),
            host: self.host,
            handlers: self.handlers,
            listener: self.listener,
            unmatched: self.unmatched,
            transitions: self.transitions,
            tracker: TransitionTracker::default(),
        })
    }
}

/// Owns a navigation stack and renders its top entry.
pub struct RouteHandler<S> {
    stack: NavStack,
    host: HostFn<S>,
    handlers: Vec<Handler<S>>,
    listener: Option<GlobalListener>,
    unmatched: UnmatchedPolicy,
    transitions: TransitionSpec,
    tracker: TransitionTracker,
}

impl<S> RouteHandler<S> {
    /// Starts a builder; `host` renders whenever no route is active.
    pub fn builder<H>(host: H) -> RouteHandlerBuilder<S>
    where
        H: Fn() -> S + Send + 'static,
    {
        RouteHandlerBuilder {
            host: Box::new(host),
            handlers: Vec::new(),
            listener: None,
            unmatched: UnmatchedPolicy::default(),
            transitions: TransitionSpec::default(),
        }
    }

    pub fn push<P: RouteParams>(&mut self, route: &Route<P>, params: P) -> Result<(), RouteError> {
        self.push_entry(route.entry(params)?);
        Ok(())
    }

    pub fn push_entry(&mut self, entry: Entry) {
        debug!("Push '{}' at depth {}", entry.route, self.stack.depth() + 1);
        self.stack.push(entry);
    }

    pub fn replace<P: RouteParams>(
        &mut self,
        route: &Route<P>,
        params: P,
    ) -> Result<(), RouteError> {
        let entry = route.entry(params)?;
        debug!("Replace top with '{}'", entry.route);
        self.stack.replace(entry);
        Ok(())
    }

    /// `None` returns to host content.
    pub fn navigate(&mut self, target: Option<Entry>) {
        match target {
            Some(entry) => self.push_entry(entry),
            None => self.go_host(),
        }
    }

    pub fn go_host(&mut self) {
        debug!("Clear {} entries back to host", self.stack.depth());
        self.stack.clear();
    }

    /// Returns whether an entry was removed. Popping at host does nothing.
    pub fn pop(&mut self) -> bool {
        match self.stack.pop() {
            Some(entry) => {
                debug!("Pop '{}', depth now {}", entry.route, self.stack.depth());
                true
            }
            None => false,
        }
    }

    pub fn current(&self) -> Option<&Entry> {
        self.stack.top()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn stack(&self) -> &NavStack {
        &self.stack
    }

    pub fn state(&self) -> NavState {
        self.stack.state()
    }

    pub fn handles(&self, route: &RouteId) -> bool {
        self.handlers.iter().any(|h| *route == h.route)
    }

    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    /// Applies a pending global emission as a push.
    pub fn sync_global(&mut self) -> bool {
        let entry = match self.listener.as_mut().and_then(GlobalListener::take) {
            Some(entry) => entry,
            None => return false,
        };
        debug!("Received global route '{}'", entry.route);
        self.push_entry(entry);
        true
    }

    pub fn render(&mut self) -> Result<Rendered<S>, RenderError> {
        self.sync_global();

        let current = self.stack.state();
        let (transition, previous) = self.tracker.observe(current.clone());
        let animation = self.transitions.resolve(transition, &previous, &current);

        let screen = self.render_screen()?;

        Ok(Rendered {
            screen,
            route: current.route,
            depth: current.depth,
            transition,
            animation,
        })
    }

    fn render_screen(&self) -> Result<S, RenderError> {
        let Some(entry) = self.stack.top() else {
            return Ok((self.host)());
        };

        match self.handlers.iter().find(|h| entry.route == h.route) {
            Some(handler) => (handler.render)(&entry.params),
            None => match self.unmatched {
                UnmatchedPolicy::Error => Err(RenderError::Unmatched(entry.route.to_string())),
                UnmatchedPolicy::FallbackToHost => {
                    warn!("No handler for route '{}', showing host", entry.route);
                    Ok((self.host)())
                }
            },
        }
    }

    pub fn save(&self) -> SavedStack {
        self.stack.save()
    }

    /// Replaces the stack with a saved one, dropping entries for routes this
    /// handler does not know. Returns how many were dropped.
    pub fn restore(&mut self, saved: SavedStack) -> usize {
        let mut stack = NavStack::restore(saved);
        let before = stack.depth();
        stack.retain(|entry| {
            let known = self.handlers.iter().any(|h| entry.route == h.route);
            if !known {
                warn!("Dropping restored entry for unknown route '{}'", entry.route);
            }
            known
        });
        let dropped = before - stack.depth();
        self.tracker = TransitionTracker::new(stack.state());
        self.stack = stack;
        dropped
    }
}
