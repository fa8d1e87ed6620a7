//! Typed stack navigation.
//!
//! Routes are constants whose parameter tuple fixes their arity. A
//! [`RouteHandler`] owns a [`NavStack`], renders its top entry through the
//! first registered handler with a matching name, and classifies every render
//! against the previous one so the front end can pick an animation. A
//! [`GlobalEmitter`] lets code without access to a handler request navigation
//! from every handler that listens to it.

pub mod emitter;
pub mod error;
pub mod handler;
pub mod params;
pub mod route;
pub mod stack;
pub mod transition;

pub use emitter::{GlobalEmitter, GlobalListener};
pub use error::{ParamError, RenderError, RouteError, ScreenError, StateError};
pub use handler::{Rendered, RouteHandler, RouteHandlerBuilder, UnmatchedPolicy, required};
pub use params::RouteParams;
pub use route::{Entry, Route, Route0, Route1, Route2, Route3, RouteId};
pub use stack::{NavStack, SavedStack};
pub use transition::{Animation, NavState, Transition, TransitionSpec};
