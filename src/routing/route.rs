use std::{borrow::Cow, fmt, marker::PhantomData};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    emitter::GlobalEmitter,
    error::RouteError,
    params::RouteParams,
};

/// Routing key of a destination. Persisted as a plain string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(Cow<'static, str>);

impl RouteId {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RouteId {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl PartialEq<str> for RouteId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RouteId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One level of navigation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub route: RouteId,
    pub params: Vec<Value>,
}

impl Entry {
    pub fn is<P>(&self, route: &Route<P>) -> bool {
        self.route == route.name()
    }
}

/// A named destination whose parameter tuple is fixed by `P`.
///
/// Routes are meant to be declared once as constants:
///
/// ```
/// use tuneroute::routing::Route1;
///
/// const ALBUM: Route1<Option<String>> = Route1::new("albumRoute");
/// let entry = ALBUM.entry((Some("abc123".to_string()),)).unwrap();
/// assert!(entry.is(&ALBUM));
/// ```
pub struct Route<P> {
    name: &'static str,
    _params: PhantomData<fn() -> P>,
}

pub type Route0 = Route<()>;
pub type Route1<A> = Route<(A,)>;
pub type Route2<A, B> = Route<(A, B)>;
pub type Route3<A, B, C> = Route<(A, B, C)>;

impl<P> Route<P> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _params: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn id(&self) -> RouteId {
        RouteId::from_static(self.name)
    }
}

impl<P: RouteParams> Route<P> {
    pub const ARITY: usize = P::ARITY;

    pub fn entry(&self, params: P) -> Result<Entry, RouteError> {
        let params = params.encode().map_err(|source| RouteError::Encode {
            route: self.name,
            source,
        })?;
        Ok(Entry {
            route: self.id(),
            params,
        })
    }

    /// Requests navigation through the emitter rather than a local stack.
    /// Returns whether any dispatcher was listening.
    pub fn global(&self, emitter: &GlobalEmitter, params: P) -> Result<bool, RouteError> {
        Ok(emitter.emit(self.entry(params)?))
    }
}

impl<P> Clone for Route<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Route<P> {}

impl<P> PartialEq for Route<P> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<P> Eq for Route<P> {}

impl<P> fmt::Debug for Route<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Route").field(&self.name).finish()
    }
}
