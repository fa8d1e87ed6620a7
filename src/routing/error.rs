use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouteError {
    #[error("Route '{0}' is registered more than once")]
    DuplicateRoute(&'static str),

    #[error("Failed to encode parameters for route '{route}': {source}")]
    Encode {
        route: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Error, Debug)]
pub enum ParamError {
    #[error("Expected {expected} parameters, found {found}")]
    Arity { expected: usize, found: usize },

    #[error("Parameter {index} has the wrong type: {source}")]
    Type {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure reported by a screen builder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScreenError {
    #[error("{0} cannot be null")]
    MissingParameter(&'static str),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Route '{route}' requires '{param}' but it was not provided")]
    MissingParameter { route: String, param: &'static str },

    #[error("No handler is registered for route '{0}'")]
    Unmatched(String),

    #[error("Stored parameters for route '{route}' are invalid: {source}")]
    Params {
        route: String,
        #[source]
        source: ParamError,
    },
}

#[derive(Error, Debug)]
pub enum StateError {
    #[error("Failed to access navigation state file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Navigation state is malformed: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Unsupported navigation state version {0}")]
    Version(u32),
}
