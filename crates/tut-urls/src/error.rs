//! Route table error types.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UrlError {
    /// No route is registered under the requested name.
    #[error("Reverse for '{name}' not found: no route has this name")]
    NoReverseMatch { name: String },

    /// The pattern has a placeholder the caller did not supply (or supplied empty).
    #[error("Reverse for '{name}' is missing argument '{argument}'")]
    MissingArgument { name: String, argument: String },

    /// The caller supplied an argument the pattern does not use.
    #[error("Reverse for '{name}' got unexpected argument '{argument}'")]
    UnexpectedArgument { name: String, argument: String },

    /// No registered pattern matches the path.
    #[error("No route matches path '{path}'")]
    NoMatch { path: String },

    /// A route with this name already exists.
    #[error("Route name '{name}' is already registered")]
    DuplicateName { name: String },

    /// The matcher rejected the pattern because it overlaps an existing one.
    #[error("Route pattern '{pattern}' conflicts with an existing route: {reason}")]
    Conflict { pattern: String, reason: String },

    /// The pattern is malformed.
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
