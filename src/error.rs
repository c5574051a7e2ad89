use thiserror::Error;

/// Errors reported while building a router.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A handler is already registered for this pattern and method.
    #[error("duplicate route: {method} {pattern}")]
    DuplicateRoute { pattern: String, method: String },
}
