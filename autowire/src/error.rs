use thiserror::Error;

/// The error type returned by every resolution and invocation in `fibre_autowire`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("class not found: {0}")]
  ClassNotFound(String),

  #[error("function not found: {0}()")]
  FunctionNotFound(String),

  /// A value parameter had no positional value, no named value and no default.
  #[error("missing argument: {0}")]
  MissingArgument(String),

  #[error("alias cycle detected: {}", .chain.join(" -> "))]
  AliasCycle { chain: Vec<String> },

  #[error("circular dependency detected while constructing: {0}")]
  CircularDependency(String),

  #[error("resolution depth of {depth} exceeded")]
  DepthExceeded { depth: usize },

  /// `make_as` resolved an object of a different type than requested.
  #[error("'{identifier}' did not resolve to a {expected}")]
  TypeMismatch { identifier: String, expected: &'static str },

  #[error("argument {position} is not a {expected}")]
  ArgumentType { position: usize, expected: &'static str },

  #[error("argument {position} was requested but not supplied")]
  ArgumentCount { position: usize },

  #[error("failed to construct '{class}': {reason}")]
  Construction { class: String, reason: String },

  #[error("the shared container is already initialized")]
  AlreadyInitialized,
}

impl Error {
  /// Convenience for `Injectable::construct` implementations reporting their own failure.
  pub fn construction(class: impl Into<String>, reason: impl ToString) -> Self {
    Error::Construction {
      class: class.into(),
      reason: reason.to_string(),
    }
  }
}

/// A specialized `Result` type for `fibre_autowire` operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
