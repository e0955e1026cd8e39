//! Error types for `reel-core`.

use thiserror::Error;

/// A failure reported by the service layer.
///
/// Each variant is a distinct kind: the HTTP boundary maps every kind to
/// exactly one status code.
#[derive(Debug, Error)]
pub enum Error {
  #[error("no movie found for id {0}")]
  MovieNotFound(i64),

  /// An aggregate or extremum was requested over an empty catalog.
  #[error("no movies recorded")]
  NoMovies,

  #[error("invalid pagination: {0}")]
  InvalidPage(String),

  #[error("invalid query: {0}")]
  Validation(String),

  #[error("failed to {context}: {source}")]
  Store {
    /// The operation that was running, e.g. `"update movie"`.
    context: &'static str,
    #[source]
    source:  Box<dyn std::error::Error + Send + Sync>,
  },
}

impl Error {
  pub fn store<E>(context: &'static str, source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store { context, source: Box::new(source) }
  }

  /// The requested movie, or any movie at all, does not exist.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Self::MovieNotFound(_) | Self::NoMovies)
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
