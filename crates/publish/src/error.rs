//! Error types for the publish flow

use std::io;

use thiserror::Error;

/// Failure of one publish attempt.
///
/// `S` and `R` are the collaborators' own error types, kept intact as the
/// error source.
#[derive(Debug, Error)]
pub enum PublishError<S, R>
where
  S: std::error::Error + 'static,
  R: std::error::Error + 'static,
{
  #[error("object store request failed: {0}")]
  Store(#[source] S),

  #[error("layer registry request failed: {0}")]
  Registry(#[source] R),

  #[error("failed to read artifact: {0}")]
  Read(#[from] io::Error),
}
