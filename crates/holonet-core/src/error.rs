//! Error types for `holonet-core`.

use thiserror::Error;

use crate::favorite::FavoriteTarget;

#[derive(Debug, Error)]
pub enum Error {
  #[error("user not found")]
  UserNotFound(i64),

  #[error("person not found")]
  PersonNotFound(i64),

  #[error("planet not found")]
  PlanetNotFound(i64),

  /// The user or the favorite target of an add request does not exist.
  #[error("invalid user or {}", .target.noun())]
  InvalidReference { user_id: i64, target: FavoriteTarget },

  #[error("favorite not found")]
  FavoriteNotFound { user_id: i64, target: FavoriteTarget },

  #[error("already a favorite")]
  AlreadyFavorite { user_id: i64, target: FavoriteTarget },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Coarse classification used by callers to pick a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// A referenced entity or association is absent.
  NotFound,
  /// The requested association already exists.
  Conflict,
  /// The backing store failed.
  Internal,
}

impl Error {
  /// Wrap a backend error.
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::UserNotFound(_)
      | Self::PersonNotFound(_)
      | Self::PlanetNotFound(_)
      | Self::InvalidReference { .. }
      | Self::FavoriteNotFound { .. } => ErrorKind::NotFound,
      Self::AlreadyFavorite { .. } => ErrorKind::Conflict,
      Self::Store(_) => ErrorKind::Internal,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
