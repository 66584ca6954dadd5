//! Favorite — the association between a user and a planet or a person.
//!
//! The row layout carries two optional target columns. Rows written through
//! [`crate::Favorites`] always set exactly one of them, but rows that set both
//! or neither are still readable and projected faithfully.

use std::fmt;

use serde::Serialize;

// ─── Target ──────────────────────────────────────────────────────────────────

/// What a favorite points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
  Planet(i64),
  Person(i64),
}

impl FavoriteTarget {
  /// Human-readable name of the target kind, used in error messages.
  pub fn noun(&self) -> &'static str {
    match self {
      Self::Planet(_) => "planet",
      Self::Person(_) => "person",
    }
  }

  pub fn id(&self) -> i64 {
    match self {
      Self::Planet(id) | Self::Person(id) => *id,
    }
  }

  pub fn planet_id(&self) -> Option<i64> {
    match self {
      Self::Planet(id) => Some(*id),
      Self::Person(_) => None,
    }
  }

  pub fn people_id(&self) -> Option<i64> {
    match self {
      Self::Person(id) => Some(*id),
      Self::Planet(_) => None,
    }
  }
}

impl fmt::Display for FavoriteTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.noun(), self.id())
  }
}

// ─── Stored row ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Favorite {
  pub id:        i64,
  pub user_id:   i64,
  pub planet_id: Option<i64>,
  pub people_id: Option<i64>,
}

/// Input to [`crate::store::CatalogStore::insert_favorite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewFavorite {
  pub user_id: i64,
  pub target:  FavoriteTarget,
}

// ─── Projection ──────────────────────────────────────────────────────────────

/// The serialized form of a favorite, with the owning user's email and the
/// target names resolved. Any reference that cannot be resolved is `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteView {
  pub id:          i64,
  pub user_email:  Option<String>,
  pub planet_name: Option<String>,
  pub people_name: Option<String>,
  pub planet_id:   Option<i64>,
  pub people_id:   Option<i64>,
}
