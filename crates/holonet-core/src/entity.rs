//! Catalog entities — flat records keyed by a store-assigned integer id.
//!
//! Users, people and planets are read-mostly: the favorites manager references
//! them but never mutates them.

use serde::{Deserialize, Serialize};

// ─── Kind ────────────────────────────────────────────────────────────────────

/// The three catalog record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
  User,
  People,
  Planet,
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// An account that can own favorites.
///
/// Only `id` and `email` are ever serialized; the password is an opaque string
/// (an argon2 PHC hash when seeded through `holonet-server`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
  pub id:        i64,
  pub email:     String,
  #[serde(skip_serializing)]
  pub password:  String,
  #[serde(skip_serializing)]
  pub is_active: bool,
}

/// A character from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
  pub id:     i64,
  pub name:   String,
  pub height: Option<String>,
  pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Planet {
  pub id:      i64,
  pub name:    String,
  pub climate: Option<String>,
  pub terrain: Option<String>,
}

/// Any catalog record, serialized as the bare inner record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CatalogRecord {
  User(User),
  Person(Person),
  Planet(Planet),
}

impl From<User> for CatalogRecord {
  fn from(u: User) -> Self { Self::User(u) }
}

impl From<Person> for CatalogRecord {
  fn from(p: Person) -> Self { Self::Person(p) }
}

impl From<Planet> for CatalogRecord {
  fn from(p: Planet) -> Self { Self::Planet(p) }
}

// ─── Inputs ──────────────────────────────────────────────────────────────────

/// Input to [`crate::store::CatalogStore::add_user`]. `id` is assigned by the
/// store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
  pub email:     String,
  pub password:  String,
  #[serde(default = "default_active")]
  pub is_active: bool,
}

fn default_active() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct NewPerson {
  pub name:   String,
  #[serde(default)]
  pub height: Option<String>,
  #[serde(default)]
  pub gender: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPlanet {
  pub name:    String,
  #[serde(default)]
  pub climate: Option<String>,
  #[serde(default)]
  pub terrain: Option<String>,
}
