//! Catalog seeding from a JSON file.
//!
//! ```json
//! {
//!   "users":   [{ "email": "luke@rebellion.org", "password": "..." }],
//!   "people":  [{ "name": "Luke Skywalker", "height": "172", "gender": "male" }],
//!   "planets": [{ "name": "Tatooine", "climate": "arid", "terrain": "desert" }]
//! }
//! ```
//!
//! Records whose email or name already exists are skipped, so a seed file can
//! be applied on every start. Passwords are stored as argon2 PHC strings.

use std::path::Path;

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use holonet_core::{
  entity::{NewPerson, NewPlanet, NewUser},
  store::CatalogStore,
};
use rand_core::OsRng;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("failed to read seed file: {0}")]
  Read(#[from] std::io::Error),

  #[error("failed to parse seed file: {0}")]
  Parse(#[from] serde_json::Error),

  #[error("argon2 error: {0}")]
  Hash(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The contents of a seed file. Every section is optional.
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
  #[serde(default)]
  pub users:   Vec<NewUser>,
  #[serde(default)]
  pub people:  Vec<NewPerson>,
  #[serde(default)]
  pub planets: Vec<NewPlanet>,
}

/// What [`Seed::apply`] inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
  pub users:   usize,
  pub people:  usize,
  pub planets: usize,
  /// Records skipped because their unique key already existed.
  pub skipped: usize,
}

impl Seed {
  pub fn from_path(path: &Path) -> Result<Self, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
  }

  /// Insert every record into `store`, hashing user passwords first.
  pub async fn apply<S: CatalogStore>(self, store: &S) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    for mut user in self.users {
      user.password = hash_password(&user.password)?;
      match store.add_user(user).await.map_err(store_err)? {
        Some(_) => report.users += 1,
        None => report.skipped += 1,
      }
    }

    for person in self.people {
      match store.add_person(person).await.map_err(store_err)? {
        Some(_) => report.people += 1,
        None => report.skipped += 1,
      }
    }

    for planet in self.planets {
      match store.add_planet(planet).await.map_err(store_err)? {
        Some(_) => report.planets += 1,
        None => report.skipped += 1,
      }
    }

    tracing::info!(
      users = report.users,
      people = report.people,
      planets = report.planets,
      skipped = report.skipped,
      "seeded catalog"
    );
    Ok(report)
  }
}

/// Produce an argon2 PHC string for `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, SeedError> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| SeedError::Hash(e.to_string()))
}

fn store_err<E>(err: E) -> SeedError
where
  E: std::error::Error + Send + Sync + 'static,
{
  SeedError::Store(Box::new(err))
}
