//! [`SqliteStore`] — the SQLite implementation of [`CatalogStore`].

use std::path::Path;

use holonet_core::{
  entity::{NewPerson, NewPlanet, NewUser, Person, Planet, User},
  favorite::{Favorite, FavoriteTarget, NewFavorite},
  store::CatalogStore,
};
use rusqlite::OptionalExtension as _;

use crate::{
  Result,
  rows::{self, FAVORITE_COLUMNS, PERSON_COLUMNS, PLANET_COLUMNS, USER_COLUMNS},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A catalog store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    tracing::info!(path = %path.display(), "opened catalog store");
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a single-row `SELECT <columns> FROM <table> WHERE id = ?1`.
  async fn get_by_id<T, F>(
    &self,
    table: &'static str,
    columns: &'static str,
    id: i64,
    map: F,
  ) -> Result<Option<T>>
  where
    T: Send + 'static,
    F: FnOnce(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let found = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {columns} FROM {table} WHERE id = ?1");
        Ok(conn.query_row(&sql, rusqlite::params![id], map).optional()?)
      })
      .await?;
    Ok(found)
  }

  /// Run `SELECT <columns> FROM <table> ORDER BY id`.
  async fn list_all<T, F>(
    &self,
    table: &'static str,
    columns: &'static str,
    map: F,
  ) -> Result<Vec<T>>
  where
    T: Send + 'static,
    F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T> + Send + 'static,
  {
    let all = self
      .conn
      .call(move |conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {columns} FROM {table} ORDER BY id"))?;
        let rows = stmt
          .query_map([], map)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(all)
  }
}

// ─── CatalogStore impl ───────────────────────────────────────────────────────

impl CatalogStore for SqliteStore {
  type Error = crate::Error;

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn add_user(&self, input: NewUser) -> Result<Option<User>> {
    let inserted = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "INSERT INTO users (email, password, is_active) VALUES (?1, ?2, ?3)
                 ON CONFLICT DO NOTHING
                 RETURNING {USER_COLUMNS}"
              ),
              rusqlite::params![input.email, input.password, input.is_active],
              rows::user,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(inserted)
  }

  async fn get_user(&self, id: i64) -> Result<Option<User>> {
    self.get_by_id("users", USER_COLUMNS, id, rows::user).await
  }

  async fn list_users(&self) -> Result<Vec<User>> {
    self.list_all("users", USER_COLUMNS, rows::user).await
  }

  // ── People ────────────────────────────────────────────────────────────────

  async fn add_person(&self, input: NewPerson) -> Result<Option<Person>> {
    let inserted = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "INSERT INTO people (name, height, gender) VALUES (?1, ?2, ?3)
                 ON CONFLICT DO NOTHING
                 RETURNING {PERSON_COLUMNS}"
              ),
              rusqlite::params![input.name, input.height, input.gender],
              rows::person,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(inserted)
  }

  async fn get_person(&self, id: i64) -> Result<Option<Person>> {
    self.get_by_id("people", PERSON_COLUMNS, id, rows::person).await
  }

  async fn list_people(&self) -> Result<Vec<Person>> {
    self.list_all("people", PERSON_COLUMNS, rows::person).await
  }

  // ── Planets ───────────────────────────────────────────────────────────────

  async fn add_planet(&self, input: NewPlanet) -> Result<Option<Planet>> {
    let inserted = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "INSERT INTO planets (name, climate, terrain) VALUES (?1, ?2, ?3)
                 ON CONFLICT DO NOTHING
                 RETURNING {PLANET_COLUMNS}"
              ),
              rusqlite::params![input.name, input.climate, input.terrain],
              rows::planet,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(inserted)
  }

  async fn get_planet(&self, id: i64) -> Result<Option<Planet>> {
    self.get_by_id("planets", PLANET_COLUMNS, id, rows::planet).await
  }

  async fn list_planets(&self) -> Result<Vec<Planet>> {
    self.list_all("planets", PLANET_COLUMNS, rows::planet).await
  }

  // ── Favorites ─────────────────────────────────────────────────────────────

  async fn list_favorites(&self, user_id: i64) -> Result<Vec<Favorite>> {
    let favorites = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {FAVORITE_COLUMNS} FROM favorites WHERE user_id = ?1 ORDER BY id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![user_id], rows::favorite)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(favorites)
  }

  async fn find_favorite(
    &self,
    user_id: i64,
    target:  FavoriteTarget,
  ) -> Result<Option<Favorite>> {
    let column = target_column(target);
    let target_id = target.id();

    let found = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {FAVORITE_COLUMNS} FROM favorites
                 WHERE user_id = ?1 AND {column} = ?2
                 ORDER BY id LIMIT 1"
              ),
              rusqlite::params![user_id, target_id],
              rows::favorite,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(found)
  }

  async fn insert_favorite(&self, input: NewFavorite) -> Result<Option<Favorite>> {
    let planet_id = input.target.planet_id();
    let people_id = input.target.people_id();
    let user_id   = input.user_id;

    let inserted = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "INSERT INTO favorites (user_id, planet_id, people_id) VALUES (?1, ?2, ?3)
                 ON CONFLICT DO NOTHING
                 RETURNING {FAVORITE_COLUMNS}"
              ),
              rusqlite::params![user_id, planet_id, people_id],
              rows::favorite,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(inserted)
  }

  async fn delete_favorite(&self, id: i64) -> Result<bool> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM favorites WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(affected > 0)
  }
}

fn target_column(target: FavoriteTarget) -> &'static str {
  match target {
    FavoriteTarget::Planet(_) => "planet_id",
    FavoriteTarget::Person(_) => "people_id",
  }
}
