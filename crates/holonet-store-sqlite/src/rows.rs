//! Column lists and row mappers between SQLite rows and domain types.

use holonet_core::{
  entity::{Person, Planet, User},
  favorite::Favorite,
};
use rusqlite::Row;

pub const USER_COLUMNS: &str = "id, email, password, is_active";
pub const PERSON_COLUMNS: &str = "id, name, height, gender";
pub const PLANET_COLUMNS: &str = "id, name, climate, terrain";
pub const FAVORITE_COLUMNS: &str = "id, user_id, planet_id, people_id";

pub fn user(row: &Row<'_>) -> rusqlite::Result<User> {
  Ok(User {
    id:        row.get(0)?,
    email:     row.get(1)?,
    password:  row.get(2)?,
    is_active: row.get(3)?,
  })
}

pub fn person(row: &Row<'_>) -> rusqlite::Result<Person> {
  Ok(Person {
    id:     row.get(0)?,
    name:   row.get(1)?,
    height: row.get(2)?,
    gender: row.get(3)?,
  })
}

pub fn planet(row: &Row<'_>) -> rusqlite::Result<Planet> {
  Ok(Planet {
    id:      row.get(0)?,
    name:    row.get(1)?,
    climate: row.get(2)?,
    terrain: row.get(3)?,
  })
}

pub fn favorite(row: &Row<'_>) -> rusqlite::Result<Favorite> {
  Ok(Favorite {
    id:        row.get(0)?,
    user_id:   row.get(1)?,
    planet_id: row.get(2)?,
    people_id: row.get(3)?,
  })
}
