//! The `CatalogStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `holonet-store-sqlite`).
//! The favorites manager and the query façade receive a handle to it; there is
//! no ambient session.

use std::future::Future;

use crate::{
  entity::{NewPerson, NewPlanet, NewUser, Person, Planet, User},
  favorite::{Favorite, FavoriteTarget, NewFavorite},
};

/// Abstraction over a catalog backend.
///
/// Every list method returns records in store order (ascending id, which is
/// insertion order). All methods return `Send` futures so the trait can be
/// used behind `axum` on a multi-threaded runtime.
pub trait CatalogStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Insert a user. Returns `None` if the email is already taken.
  fn add_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  fn get_user(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  // ── People ────────────────────────────────────────────────────────────

  /// Insert a person. Returns `None` if the name is already taken.
  fn add_person(
    &self,
    input: NewPerson,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  fn get_person(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  fn list_people(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  // ── Planets ───────────────────────────────────────────────────────────

  /// Insert a planet. Returns `None` if the name is already taken.
  fn add_planet(
    &self,
    input: NewPlanet,
  ) -> impl Future<Output = Result<Option<Planet>, Self::Error>> + Send + '_;

  fn get_planet(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Planet>, Self::Error>> + Send + '_;

  fn list_planets(
    &self,
  ) -> impl Future<Output = Result<Vec<Planet>, Self::Error>> + Send + '_;

  // ── Favorites ─────────────────────────────────────────────────────────

  /// All favorites owned by `user_id`, in store order.
  fn list_favorites(
    &self,
    user_id: i64,
  ) -> impl Future<Output = Result<Vec<Favorite>, Self::Error>> + Send + '_;

  /// The first favorite of `user_id` pointing at `target`, if any.
  fn find_favorite(
    &self,
    user_id: i64,
    target: FavoriteTarget,
  ) -> impl Future<Output = Result<Option<Favorite>, Self::Error>> + Send + '_;

  /// Insert a favorite with only the target column set.
  ///
  /// Returns `None` when the backend's uniqueness constraint on
  /// `(user_id, target)` suppressed the insert.
  fn insert_favorite(
    &self,
    input: NewFavorite,
  ) -> impl Future<Output = Result<Option<Favorite>, Self::Error>> + Send + '_;

  /// Delete a favorite by id. Returns `false` if no such row existed.
  fn delete_favorite(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
