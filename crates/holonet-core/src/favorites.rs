//! The favorites manager — the only component with write-side invariants.
//!
//! Adds check that the user and the target exist, then that the pair is not
//! already a favorite. Removes are not idempotent: removing an absent pair is
//! [`Error::FavoriteNotFound`].

use std::sync::Arc;

use crate::{
  Error, Result,
  favorite::{Favorite, FavoriteTarget, NewFavorite},
  store::CatalogStore,
};

/// Mediates creation and deletion of favorites over a shared store handle.
pub struct Favorites<S> {
  store: Arc<S>,
}

impl<S> Clone for Favorites<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: CatalogStore> Favorites<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  pub async fn add_planet_favorite(
    &self,
    user_id: i64,
    planet_id: i64,
  ) -> Result<Favorite> {
    self.add(user_id, FavoriteTarget::Planet(planet_id)).await
  }

  pub async fn add_people_favorite(
    &self,
    user_id: i64,
    people_id: i64,
  ) -> Result<Favorite> {
    self.add(user_id, FavoriteTarget::Person(people_id)).await
  }

  pub async fn remove_planet_favorite(
    &self,
    user_id: i64,
    planet_id: i64,
  ) -> Result<()> {
    self.remove(user_id, FavoriteTarget::Planet(planet_id)).await
  }

  pub async fn remove_people_favorite(
    &self,
    user_id: i64,
    people_id: i64,
  ) -> Result<()> {
    self.remove(user_id, FavoriteTarget::Person(people_id)).await
  }

  /// Create a favorite of `target` for `user_id`.
  pub async fn add(&self, user_id: i64, target: FavoriteTarget) -> Result<Favorite> {
    let user_exists = self
      .store
      .get_user(user_id)
      .await
      .map_err(Error::store)?
      .is_some();

    if !user_exists || !self.target_exists(target).await? {
      return Err(Error::InvalidReference { user_id, target });
    }

    let existing = self
      .store
      .find_favorite(user_id, target)
      .await
      .map_err(Error::store)?;
    if existing.is_some() {
      return Err(Error::AlreadyFavorite { user_id, target });
    }

    // A concurrent add of the same pair can land between the check above and
    // this insert; the store's unique index turns that into `None`.
    let favorite = self
      .store
      .insert_favorite(NewFavorite { user_id, target })
      .await
      .map_err(Error::store)?
      .ok_or(Error::AlreadyFavorite { user_id, target })?;

    tracing::debug!(favorite_id = favorite.id, user_id, %target, "favorite added");
    Ok(favorite)
  }

  /// Delete the favorite of `target` owned by `user_id`.
  pub async fn remove(&self, user_id: i64, target: FavoriteTarget) -> Result<()> {
    let favorite = self
      .store
      .find_favorite(user_id, target)
      .await
      .map_err(Error::store)?
      .ok_or(Error::FavoriteNotFound { user_id, target })?;

    let deleted = self
      .store
      .delete_favorite(favorite.id)
      .await
      .map_err(Error::store)?;
    if !deleted {
      return Err(Error::FavoriteNotFound { user_id, target });
    }

    tracing::debug!(favorite_id = favorite.id, user_id, %target, "favorite removed");
    Ok(())
  }

  async fn target_exists(&self, target: FavoriteTarget) -> Result<bool> {
    let exists = match target {
      FavoriteTarget::Planet(id) => self
        .store
        .get_planet(id)
        .await
        .map_err(Error::store)?
        .is_some(),
      FavoriteTarget::Person(id) => self
        .store
        .get_person(id)
        .await
        .map_err(Error::store)?
        .is_some(),
    };
    Ok(exists)
  }
}
