//! The query façade — read-only projections over a [`CatalogStore`].

use std::sync::Arc;

use crate::{
  Error, Result,
  entity::{CatalogRecord, EntityKind, Person, Planet, User},
  favorite::{Favorite, FavoriteView},
  store::CatalogStore,
};

pub struct Catalog<S> {
  store: Arc<S>,
}

impl<S> Clone for Catalog<S> {
  fn clone(&self) -> Self { Self { store: Arc::clone(&self.store) } }
}

impl<S: CatalogStore> Catalog<S> {
  pub fn new(store: Arc<S>) -> Self { Self { store } }

  // ── Generic lookups ───────────────────────────────────────────────────

  /// Every record of `kind`, in store order. An empty store is not an error.
  pub async fn list_all(&self, kind: EntityKind) -> Result<Vec<CatalogRecord>> {
    let records = match kind {
      EntityKind::User => into_records(self.list_users().await?),
      EntityKind::People => into_records(self.list_people().await?),
      EntityKind::Planet => into_records(self.list_planets().await?),
    };
    Ok(records)
  }

  pub async fn get_by_id(&self, kind: EntityKind, id: i64) -> Result<CatalogRecord> {
    let record: CatalogRecord = match kind {
      EntityKind::User => self.get_user(id).await?.into(),
      EntityKind::People => self.get_person(id).await?.into(),
      EntityKind::Planet => self.get_planet(id).await?.into(),
    };
    Ok(record)
  }

  // ── Typed lookups ─────────────────────────────────────────────────────

  pub async fn list_users(&self) -> Result<Vec<User>> {
    self.store.list_users().await.map_err(Error::store)
  }

  pub async fn list_people(&self) -> Result<Vec<Person>> {
    self.store.list_people().await.map_err(Error::store)
  }

  pub async fn list_planets(&self) -> Result<Vec<Planet>> {
    self.store.list_planets().await.map_err(Error::store)
  }

  pub async fn get_user(&self, id: i64) -> Result<User> {
    self
      .store
      .get_user(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::UserNotFound(id))
  }

  pub async fn get_person(&self, id: i64) -> Result<Person> {
    self
      .store
      .get_person(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::PersonNotFound(id))
  }

  pub async fn get_planet(&self, id: i64) -> Result<Planet> {
    self
      .store
      .get_planet(id)
      .await
      .map_err(Error::store)?
      .ok_or(Error::PlanetNotFound(id))
  }

  // ── Favorites ─────────────────────────────────────────────────────────

  /// The favorites of `user_id` in store order, with names resolved.
  pub async fn list_favorites_for_user(&self, user_id: i64) -> Result<Vec<FavoriteView>> {
    let user = self.get_user(user_id).await?;

    let favorites = self
      .store
      .list_favorites(user_id)
      .await
      .map_err(Error::store)?;

    let mut views = Vec::with_capacity(favorites.len());
    for favorite in favorites {
      views.push(self.project(favorite, Some(&user)).await?);
    }
    Ok(views)
  }

  /// Resolve the names a [`FavoriteView`] carries by id lookups. `owner` saves
  /// the user lookup when the caller already holds the owning user.
  pub async fn project(
    &self,
    favorite: Favorite,
    owner: Option<&User>,
  ) -> Result<FavoriteView> {
    let user_email = match owner.filter(|u| u.id == favorite.user_id) {
      Some(user) => Some(user.email.clone()),
      None => self
        .store
        .get_user(favorite.user_id)
        .await
        .map_err(Error::store)?
        .map(|u| u.email),
    };

    let planet_name = match favorite.planet_id {
      Some(id) => self.store.get_planet(id).await.map_err(Error::store)?.map(|p| p.name),
      None => None,
    };

    let people_name = match favorite.people_id {
      Some(id) => self.store.get_person(id).await.map_err(Error::store)?.map(|p| p.name),
      None => None,
    };

    Ok(FavoriteView {
      id: favorite.id,
      user_email,
      planet_name,
      people_name,
      planet_id: favorite.planet_id,
      people_id: favorite.people_id,
    })
  }
}

fn into_records<T: Into<CatalogRecord>>(items: Vec<T>) -> Vec<CatalogRecord> {
  items.into_iter().map(Into::into).collect()
}
