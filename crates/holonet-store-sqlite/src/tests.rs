//! Integration tests for `SqliteStore`, the favorites manager and the query
//! façade against an in-memory database.

use std::sync::Arc;

use holonet_core::{
  Catalog, ErrorKind, Favorites,
  entity::{CatalogRecord, EntityKind, NewPerson, NewPlanet, NewUser},
  favorite::{FavoriteTarget, NewFavorite},
  store::CatalogStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_user(email: &str) -> NewUser {
  NewUser {
    email:     email.into(),
    password:  "opaque".into(),
    is_active: true,
  }
}

fn new_person(name: &str) -> NewPerson {
  NewPerson {
    name:   name.into(),
    height: Some("172".into()),
    gender: Some("male".into()),
  }
}

fn new_planet(name: &str) -> NewPlanet {
  NewPlanet {
    name:    name.into(),
    climate: Some("arid".into()),
    terrain: Some("desert".into()),
  }
}

/// A store with one user, one person and one planet, plus the services over it.
struct Fixture {
  store:     Arc<SqliteStore>,
  catalog:   Catalog<SqliteStore>,
  favorites: Favorites<SqliteStore>,
  user_id:   i64,
  person_id: i64,
  planet_id: i64,
}

async fn fixture() -> Fixture {
  let store = Arc::new(store().await);
  let user = store.add_user(new_user("luke@rebellion.org")).await.unwrap().unwrap();
  let person = store.add_person(new_person("Luke Skywalker")).await.unwrap().unwrap();
  let planet = store.add_planet(new_planet("Tatooine")).await.unwrap().unwrap();

  Fixture {
    catalog:   Catalog::new(Arc::clone(&store)),
    favorites: Favorites::new(Arc::clone(&store)),
    store,
    user_id:   user.id,
    person_id: person.id,
    planet_id: planet.id,
  }
}

// ─── Catalog records ─────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_get_user() {
  let s = store().await;

  let user = s.add_user(new_user("leia@alderaan.gov")).await.unwrap().unwrap();
  assert_eq!(user.email, "leia@alderaan.gov");
  assert!(user.is_active);

  let fetched = s.get_user(user.id).await.unwrap().unwrap();
  assert_eq!(fetched, user);
}

#[tokio::test]
async fn duplicate_email_is_skipped() {
  let s = store().await;
  s.add_user(new_user("han@falcon.net")).await.unwrap().unwrap();

  let second = s.add_user(new_user("han@falcon.net")).await.unwrap();
  assert!(second.is_none());
  assert_eq!(s.list_users().await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_names_are_skipped() {
  let s = store().await;
  s.add_person(new_person("Yoda")).await.unwrap().unwrap();
  s.add_planet(new_planet("Dagobah")).await.unwrap().unwrap();

  assert!(s.add_person(new_person("Yoda")).await.unwrap().is_none());
  assert!(s.add_planet(new_planet("Dagobah")).await.unwrap().is_none());
}

#[tokio::test]
async fn optional_columns_roundtrip_as_none() {
  let s = store().await;
  let planet = s
    .add_planet(NewPlanet { name: "Hoth".into(), climate: None, terrain: None })
    .await
    .unwrap()
    .unwrap();

  let fetched = s.get_planet(planet.id).await.unwrap().unwrap();
  assert!(fetched.climate.is_none());
  assert!(fetched.terrain.is_none());
}

#[tokio::test]
async fn missing_records_return_none() {
  let s = store().await;
  assert!(s.get_user(42).await.unwrap().is_none());
  assert!(s.get_person(42).await.unwrap().is_none());
  assert!(s.get_planet(42).await.unwrap().is_none());
}

#[tokio::test]
async fn lists_follow_insertion_order() {
  let s = store().await;
  for name in ["Tatooine", "Alderaan", "Yavin IV"] {
    s.add_planet(new_planet(name)).await.unwrap();
  }

  let names: Vec<_> = s
    .list_planets()
    .await
    .unwrap()
    .into_iter()
    .map(|p| p.name)
    .collect();
  assert_eq!(names, ["Tatooine", "Alderaan", "Yavin IV"]);
}

// ─── Favorite rows ───────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_favorite_sets_only_target_column() {
  let f = fixture().await;

  let fav = f
    .store
    .insert_favorite(NewFavorite {
      user_id: f.user_id,
      target:  FavoriteTarget::Person(f.person_id),
    })
    .await
    .unwrap()
    .unwrap();
  assert_eq!(fav.people_id, Some(f.person_id));
  assert_eq!(fav.planet_id, None);
}

#[tokio::test]
async fn unique_index_suppresses_duplicate_insert() {
  let f = fixture().await;
  let input = NewFavorite {
    user_id: f.user_id,
    target:  FavoriteTarget::Planet(f.planet_id),
  };

  assert!(f.store.insert_favorite(input).await.unwrap().is_some());
  assert!(f.store.insert_favorite(input).await.unwrap().is_none());
  assert_eq!(f.store.list_favorites(f.user_id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn planet_and_person_with_same_id_are_distinct_favorites() {
  let f = fixture().await;
  // The fixture's person and planet are both the first row of their table.
  assert_eq!(f.person_id, f.planet_id);

  f.favorites.add_planet_favorite(f.user_id, f.planet_id).await.unwrap();
  f.favorites.add_people_favorite(f.user_id, f.person_id).await.unwrap();

  assert_eq!(f.store.list_favorites(f.user_id).await.unwrap().len(), 2);
}

#[tokio::test]
async fn delete_favorite_reports_absence() {
  let f = fixture().await;
  let fav = f.favorites.add_planet_favorite(f.user_id, f.planet_id).await.unwrap();

  assert!(f.store.delete_favorite(fav.id).await.unwrap());
  assert!(!f.store.delete_favorite(fav.id).await.unwrap());
}

// ─── Favorites manager ───────────────────────────────────────────────────────

#[tokio::test]
async fn add_planet_favorite_then_listed() {
  let f = fixture().await;

  f.favorites.add_planet_favorite(f.user_id, f.planet_id).await.unwrap();

  let views = f.catalog.list_favorites_for_user(f.user_id).await.unwrap();
  assert_eq!(views.len(), 1);
  assert_eq!(views[0].planet_id, Some(f.planet_id));
  assert_eq!(views[0].people_id, None);
  assert_eq!(views[0].planet_name.as_deref(), Some("Tatooine"));
  assert_eq!(views[0].user_email.as_deref(), Some("luke@rebellion.org"));
  assert!(views[0].people_name.is_none());
}

#[tokio::test]
async fn add_planet_favorite_twice_conflicts() {
  let f = fixture().await;

  f.favorites.add_planet_favorite(f.user_id, f.planet_id).await.unwrap();
  let err = f
    .favorites
    .add_planet_favorite(f.user_id, f.planet_id)
    .await
    .unwrap_err();

  assert_eq!(err.kind(), ErrorKind::Conflict);
  assert_eq!(err.to_string(), "already a favorite");
}

#[tokio::test]
async fn add_people_favorite_twice_conflicts() {
  let f = fixture().await;

  f.favorites.add_people_favorite(f.user_id, f.person_id).await.unwrap();
  let err = f
    .favorites
    .add_people_favorite(f.user_id, f.person_id)
    .await
    .unwrap_err();

  assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[tokio::test]
async fn add_unknown_planet_is_not_found_regardless_of_user() {
  let f = fixture().await;

  for user_id in [f.user_id, 999] {
    let err = f
      .favorites
      .add_planet_favorite(user_id, 999)
      .await
      .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.to_string(), "invalid user or planet");
  }
}

#[tokio::test]
async fn add_with_unknown_user_is_not_found() {
  let f = fixture().await;

  let err = f
    .favorites
    .add_people_favorite(999, f.person_id)
    .await
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
  assert_eq!(err.to_string(), "invalid user or person");
}

#[tokio::test]
async fn add_unknown_person_is_not_found_for_valid_user() {
  let f = fixture().await;

  let err = f
    .favorites
    .add_people_favorite(f.user_id, 999)
    .await
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
  assert_eq!(err.to_string(), "invalid user or person");
  assert!(f.store.list_favorites(f.user_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn remove_people_favorite_never_added_is_not_found() {
  let f = fixture().await;

  let err = f
    .favorites
    .remove_people_favorite(f.user_id, f.person_id)
    .await
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
  assert_eq!(err.to_string(), "favorite not found");
}

#[tokio::test]
async fn remove_without_favorite_is_not_found() {
  let f = fixture().await;

  let err = f
    .favorites
    .remove_planet_favorite(f.user_id, f.planet_id)
    .await
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
  assert_eq!(err.to_string(), "favorite not found");
}

#[tokio::test]
async fn add_then_remove_is_not_idempotent() {
  let f = fixture().await;

  f.favorites.add_planet_favorite(f.user_id, f.planet_id).await.unwrap();
  f.favorites.remove_planet_favorite(f.user_id, f.planet_id).await.unwrap();

  let views = f.catalog.list_favorites_for_user(f.user_id).await.unwrap();
  assert!(views.iter().all(|v| v.planet_id != Some(f.planet_id)));

  let err = f
    .favorites
    .remove_planet_favorite(f.user_id, f.planet_id)
    .await
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn remove_people_favorite_leaves_planet_favorite() {
  let f = fixture().await;

  f.favorites.add_planet_favorite(f.user_id, f.planet_id).await.unwrap();
  f.favorites.add_people_favorite(f.user_id, f.person_id).await.unwrap();
  f.favorites.remove_people_favorite(f.user_id, f.person_id).await.unwrap();

  let views = f.catalog.list_favorites_for_user(f.user_id).await.unwrap();
  assert_eq!(views.len(), 1);
  assert_eq!(views[0].planet_id, Some(f.planet_id));
}

#[tokio::test]
async fn favorites_are_scoped_to_their_user() {
  let f = fixture().await;
  let other = f.store.add_user(new_user("leia@alderaan.gov")).await.unwrap().unwrap();

  f.favorites.add_planet_favorite(f.user_id, f.planet_id).await.unwrap();

  assert!(f.catalog.list_favorites_for_user(other.id).await.unwrap().is_empty());
  let err = f
    .favorites
    .remove_planet_favorite(other.id, f.planet_id)
    .await
    .unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

// ─── Query façade ────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_all_on_empty_store_is_empty() {
  let catalog = Catalog::new(Arc::new(store().await));

  for kind in [EntityKind::User, EntityKind::People, EntityKind::Planet] {
    assert!(catalog.list_all(kind).await.unwrap().is_empty());
  }
}

#[tokio::test]
async fn get_by_id_dispatches_on_kind() {
  let f = fixture().await;

  let record = f.catalog.get_by_id(EntityKind::Planet, f.planet_id).await.unwrap();
  assert!(matches!(&record, CatalogRecord::Planet(p) if p.name == "Tatooine"));

  let record = f.catalog.get_by_id(EntityKind::People, f.person_id).await.unwrap();
  assert!(matches!(&record, CatalogRecord::Person(p) if p.id == f.person_id));
}

#[tokio::test]
async fn get_by_id_missing_is_not_found() {
  let f = fixture().await;

  let err = f.catalog.get_by_id(EntityKind::People, 999).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
  assert_eq!(err.to_string(), "person not found");
}

#[tokio::test]
async fn list_favorites_for_unknown_user_is_not_found() {
  let f = fixture().await;

  let err = f.catalog.list_favorites_for_user(999).await.unwrap_err();
  assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn list_favorites_for_user_without_favorites_is_empty() {
  let f = fixture().await;
  assert!(f.catalog.list_favorites_for_user(f.user_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn favorite_views_keep_store_order() {
  let f = fixture().await;
  let alderaan = f.store.add_planet(new_planet("Alderaan")).await.unwrap().unwrap();

  f.favorites.add_planet_favorite(f.user_id, alderaan.id).await.unwrap();
  f.favorites.add_people_favorite(f.user_id, f.person_id).await.unwrap();
  f.favorites.add_planet_favorite(f.user_id, f.planet_id).await.unwrap();

  let views = f.catalog.list_favorites_for_user(f.user_id).await.unwrap();
  let labels: Vec<_> = views
    .iter()
    .map(|v| v.planet_name.clone().or_else(|| v.people_name.clone()).unwrap())
    .collect();
  assert_eq!(labels, ["Alderaan", "Luke Skywalker", "Tatooine"]);
}

#[tokio::test]
async fn project_resolves_both_targets_of_a_permissive_row() {
  let f = fixture().await;
  let fav = holonet_core::favorite::Favorite {
    id:        7,
    user_id:   f.user_id,
    planet_id: Some(f.planet_id),
    people_id: Some(f.person_id),
  };

  let view = f.catalog.project(fav, None).await.unwrap();
  assert_eq!(view.planet_name.as_deref(), Some("Tatooine"));
  assert_eq!(view.people_name.as_deref(), Some("Luke Skywalker"));
  assert_eq!(view.user_email.as_deref(), Some("luke@rebellion.org"));
}

#[tokio::test]
async fn project_nulls_broken_references() {
  let f = fixture().await;
  let fav = holonet_core::favorite::Favorite {
    id:        8,
    user_id:   999,
    planet_id: Some(999),
    people_id: None,
  };

  let view = f.catalog.project(fav, None).await.unwrap();
  assert!(view.user_email.is_none());
  assert!(view.planet_name.is_none());
  assert_eq!(view.planet_id, Some(999));
}
