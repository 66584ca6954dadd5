//! JSON REST API for the Holonet catalog.
//!
//! Exposes an axum [`Router`] backed by any
//! [`holonet_core::store::CatalogStore`]. CORS, tracing layers and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = holonet_api::api_router(Arc::new(store)).layer(CorsLayer::permissive());
//! ```

pub mod catalog;
pub mod error;
pub mod extract;
pub mod favorites;
pub mod sitemap;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use holonet_core::{Catalog, Favorites, store::CatalogStore};

pub use error::ApiError;

/// Shared state threaded through all handlers.
pub struct ApiState<S> {
  pub catalog:   Catalog<S>,
  pub favorites: Favorites<S>,
}

impl<S: CatalogStore> ApiState<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self {
      catalog:   Catalog::new(Arc::clone(&store)),
      favorites: Favorites::new(store),
    }
  }
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      catalog:   self.catalog.clone(),
      favorites: self.favorites.clone(),
    }
  }
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: CatalogStore + 'static,
{
  Router::new()
    .route("/", get(sitemap::handler))
    // Catalog
    .route("/people", get(catalog::list_people::<S>))
    .route("/people/{id}", get(catalog::get_person::<S>))
    .route("/planets", get(catalog::list_planets::<S>))
    .route("/planets/{id}", get(catalog::get_planet::<S>))
    .route("/users", get(catalog::list_users::<S>))
    .route("/users/{id}/favorites", get(catalog::list_user_favorites::<S>))
    // Favorites
    .route(
      "/favorite/planet/{planet_id}/user/{user_id}",
      post(favorites::add_planet::<S>).delete(favorites::remove_planet::<S>),
    )
    .route(
      "/favorite/people/{people_id}/user/{user_id}",
      post(favorites::add_people::<S>).delete(favorites::remove_people::<S>),
    )
    .with_state(ApiState::new(store))
}
