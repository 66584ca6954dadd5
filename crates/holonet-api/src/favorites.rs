//! Handlers for `/favorite` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `POST`   | `/favorite/planet/{planet_id}/user/{user_id}` | 404 on unknown user or planet, 400 if already a favorite |
//! | `POST`   | `/favorite/people/{people_id}/user/{user_id}` | 404 on unknown user or person, 400 if already a favorite |
//! | `DELETE` | `/favorite/planet/{planet_id}/user/{user_id}` | 404 if not a favorite |
//! | `DELETE` | `/favorite/people/{people_id}/user/{user_id}` | 404 if not a favorite |

use axum::{Json, extract::State};
use holonet_core::store::CatalogStore;
use serde::Serialize;

use crate::{ApiState, error::ApiError, extract::Path};

/// The body of every successful favorite mutation.
#[derive(Debug, Serialize)]
pub struct Message {
  pub msg: &'static str,
}

const PLANET_ADDED: Message = Message { msg: "planet added to favorites" };
const PERSON_ADDED: Message = Message { msg: "person added to favorites" };
const REMOVED: Message = Message { msg: "removed from favorites" };

/// `POST /favorite/planet/{planet_id}/user/{user_id}`
pub async fn add_planet<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path((planet_id, user_id)): Path<(i64, i64)>,
) -> Result<Json<Message>, ApiError> {
  state.favorites.add_planet_favorite(user_id, planet_id).await?;
  Ok(Json(PLANET_ADDED))
}

/// `POST /favorite/people/{people_id}/user/{user_id}`
pub async fn add_people<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path((people_id, user_id)): Path<(i64, i64)>,
) -> Result<Json<Message>, ApiError> {
  state.favorites.add_people_favorite(user_id, people_id).await?;
  Ok(Json(PERSON_ADDED))
}

/// `DELETE /favorite/planet/{planet_id}/user/{user_id}`
pub async fn remove_planet<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path((planet_id, user_id)): Path<(i64, i64)>,
) -> Result<Json<Message>, ApiError> {
  state.favorites.remove_planet_favorite(user_id, planet_id).await?;
  Ok(Json(REMOVED))
}

/// `DELETE /favorite/people/{people_id}/user/{user_id}`
pub async fn remove_people<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path((people_id, user_id)): Path<(i64, i64)>,
) -> Result<Json<Message>, ApiError> {
  state.favorites.remove_people_favorite(user_id, people_id).await?;
  Ok(Json(REMOVED))
}
