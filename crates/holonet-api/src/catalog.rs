//! Handlers for the read-only catalog endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/people` | All people in store order |
//! | `GET`  | `/people/{id}` | 404 if not found |
//! | `GET`  | `/planets` | All planets in store order |
//! | `GET`  | `/planets/{id}` | 404 if not found |
//! | `GET`  | `/users` | `{id, email}` only |
//! | `GET`  | `/users/{id}/favorites` | 404 if the user does not exist |

use axum::{Json, extract::State};
use holonet_core::{
  entity::{CatalogRecord, EntityKind},
  favorite::FavoriteView,
  store::CatalogStore,
};

use crate::{ApiState, error::ApiError, extract::Path};

// ─── Lists ────────────────────────────────────────────────────────────────────

async fn list_kind<S: CatalogStore>(
  state: &ApiState<S>,
  kind: EntityKind,
) -> Result<Json<Vec<CatalogRecord>>, ApiError> {
  let records = state.catalog.list_all(kind).await?;
  Ok(Json(records))
}

/// `GET /people`
pub async fn list_people<S: CatalogStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<CatalogRecord>>, ApiError> {
  list_kind(&state, EntityKind::People).await
}

/// `GET /planets`
pub async fn list_planets<S: CatalogStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<CatalogRecord>>, ApiError> {
  list_kind(&state, EntityKind::Planet).await
}

/// `GET /users`
pub async fn list_users<S: CatalogStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<CatalogRecord>>, ApiError> {
  list_kind(&state, EntityKind::User).await
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /people/{id}`
pub async fn get_person<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<CatalogRecord>, ApiError> {
  Ok(Json(state.catalog.get_by_id(EntityKind::People, id).await?))
}

/// `GET /planets/{id}`
pub async fn get_planet<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path(id): Path<i64>,
) -> Result<Json<CatalogRecord>, ApiError> {
  Ok(Json(state.catalog.get_by_id(EntityKind::Planet, id).await?))
}

// ─── Favorites of a user ─────────────────────────────────────────────────────

/// `GET /users/{id}/favorites`
pub async fn list_user_favorites<S: CatalogStore>(
  State(state): State<ApiState<S>>,
  Path(user_id): Path<i64>,
) -> Result<Json<Vec<FavoriteView>>, ApiError> {
  Ok(Json(state.catalog.list_favorites_for_user(user_id).await?))
}
