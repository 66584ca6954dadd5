//! `GET /` — a machine-readable list of the routes this API serves.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Endpoint {
  pub method: &'static str,
  pub path:   &'static str,
}

const fn endpoint(method: &'static str, path: &'static str) -> Endpoint {
  Endpoint { method, path }
}

/// Every route registered by [`crate::api_router`], in registration order.
pub const ENDPOINTS: &[Endpoint] = &[
  endpoint("GET", "/"),
  endpoint("GET", "/people"),
  endpoint("GET", "/people/{id}"),
  endpoint("GET", "/planets"),
  endpoint("GET", "/planets/{id}"),
  endpoint("GET", "/users"),
  endpoint("GET", "/users/{id}/favorites"),
  endpoint("POST", "/favorite/planet/{planet_id}/user/{user_id}"),
  endpoint("DELETE", "/favorite/planet/{planet_id}/user/{user_id}"),
  endpoint("POST", "/favorite/people/{people_id}/user/{user_id}"),
  endpoint("DELETE", "/favorite/people/{people_id}/user/{user_id}"),
];

#[derive(Debug, Serialize)]
pub struct Sitemap {
  pub endpoints: &'static [Endpoint],
}

pub async fn handler() -> Json<Sitemap> {
  Json(Sitemap { endpoints: ENDPOINTS })
}
