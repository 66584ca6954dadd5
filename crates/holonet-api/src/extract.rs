//! Extractors whose rejections render as [`ApiError`] bodies.

use axum::extract::{FromRequestParts, rejection::PathRejection};

use crate::error::ApiError;

/// [`axum::extract::Path`] that answers an unparsable segment (e.g. a
/// non-integer id) with a 404 `{"msg": ...}` instead of a plain-text 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct Path<T>(pub T);

impl From<PathRejection> for ApiError {
  fn from(rejection: PathRejection) -> Self { Self::NotFound(rejection.body_text()) }
}
