//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Every failure renders the same body shape:
//! `{"success": false, "message": "...", "error": "..."}`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The store failed during find, create or save.
  #[error("{message}: {source}")]
  Store {
    message: &'static str,
    #[source]
    source:  folio_core::Error,
  },

  /// The body was not JSON at all. Wrong-typed fields never land here.
  #[error("invalid JSON body: {0}")]
  BadRequest(#[source] folio_core::Error),
}

impl ApiError {
  /// Map a service error onto a store failure described by `message`.
  pub fn store(message: &'static str) -> impl FnOnce(folio_core::Error) -> Self {
    move |source| Self::Store { message, source }
  }
}

/// The underlying failure, without the wrapping layers.
fn describe(e: &folio_core::Error) -> String {
  match e {
    folio_core::Error::Store(inner) => inner.to_string(),
    other => other.to_string(),
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message, error) = match &self {
      ApiError::Store { message, source } => {
        (StatusCode::INTERNAL_SERVER_ERROR, *message, describe(source))
      }
      ApiError::BadRequest(e) => (StatusCode::BAD_REQUEST, "Invalid JSON body", describe(e)),
    };
    tracing::warn!(%status, reason = message, error = %error, "request failed");
    (
      status,
      Json(json!({ "success": false, "message": message, "error": error })),
    )
      .into_response()
  }
}
