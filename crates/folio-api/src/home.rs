//! Handlers for `/homeContentApi`.
//!
//! | Method | Status | Notes |
//! |--------|--------|-------|
//! | `GET`  | 200 | `{"success": true, "data": <record or null>}` |
//! | `POST` | 201 | Always inserts a new record |
//! | `PUT`  | 200 / 201 | Merges into the latest record, or creates one |

use axum::{
  Json,
  body::Bytes,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use folio_core::{
  content::HomeContent,
  reconcile::ContentPatch,
  service::ContentService,
  store::ContentRepository,
};
use serde::Serialize;

use crate::error::ApiError;

pub const FETCH_FAILED: &str = "Error fetching home content";
pub const SAVE_FAILED: &str = "Error saving home content";
pub const UPDATE_FAILED: &str = "Error updating home content";

pub const SAVED: &str = "Home content saved successfully";
pub const UPDATED: &str = "Home content updated successfully";
pub const CREATED: &str = "Home content created successfully";

// ─── Response bodies ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Fetched {
  pub success: bool,
  pub data:    Option<HomeContent>,
}

#[derive(Debug, Serialize)]
pub struct Written {
  pub message: &'static str,
  pub data:    HomeContent,
}

/// A body that is not JSON at all is rejected with 400 before the store is
/// touched, rather than surfacing as a 500 save/update failure. Valid JSON of
/// any shape is accepted and decoded leniently.
fn patch_from(body: &Bytes) -> Result<ContentPatch, ApiError> {
  ContentPatch::from_slice(body).map_err(ApiError::BadRequest)
}

// ─── Get ──────────────────────────────────────────────────────────────────────

/// `GET /homeContentApi`: an empty store is a success with `data: null`.
pub async fn get<S>(
  State(service): State<ContentService<S>>,
) -> Result<Json<Fetched>, ApiError>
where
  S: ContentRepository + 'static,
{
  let data = service
    .get_latest()
    .await
    .map_err(ApiError::store(FETCH_FAILED))?;
  Ok(Json(Fetched { success: true, data }))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /homeContentApi`: returns 201 + the new record, even when a record
/// already exists.
///
/// A body that is not JSON gets 400 `Invalid JSON body`, not 500.
pub async fn create<S>(
  State(service): State<ContentService<S>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContentRepository + 'static,
{
  let patch = patch_from(&body)?;
  let data = service
    .create_new(patch)
    .await
    .map_err(ApiError::store(SAVE_FAILED))?;
  Ok((StatusCode::CREATED, Json(Written { message: SAVED, data })))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /homeContentApi`: 200 when the latest record was updated, 201 when
/// the store was empty and a record was created.
///
/// A body that is not JSON gets 400 `Invalid JSON body`, not 500.
pub async fn update<S>(
  State(service): State<ContentService<S>>,
  body: Bytes,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContentRepository + 'static,
{
  let patch = patch_from(&body)?;
  let upserted = service
    .upsert(patch)
    .await
    .map_err(ApiError::store(UPDATE_FAILED))?;

  let (status, message) = if upserted.created {
    (StatusCode::CREATED, CREATED)
  } else {
    (StatusCode::OK, UPDATED)
  };
  Ok((status, Json(Written { message, data: upserted.record })))
}
