//! JSON API for folio's home content.
//!
//! Exposes an axum [`Router`] backed by any
//! [`folio_core::store::ContentRepository`]. There is no auth: any caller
//! may read or write. TLS and transport concerns are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", folio_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod home;

use std::sync::Arc;

use axum::{Router, routing::get};
use folio_core::{service::ContentService, store::ContentRepository};

pub use error::ApiError;

/// Path of the single content resource, relative to the mount point.
pub const HOME_CONTENT_PATH: &str = "/homeContentApi";

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContentRepository + 'static,
{
  Router::new()
    .route(
      HOME_CONTENT_PATH,
      get(home::get::<S>).post(home::create::<S>).put(home::update::<S>),
    )
    .with_state(ContentService::new(store))
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use folio_core::content::{Content, HomeContent};
  use folio_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  use super::*;

  async fn make_store() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::open_in_memory().await.unwrap())
  }

  async fn send(router: Router, method: &str, body: Option<&str>) -> Response {
    let mut builder = Request::builder().method(method).uri(HOME_CONTENT_PATH);
    if body.is_some() {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    let req = builder
      .body(Body::from(body.unwrap_or_default().to_string()))
      .unwrap();
    router.oneshot(req).await.unwrap()
  }

  async fn json_body(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  // ── GET ──────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn get_on_empty_store_returns_null_data() {
    let router = api_router(make_store().await);
    let resp = send(router, "GET", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await, json!({ "success": true, "data": null }));
  }

  #[tokio::test]
  async fn get_returns_latest_record() {
    let store = make_store().await;
    send(api_router(store.clone()), "POST", Some(r#"{"name":"one"}"#)).await;
    send(api_router(store.clone()), "POST", Some(r#"{"name":"two"}"#)).await;

    let body = json_body(send(api_router(store), "GET", None).await).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["data"]["name"], json!("two"));
    assert_eq!(body["data"]["topProjects"], json!([]));
    assert!(body["data"]["_id"].is_string());
    assert!(body["data"]["createdAt"].is_string());
  }

  // ── POST ─────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn post_creates_with_normalized_projects() {
    let store = make_store().await;
    let resp = send(
      api_router(store.clone()),
      "POST",
      Some(r#"{"name":"Alice","topProjects":[{"title":"folio","skills":"Rust"}]}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body = json_body(resp).await;
    assert_eq!(body["message"], json!(home::SAVED));
    let project = &body["data"]["topProjects"][0];
    assert_eq!(project["title"], json!("folio"));
    assert_eq!(project["heading"], json!(""));
    assert_eq!(project["features"], json!([]));
    assert_eq!(project["skills"], json!([]));
  }

  #[tokio::test]
  async fn post_never_reuses_an_existing_record() {
    let store = make_store().await;
    let a = json_body(send(api_router(store.clone()), "POST", Some("{}")).await).await;
    let b = json_body(send(api_router(store.clone()), "POST", Some("{}")).await).await;
    assert_ne!(a["data"]["_id"], b["data"]["_id"]);
    assert_eq!(store.count().await.unwrap(), 2);
  }

  // ── PUT ──────────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn put_creates_then_updates() {
    let store = make_store().await;

    let resp = send(
      api_router(store.clone()),
      "PUT",
      Some(r#"{"name":"Bob","skills":["Go","Rust"]}"#),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created = json_body(resp).await;
    assert_eq!(created["message"], json!(home::CREATED));
    assert_eq!(created["data"]["name"], json!("Bob"));
    assert_eq!(created["data"]["skills"], json!(["Go", "Rust"]));
    assert_eq!(created["data"]["topProjects"], json!([]));

    let resp = send(api_router(store.clone()), "PUT", Some(r#"{"role":"Engineer","name":""}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated = json_body(resp).await;
    assert_eq!(updated["message"], json!(home::UPDATED));
    assert_eq!(updated["data"]["_id"], created["data"]["_id"]);
    assert_eq!(updated["data"]["name"], json!("Bob"));
    assert_eq!(updated["data"]["role"], json!("Engineer"));
    assert_eq!(store.count().await.unwrap(), 1);
  }

  #[tokio::test]
  async fn put_replaces_lists_wholesale() {
    let store = make_store().await;
    send(
      api_router(store.clone()),
      "PUT",
      Some(r#"{"topProjects":[{"title":"a"},{"title":"b"},{"title":"c"}],"topBlogs":[{"title":"x"}]}"#),
    )
    .await;

    let body = json_body(
      send(api_router(store.clone()), "PUT", Some(r#"{"topProjects":[]}"#)).await,
    )
    .await;
    assert_eq!(body["data"]["topProjects"], json!([]));
    assert_eq!(body["data"]["topBlogs"][0]["title"], json!("x"));
    assert!(body["data"]["topBlogs"][0]["date"].is_string());

    let body = json_body(
      send(
        api_router(store.clone()),
        "PUT",
        Some(r#"{"topBlogs":[{"title":"y"},{"title":"z"}]}"#),
      )
      .await,
    )
    .await;
    let titles: Vec<_> = body["data"]["topBlogs"]
      .as_array()
      .unwrap()
      .iter()
      .map(|b| b["title"].clone())
      .collect();
    assert_eq!(titles, vec![json!("y"), json!("z")]);

    let body = json_body(
      send(api_router(store), "PUT", Some(r#"{"topBlogs":[]}"#)).await,
    )
    .await;
    assert_eq!(body["data"]["topBlogs"], json!([]));
  }

  #[tokio::test]
  async fn put_ignores_form_helper_fields() {
    let store = make_store().await;
    let resp = send(
      api_router(store),
      "PUT",
      Some(r#"{"id":"abc","skillsInput":"Go, Rust","linksInput":"a:b","links":{"github":"https://g"}}"#),
    )
    .await;
    let body = json_body(resp).await;
    assert_eq!(body["data"]["skills"], json!([]));
    assert_eq!(body["data"]["links"], json!({ "github": "https://g" }));
    assert!(body["data"].get("skillsInput").is_none());
  }

  #[tokio::test]
  async fn malformed_json_is_a_bad_request() {
    let store = make_store().await;
    for method in ["PUT", "POST"] {
      let resp = send(api_router(store.clone()), method, Some("{nope")).await;
      assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{method}");
      let body = json_body(resp).await;
      assert_eq!(body["success"], json!(false));
      assert_eq!(body["message"], json!("Invalid JSON body"));
    }
    assert_eq!(store.count().await.unwrap(), 0);
  }

  // ── Store failures ───────────────────────────────────────────────────────────

  #[derive(Debug, thiserror::Error)]
  #[error("disk on fire")]
  struct Broken;

  struct BrokenStore;

  impl ContentRepository for BrokenStore {
    type Error = Broken;

    async fn find_latest(&self) -> Result<Option<HomeContent>, Broken> { Err(Broken) }

    async fn create(&self, _content: Content) -> Result<HomeContent, Broken> { Err(Broken) }

    async fn save(&self, _record: HomeContent) -> Result<HomeContent, Broken> { Err(Broken) }
  }

  #[tokio::test]
  async fn store_failures_are_server_errors() {
    let cases = [
      ("GET", None, home::FETCH_FAILED),
      ("POST", Some("{}"), home::SAVE_FAILED),
      ("PUT", Some("{}"), home::UPDATE_FAILED),
    ];
    for (method, body, message) in cases {
      let resp = send(api_router(Arc::new(BrokenStore)), method, body).await;
      assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{method}");
      assert_eq!(
        json_body(resp).await,
        json!({ "success": false, "message": message, "error": "disk on fire" })
      );
    }
  }
}
