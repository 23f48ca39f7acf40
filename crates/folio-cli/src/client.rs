//! Async HTTP client wrapping the folio JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use folio_core::{content::HomeContent, reconcile::ContentPatch};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

/// Connection settings for the folio API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
}

/// Body of a successful `GET`.
#[derive(Debug, Deserialize)]
struct Fetched {
  data: Option<HomeContent>,
}

/// Body of a successful `POST` or `PUT`.
#[derive(Debug, Deserialize)]
struct Written {
  message: String,
  data:    HomeContent,
}

/// Body of any failed request.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Failure {
  message: String,
  error:   String,
}

/// The server's answer to a write.
#[derive(Debug)]
pub struct WriteOutcome {
  pub message: String,
  pub record:  HomeContent,
  /// `true` when the server answered `201 Created`.
  pub created: bool,
}

/// Async HTTP client for the folio JSON API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  fn url(&self) -> String {
    format!(
      "{}/api/homeContentApi",
      self.config.base_url.trim_end_matches('/')
    )
  }

  /// `GET /api/homeContentApi`
  pub async fn fetch_latest(&self) -> Result<Option<HomeContent>> {
    tracing::debug!(url = %self.url(), "fetching latest home content");
    let resp = self
      .client
      .get(self.url())
      .send()
      .await
      .context("GET /homeContentApi failed")?;

    let resp = ensure_success("GET", resp).await?;
    let body: Fetched = resp.json().await.context("deserialising home content")?;
    Ok(body.data)
  }

  /// `POST /api/homeContentApi`: always a new record.
  pub async fn create(&self, patch: &ContentPatch) -> Result<WriteOutcome> {
    let resp = self
      .client
      .post(self.url())
      .json(patch)
      .send()
      .await
      .context("POST /homeContentApi failed")?;
    written("POST", resp).await
  }

  /// `PUT /api/homeContentApi`: merge into the latest record.
  pub async fn upsert(&self, patch: &ContentPatch) -> Result<WriteOutcome> {
    let resp = self
      .client
      .put(self.url())
      .json(patch)
      .send()
      .await
      .context("PUT /homeContentApi failed")?;
    written("PUT", resp).await
  }
}

async fn ensure_success(method: &str, resp: Response) -> Result<Response> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }
  let failure: Failure = resp.json().await.unwrap_or_default();
  Err(anyhow!(
    "{method} /homeContentApi → {status}: {} ({})",
    failure.message,
    failure.error
  ))
}

async fn written(method: &str, resp: Response) -> Result<WriteOutcome> {
  let resp = ensure_success(method, resp).await?;
  let created = resp.status() == StatusCode::CREATED;
  let body: Written = resp.json().await.context("deserialising written record")?;
  Ok(WriteOutcome {
    message: body.message,
    record: body.data,
    created,
  })
}
