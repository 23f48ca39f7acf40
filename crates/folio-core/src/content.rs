//! The home-content record: the one document a portfolio deployment edits.
//!
//! Every field is always present on the wire. On read, missing fields fall
//! back to their defaults so that older documents stay loadable.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Platform name → URL, e.g. `github` → `https://github.com/alice`.
pub type Links = BTreeMap<String, String>;

// ─── Entries ─────────────────────────────────────────────────────────────────

/// One featured project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
  pub title:       String,
  /// Short display caption, distinct from `title`.
  pub heading:     String,
  pub live_link:   String,
  pub github_link: String,
  pub description: String,
  /// Bullet list shown under the project; distinct from `skills`.
  pub features:    Vec<String>,
  /// Tag list of technologies.
  pub skills:      Vec<String>,
  /// Image URLs.
  pub image:       Vec<String>,
}

/// One featured blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogEntry {
  #[serde(default)]
  pub title:   String,
  #[serde(default)]
  pub link:    String,
  #[serde(default)]
  pub summary: String,
  #[serde(default)]
  pub image:   Vec<String>,
  #[serde(with = "crate::timestamp", default = "Utc::now")]
  pub date:    DateTime<Utc>,
  #[serde(default)]
  pub tags:    Vec<String>,
}

// ─── Content ─────────────────────────────────────────────────────────────────

/// The editable body of a record, without store-assigned metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
  pub name:         String,
  pub role:         String,
  pub email:        String,
  pub heading:      String,
  pub sub_heading:  String,
  pub description:  String,
  pub image_url:    String,
  pub resume:       String,
  pub links:        Links,
  pub skills:       Vec<String>,
  pub top_projects: Vec<ProjectEntry>,
  pub top_blogs:    Vec<BlogEntry>,
}

// ─── HomeContent ─────────────────────────────────────────────────────────────

/// A stored record. `id`, `created_at` and `updated_at` are assigned by the
/// store; callers never set them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
  #[serde(rename = "_id")]
  pub id:         Uuid,
  /// Selects the canonical record: the greatest `created_at` wins.
  #[serde(with = "crate::timestamp")]
  pub created_at: DateTime<Utc>,
  #[serde(with = "crate::timestamp")]
  pub updated_at: DateTime<Utc>,
  #[serde(flatten)]
  pub content:    Content,
}
