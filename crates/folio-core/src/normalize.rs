//! Entry normalization: partial, possibly wrong-typed project and blog
//! entries in, fully-populated entries out.
//!
//! This is the single choke point for entry shape. Nothing reaches the store
//! without passing through [`normalize_project`] or [`normalize_blog`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  content::{BlogEntry, ProjectEntry},
  lenient, timestamp,
};

// ─── Partial entries ─────────────────────────────────────────────────────────

/// A project entry as an editor submitted it. Every field is optional;
/// see [`crate::lenient`] for how wrong-typed values decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialProject {
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub title:       Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub heading:     Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub live_link:   Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub github_link: Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
  pub features:    Option<Vec<String>>,
  #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
  pub skills:      Option<Vec<String>>,
  #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
  pub image:       Option<Vec<String>>,
}

/// A blog entry as an editor submitted it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialBlog {
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub title:   Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub link:    Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub summary: Option<String>,
  #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
  pub image:   Option<Vec<String>>,
  #[serde(
    default,
    deserialize_with = "lenient::date",
    serialize_with = "timestamp::serialize_opt",
    skip_serializing_if = "Option::is_none"
  )]
  pub date:    Option<DateTime<Utc>>,
  #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
  pub tags:    Option<Vec<String>>,
}

impl From<ProjectEntry> for PartialProject {
  fn from(p: ProjectEntry) -> Self {
    Self {
      title:       Some(p.title),
      heading:     Some(p.heading),
      live_link:   Some(p.live_link),
      github_link: Some(p.github_link),
      description: Some(p.description),
      features:    Some(p.features),
      skills:      Some(p.skills),
      image:       Some(p.image),
    }
  }
}

impl From<BlogEntry> for PartialBlog {
  fn from(b: BlogEntry) -> Self {
    Self {
      title:   Some(b.title),
      link:    Some(b.link),
      summary: Some(b.summary),
      image:   Some(b.image),
      date:    Some(b.date),
      tags:    Some(b.tags),
    }
  }
}

// ─── Normalization ───────────────────────────────────────────────────────────

fn text(v: Option<String>) -> String {
  v.filter(|s| !s.is_empty()).unwrap_or_default()
}

fn list(v: Option<Vec<String>>) -> Vec<String> { v.unwrap_or_default() }

pub fn normalize_project(raw: PartialProject) -> ProjectEntry {
  ProjectEntry {
    title:       text(raw.title),
    heading:     text(raw.heading),
    live_link:   text(raw.live_link),
    github_link: text(raw.github_link),
    description: text(raw.description),
    features:    list(raw.features),
    skills:      list(raw.skills),
    image:       list(raw.image),
  }
}

/// Normalize a blog entry; a missing date becomes the current time.
pub fn normalize_blog(raw: PartialBlog) -> BlogEntry {
  normalize_blog_at(raw, Utc::now())
}

/// [`normalize_blog`] with the fallback date supplied by the caller.
pub fn normalize_blog_at(raw: PartialBlog, now: DateTime<Utc>) -> BlogEntry {
  BlogEntry {
    title:   text(raw.title),
    link:    text(raw.link),
    summary: text(raw.summary),
    image:   list(raw.image),
    date:    raw.date.unwrap_or(now),
    tags:    list(raw.tags),
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;
  use serde_json::json;

  use super::*;

  fn project(v: serde_json::Value) -> ProjectEntry {
    normalize_project(serde_json::from_value(v).unwrap())
  }

  #[test]
  fn empty_project_gets_every_field() {
    assert_eq!(project(json!({})), ProjectEntry::default());
  }

  #[test]
  fn project_keeps_supplied_fields() {
    let p = project(json!({
      "title": "linkshelf",
      "heading": "contact store",
      "liveLink": "https://linkshelf.dev",
      "features": ["bookmark sync", "full-text search"],
      "skills": ["Rust"],
    }));
    assert_eq!(p.title, "linkshelf");
    assert_eq!(p.heading, "contact store");
    assert_eq!(p.live_link, "https://linkshelf.dev");
    assert_eq!(p.github_link, "");
    assert_eq!(p.features, vec!["bookmark sync", "full-text search"]);
    assert_eq!(p.skills, vec!["Rust"]);
    assert!(p.image.is_empty());
  }

  #[test]
  fn wrong_typed_project_fields_are_defaulted() {
    // A comma-joined string where a list belongs is a known client bug.
    let p = project(json!({
      "title": null,
      "heading": ["not", "a", "string"],
      "features": "fast, small",
      "skills": { "rust": true },
      "image": 3,
    }));
    assert_eq!(p, ProjectEntry::default());
  }

  #[test]
  fn blog_without_date_uses_now() {
    let now = Utc.with_ymd_and_hms(2025, 5, 4, 3, 2, 1).unwrap();
    let b = normalize_blog_at(PartialBlog {
      title: Some("hello".into()),
      ..PartialBlog::default()
    }, now);
    assert_eq!(b.title, "hello");
    assert_eq!(b.link, "");
    assert_eq!(b.summary, "");
    assert!(b.image.is_empty());
    assert!(b.tags.is_empty());
    assert_eq!(b.date, now);
  }

  #[test]
  fn blog_with_unparseable_date_uses_now() {
    let raw: PartialBlog = serde_json::from_value(json!({ "date": "soon" })).unwrap();
    let before = Utc::now();
    let b = normalize_blog(raw);
    assert!(b.date >= before);
  }

  #[test]
  fn blog_keeps_supplied_date_and_lists() {
    let raw: PartialBlog = serde_json::from_value(json!({
      "title": "Rust at work",
      "date": "2024-06-01",
      "tags": ["rust", "ops"],
      "image": ["https://img/1.png"],
    }))
    .unwrap();
    let b = normalize_blog(raw);
    assert_eq!(b.date, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
    assert_eq!(b.tags, vec!["rust", "ops"]);
    assert_eq!(b.image, vec!["https://img/1.png"]);
  }

  #[test]
  fn full_entries_survive_normalization_unchanged() {
    let entry = ProjectEntry {
      title:    "a".into(),
      features: vec!["x".into()],
      ..ProjectEntry::default()
    };
    assert_eq!(normalize_project(entry.clone().into()), entry);
  }
}
