//! Merging an editor's partial update into the canonical record.
//!
//! Two policies apply:
//!
//! * **Truthy merge** ([`merge_truthy`]) for scalars, `skills` and `links`:
//!   the incoming value wins only when it is truthy. An empty string, `0`,
//!   `false` or `null` in the patch is indistinguishable from "not
//!   supplied", so an update can never blank a scalar field.
//! * **Wholesale replace** for `topProjects` and `topBlogs`: supplying the
//!   field at all, even as `[]`, discards the previous list. Every incoming
//!   entry is normalized first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
  Result,
  content::{Content, HomeContent, Links},
  lenient,
  normalize::{PartialBlog, PartialProject, normalize_blog, normalize_project},
};

// ─── Patch ───────────────────────────────────────────────────────────────────

/// A partial update payload. `None` means "not supplied".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentPatch {
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub name:         Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub role:         Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub email:        Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub heading:      Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub sub_heading:  Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub description:  Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub image_url:    Option<String>,
  #[serde(default, deserialize_with = "lenient::string", skip_serializing_if = "Option::is_none")]
  pub resume:       Option<String>,
  #[serde(default, deserialize_with = "lenient::map", skip_serializing_if = "Option::is_none")]
  pub links:        Option<Links>,
  #[serde(default, deserialize_with = "lenient::list", skip_serializing_if = "Option::is_none")]
  pub skills:       Option<Vec<String>>,
  #[serde(default, deserialize_with = "lenient::entries", skip_serializing_if = "Option::is_none")]
  pub top_projects: Option<Vec<PartialProject>>,
  #[serde(default, deserialize_with = "lenient::entries", skip_serializing_if = "Option::is_none")]
  pub top_blogs:    Option<Vec<PartialBlog>>,
}

impl ContentPatch {
  /// Decode a patch from any JSON value. Anything other than an object is
  /// an empty patch.
  pub fn from_value(v: Value) -> Self {
    if v.is_object() {
      serde_json::from_value(v).unwrap_or_default()
    } else {
      Self::default()
    }
  }

  /// Decode a request body. Only input that is not JSON at all is an error.
  pub fn from_slice(body: &[u8]) -> Result<Self> {
    let v: Value = serde_json::from_slice(body)?;
    Ok(Self::from_value(v))
  }
}

impl From<Content> for ContentPatch {
  /// A patch that supplies every field of `content`.
  fn from(c: Content) -> Self {
    Self {
      name:         Some(c.name),
      role:         Some(c.role),
      email:        Some(c.email),
      heading:      Some(c.heading),
      sub_heading:  Some(c.sub_heading),
      description:  Some(c.description),
      image_url:    Some(c.image_url),
      resume:       Some(c.resume),
      links:        Some(c.links),
      skills:       Some(c.skills),
      top_projects: Some(c.top_projects.into_iter().map(Into::into).collect()),
      top_blogs:    Some(c.top_blogs.into_iter().map(Into::into).collect()),
    }
  }
}

// ─── Merge policy ────────────────────────────────────────────────────────────

/// JavaScript-style truthiness for patch values.
pub trait Truthy {
  fn is_truthy(&self) -> bool;
}

impl Truthy for String {
  fn is_truthy(&self) -> bool { !self.is_empty() }
}

/// A supplied list is truthy even when empty.
impl<T> Truthy for Vec<T> {
  fn is_truthy(&self) -> bool { true }
}

/// A supplied map is truthy even when empty.
impl<K, V> Truthy for BTreeMap<K, V> {
  fn is_truthy(&self) -> bool { true }
}

/// Replace `existing` with `incoming` if it was supplied and is truthy.
// Cannot clear a field; see the module docs.
pub fn merge_truthy<T: Truthy>(existing: &mut T, incoming: Option<T>) {
  if let Some(value) = incoming.filter(Truthy::is_truthy) {
    *existing = value;
  }
}

// ─── Reconciliation ──────────────────────────────────────────────────────────

/// Apply `patch` to `existing` in place.
pub fn merge_into(existing: &mut Content, patch: ContentPatch) {
  merge_truthy(&mut existing.name, patch.name);
  merge_truthy(&mut existing.role, patch.role);
  merge_truthy(&mut existing.email, patch.email);
  merge_truthy(&mut existing.heading, patch.heading);
  merge_truthy(&mut existing.sub_heading, patch.sub_heading);
  merge_truthy(&mut existing.description, patch.description);
  merge_truthy(&mut existing.image_url, patch.image_url);
  merge_truthy(&mut existing.resume, patch.resume);
  merge_truthy(&mut existing.skills, patch.skills);
  merge_truthy(&mut existing.links, patch.links);

  if let Some(projects) = patch.top_projects {
    existing.top_projects = projects.into_iter().map(normalize_project).collect();
  }
  if let Some(blogs) = patch.top_blogs {
    existing.top_blogs = blogs.into_iter().map(normalize_blog).collect();
  }
}

/// Build a first-time record from `patch`.
///
/// Every field starts at its default, so this is exactly a merge into an
/// empty record.
pub fn build_new(patch: ContentPatch) -> Content {
  let mut content = Content::default();
  merge_into(&mut content, patch);
  content
}

/// What the service must persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
  /// No record existed: insert this new content.
  Create(Content),
  /// The latest record, mutated in place: save it.
  Update(HomeContent),
}

pub fn reconcile(existing: Option<HomeContent>, patch: ContentPatch) -> Reconciled {
  match existing {
    None => Reconciled::Create(build_new(patch)),
    Some(mut record) => {
      merge_into(&mut record.content, patch);
      Reconciled::Update(record)
    }
  }
}
