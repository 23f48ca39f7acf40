//! The editing form: a record as an operator edits it.
//!
//! List and map fields are flattened to comma-separated text with
//! [`crate::codec`] (`skillsInput`, `linksInput`, per-project
//! `featuresInput`/`skillsInput`/`imageInput`, per-blog
//! `tagsInput`/`imageInput`). Blog dates are shown as full timestamps so an
//! unedited entry keeps its time of day; a bare `YYYY-MM-DD` is accepted on
//! submit.
//! Submitting a form turns the text back into a full [`ContentPatch`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  codec::{decode_list, decode_map, encode_list, encode_map},
  content::{BlogEntry, Content, ProjectEntry},
  normalize::{PartialBlog, PartialProject},
  reconcile::ContentPatch,
  timestamp,
};

// ─── Forms ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectForm {
  pub title:          String,
  pub heading:        String,
  pub live_link:      String,
  pub github_link:    String,
  pub description:    String,
  pub features_input: String,
  pub skills_input:   String,
  pub image_input:    String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogForm {
  pub title:       String,
  pub link:        String,
  pub summary:     String,
  /// RFC 3339 or `YYYY-MM-DD`; blank means "today" on submit.
  pub date:        String,
  pub tags_input:  String,
  pub image_input: String,
}

/// Scalars come first and entry lists last so the form serializes cleanly
/// to TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentForm {
  pub name:         String,
  pub role:         String,
  pub email:        String,
  pub heading:      String,
  pub sub_heading:  String,
  pub description:  String,
  pub image_url:    String,
  pub resume:       String,
  pub links_input:  String,
  pub skills_input: String,
  pub top_projects: Vec<ProjectForm>,
  pub top_blogs:    Vec<BlogForm>,
}

// ─── Record → form ───────────────────────────────────────────────────────────

impl From<&ProjectEntry> for ProjectForm {
  fn from(p: &ProjectEntry) -> Self {
    Self {
      title:          p.title.clone(),
      heading:        p.heading.clone(),
      live_link:      p.live_link.clone(),
      github_link:    p.github_link.clone(),
      description:    p.description.clone(),
      features_input: encode_list(&p.features),
      skills_input:   encode_list(&p.skills),
      image_input:    encode_list(&p.image),
    }
  }
}

impl From<&BlogEntry> for BlogForm {
  fn from(b: &BlogEntry) -> Self {
    Self {
      title:       b.title.clone(),
      link:        b.link.clone(),
      summary:     b.summary.clone(),
      date:        timestamp::format(&b.date),
      tags_input:  encode_list(&b.tags),
      image_input: encode_list(&b.image),
    }
  }
}

impl ContentForm {
  pub fn new() -> Self { Self::default() }

  pub fn from_record(content: &Content) -> Self {
    Self {
      name:         content.name.clone(),
      role:         content.role.clone(),
      email:        content.email.clone(),
      heading:      content.heading.clone(),
      sub_heading:  content.sub_heading.clone(),
      description:  content.description.clone(),
      image_url:    content.image_url.clone(),
      resume:       content.resume.clone(),
      links_input:  encode_map(&content.links),
      skills_input: encode_list(&content.skills),
      top_projects: content.top_projects.iter().map(ProjectForm::from).collect(),
      top_blogs:    content.top_blogs.iter().map(BlogForm::from).collect(),
    }
  }

  // ── Entry list editing ─────────────────────────────────────────────────────

  pub fn add_project(&mut self) { self.top_projects.push(ProjectForm::default()); }

  /// Append an empty blog entry dated today.
  pub fn add_blog(&mut self) {
    self.top_blogs.push(BlogForm {
      date: timestamp::format_date(&Utc::now()),
      ..BlogForm::default()
    });
  }

  /// Remove the project at `index`; out-of-range indices are ignored.
  pub fn remove_project(&mut self, index: usize) {
    if index < self.top_projects.len() {
      self.top_projects.remove(index);
    }
  }

  /// Remove the blog at `index`; out-of-range indices are ignored.
  pub fn remove_blog(&mut self, index: usize) {
    if index < self.top_blogs.len() {
      self.top_blogs.remove(index);
    }
  }

  // ── Form → patch ───────────────────────────────────────────────────────────

  /// A patch supplying every field, with all text inputs decoded.
  pub fn to_patch(&self) -> ContentPatch { self.to_patch_at(Utc::now()) }

  /// [`Self::to_patch`] with "today" supplied by the caller for blank blog
  /// dates.
  pub fn to_patch_at(&self, now: DateTime<Utc>) -> ContentPatch {
    ContentPatch {
      name:         Some(self.name.clone()),
      role:         Some(self.role.clone()),
      email:        Some(self.email.clone()),
      heading:      Some(self.heading.clone()),
      sub_heading:  Some(self.sub_heading.clone()),
      description:  Some(self.description.clone()),
      image_url:    Some(self.image_url.clone()),
      resume:       Some(self.resume.clone()),
      links:        Some(decode_map(&self.links_input)),
      skills:       Some(decode_list(&self.skills_input)),
      top_projects: Some(self.top_projects.iter().map(ProjectForm::to_partial).collect()),
      top_blogs:    Some(self.top_blogs.iter().map(|b| b.to_partial(now)).collect()),
    }
  }
}

impl ProjectForm {
  pub fn to_partial(&self) -> PartialProject {
    PartialProject {
      title:       Some(self.title.clone()),
      heading:     Some(self.heading.clone()),
      live_link:   Some(self.live_link.clone()),
      github_link: Some(self.github_link.clone()),
      description: Some(self.description.clone()),
      features:    Some(decode_list(&self.features_input)),
      skills:      Some(decode_list(&self.skills_input)),
      image:       Some(decode_list(&self.image_input)),
    }
  }
}

impl BlogForm {
  /// A blank date becomes midnight of `now`'s day; an unreadable one is left
  /// unset for the normalizer to fill.
  pub fn to_partial(&self, now: DateTime<Utc>) -> PartialBlog {
    let date = if self.date.trim().is_empty() {
      timestamp::parse(&timestamp::format_date(&now))
    } else {
      timestamp::parse(&self.date)
    };
    PartialBlog {
      title:   Some(self.title.clone()),
      link:    Some(self.link.clone()),
      summary: Some(self.summary.clone()),
      image:   Some(decode_list(&self.image_input)),
      date,
      tags:    Some(decode_list(&self.tags_input)),
    }
  }
}
