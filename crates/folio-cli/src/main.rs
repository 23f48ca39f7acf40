//! `folio`: editor for the portfolio home content.
//!
//! # Usage
//!
//! ```text
//! folio show
//! folio edit
//! folio set --role "Staff Engineer" --skills "Rust, Go"
//! folio --url https://folio.example.com publish home.json
//! ```

mod client;
mod editor;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client::{ApiClient, ApiConfig, WriteOutcome};
use folio_core::{
  codec::{decode_list, decode_map},
  form::ContentForm,
  reconcile::ContentPatch,
};
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Edit the portfolio home content")]
struct Args {
  /// Path to a TOML config file (url).
  #[arg(short, long, value_name = "FILE", global = true)]
  config: Option<PathBuf>,

  /// Base URL of the folio server (default: http://localhost:3000).
  #[arg(long, env = "FOLIO_URL", global = true)]
  url: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Print the latest record as an editing form.
  Show,
  /// Edit the latest record in $EDITOR and submit it.
  Edit,
  /// Update individual fields of the latest record.
  Set(SetArgs),
  /// Create a brand-new record from a JSON document.
  Publish {
    /// JSON file holding the record fields.
    file: PathBuf,
  },
}

#[derive(ClapArgs, Debug, Default)]
struct SetArgs {
  #[arg(long)]
  name:        Option<String>,
  #[arg(long)]
  role:        Option<String>,
  #[arg(long)]
  email:       Option<String>,
  #[arg(long)]
  heading:     Option<String>,
  #[arg(long)]
  sub_heading: Option<String>,
  #[arg(long)]
  description: Option<String>,
  #[arg(long)]
  image_url:   Option<String>,
  #[arg(long)]
  resume:      Option<String>,
  /// Comma-separated skills; replaces the whole list.
  #[arg(long, value_name = "LIST")]
  skills:      Option<String>,
  /// Comma-separated `name:url` pairs; replaces all links.
  #[arg(long, value_name = "PAIRS")]
  links:       Option<String>,
}

impl SetArgs {
  fn into_patch(self) -> ContentPatch {
    ContentPatch {
      name: self.name,
      role: self.role,
      email: self.email,
      heading: self.heading,
      sub_heading: self.sub_heading,
      description: self.description,
      image_url: self.image_url,
      resume: self.resume,
      skills: self.skills.as_deref().map(decode_list),
      links: self.links.as_deref().map(decode_map),
      ..ContentPatch::default()
    }
  }
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default)]
struct ConfigFile {
  #[serde(default)]
  url: String,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  let file_cfg: ConfigFile = if let Some(path) = &args.config {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw).context("parsing config file")?
  } else {
    ConfigFile::default()
  };

  // CLI flags override config file, which overrides defaults.
  let api_config = ApiConfig {
    base_url: args
      .url
      .or_else(|| (!file_cfg.url.is_empty()).then(|| file_cfg.url.clone()))
      .unwrap_or_else(|| "http://localhost:3000".to_string()),
  };
  let client = ApiClient::new(api_config)?;

  match args.command {
    Command::Show => show(&client).await,
    Command::Edit => edit(&client).await,
    Command::Set(set) => {
      let outcome = client.upsert(&set.into_patch()).await?;
      report(&outcome);
      Ok(())
    }
    Command::Publish { file } => publish(&client, &file).await,
  }
}

// ─── Commands ─────────────────────────────────────────────────────────────────

async fn show(client: &ApiClient) -> Result<()> {
  match client.fetch_latest().await? {
    Some(record) => {
      println!("# id: {}", record.id);
      println!("# updated: {}", folio_core::timestamp::format(&record.updated_at));
      print!("{}", editor::render(&ContentForm::from_record(&record.content))?);
    }
    None => println!("no home content yet; use `folio edit` to create it"),
  }
  Ok(())
}

async fn edit(client: &ApiClient) -> Result<()> {
  let latest = client.fetch_latest().await?;
  let form = latest
    .as_ref()
    .map(|r| ContentForm::from_record(&r.content))
    .unwrap_or_default();

  let Some(edited) = editor::edit(&form)? else {
    println!("no changes");
    return Ok(());
  };

  let patch = edited.to_patch();
  let outcome = if latest.is_some() {
    client.upsert(&patch).await?
  } else {
    client.create(&patch).await?
  };
  report(&outcome);
  Ok(())
}

async fn publish(client: &ApiClient, file: &std::path::Path) -> Result<()> {
  let raw = std::fs::read(file).with_context(|| format!("reading {}", file.display()))?;
  let patch = ContentPatch::from_slice(&raw)
    .with_context(|| format!("parsing {} as JSON", file.display()))?;
  let outcome = client.create(&patch).await?;
  report(&outcome);
  Ok(())
}

fn report(outcome: &WriteOutcome) {
  println!("{} ({})", outcome.message, outcome.record.id);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn set_flags_build_a_partial_patch() {
    let patch = SetArgs {
      role: Some("Staff Engineer".into()),
      skills: Some("Rust, Go,  ".into()),
      links: Some("github:https://github.com/alice, site:https://alice.dev".into()),
      ..SetArgs::default()
    }
    .into_patch();

    assert_eq!(patch.role.as_deref(), Some("Staff Engineer"));
    assert_eq!(patch.name, None);
    assert_eq!(patch.skills, Some(vec!["Rust".to_string(), "Go".to_string()]));
    let links = patch.links.unwrap();
    assert_eq!(links["site"], "https://alice.dev");
    assert_eq!(patch.top_projects, None);
    assert_eq!(patch.top_blogs, None);
  }

  #[test]
  fn set_without_flags_sends_nothing() {
    let json = serde_json::to_value(SetArgs::default().into_patch()).unwrap();
    assert_eq!(json, serde_json::json!({}));
  }

  #[test]
  fn args_parse_subcommands() {
    let args = Args::try_parse_from([
      "folio",
      "--url",
      "http://example.test",
      "set",
      "--sub-heading",
      "hi",
    ])
    .unwrap();
    assert_eq!(args.url.as_deref(), Some("http://example.test"));
    let Command::Set(set) = args.command else { panic!("expected set") };
    assert_eq!(set.sub_heading.as_deref(), Some("hi"));
  }
}
