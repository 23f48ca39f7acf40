//! Editing a [`ContentForm`] as TOML in the operator's `$EDITOR`.

use std::{env, fs, process::Command};

use anyhow::{Context, Result, bail};
use folio_core::form::ContentForm;

const HEADER: &str = "\
# folio home content
#
# skillsInput, featuresInput, imageInput and tagsInput are comma-separated.
# linksInput is a comma-separated list of name:url pairs.
# Blog dates are RFC 3339 timestamps or YYYY-MM-DD; leave blank for today.
# Add a [[topProjects]] or [[topBlogs]] table to add an entry; delete one to
# remove it.

";

pub fn render(form: &ContentForm) -> Result<String> {
  let body = toml::to_string_pretty(form).context("rendering form as TOML")?;
  Ok(format!("{HEADER}{body}"))
}

pub fn parse(text: &str) -> Result<ContentForm> {
  toml::from_str(text).context("parsing edited form")
}

/// The editor command: `$VISUAL`, then `$EDITOR`, then `vi`.
fn editor_command() -> String {
  env::var("VISUAL")
    .or_else(|_| env::var("EDITOR"))
    .ok()
    .filter(|e| !e.trim().is_empty())
    .unwrap_or_else(|| "vi".to_string())
}

/// Open `form` in the editor. Returns `None` when the file was saved
/// unchanged.
pub fn edit(form: &ContentForm) -> Result<Option<ContentForm>> {
  let original = render(form)?;
  let file = tempfile::Builder::new()
    .prefix("folio-")
    .suffix(".toml")
    .tempfile()
    .context("creating temp file")?;
  fs::write(file.path(), &original).context("writing temp file")?;

  let editor = editor_command();
  let mut parts = editor.split_whitespace();
  let program = parts.next().unwrap_or("vi");
  let status = Command::new(program)
    .args(parts)
    .arg(file.path())
    .status()
    .with_context(|| format!("launching editor {editor:?}"))?;
  if !status.success() {
    bail!("editor {editor:?} exited with {status}");
  }

  let edited = fs::read_to_string(file.path()).context("reading edited file")?;
  if edited == original {
    return Ok(None);
  }
  parse(&edited).map(Some)
}
