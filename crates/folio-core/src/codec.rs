//! Comma-separated text ⇄ structured values.
//!
//! The editing form shows list fields as `"a, b, c"` and link maps as
//! `"github:https://…, twitter:https://…"`. Decoding never fails: malformed
//! pieces are dropped and whatever parses is kept.

use crate::content::Links;

pub const SEPARATOR: &str = ", ";

pub fn encode_list<S: AsRef<str>>(items: &[S]) -> String {
  items
    .iter()
    .map(AsRef::as_ref)
    .collect::<Vec<_>>()
    .join(SEPARATOR)
}

/// Split on `,`, trim, drop empty pieces.
pub fn decode_list(text: &str) -> Vec<String> {
  text
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_owned)
    .collect()
}

pub fn encode_map(map: &Links) -> String {
  map
    .iter()
    .map(|(k, v)| format!("{k}:{v}"))
    .collect::<Vec<_>>()
    .join(SEPARATOR)
}

/// Decode `key:value` items separated by `,`.
///
/// Only the first `:` separates key from value, so URLs with ports survive.
/// Items with no `:` or a blank key are dropped; `"key:"` maps to an empty
/// value. A repeated key keeps its last value.
pub fn decode_map(text: &str) -> Links {
  let mut links = Links::new();
  if text.trim().is_empty() {
    return links;
  }
  for item in text.split(',') {
    let Some((key, value)) = item.split_once(':') else {
      continue;
    };
    let key = key.trim();
    if key.is_empty() {
      continue;
    }
    links.insert(key.to_owned(), value.trim().to_owned());
  }
  links
}
