//! Forgiving field decoders for editor payloads.
//!
//! Payloads come from free-form editing and may carry missing or wrong-typed
//! fields. These `deserialize_with` helpers accept any JSON value and turn it
//! into `Some(..)` only when it can be coerced to the expected shape;
//! everything else decodes as "not supplied". They never fail on a
//! well-formed JSON document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

use crate::{content::Links, timestamp};

// ─── Coercions ───────────────────────────────────────────────────────────────

/// Coerce a value destined for a scalar field. Falsy values (`0`, `false`,
/// `null`) and non-scalars are treated as absent; the empty string is kept
/// and left for the merge policy to judge.
pub fn scalar(v: &Value) -> Option<String> {
  match v {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
    Value::Bool(true) => Some("true".to_owned()),
    _ => None,
  }
}

/// Coerce a list element or map value: any string, number or boolean.
pub fn element(v: &Value) -> Option<String> {
  match v {
    Value::String(s) => Some(s.clone()),
    Value::Number(n) => Some(n.to_string()),
    Value::Bool(b) => Some(b.to_string()),
    _ => None,
  }
}

pub fn string_list(v: &Value) -> Option<Vec<String>> {
  v.as_array()
    .map(|items| items.iter().filter_map(element).collect())
}

pub fn string_map(v: &Value) -> Option<Links> {
  v.as_object().map(|obj| {
    obj
      .iter()
      .filter_map(|(k, v)| element(v).map(|s| (k.clone(), s)))
      .collect()
  })
}

/// Decode each element of an array as a partial entry. Non-object elements
/// become an all-default entry so list positions are preserved.
pub fn entry_list<T>(v: &Value) -> Option<Vec<T>>
where
  T: DeserializeOwned + Default,
{
  v.as_array().map(|items| {
    items
      .iter()
      .map(|item| {
        if item.is_object() {
          serde_json::from_value(item.clone()).unwrap_or_default()
        } else {
          T::default()
        }
      })
      .collect()
  })
}

// ─── deserialize_with adapters ───────────────────────────────────────────────

pub fn string<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(scalar(&Value::deserialize(d)?))
}

pub fn list<'de, D>(d: D) -> Result<Option<Vec<String>>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(string_list(&Value::deserialize(d)?))
}

pub fn map<'de, D>(d: D) -> Result<Option<Links>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(string_map(&Value::deserialize(d)?))
}

pub fn entries<'de, D, T>(d: D) -> Result<Option<Vec<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: DeserializeOwned + Default,
{
  Ok(entry_list(&Value::deserialize(d)?))
}

pub fn date<'de, D>(d: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(timestamp::from_value(&Value::deserialize(d)?))
}
