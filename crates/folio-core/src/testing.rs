//! In-memory repositories for service tests.

use std::sync::Mutex;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::{
  content::{Content, HomeContent},
  store::ContentRepository,
};

#[derive(Debug, Error)]
pub enum MemoryError {
  #[error("record not found: {0}")]
  NotFound(Uuid),
  #[error("store unavailable")]
  Unavailable,
}

/// Keeps every record in insertion order; the last one is the latest.
#[derive(Default)]
pub struct MemoryStore {
  records: Mutex<Vec<HomeContent>>,
  /// Number of `create` and `save` calls.
  writes:  Mutex<usize>,
}

impl MemoryStore {
  pub fn len(&self) -> usize { self.records.lock().unwrap().len() }

  pub fn write_count(&self) -> usize { *self.writes.lock().unwrap() }

  fn bump(&self) { *self.writes.lock().unwrap() += 1; }
}

impl ContentRepository for MemoryStore {
  type Error = MemoryError;

  async fn find_latest(&self) -> Result<Option<HomeContent>, MemoryError> {
    Ok(self.records.lock().unwrap().last().cloned())
  }

  async fn create(&self, content: Content) -> Result<HomeContent, MemoryError> {
    self.bump();
    let now = Utc::now();
    let record = HomeContent {
      id: Uuid::new_v4(),
      created_at: now,
      updated_at: now,
      content,
    };
    self.records.lock().unwrap().push(record.clone());
    Ok(record)
  }

  async fn save(&self, mut record: HomeContent) -> Result<HomeContent, MemoryError> {
    self.bump();
    let mut records = self.records.lock().unwrap();
    let slot = records
      .iter_mut()
      .find(|r| r.id == record.id)
      .ok_or(MemoryError::NotFound(record.id))?;
    record.updated_at = Utc::now();
    *slot = record.clone();
    Ok(record)
  }
}

/// Fails every call.
pub struct FailingStore;

impl ContentRepository for FailingStore {
  type Error = MemoryError;

  async fn find_latest(&self) -> Result<Option<HomeContent>, MemoryError> {
    Err(MemoryError::Unavailable)
  }

  async fn create(&self, _content: Content) -> Result<HomeContent, MemoryError> {
    Err(MemoryError::Unavailable)
  }

  async fn save(&self, _record: HomeContent) -> Result<HomeContent, MemoryError> {
    Err(MemoryError::Unavailable)
  }
}
