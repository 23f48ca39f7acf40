//! [`SqliteStore`]: the SQLite implementation of [`ContentRepository`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use folio_core::{
  content::{Content, HomeContent},
  store::ContentRepository,
};

use crate::{
  Error, Result,
  encode::{RawRecord, encode_document, encode_dt, encode_uuid},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A folio content store backed by a single SQLite file.
///
/// Cloning is cheap: the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, for tests.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Number of stored records, reachable or not.
  pub async fn count(&self) -> Result<usize> {
    let n: i64 = self
      .conn
      .call(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM home_contents", [], |r| r.get(0))?)
      })
      .await?;
    Ok(n as usize)
  }

  #[cfg(test)]
  pub(crate) fn conn_for_tests(&self) -> &tokio_rusqlite::Connection { &self.conn }
}

// ─── ContentRepository impl ──────────────────────────────────────────────────

impl ContentRepository for SqliteStore {
  type Error = Error;

  async fn find_latest(&self) -> Result<Option<HomeContent>> {
    let raw: Option<RawRecord> = self
      .conn
      .call(|conn| {
        Ok(conn
          .query_row(
            "SELECT id, created_at, updated_at, document
             FROM home_contents
             ORDER BY created_at DESC, rowid DESC
             LIMIT 1",
            [],
            RawRecord::from_row,
          )
          .optional()?)
      })
      .await?;

    raw.map(RawRecord::into_record).transpose()
  }

  async fn create(&self, content: Content) -> Result<HomeContent> {
    let now = Utc::now();
    let record = HomeContent {
      id: Uuid::new_v4(),
      created_at: now,
      updated_at: now,
      content,
    };

    let id_str  = encode_uuid(record.id);
    let at_str  = encode_dt(record.created_at);
    let doc_str = encode_document(&record.content)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO home_contents (id, created_at, updated_at, document)
           VALUES (?1, ?2, ?2, ?3)",
          rusqlite::params![id_str, at_str, doc_str],
        )?;
        Ok(())
      })
      .await?;

    tracing::debug!(id = %record.id, "inserted home_contents row");
    Ok(record)
  }

  async fn save(&self, mut record: HomeContent) -> Result<HomeContent> {
    record.updated_at = Utc::now();

    let id_str  = encode_uuid(record.id);
    let at_str  = encode_dt(record.updated_at);
    let doc_str = encode_document(&record.content)?;

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE home_contents SET updated_at = ?2, document = ?3 WHERE id = ?1",
          rusqlite::params![id_str, at_str, doc_str],
        )?)
      })
      .await?;

    if changed == 0 {
      return Err(Error::RecordNotFound(record.id));
    }
    Ok(record)
  }
}
