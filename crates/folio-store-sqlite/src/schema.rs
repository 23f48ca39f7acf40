//! SQL schema for the folio SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE ... IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per record. Rows are never deleted; the canonical record is the
-- one with the greatest created_at.
CREATE TABLE IF NOT EXISTS home_contents (
    id          TEXT PRIMARY KEY,
    created_at  TEXT NOT NULL,   -- fixed-width RFC 3339 UTC; store-assigned
    updated_at  TEXT NOT NULL,   -- refreshed on every save
    document    TEXT NOT NULL    -- JSON content body (camelCase keys)
);

CREATE INDEX IF NOT EXISTS home_contents_created_idx ON home_contents(created_at);

PRAGMA user_version = 1;
";
