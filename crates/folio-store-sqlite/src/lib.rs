//! SQLite backend for folio's home content.
//!
//! Each record is one row of `home_contents`: the id, two timestamps and
//! the content body as a JSON document. Rows are only ever inserted or
//! updated in place; [`SqliteStore`] picks the canonical record by
//! `created_at`. Queries run on the [`tokio_rusqlite`] connection thread.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
