//! The `ContentRepository` trait.
//!
//! Implemented by storage backends (e.g. `folio-store-sqlite`). The service
//! and the HTTP layer depend on this abstraction, not on a concrete backend.

use std::future::Future;

use crate::content::{Content, HomeContent};

/// Abstraction over the persistent document store.
///
/// Records are never deleted. Several may exist; the canonical one is the
/// most recently created, selected by an explicit query rather than held as
/// global state.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait ContentRepository: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// The record with the greatest creation time, or `None` if the store is
  /// empty. Ties resolve to the record inserted last.
  fn find_latest(
    &self,
  ) -> impl Future<Output = Result<Option<HomeContent>, Self::Error>> + Send + '_;

  /// Insert a new record. The store assigns `id`, `created_at` and
  /// `updated_at`.
  fn create(
    &self,
    content: Content,
  ) -> impl Future<Output = Result<HomeContent, Self::Error>> + Send + '_;

  /// Overwrite the content of an existing record and refresh `updated_at`.
  /// Returns the record as stored.
  fn save(
    &self,
    record: HomeContent,
  ) -> impl Future<Output = Result<HomeContent, Self::Error>> + Send + '_;
}
