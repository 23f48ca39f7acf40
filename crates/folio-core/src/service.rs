//! `ContentService`: the three boundary operations, composed from the
//! reconciler and a [`ContentRepository`].

use std::sync::Arc;

use crate::{
  Error, Result,
  content::HomeContent,
  reconcile::{ContentPatch, Reconciled, build_new, reconcile},
  store::ContentRepository,
};

/// The outcome of [`ContentService::upsert`].
#[derive(Debug, Clone)]
pub struct Upserted {
  pub record:  HomeContent,
  /// `true` when no record existed and a new one was inserted.
  pub created: bool,
}

/// Orchestrates fetch-latest, create-new and update-or-create.
///
/// Holds no state besides the repository handle. Each call performs at most
/// one write (one create or one save) and never retries.
pub struct ContentService<R> {
  repo: Arc<R>,
}

impl<R> Clone for ContentService<R> {
  fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

impl<R: ContentRepository> ContentService<R> {
  pub fn new(repo: Arc<R>) -> Self { Self { repo } }

  #[cfg(test)]
  fn repository(&self) -> &Arc<R> { &self.repo }

  /// The canonical record, or `None` on an empty store.
  pub async fn get_latest(&self) -> Result<Option<HomeContent>> {
    self.repo.find_latest().await.map_err(failed("find latest"))
  }

  /// Insert a brand-new record built from `patch`.
  ///
  /// Never looks for an existing record: repeated calls accumulate records,
  /// and only the newest stays reachable through [`Self::get_latest`].
  pub async fn create_new(&self, patch: ContentPatch) -> Result<HomeContent> {
    let record = self
      .repo
      .create(build_new(patch))
      .await
      .map_err(failed("create"))?;
    tracing::info!(id = %record.id, "created home content");
    Ok(record)
  }

  /// Merge `patch` into the latest record, or create one if the store is
  /// empty.
  ///
  /// Concurrent upserts are not serialized: two callers may read the same
  /// latest record and both save, and the later save wins.
  pub async fn upsert(&self, patch: ContentPatch) -> Result<Upserted> {
    let latest = self.get_latest().await?;
    match reconcile(latest, patch) {
      Reconciled::Create(content) => {
        let record = self.repo.create(content).await.map_err(failed("create"))?;
        tracing::info!(id = %record.id, created = true, "upserted home content");
        Ok(Upserted { record, created: true })
      }
      Reconciled::Update(record) => {
        let record = self.repo.save(record).await.map_err(failed("save"))?;
        tracing::info!(id = %record.id, created = false, "upserted home content");
        Ok(Upserted { record, created: false })
      }
    }
  }
}

fn failed<E>(op: &'static str) -> impl FnOnce(E) -> Error
where
  E: std::error::Error + Send + Sync + 'static,
{
  move |e| {
    tracing::error!(op, error = %e, "content store failure");
    Error::store(e)
  }
}
