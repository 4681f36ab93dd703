use async_trait::async_trait;

use crate::domain::{BlogPost, PostRecord};
use crate::error::StoreError;

/// The shared blog repository. One instance is injected into every surface
/// so list and moderator views observe the same backend.
///
/// No implementation retries, deduplicates, or caches: the backend is the
/// single source of truth and last write wins.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Fetch the whole collection, sorted newest first.
    ///
    /// An empty or `null` backend state yields an empty vec, not an error.
    async fn list(&self) -> Result<Vec<BlogPost>, StoreError>;

    /// Persist a new record. The store assigns and returns the id.
    async fn create(&self, record: PostRecord) -> Result<String, StoreError>;

    /// Replace an existing record wholesale.
    async fn update(&self, id: &str, record: PostRecord) -> Result<(), StoreError>;

    /// Remove one post. Deleting an id that is already gone is a success.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Drop the entire collection. Irreversible; callers must gate this
    /// behind an explicit confirmation.
    async fn delete_all(&self) -> Result<(), StoreError>;
}
