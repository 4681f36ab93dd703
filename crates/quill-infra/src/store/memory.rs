//! In-memory blog store - used as fallback when no backend is configured,
//! and as the test double for the API surface.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{BlogPost, PostRecord, sort_newest_first};
use quill_core::error::StoreError;
use quill_core::ports::BlogStore;

/// In-memory store backed by a HashMap with an async RwLock.
///
/// Stands in for the backend, so it owns id assignment just like the real
/// one. Note: Data is lost on process restart.
pub struct MemoryBlogStore {
    posts: RwLock<HashMap<String, PostRecord>>,
}

impl MemoryBlogStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogStore for MemoryBlogStore {
    async fn list(&self) -> Result<Vec<BlogPost>, StoreError> {
        let posts = self.posts.read().await;

        let mut listed: Vec<BlogPost> = posts
            .iter()
            .map(|(id, record)| BlogPost {
                id: id.clone(),
                record: record.clone(),
            })
            .collect();

        sort_newest_first(&mut listed);
        Ok(listed)
    }

    async fn create(&self, record: PostRecord) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();

        let mut posts = self.posts.write().await;
        posts.insert(id.clone(), record);

        Ok(id)
    }

    async fn update(&self, id: &str, record: PostRecord) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;

        match posts.get_mut(id) {
            Some(existing) => {
                *existing = record;
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        // Deleting an already-deleted id stays a success.
        posts.remove(id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let mut posts = self.posts.write().await;
        posts.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_created_at(title: &str, iso: &str) -> PostRecord {
        PostRecord::with_created_at(title, "content", "author", iso.parse().unwrap())
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = MemoryBlogStore::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_distinct_ids() {
        let store = MemoryBlogStore::new();

        let a = store.create(PostRecord::new("a", "c", "x")).await.unwrap();
        let b = store.create(PostRecord::new("b", "c", "x")).await.unwrap();

        assert_ne!(a, b);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryBlogStore::new();
        store
            .create(record_created_at("jan", "2024-01-01T00:00:00Z"))
            .await
            .unwrap();
        store
            .create(record_created_at("feb", "2024-02-01T00:00:00Z"))
            .await
            .unwrap();

        let posts = store.list().await.unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.record.title.as_str()).collect();
        assert_eq!(titles, ["feb", "jan"]);
    }

    #[tokio::test]
    async fn delete_removes_the_post() {
        let store = MemoryBlogStore::new();
        let id = store.create(PostRecord::new("t", "c", "a")).await.unwrap();

        store.delete(&id).await.unwrap();

        let posts = store.list().await.unwrap();
        assert!(posts.iter().all(|p| p.id != id));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryBlogStore::new();
        let id = store.create(PostRecord::new("t", "c", "a")).await.unwrap();

        store.delete(&id).await.unwrap();
        store.delete(&id).await.unwrap();
        store.delete("never-existed").await.unwrap();
    }

    #[tokio::test]
    async fn delete_all_clears_the_collection() {
        let store = MemoryBlogStore::new();
        store.create(PostRecord::new("a", "c", "x")).await.unwrap();
        store.create(PostRecord::new("b", "c", "x")).await.unwrap();

        store.delete_all().await.unwrap();

        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_replaces_the_record() {
        let store = MemoryBlogStore::new();
        let id = store
            .create(PostRecord::new("before", "c", "a"))
            .await
            .unwrap();

        store
            .update(&id, PostRecord::new("after", "c", "a"))
            .await
            .unwrap();

        let posts = store.list().await.unwrap();
        assert_eq!(posts[0].record.title, "after");
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found() {
        let store = MemoryBlogStore::new();

        let result = store.update("missing", PostRecord::new("t", "c", "a")).await;

        assert!(matches!(result, Err(StoreError::NotFound)));
    }
}
