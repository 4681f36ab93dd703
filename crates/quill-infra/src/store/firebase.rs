//! Firebase Realtime Database adapter.
//!
//! The backend is an opaque JSON document store: the whole collection lives
//! at `{base}/{collection}.json` as an id-to-record map, and single posts at
//! `{base}/{collection}/{id}.json`. No retries, no caching; last write wins.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;

use quill_core::domain::{BlogPost, PostRecord, sort_newest_first};
use quill_core::error::StoreError;
use quill_core::ports::BlogStore;

/// Firebase adapter configuration.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Database base URL, e.g. `https://my-project-default-rtdb.firebaseio.com`.
    pub base_url: String,
    /// Collection node under the database root.
    pub collection: String,
}

impl FirebaseConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            collection: "blogs".to_string(),
        }
    }

    /// Load from `FIREBASE_URL` (required) and `FIREBASE_COLLECTION`.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("FIREBASE_URL").ok()?;
        let collection =
            std::env::var("FIREBASE_COLLECTION").unwrap_or_else(|_| "blogs".to_string());
        Some(Self {
            base_url,
            collection,
        })
    }
}

/// Shape of the RTDB push response: `{"name": "<new-id>"}`.
#[derive(Debug, Deserialize)]
struct PushResponse {
    name: String,
}

/// `BlogStore` over the Firebase RTDB REST interface.
pub struct FirebaseBlogStore {
    client: reqwest::Client,
    config: FirebaseConfig,
}

impl FirebaseBlogStore {
    pub fn new(config: FirebaseConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/{}.json",
            self.config.base_url.trim_end_matches('/'),
            self.config.collection
        )
    }

    fn post_url(&self, id: &str) -> String {
        format!(
            "{}/{}/{}.json",
            self.config.base_url.trim_end_matches('/'),
            self.config.collection,
            id
        )
    }
}

/// Flatten the RTDB id-to-record map into an ordered post list.
/// A `null` tree (empty database) is an empty list, not an error.
fn posts_from_tree(tree: Option<HashMap<String, PostRecord>>) -> Vec<BlogPost> {
    let mut posts: Vec<BlogPost> = tree
        .unwrap_or_default()
        .into_iter()
        .map(|(id, record)| BlogPost { id, record })
        .collect();

    sort_newest_first(&mut posts);
    posts
}

#[async_trait]
impl BlogStore for FirebaseBlogStore {
    async fn list(&self) -> Result<Vec<BlogPost>, StoreError> {
        let url = self.collection_url();
        tracing::debug!(%url, "Fetching post collection");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Network(format!(
                "GET returned {}",
                response.status()
            )));
        }

        let tree: Option<HashMap<String, PostRecord>> = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        Ok(posts_from_tree(tree))
    }

    async fn create(&self, record: PostRecord) -> Result<String, StoreError> {
        let response = self
            .client
            .post(self.collection_url())
            .json(&record)
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Write(format!(
                "POST returned {}",
                response.status()
            )));
        }

        let pushed: PushResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        tracing::debug!(id = %pushed.name, "Created post");
        Ok(pushed.name)
    }

    async fn update(&self, id: &str, record: PostRecord) -> Result<(), StoreError> {
        let response = self
            .client
            .put(self.post_url(id))
            .json(&record)
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Write(format!(
                "PUT returned {}",
                response.status()
            )));
        }

        tracing::debug!(%id, "Replaced post");
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.post_url(id))
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        // RTDB answers 200 for deletes of absent ids, which suits the
        // idempotency contract.
        if !response.status().is_success() {
            return Err(StoreError::Write(format!(
                "DELETE returned {}",
                response.status()
            )));
        }

        tracing::debug!(%id, "Deleted post");
        Ok(())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.collection_url())
            .send()
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Write(format!(
                "DELETE returned {}",
                response.status()
            )));
        }

        tracing::warn!("Deleted the entire post collection");
        Ok(())
    }
}
