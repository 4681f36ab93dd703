//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::BlogStore;
use quill_infra::MemoryBlogStore;

#[cfg(feature = "firebase")]
use quill_infra::{FirebaseBlogStore, FirebaseConfig};

/// Shared application state. Every surface goes through the same
/// `BlogStore`, so list and moderator views observe one backend.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogStore>,
    pub backend: &'static str,
}

impl AppState {
    /// Build the application state with the appropriate store.
    pub fn new() -> Self {
        #[cfg(feature = "firebase")]
        {
            if let Some(config) = FirebaseConfig::from_env() {
                tracing::info!(
                    base_url = %config.base_url,
                    collection = %config.collection,
                    "Using Firebase Realtime Database backend"
                );
                return Self::with_store(Arc::new(FirebaseBlogStore::new(config)), "firebase");
            }
            tracing::warn!(
                "FIREBASE_URL not set. Posts are kept in memory and lost on restart."
            );
        }

        #[cfg(not(feature = "firebase"))]
        tracing::info!("Built without the firebase feature - using the in-memory store");

        Self::with_store(Arc::new(MemoryBlogStore::new()), "memory")
    }

    pub fn with_store(posts: Arc<dyn BlogStore>, backend: &'static str) -> Self {
        Self { posts, backend }
    }
}
