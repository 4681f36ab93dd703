//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the backend store adapters and the moderator
//! authentication services.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory store only, no external dependencies
//! - `firebase` - Firebase Realtime Database adapter via reqwest
//! - `auth` - JWT + Argon2 moderator authentication

pub mod store;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use store::MemoryBlogStore;

#[cfg(feature = "firebase")]
pub use store::{FirebaseBlogStore, FirebaseConfig};

#[cfg(feature = "auth")]
pub use auth::{Argon2PassphraseService, JwtConfig, JwtTokenService};
