//! Blog store implementations.

mod memory;

#[cfg(feature = "firebase")]
mod firebase;

pub use memory::MemoryBlogStore;

#[cfg(feature = "firebase")]
pub use firebase::{FirebaseBlogStore, FirebaseConfig};
