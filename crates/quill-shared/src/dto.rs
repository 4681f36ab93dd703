//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use quill_core::domain::BlogPost;

/// Composer submission. Every field may be empty or absent; the server
/// fills the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_name: String,
}

/// Moderator edit of an existing post (full replace of the authored
/// fields; derived fields are recomputed server-side).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author_name: String,
}

/// One post as rendered by the list and moderator surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author_name: String,
    pub publish_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub category: String,
    pub tags: Vec<String>,
    pub read_time: String,
}

impl From<BlogPost> for PostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.record.title,
            excerpt: post.record.excerpt,
            content: post.record.content,
            author_name: post.record.author_name,
            publish_date: post.record.publish_date,
            created_at: post.record.created_at,
            category: post.record.category,
            tags: post.record.tags,
            read_time: post.record.read_time,
        }
    }
}

/// The full collection, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostResponse>,
    pub count: usize,
}

/// Response to a successful create: the backend-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Moderator login request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeratorLoginRequest {
    pub passphrase: String,
}

/// Response containing the moderator bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}
