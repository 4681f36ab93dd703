//! Public post handlers: the list view and the composer.

use actix_web::{HttpResponse, web};

use quill_core::domain::PostRecord;
use quill_shared::dto::{CreatePostRequest, CreatedResponse, PostListResponse, PostResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
///
/// The whole collection, newest first. An empty backend is a 200 with an
/// empty list; only transport failures become errors.
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;

    let posts: Vec<PostResponse> = posts.into_iter().map(Into::into).collect();
    let count = posts.len();

    Ok(HttpResponse::Ok().json(PostListResponse { posts, count }))
}

/// POST /api/posts
///
/// Composer submission. Empty fields fall back to the documented defaults
/// and the excerpt is derived here; the store assigns the id. Callers
/// re-list to observe the new record.
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let record = PostRecord::new(&req.title, &req.content, &req.author_name);
    let id = state.posts.create(record).await?;

    tracing::info!(%id, "Published post");
    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}
