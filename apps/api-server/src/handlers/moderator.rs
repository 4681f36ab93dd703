//! Moderator handlers: login plus the destructive surface.
//!
//! Every destructive route checks the moderator capability before any
//! backend call goes out; the store is never reached unauthenticated.

use std::sync::Arc;

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use quill_core::domain::{BlogPost, PostRecord};
use quill_core::ports::{PassphraseService, ROLE_MODERATOR, TokenService};
use quill_shared::dto::{AuthResponse, ModeratorLoginRequest, PostResponse, UpdatePostRequest};

use crate::config::ModeratorConfig;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Wording required to drop the whole collection. Deliberately distinct
/// from the single-delete call shape.
const DELETE_ALL_CONFIRMATION: &str = "everything";

/// POST /api/moderator/login
pub async fn login(
    moderator: web::Data<ModeratorConfig>,
    token_service: web::Data<Arc<dyn TokenService>>,
    passphrase_service: web::Data<Arc<dyn PassphraseService>>,
    body: web::Json<ModeratorLoginRequest>,
) -> AppResult<HttpResponse> {
    // Closed by default: no configured hash means no tokens, ever.
    let Some(hash) = moderator.passphrase_hash.as_deref() else {
        return Err(AppError::ServiceUnavailable(
            "Moderation is not configured on this deployment".to_string(),
        ));
    };

    let valid = passphrase_service
        .verify(&body.passphrase, hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    if !valid {
        tracing::warn!("Rejected moderator login attempt");
        return Err(AppError::Unauthorized);
    }

    let token = token_service
        .generate_token("moderator", vec![ROLE_MODERATOR.to_string()])
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        // A misconfigured negative lifetime reports zero instead of wrapping.
        expires_in: u64::try_from(token_service.expiration_seconds()).unwrap_or(0),
    }))
}

fn require_moderator(identity: &Identity) -> Result<(), AppError> {
    if identity.is_moderator() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// DELETE /api/moderator/posts/{id}
///
/// Idempotent: deleting an id that is already gone still answers 204.
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    require_moderator(&identity)?;

    let id = path.into_inner();
    state.posts.delete(&id).await?;

    tracing::info!(%id, "Moderator deleted post");
    Ok(HttpResponse::NoContent().finish())
}

#[derive(Debug, Deserialize)]
pub struct DeleteAllQuery {
    #[serde(default)]
    confirm: String,
}

/// DELETE /api/moderator/posts?confirm=everything
///
/// Irreversible. The confirmation token is required on every call.
pub async fn delete_all_posts(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<DeleteAllQuery>,
) -> AppResult<HttpResponse> {
    require_moderator(&identity)?;

    if query.confirm != DELETE_ALL_CONFIRMATION {
        return Err(AppError::BadRequest(format!(
            "Deleting every post requires confirm={}",
            DELETE_ALL_CONFIRMATION
        )));
    }

    state.posts.delete_all().await?;

    tracing::warn!("Moderator deleted the entire post collection");
    Ok(HttpResponse::NoContent().finish())
}

/// PUT /api/moderator/posts/{id}
///
/// Full replace of the authored fields. The creation timestamps survive
/// the edit; the excerpt is recomputed from the new content.
pub async fn update_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    require_moderator(&identity)?;

    let id = path.into_inner();
    let req = body.into_inner();

    // The backend has no per-id fetch; locate the post in the collection.
    let existing = state
        .posts
        .list()
        .await?
        .into_iter()
        .find(|p| p.id == id)
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

    let mut record = PostRecord::new(&req.title, &req.content, &req.author_name);
    record.created_at = existing.record.created_at;
    record.publish_date = existing.record.publish_date;
    record.category = existing.record.category;
    record.tags = existing.record.tags;
    record.read_time = existing.record.read_time;

    state.posts.update(&id, record.clone()).await?;

    tracing::info!(%id, "Moderator edited post");
    Ok(HttpResponse::Ok().json(PostResponse::from(BlogPost { id, record })))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use serde_json::json;

    use quill_core::ports::{PassphraseService, TokenService};
    use quill_infra::{Argon2PassphraseService, JwtConfig, JwtTokenService, MemoryBlogStore};

    use crate::config::ModeratorConfig;
    use crate::handlers::configure_routes;
    use crate::state::AppState;

    const PASSPHRASE: &str = "correct horse battery staple";

    struct TestCtx {
        state: AppState,
        token_service: Arc<dyn TokenService>,
        passphrase_service: Arc<dyn PassphraseService>,
        moderator: ModeratorConfig,
    }

    fn ctx() -> TestCtx {
        let passphrase_service: Arc<dyn PassphraseService> =
            Arc::new(Argon2PassphraseService::new());
        let hash = passphrase_service.hash(PASSPHRASE).unwrap();

        TestCtx {
            state: AppState::with_store(Arc::new(MemoryBlogStore::new()), "memory"),
            token_service: Arc::new(JwtTokenService::new(JwtConfig {
                secret: "test-secret".to_string(),
                expiration_hours: 1,
                issuer: "test".to_string(),
            })),
            passphrase_service,
            moderator: ModeratorConfig {
                passphrase_hash: Some(hash),
            },
        }
    }

    macro_rules! test_app {
        ($ctx:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($ctx.state.clone()))
                    .app_data(web::Data::new($ctx.token_service.clone()))
                    .app_data(web::Data::new($ctx.passphrase_service.clone()))
                    .app_data(web::Data::new($ctx.moderator.clone()))
                    .configure(configure_routes),
            )
            .await
        };
    }

    macro_rules! login_token {
        ($app:expr) => {{
            let resp = test::call_service(
                &$app,
                test::TestRequest::post()
                    .uri("/api/moderator/login")
                    .set_json(json!({ "passphrase": PASSPHRASE }))
                    .to_request(),
            )
            .await;
            assert!(resp.status().is_success());

            let body: serde_json::Value = test::read_body_json(resp).await;
            body["access_token"].as_str().unwrap().to_string()
        }};
    }

    macro_rules! create_post {
        ($app:expr, $title:expr) => {{
            let resp = test::call_service(
                &$app,
                test::TestRequest::post()
                    .uri("/api/posts")
                    .set_json(json!({ "title": $title, "content": "body", "authorName": "a" }))
                    .to_request(),
            )
            .await;
            assert_eq!(resp.status(), 201);

            let body: serde_json::Value = test::read_body_json(resp).await;
            body["id"].as_str().unwrap().to_string()
        }};
    }

    #[actix_web::test]
    async fn login_rejects_a_wrong_passphrase() {
        let ctx = ctx();
        let app = test_app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/moderator/login")
                .set_json(json!({ "passphrase": "guess" }))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn negative_token_lifetime_reports_zero_expiry() {
        let mut ctx = ctx();
        ctx.token_service = Arc::new(JwtTokenService::new(JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: -1,
            issuer: "test".to_string(),
        }));
        let app = test_app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/moderator/login")
                .set_json(json!({ "passphrase": PASSPHRASE }))
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["expires_in"], 0);
    }

    #[actix_web::test]
    async fn login_is_closed_without_a_configured_hash() {
        let mut ctx = ctx();
        ctx.moderator = ModeratorConfig {
            passphrase_hash: None,
        };
        let app = test_app!(ctx);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/moderator/login")
                .set_json(json!({ "passphrase": PASSPHRASE }))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 503);
    }

    #[actix_web::test]
    async fn delete_requires_a_token() {
        let ctx = ctx();
        let app = test_app!(ctx);
        let id = create_post!(app, "target");

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/moderator/posts/{}", id))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn deleted_posts_disappear_from_the_list() {
        let ctx = ctx();
        let app = test_app!(ctx);
        let token = login_token!(app);
        let id = create_post!(app, "target");

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/api/moderator/posts/{}", id))
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 204);

        let body: serde_json::Value = test::read_body_json(
            test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request())
                .await,
        )
        .await;
        assert_eq!(body["count"], 0);
    }

    #[actix_web::test]
    async fn delete_all_demands_the_confirmation_token() {
        let ctx = ctx();
        let app = test_app!(ctx);
        let token = login_token!(app);
        create_post!(app, "survivor");

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri("/api/moderator/posts")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 400);

        // The post is still there.
        let body: serde_json::Value = test::read_body_json(
            test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request())
                .await,
        )
        .await;
        assert_eq!(body["count"], 1);
    }

    #[actix_web::test]
    async fn confirmed_delete_all_empties_the_collection() {
        let ctx = ctx();
        let app = test_app!(ctx);
        let token = login_token!(app);
        create_post!(app, "one");
        create_post!(app, "two");

        let resp = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri("/api/moderator/posts?confirm=everything")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), 204);

        let body: serde_json::Value = test::read_body_json(
            test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request())
                .await,
        )
        .await;
        assert_eq!(body["count"], 0);
    }

    #[actix_web::test]
    async fn edits_replace_content_but_keep_the_creation_instant() {
        let ctx = ctx();
        let app = test_app!(ctx);
        let token = login_token!(app);
        let id = create_post!(app, "before");

        let original: serde_json::Value = test::read_body_json(
            test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request())
                .await,
        )
        .await;
        let original_created_at = original["posts"][0]["createdAt"].clone();

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri(&format!("/api/moderator/posts/{}", id))
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(json!({ "title": "after", "content": "new body", "authorName": "a" }))
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());

        let updated: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(updated["title"], "after");
        assert_eq!(updated["excerpt"], "new body...");
        assert_eq!(updated["createdAt"], original_created_at);
    }

    #[actix_web::test]
    async fn editing_a_missing_post_is_404() {
        let ctx = ctx();
        let app = test_app!(ctx);
        let token = login_token!(app);

        let resp = test::call_service(
            &app,
            test::TestRequest::put()
                .uri("/api/moderator/posts/missing-id")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .set_json(json!({ "title": "t", "content": "c", "authorName": "a" }))
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), 404);
    }
}
