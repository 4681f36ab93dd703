//! HTTP handlers and route configuration.
//!
//! One route group per surface: the public list/composer routes and the
//! token-gated moderator routes.

mod health;
mod moderator;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts", web::post().to(posts::create_post))
            // Moderator routes
            .service(
                web::scope("/moderator")
                    .route("/login", web::post().to(moderator::login))
                    .route("/posts", web::delete().to(moderator::delete_all_posts))
                    .route("/posts/{id}", web::delete().to(moderator::delete_post))
                    .route("/posts/{id}", web::put().to(moderator::update_post)),
            ),
    );
}
