//! Route definitions
//!
//! All API routes organized by domain.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::handlers::{feed_likes, feeds, files, health, members, oauth};
use crate::state::AppState;

/// Room left for multipart boundaries and headers around the image itself
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(member_routes())
        .merge(feed_routes())
        .merge(file_routes(max_upload_bytes))
        .merge(oauth_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Member routes
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/member", post(members::signup))
        .route("/member/me", get(members::get_current_member))
        .route(
            "/member/:member_id",
            get(members::get_member)
                .patch(members::update_member)
                .delete(members::delete_member),
        )
}

/// Feed and like routes
fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/feeds", get(feeds::list_feeds))
        .route("/feed", post(feeds::create_feed))
        .route(
            "/feed/:feed_id",
            get(feeds::get_feed)
                .put(feeds::update_feed)
                .delete(feeds::delete_feed),
        )
        .route(
            "/feed/like/:feed_id",
            post(feed_likes::like_feed).delete(feed_likes::unlike_feed),
        )
}

/// File routes; uploads get their own body limit
fn file_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/file/upload-file",
            post(files::upload_file).layer(DefaultBodyLimit::max(
                max_upload_bytes + MULTIPART_OVERHEAD_BYTES,
            )),
        )
        .route("/file/view", get(files::view_file))
}

/// Google OAuth routes
fn oauth_routes() -> Router<AppState> {
    Router::new()
        .route("/oauth/google/login", get(oauth::google_login))
        .route("/oauth/google/callback", get(oauth::google_callback))
}
