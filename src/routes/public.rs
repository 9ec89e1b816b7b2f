use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Public Router Module
///
/// Defines endpoints that are **unauthenticated** and accessible to any
/// client. These routes serve the client-facing website (read-only content
/// retrieval) and the credential-service gateway functions (login and
/// registration).
///
/// The write side of every entity lives in the protected module; nothing in
/// this router mutates content.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // A simple, unauthenticated endpoint used for monitoring and load
        // balancer checks. Returns "ok" immediately.
        .route("/health", get(|| async { "ok" }))
        // POST /login
        // The credential service: validates a username/password pair and
        // issues a signed, 30-day access token.
        .route("/login", post(handlers::login))
        // POST /register
        // Creates a new admin account. Password policy is enforced before any
        // write; duplicate usernames are rejected atomically.
        .route("/register", post(handlers::register))
        // --- News (read-only) ---
        .route("/news", get(handlers::get_all_news))
        .route("/news/{id}", get(handlers::get_news_details))
        // --- Events (read-only) ---
        .route("/events", get(handlers::get_all_events))
        .route("/events/{id}", get(handlers::get_event_details))
        // --- Blog (read-only) ---
        // GET /blogs?type=...&location=...&search=...
        // Lists blog posts newest-first with optional filters; search matches
        // title, summary, and tags.
        .route("/blogs", get(handlers::get_blog_posts))
        // GET /blogs/recent
        // The newest posts for the landing page.
        .route("/blogs/recent", get(handlers::get_recent_blog_posts))
        .route("/blogs/{id}", get(handlers::get_blog_post_details))
        // --- Slider (read-only) ---
        .route("/slider", get(handlers::get_slides))
        .route("/slider/{id}", get(handlers::get_slide_details))
}
