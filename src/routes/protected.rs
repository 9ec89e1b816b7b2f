use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{delete, get, post, put},
};

/// Protected Router Module
///
/// Defines the routes reachable only through the token verification gate.
/// This is the admin-dashboard surface: every create/update/delete operation
/// on the publishable entities, the blog statistics, and the profile lookup.
///
/// Access Control Strategy:
/// The entire router is wrapped by the gate middleware in `create_router`,
/// which runs the `AuthUser` extractor before any handler executes. A request
/// with no bearer token is rejected with 401, one with a malformed or expired
/// token with 403, and the handler never runs. Handlers that need the
/// caller's identity (the profile lookup) extract `AuthUser` themselves; the
/// CRUD handlers only need the gate's pass/fail decision.
pub fn protected_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // GET /profile
        // Retrieves the authenticated admin's account summary, resolved from
        // the token's subject claim. The stored secret is never returned.
        .route("/profile", get(handlers::get_profile))
        // --- News (write) ---
        .route("/news", post(handlers::create_news))
        .route(
            "/news/{id}",
            put(handlers::update_news).delete(handlers::delete_news),
        )
        // --- Events (write) ---
        .route("/events", post(handlers::create_event))
        .route(
            "/events/{id}",
            put(handlers::update_event).delete(handlers::delete_event),
        )
        // --- Blog (write + dashboard stats) ---
        .route("/blogs", post(handlers::create_blog_post))
        // GET /blogs/stats
        // Aggregated counters for the dashboard; gated because it exposes the
        // full corpus including anything the site does not surface yet.
        .route("/blogs/stats", get(handlers::get_blog_stats))
        .route(
            "/blogs/{id}",
            put(handlers::update_blog_post).delete(handlers::delete_blog_post),
        )
        // --- Slider (write) ---
        .route("/slider", post(handlers::create_slide))
        .route(
            "/slider/{id}",
            delete(handlers::delete_slide).put(handlers::update_slide),
        )
}
