use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::analytics;
use super::health;
use super::state::AppState;
use super::types::ApiError;
use super::users;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .nest("/api", api_router())
        .fallback(fallback)
        .with_state(state)
        // the dashboard frontend is served from another origin
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn api_router() -> Router<AppState> {
    Router::new()
        // static path, so it can never be captured as a user id
        .route("/analytics/regions", get(analytics::region_analytics))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/{id}/notify", post(users::notify_user))
}

/// Unknown paths still answer with the envelope
async fn fallback() -> ApiError {
    ApiError::not_found("Route not found")
}
