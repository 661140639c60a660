pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Recommendation API
        .route(
            "/api/v1/recommendations",
            get(handlers::handle_get_recommendations),
        )
        .route(
            "/api/v1/recommendations/rank",
            post(handlers::handle_rank),
        )
        .with_state(state)
}
