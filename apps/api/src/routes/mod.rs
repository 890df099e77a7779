pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::candidates::handlers as candidates;
use crate::hr::handlers as hr;
use crate::insights::handlers as insights;
use crate::matching::handlers as matching;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Candidate records
        .route(
            "/api/candidates",
            post(candidates::handle_create).get(candidates::handle_list),
        )
        .route(
            "/api/candidates/:id",
            get(candidates::handle_get).put(candidates::handle_update),
        )
        .route(
            "/api/candidates/:id/rights",
            patch(candidates::handle_right_swipe),
        )
        .route(
            "/api/candidates/:id/lefts",
            patch(candidates::handle_left_swipe),
        )
        .route(
            "/api/candidates/:id/reviews",
            post(candidates::handle_add_review),
        )
        // HR accounts
        .route("/api/hr", post(hr::handle_create_hr).get(hr::handle_find_hr))
        // AI: filtering and dashboard insights
        .route("/evaluate", post(matching::handle_evaluate))
        .route("/summariseProfile", post(insights::handle_summarise))
        .route("/suggestProfile", post(insights::handle_suggest))
        .with_state(state)
}
