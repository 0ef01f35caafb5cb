pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::classifier::handlers as categories;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Category classifier API
        .route(
            "/api/v1/categories/analyze",
            post(categories::handle_analyze),
        )
        .route("/api/v1/categories/list", get(categories::handle_list))
        .route("/api/v1/categories/search", get(categories::handle_search))
        .route(
            "/api/v1/categories/by-gender/:gender",
            get(categories::handle_by_gender),
        )
        // Posting jobs API
        .route(
            "/api/v1/jobs",
            post(jobs::handle_submit).get(jobs::handle_list),
        )
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handle_status).delete(jobs::handle_cancel),
        )
        .with_state(state)
}
