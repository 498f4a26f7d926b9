pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/roles", get(handlers::handle_list_roles))
        .route("/api/v1/analyses", post(handlers::handle_create_analysis))
        .route(
            "/api/v1/analyses/:id",
            get(handlers::handle_get_analysis).delete(handlers::handle_delete_analysis),
        )
        .route(
            "/api/v1/analyses/:id/roles/:role/learning-plan",
            get(handlers::handle_learning_plan),
        )
        .route(
            "/api/v1/analyses/:id/roles/:role/report",
            get(handlers::handle_report),
        )
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
