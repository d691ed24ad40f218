pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Templates API
        .route("/api/v1/templates", get(handlers::handle_list_templates))
        .route("/api/v1/templates/:id", get(handlers::handle_get_template))
        // Render API
        .route("/api/v1/render", post(handlers::handle_render))
        .route("/api/v1/render/preview", post(handlers::handle_render_preview))
        .with_state(state)
}
