pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::preview::handlers as preview;
use crate::pricing::handlers as pricing;
use crate::sizing::handlers as sizing;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog reads
        .route("/api/v1/:family/layouts", get(sizing::handle_list_layouts))
        .route("/api/v1/:family/layouts/:id", get(sizing::handle_get_layout))
        .route("/api/v1/:family/sizes", get(sizing::handle_list_sizes))
        .route(
            "/api/v1/:family/available-layouts",
            get(sizing::handle_available_layouts),
        )
        // Calculators
        .route("/api/v1/:family/dimensions", post(sizing::handle_dimensions))
        .route("/api/v1/:family/manifest", post(sizing::handle_manifest))
        .route("/api/v1/:family/pricing", post(pricing::handle_pricing))
        .route("/api/v1/materials", get(pricing::handle_materials))
        .route("/api/v1/preview-layout", post(preview::handle_preview_layout))
        .with_state(state)
}
