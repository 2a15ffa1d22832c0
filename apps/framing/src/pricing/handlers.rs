use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::catalog::{FrameStyle, GlassType, Mat};
use crate::errors::AppError;
use crate::pricing::engine::{PricingRequest, Quote, Surcharges};
use crate::sizing::handlers::parse_family;
use crate::state::AppState;

/// POST /api/v1/:family/pricing
pub async fn handle_pricing(
    State(state): State<AppState>,
    Path(family): Path<String>,
    Json(req): Json<PricingRequest>,
) -> Result<Json<Quote>, AppError> {
    let catalog = state.catalog(parse_family(&family)?);
    if !(req.mat_border >= 0.0) {
        return Err(AppError::Validation(
            "mat_border must be a non-negative number".to_string(),
        ));
    }

    let quote = state.quotes.quote(&state.pricing, catalog, &req)?;
    Ok(Json(quote))
}

#[derive(Serialize)]
pub struct MaterialsResponse {
    pub frame_styles: Vec<FrameStyle>,
    pub glass_types: Vec<GlassType>,
    pub mats: Vec<Mat>,
    pub surcharges: Surcharges,
}

/// GET /api/v1/materials
pub async fn handle_materials(State(state): State<AppState>) -> Json<MaterialsResponse> {
    let materials = state.pricing.materials();
    Json(MaterialsResponse {
        frame_styles: materials.frame_styles().to_vec(),
        glass_types: materials.glass_types().to_vec(),
        mats: materials.mats().to_vec(),
        surcharges: *state.pricing.surcharges(),
    })
}
