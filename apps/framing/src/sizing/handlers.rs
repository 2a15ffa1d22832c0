use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{Layout, MatType, ProductFamily, Size, SizeCategory};
use crate::errors::AppError;
use crate::sizing::availability::{
    available_layouts_for_size, check_frame_size, FrameSizeCheck, MAX_FRAME_EDGE,
};
use crate::sizing::dimensions::{
    interior_content_dimensions, manufacturing_frame_size, preview_dimensions, Dimensions,
    FrameSizeOptions, DEFAULT_MAT_BORDER,
};
use crate::sizing::manifest::{build_manifest, percent_openings, Manifest, ManifestOptions, PercentOpening};
use crate::state::AppState;

/// Maps the `:family` path segment; an unknown family is a 404 like an unknown route.
pub fn parse_family(segment: &str) -> Result<ProductFamily, AppError> {
    segment.parse().map_err(AppError::NotFound)
}

fn require_non_negative(field: &str, value: f64) -> Result<(), AppError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{field} must be a non-negative number"
        )))
    }
}

fn default_mat_border() -> f64 {
    DEFAULT_MAT_BORDER
}

// ── catalog reads ───────────────────────────────────────────────────────────

/// GET /api/v1/:family/layouts
pub async fn handle_list_layouts(
    State(state): State<AppState>,
    Path(family): Path<String>,
) -> Result<Json<Vec<Layout>>, AppError> {
    let catalog = state.catalog(parse_family(&family)?);
    Ok(Json(catalog.list_layouts().to_vec()))
}

/// GET /api/v1/:family/layouts/:id
pub async fn handle_get_layout(
    State(state): State<AppState>,
    Path((family, id)): Path<(String, String)>,
) -> Result<Json<Layout>, AppError> {
    let catalog = state.catalog(parse_family(&family)?);
    Ok(Json(catalog.get_layout(&id)?.clone()))
}

#[derive(Deserialize)]
pub struct SizesQuery {
    pub category: Option<SizeCategory>,
}

/// GET /api/v1/:family/sizes
pub async fn handle_list_sizes(
    State(state): State<AppState>,
    Path(family): Path<String>,
    Query(params): Query<SizesQuery>,
) -> Result<Json<Vec<Size>>, AppError> {
    let catalog = state.catalog(parse_family(&family)?);
    let sizes: Vec<Size> = match params.category {
        Some(category) => catalog
            .sizes_by_category(category)
            .into_iter()
            .cloned()
            .collect(),
        None => catalog.sizes().to_vec(),
    };
    Ok(Json(sizes))
}

// ── availability ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    #[serde(default)]
    pub size_id: String,
    #[serde(default = "default_mat_border")]
    pub mat_border: f64,
}

/// A layout with its gallery thumbnail openings for the requested size.
#[derive(Serialize)]
pub struct LayoutThumbnail {
    #[serde(flatten)]
    pub layout: Layout,
    pub openings: Vec<PercentOpening>,
}

#[derive(Serialize)]
pub struct AvailableLayoutsResponse {
    pub size_id: String,
    pub mat_border: f64,
    pub layouts: Vec<LayoutThumbnail>,
}

/// GET /api/v1/:family/available-layouts
pub async fn handle_available_layouts(
    State(state): State<AppState>,
    Path(family): Path<String>,
    Query(params): Query<AvailabilityQuery>,
) -> Result<Json<AvailableLayoutsResponse>, AppError> {
    let catalog = state.catalog(parse_family(&family)?);
    require_non_negative("mat_border", params.mat_border)?;

    let size = catalog.size_by_id(&params.size_id);
    let layouts = available_layouts_for_size(
        catalog,
        &params.size_id,
        params.mat_border,
        state.sheet_limits(),
    )
    .into_iter()
    .map(|layout| LayoutThumbnail {
        layout: layout.clone(),
        openings: size
            .map(|s| percent_openings(layout, s, params.mat_border))
            .unwrap_or_default(),
    })
    .collect();

    Ok(Json(AvailableLayoutsResponse {
        size_id: params.size_id,
        mat_border: params.mat_border,
        layouts,
    }))
}

// ── dimensions ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(default)]
pub struct DimensionsRequest {
    pub layout_id: String,
    pub size_id: String,
    pub mat_type: MatType,
    pub mat_border: f64,
    pub nameplate_enabled: bool,
    pub bottom_weighted_extra: f64,
    /// Moulding whose face width replaces the default frame face.
    pub frame_style_id: Option<String>,
}

impl Default for DimensionsRequest {
    fn default() -> Self {
        Self {
            layout_id: String::new(),
            size_id: String::new(),
            mat_type: MatType::Single,
            mat_border: DEFAULT_MAT_BORDER,
            nameplate_enabled: false,
            bottom_weighted_extra: 0.0,
            frame_style_id: None,
        }
    }
}

#[derive(Serialize)]
pub struct DimensionsResponse {
    /// `None` while no preview is available.
    pub content: Option<Dimensions>,
    pub manufacturing: Dimensions,
    pub preview: Dimensions,
    pub size_check: FrameSizeCheck,
}

/// POST /api/v1/:family/dimensions
pub async fn handle_dimensions(
    State(state): State<AppState>,
    Path(family): Path<String>,
    Json(req): Json<DimensionsRequest>,
) -> Result<Json<DimensionsResponse>, AppError> {
    let catalog = state.catalog(parse_family(&family)?);
    require_non_negative("mat_border", req.mat_border)?;
    require_non_negative("bottom_weighted_extra", req.bottom_weighted_extra)?;

    let mut options = FrameSizeOptions {
        mat_border: req.mat_border,
        nameplate_enabled: req.nameplate_enabled,
        bottom_weighted_extra: req.bottom_weighted_extra,
        ..FrameSizeOptions::default()
    };
    if let Some(id) = req.frame_style_id.as_deref() {
        let style = state
            .pricing
            .materials()
            .frame_style(id)
            .ok_or_else(|| AppError::NotFound(format!("unknown frame style '{id}'")))?;
        options.frame_face = style.moulding_width;
    }

    let manufacturing =
        manufacturing_frame_size(catalog, &req.layout_id, &req.size_id, &options)?;
    Ok(Json(DimensionsResponse {
        content: interior_content_dimensions(catalog, &req.layout_id, &req.size_id)?,
        manufacturing,
        size_check: check_frame_size(manufacturing, MAX_FRAME_EDGE),
        preview: preview_dimensions(
            catalog,
            &req.layout_id,
            &req.size_id,
            req.mat_type,
            req.nameplate_enabled,
        )?,
    }))
}

// ── manifest ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ManifestRequest {
    #[serde(default)]
    pub layout_id: String,
    #[serde(default)]
    pub size_id: String,
    #[serde(flatten)]
    pub options: ManifestOptions,
}

#[derive(Serialize)]
pub struct ManifestResponse {
    #[serde(flatten)]
    pub manifest: Manifest,
    pub frame_width_px: f64,
    pub frame_height_px: f64,
}

/// POST /api/v1/:family/manifest
pub async fn handle_manifest(
    State(state): State<AppState>,
    Path(family): Path<String>,
    Json(req): Json<ManifestRequest>,
) -> Result<Json<ManifestResponse>, AppError> {
    let catalog = state.catalog(parse_family(&family)?);
    let opts = &req.options;
    require_non_negative("mat_reveal", opts.mat_reveal)?;
    require_non_negative("bottom_weighted_extra", opts.bottom_weighted_extra)?;
    if !(opts.pixels_per_inch > 0.0) {
        return Err(AppError::Validation(
            "pixels_per_inch must be positive".to_string(),
        ));
    }

    let manifest = build_manifest(catalog, &req.layout_id, &req.size_id, opts)?;
    let (frame_width_px, frame_height_px) = manifest.frame_px(opts.pixels_per_inch);
    tracing::debug!(
        layout = %req.layout_id,
        size = %req.size_id,
        openings = manifest.openings.len(),
        "Built opening manifest"
    );

    Ok(Json(ManifestResponse {
        manifest,
        frame_width_px,
        frame_height_px,
    }))
}
