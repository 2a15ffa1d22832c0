use axum::Json;

use crate::errors::AppError;
use crate::preview::{compute_preview_layout, PreviewInput, PreviewLayout};

fn validate(input: &PreviewInput) -> Result<(), AppError> {
    if !(input.container_width_px > 0.0 && input.container_height_px > 0.0) {
        return Err(AppError::Validation(
            "container size must be positive".to_string(),
        ));
    }
    let (top, right, bottom, left) = input.borders();
    let lengths = [
        ("mat_border_top", top),
        ("mat_border_right", right),
        ("mat_border_bottom", bottom),
        ("mat_border_left", left),
        ("mat_reveal", input.mat_reveal),
        ("frame_face", input.frame_face),
        ("padding_px", input.padding_px),
    ];
    if let Some((field, _)) = lengths.iter().find(|(_, v)| !(*v >= 0.0)) {
        return Err(AppError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

/// POST /api/v1/preview-layout
pub async fn handle_preview_layout(
    Json(input): Json<PreviewInput>,
) -> Result<Json<PreviewLayout>, AppError> {
    validate(&input)?;
    Ok(Json(compute_preview_layout(&input)))
}
