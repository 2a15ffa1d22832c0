use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors raised while constructing or querying the layout/size/material catalogs.
///
/// `LayoutRequired` and `UnknownLayout` are the only errors the calculators surface
/// at request time; the rest are caught when a catalog is built at startup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("layout required: select a layout first")]
    LayoutRequired,

    #[error("unknown layout: {0}")]
    UnknownLayout(String),

    #[error("invalid layout '{id}': {reason}")]
    InvalidLayout { id: String, reason: String },

    #[error("invalid size '{id}': {reason}")]
    InvalidSize { id: String, reason: String },

    #[error("invalid mat color: {0}")]
    InvalidColor(String),

    #[error("duplicate catalog id: {0}")]
    DuplicateId(String),
}

/// Failures of the single-opening frame pricing delegate.
///
/// The pricing engine never propagates these; it records them as the reason of a
/// `FramePrice::Fallback`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("frame style not found: {0}")]
    UnknownFrameStyle(String),

    #[error("glass type not found: {0}")]
    UnknownGlassType(String),

    #[error("mat color not found: {0}")]
    UnknownMatColor(String),

    #[error("invalid artwork dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownLayout(_) => AppError::NotFound(err.to_string()),
            CatalogError::LayoutRequired => AppError::Validation(err.to_string()),
            other => AppError::Internal(anyhow::Error::new(other)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
