//! Single-opening frame pricing: the seam to the generic frame price function.
//!
//! `FramePricer` is what the multi-opening engine delegates the base frame price to.
//! `PerimeterFramePricer` is the built-in implementation: moulding by the running inch,
//! glazing by area, mat board by perimeter.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::{MatType, Materials};
use crate::errors::PricingError;

/// Extra frame height when bottom-weighted matting is requested.
const BOTTOM_WEIGHTED_EXTRA: f64 = 0.5;
/// Designer markup over raw acrylic cost.
const GLAZING_MARKUP: f64 = 8.0;
const STANDARD_ACRYLIC_PER_SQ_IN: f64 = 0.00324;
const NON_GLARE_ACRYLIC_PER_SQ_IN: f64 = 0.00449;
const MAT_PRICE_PER_INCH: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    FrameOnly,
    PrintAndFrame,
}

/// Input to the single-opening pricer. The multi-opening engine synthesizes one of
/// these with the grid's content size as the artwork size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameConfiguration {
    pub service_type: ServiceType,
    pub artwork_width: f64,
    pub artwork_height: f64,
    pub frame_style_id: String,
    pub mat_type: MatType,
    pub mat_border_width: f64,
    pub mat_reveal_width: f64,
    pub mat_color_id: String,
    pub glass_type_id: String,
    pub bottom_weighted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DelegateBreakdown {
    pub frame_price: f64,
    pub mat_price: f64,
    pub glass_price: f64,
}

impl DelegateBreakdown {
    pub fn total(&self) -> f64 {
        self.frame_price + self.mat_price + self.glass_price
    }
}

/// Prices a single-opening frame. Implementations must be deterministic: the same
/// configuration always yields the same breakdown.
pub trait FramePricer: Send + Sync {
    fn price(&self, config: &FrameConfiguration) -> Result<DelegateBreakdown, PricingError>;
}

/// Legacy perimeter pricing over the material tables.
#[derive(Debug, Clone)]
pub struct PerimeterFramePricer {
    materials: Arc<Materials>,
}

impl PerimeterFramePricer {
    pub fn new(materials: Arc<Materials>) -> Self {
        Self { materials }
    }
}

impl FramePricer for PerimeterFramePricer {
    fn price(&self, config: &FrameConfiguration) -> Result<DelegateBreakdown, PricingError> {
        let frame_style = self
            .materials
            .frame_style(&config.frame_style_id)
            .ok_or_else(|| PricingError::UnknownFrameStyle(config.frame_style_id.clone()))?;
        let glass = self
            .materials
            .glass_type(&config.glass_type_id)
            .ok_or_else(|| PricingError::UnknownGlassType(config.glass_type_id.clone()))?;
        if config.mat_type.has_mat() && self.materials.mat(&config.mat_color_id).is_none() {
            return Err(PricingError::UnknownMatColor(config.mat_color_id.clone()));
        }
        if !(config.artwork_width > 0.0 && config.artwork_height > 0.0) {
            return Err(PricingError::InvalidDimensions {
                width: config.artwork_width,
                height: config.artwork_height,
            });
        }

        let mat_border = if config.mat_type.has_mat() {
            config.mat_border_width
        } else {
            0.0
        };
        let bottom_extra = if config.bottom_weighted {
            BOTTOM_WEIGHTED_EXTRA
        } else {
            0.0
        };

        let frame_width = config.artwork_width + mat_border * 2.0;
        let frame_height = config.artwork_height + mat_border * 2.0 + bottom_extra;
        let perimeter = (frame_width + frame_height) * 2.0;
        let area = frame_width * frame_height;

        let glazing_rate = if glass.is_non_glare() {
            NON_GLARE_ACRYLIC_PER_SQ_IN
        } else {
            STANDARD_ACRYLIC_PER_SQ_IN
        };
        let mat_multiplier = match config.mat_type {
            MatType::None => 0.0,
            MatType::Single => 1.0,
            MatType::Double => 1.5,
        };

        Ok(DelegateBreakdown {
            frame_price: perimeter * frame_style.price_per_inch,
            mat_price: perimeter * MAT_PRICE_PER_INCH * mat_multiplier,
            glass_price: area * glazing_rate * GLAZING_MARKUP,
        })
    }
}
