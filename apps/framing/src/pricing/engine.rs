//! Pricing Engine: itemized price for a multi-opening frame.
//!
//! # Components
//! - **frame**: single-opening price of the whole grid (frame + mat + glazing as the
//!   delegate computes them), taken over the grid's content size. Rabbet-sized
//!   layouts are priced over the rabbet opening with no mat.
//! - **mat**: per-opening cutting surcharge for every opening after the first
//! - **hardware**: security hanging hardware upgrade
//! - **nameplate**: engraved plaque, only offered on matted or rabbet-sized frames
//! - **slab**: deeper moulding for graded comic cases
//!
//! Glazing is already inside the delegate's price, so `glass_price` is always 0 here.
//!
//! A delegate failure never fails the quote. The frame component falls back to a fixed
//! price and the quote says so through `FramePrice::Fallback`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{Catalog, FrameStyle, Hardware, Layout, MatType, Materials, Size};
use crate::errors::CatalogError;
use crate::pricing::delegate::{FrameConfiguration, FramePricer, ServiceType};
use crate::sizing::dimensions::{GridContent, DEFAULT_MAT_BORDER, NO_MAT_BORDER};

const DELEGATE_MAT_REVEAL: f64 = 0.25;
const DELEGATE_MAT_COLOR: &str = "mat-1";
const DEFAULT_GLASS: &str = "standard";

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surcharges {
    pub per_extra_opening: f64,
    pub security_hardware: f64,
    pub nameplate: f64,
    pub slab_depth: f64,
    /// Frame price substituted when the delegate fails.
    pub fallback_frame_price: f64,
}

impl Default for Surcharges {
    fn default() -> Self {
        Self {
            per_extra_opening: 15.0,
            security_hardware: 8.95,
            nameplate: 29.0,
            slab_depth: 25.0,
            fallback_frame_price: 120.0,
        }
    }
}

/// One configuration to price. Unset ids mean "not selected yet".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRequest {
    pub frame_style_id: Option<String>,
    pub layout_id: String,
    pub size_id: String,
    pub mat_type: MatType,
    pub mat_border: f64,
    pub glass_type_id: Option<String>,
    pub hardware: Hardware,
    pub nameplate_enabled: bool,
    pub bottom_weighted: bool,
}

impl Default for PricingRequest {
    fn default() -> Self {
        Self {
            frame_style_id: None,
            layout_id: String::new(),
            size_id: String::new(),
            mat_type: MatType::Single,
            mat_border: DEFAULT_MAT_BORDER,
            glass_type_id: None,
            hardware: Hardware::Standard,
            nameplate_enabled: false,
            bottom_weighted: false,
        }
    }
}

/// Itemized price. `subtotal == total ==` the sum of every `*_price` field.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PricingBreakdown {
    pub frame_price: f64,
    pub mat_price: f64,
    pub glass_price: f64,
    pub hardware_price: f64,
    pub nameplate_price: f64,
    pub slab_price: f64,
    pub subtotal: f64,
    pub total: f64,
}

impl PricingBreakdown {
    pub fn component_sum(&self) -> f64 {
        self.frame_price
            + self.mat_price
            + self.glass_price
            + self.hardware_price
            + self.nameplate_price
            + self.slab_price
    }
}

/// Where the frame component came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FramePrice {
    /// Nothing priceable is selected yet.
    Unpriced,
    Computed { price: f64 },
    /// The delegate failed; `price` is the configured fallback.
    Fallback { price: f64, reason: String },
}

impl FramePrice {
    pub fn amount(&self) -> f64 {
        match self {
            FramePrice::Unpriced => 0.0,
            FramePrice::Computed { price } | FramePrice::Fallback { price, .. } => *price,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FramePrice::Fallback { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub breakdown: PricingBreakdown,
    pub frame_price: FramePrice,
}

impl Quote {
    pub fn unpriced() -> Self {
        Quote {
            breakdown: PricingBreakdown::default(),
            frame_price: FramePrice::Unpriced,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Engine
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct PricingEngine {
    pricer: Arc<dyn FramePricer>,
    materials: Arc<Materials>,
    surcharges: Surcharges,
}

impl PricingEngine {
    pub fn new(
        pricer: Arc<dyn FramePricer>,
        materials: Arc<Materials>,
        surcharges: Surcharges,
    ) -> Self {
        Self {
            pricer,
            materials,
            surcharges,
        }
    }

    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    pub fn surcharges(&self) -> &Surcharges {
        &self.surcharges
    }

    /// Prices a configuration.
    ///
    /// Returns an all-zero `Quote::unpriced()` while the layout, size or frame style is
    /// unselected or unresolvable. Only an unknown non-empty layout id is an error.
    pub fn quote(&self, catalog: &Catalog, request: &PricingRequest) -> Result<Quote, CatalogError> {
        if request.layout_id.is_empty() {
            return Ok(Quote::unpriced());
        }
        let layout = catalog.get_layout(&request.layout_id)?;

        let Some(size) = catalog.size_by_id(&request.size_id) else {
            return Ok(Quote::unpriced());
        };
        let Some(frame_style) = request
            .frame_style_id
            .as_deref()
            .and_then(|id| self.materials.frame_style(id))
        else {
            return Ok(Quote::unpriced());
        };

        let config = delegate_configuration(layout, size, frame_style, request);
        let frame_price = match self.pricer.price(&config) {
            Ok(delegate) => FramePrice::Computed {
                price: delegate.total(),
            },
            Err(e) => {
                warn!(
                    frame_style = frame_style.id,
                    layout = layout.id,
                    error = %e,
                    "Frame pricing failed; using fallback frame price"
                );
                FramePrice::Fallback {
                    price: self.surcharges.fallback_frame_price,
                    reason: e.to_string(),
                }
            }
        };

        let s = &self.surcharges;
        let mat_price = if request.mat_type.has_mat() && layout.is_multi_opening() {
            f64::from(layout.count - 1) * s.per_extra_opening
        } else {
            0.0
        };
        let hardware_price = match request.hardware {
            Hardware::Security => s.security_hardware,
            Hardware::Standard => 0.0,
        };
        let nameplate_offered = request.mat_type.has_mat() || layout.rabbet.is_some();
        let nameplate_price = if request.nameplate_enabled && nameplate_offered {
            s.nameplate
        } else {
            0.0
        };
        let slab_price = if size.is_slabbed() { s.slab_depth } else { 0.0 };

        let mut breakdown = PricingBreakdown {
            frame_price: frame_price.amount(),
            mat_price,
            glass_price: 0.0,
            hardware_price,
            nameplate_price,
            slab_price,
            subtotal: 0.0,
            total: 0.0,
        };
        breakdown.subtotal = breakdown.component_sum();
        breakdown.total = breakdown.subtotal;

        debug!(
            layout = layout.id,
            size = size.id,
            total = breakdown.total,
            "Priced multi-opening frame"
        );

        Ok(Quote {
            breakdown,
            frame_price,
        })
    }
}

/// The single-opening configuration the delegate prices for a whole layout.
fn delegate_configuration(
    layout: &Layout,
    size: &Size,
    frame_style: &FrameStyle,
    request: &PricingRequest,
) -> FrameConfiguration {
    let glass_type_id = request
        .glass_type_id
        .clone()
        .unwrap_or_else(|| DEFAULT_GLASS.to_string());

    if let Some(rabbet) = layout.rabbet {
        let (width, height) = rabbet.opening(size.is_slabbed());
        return FrameConfiguration {
            service_type: ServiceType::FrameOnly,
            artwork_width: width,
            artwork_height: height,
            frame_style_id: frame_style.id.to_string(),
            mat_type: MatType::None,
            mat_border_width: 0.0,
            mat_reveal_width: 0.0,
            mat_color_id: String::new(),
            glass_type_id,
            bottom_weighted: false,
        };
    }

    let content = GridContent::measure(layout, size);
    let mat_border = if request.mat_type.has_mat() {
        request.mat_border
    } else {
        NO_MAT_BORDER
    };
    FrameConfiguration {
        service_type: ServiceType::FrameOnly,
        artwork_width: content.width,
        artwork_height: content.height,
        frame_style_id: frame_style.id.to_string(),
        mat_type: request.mat_type,
        mat_border_width: mat_border,
        mat_reveal_width: DELEGATE_MAT_REVEAL,
        mat_color_id: DELEGATE_MAT_COLOR.to_string(),
        glass_type_id,
        bottom_weighted: request.bottom_weighted,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
