//! Layout Availability Filter: which layouts can be cut from a single mat sheet.
//!
//! The mat for a layout must fit the largest sheet the cutter accepts, in either
//! orientation. Sheet-fit height always includes the nameplate allowance so that turning
//! the nameplate on later can never invalidate an already chosen layout.
//!
//! Separately, a manufactured frame may not exceed `MAX_FRAME_EDGE` on either edge.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Layout, Size};
use crate::sizing::dimensions::{Dimensions, GridContent, NAMEPLATE_ALLOWANCE};

/// Longest edge the shop can build, in inches.
pub const MAX_FRAME_EDGE: f64 = 48.0;

/// Maximum mat sheet, in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SheetLimits {
    pub max_width: f64,
    pub max_height: f64,
}

impl Default for SheetLimits {
    fn default() -> Self {
        Self {
            max_width: 32.0,
            max_height: 40.0,
        }
    }
}

/// How a mat fits on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetFit {
    Portrait,
    Landscape,
}

/// Outcome of checking a manufactured size against the build limit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSizeCheck {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn check_frame_size(frame: Dimensions, max_edge: f64) -> FrameSizeCheck {
    if frame.width <= max_edge && frame.height <= max_edge {
        return FrameSizeCheck {
            valid: true,
            error: None,
        };
    }
    FrameSizeCheck {
        valid: false,
        error: Some(format!(
            "frame size {}x{} in exceeds the maximum {max_edge}x{max_edge} in",
            frame.width, frame.height
        )),
    }
}

/// Overall mat size for sheet fitting, nameplate allowance included.
pub fn mat_sheet_size(layout: &Layout, size: &Size, mat_border: f64) -> (f64, f64) {
    let content = GridContent::measure(layout, size);
    (
        content.width + mat_border * 2.0,
        content.height + mat_border * 2.0 + NAMEPLATE_ALLOWANCE,
    )
}

/// Returns how the mat fits, preferring portrait, or `None` if it fits neither way.
pub fn sheet_fit(
    layout: &Layout,
    size: &Size,
    mat_border: f64,
    limits: &SheetLimits,
) -> Option<SheetFit> {
    let (mat_width, mat_height) = mat_sheet_size(layout, size, mat_border);

    if mat_width <= limits.max_width && mat_height <= limits.max_height {
        Some(SheetFit::Portrait)
    } else if mat_width <= limits.max_height && mat_height <= limits.max_width {
        Some(SheetFit::Landscape)
    } else {
        None
    }
}

/// Layouts whose mat fits the sheet for `size_id` at `mat_border`, in catalog order.
///
/// Fails open: an unknown size returns the whole catalog. Whether that permissiveness is
/// intended is unconfirmed; it is kept so a half-finished selection never shows an
/// empty gallery.
pub fn available_layouts_for_size<'a>(
    catalog: &'a Catalog,
    size_id: &str,
    mat_border: f64,
    limits: &SheetLimits,
) -> Vec<&'a Layout> {
    let Some(size) = catalog.size_by_id(size_id) else {
        tracing::debug!(size_id, "Unknown size; returning unfiltered layout catalog");
        return catalog.list_layouts().iter().collect();
    };

    catalog
        .list_layouts()
        .iter()
        .filter(|layout| sheet_fit(layout, size, mat_border, limits).is_some())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
