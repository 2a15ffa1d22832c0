//! Dimension Calculator: physical sizes derived from a layout, an item size and the
//! mat/nameplate modifiers.
//!
//! # Three sizes
//! - **Content**: the tiled items plus the gaps between them, no mat.
//! - **Manufacturing**: content + mat borders (bottom may be weighted) + moulding face
//!   on every side + nameplate allowance. This is what gets cut. Layouts with a fixed
//!   rabbet (comics) are instead the rabbet opening + 1in per side + nameplate allowance.
//! - **Preview**: content + a fixed visual mat border (2.0in, or 0.25in with no mat) +
//!   nameplate allowance. The user's mat border is ignored here on purpose; see
//!   `effective_mat_border`.
//!
//! All sizes are in inches.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Layout, MatType, Size};
use crate::errors::CatalogError;

/// Moulding face allowance added on each side of a manufactured frame.
pub const FRAME_FACE: f64 = 1.5;
/// Moulding allowance on each side of a fixed rabbet opening.
pub const RABBET_FRAME_FACE: f64 = 1.0;
/// Extra frame height reserved for an engraved plaque.
pub const NAMEPLATE_ALLOWANCE: f64 = 1.5;
/// Visual border used when the customer chose no mat.
pub const NO_MAT_BORDER: f64 = 0.25;
/// Visual border used for every matted preview, whatever the customer entered.
pub const PREVIEW_MAT_BORDER: f64 = 2.0;
pub const DEFAULT_MAT_BORDER: f64 = 2.0;
pub const DEFAULT_MAT_REVEAL: f64 = 0.25;
/// Shown before a layout has been chosen.
pub const DEFAULT_FRAME: Dimensions = Dimensions {
    width: 16.0,
    height: 20.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

/// Measurements of a tiled grid before any mat is added.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridContent {
    pub item_width: f64,
    pub item_height: f64,
    pub h_spacing: f64,
    pub v_spacing: f64,
    pub width: f64,
    pub height: f64,
}

impl GridContent {
    pub fn measure(layout: &Layout, size: &Size) -> Self {
        let (h_spacing, v_spacing) = layout.spacing.gaps(size.width, size.height);
        let columns = f64::from(layout.columns);
        let rows = f64::from(layout.rows);

        GridContent {
            item_width: size.width,
            item_height: size.height,
            h_spacing,
            v_spacing,
            width: size.width * columns + h_spacing * (columns - 1.0),
            height: size.height * rows + v_spacing * (rows - 1.0),
        }
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }
}

/// Modifiers for the manufacturing size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSizeOptions {
    pub mat_border: f64,
    pub nameplate_enabled: bool,
    /// Added to the bottom border only.
    pub bottom_weighted_extra: f64,
    pub frame_face: f64,
}

impl Default for FrameSizeOptions {
    fn default() -> Self {
        Self {
            mat_border: DEFAULT_MAT_BORDER,
            nameplate_enabled: false,
            bottom_weighted_extra: 0.0,
            frame_face: FRAME_FACE,
        }
    }
}

/// Mat border used by the preview and manifest paths.
///
/// Fixed per mat type rather than taken from the customer's entry. Whether that is a
/// deliberate visual simplification is unconfirmed, so the behavior is kept as is.
pub fn effective_mat_border(mat_type: MatType) -> f64 {
    if mat_type.has_mat() {
        PREVIEW_MAT_BORDER
    } else {
        NO_MAT_BORDER
    }
}

fn nameplate_extra(enabled: bool) -> f64 {
    if enabled {
        NAMEPLATE_ALLOWANCE
    } else {
        0.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Resolved calculators
// ────────────────────────────────────────────────────────────────────────────

/// Manufactured frame size.
///
/// A layout with a rabbet ignores the mat border, bottom weighting and frame face.
pub fn frame_size_for(layout: &Layout, size: &Size, options: &FrameSizeOptions) -> Dimensions {
    if let Some(rabbet) = layout.rabbet {
        let (width, height) = rabbet.opening(size.is_slabbed());
        return Dimensions {
            width: width + 2.0 * RABBET_FRAME_FACE,
            height: height
                + 2.0 * RABBET_FRAME_FACE
                + nameplate_extra(options.nameplate_enabled),
        };
    }

    let content = GridContent::measure(layout, size);
    let mat_bottom = options.mat_border + options.bottom_weighted_extra;

    let interior_width = content.width + options.mat_border * 2.0;
    let interior_height = content.height + options.mat_border + mat_bottom;

    Dimensions {
        width: interior_width + 2.0 * options.frame_face,
        height: interior_height
            + 2.0 * options.frame_face
            + nameplate_extra(options.nameplate_enabled),
    }
}

pub fn preview_size_for(
    layout: &Layout,
    size: &Size,
    mat_type: MatType,
    nameplate_enabled: bool,
) -> Dimensions {
    let content = GridContent::measure(layout, size);
    let border = effective_mat_border(mat_type);

    Dimensions {
        width: content.width + border * 2.0,
        height: content.height + border * 2.0 + nameplate_extra(nameplate_enabled),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog-facing calculators
// ────────────────────────────────────────────────────────────────────────────

/// Content size for a layout/size pair.
///
/// `Ok(None)` means no preview is available yet: either no layout was chosen or the
/// size id is unknown. An unknown non-empty layout id is an error.
pub fn interior_content_dimensions(
    catalog: &Catalog,
    layout_id: &str,
    size_id: &str,
) -> Result<Option<Dimensions>, CatalogError> {
    if layout_id.is_empty() {
        return Ok(None);
    }
    let layout = catalog.get_layout(layout_id)?;
    Ok(catalog
        .size_by_id(size_id)
        .map(|size| GridContent::measure(layout, size).dimensions()))
}

/// Outer size of the frame as manufactured.
///
/// Falls back to `DEFAULT_FRAME` while the layout or size is still unselected.
pub fn manufacturing_frame_size(
    catalog: &Catalog,
    layout_id: &str,
    size_id: &str,
    options: &FrameSizeOptions,
) -> Result<Dimensions, CatalogError> {
    if layout_id.is_empty() {
        return Ok(DEFAULT_FRAME);
    }
    let layout = catalog.get_layout(layout_id)?;
    Ok(catalog
        .size_by_id(size_id)
        .map_or(DEFAULT_FRAME, |size| frame_size_for(layout, size, options)))
}

/// Size used to lay out the on-screen preview.
pub fn preview_dimensions(
    catalog: &Catalog,
    layout_id: &str,
    size_id: &str,
    mat_type: MatType,
    nameplate_enabled: bool,
) -> Result<Dimensions, CatalogError> {
    if layout_id.is_empty() {
        return Ok(DEFAULT_FRAME);
    }
    let layout = catalog.get_layout(layout_id)?;
    Ok(catalog.size_by_id(size_id).map_or(DEFAULT_FRAME, |size| {
        preview_size_for(layout, size, mat_type, nameplate_enabled)
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductFamily;

    fn make_catalog() -> Catalog {
        Catalog::for_family(ProductFamily::Magazine).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    // ── content ─────────────────────────────────────────────────────────────

    #[test]
    fn test_single_layout_content_is_item_size() {
        let dims = interior_content_dimensions(&make_catalog(), "single", "standard-8x105")
            .unwrap()
            .unwrap();
        assert_close(dims.width, 8.0);
        assert_close(dims.height, 10.5);
    }

    #[test]
    fn test_quad_layout_content_includes_spacing() {
        let catalog = make_catalog();
        let layout = catalog.get_layout("4-quad").unwrap();
        let size = catalog.size_by_id("standard-8x105").unwrap();
        let content = GridContent::measure(layout, size);
        assert_close(content.h_spacing, 1.2);
        assert_close(content.v_spacing, 1.575);
        assert_close(content.width, 17.2);
        assert_close(content.height, 22.575);
    }

    #[test]
    fn test_content_unknown_size_is_none() {
        let result = interior_content_dimensions(&make_catalog(), "4-quad", "nope").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_content_empty_layout_is_none() {
        let result = interior_content_dimensions(&make_catalog(), "", "standard-8x105").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_content_unknown_layout_is_error() {
        let result = interior_content_dimensions(&make_catalog(), "3x3x3", "standard-8x105");
        assert_eq!(result, Err(CatalogError::UnknownLayout("3x3x3".to_string())));
    }

    // ── manufacturing ───────────────────────────────────────────────────────

    #[test]
    fn test_manufacturing_size_adds_mat_face_and_nameplate() {
        let options = FrameSizeOptions {
            mat_border: 2.0,
            nameplate_enabled: true,
            bottom_weighted_extra: 0.5,
            frame_face: FRAME_FACE,
        };
        let dims =
            manufacturing_frame_size(&make_catalog(), "single", "standard-8x105", &options)
                .unwrap();
        // 8 + 2*2 + 2*1.5
        assert_close(dims.width, 15.0);
        // 10.5 + 2 + 2.5 + 2*1.5 + 1.5
        assert_close(dims.height, 19.5);
    }

    #[test]
    fn test_manufacturing_size_defaults_without_layout_or_size() {
        let catalog = make_catalog();
        let options = FrameSizeOptions::default();
        assert_eq!(
            manufacturing_frame_size(&catalog, "", "standard-8x105", &options).unwrap(),
            DEFAULT_FRAME
        );
        assert_eq!(
            manufacturing_frame_size(&catalog, "single", "missing", &options).unwrap(),
            DEFAULT_FRAME
        );
    }

    #[test]
    fn test_manufacturing_size_is_monotonic_in_every_modifier() {
        let catalog = make_catalog();
        let borders = [0.0, 0.5, 1.0, 2.0, 3.5];
        let extras = [0.0, 0.25, 0.5, 1.0];

        for layout in catalog.list_layouts() {
            for size in catalog.sizes() {
                for nameplate in [false, true] {
                    for pair in borders.windows(2) {
                        let lo = frame_size_for(
                            layout,
                            size,
                            &FrameSizeOptions {
                                mat_border: pair[0],
                                nameplate_enabled: nameplate,
                                ..FrameSizeOptions::default()
                            },
                        );
                        let hi = frame_size_for(
                            layout,
                            size,
                            &FrameSizeOptions {
                                mat_border: pair[1],
                                nameplate_enabled: nameplate,
                                ..FrameSizeOptions::default()
                            },
                        );
                        assert!(hi.width >= lo.width && hi.height >= lo.height);
                    }
                    for pair in extras.windows(2) {
                        let lo = frame_size_for(
                            layout,
                            size,
                            &FrameSizeOptions {
                                bottom_weighted_extra: pair[0],
                                nameplate_enabled: nameplate,
                                ..FrameSizeOptions::default()
                            },
                        );
                        let hi = frame_size_for(
                            layout,
                            size,
                            &FrameSizeOptions {
                                bottom_weighted_extra: pair[1],
                                nameplate_enabled: nameplate,
                                ..FrameSizeOptions::default()
                            },
                        );
                        assert_close(hi.width, lo.width);
                        assert!(hi.height >= lo.height);
                    }
                }

                let without = frame_size_for(layout, size, &FrameSizeOptions::default());
                let with = frame_size_for(
                    layout,
                    size,
                    &FrameSizeOptions {
                        nameplate_enabled: true,
                        ..FrameSizeOptions::default()
                    },
                );
                assert_close(with.width, without.width);
                assert_close(with.height - without.height, NAMEPLATE_ALLOWANCE);
            }
        }
    }

    // ── preview ─────────────────────────────────────────────────────────────

    #[test]
    fn test_preview_uses_fixed_border_per_mat_type() {
        let catalog = make_catalog();
        let matted =
            preview_dimensions(&catalog, "single", "standard-8x105", MatType::Double, false)
                .unwrap();
        assert_close(matted.width, 12.0);
        assert_close(matted.height, 14.5);

        let bare =
            preview_dimensions(&catalog, "single", "standard-8x105", MatType::None, true).unwrap();
        assert_close(bare.width, 8.5);
        assert_close(bare.height, 11.0 + NAMEPLATE_ALLOWANCE);
    }

    #[test]
    fn test_preview_default_frame_before_selection() {
        let dims = preview_dimensions(&make_catalog(), "", "", MatType::Single, false).unwrap();
        assert_eq!(dims, DEFAULT_FRAME);
    }

    // ── rabbet-sized comics ─────────────────────────────────────────────────

    fn make_comics() -> Catalog {
        Catalog::for_family(ProductFamily::Comic).unwrap()
    }

    #[test]
    fn test_comic_spacing_follows_item_width_on_both_axes() {
        let dims = interior_content_dimensions(&make_comics(), "4-vertical", "modern-age")
            .unwrap()
            .unwrap();
        // 6.625 wide; 10.25 * 4 + 3 * (6.625 * 0.15)
        assert_close(dims.width, 6.625);
        assert_close(dims.height, 43.98125);
    }

    #[test]
    fn test_comic_manufacturing_uses_rabbet_table() {
        let catalog = make_comics();
        let options = FrameSizeOptions {
            mat_border: 3.0,
            bottom_weighted_extra: 1.0,
            ..FrameSizeOptions::default()
        };
        let raw = manufacturing_frame_size(&catalog, "4-vertical", "modern-age", &options)
            .unwrap();
        assert_close(raw.width, 13.25);
        assert_close(raw.height, 49.0);

        let graded = manufacturing_frame_size(
            &catalog,
            "single",
            "slabbed-cgc",
            &FrameSizeOptions {
                nameplate_enabled: true,
                ..FrameSizeOptions::default()
            },
        )
        .unwrap();
        assert_close(graded.width, 14.0);
        assert_close(graded.height, 19.0 + NAMEPLATE_ALLOWANCE);
    }

    #[test]
    fn test_newspaper_double_has_half_inch_gutter() {
        let catalog = Catalog::for_family(ProductFamily::Newspaper).unwrap();
        let dims = interior_content_dimensions(&catalog, "double-newspaper", "newspaper-11x22")
            .unwrap()
            .unwrap();
        assert_close(dims.width, 22.5);
        assert_close(dims.height, 22.0);
    }

    #[test]
    fn test_frame_face_override_changes_width_and_height() {
        let catalog = make_catalog();
        let narrow = FrameSizeOptions {
            frame_face: 1.25,
            ..FrameSizeOptions::default()
        };
        let dims =
            manufacturing_frame_size(&catalog, "single", "standard-8x105", &narrow).unwrap();
        // 8 + 2*2 + 2*1.25
        assert_close(dims.width, 14.5);
        assert_close(dims.height, 17.0);
    }

    #[test]
    fn test_calculations_are_idempotent() {
        let catalog = make_catalog();
        let options = FrameSizeOptions::default();
        let a = manufacturing_frame_size(&catalog, "9-grid", "large-10x12", &options);
        let b = manufacturing_frame_size(&catalog, "9-grid", "large-10x12", &options);
        assert_eq!(a, b);
    }
}
