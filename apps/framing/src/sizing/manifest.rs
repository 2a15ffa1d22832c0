//! Opening geometry: tiles the item openings across the mat and emits each opening as
//! both device pixels and percentages of the frame.
//!
//! Openings are emitted in row-major order. Their top-left corner sits one effective mat
//! border in from the frame's top-left; the bottom border (plus any bottom weighting and
//! nameplate allowance) only grows the frame, so openings never move when it changes.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Layout, MatType, Size};
use crate::errors::CatalogError;
use crate::sizing::dimensions::{
    effective_mat_border, GridContent, DEFAULT_FRAME, DEFAULT_MAT_REVEAL, NAMEPLATE_ALLOWANCE,
};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// One opening, in pixels (`x`, `y`, `width`, `height`) and in percent of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Opening {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub x_percent: f64,
    pub y_percent: f64,
    pub width_percent: f64,
    pub height_percent: f64,
}

impl Opening {
    /// True when the interiors of the two pixel rectangles overlap. Shared edges do not
    /// count.
    pub fn intersects(&self, other: &Opening) -> bool {
        const EPS: f64 = 1e-9;
        self.x + EPS < other.x + other.width
            && other.x + EPS < self.x + self.width
            && self.y + EPS < other.y + other.height
            && other.y + EPS < self.y + self.height
    }
}

/// Percent-only opening used by layout gallery thumbnails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentOpening {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// The geometric description of one configuration. Frame and border fields are inches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub openings: Vec<Opening>,
    pub frame_width: f64,
    pub frame_height: f64,
    pub mat_border: f64,
    pub mat_border_bottom: f64,
    pub mat_reveal: f64,
}

impl Manifest {
    /// The placeholder shown while nothing resolvable is selected.
    pub fn placeholder(mat_type: MatType) -> Self {
        let border = effective_mat_border(mat_type);
        Manifest {
            openings: Vec::new(),
            frame_width: DEFAULT_FRAME.width,
            frame_height: DEFAULT_FRAME.height,
            mat_border: border,
            mat_border_bottom: border,
            mat_reveal: DEFAULT_MAT_REVEAL,
        }
    }

    /// Frame size in pixels at `pixels_per_inch`.
    pub fn frame_px(&self, pixels_per_inch: f64) -> (f64, f64) {
        (
            self.frame_width * pixels_per_inch,
            self.frame_height * pixels_per_inch,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManifestOptions {
    pub mat_reveal: f64,
    pub pixels_per_inch: f64,
    pub nameplate_enabled: bool,
    pub bottom_weighted_extra: f64,
    pub mat_type: MatType,
}

impl ManifestOptions {
    /// `pixels_per_inch`, or 1.0 when it is not a positive number.
    pub fn effective_ppi(&self) -> f64 {
        if self.pixels_per_inch > 0.0 {
            self.pixels_per_inch
        } else {
            1.0
        }
    }
}

impl Default for ManifestOptions {
    fn default() -> Self {
        Self {
            mat_reveal: DEFAULT_MAT_REVEAL,
            pixels_per_inch: 1.0,
            nameplate_enabled: false,
            bottom_weighted_extra: 0.0,
            mat_type: MatType::Single,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Builders
// ────────────────────────────────────────────────────────────────────────────

/// Builds the manifest for a resolved layout and size.
///
/// A zero, negative or NaN `pixels_per_inch` is rendered at 1 px/in.
pub fn manifest_for(layout: &Layout, size: &Size, options: &ManifestOptions) -> Manifest {
    let border = effective_mat_border(options.mat_type);
    let content = GridContent::measure(layout, size);
    let ppi = options.effective_ppi();

    let mat_border_bottom = border + options.bottom_weighted_extra;
    let frame_width = content.width + border * 2.0;
    let mut frame_height = content.height + border + mat_border_bottom;
    if options.nameplate_enabled {
        frame_height += NAMEPLATE_ALLOWANCE;
    }

    let frame_width_px = frame_width * ppi;
    let frame_height_px = frame_height * ppi;
    let width = content.item_width * ppi;
    let height = content.item_height * ppi;

    let mut openings = Vec::with_capacity(layout.count as usize);
    for row in 0..layout.rows {
        for col in 0..layout.columns {
            let x = (border + f64::from(col) * (content.item_width + content.h_spacing)) * ppi;
            let y = (border + f64::from(row) * (content.item_height + content.v_spacing)) * ppi;
            openings.push(Opening {
                x,
                y,
                width,
                height,
                x_percent: x / frame_width_px * 100.0,
                y_percent: y / frame_height_px * 100.0,
                width_percent: width / frame_width_px * 100.0,
                height_percent: height / frame_height_px * 100.0,
            });
        }
    }

    Manifest {
        openings,
        frame_width,
        frame_height,
        mat_border: border,
        mat_border_bottom,
        mat_reveal: options.mat_reveal,
    }
}

/// Builds the manifest for catalog ids.
///
/// An empty layout id or an unknown size yields `Manifest::placeholder`; an unknown
/// non-empty layout id is an error like everywhere else.
pub fn build_manifest(
    catalog: &Catalog,
    layout_id: &str,
    size_id: &str,
    options: &ManifestOptions,
) -> Result<Manifest, CatalogError> {
    if layout_id.is_empty() {
        return Ok(Manifest::placeholder(options.mat_type));
    }
    let layout = catalog.get_layout(layout_id)?;
    Ok(match catalog.size_by_id(size_id) {
        Some(size) => manifest_for(layout, size, options),
        None => Manifest::placeholder(options.mat_type),
    })
}

/// Symmetric percent-only openings for a gallery thumbnail with the given mat border.
pub fn percent_openings(layout: &Layout, size: &Size, mat_border: f64) -> Vec<PercentOpening> {
    let content = GridContent::measure(layout, size);
    let frame_width = content.width + mat_border * 2.0;
    let frame_height = content.height + mat_border * 2.0;

    let pct_w = |v: f64| v / frame_width * 100.0;
    let pct_h = |v: f64| v / frame_height * 100.0;

    let mut openings = Vec::with_capacity(layout.count as usize);
    for row in 0..layout.rows {
        for col in 0..layout.columns {
            openings.push(PercentOpening {
                x: pct_w(mat_border + f64::from(col) * (content.item_width + content.h_spacing)),
                y: pct_h(mat_border + f64::from(row) * (content.item_height + content.v_spacing)),
                width: pct_w(content.item_width),
                height: pct_h(content.item_height),
            });
        }
    }
    openings
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalogs, ProductFamily};

    const EPS: f64 = 1e-6;

    fn make_catalog() -> Catalog {
        Catalog::for_family(ProductFamily::Magazine).unwrap()
    }

    fn make_options(mat_type: MatType) -> ManifestOptions {
        ManifestOptions {
            pixels_per_inch: 10.0,
            mat_type,
            ..ManifestOptions::default()
        }
    }

    #[test]
    fn test_openings_count_bounds_and_overlap_for_every_pair() {
        let catalogs = Catalogs::builtin().unwrap();
        let variants = [
            (MatType::Single, false, 0.0, 10.0),
            (MatType::Double, true, 0.5, 96.0),
            (MatType::None, false, 1.0, 3.7),
            (MatType::None, true, 0.0, 150.0),
        ];

        for family in ProductFamily::ALL {
            let catalog = catalogs.get(family);
            for layout in catalog.list_layouts() {
                for size in catalog.sizes() {
                    for (mat_type, nameplate, extra, ppi) in variants {
                        let options = ManifestOptions {
                            mat_reveal: 0.25,
                            pixels_per_inch: ppi,
                            nameplate_enabled: nameplate,
                            bottom_weighted_extra: extra,
                            mat_type,
                        };
                        let manifest = manifest_for(layout, size, &options);
                        assert_eq!(manifest.openings.len(), layout.count as usize);

                        let (frame_w, frame_h) = manifest.frame_px(ppi);
                        for (i, a) in manifest.openings.iter().enumerate() {
                            assert!(a.x >= -EPS && a.y >= -EPS);
                            assert!(a.x + a.width <= frame_w + EPS, "{} overflows width", layout.id);
                            assert!(a.y + a.height <= frame_h + EPS, "{} overflows height", layout.id);
                            assert!(a.x_percent + a.width_percent <= 100.0 + EPS);
                            assert!(a.y_percent + a.height_percent <= 100.0 + EPS);
                            for b in &manifest.openings[i + 1..] {
                                assert!(!a.intersects(b), "{} has overlapping openings", layout.id);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_no_mat_ignores_requested_border() {
        // The manifest takes no border input at all: with mat type "none" the border is
        // 0.25in no matter what the customer typed (e.g. 3.0in).
        let catalog = make_catalog();
        let manifest =
            build_manifest(&catalog, "single", "standard-8x105", &make_options(MatType::None))
                .unwrap();
        assert!((manifest.mat_border - 0.25).abs() < EPS);
        assert!((manifest.frame_width - 8.5).abs() < EPS);
        assert!((manifest.openings[0].x - 2.5).abs() < EPS);
    }

    #[test]
    fn test_row_major_positions() {
        let catalog = make_catalog();
        let manifest =
            build_manifest(&catalog, "4-quad", "standard-8x105", &make_options(MatType::Single))
                .unwrap();
        let positions: Vec<(f64, f64)> = manifest
            .openings
            .iter()
            .map(|o| ((o.x * 1000.0).round() / 1000.0, (o.y * 1000.0).round() / 1000.0))
            .collect();
        // border 2in, item 8x10.5, spacing 1.2/1.575, at 10 px/in
        assert_eq!(
            positions,
            vec![(20.0, 20.0), (112.0, 20.0), (20.0, 140.75), (112.0, 140.75)]
        );
    }

    #[test]
    fn test_bottom_weight_and_nameplate_grow_frame_only() {
        let catalog = make_catalog();
        let plain = make_options(MatType::Single);
        let weighted = ManifestOptions {
            bottom_weighted_extra: 0.75,
            nameplate_enabled: true,
            ..plain
        };
        let a = build_manifest(&catalog, "2-vertical", "large-10x12", &plain).unwrap();
        let b = build_manifest(&catalog, "2-vertical", "large-10x12", &weighted).unwrap();

        assert!((b.frame_height - a.frame_height - 0.75 - NAMEPLATE_ALLOWANCE).abs() < EPS);
        assert!((b.mat_border_bottom - 2.75).abs() < EPS);
        for (oa, ob) in a.openings.iter().zip(&b.openings) {
            assert_eq!((oa.x, oa.y), (ob.x, ob.y));
        }
    }

    #[test]
    fn test_placeholder_for_missing_selection() {
        let catalog = make_catalog();
        let options = make_options(MatType::Single);
        let empty = build_manifest(&catalog, "", "standard-8x105", &options).unwrap();
        let unknown_size = build_manifest(&catalog, "single", "nope", &options).unwrap();

        for manifest in [empty, unknown_size] {
            assert!(manifest.openings.is_empty());
            assert_eq!((manifest.frame_width, manifest.frame_height), (16.0, 20.0));
            assert_eq!(manifest.mat_border, 2.0);
        }
    }

    #[test]
    fn test_unknown_layout_is_error() {
        let result = build_manifest(
            &make_catalog(),
            "100-grid",
            "standard-8x105",
            &ManifestOptions::default(),
        );
        assert!(matches!(result, Err(CatalogError::UnknownLayout(_))));
    }

    #[test]
    fn test_non_positive_ppi_renders_at_one_pixel_per_inch() {
        let catalog = make_catalog();
        let unit = ManifestOptions {
            pixels_per_inch: 1.0,
            ..make_options(MatType::Single)
        };
        let expected = build_manifest(&catalog, "4-quad", "standard-8x105", &unit).unwrap();

        for ppi in [0.0, -4.0, f64::NAN] {
            let options = ManifestOptions {
                pixels_per_inch: ppi,
                ..unit
            };
            let manifest = build_manifest(&catalog, "4-quad", "standard-8x105", &options).unwrap();
            for opening in &manifest.openings {
                assert!(opening.x_percent.is_finite() && opening.width_percent.is_finite());
                assert!(opening.y_percent.is_finite() && opening.height_percent.is_finite());
            }
            assert_eq!(manifest, expected);
        }
    }

    #[test]
    fn test_manifest_is_idempotent() {
        let catalog = make_catalog();
        let options = make_options(MatType::Double);
        assert_eq!(
            build_manifest(&catalog, "9-grid", "compact-7x10", &options),
            build_manifest(&catalog, "9-grid", "compact-7x10", &options)
        );
    }

    #[test]
    fn test_percent_openings_are_symmetric() {
        let catalog = make_catalog();
        let layout = catalog.get_layout("2-horizontal").unwrap();
        let size = catalog.size_by_id("standard-8x105").unwrap();
        let openings = percent_openings(layout, size, 2.0);

        assert_eq!(openings.len(), 2);
        let left_margin = openings[0].x;
        let right_margin = 100.0 - (openings[1].x + openings[1].width);
        assert!((left_margin - right_margin).abs() < EPS);
        let top_margin = openings[0].y;
        let bottom_margin = 100.0 - (openings[0].y + openings[0].height);
        assert!((top_margin - bottom_margin).abs() < EPS);
    }

    #[test]
    fn test_intersects_ignores_shared_edges() {
        let a = Opening {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
            x_percent: 0.0,
            y_percent: 0.0,
            width_percent: 0.0,
            height_percent: 0.0,
        };
        let touching = Opening { x: 10.0, ..a };
        let overlapping = Opening { x: 5.0, y: 5.0, ..a };
        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
    }
}
