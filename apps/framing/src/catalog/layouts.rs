//! Static layout tables: the N-up grid arrangements offered per product family.
//!
//! Every record states its `count` explicitly; `Layout::validate` checks it against
//! `rows * columns` when a `Catalog` is constructed, so a typo in a table fails at
//! startup instead of producing a manifest with the wrong number of openings.

use serde::Serialize;

use crate::errors::CatalogError;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Overall shape of a layout's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
    Square,
}

/// Gap between neighbouring items in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum Spacing {
    /// Fraction of the item size: horizontal gaps use the item width, vertical gaps
    /// the item height.
    PerAxis(f64),
    /// Fraction of the item width, on both axes.
    ItemWidth(f64),
    /// A gutter in inches, on both axes.
    Fixed(f64),
}

impl Spacing {
    /// (horizontal, vertical) gap for an item of the given size.
    pub fn gaps(self, item_width: f64, item_height: f64) -> (f64, f64) {
        match self {
            Spacing::PerAxis(factor) => (item_width * factor, item_height * factor),
            Spacing::ItemWidth(factor) => (item_width * factor, item_width * factor),
            Spacing::Fixed(inches) => (inches, inches),
        }
    }

    fn is_valid(self) -> bool {
        match self {
            Spacing::PerAxis(factor) | Spacing::ItemWidth(factor) => (0.0..1.0).contains(&factor),
            Spacing::Fixed(inches) => inches.is_finite() && inches >= 0.0,
        }
    }
}

/// Fixed rabbet opening of a frame built to a shop table instead of from its content.
///
/// Graded items sit in a thicker case and get the larger opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rabbet {
    pub raw_width: f64,
    pub raw_height: f64,
    pub graded_width: f64,
    pub graded_height: f64,
}

impl Rabbet {
    /// (width, height) of the opening.
    pub fn opening(&self, graded: bool) -> (f64, f64) {
        if graded {
            (self.graded_width, self.graded_height)
        } else {
            (self.raw_width, self.raw_height)
        }
    }
}

/// One grid arrangement of identically sized items inside a single frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub id: &'static str,
    pub display_name: &'static str,
    pub count: u32,
    pub rows: u32,
    pub columns: u32,
    pub orientation: Orientation,
    pub spacing: Spacing,
    /// When present the manufactured frame is sized from this opening.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rabbet: Option<Rabbet>,
}

impl Layout {
    /// Checks the structural invariants of a catalog record.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |reason: String| CatalogError::InvalidLayout {
            id: self.id.to_string(),
            reason,
        };

        if self.id.is_empty() {
            return Err(invalid("id must not be empty".to_string()));
        }
        if self.rows == 0 || self.columns == 0 {
            return Err(invalid(format!(
                "grid must be at least 1x1, got {}x{}",
                self.rows, self.columns
            )));
        }
        if self.count != self.rows * self.columns {
            return Err(invalid(format!(
                "count {} does not match {} rows x {} columns",
                self.count, self.rows, self.columns
            )));
        }
        if !self.spacing.is_valid() {
            return Err(invalid(format!("spacing {:?} out of range", self.spacing)));
        }
        if let Some(rabbet) = self.rabbet {
            let sides = [
                rabbet.raw_width,
                rabbet.raw_height,
                rabbet.graded_width,
                rabbet.graded_height,
            ];
            if sides.iter().any(|side| !(*side > 0.0)) {
                return Err(invalid("rabbet opening must be positive".to_string()));
            }
        }
        Ok(())
    }

    /// True when the frame holds more than one item.
    pub fn is_multi_opening(&self) -> bool {
        self.count > 1
    }
}

const fn grid(
    id: &'static str,
    display_name: &'static str,
    count: u32,
    rows: u32,
    columns: u32,
    orientation: Orientation,
    spacing_factor: f64,
) -> Layout {
    Layout {
        id,
        display_name,
        count,
        rows,
        columns,
        orientation,
        spacing: Spacing::PerAxis(spacing_factor),
        rabbet: None,
    }
}

const COMIC_SPACING: Spacing = Spacing::ItemWidth(0.15);

const fn comic(
    id: &'static str,
    display_name: &'static str,
    rows: u32,
    columns: u32,
    orientation: Orientation,
    raw: (f64, f64),
    graded: (f64, f64),
) -> Layout {
    Layout {
        id,
        display_name,
        count: rows * columns,
        rows,
        columns,
        orientation,
        spacing: COMIC_SPACING,
        rabbet: Some(Rabbet {
            raw_width: raw.0,
            raw_height: raw.1,
            graded_width: graded.0,
            graded_height: graded.1,
        }),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

pub static MAGAZINE_LAYOUTS: &[Layout] = &[
    grid("single", "Single Magazine", 1, 1, 1, Orientation::Portrait, 0.0),
    grid("2-horizontal", "2 Magazines", 2, 1, 2, Orientation::Landscape, 0.15),
    grid("3-horizontal", "3 Magazines", 3, 1, 3, Orientation::Landscape, 0.15),
    grid("4-horizontal", "4 Magazines", 4, 1, 4, Orientation::Landscape, 0.15),
    grid("5-horizontal", "5 Magazines", 5, 1, 5, Orientation::Landscape, 0.15),
    grid("6-horizontal", "6 Magazines", 6, 1, 6, Orientation::Landscape, 0.15),
    grid("7-horizontal", "7 Magazines", 7, 1, 7, Orientation::Landscape, 0.15),
    grid("2-vertical", "2 Magazines", 2, 2, 1, Orientation::Portrait, 0.15),
    grid("3-vertical", "3 Magazines", 3, 3, 1, Orientation::Portrait, 0.15),
    grid("4-vertical", "4 Magazines", 4, 4, 1, Orientation::Portrait, 0.15),
    grid("5-vertical", "5 Magazines", 5, 5, 1, Orientation::Portrait, 0.15),
    grid("6-vertical", "6 Magazines", 6, 6, 1, Orientation::Portrait, 0.15),
    grid("7-vertical", "7 Magazines", 7, 7, 1, Orientation::Portrait, 0.15),
    grid("4-quad", "4 Magazines", 4, 2, 2, Orientation::Square, 0.15),
    grid("6-quad", "6 Magazines", 6, 2, 3, Orientation::Landscape, 0.15),
    grid("6-grid", "6 Magazines", 6, 3, 2, Orientation::Portrait, 0.15),
    grid("9-grid", "9 Magazines", 9, 3, 3, Orientation::Square, 0.15),
    grid("8-grid-2x4", "8 Magazines", 8, 2, 4, Orientation::Landscape, 0.15),
    grid("8-grid-4x2", "8 Magazines", 8, 4, 2, Orientation::Portrait, 0.15),
    grid("10-grid-2x5", "10 Magazines", 10, 2, 5, Orientation::Landscape, 0.15),
    grid("10-grid-5x2", "10 Magazines", 10, 5, 2, Orientation::Portrait, 0.15),
    grid("12-grid-3x4", "12 Magazines", 12, 3, 4, Orientation::Landscape, 0.15),
    grid("12-grid-4x3", "12 Magazines", 12, 4, 3, Orientation::Portrait, 0.15),
    grid("15-grid-3x5", "15 Magazines", 15, 3, 5, Orientation::Landscape, 0.15),
    grid("15-grid-5x3", "15 Magazines", 15, 5, 3, Orientation::Portrait, 0.15),
    grid("16-grid", "16 Magazines", 16, 4, 4, Orientation::Square, 0.15),
    grid("18-grid-3x6", "18 Magazines", 18, 3, 6, Orientation::Landscape, 0.15),
    grid("18-grid-6x3", "18 Magazines", 18, 6, 3, Orientation::Portrait, 0.15),
    grid("20-grid-4x5", "20 Magazines", 20, 4, 5, Orientation::Landscape, 0.15),
    grid("20-grid-5x4", "20 Magazines", 20, 5, 4, Orientation::Portrait, 0.15),
    grid("12-grid-2x6", "12 Magazines", 12, 2, 6, Orientation::Landscape, 0.15),
    grid("12-grid-6x2", "12 Magazines", 12, 6, 2, Orientation::Portrait, 0.15),
    grid("14-grid-2x7", "14 Magazines", 14, 2, 7, Orientation::Landscape, 0.15),
    grid("14-grid-7x2", "14 Magazines", 14, 7, 2, Orientation::Portrait, 0.15),
    grid("21-grid-3x7", "21 Magazines", 21, 3, 7, Orientation::Landscape, 0.15),
    grid("21-grid-7x3", "21 Magazines", 21, 7, 3, Orientation::Portrait, 0.15),
    grid("24-grid-3x8", "24 Magazines", 24, 3, 8, Orientation::Landscape, 0.15),
    grid("24-grid-4x6", "24 Magazines", 24, 4, 6, Orientation::Landscape, 0.15),
    grid("24-grid-6x4", "24 Magazines", 24, 6, 4, Orientation::Portrait, 0.15),
    grid("24-grid-8x3", "24 Magazines", 24, 8, 3, Orientation::Portrait, 0.15),
    grid("25-grid", "25 Magazines", 25, 5, 5, Orientation::Square, 0.15),
    grid("28-grid-4x7", "28 Magazines", 28, 4, 7, Orientation::Landscape, 0.15),
    grid("28-grid-7x4", "28 Magazines", 28, 7, 4, Orientation::Portrait, 0.15),
    grid("30-grid-5x6", "30 Magazines", 30, 5, 6, Orientation::Landscape, 0.15),
    grid("30-grid-6x5", "30 Magazines", 30, 6, 5, Orientation::Portrait, 0.15),
];

// Rabbet openings are the shop's (raw, graded) cut sizes.
pub static COMIC_LAYOUTS: &[Layout] = &[
    comic("single", "Single Comic", 1, 1, Orientation::Portrait, (10.0, 14.0), (12.0, 17.0)),
    comic("2-horizontal", "2 Comics", 1, 2, Orientation::Landscape, (18.0, 14.0), (21.0, 17.0)),
    comic("3-horizontal", "3 Comics", 1, 3, Orientation::Landscape, (28.75, 14.0), (30.0, 16.5)),
    comic("4-horizontal", "4 Comics", 1, 4, Orientation::Landscape, (37.5, 14.0), (39.0, 16.5)),
    comic("5-horizontal", "5 Comics", 1, 5, Orientation::Landscape, (44.0, 14.0), (44.0, 15.0)),
    comic("6-horizontal", "6 Comics", 1, 6, Orientation::Landscape, (51.0, 14.0), (54.0, 16.0)),
    comic("3-vertical", "3 Comics", 3, 1, Orientation::Portrait, (11.25, 36.0), (11.75, 43.5)),
    comic("4-vertical", "4 Comics", 4, 1, Orientation::Portrait, (11.25, 47.0), (11.75, 57.0)),
    comic("4-quad", "4 Comics", 2, 2, Orientation::Square, (20.0, 25.0), (20.75, 30.5)),
    comic("6-quad", "6 Comics", 2, 3, Orientation::Landscape, (29.0, 26.0), (30.0, 30.0)),
    comic("6-grid", "6 Comics", 3, 2, Orientation::Portrait, (20.0, 38.5), (20.75, 44.5)),
    comic("8-grid", "8 Comics", 2, 4, Orientation::Landscape, (37.5, 26.5), (39.0, 30.5)),
];

/// Half-inch gutter between side-by-side pages.
pub const NEWSPAPER_GUTTER: f64 = 0.5;

pub static NEWSPAPER_LAYOUTS: &[Layout] = &[
    grid("single-newspaper", "Single Newspaper", 1, 1, 1, Orientation::Portrait, 0.0),
    Layout {
        spacing: Spacing::Fixed(NEWSPAPER_GUTTER),
        ..grid("double-newspaper", "Double Newspaper", 2, 1, 2, Orientation::Landscape, 0.0)
    },
];

pub static NEEDLEWORK_LAYOUTS: &[Layout] = &[grid(
    "single",
    "Single Piece",
    1,
    1,
    1,
    Orientation::Portrait,
    0.0,
)];

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
