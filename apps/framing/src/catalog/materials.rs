//! Frame mouldings, glazing and mat boards.
//!
//! These records have no geometric role in the sizing calculators beyond the moulding
//! width; they exist so pricing requests can be resolved by id and so mat colors are
//! validated once, here, instead of wherever a swatch is drawn.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

// ────────────────────────────────────────────────────────────────────────────
// Selection enums
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatType {
    None,
    #[default]
    Single,
    Double,
}

impl MatType {
    pub fn has_mat(self) -> bool {
        self != MatType::None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hardware {
    #[default]
    Standard,
    Security,
}

// ────────────────────────────────────────────────────────────────────────────
// Records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameStyle {
    pub id: &'static str,
    pub name: &'static str,
    /// Face width of the moulding in inches. Used as the frame face of the
    /// manufactured size when this style is chosen.
    pub moulding_width: f64,
    /// Depth available behind the glazing, for shadowbox styles.
    pub usable_depth: Option<f64>,
    pub price_per_inch: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlassType {
    pub id: &'static str,
    pub name: &'static str,
}

impl GlassType {
    pub fn is_non_glare(&self) -> bool {
        self.id.contains("non-glare") || self.name.to_lowercase().contains("non-glare")
    }
}

/// A `#rrggbb` color, normalized to lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColor(String);

impl HexColor {
    /// Parses `#rgb` or `#rrggbb` (case-insensitive).
    pub fn parse(value: &str) -> Result<Self, CatalogError> {
        let invalid = || CatalogError::InvalidColor(value.to_string());
        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };
        Ok(HexColor(format!("#{}", expanded.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mat {
    pub id: String,
    pub name: String,
    pub hex_color: HexColor,
    pub line_number: u32,
}

impl Mat {
    pub fn new(id: &str, name: &str, hex_color: &str, line_number: u32) -> Result<Self, CatalogError> {
        Ok(Mat {
            id: id.to_string(),
            name: name.to_string(),
            hex_color: HexColor::parse(hex_color)?,
            line_number,
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Table
// ────────────────────────────────────────────────────────────────────────────

pub static FRAME_STYLES: &[FrameStyle] = &[
    FrameStyle {
        id: "black-shadowbox",
        name: "Black Shadowbox",
        moulding_width: 1.5,
        usable_depth: Some(1.25),
        price_per_inch: 0.55,
    },
    FrameStyle {
        id: "white-shadowbox",
        name: "White Shadowbox",
        moulding_width: 1.5,
        usable_depth: Some(1.25),
        price_per_inch: 0.55,
    },
    FrameStyle {
        id: "walnut-gallery",
        name: "Walnut Gallery",
        moulding_width: 1.25,
        usable_depth: Some(0.75),
        price_per_inch: 0.62,
    },
    FrameStyle {
        id: "slim-black",
        name: "Slim Black",
        moulding_width: 0.75,
        usable_depth: None,
        price_per_inch: 0.38,
    },
];

pub static GLASS_TYPES: &[GlassType] = &[
    GlassType {
        id: "standard",
        name: "Standard Acrylic",
    },
    GlassType {
        id: "non-glare",
        name: "Non-Glare Acrylic",
    },
];

const MAT_BOARDS: &[(&str, &str, &str, u32)] = &[
    ("mat-1", "Bright White", "#F8F8F4", 1),
    ("mat-2", "Soft White", "#f1efe6", 2),
    ("mat-3", "Black", "#000", 3),
    ("mat-4", "Navy", "#1f2a44", 4),
    ("mat-5", "Charcoal", "#3c3c3c", 5),
];

/// Frame styles, glazing and mats available to the pricing delegate.
#[derive(Debug, Clone)]
pub struct Materials {
    frame_styles: Vec<FrameStyle>,
    glass_types: Vec<GlassType>,
    mats: Vec<Mat>,
}

impl Materials {
    pub fn new(
        frame_styles: Vec<FrameStyle>,
        glass_types: Vec<GlassType>,
        mats: Vec<Mat>,
    ) -> Self {
        Materials {
            frame_styles,
            glass_types,
            mats,
        }
    }

    /// The built-in tables. Fails only if a mat color in the table is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        let mats = MAT_BOARDS
            .iter()
            .map(|(id, name, hex, line)| Mat::new(id, name, hex, *line))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Materials::new(FRAME_STYLES.to_vec(), GLASS_TYPES.to_vec(), mats))
    }

    pub fn frame_style(&self, id: &str) -> Option<&FrameStyle> {
        self.frame_styles.iter().find(|f| f.id == id)
    }

    pub fn glass_type(&self, id: &str) -> Option<&GlassType> {
        self.glass_types.iter().find(|g| g.id == id)
    }

    pub fn mat(&self, id: &str) -> Option<&Mat> {
        self.mats.iter().find(|m| m.id == id)
    }

    pub fn frame_styles(&self) -> &[FrameStyle] {
        &self.frame_styles
    }

    pub fn glass_types(&self) -> &[GlassType] {
        &self.glass_types
    }

    pub fn mats(&self) -> &[Mat] {
        &self.mats
    }
}
