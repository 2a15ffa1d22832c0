//! Catalogs: read-only layout, size and material data.
//!
//! A `Catalog` is built once per product family at startup, validated, and then shared
//! behind an `Arc` for the life of the process. The calculators in `sizing` and
//! `pricing` take a `&Catalog` explicitly; nothing here is global or mutable.

pub mod layouts;
pub mod materials;
pub mod sizes;

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

pub use layouts::{Layout, Orientation, Rabbet, Spacing};
pub use materials::{FrameStyle, GlassType, Hardware, HexColor, Mat, MatType, Materials};
pub use sizes::{Size, SizeCategory};

/// The product lines that share the multi-opening engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductFamily {
    Magazine,
    Comic,
    Newspaper,
    Needlework,
}

impl ProductFamily {
    pub const ALL: [ProductFamily; 4] = [
        ProductFamily::Magazine,
        ProductFamily::Comic,
        ProductFamily::Newspaper,
        ProductFamily::Needlework,
    ];

    fn tables(self) -> (&'static [Layout], &'static [Size]) {
        match self {
            ProductFamily::Magazine => (layouts::MAGAZINE_LAYOUTS, sizes::MAGAZINE_SIZES),
            ProductFamily::Comic => (layouts::COMIC_LAYOUTS, sizes::COMIC_SIZES),
            ProductFamily::Newspaper => (layouts::NEWSPAPER_LAYOUTS, sizes::NEWSPAPER_SIZES),
            ProductFamily::Needlework => (layouts::NEEDLEWORK_LAYOUTS, sizes::NEEDLEWORK_SIZES),
        }
    }
}

impl FromStr for ProductFamily {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "magazine" => Ok(ProductFamily::Magazine),
            "comic" => Ok(ProductFamily::Comic),
            "newspaper" => Ok(ProductFamily::Newspaper),
            "needlework" => Ok(ProductFamily::Needlework),
            other => Err(format!("unknown product family '{other}'")),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog
// ────────────────────────────────────────────────────────────────────────────

/// Layouts and sizes for one product family.
#[derive(Debug, Clone)]
pub struct Catalog {
    family: ProductFamily,
    layouts: Vec<Layout>,
    sizes: Vec<Size>,
}

impl Catalog {
    /// Builds a catalog, rejecting malformed records and duplicate ids.
    pub fn new(
        family: ProductFamily,
        layouts: Vec<Layout>,
        sizes: Vec<Size>,
    ) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for layout in &layouts {
            layout.validate()?;
            if !seen.insert(layout.id) {
                return Err(CatalogError::DuplicateId(layout.id.to_string()));
            }
        }

        seen.clear();
        for size in &sizes {
            size.validate()?;
            if !seen.insert(size.id) {
                return Err(CatalogError::DuplicateId(size.id.to_string()));
            }
        }

        Ok(Catalog {
            family,
            layouts,
            sizes,
        })
    }

    /// The built-in tables for `family`.
    pub fn for_family(family: ProductFamily) -> Result<Self, CatalogError> {
        let (layouts, sizes) = family.tables();
        Catalog::new(family, layouts.to_vec(), sizes.to_vec())
    }

    pub fn family(&self) -> ProductFamily {
        self.family
    }

    /// Looks up a layout by id.
    ///
    /// An empty id means the caller has not selected a layout yet; that is a
    /// precondition violation, distinct from an id that does not exist.
    pub fn get_layout(&self, id: &str) -> Result<&Layout, CatalogError> {
        if id.is_empty() {
            return Err(CatalogError::LayoutRequired);
        }
        self.layouts
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| CatalogError::UnknownLayout(id.to_string()))
    }

    /// All layouts in catalog order.
    pub fn list_layouts(&self) -> &[Layout] {
        &self.layouts
    }

    /// Returns `None` for unknown ids; callers decide how to degrade.
    pub fn size_by_id(&self, id: &str) -> Option<&Size> {
        self.sizes.iter().find(|s| s.id == id)
    }

    pub fn sizes_by_category(&self, category: SizeCategory) -> Vec<&Size> {
        self.sizes.iter().filter(|s| s.category == category).collect()
    }

    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }
}

/// One catalog per product family.
#[derive(Debug, Clone)]
pub struct Catalogs {
    magazine: Catalog,
    comic: Catalog,
    newspaper: Catalog,
    needlework: Catalog,
}

impl Catalogs {
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Catalogs {
            magazine: Catalog::for_family(ProductFamily::Magazine)?,
            comic: Catalog::for_family(ProductFamily::Comic)?,
            newspaper: Catalog::for_family(ProductFamily::Newspaper)?,
            needlework: Catalog::for_family(ProductFamily::Needlework)?,
        })
    }

    pub fn get(&self, family: ProductFamily) -> &Catalog {
        match family {
            ProductFamily::Magazine => &self.magazine,
            ProductFamily::Comic => &self.comic,
            ProductFamily::Newspaper => &self.newspaper,
            ProductFamily::Needlework => &self.needlework,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
