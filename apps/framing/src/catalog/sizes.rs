//! Static item-size tables (inches) per product family.

use serde::{Deserialize, Serialize};

use crate::errors::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Compact,
    Standard,
    Large,
    /// Unslabbed comic books.
    Raw,
    /// Graded comics sealed in a plastic case.
    Slabbed,
}

/// Physical size of one displayed item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Size {
    pub id: &'static str,
    pub width: f64,
    pub height: f64,
    pub category: SizeCategory,
    pub description: &'static str,
    /// Case depth for graded comics; drives the slab surcharge.
    pub slab_depth: Option<f64>,
}

impl Size {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.is_empty() {
            return Err(CatalogError::InvalidSize {
                id: String::new(),
                reason: "id must not be empty".to_string(),
            });
        }
        // Written as negated `>` so NaN is rejected too.
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(CatalogError::InvalidSize {
                id: self.id.to_string(),
                reason: format!("dimensions must be positive, got {}x{}", self.width, self.height),
            });
        }
        Ok(())
    }

    pub fn is_slabbed(&self) -> bool {
        self.slab_depth.is_some()
    }
}

const fn size(
    id: &'static str,
    width: f64,
    height: f64,
    category: SizeCategory,
    description: &'static str,
) -> Size {
    Size {
        id,
        width,
        height,
        category,
        description,
        slab_depth: None,
    }
}

pub static MAGAZINE_SIZES: &[Size] = &[
    size("compact-55x75", 5.5, 7.5, SizeCategory::Compact, "Compact digest size"),
    size("compact-7x10", 7.0, 10.0, SizeCategory::Compact, "Small format"),
    size("standard-8x105", 8.0, 10.5, SizeCategory::Standard, "Classic standard size"),
    size("standard-8x11", 8.0, 11.0, SizeCategory::Standard, "Tall standard format"),
    size("standard-825x11", 8.25, 11.0, SizeCategory::Standard, "Sports Illustrated format"),
    size("standard-letter", 8.5, 11.0, SizeCategory::Standard, "Letter-size format"),
    size("standard-875x11", 8.75, 11.0, SizeCategory::Standard, "Vogue format"),
    size("standard-9x11", 9.0, 11.0, SizeCategory::Standard, "Wide fashion format"),
    size("large-10x105", 10.0, 10.5, SizeCategory::Large, "Square business format"),
    size("large-10x12", 10.0, 12.0, SizeCategory::Large, "Large tabloid format"),
    size("large-10x14", 10.0, 14.0, SizeCategory::Large, "W Magazine format"),
    size("large-105x12", 10.5, 12.0, SizeCategory::Large, "Classic tabloid format"),
    size("large-105x13", 10.5, 13.0, SizeCategory::Large, "Saturday Evening Post format"),
    size("large-105x14", 10.5, 14.0, SizeCategory::Large, "Life magazine format"),
    size("large-11x14", 11.0, 14.0, SizeCategory::Large, "Oversized tabloid format"),
];

pub static COMIC_SIZES: &[Size] = &[
    size("golden-age", 7.0, 10.25, SizeCategory::Raw, "Golden Age (1938-1956)"),
    size("silver-age", 6.75, 10.25, SizeCategory::Raw, "Silver Age (1957-1970)"),
    size("bronze-age", 6.75, 10.25, SizeCategory::Raw, "Bronze Age (1971-1984)"),
    size("modern-age", 6.625, 10.25, SizeCategory::Raw, "Modern Age (1985-present)"),
    Size {
        id: "slabbed-cgc",
        width: 8.25,
        height: 13.0,
        category: SizeCategory::Slabbed,
        description: "Graded slab (CGC/PGX/CBCS)",
        slab_depth: Some(0.75),
    },
];

pub static NEWSPAPER_SIZES: &[Size] = &[
    size("newspaper-11x22", 11.0, 22.0, SizeCategory::Standard, "11x22 broadsheet page"),
    size("newspaper-12x2275", 12.0, 22.75, SizeCategory::Large, "12x22.75 broadsheet page"),
    size("newspaper-14x11", 14.0, 11.0, SizeCategory::Compact, "14x11 folded front page"),
    size("newspaper-11x17", 11.0, 17.0, SizeCategory::Compact, "11x17 tabloid page"),
    size("newspaper-15x2275", 15.0, 22.75, SizeCategory::Large, "15x22.75 full broadsheet"),
    size("newspaper-12x22", 12.0, 22.0, SizeCategory::Standard, "12x22 broadsheet page"),
];

pub static NEEDLEWORK_SIZES: &[Size] = &[
    size("needlework-8x8", 8.0, 8.0, SizeCategory::Compact, "8x8 sampler"),
    size("needlework-8x10", 8.0, 10.0, SizeCategory::Compact, "8x10 pattern"),
    size("needlework-11x14", 11.0, 14.0, SizeCategory::Standard, "11x14 pattern"),
    size("needlework-12x12", 12.0, 12.0, SizeCategory::Standard, "12x12 square pattern"),
    size("needlework-16x20", 16.0, 20.0, SizeCategory::Large, "16x20 pattern"),
    size("needlework-18x24", 18.0, 24.0, SizeCategory::Large, "18x24 pattern"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sizes_are_positive() {
        for table in [MAGAZINE_SIZES, COMIC_SIZES, NEWSPAPER_SIZES, NEEDLEWORK_SIZES] {
            for s in table {
                assert!(s.validate().is_ok(), "size {} invalid", s.id);
            }
        }
    }

    #[test]
    fn test_validate_rejects_zero_and_nan() {
        let zero = size("zero", 0.0, 10.0, SizeCategory::Standard, "");
        assert!(zero.validate().is_err());
        let nan = size("nan", f64::NAN, 10.0, SizeCategory::Standard, "");
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_only_cgc_format_is_slabbed() {
        let slabbed: Vec<&str> = COMIC_SIZES
            .iter()
            .filter(|s| s.is_slabbed())
            .map(|s| s.id)
            .collect();
        assert_eq!(slabbed, vec!["slabbed-cgc"]);
    }
}
