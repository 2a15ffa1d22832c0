//! Sizing: content, manufacturing and preview dimensions, opening geometry, and the
//! mat-sheet availability filter.
//!
//! Everything here is a pure function of catalog records and modifiers.

pub mod availability;
pub mod dimensions;
pub mod handlers;
pub mod manifest;

pub use availability::{available_layouts_for_size, sheet_fit, SheetFit, SheetLimits};
pub use dimensions::{
    interior_content_dimensions, manufacturing_frame_size, preview_dimensions, Dimensions,
    FrameSizeOptions, GridContent,
};
pub use manifest::{build_manifest, percent_openings, Manifest, ManifestOptions, Opening};
