//! Preview Layout Compute: maps physical inches onto a pixel canvas with one uniform
//! scale factor.
//!
//! The whole framed piece (opening + mat borders + reveal + moulding face) is contained
//! in the container minus padding on every side. Aspect ratio is always preserved; the
//! scale is whatever makes the limiting axis fit exactly.
//!
//! # Boxes, inside out
//! - **opening**: the artwork, at least 1in on each axis
//! - **glass**: opening + the four mat borders
//! - **outer**: glass + reveal and frame face on every side

pub mod handlers;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_FRAME_FACE: f64 = 0.75;
pub const DEFAULT_PADDING_PX: f64 = 12.0;
const MIN_ART_INCHES: f64 = 1.0;
const MIN_AVAILABLE_PX: f64 = 1.0;

fn default_frame_face() -> f64 {
    DEFAULT_FRAME_FACE
}

fn default_padding_px() -> f64 {
    DEFAULT_PADDING_PX
}

/// Physical measurements (inches) and the container to fit them into (pixels).
///
/// A side with no explicit border falls back to `mat_border`, then to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewInput {
    pub art_width: f64,
    pub art_height: f64,
    #[serde(default)]
    pub mat_border: Option<f64>,
    #[serde(default)]
    pub mat_border_top: Option<f64>,
    #[serde(default)]
    pub mat_border_right: Option<f64>,
    #[serde(default)]
    pub mat_border_bottom: Option<f64>,
    #[serde(default)]
    pub mat_border_left: Option<f64>,
    #[serde(default)]
    pub mat_reveal: f64,
    #[serde(default = "default_frame_face")]
    pub frame_face: f64,
    pub container_width_px: f64,
    pub container_height_px: f64,
    #[serde(default = "default_padding_px")]
    pub padding_px: f64,
}

impl PreviewInput {
    /// Input with defaults for everything but the artwork and container.
    pub fn new(art_width: f64, art_height: f64, container_width_px: f64, container_height_px: f64) -> Self {
        Self {
            art_width,
            art_height,
            mat_border: None,
            mat_border_top: None,
            mat_border_right: None,
            mat_border_bottom: None,
            mat_border_left: None,
            mat_reveal: 0.0,
            frame_face: DEFAULT_FRAME_FACE,
            container_width_px,
            container_height_px,
            padding_px: DEFAULT_PADDING_PX,
        }
    }

    /// Resolved (top, right, bottom, left) borders in inches.
    pub fn borders(&self) -> (f64, f64, f64, f64) {
        let uniform = self.mat_border.unwrap_or(0.0);
        (
            self.mat_border_top.unwrap_or(uniform),
            self.mat_border_right.unwrap_or(uniform),
            self.mat_border_bottom.unwrap_or(uniform),
            self.mat_border_left.unwrap_or(uniform),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PxSize {
    pub w: f64,
    pub h: f64,
}

/// Pixel geometry for one render at one container size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreviewLayout {
    /// Pixels per inch.
    pub scale: f64,
    pub padding_px: f64,
    pub outer_px: PxSize,
    pub glass_px: PxSize,
    pub opening_px: PxSize,
    pub frame_face_px: f64,
    /// The uniform border when one was given, else the top border.
    pub mat_px: f64,
    pub mat_top_px: f64,
    pub mat_right_px: f64,
    pub mat_bottom_px: f64,
    pub mat_left_px: f64,
    pub mat_reveal_px: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// Core functions
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_preview_layout(input: &PreviewInput) -> PreviewLayout {
    let opening_w = input.art_width.max(MIN_ART_INCHES);
    let opening_h = input.art_height.max(MIN_ART_INCHES);
    let (top, right, bottom, left) = input.borders();

    let glass_w = opening_w + left + right;
    let glass_h = opening_h + top + bottom;

    let surround = 2.0 * input.frame_face + 2.0 * input.mat_reveal;
    let outer_w = glass_w + surround;
    let outer_h = glass_h + surround;

    let avail_w = (input.container_width_px - 2.0 * input.padding_px).max(MIN_AVAILABLE_PX);
    let avail_h = (input.container_height_px - 2.0 * input.padding_px).max(MIN_AVAILABLE_PX);
    let scale = (avail_w / outer_w).min(avail_h / outer_h);

    let uniform_or_top = match input.mat_border {
        Some(border) if border != 0.0 => border,
        _ => top,
    };

    PreviewLayout {
        scale,
        padding_px: input.padding_px,
        outer_px: PxSize {
            w: outer_w * scale,
            h: outer_h * scale,
        },
        glass_px: PxSize {
            w: glass_w * scale,
            h: glass_h * scale,
        },
        opening_px: PxSize {
            w: opening_w * scale,
            h: opening_h * scale,
        },
        frame_face_px: input.frame_face * scale,
        mat_px: uniform_or_top * scale,
        mat_top_px: top * scale,
        mat_right_px: right * scale,
        mat_bottom_px: bottom * scale,
        mat_left_px: left * scale,
        mat_reveal_px: input.mat_reveal * scale,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
