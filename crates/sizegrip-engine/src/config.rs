#![forbid(unsafe_code)]

//! Resize behaviour configuration.

use crate::bounds::Bounds;
use sizegrip_core::Dimension;

/// Aspect-ratio locking mode.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    /// No locking.
    #[default]
    Off,
    /// Lock to the width/height ratio measured at session start.
    FromStart,
    /// Lock to an explicit width/height ratio.
    Fixed(f64),
}

impl AspectRatio {
    /// Whether any locking is requested.
    #[inline]
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        !matches!(self, AspectRatio::Off)
    }
}

/// Options recognized by the engine.
///
/// Declared min/max limits accept any [`Dimension`]; an `Auto` or absent
/// limit constrains nothing. `scale` divides pointer deltas (for zoomed
/// canvases), `resize_ratio` multiplies them (drag sensitivity).
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResizeConfig {
    pub min_width: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_height: Option<Dimension>,
    pub lock_aspect_ratio: AspectRatio,
    /// Pixel offset subtracted from the width before ratio math.
    pub extra_width: f64,
    /// Pixel offset added to the derived height after ratio math.
    pub extra_height: f64,
    /// Pointer-to-pixel divisor.
    pub scale: f64,
    /// Drag-sensitivity multiplier.
    pub resize_ratio: f64,
    pub bounds: Bounds,
    /// When set, the boundary max honors which edge is being dragged;
    /// otherwise a single far-edge rule is used for every direction.
    pub bounds_by_direction: bool,
    /// Defer committing live sizes until the gesture ends.
    pub preview: bool,
    pub disabled: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
            lock_aspect_ratio: AspectRatio::Off,
            extra_width: 0.0,
            extra_height: 0.0,
            scale: 1.0,
            resize_ratio: 1.0,
            bounds: Bounds::None,
            bounds_by_direction: true,
            preview: false,
            disabled: false,
        }
    }
}
