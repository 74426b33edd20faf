#![forbid(unsafe_code)]

//! Pure raw-size computation from a pointer delta.
//!
//! No constraints are applied here; [`crate::constraints::resolve`] clamps
//! the result afterwards. The only state is the caller's arguments, so the
//! function is trivially repeatable for the same frame.

use sizegrip_core::{Direction, Point};

/// An active aspect-ratio lock.
///
/// `ratio` is width/height. The extra offsets are fixed pixel amounts
/// excluded from the ratio math, for regions carrying non-scaling chrome
/// (borders, toolbars) on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectLock {
    pub ratio: f64,
    pub extra_width: f64,
    pub extra_height: f64,
}

impl AspectLock {
    /// Create a lock, rejecting ratios that cannot derive a dimension.
    ///
    /// A zero, negative, or non-finite ratio (an original height of zero
    /// produces one) yields `None`: the would-be-derived dimension is left
    /// unchanged rather than propagating NaN.
    #[must_use]
    pub fn checked(ratio: f64, extra_width: f64, extra_height: f64) -> Option<Self> {
        (ratio.is_finite() && ratio > 0.0).then_some(Self {
            ratio,
            extra_width,
            extra_height,
        })
    }

    /// Height implied by a width under this lock.
    #[inline]
    #[must_use]
    pub fn height_for(&self, width: f64) -> f64 {
        (width - self.extra_width) / self.ratio + self.extra_height
    }

    /// Width implied by a height under this lock.
    #[inline]
    #[must_use]
    pub fn width_for(&self, height: f64) -> f64 {
        (height - self.extra_height) * self.ratio + self.extra_width
    }
}

/// Compute the unconstrained new size for a drag.
///
/// Per axis, `delta = (end - start) * resize_ratio / scale`. A handle moving
/// the right edge adds the horizontal delta to the width; one moving the
/// left edge subtracts it (dragging the left handle leftward grows the
/// region). Bottom/top are symmetric on the height. Axes the direction does
/// not touch keep their original value, unless an aspect lock derives them
/// from the driven axis.
#[must_use]
pub fn raw_size(
    direction: Direction,
    start: Point,
    end: Point,
    original: (f64, f64),
    scale: f64,
    resize_ratio: f64,
    aspect: Option<AspectLock>,
) -> (f64, f64) {
    let (original_width, original_height) = original;
    let (dx, dy) = end.delta(start);
    let dx = dx * resize_ratio / scale;
    let dy = dy * resize_ratio / scale;

    let mut width = original_width;
    let mut height = original_height;

    // Edge order matches precedence on corners: under a lock, the vertical
    // edge's derivation runs last and wins.
    if direction.has_right() {
        width = original_width + dx;
        if let Some(lock) = aspect {
            height = lock.height_for(width);
        }
    }
    if direction.has_left() {
        width = original_width - dx;
        if let Some(lock) = aspect {
            height = lock.height_for(width);
        }
    }
    if direction.has_bottom() {
        height = original_height + dy;
        if let Some(lock) = aspect {
            width = lock.width_for(height);
        }
    }
    if direction.has_top() {
        height = original_height - dy;
        if let Some(lock) = aspect {
            width = lock.width_for(height);
        }
    }

    (width, height)
}
