#![forbid(unsafe_code)]

//! Size units and the pixel converter.
//!
//! A [`Dimension`] is one axis of a declared size: an absolute pixel count, a
//! percentage of a reference (normally the parent), a viewport fraction
//! (`vw`/`vh`), or `auto`. The converter is pure in both directions:
//!
//! - [`Dimension::to_pixels`] resolves a dimension against a reference size
//!   and viewport; `auto` resolves to `None` and means "no constraint".
//! - [`Dimension::from_pixels`] re-expresses a pixel quantity in the unit of
//!   an original dimension, so a region declared as `"50%"` keeps reporting
//!   percent values throughout a drag.
//!
//! # Invariants
//! 1. Both conversions are side-effect free and stable under repeated calls
//!    with identical input.
//! 2. `from_pixels(to_pixels(d), d)` round-trips for resolvable dimensions
//!    (within floating-point tolerance).
//! 3. Unrecognized strings never fail the lenient path; they parse as `Auto`.

use std::fmt;
use std::str::FromStr;

use crate::geometry::Viewport;

/// One axis of a size declaration.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Dimension {
    /// Absolute pixels (covers both bare numbers and `"...px"` strings).
    Px(f64),
    /// Percentage of the reference size.
    Percent(f64),
    /// Percentage of the viewport width.
    Vw(f64),
    /// Percentage of the viewport height.
    Vh(f64),
    /// Sized by content; carries no constraint.
    Auto,
}

impl Dimension {
    /// Resolve to absolute pixels.
    ///
    /// `reference` is the size percentages are taken against (the parent
    /// dimension on the same axis). Returns `None` for `Auto`: the caller
    /// must treat that as "no constraint".
    #[must_use]
    pub fn to_pixels(&self, reference: f64, viewport: Viewport) -> Option<f64> {
        match *self {
            Dimension::Px(px) => Some(px),
            Dimension::Percent(pct) => Some(reference * pct / 100.0),
            Dimension::Vw(pct) => Some(viewport.width * pct / 100.0),
            Dimension::Vh(pct) => Some(viewport.height * pct / 100.0),
            Dimension::Auto => None,
        }
    }

    /// Re-express a pixel quantity in the unit of `original`.
    ///
    /// An original declared in pixels (or `auto`, which has no unit to
    /// preserve) yields pixels. Percent-family units divide back out against
    /// their reference; a degenerate reference (zero or non-finite) falls
    /// back to pixels rather than producing NaN.
    #[must_use]
    pub fn from_pixels(px: f64, original: &Dimension, reference: f64, viewport: Viewport) -> Self {
        fn ratio(px: f64, base: f64) -> Option<f64> {
            (base.is_finite() && base != 0.0).then(|| px / base * 100.0)
        }

        match original {
            Dimension::Px(_) | Dimension::Auto => Dimension::Px(px),
            Dimension::Percent(_) => ratio(px, reference).map_or(Dimension::Px(px), Dimension::Percent),
            Dimension::Vw(_) => ratio(px, viewport.width).map_or(Dimension::Px(px), Dimension::Vw),
            Dimension::Vh(_) => ratio(px, viewport.height).map_or(Dimension::Px(px), Dimension::Vh),
        }
    }

    /// Lenient parse: unrecognized or non-numeric strings become `Auto`
    /// (no constraint) instead of an error.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Self {
        input.parse().unwrap_or(Dimension::Auto)
    }

    /// Whether this dimension constrains anything.
    #[inline]
    #[must_use]
    pub const fn is_auto(&self) -> bool {
        matches!(self, Dimension::Auto)
    }
}

impl From<f64> for Dimension {
    fn from(px: f64) -> Self {
        Dimension::Px(px)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Dimension::Px(px) => write!(f, "{px}px"),
            Dimension::Percent(pct) => write!(f, "{pct}%"),
            Dimension::Vw(pct) => write!(f, "{pct}vw"),
            Dimension::Vh(pct) => write!(f, "{pct}vh"),
            Dimension::Auto => f.write_str("auto"),
        }
    }
}

/// Error from the strict [`FromStr`] path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDimensionError {
    input: String,
}

impl ParseDimensionError {
    /// The rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseDimensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized size value {:?}", self.input)
    }
}

impl std::error::Error for ParseDimensionError {}

impl FromStr for Dimension {
    type Err = ParseDimensionError;

    /// Strict parse. Suffixes are matched case-sensitively on the tail, so
    /// `"50%"`, `"10vw"`, `"200px"`, bare numbers, and `"auto"` are accepted;
    /// anything else is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseDimensionError {
            input: s.to_owned(),
        };
        let trimmed = s.trim();
        if trimmed == "auto" {
            return Ok(Dimension::Auto);
        }
        let (magnitude, unit): (&str, fn(f64) -> Dimension) =
            if let Some(rest) = trimmed.strip_suffix("px") {
                (rest, Dimension::Px)
            } else if let Some(rest) = trimmed.strip_suffix('%') {
                (rest, Dimension::Percent)
            } else if let Some(rest) = trimmed.strip_suffix("vw") {
                (rest, Dimension::Vw)
            } else if let Some(rest) = trimmed.strip_suffix("vh") {
                (rest, Dimension::Vh)
            } else {
                (trimmed, Dimension::Px)
            };
        magnitude
            .trim()
            .parse::<f64>()
            .map(unit)
            .map_err(|_| err())
    }
}

/// A two-axis size declaration.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: Dimension,
    pub height: Dimension,
}

impl Size {
    /// Create a new size.
    #[must_use]
    pub const fn new(width: Dimension, height: Dimension) -> Self {
        Self { width, height }
    }

    /// The `auto x auto` size, the default before anything is declared.
    #[must_use]
    pub const fn auto() -> Self {
        Self::new(Dimension::Auto, Dimension::Auto)
    }

    /// A size declared in absolute pixels on both axes.
    #[must_use]
    pub const fn px(width: f64, height: f64) -> Self {
        Self::new(Dimension::Px(width), Dimension::Px(height))
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::auto()
    }
}
