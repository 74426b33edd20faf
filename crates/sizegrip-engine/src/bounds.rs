#![forbid(unsafe_code)]

//! Boundary modes and the per-gesture geometry snapshot.
//!
//! [`BoundarySnapshot::capture`] reads every piece of element geometry the
//! constraint resolver needs, once, at gesture start. The snapshot is frozen
//! for the whole session: re-measuring mid-drag would feed the element's own
//! size changes back into its boundary and oscillate.
//!
//! All measurements come through the [`Measure`] trait and every one of them
//! may fail; a missing parent or detached element degrades to `None` (a
//! no-op boundary), never to a failed session.

use sizegrip_core::{Rect, Viewport};

/// What the resized region is constrained against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Bounds {
    /// No boundary constraint.
    #[default]
    None,
    /// The parent element's content box.
    Parent,
    /// The viewport.
    Window,
    /// An explicitly configured reference element.
    Element,
}

/// Main axis of a flex parent, kept for expressing the committed size as a
/// flex-basis hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum FlexAxis {
    Row,
    Column,
}

/// Element geometry queries supplied by the host.
///
/// Every method may return `None` when the underlying element cannot be
/// measured. `parent_content_width` exists because a flex parent's border-box
/// width can include space the region may not grow into; hosts whose layout
/// engine distinguishes the two should answer with the true content width
/// (a DOM host may use a probe element, a retained-layout host can read its
/// layout tree).
pub trait Measure {
    /// Bounding rectangle of the resizable region.
    fn target_rect(&self) -> Option<Rect>;

    /// Client (content-box) size of the resizable region.
    fn target_client_size(&self) -> Option<(f64, f64)>;

    /// Bounding rectangle of the parent element.
    fn parent_rect(&self) -> Option<Rect>;

    /// Content width of the parent, excluding flex growth of siblings.
    fn parent_content_width(&self) -> Option<f64>;

    /// Bounding rectangle of the configured reference element, if any.
    fn bounds_rect(&self) -> Option<Rect>;

    /// Main axis of the parent when it is a flex container.
    fn flex_axis(&self) -> Option<FlexAxis>;

    /// Current viewport size.
    fn viewport(&self) -> Viewport;
}

/// Immutable per-gesture record of the geometry the resolver reads.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundarySnapshot {
    /// The resizable region's rect; zero-sized when unmeasurable.
    pub target: Rect,
    pub parent: Option<Rect>,
    pub parent_content_width: Option<f64>,
    pub bounds_rect: Option<Rect>,
    pub viewport: Viewport,
    pub flex_axis: Option<FlexAxis>,
}

impl BoundarySnapshot {
    /// Capture all frame-static geometry. Called exactly once per gesture,
    /// at `Active` entry.
    #[must_use]
    pub fn capture(measure: &impl Measure) -> Self {
        Self {
            target: measure.target_rect().unwrap_or_default(),
            parent: measure.parent_rect(),
            parent_content_width: measure.parent_content_width(),
            bounds_rect: measure.bounds_rect(),
            viewport: measure.viewport(),
            flex_axis: measure.flex_axis(),
        }
    }

    /// Reference size for resolving percent widths: the parent's content
    /// width when known, else its rect width, else zero.
    #[must_use]
    pub fn parent_width(&self) -> f64 {
        self.parent_content_width
            .or(self.parent.map(|r| r.width))
            .unwrap_or(0.0)
    }

    /// Reference size for resolving percent heights.
    #[must_use]
    pub fn parent_height(&self) -> f64 {
        self.parent.map(|r| r.height).unwrap_or(0.0)
    }

    /// The rectangle limiting growth under the given bounds mode, if one is
    /// available.
    #[must_use]
    pub fn boundary_rect(&self, bounds: Bounds) -> Option<Rect> {
        match bounds {
            Bounds::None => None,
            Bounds::Parent => self.parent,
            Bounds::Window => Some(self.viewport.as_rect()),
            Bounds::Element => self.bounds_rect,
        }
    }
}
