#![forbid(unsafe_code)]

//! Normalized pointer events.
//!
//! Mouse and single-touch input are merged into one [`PointerEvent`] type
//! before they reach the engine: a touch contact maps to the primary button
//! and its first touch point supplies the coordinates. The engine never sees
//! the platform's raw event objects.

use crate::geometry::Point;

/// Which button produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PointerButton {
    /// Left mouse button or any touch contact.
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Auxiliary,
}

/// The kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum PointerKind {
    /// Button pressed or touch began.
    Down(PointerButton),
    /// Pointer moved while captured.
    Move,
    /// Button released or touch ended.
    Up,
}

/// A normalized pointer event in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    /// Horizontal position (clientX).
    pub x: f64,
    /// Vertical position (clientY).
    pub y: f64,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerKind, x: f64, y: f64) -> Self {
        Self { kind, x, y }
    }

    /// A primary-button press at the given position.
    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Down(PointerButton::Primary), x, y)
    }

    /// A move event at the given position.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    /// A release event at the given position.
    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    /// The event position as a point.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether this is a press that may start a resize gesture.
    ///
    /// Only the primary button qualifies; a secondary-button press must
    /// never start a session.
    #[must_use]
    pub const fn is_primary_down(&self) -> bool {
        matches!(self.kind, PointerKind::Down(PointerButton::Primary))
    }
}
