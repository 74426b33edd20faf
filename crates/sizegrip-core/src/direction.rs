#![forbid(unsafe_code)]

//! Resize handle directions and their edge decomposition.
//!
//! A [`Direction`] names one of the eight drag handles around a resizable
//! region. Every direction decomposes into an [`Edges`] set: edge handles
//! carry one edge, corner handles carry two. The engine only ever asks two
//! questions of a direction: which edges it moves, and therefore which axes
//! it affects.

use bitflags::bitflags;

bitflags! {
    /// The edges a handle moves when dragged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        const TOP    = 0b0001;
        const RIGHT  = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT   = 0b1000;
    }
}

/// One of the eight resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}

impl Direction {
    /// All eight handles, edges first.
    pub const ALL: [Direction; 8] = [
        Direction::Top,
        Direction::Right,
        Direction::Bottom,
        Direction::Left,
        Direction::TopRight,
        Direction::BottomRight,
        Direction::BottomLeft,
        Direction::TopLeft,
    ];

    /// The set of edges this handle moves.
    #[must_use]
    pub const fn edges(self) -> Edges {
        match self {
            Direction::Top => Edges::TOP,
            Direction::Right => Edges::RIGHT,
            Direction::Bottom => Edges::BOTTOM,
            Direction::Left => Edges::LEFT,
            Direction::TopRight => Edges::TOP.union(Edges::RIGHT),
            Direction::BottomRight => Edges::BOTTOM.union(Edges::RIGHT),
            Direction::BottomLeft => Edges::BOTTOM.union(Edges::LEFT),
            Direction::TopLeft => Edges::TOP.union(Edges::LEFT),
        }
    }

    /// Whether dragging this handle moves the left edge.
    #[inline]
    #[must_use]
    pub const fn has_left(self) -> bool {
        self.edges().contains(Edges::LEFT)
    }

    /// Whether dragging this handle moves the right edge.
    #[inline]
    #[must_use]
    pub const fn has_right(self) -> bool {
        self.edges().contains(Edges::RIGHT)
    }

    /// Whether dragging this handle moves the top edge.
    #[inline]
    #[must_use]
    pub const fn has_top(self) -> bool {
        self.edges().contains(Edges::TOP)
    }

    /// Whether dragging this handle moves the bottom edge.
    #[inline]
    #[must_use]
    pub const fn has_bottom(self) -> bool {
        self.edges().contains(Edges::BOTTOM)
    }

    /// Whether horizontal pointer motion changes the width.
    #[inline]
    #[must_use]
    pub const fn affects_width(self) -> bool {
        self.edges().intersects(Edges::LEFT.union(Edges::RIGHT))
    }

    /// Whether vertical pointer motion changes the height.
    #[inline]
    #[must_use]
    pub const fn affects_height(self) -> bool {
        self.edges().intersects(Edges::TOP.union(Edges::BOTTOM))
    }

    /// Whether this is a corner handle (both axes live).
    #[inline]
    #[must_use]
    pub const fn is_corner(self) -> bool {
        self.affects_width() && self.affects_height()
    }
}
