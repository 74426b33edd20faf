#![forbid(unsafe_code)]

//! Core primitives for the sizegrip resize engine.
//!
//! # Role in sizegrip
//! `sizegrip-core` is the leaf crate: it owns the pixel-space geometry types,
//! the eight-way handle direction model, the size-unit model and converter,
//! and the normalized pointer events the engine consumes.
//!
//! # Primary responsibilities
//! - **Geometry**: `Rect`, `Point`, and `Viewport` in f64 pixel space.
//! - **Direction**: the eight resize handles and their edge decomposition.
//! - **Units**: `Dimension` (`px`/`%`/`vw`/`vh`/`auto`) with pure, repeatable
//!   pixel resolution and inverse re-expression.
//! - **Pointer events**: mouse and touch input merged into one event type.
//!
//! # How it fits in the system
//! The engine (`sizegrip-engine`) consumes these types to turn pointer motion
//! into constrained sizes. Nothing in this crate performs I/O or holds state
//! across calls.

pub mod direction;
pub mod geometry;
pub mod pointer;
pub mod unit;

pub use direction::{Direction, Edges};
pub use geometry::{Point, Rect, Viewport};
pub use pointer::{PointerButton, PointerEvent, PointerKind};
pub use unit::{Dimension, ParseDimensionError, Size};
