#![forbid(unsafe_code)]

//! Resize-geometry and drag-session engine.
//!
//! # Role in sizegrip
//! `sizegrip-engine` turns low-level pointer motion into a constrained
//! width/height pair and drives the start/move/end lifecycle of one resize
//! gesture. The presentation layer renders handles and forwards pointer
//! events; the platform supplies frame scheduling, element measurement, and
//! cursor access through the [`ResizeHost`] trait.
//!
//! # Pipeline
//! pointer-down → [`BoundarySnapshot`] captured → per-frame:
//! [`calculator::raw_size`] → [`constraints::resolve`] → unit re-expression →
//! move notification → pointer-up → end notification.
//!
//! # Concurrency model
//! Single-threaded and cooperative: the engine is re-entered once per
//! dispatched pointer event and once per frame callback, and holds no running
//! computation in between. Motion events are coalesced latest-wins to one
//! recompute per frame.

pub mod bounds;
pub mod calculator;
pub mod config;
pub mod constraints;
pub mod session;
pub mod subscription;

pub use bounds::{BoundarySnapshot, Bounds, FlexAxis, Measure};
pub use calculator::AspectLock;
pub use config::{AspectRatio, ResizeConfig};
pub use session::{ResizeController, ResizeHost};
pub use subscription::{FrameId, SubId};
