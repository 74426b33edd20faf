#![forbid(unsafe_code)]

//! The drag-session state machine.
//!
//! [`ResizeController`] orchestrates one resize gesture at a time:
//! `Idle → Active → Idle`. On a qualifying pointer-down it snapshots
//! boundary geometry, saves the host cursor, subscribes to motion events,
//! and emits the start notification (which may veto the session). Motion
//! events are coalesced latest-wins to one recompute per animation frame.
//! The terminal event restores the cursor, releases the motion subscription
//! exactly once, commits the preview cache if preview mode deferred commits,
//! and emits the end notification.
//!
//! # Invariants
//!
//! 1. At most one session is Active per controller; a second pointer-down
//!    while Active is ignored.
//! 2. A secondary-button press never starts a session; terminal events are
//!    not filtered by button, so a stray mid-gesture right click still
//!    converges to Idle on the next real pointer-up.
//! 3. Every exit path (natural end, veto, forced teardown) restores the host
//!    cursor and leaves no pending frame or live subscription behind.
//! 4. The unit of each axis is fixed at session start: every size emitted
//!    during the session is expressed in that unit.
//!
//! # Failure Modes
//!
//! - Motion or frame callbacks with no Active session are no-ops.
//! - A frame callback whose token was superseded by a newer motion event is
//!   stale and ignored.
//! - An unmeasurable target degrades to a zero starting size; the gesture
//!    still runs and constraints still apply.

use tracing::{debug, trace};

use crate::bounds::{BoundarySnapshot, FlexAxis, Measure};
use crate::calculator::{AspectLock, raw_size};
use crate::config::{AspectRatio, ResizeConfig};
use crate::constraints::resolve;
use crate::subscription::{FrameId, MotionSubscription, SubId};
use sizegrip_core::{Dimension, Direction, Point, PointerEvent, Size};

/// Host environment for the engine: platform services, element measurement,
/// and the resize lifecycle notifications.
///
/// The notification defaults are no-ops (`on_resize_start` allows the
/// session), so a host only overrides what it observes.
pub trait ResizeHost: Measure {
    /// Schedule an animation-frame callback; the host must later invoke
    /// [`ResizeController::frame`] with the returned token.
    fn request_frame(&mut self) -> FrameId;

    /// Cancel a scheduled frame that has not fired yet.
    fn cancel_frame(&mut self, frame: FrameId);

    /// Register the merged mouse-move/touch-move listener feeding
    /// [`ResizeController::pointer_motion`].
    fn subscribe_motion(&mut self) -> SubId;

    /// Unregister a motion listener. Called exactly once per session.
    fn unsubscribe_motion(&mut self, sub: SubId);

    /// Current global cursor style.
    fn cursor(&self) -> String;

    /// Overwrite the global cursor style.
    fn set_cursor(&mut self, cursor: &str);

    /// Write a live size to the detached preview surface (preview mode).
    fn preview_size(&mut self, width: f64, height: f64) {
        let _ = (width, height);
    }

    /// Gesture start. Return `false` to veto the session.
    fn on_resize_start(&mut self, size: &Size, direction: Direction, event: &PointerEvent) -> bool {
        let _ = (size, direction, event);
        true
    }

    /// One constrained size per processed frame.
    fn on_resize(&mut self, size: &Size, direction: Direction, event: &PointerEvent) {
        let _ = (size, direction, event);
    }

    /// Gesture end, with the final size.
    fn on_resize_end(&mut self, size: &Size, direction: Direction, event: &PointerEvent) {
        let _ = (size, direction, event);
    }
}

/// Per-gesture scratch state. Exists only while a session is Active;
/// constructed fresh at start, dropped at end.
#[derive(Debug)]
struct ActiveSession {
    direction: Direction,
    start: Point,
    /// Pixel client size at gesture start.
    original: (f64, f64),
    /// Units captured at start; every emitted size uses these.
    width_unit: Dimension,
    height_unit: Dimension,
    aspect: Option<AspectLock>,
    snapshot: BoundarySnapshot,
    saved_cursor: String,
    motion: MotionSubscription,
    pending_frame: Option<FrameId>,
    latest: Option<PointerEvent>,
    preview_cache: Option<Size>,
    last_size: Option<Size>,
}

/// Drag-session state machine for one resizable instance.
#[derive(Debug)]
pub struct ResizeController {
    config: ResizeConfig,
    size: Size,
    resizing: bool,
    flex_basis: Option<(FlexAxis, Dimension)>,
    session: Option<ActiveSession>,
}

impl ResizeController {
    /// Create a controller with an `auto x auto` committed size.
    #[must_use]
    pub fn new(config: ResizeConfig) -> Self {
        Self::with_size(config, Size::auto())
    }

    /// Create a controller with an explicit initial size declaration.
    #[must_use]
    pub fn with_size(config: ResizeConfig, size: Size) -> Self {
        Self {
            config,
            size,
            resizing: false,
            flex_basis: None,
            session: None,
        }
    }

    /// Current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect immediately; disabling
    /// mid-gesture freezes further frame updates.
    pub fn set_config(&mut self, config: ResizeConfig) {
        self.config = config;
    }

    /// Committed size, in the units it was declared in.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Whether a session is Active.
    #[inline]
    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.resizing
    }

    /// Flex-basis hint from the last completed gesture: the committed
    /// dimension along the parent's flex axis, when the parent is a flex
    /// container.
    #[inline]
    #[must_use]
    pub fn flex_basis(&self) -> Option<(FlexAxis, Dimension)> {
        self.flex_basis
    }

    /// Pointer-down on a handle. Returns whether a session started.
    ///
    /// Rejected while disabled, while a session is already Active, or for
    /// anything but a primary-button press. The start notification runs
    /// before any resource is acquired, so a veto leaves nothing behind.
    pub fn pointer_down<H: ResizeHost>(
        &mut self,
        host: &mut H,
        event: &PointerEvent,
        direction: Direction,
    ) -> bool {
        if self.config.disabled {
            return false;
        }
        if self.session.is_some() {
            debug!(?direction, "pointer down ignored, session already active");
            return false;
        }
        if !event.is_primary_down() {
            return false;
        }

        let size = self.size;
        if !host.on_resize_start(&size, direction, event) {
            debug!(?direction, "resize session vetoed");
            return false;
        }

        let original = host.target_client_size().unwrap_or((0.0, 0.0));
        let snapshot = BoundarySnapshot::capture(host);
        let aspect = match self.config.lock_aspect_ratio {
            AspectRatio::Off => None,
            AspectRatio::FromStart => AspectLock::checked(
                original.0 / original.1,
                self.config.extra_width,
                self.config.extra_height,
            ),
            AspectRatio::Fixed(ratio) => AspectLock::checked(
                ratio,
                self.config.extra_width,
                self.config.extra_height,
            ),
        };

        let saved_cursor = host.cursor();
        host.set_cursor(resize_cursor(direction));
        let motion = MotionSubscription::new(host.subscribe_motion());
        self.resizing = true;
        self.session = Some(ActiveSession {
            direction,
            start: event.position(),
            original,
            width_unit: size.width,
            height_unit: size.height,
            aspect,
            snapshot,
            saved_cursor,
            motion,
            pending_frame: None,
            latest: None,
            preview_cache: None,
            last_size: None,
        });
        debug!(?direction, "resize session started");
        true
    }

    /// A motion event while captured. Coalesced latest-wins: any pending
    /// frame is cancelled and a fresh one scheduled for the newest position.
    pub fn pointer_motion<H: ResizeHost>(&mut self, host: &mut H, event: &PointerEvent) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.latest = Some(*event);
        if let Some(frame) = session.pending_frame.take() {
            host.cancel_frame(frame);
        }
        session.pending_frame = Some(host.request_frame());
    }

    /// An animation-frame callback. Stale tokens (superseded by a newer
    /// motion event or an ended session) are ignored.
    pub fn frame<H: ResizeHost>(&mut self, host: &mut H, frame: FrameId) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.pending_frame != Some(frame) {
            return;
        }
        session.pending_frame = None;
        if self.config.disabled {
            return;
        }
        let Some(event) = session.latest else {
            return;
        };

        let raw = raw_size(
            session.direction,
            session.start,
            event.position(),
            session.original,
            self.config.scale,
            self.config.resize_ratio,
            session.aspect,
        );
        let (width, height) = resolve(
            session.direction,
            raw,
            &self.config,
            &session.snapshot,
            session.aspect,
        );
        let size = Size::new(
            Dimension::from_pixels(
                width,
                &session.width_unit,
                session.snapshot.parent_width(),
                session.snapshot.viewport,
            ),
            Dimension::from_pixels(
                height,
                &session.height_unit,
                session.snapshot.parent_height(),
                session.snapshot.viewport,
            ),
        );
        trace!(width, height, "frame recompute");

        host.on_resize(&size, session.direction, &event);
        if self.config.preview {
            host.preview_size(width, height);
            session.preview_cache = Some(size);
        } else {
            self.size = size;
        }
        session.last_size = Some(size);
    }

    /// The terminal event (pointer-up / touch-end). Commits, releases all
    /// session resources, and emits the end notification.
    pub fn pointer_up<H: ResizeHost>(&mut self, host: &mut H, event: &PointerEvent) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        self.release(host, &mut session);

        if let Some(cached) = session.preview_cache.take() {
            self.size = cached;
        }
        let final_size = session.last_size.unwrap_or(self.size);
        if let Some(axis) = session.snapshot.flex_axis {
            let along = match axis {
                FlexAxis::Row => final_size.width,
                FlexAxis::Column => final_size.height,
            };
            self.flex_basis = Some((axis, along));
        }
        host.on_resize_end(&final_size, session.direction, event);
        debug!(direction = ?session.direction, "resize session ended");
    }

    /// Forced teardown (owning component destroyed). Behaves as a terminal
    /// transition without a notification: no leaked frame, subscription, or
    /// cursor override is permitted.
    pub fn teardown<H: ResizeHost>(&mut self, host: &mut H) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        self.release(host, &mut session);
        debug!("resize session torn down");
    }

    /// Shared resource release for every terminal path.
    fn release<H: ResizeHost>(&mut self, host: &mut H, session: &mut ActiveSession) {
        if let Some(frame) = session.pending_frame.take() {
            host.cancel_frame(frame);
        }
        session.motion.release(|id| host.unsubscribe_motion(id));
        host.set_cursor(&session.saved_cursor);
        self.resizing = false;
    }
}

/// Grab cursor shown while a handle is dragged.
const fn resize_cursor(direction: Direction) -> &'static str {
    match direction {
        Direction::Left | Direction::Right => "ew-resize",
        Direction::Top | Direction::Bottom => "ns-resize",
        Direction::TopRight | Direction::BottomLeft => "nesw-resize",
        Direction::TopLeft | Direction::BottomRight => "nwse-resize",
    }
}
