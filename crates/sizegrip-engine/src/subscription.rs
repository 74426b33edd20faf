#![forbid(unsafe_code)]

//! Host-issued tokens and the exactly-once motion subscription handle.
//!
//! The host merges its low-level move sources (mouse-move and touch-move)
//! behind one subscription and its terminal sources (mouse-up, touch-end)
//! behind the controller's `pointer_up` entry point. The engine only tracks
//! opaque tokens: a [`SubId`] per motion subscription and a [`FrameId`] per
//! scheduled animation frame.
//!
//! Double-release and leaked subscriptions are both observable failures, so
//! [`MotionSubscription`] funnels every exit path (natural end, veto, forced
//! teardown) through one release that runs at most once.

/// Token for a registered motion subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubId(pub u64);

/// Token for a scheduled animation-frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameId(pub u64);

/// A held motion subscription with exactly-once teardown.
#[derive(Debug)]
pub(crate) struct MotionSubscription {
    id: SubId,
    released: bool,
}

impl MotionSubscription {
    pub(crate) fn new(id: SubId) -> Self {
        Self {
            id,
            released: false,
        }
    }

    /// Release via the provided unsubscribe call. Safe to call repeatedly;
    /// only the first call reaches the host.
    pub(crate) fn release(&mut self, unsubscribe: impl FnOnce(SubId)) {
        if !self.released {
            self.released = true;
            unsubscribe(self.id);
        }
    }
}
