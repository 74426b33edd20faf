#![forbid(unsafe_code)]

//! Effective min/max windows and clamping.
//!
//! The resolver combines three constraint sources into one per-axis window:
//!
//! 1. declared min/max limits, resolved from their unit against the parent
//!    and viewport;
//! 2. a boundary-derived max from the active bounds mode and the dragged
//!    edge (remaining space toward the boundary in the direction of growth);
//! 3. under an aspect lock, the other axis's window mapped through the
//!    ratio, so a request that would violate one axis's limit is capped by
//!    the ratio-linked limit instead.
//!
//! Windows are computed in full before any clamping; clamping is idempotent.

use crate::bounds::BoundarySnapshot;
use crate::calculator::AspectLock;
use crate::config::ResizeConfig;
use sizegrip_core::{Dimension, Direction, Viewport};

/// A per-axis pixel window. Absent ends constrain nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Window {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Window {
    /// Clamp a value into the window. When min and max conflict, min wins.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let mut out = value;
        if let Some(max) = self.max {
            out = out.min(max);
        }
        if let Some(min) = self.min {
            out = out.max(min);
        }
        out
    }

    fn tighten_max(&mut self, candidate: f64) {
        self.max = Some(self.max.map_or(candidate, |max| max.min(candidate)));
    }

    fn raise_min(&mut self, candidate: f64) {
        self.min = Some(self.min.map_or(candidate, |min| min.max(candidate)));
    }
}

fn declared(limit: Option<&Dimension>, reference: f64, viewport: Viewport) -> Option<f64> {
    limit.and_then(|dim| dim.to_pixels(reference, viewport))
}

/// Boundary-derived width max: space left toward the boundary in the
/// direction the width grows. Dragging the left handle fixes the right edge,
/// so growth runs from it to the boundary's left edge; every other case
/// grows rightward from the target's left edge.
fn boundary_max_width(
    direction: Direction,
    config: &ResizeConfig,
    snapshot: &BoundarySnapshot,
) -> Option<f64> {
    let rect = snapshot.boundary_rect(config.bounds)?;
    let max = if config.bounds_by_direction && direction.has_left() {
        snapshot.target.right() - rect.left()
    } else {
        rect.right() - snapshot.target.left()
    };
    (max.is_finite() && max > 0.0).then_some(max)
}

/// Boundary-derived height max; symmetric to [`boundary_max_width`] with the
/// top edge in the near-edge role.
fn boundary_max_height(
    direction: Direction,
    config: &ResizeConfig,
    snapshot: &BoundarySnapshot,
) -> Option<f64> {
    let rect = snapshot.boundary_rect(config.bounds)?;
    let max = if config.bounds_by_direction && direction.has_top() {
        snapshot.target.bottom() - rect.top()
    } else {
        rect.bottom() - snapshot.target.top()
    };
    (max.is_finite() && max > 0.0).then_some(max)
}

/// Compute the final per-axis windows for one frame.
#[must_use]
pub fn effective_windows(
    direction: Direction,
    config: &ResizeConfig,
    snapshot: &BoundarySnapshot,
    aspect: Option<AspectLock>,
) -> (Window, Window) {
    let viewport = snapshot.viewport;
    let mut width = Window {
        min: declared(config.min_width.as_ref(), snapshot.parent_width(), viewport),
        max: declared(config.max_width.as_ref(), snapshot.parent_width(), viewport),
    };
    let mut height = Window {
        min: declared(config.min_height.as_ref(), snapshot.parent_height(), viewport),
        max: declared(config.max_height.as_ref(), snapshot.parent_height(), viewport),
    };

    // A declared max tighter than the boundary wins; the boundary only ever
    // tightens.
    if let Some(max) = boundary_max_width(direction, config, snapshot) {
        width.tighten_max(max);
    }
    if let Some(max) = boundary_max_height(direction, config, snapshot) {
        height.tighten_max(max);
    }

    if let Some(lock) = aspect {
        // Intersect each axis with the other axis's window mapped through
        // the ratio, using the pre-intersection windows of both axes.
        let (base_width, base_height) = (width, height);
        if let Some(min) = base_height.min {
            width.raise_min(lock.width_for(min));
        }
        if let Some(max) = base_height.max {
            width.tighten_max(lock.width_for(max));
        }
        if let Some(min) = base_width.min {
            height.raise_min(lock.height_for(min));
        }
        if let Some(max) = base_width.max {
            height.tighten_max(lock.height_for(max));
        }
    }

    (width, height)
}

/// Clamp a raw size into the effective windows, re-deriving the locked
/// dimension from the clamped driving axis when an aspect lock is active.
#[must_use]
pub fn resolve(
    direction: Direction,
    raw: (f64, f64),
    config: &ResizeConfig,
    snapshot: &BoundarySnapshot,
    aspect: Option<AspectLock>,
) -> (f64, f64) {
    let (width_window, height_window) = effective_windows(direction, config, snapshot, aspect);
    let mut width = width_window.clamp(raw.0);
    let mut height = height_window.clamp(raw.1);

    if let Some(lock) = aspect {
        if direction.affects_width() {
            height = lock.height_for(width);
        } else if direction.affects_height() {
            width = lock.width_for(height);
        }
    }

    (width, height)
}

#[cfg(test)]
mod tests {
    use super::{Window, effective_windows, resolve};
    use crate::bounds::{BoundarySnapshot, Bounds};
    use crate::calculator::AspectLock;
    use crate::config::ResizeConfig;
    use sizegrip_core::{Dimension, Direction, Rect, Viewport};

    fn snapshot(target: Rect, parent: Rect) -> BoundarySnapshot {
        BoundarySnapshot {
            target,
            parent: Some(parent),
            parent_content_width: None,
            bounds_rect: None,
            viewport: Viewport::new(1000.0, 800.0),
            flex_axis: None,
        }
    }

    fn parent_bounds() -> ResizeConfig {
        ResizeConfig {
            bounds: Bounds::Parent,
            ..Default::default()
        }
    }

    #[test]
    fn window_clamp_is_idempotent() {
        let window = Window {
            min: Some(100.0),
            max: Some(300.0),
        };
        for value in [-50.0, 100.0, 215.0, 300.0, 900.0] {
            let once = window.clamp(value);
            assert_eq!(window.clamp(once), once);
        }
    }

    #[test]
    fn window_min_wins_on_conflict() {
        let window = Window {
            min: Some(200.0),
            max: Some(100.0),
        };
        assert_eq!(window.clamp(150.0), 200.0);
    }

    #[test]
    fn declared_limits_resolve_units() {
        let snap = snapshot(Rect::new(0.0, 0.0, 100.0, 100.0), Rect::from_size(500.0, 400.0));
        let config = ResizeConfig {
            min_width: Some(Dimension::Percent(10.0)),
            max_width: Some(Dimension::Vw(40.0)),
            ..Default::default()
        };
        let (width, _) = effective_windows(Direction::Right, &config, &snap, None);
        assert_eq!(width.min, Some(50.0)); // 10% of parent 500
        assert_eq!(width.max, Some(400.0)); // 40vw of viewport 1000
    }

    #[test]
    fn auto_limits_constrain_nothing() {
        let snap = snapshot(Rect::from_size(100.0, 100.0), Rect::from_size(500.0, 400.0));
        let config = ResizeConfig {
            min_width: Some(Dimension::Auto),
            ..Default::default()
        };
        let (width, _) = effective_windows(Direction::Right, &config, &snap, None);
        assert_eq!(width.min, None);
    }

    #[test]
    fn boundary_max_from_far_edge() {
        // Parent width 500, target's left edge 50px inside the parent's
        // left edge, dragging the right handle: max width 450.
        let snap = snapshot(Rect::new(50.0, 0.0, 200.0, 100.0), Rect::from_size(500.0, 400.0));
        let (width, _) = effective_windows(Direction::Right, &parent_bounds(), &snap, None);
        assert_eq!(width.max, Some(450.0));
    }

    #[test]
    fn boundary_max_from_near_edge_when_dragging_left() {
        // Left handle: the right edge (at 250) is fixed; growth runs to the
        // parent's left edge at 0.
        let snap = snapshot(Rect::new(50.0, 0.0, 200.0, 100.0), Rect::from_size(500.0, 400.0));
        let (width, _) = effective_windows(Direction::Left, &parent_bounds(), &snap, None);
        assert_eq!(width.max, Some(250.0));
    }

    #[test]
    fn simplified_rule_ignores_dragged_edge() {
        let snap = snapshot(Rect::new(50.0, 0.0, 200.0, 100.0), Rect::from_size(500.0, 400.0));
        let config = ResizeConfig {
            bounds_by_direction: false,
            ..parent_bounds()
        };
        let (width, _) = effective_windows(Direction::Left, &config, &snap, None);
        assert_eq!(width.max, Some(450.0));
    }

    #[test]
    fn declared_max_tighter_than_boundary_wins() {
        let snap = snapshot(Rect::new(50.0, 0.0, 200.0, 100.0), Rect::from_size(500.0, 400.0));
        let config = ResizeConfig {
            max_width: Some(Dimension::Px(300.0)),
            ..parent_bounds()
        };
        let (width, _) = effective_windows(Direction::Right, &config, &snap, None);
        assert_eq!(width.max, Some(300.0));
    }

    #[test]
    fn boundary_tighter_than_declared_wins() {
        let snap = snapshot(Rect::new(400.0, 0.0, 50.0, 50.0), Rect::from_size(500.0, 400.0));
        let config = ResizeConfig {
            max_width: Some(Dimension::Px(900.0)),
            ..parent_bounds()
        };
        let (width, _) = effective_windows(Direction::Right, &config, &snap, None);
        assert_eq!(width.max, Some(100.0));
    }

    #[test]
    fn window_bounds_use_viewport() {
        let snap = snapshot(Rect::new(600.0, 500.0, 100.0, 100.0), Rect::from_size(2000.0, 2000.0));
        let config = ResizeConfig {
            bounds: Bounds::Window,
            ..Default::default()
        };
        let (width, height) = effective_windows(Direction::BottomRight, &config, &snap, None);
        assert_eq!(width.max, Some(400.0)); // viewport 1000 - left 600
        assert_eq!(height.max, Some(300.0)); // viewport 800 - top 500
    }

    #[test]
    fn ratio_links_the_axis_windows() {
        let snap = snapshot(Rect::from_size(200.0, 100.0), Rect::from_size(5000.0, 5000.0));
        let config = ResizeConfig {
            max_height: Some(Dimension::Px(150.0)),
            ..Default::default()
        };
        let lock = AspectLock::checked(2.0, 0.0, 0.0);
        let (width, height) = effective_windows(Direction::Right, &config, &snap, lock);
        // maxHeight 150 implies maxWidth 300 through the 2:1 ratio.
        assert_eq!(width.max, Some(300.0));
        assert_eq!(height.max, Some(150.0));
    }

    #[test]
    fn resolve_caps_ratio_locked_drag_by_other_axis() {
        let snap = snapshot(Rect::from_size(200.0, 100.0), Rect::from_size(5000.0, 5000.0));
        let config = ResizeConfig {
            max_height: Some(Dimension::Px(150.0)),
            ..Default::default()
        };
        let lock = AspectLock::checked(2.0, 0.0, 0.0);
        // A width request of 800 would imply height 400; both are capped.
        let (width, height) = resolve(Direction::Right, (800.0, 400.0), &config, &snap, lock);
        assert_eq!(width, 300.0);
        assert_eq!(height, 150.0);
    }

    #[test]
    fn resolve_rederives_locked_height_from_clamped_width() {
        let snap = snapshot(Rect::from_size(200.0, 100.0), Rect::from_size(5000.0, 5000.0));
        let config = ResizeConfig {
            max_width: Some(Dimension::Px(260.0)),
            ..Default::default()
        };
        let lock = AspectLock::checked(2.0, 0.0, 0.0);
        let (width, height) = resolve(Direction::Right, (320.0, 160.0), &config, &snap, lock);
        assert_eq!(width, 260.0);
        assert_eq!(height, 130.0);
    }

    #[test]
    fn resolve_without_constraints_passes_through() {
        let snap = snapshot(Rect::from_size(200.0, 100.0), Rect::from_size(500.0, 400.0));
        let config = ResizeConfig::default();
        assert_eq!(
            resolve(Direction::BottomRight, (317.5, 42.25), &config, &snap, None),
            (317.5, 42.25)
        );
    }

    #[test]
    fn resolve_is_idempotent() {
        let snap = snapshot(Rect::new(50.0, 40.0, 200.0, 100.0), Rect::from_size(500.0, 400.0));
        let config = ResizeConfig {
            min_width: Some(Dimension::Px(80.0)),
            min_height: Some(Dimension::Px(60.0)),
            ..parent_bounds()
        };
        let first = resolve(Direction::BottomRight, (900.0, 900.0), &config, &snap, None);
        let second = resolve(Direction::BottomRight, first, &config, &snap, None);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_size_boundary_is_a_no_op() {
        let mut snap = snapshot(Rect::new(50.0, 0.0, 200.0, 100.0), Rect::from_size(500.0, 400.0));
        snap.parent = None;
        let (width, height) = effective_windows(Direction::Right, &parent_bounds(), &snap, None);
        assert_eq!(width.max, None);
        assert_eq!(height.max, None);
    }
}
