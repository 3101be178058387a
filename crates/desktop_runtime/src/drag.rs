//! Per-window geometry: initial placement, pointer drag, and the maximize toggle.
//!
//! Geometry is local to one mounted window and never enters [`crate::model::DesktopState`]; a
//! window that is closed and reopened starts again from a fresh [`initial_position`].

use crate::model::{
    PointerPosition, ViewportSize, WindowPosition, WindowRect, COMPACT_WINDOW_GUTTER_PX,
    DOCK_RESERVED_HEIGHT_PX, FLOATING_HEIGHT_RATIO, FLOATING_WINDOW_HEIGHT, FLOATING_WINDOW_WIDTH,
};

const WIDE_BASE_X: f64 = 100.0;
const WIDE_JITTER_X: f64 = 200.0;
const BASE_Y: f64 = 50.0;
const JITTER_Y: f64 = 50.0;

/// Places a newly mounted window. `jitter` is a unit sample in `[0, 1)`; out-of-range samples
/// are clamped.
pub fn initial_position(viewport: ViewportSize, jitter: f64) -> WindowPosition {
    let jitter = if jitter.is_finite() {
        jitter.clamp(0.0, 1.0)
    } else {
        0.5
    };
    let x = if viewport.is_compact() {
        COMPACT_WINDOW_GUTTER_PX
    } else {
        (WIDE_BASE_X + jitter * WIDE_JITTER_X).round() as i32
    };
    let y = (BASE_Y + jitter * JITTER_Y).round() as i32;
    WindowPosition::new(x, y)
}

/// Width and height of a floating (non-maximized) window.
pub fn floating_size(viewport: ViewportSize) -> (i32, i32) {
    let max_height = (f64::from(viewport.height) * FLOATING_HEIGHT_RATIO).floor() as i32;
    if viewport.is_compact() {
        (
            (viewport.width - 2 * COMPACT_WINDOW_GUTTER_PX).max(0),
            max_height.max(0),
        )
    } else {
        (FLOATING_WINDOW_WIDTH, FLOATING_WINDOW_HEIGHT.min(max_height).max(0))
    }
}

/// Bounds of a maximized window: the whole viewport above the dock strip.
pub fn maximized_rect(viewport: ViewportSize) -> WindowRect {
    WindowRect {
        x: 0,
        y: 0,
        w: viewport.width.max(0),
        h: (viewport.height - DOCK_RESERVED_HEIGHT_PX).max(0),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragAnchor {
    pub pointer: PointerPosition,
    pub origin: WindowPosition,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragAnchor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    /// Stored floating position, kept while maximized so restore returns here.
    pub position: WindowPosition,
    pub phase: DragPhase,
    pub maximized: bool,
}

impl WindowGeometry {
    pub fn new(position: WindowPosition) -> Self {
        Self {
            position,
            phase: DragPhase::Idle,
            maximized: false,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Anchors a drag at `pointer`. Restarting an active drag re-anchors it.
    pub fn begin_drag(&mut self, pointer: PointerPosition) {
        self.phase = DragPhase::Dragging(DragAnchor {
            pointer,
            origin: self.position,
        });
    }

    /// Applies a pointer move. Returns `true` when the stored position changed.
    ///
    /// Moves without an active drag, and moves while maximized, are ignored.
    pub fn drag_to(&mut self, pointer: PointerPosition) -> bool {
        let DragPhase::Dragging(anchor) = self.phase else {
            return false;
        };
        if self.maximized {
            return false;
        }
        let next = WindowPosition::new(
            anchor.origin.x + (pointer.x - anchor.pointer.x),
            (anchor.origin.y + (pointer.y - anchor.pointer.y)).max(0),
        );
        if next == self.position {
            return false;
        }
        self.position = next;
        true
    }

    /// Ends any active drag. Returns `true` when a drag was in progress.
    pub fn end_drag(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.phase = DragPhase::Idle;
        was_dragging
    }

    pub fn toggle_maximized(&mut self) {
        self.maximized = !self.maximized;
    }

    /// On-screen bounds for the current viewport.
    pub fn rendered_rect(&self, viewport: ViewportSize) -> WindowRect {
        if self.maximized {
            return maximized_rect(viewport);
        }
        let (w, h) = floating_size(viewport);
        WindowRect {
            x: self.position.x,
            y: self.position.y,
            w,
            h,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const WIDE: ViewportSize = ViewportSize::new(1280, 800);
    const NARROW: ViewportSize = ViewportSize::new(390, 844);

    #[test]
    fn initial_position_depends_on_width_and_jitter() {
        assert_eq!(initial_position(WIDE, 0.0), WindowPosition::new(100, 50));
        assert_eq!(initial_position(WIDE, 0.5), WindowPosition::new(200, 75));
        assert_eq!(initial_position(NARROW, 0.5), WindowPosition::new(10, 75));
        assert_eq!(initial_position(WIDE, 7.0), WindowPosition::new(300, 100));
        assert_eq!(initial_position(WIDE, f64::NAN), WindowPosition::new(200, 75));
    }

    #[test]
    fn floating_size_respects_height_ratio() {
        assert_eq!(floating_size(WIDE), (600, 450));
        assert_eq!(floating_size(ViewportSize::new(1280, 600)), (600, 420));
        assert_eq!(floating_size(NARROW), (370, 590));
    }

    #[test]
    fn drag_moves_by_pointer_delta_and_clamps_top_edge() {
        let mut geometry = WindowGeometry::new(WindowPosition::new(120, 5));
        geometry.begin_drag(PointerPosition::new(400, 300));

        assert!(geometry.drag_to(PointerPosition::new(430, 290)));
        assert_eq!(geometry.position, WindowPosition::new(150, 0));

        geometry.drag_to(PointerPosition::new(380, 320));
        assert_eq!(geometry.position, WindowPosition::new(100, 25));

        assert!(geometry.end_drag());
        assert!(!geometry.drag_to(PointerPosition::new(0, 0)));
        assert_eq!(geometry.position, WindowPosition::new(100, 25));
    }

    #[test]
    fn moves_without_a_drag_are_ignored() {
        let mut geometry = WindowGeometry::new(WindowPosition::new(40, 40));
        assert!(!geometry.drag_to(PointerPosition::new(90, 90)));
        assert!(!geometry.end_drag());
        assert_eq!(geometry.position, WindowPosition::new(40, 40));
    }

    #[test]
    fn maximize_mid_drag_freezes_bounds_and_restore_returns_home() {
        let start = WindowPosition::new(180, 60);
        let mut geometry = WindowGeometry::new(start);
        geometry.begin_drag(PointerPosition::new(200, 70));
        geometry.toggle_maximized();

        assert!(!geometry.drag_to(PointerPosition::new(600, 400)));
        assert_eq!(geometry.rendered_rect(WIDE), maximized_rect(WIDE));
        assert_eq!(maximized_rect(WIDE).h, 720);

        geometry.end_drag();
        geometry.toggle_maximized();
        assert_eq!(geometry.position, start);
        assert_eq!(
            geometry.rendered_rect(WIDE),
            WindowRect {
                x: 180,
                y: 60,
                w: 600,
                h: 450
            }
        );
    }
}
