// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};

/// Smallest allowed zoom factor.
pub const MIN_SCALE: f64 = 0.1;

/// Largest allowed zoom factor.
pub const MAX_SCALE: f64 = 3.0;

// Wheel zoom policy: one notch multiplies the scale by a fixed step, and
// results landing in the hysteresis band snap to exactly 1:1 so repeated
// zooming does not jitter around the reset level.
const ZOOM_OUT_STEP: f64 = 0.9;
const ZOOM_IN_STEP: f64 = 1.1;
const SNAP_BAND_LOWER: f64 = 0.95;
const SNAP_BAND_UPPER: f64 = 1.05;

/// Pan+zoom camera over the board's world plane.
///
/// `BoardViewport` tracks a uniform zoom factor and a world-space offset (the
/// world point currently at the view origin), with the mapping
/// `world = view / scale + offset`. Cached affines convert in both
/// directions.
///
/// Object geometry is expected to stay in world space; the viewport is the
/// only place where pan/zoom state lives, so navigating never touches stored
/// objects.
#[derive(Clone, Debug)]
pub struct BoardViewport {
    scale: f64,
    offset: Vec2,
    last_mouse_position: Option<Point>,
    world_to_view: Affine,
    view_to_world: Affine,
}

impl Default for BoardViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardViewport {
    /// Creates a viewport at 1:1 zoom with the world origin at the view origin.
    #[must_use]
    pub fn new() -> Self {
        let mut viewport = Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            last_mouse_position: None,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
        };
        viewport.rebuild_transforms();
        viewport
    }

    /// Returns the current zoom factor, in `[MIN_SCALE, MAX_SCALE]`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the world point currently at the view origin.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the view-space cursor position of the most recent wheel zoom.
    ///
    /// Tracked so that callers can anchor zoom-dependent work (for example a
    /// zoom indicator) on the position the user last zoomed around.
    #[must_use]
    pub fn last_mouse_position(&self) -> Option<Point> {
        self.last_mouse_position
    }

    /// Applies one wheel notch of zoom anchored at `cursor` (view space).
    ///
    /// A positive `delta_y` (scrolling down) zooms out by 10%, a negative one
    /// zooms in by 10%. The result is clamped to `[MIN_SCALE, MAX_SCALE]` and
    /// snapped to exactly `1.0` when it lands strictly inside the
    /// `(0.95, 1.05)` band.
    ///
    /// The offset is then recomputed so the world point under the cursor
    /// before the zoom is still under the cursor after it.
    pub fn wheel_zoom(&mut self, cursor: Point, delta_y: f64) {
        let step = if delta_y > 0.0 {
            ZOOM_OUT_STEP
        } else {
            ZOOM_IN_STEP
        };
        let mut new_scale = self.scale * step;

        if new_scale < MIN_SCALE {
            new_scale = MIN_SCALE;
        } else if new_scale > MAX_SCALE {
            new_scale = MAX_SCALE;
        } else if new_scale > SNAP_BAND_LOWER && new_scale < SNAP_BAND_UPPER {
            new_scale = 1.0;
        }

        // Keep the world point under the cursor fixed across the change.
        let world = cursor.to_vec2() / self.scale + self.offset;
        self.offset = world - cursor.to_vec2() / new_scale;
        self.scale = new_scale;
        self.last_mouse_position = Some(cursor);
        self.rebuild_transforms();
    }

    /// Pans the view by a pointer delta in view space.
    ///
    /// Dragging the background moves the view with the pointer: the offset
    /// moves by the inverse of the delta, divided by the scale since the
    /// offset is in world units.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.offset -= delta / self.scale;
        self.rebuild_transforms();
    }

    /// Converts a view/device-space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, p: Point) -> Point {
        self.view_to_world * p
    }

    /// Converts a world-space point into view/device coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, p: Point) -> Point {
        self.world_to_view * p
    }

    /// Returns the persisted camera snapshot.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        ViewportState {
            scale: self.scale,
            offset_x: self.offset.x,
            offset_y: self.offset.y,
        }
    }

    /// Restores a previously persisted camera snapshot.
    ///
    /// The stored scale is clamped into `[MIN_SCALE, MAX_SCALE]` so a record
    /// written by a build with different limits cannot produce an unusable
    /// camera.
    pub fn restore(&mut self, state: ViewportState) {
        self.scale = state.scale.clamp(MIN_SCALE, MAX_SCALE);
        self.offset = Vec2::new(state.offset_x, state.offset_y);
        self.last_mouse_position = None;
        self.rebuild_transforms();
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> BoardViewportDebugInfo {
        BoardViewportDebugInfo {
            scale: self.scale,
            offset: self.offset,
            last_mouse_position: self.last_mouse_position,
        }
    }

    fn rebuild_transforms(&mut self) {
        // World → view: translate by -offset, then scale.
        self.world_to_view = Affine::scale(self.scale) * Affine::translate(-self.offset);
        self.view_to_world = self.world_to_view.inverse();
    }
}

/// Persisted camera snapshot: the scale and offset of a [`BoardViewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    /// Zoom factor.
    pub scale: f64,
    /// World-space X of the view origin.
    pub offset_x: f64,
    /// World-space Y of the view origin.
    pub offset_y: f64,
}

/// Debug snapshot of a [`BoardViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct BoardViewportDebugInfo {
    /// Current zoom factor.
    pub scale: f64,
    /// Current world-space offset.
    pub offset: Vec2,
    /// View-space cursor position of the most recent wheel zoom.
    pub last_mouse_position: Option<Point>,
}
