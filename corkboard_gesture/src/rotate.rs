// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotate state: spin an object about its own center.
//!
//! The pivot is the shape's diagonal midpoint, recomputed from the live
//! geometry each frame. Rotation composes incrementally: every update
//! applies only the angle swept since the previous applied update, so the
//! object follows the pointer exactly and a new gesture starts from a fresh
//! reference angle with no drift carried across gestures.

use kurbo::{Point, Vec2};

use corkboard_geometry::Quad;

/// Tracks one rotate gesture over a single object.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotateGesture {
    last_pointer_angle: Option<f64>,
}

impl RotateGesture {
    /// Starts a rotation at `pointer` (world space) on an object currently
    /// at `quad`.
    ///
    /// Records the angle between the pointer and the shape's center as the
    /// reference; the object does not move until the pointer does.
    pub fn start(&mut self, pointer: Point, quad: &Quad) {
        self.last_pointer_angle = Some(pointer_angle(pointer, quad.center()));
    }

    /// Computes the rotated geometry for the current pointer position.
    ///
    /// `quad` must be the object's **live** geometry (including rotation
    /// applied by earlier updates of this gesture); the increment since the
    /// last update is applied on top of it. Returns `None` while no rotation
    /// is active.
    #[must_use]
    pub fn update(&mut self, pointer: Point, quad: &Quad) -> Option<Quad> {
        let last = self.last_pointer_angle?;
        let center = quad.center();
        let angle = pointer_angle(pointer, center);
        self.last_pointer_angle = Some(angle);

        let rot = Vec2::from_angle(angle - last);
        Some(quad.rotate_about(center, rot.x, rot.y))
    }

    /// Ends the rotation and resets state.
    pub fn end(&mut self) {
        self.last_pointer_angle = None;
    }

    /// Returns `true` while a rotation is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_pointer_angle.is_some()
    }
}

fn pointer_angle(pointer: Point, center: Point) -> f64 {
    (pointer - center).atan2()
}
