// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize state: drag an edge or corner handle.
//!
//! The gesture records which handle was grabbed and the geometry at
//! pointer-down; each update hands the **raw** total pointer delta (never
//! grid-snapped) to [`corkboard_geometry::resize`] together with the
//! object's aspect-lock flag.

use kurbo::Point;

use corkboard_geometry::{Quad, ResizeDirection, resize};

/// Tracks one resize gesture over a single object.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResizeGesture {
    start: Option<(ResizeDirection, Point, Quad)>,
}

impl ResizeGesture {
    /// Starts a resize on the given handle at `pointer` (world space), on an
    /// object currently at `quad`.
    pub fn start(&mut self, direction: ResizeDirection, pointer: Point, quad: Quad) {
        self.start = Some((direction, pointer, quad));
    }

    /// Computes the resized geometry for the current pointer position.
    ///
    /// The total delta from the start position is applied to the geometry
    /// captured at pointer-down, so intermediate updates never accumulate
    /// rounding. Returns `None` while no resize is active.
    #[must_use]
    pub fn update(&self, pointer: Point, lock_aspect_ratio: bool) -> Option<Quad> {
        let (direction, start_pointer, start_quad) = self.start?;
        let delta = pointer - start_pointer;
        Some(resize(direction, &start_quad, delta, lock_aspect_ratio))
    }

    /// Returns the handle this gesture was started on, if active.
    #[must_use]
    pub fn direction(&self) -> Option<ResizeDirection> {
        self.start.map(|(direction, ..)| direction)
    }

    /// Ends the resize and resets state.
    pub fn end(&mut self) {
        self.start = None;
    }

    /// Returns `true` while a resize is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}
