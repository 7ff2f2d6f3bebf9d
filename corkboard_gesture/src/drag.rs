// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state: translate an object by the total pointer offset.
//!
//! The drag always works from the geometry captured at pointer-down and the
//! **total** offset since then, never from incremental deltas. Grid snapping
//! therefore snaps the accumulated offset, so an object cannot creep off the
//! grid through many small moves, and a gesture replayed with the same
//! pointer positions lands in the same place.

use kurbo::{Point, Vec2};

use corkboard_geometry::Quad;

/// Default grid pitch for snapped drags, in world units.
pub const GRID_SIZE: f64 = 20.0;

/// Tracks one drag gesture over a single object.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragGesture {
    start: Option<(Point, Quad)>,
}

impl DragGesture {
    /// Starts a drag at `pointer` (world space) on an object currently at
    /// `quad`.
    pub fn start(&mut self, pointer: Point, quad: Quad) {
        self.start = Some((pointer, quad));
    }

    /// Computes the dragged geometry for the current pointer position.
    ///
    /// The total offset from the start position is applied uniformly to all
    /// four corners, so translation preserves the shape exactly. With
    /// `grid = Some(pitch)`, each axis of the offset is rounded to the
    /// nearest multiple of `pitch` first.
    ///
    /// Returns `None` while no drag is active.
    #[must_use]
    pub fn update(&self, pointer: Point, grid: Option<f64>) -> Option<Quad> {
        let (start_pointer, start_quad) = self.start?;
        let mut delta = pointer - start_pointer;
        if let Some(pitch) = grid {
            delta = snap_to_grid(delta, pitch);
        }
        Some(start_quad.translate(delta))
    }

    /// Ends the drag and resets state.
    pub fn end(&mut self) {
        self.start = None;
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}

/// Rounds each axis of `delta` to the nearest multiple of `pitch`.
///
/// Exact halfway offsets round to the even multiple, so a pointer sitting
/// precisely between two grid lines does not oscillate with sub-ulp jitter.
/// A non-positive pitch leaves the delta unsnapped.
#[must_use]
pub fn snap_to_grid(delta: Vec2, pitch: f64) -> Vec2 {
    if pitch <= 0.0 {
        return delta;
    }
    Vec2::new(
        round_ties_even(delta.x / pitch) * pitch,
        round_ties_even(delta.y / pitch) * pitch,
    )
}

// Nearest-integer rounding with ties to even, in core-only arithmetic so the
// crate needs no math backend.
fn round_ties_even(x: f64) -> f64 {
    let rem = x % 1.0;
    let truncated = x - rem;
    let magnitude = rem.abs();
    if magnitude > 0.5 || (magnitude == 0.5 && truncated % 2.0 != 0.0) {
        truncated + rem.signum()
    } else {
        truncated
    }
}
