// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan state: drag the board background to move the viewport.
//!
//! Unlike object drags, panning is **incremental**: each update yields the
//! pointer movement since the previous update, which the caller feeds to
//! the viewport. The viewport integrates the deltas, so there is no start
//! geometry to capture.

use kurbo::{Point, Vec2};

/// Tracks one background-pan gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanGesture {
    last_pointer: Option<Point>,
}

impl PanGesture {
    /// Starts panning from `pointer` (view space).
    pub fn start(&mut self, pointer: Point) {
        self.last_pointer = Some(pointer);
    }

    /// Returns the pointer movement since the previous update.
    ///
    /// Returns `None` while no pan is active.
    #[must_use]
    pub fn update(&mut self, pointer: Point) -> Option<Vec2> {
        let last = self.last_pointer?;
        self.last_pointer = Some(pointer);
        Some(pointer - last)
    }

    /// Ends the pan and resets state.
    ///
    /// Called on pointer-up and also when the pointer leaves the canvas,
    /// which terminates the gesture just like a release.
    pub fn end(&mut self) {
        self.last_pointer = None;
    }

    /// Returns `true` while a pan is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.last_pointer.is_some()
    }
}
