// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard View 2D: the board camera.
//!
//! This crate provides [`BoardViewport`], a small headless model of the
//! pannable, zoomable view onto the board's world plane. It focuses on:
//! - Camera state: a uniform zoom factor and a world-space offset.
//! - Coordinate conversion between world and view (pixel) space.
//! - The wheel-zoom policy: stepped zooming anchored at the cursor, clamped
//!   to a sane range, with hysteresis snapping back to 1:1.
//!
//! It does **not** own any object collection or event loop. Callers are
//! expected to:
//! - Keep object geometry in pure world coordinates and apply
//!   [`BoardViewport::world_to_view_point`] only when rendering or
//!   exporting, so panning and zooming never rewrite stored geometry.
//! - Convert incoming pointer positions with
//!   [`BoardViewport::view_to_world_point`] before hit testing, so a
//!   dropped image lands under the cursor at any pan or zoom.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use corkboard_view2d::BoardViewport;
//!
//! let mut view = BoardViewport::new();
//!
//! // Zoom out one wheel step, anchored at the cursor.
//! let cursor = Point::new(400.0, 300.0);
//! let before = view.view_to_world_point(cursor);
//! view.wheel_zoom(cursor, 120.0);
//! let after = view.view_to_world_point(cursor);
//!
//! assert_eq!(view.scale(), 0.9);
//! assert!((before - after).hypot() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{
    BoardViewport, BoardViewportDebugInfo, MAX_SCALE, MIN_SCALE, ViewportState,
};
