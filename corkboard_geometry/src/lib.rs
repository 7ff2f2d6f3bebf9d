// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Geometry: the pure geometry kernel for canvas objects.
//!
//! This crate models a board object's footprint as a [`Quad`]: four corner
//! points in world space that always form a rotated rectangle. All editing
//! operations are pure functions from an input quad to a new quad:
//!
//! - [`rotate_point`]: rigid rotation of a point about a center.
//! - [`to_local`] / [`from_local`]: conversion between world space and the
//!   object's own unrotated frame, where the shape is an axis-aligned
//!   rectangle and edge/corner edits are well-defined.
//! - [`resize`]: the eight-direction resize algorithm, with and without
//!   aspect-ratio locking.
//!
//! It does **not** own any object collection, viewport, or gesture state.
//! Higher layers decide *when* to resize and write results back; this crate
//! only answers *what* the new corners are.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Vec2};
//! use corkboard_geometry::{resize, Quad, ResizeDirection};
//!
//! // A 200x100 object with its top-left corner at the origin.
//! let quad = Quad::from_rect(Rect::new(0.0, 0.0, 200.0, 100.0));
//!
//! // Drag the right edge 50 units further right.
//! let grown = resize(ResizeDirection::Right, &quad, Vec2::new(50.0, 0.0), false);
//! assert!((grown.width() - 250.0).abs() < 1e-9);
//! assert!((grown.height() - 100.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Corners are stored fully resolved; width, height, rotation, and center
//!   are derived accessors. There is no separate `(x, y, w, h, angle)`
//!   representation to fall out of sync.
//! - All math is in `f64`, with angles in radians. Degrees only appear at
//!   rendering boundaries via [`Quad::rotation_degrees`].
//! - Operations never mutate their input and never panic; degenerate inputs
//!   are clamped or passed through unchanged (see [`resize`]).
//!
//! This crate is `no_std`.

#![no_std]

mod quad;
mod resize;

pub use quad::{Quad, from_local, rotate_point, to_local};
pub use resize::{MIN_EXTENT, ResizeDirection, resize};
