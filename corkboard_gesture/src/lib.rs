// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Gesture: state machines for board interactions.
//!
//! This crate turns sequences of pointer positions into new object geometry.
//! Each module is a small, focused state machine for one interaction
//! pattern:
//!
//! - [`drag`]: move an object by the total pointer offset, with optional
//!   grid snapping.
//! - [`rotate`]: spin an object about its own center, composing frame
//!   increments.
//! - [`resize`]: drag an edge or corner handle, delegating the corner math
//!   to `corkboard_geometry`.
//! - [`pan`]: drag the board background to move the viewport.
//! - [`coalesce`]: bound the update rate to one geometry write per frame
//!   with cancel-replace semantics.
//! - [`subscription`]: RAII scope for a gesture, guaranteeing its teardown
//!   runs exactly once.
//!
//! ## Design Philosophy
//!
//! Every gesture here is **pure bookkeeping**: `start` captures the state of
//! the world at pointer-down, `update` computes what the geometry *would*
//! be, and `end` resets. Nothing in this crate owns an object collection or
//! a viewport; callers write the returned [`Quad`](corkboard_geometry::Quad)
//! through their store, which makes a deleted-mid-gesture object a harmless
//! no-op rather than a crash.
//!
//! Gestures are mutually exclusive per object by construction: a caller
//! holds at most one active gesture per pointer session and resets it
//! unconditionally on pointer-up.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use corkboard_geometry::Quad;
//! use corkboard_gesture::drag::DragGesture;
//!
//! let quad = Quad::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
//! let mut drag = DragGesture::default();
//!
//! drag.start(Point::new(50.0, 50.0), quad);
//! // Pointer moved 50 units right; snap the delta to a 20-unit grid.
//! let moved = drag.update(Point::new(100.0, 50.0), Some(20.0)).unwrap();
//! assert_eq!(moved.p1, Point::new(40.0, 0.0));
//! drag.end();
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod coalesce;
pub mod drag;
pub mod pan;
pub mod resize;
pub mod rotate;
pub mod subscription;
