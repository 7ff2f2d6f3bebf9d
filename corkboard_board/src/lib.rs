// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Board: the ordered store of objects on a mood board.
//!
//! The core type is [`Board`], a z-ordered collection of [`BoardObject`]s:
//! index 0 renders at the back, the last index at the front. The store owns
//! identity ([`ObjectId`] allocation), layering ([`Board::bring_to_front`] /
//! [`Board::send_to_back`]), and per-object mutation; it knows nothing about
//! gestures, viewports, or rendering.
//!
//! The API is deliberately forgiving at the boundary: every by-id operation
//! is a silent no-op when the id is absent, so a gesture that outlives its
//! object (deleted mid-drag) simply stops having an effect instead of
//! panicking.
//!
//! A monotonically increasing **revision** counter bumps whenever a mutation
//! changes semantic contents, giving observers a cheap "did anything actually
//! change?" marker without comparing object lists.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use corkboard_board::{Board, BoardObject, image_quad};
//!
//! let mut board = Board::new();
//!
//! // A decoded 400x300 image dropped at world point (1000, 500).
//! let id = board.allocate_id();
//! let quad = image_quad(Point::new(1000.0, 500.0), 400.0, 300.0);
//! board.add(BoardObject::image(id, quad, "https://example.com/a.png"));
//!
//! board.bring_to_front(id);
//! assert_eq!(board.top_hit(Point::new(1000.0, 500.0)), Some(id));
//! ```
//!
//! Board-level settings that are not per-object ([`BoardSettings`]) and the
//! export-time crop selection ([`CropRect`]) live here as well, since they
//! are part of the persisted board record.
//!
//! With the `serde` feature enabled, [`Board`], [`BoardObject`],
//! [`BoardSettings`], and [`CropRect`] all serialize as plain records for
//! the persistence boundary.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod board;
mod object;
mod settings;

pub use board::Board;
pub use object::{BoardObject, ContentKind, MAX_IMAGE_DIMENSION, ObjectId, image_quad};
pub use settings::{BoardSettings, CropRect};
