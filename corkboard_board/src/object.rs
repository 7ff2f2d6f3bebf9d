// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Board object identity, content kinds, and the image sizing policy.

use alloc::string::String;

use corkboard_geometry::Quad;
use kurbo::{Point, Rect};

/// Largest edge, in world units, a freshly placed image may have.
///
/// Decoded images larger than this are scaled down preserving their aspect
/// ratio before being placed, so a wall-sized photo drop does not swallow
/// the whole board.
pub const MAX_IMAGE_DIMENSION: f64 = 300.0;

/// Stable identity of a board object, unique for the object's lifetime.
///
/// Ids are allocated by [`Board::allocate_id`](crate::Board::allocate_id)
/// from a monotonically increasing counter and are never reused within a
/// board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectId(u64);

impl ObjectId {
    /// Creates an id from a raw value, for deserialization and tests.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// What kind of content a board object carries.
///
/// Only [`ContentKind::Image`] has an intake path today; the other variants
/// are carried in the data model for forward compatibility of persisted
/// boards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContentKind {
    /// A raster image, embedded as a data URI or referenced by URL.
    Image,
    /// A text block.
    Text,
    /// An audio clip.
    Audio,
    /// A video clip.
    Video,
}

/// One object on the board: geometry, content, and interaction flags.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardObject {
    /// Stable identity, unique within the board.
    pub id: ObjectId,
    /// World-space footprint; the canonical geometry.
    pub quad: Quad,
    /// Content kind.
    pub kind: ContentKind,
    /// Embedded data URI or remote URL.
    pub content: String,
    /// Locked objects ignore drag and resize gestures.
    pub locked: bool,
    /// Constrains resize gestures to preserve the width/height ratio.
    pub lock_aspect_ratio: bool,
}

impl BoardObject {
    /// Creates an image object with the default interaction flags.
    ///
    /// New images start unlocked with aspect-ratio locking on, so a casual
    /// corner drag does not distort the picture.
    #[must_use]
    pub fn image(id: ObjectId, quad: Quad, content: impl Into<String>) -> Self {
        Self {
            id,
            quad,
            kind: ContentKind::Image,
            content: content.into(),
            locked: false,
            lock_aspect_ratio: true,
        }
    }
}

/// Computes the placement quad for a freshly decoded image.
///
/// The decoded `width`×`height` is capped so its larger edge does not exceed
/// [`MAX_IMAGE_DIMENSION`] (preserving the aspect ratio, rounding the scaled
/// edge to whole units), and the resulting axis-aligned rectangle is centered
/// on `drop_point`.
#[must_use]
pub fn image_quad(drop_point: Point, width: f64, height: f64) -> Quad {
    let (mut width, mut height) = (width, height);
    if width > height && width > MAX_IMAGE_DIMENSION {
        height = round_positive(height * MAX_IMAGE_DIMENSION / width);
        width = MAX_IMAGE_DIMENSION;
    } else if height > MAX_IMAGE_DIMENSION {
        width = round_positive(width * MAX_IMAGE_DIMENSION / height);
        height = MAX_IMAGE_DIMENSION;
    }

    let x0 = drop_point.x - width / 2.0;
    let y0 = drop_point.y - height / 2.0;
    Quad::from_rect(Rect::new(x0, y0, x0 + width, y0 + height))
}

// Nearest-integer rounding for non-negative extents, in core-only arithmetic
// so the crate needs no math backend.
fn round_positive(x: f64) -> f64 {
    let rem = x % 1.0;
    let truncated = x - rem;
    if rem >= 0.5 {
        truncated + 1.0
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_images_are_placed_at_native_size() {
        let quad = image_quad(Point::new(1000.0, 500.0), 200.0, 150.0);
        assert_eq!(quad.width(), 200.0);
        assert_eq!(quad.height(), 150.0);
        assert_eq!(quad.center(), Point::new(1000.0, 500.0));
        assert_eq!(quad.rotation(), 0.0);
    }

    #[test]
    fn wide_images_are_capped_on_width() {
        let quad = image_quad(Point::ZERO, 400.0, 300.0);
        assert_eq!(quad.width(), 300.0);
        assert_eq!(quad.height(), 225.0);
        assert_eq!(quad.center(), Point::ZERO);
    }

    #[test]
    fn tall_images_are_capped_on_height() {
        let quad = image_quad(Point::ZERO, 300.0, 600.0);
        assert_eq!(quad.height(), 300.0);
        assert_eq!(quad.width(), 150.0);
    }

    #[test]
    fn scaled_edge_is_rounded_to_whole_units() {
        // 1000x333 scales to 300x99.9, which rounds to 100.
        let quad = image_quad(Point::ZERO, 1000.0, 333.0);
        assert_eq!(quad.width(), 300.0);
        assert_eq!(quad.height(), 100.0);
    }

    #[test]
    fn new_images_default_to_aspect_locked_and_unlocked() {
        let object = BoardObject::image(
            ObjectId::from_raw(1),
            image_quad(Point::ZERO, 10.0, 10.0),
            "data:image/png;base64,xyz",
        );
        assert!(object.lock_aspect_ratio);
        assert!(!object.locked);
        assert_eq!(object.kind, ContentKind::Image);
    }
}
