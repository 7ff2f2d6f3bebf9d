// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Quad`] corner-point representation and rigid-motion helpers.

use kurbo::{Point, Rect, Vec2};

/// Rotates `p` about `center` by an angle whose cosine/sine are precomputed.
///
/// Passing the cosine/sine pair instead of the angle lets callers hoist the
/// trigonometry out of per-corner loops. Applying this to all four corners of
/// a [`Quad`] with the same center and angle is a rigid rotation of the whole
/// shape.
#[must_use]
pub fn rotate_point(p: Point, center: Point, cos_a: f64, sin_a: f64) -> Point {
    let d = p - center;
    Point::new(
        center.x + d.x * cos_a - d.y * sin_a,
        center.y + d.x * sin_a + d.y * cos_a,
    )
}

/// Maps the four world-space corners into the object's local frame.
///
/// In the local frame the object's rotation is undone: the corners form an
/// axis-aligned rectangle centered on the origin, so edge and corner edits
/// ("grow the right edge") are well-defined regardless of how the object is
/// rotated on the board. `cos_a`/`sin_a` describe the object's current
/// rotation, typically derived from [`Quad::rotation`].
#[must_use]
pub fn to_local(quad: &Quad, center: Point, cos_a: f64, sin_a: f64) -> [Point; 4] {
    let localize = |p: Point| {
        let d = p - center;
        Point::new(cos_a * d.x + sin_a * d.y, -sin_a * d.x + cos_a * d.y)
    };
    [
        localize(quad.p1),
        localize(quad.p2),
        localize(quad.p3),
        localize(quad.p4),
    ]
}

/// Maps an edited local-frame point back into world space.
///
/// Inverse of [`to_local`] for a single point: `from_local(to_local(..)[i])`
/// returns the original corner (up to floating-point rounding) when given the
/// same center and rotation.
#[must_use]
pub fn from_local(local: Point, center: Point, cos_a: f64, sin_a: f64) -> Point {
    Point::new(
        center.x + local.x * cos_a - local.y * sin_a,
        center.y + local.x * sin_a + local.y * cos_a,
    )
}

/// A board object's footprint: four corner points forming a rotated rectangle.
///
/// Corners are stored fully resolved in world space, ordered clockwise from
/// the pre-rotation top-left: `p1` = top-left, `p2` = top-right, `p3` =
/// bottom-right, `p4` = bottom-left. Width, height, rotation, and center are
/// derived, so there is no second representation to keep in sync.
///
/// Every operation in this crate preserves the rotated-rectangle invariant
/// (opposite sides equal length, diagonals bisecting each other); rendering
/// and resize math rely on it. [`Quad::is_parallelogram`] checks it within a
/// tolerance.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quad {
    /// Pre-rotation top-left corner.
    pub p1: Point,
    /// Pre-rotation top-right corner.
    pub p2: Point,
    /// Pre-rotation bottom-right corner.
    pub p3: Point,
    /// Pre-rotation bottom-left corner.
    pub p4: Point,
}

impl Quad {
    /// Creates a quad from explicit corners, clockwise from top-left.
    #[must_use]
    pub const fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self { p1, p2, p3, p4 }
    }

    /// Creates an unrotated quad covering `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            p1: Point::new(rect.x0, rect.y0),
            p2: Point::new(rect.x1, rect.y0),
            p3: Point::new(rect.x1, rect.y1),
            p4: Point::new(rect.x0, rect.y1),
        }
    }

    /// Returns the corners as an array, clockwise from top-left.
    #[must_use]
    pub const fn corners(&self) -> [Point; 4] {
        [self.p1, self.p2, self.p3, self.p4]
    }

    /// Returns the center: the midpoint of the `p1`–`p3` diagonal.
    #[must_use]
    pub fn center(&self) -> Point {
        self.p1.midpoint(self.p3)
    }

    /// Returns the rotation angle in radians, derived from the `p1`→`p2` edge.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        (self.p2 - self.p1).atan2()
    }

    /// Returns the rotation angle in degrees, for rendering boundaries.
    #[must_use]
    pub fn rotation_degrees(&self) -> f64 {
        self.rotation().to_degrees()
    }

    /// Returns the width: the length of the `p1`→`p2` edge.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.p2 - self.p1).hypot()
    }

    /// Returns the height: the length of the `p1`→`p4` edge.
    #[must_use]
    pub fn height(&self) -> f64 {
        (self.p4 - self.p1).hypot()
    }

    /// Returns this quad translated by `delta`.
    ///
    /// Translation moves every corner by exactly `delta` and changes no side
    /// length or internal angle.
    #[must_use]
    pub fn translate(&self, delta: Vec2) -> Self {
        Self {
            p1: self.p1 + delta,
            p2: self.p2 + delta,
            p3: self.p3 + delta,
            p4: self.p4 + delta,
        }
    }

    /// Returns this quad rigidly rotated about `center`.
    ///
    /// `cos_a`/`sin_a` are the cosine/sine of the rotation increment, as for
    /// [`rotate_point`].
    #[must_use]
    pub fn rotate_about(&self, center: Point, cos_a: f64, sin_a: f64) -> Self {
        Self {
            p1: rotate_point(self.p1, center, cos_a, sin_a),
            p2: rotate_point(self.p2, center, cos_a, sin_a),
            p3: rotate_point(self.p3, center, cos_a, sin_a),
            p4: rotate_point(self.p4, center, cos_a, sin_a),
        }
    }

    /// Returns `true` if `p` lies inside the quad (rotation-aware).
    ///
    /// The point is mapped into the local frame and compared against the
    /// half extents, so this works for any rotation. Points exactly on an
    /// edge count as inside.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let center = self.center();
        let rot = Vec2::from_angle(self.rotation());
        let d = p - center;
        let lx = rot.x * d.x + rot.y * d.y;
        let ly = -rot.y * d.x + rot.x * d.y;
        lx.abs() <= self.width() / 2.0 && ly.abs() <= self.height() / 2.0
    }

    /// Returns `true` if opposite sides have equal length within `tolerance`.
    ///
    /// This is the structural invariant every operation in this crate must
    /// preserve; a failure indicates corrupted geometry upstream.
    #[must_use]
    pub fn is_parallelogram(&self, tolerance: f64) -> bool {
        let top = (self.p2 - self.p1).hypot();
        let bottom = (self.p3 - self.p4).hypot();
        let left = (self.p4 - self.p1).hypot();
        let right = (self.p3 - self.p2).hypot();
        (top - bottom).abs() <= tolerance && (left - right).abs() <= tolerance
    }
}
