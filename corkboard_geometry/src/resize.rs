// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional resize of a [`Quad`], with and without aspect-ratio locking.

use kurbo::{Point, Vec2};

use crate::quad::{Quad, from_local, to_local};

/// Minimum extent, in world units, used to clamp degenerate denominators.
///
/// Aspect-locked resizing divides by the current width or height; a quad that
/// has collapsed to (near) zero extent would otherwise produce infinite or
/// NaN corners. Extents below this value are treated as this value.
pub const MIN_EXTENT: f64 = 1e-6;

/// Which handle of the object is being dragged.
///
/// Edge handles adjust one local axis; corner handles adjust both, holding
/// the opposite corner as the implicit anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizeDirection {
    /// Left edge handle.
    Left,
    /// Right edge handle.
    Right,
    /// Top edge handle.
    Top,
    /// Bottom edge handle.
    Bottom,
    /// Top-left corner handle.
    TopLeft,
    /// Top-right corner handle.
    TopRight,
    /// Bottom-right corner handle.
    BottomRight,
    /// Bottom-left corner handle.
    BottomLeft,
}

impl ResizeDirection {
    /// All eight directions, for exhaustive iteration.
    pub const ALL: [Self; 8] = [
        Self::Left,
        Self::Right,
        Self::Top,
        Self::Bottom,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Returns `true` for the four corner handles.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::TopLeft | Self::TopRight | Self::BottomRight | Self::BottomLeft
        )
    }
}

/// Resizes `quad` by a pointer delta dragged on the given handle.
///
/// `delta` is the total pointer movement in world space since the gesture
/// began. It is projected into the object's local frame first, so dragging
/// the "right" handle always grows the object along its own right axis, no
/// matter how the object is rotated on the board.
///
/// Without `lock_aspect_ratio`, edge handles move one local coordinate of the
/// two adjacent corners and corner handles move one corner freely, holding
/// the opposite corner fixed and rebuilding the other two to keep right
/// angles.
///
/// With `lock_aspect_ratio`, the new size is derived from a single scale
/// factor computed against a fixed anchor corner: `Left` anchors the
/// top-right corner, `Right` the top-left, `TopLeft` the bottom-right,
/// `Top`/`TopRight` the bottom-left, `Bottom`/`BottomRight` the top-left, and
/// `BottomLeft` the top-right.
///
/// Note the asymmetry: the aspect-locked `Top` and `Bottom` cases share the
/// `TopRight`/`BottomRight` corner formulas instead of having dedicated
/// edge handling, so an aspect-locked drag of the plain top or bottom edge
/// also shifts the shape horizontally. This matches the shipped behavior and
/// is kept until the interaction is respecified.
///
/// The result is delocalized using the pre-edit center and angle. The input
/// is never mutated, and a non-finite `delta` returns the input unchanged.
/// Extents below [`MIN_EXTENT`] are clamped before any division.
#[must_use]
pub fn resize(
    direction: ResizeDirection,
    quad: &Quad,
    delta: Vec2,
    lock_aspect_ratio: bool,
) -> Quad {
    if !delta.x.is_finite() || !delta.y.is_finite() {
        return *quad;
    }

    let center = quad.center();
    let rot = Vec2::from_angle(quad.rotation());
    let (cos_a, sin_a) = (rot.x, rot.y);

    // Project the world-space pointer delta into the local frame.
    let local_delta = Vec2::new(
        delta.x * cos_a + delta.y * sin_a,
        -delta.x * sin_a + delta.y * cos_a,
    );

    let local = to_local(quad, center, cos_a, sin_a);
    let new_local = if lock_aspect_ratio {
        resize_locked(direction, local, local_delta, quad.width(), quad.height())
    } else {
        resize_free(direction, local, local_delta)
    };

    Quad::new(
        from_local(new_local[0], center, cos_a, sin_a),
        from_local(new_local[1], center, cos_a, sin_a),
        from_local(new_local[2], center, cos_a, sin_a),
        from_local(new_local[3], center, cos_a, sin_a),
    )
}

fn resize_free(direction: ResizeDirection, local: [Point; 4], d: Vec2) -> [Point; 4] {
    let [tl, tr, br, bl] = local;
    match direction {
        ResizeDirection::Left => [
            Point::new(tl.x + d.x, tl.y),
            tr,
            br,
            Point::new(bl.x + d.x, bl.y),
        ],
        ResizeDirection::Right => [
            tl,
            Point::new(tr.x + d.x, tr.y),
            Point::new(br.x + d.x, br.y),
            bl,
        ],
        ResizeDirection::Top => [
            Point::new(tl.x, tl.y + d.y),
            Point::new(tr.x, tr.y + d.y),
            br,
            bl,
        ],
        ResizeDirection::Bottom => [
            tl,
            tr,
            Point::new(br.x, br.y + d.y),
            Point::new(bl.x, bl.y + d.y),
        ],
        ResizeDirection::TopLeft => {
            let new_tl = tl + d;
            [
                new_tl,
                Point::new(br.x, new_tl.y),
                br,
                Point::new(new_tl.x, br.y),
            ]
        }
        ResizeDirection::TopRight => {
            let new_tr = tr + d;
            [
                Point::new(bl.x, new_tr.y),
                new_tr,
                Point::new(new_tr.x, bl.y),
                bl,
            ]
        }
        ResizeDirection::BottomRight => {
            let new_br = br + d;
            [
                tl,
                Point::new(new_br.x, tl.y),
                new_br,
                Point::new(tl.x, new_br.y),
            ]
        }
        ResizeDirection::BottomLeft => {
            let new_bl = bl + d;
            [
                Point::new(new_bl.x, tr.y),
                tr,
                Point::new(tr.x, new_bl.y),
                new_bl,
            ]
        }
    }
}

fn resize_locked(
    direction: ResizeDirection,
    local: [Point; 4],
    d: Vec2,
    width: f64,
    height: f64,
) -> [Point; 4] {
    let [tl, tr, br, bl] = local;
    let width = width.max(MIN_EXTENT);
    let height = height.max(MIN_EXTENT);

    match direction {
        ResizeDirection::Left => {
            let anchor = tr;
            let proposed = bl + d;
            let scale = (anchor.x - proposed.x) / width;
            let new_bl = Point::new(anchor.x - width * scale, anchor.y + height * scale);
            [
                Point::new(new_bl.x, anchor.y),
                anchor,
                Point::new(anchor.x, new_bl.y),
                new_bl,
            ]
        }
        ResizeDirection::Right => {
            let anchor = tl;
            let proposed = br + d;
            let scale = (proposed.x - anchor.x) / width;
            let new_br = Point::new(anchor.x + width * scale, anchor.y + height * scale);
            [
                anchor,
                Point::new(new_br.x, anchor.y),
                new_br,
                Point::new(anchor.x, new_br.y),
            ]
        }
        ResizeDirection::TopLeft => {
            let anchor = br;
            let proposed = tl + d;
            let scale = (anchor.y - proposed.y) / height;
            let new_tl = Point::new(anchor.x - width * scale, anchor.y - height * scale);
            [
                new_tl,
                Point::new(anchor.x, new_tl.y),
                anchor,
                Point::new(new_tl.x, anchor.y),
            ]
        }
        // The plain top edge reuses the top-right corner formula; see the
        // `resize` docs for the resulting horizontal shift.
        ResizeDirection::Top | ResizeDirection::TopRight => {
            let anchor = bl;
            let proposed = tr + d;
            let scale = (anchor.y - proposed.y) / height;
            let new_tr = Point::new(anchor.x + width * scale, anchor.y - height * scale);
            [
                Point::new(anchor.x, new_tr.y),
                new_tr,
                Point::new(new_tr.x, anchor.y),
                anchor,
            ]
        }
        // Likewise, the plain bottom edge reuses the bottom-right formula.
        ResizeDirection::Bottom | ResizeDirection::BottomRight => {
            let anchor = tl;
            let proposed = br + d;
            let scale = (proposed.y - anchor.y) / height;
            let new_br = Point::new(anchor.x + width * scale, anchor.y + height * scale);
            [
                anchor,
                Point::new(new_br.x, anchor.y),
                new_br,
                Point::new(anchor.x, new_br.y),
            ]
        }
        ResizeDirection::BottomLeft => {
            let anchor = tr;
            let proposed = bl + d;
            let scale = (proposed.y - anchor.y) / height;
            let new_bl = Point::new(anchor.x - width * scale, anchor.y + height * scale);
            [
                Point::new(new_bl.x, anchor.y),
                anchor,
                Point::new(anchor.x, new_bl.y),
                new_bl,
            ]
        }
    }
}
