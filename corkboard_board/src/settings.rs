// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Board-level settings and the export-time crop selection.

use alloc::string::String;
use alloc::string::ToString;

use kurbo::Rect;

/// Board-level state that is not per-object.
///
/// These fields travel with the persisted board record alongside the object
/// list and the viewport snapshot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSettings {
    /// Display name of the board.
    pub name: String,
    /// Index of the background pattern to render behind the objects.
    pub background_pattern_id: u32,
    /// Foreground (pattern) color, as a CSS hex string.
    pub foreground_color: String,
    /// Background color, as a CSS hex string.
    pub background_color: String,
    /// When set, drag gestures snap their delta to the board grid.
    pub snap_to_grid: bool,
}

impl BoardSettings {
    /// Flips grid snapping.
    pub fn toggle_snap_to_grid(&mut self) {
        self.snap_to_grid = !self.snap_to_grid;
    }
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            name: "Board name".to_string(),
            background_pattern_id: 0,
            foreground_color: "#000000".to_string(),
            background_color: "#ffffff".to_string(),
            snap_to_grid: false,
        }
    }
}

/// The crop selection used while exporting a region of the board.
///
/// The rectangle lives in view (screen) space and has an independent
/// lifecycle: it exists only while cropping mode is active, held as an
/// `Option<CropRect>` by the session.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CropRect {
    /// Left edge, in view space.
    pub x: f64,
    /// Top edge, in view space.
    pub y: f64,
    /// Width, in view space.
    pub width: f64,
    /// Height, in view space.
    pub height: f64,
}

impl CropRect {
    /// Creates a crop rect from its origin and size.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a `width`×`height` crop rect centered in `view_rect`.
    ///
    /// This is the initial selection offered when cropping mode is enabled.
    #[must_use]
    pub fn centered_in(view_rect: Rect, width: f64, height: f64) -> Self {
        let center = view_rect.center();
        Self {
            x: center.x - width / 2.0,
            y: center.y - height / 2.0,
            width,
            height,
        }
    }
}
