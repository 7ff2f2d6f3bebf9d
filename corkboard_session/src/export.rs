// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The positional snapshot handed to the export collaborator.
//!
//! Rasterization itself lives outside the engine; the contract is only that
//! the corner positions captured here are accurate at call time. See
//! [`BoardSession::export_view`](crate::BoardSession::export_view).

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;

use corkboard_board::{ContentKind, CropRect, ObjectId};

/// One object as the rasterizer should draw it.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportObject {
    /// Identity of the source object.
    pub id: ObjectId,
    /// Content kind.
    pub kind: ContentKind,
    /// Embedded data URI or remote URL.
    pub content: String,
    /// View-space corner positions, clockwise from the pre-rotation
    /// top-left.
    pub corners: [Point; 4],
}

/// Everything the rasterizer needs to draw the board.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportView {
    /// Objects in paint order, back to front.
    pub objects: Vec<ExportObject>,
    /// Crop selection, if cropping mode is active, in view space.
    pub crop: Option<CropRect>,
    /// Requested output pixels per view pixel.
    pub pixel_scale: f64,
}
