// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`BoardSession`] container and its input routing.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};

use corkboard_board::{Board, BoardObject, BoardSettings, CropRect, ObjectId, image_quad};
use corkboard_gesture::coalesce::MoveCoalescer;
use corkboard_gesture::drag::{DragGesture, GRID_SIZE};
use corkboard_gesture::pan::PanGesture;
use corkboard_gesture::resize::ResizeGesture;
use corkboard_gesture::rotate::RotateGesture;
use corkboard_geometry::ResizeDirection;
use corkboard_view2d::BoardViewport;

use crate::export::{ExportObject, ExportView};
use crate::intake::{DecodeTicket, ImageIntake};
use crate::storage::BoardState;

/// Horizontal spacing, in view pixels, between images dropped together.
const MULTI_DROP_OFFSET: f64 = 100.0;

/// Initial edge length of the crop selection, in view pixels.
const DEFAULT_CROP_SIZE: f64 = 500.0;

/// Which transform handle of an object's overlay a pointer-down landed on.
///
/// Handles are chrome drawn by the host on the selected object; the host
/// knows which one was hit and reports it through
/// [`BoardSession::pointer_down_on_handle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    /// The rotation handle.
    Rotate,
    /// One of the eight edge/corner resize handles.
    Resize(ResizeDirection),
}

/// The one gesture a pointer session may be driving.
///
/// Gestures are mutually exclusive: a pointer-down replaces any previous
/// state, and pointer-up clears it unconditionally.
#[derive(Debug)]
enum ActiveGesture {
    Drag { id: ObjectId, gesture: DragGesture },
    Rotate { id: ObjectId, gesture: RotateGesture },
    Resize { id: ObjectId, gesture: ResizeGesture },
    Pan { gesture: PanGesture },
}

/// One open board: objects, camera, settings, and interaction state.
///
/// See the [crate docs](crate) for the event-flow overview. All methods are
/// synchronous; the only asynchronous seam is image intake, where geometry
/// is created when the host reports a decode result.
#[derive(Debug, Default)]
pub struct BoardSession {
    board: Board,
    viewport: BoardViewport,
    settings: BoardSettings,
    crop: Option<CropRect>,
    active: Option<ActiveGesture>,
    pending_move: MoveCoalescer<Point>,
    intake: ImageIntake,
}

impl BoardSession {
    /// Creates a session over an empty board with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the object store.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the object store mutably, for direct operations such as
    /// delete, lock, aspect-ratio lock, and layering.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the camera.
    #[must_use]
    pub fn viewport(&self) -> &BoardViewport {
        &self.viewport
    }

    /// Returns the board-level settings.
    #[must_use]
    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    /// Returns the board-level settings mutably.
    pub fn settings_mut(&mut self) -> &mut BoardSettings {
        &mut self.settings
    }

    /// Returns `true` while a gesture is being driven.
    #[must_use]
    pub fn gesture_active(&self) -> bool {
        self.active.is_some()
    }

    /// Pointer-down on the canvas, not on a transform handle.
    ///
    /// If an object's body is under the pointer and the object is not
    /// locked, a drag begins. Locked objects absorb the press without
    /// starting anything. An empty-canvas press starts panning.
    pub fn pointer_down_on_body(&mut self, view_point: Point) {
        self.pending_move.cancel();
        let world = self.viewport.view_to_world_point(view_point);

        if let Some(id) = self.board.top_hit(world) {
            if let Some(object) = self.board.get(id)
                && !object.locked
            {
                let mut gesture = DragGesture::default();
                gesture.start(world, object.quad);
                self.active = Some(ActiveGesture::Drag { id, gesture });
            }
        } else {
            let mut gesture = PanGesture::default();
            gesture.start(view_point);
            self.active = Some(ActiveGesture::Pan { gesture });
        }
    }

    /// Pointer-down on a transform handle of the given object.
    ///
    /// A no-op if the object has been deleted or is locked.
    pub fn pointer_down_on_handle(&mut self, id: ObjectId, handle: Handle, view_point: Point) {
        self.pending_move.cancel();
        let world = self.viewport.view_to_world_point(view_point);

        let Some(object) = self.board.get(id) else {
            return;
        };
        if object.locked {
            return;
        }

        match handle {
            Handle::Rotate => {
                let mut gesture = RotateGesture::default();
                gesture.start(world, &object.quad);
                self.active = Some(ActiveGesture::Rotate { id, gesture });
            }
            Handle::Resize(direction) => {
                let mut gesture = ResizeGesture::default();
                gesture.start(direction, world, object.quad);
                self.active = Some(ActiveGesture::Resize { id, gesture });
            }
        }
    }

    /// Pointer moved.
    ///
    /// The position is coalesced rather than applied: only the most recent
    /// move inside a frame window takes effect, applied by
    /// [`BoardSession::on_frame`]. Returns `true` when the host must request
    /// a frame callback (nothing was pending yet); while one is outstanding,
    /// further moves just replace the payload.
    pub fn pointer_move(&mut self, view_point: Point) -> bool {
        if self.active.is_none() {
            return false;
        }
        self.pending_move.submit(view_point)
    }

    /// Frame callback: applies the most recent coalesced pointer position.
    pub fn on_frame(&mut self) {
        if let Some(view_point) = self.pending_move.take() {
            self.apply_move(view_point);
        }
    }

    /// Pointer released, anywhere.
    ///
    /// A still-pending move is applied first so the final position is never
    /// lost, then the gesture state is reset unconditionally. Hosts call
    /// this from a global listener, so releasing outside the canvas still
    /// ends the gesture.
    pub fn pointer_up(&mut self) {
        if let Some(view_point) = self.pending_move.take() {
            self.apply_move(view_point);
        }
        self.active = None;
    }

    /// Pointer left the canvas.
    ///
    /// Ends a background pan like a release would. Object gestures survive,
    /// since their global listeners keep reporting moves until pointer-up.
    pub fn pointer_left_canvas(&mut self) {
        if matches!(self.active, Some(ActiveGesture::Pan { .. })) {
            self.pointer_up();
        }
    }

    /// Wheel scroll: one zoom notch anchored at the cursor.
    pub fn wheel(&mut self, cursor_view: Point, delta_y: f64) {
        self.viewport.wheel_zoom(cursor_view, delta_y);
    }

    fn apply_move(&mut self, view_point: Point) {
        let world = self.viewport.view_to_world_point(view_point);
        match &mut self.active {
            Some(ActiveGesture::Drag { id, gesture }) => {
                let grid = self.settings.snap_to_grid.then_some(GRID_SIZE);
                if let Some(quad) = gesture.update(world, grid) {
                    self.board.set_quad(*id, quad);
                }
            }
            Some(ActiveGesture::Rotate { id, gesture }) => {
                // Rotation composes on the live geometry; a deleted object
                // simply has none, which ends the effect.
                if let Some(object) = self.board.get(*id) {
                    let live = object.quad;
                    if let Some(quad) = gesture.update(world, &live) {
                        self.board.set_quad(*id, quad);
                    }
                }
            }
            Some(ActiveGesture::Resize { id, gesture }) => {
                if let Some(object) = self.board.get(*id) {
                    let lock = object.lock_aspect_ratio;
                    if let Some(quad) = gesture.update(world, lock) {
                        self.board.set_quad(*id, quad);
                    }
                }
            }
            Some(ActiveGesture::Pan { gesture }) => {
                if let Some(delta) = gesture.update(view_point) {
                    self.viewport.pan_by_view(delta);
                }
            }
            None => {}
        }
    }

    /// Registers images dropped at `view_point`, returning one ticket each.
    ///
    /// The drop position is converted to world space up front, so the images
    /// land under the cursor regardless of the pan/zoom at completion time.
    /// Multiple images from one drop are spread horizontally by 100 view
    /// pixels so they do not stack invisibly.
    pub fn drop_images<I>(&mut self, view_point: Point, contents: I) -> Vec<DecodeTicket>
    where
        I: IntoIterator<Item = String>,
    {
        let mut tickets = Vec::new();
        for (index, content) in contents.into_iter().enumerate() {
            let spread = Vec2::new(MULTI_DROP_OFFSET * index as f64, 0.0);
            let world = self.viewport.view_to_world_point(view_point + spread);
            tickets.push(self.intake.begin(world, content));
        }
        tickets
    }

    /// Reports a finished decode: builds and inserts the object.
    ///
    /// The decoded size is capped and centered per the image sizing policy.
    /// Completions may arrive in any order; each inserts independently.
    /// Returns the new object's id, or `None` for an unknown or
    /// already-settled ticket.
    pub fn complete_image(
        &mut self,
        ticket: DecodeTicket,
        width: f64,
        height: f64,
    ) -> Option<ObjectId> {
        let pending = self.intake.settle(ticket)?;
        let quad = image_quad(pending.world_point, width, height);
        let id = self.board.allocate_id();
        self.board.add(BoardObject::image(id, quad, pending.content));
        Some(id)
    }

    /// Reports a failed decode: the drop is discarded without a trace.
    pub fn fail_image(&mut self, ticket: DecodeTicket) {
        let _ = self.intake.settle(ticket);
    }

    /// Returns the number of image decodes still in flight.
    #[must_use]
    pub fn pending_images(&self) -> usize {
        self.intake.in_flight()
    }

    /// Enters cropping mode with a 500×500 selection centered in `view_rect`.
    pub fn begin_crop(&mut self, view_rect: Rect) {
        self.crop = Some(CropRect::centered_in(
            view_rect,
            DEFAULT_CROP_SIZE,
            DEFAULT_CROP_SIZE,
        ));
    }

    /// Replaces the crop selection while cropping mode is active.
    ///
    /// A no-op outside cropping mode: the selection's lifecycle is owned by
    /// [`BoardSession::begin_crop`] / [`BoardSession::end_crop`].
    pub fn set_crop(&mut self, crop: CropRect) {
        if self.crop.is_some() {
            self.crop = Some(crop);
        }
    }

    /// Returns the crop selection while cropping mode is active.
    #[must_use]
    pub fn crop(&self) -> Option<CropRect> {
        self.crop
    }

    /// Leaves cropping mode, discarding the selection.
    pub fn end_crop(&mut self) {
        self.crop = None;
    }

    /// Assembles the plain persisted record for the storage collaborator.
    #[must_use]
    pub fn snapshot(&self, board_id: impl Into<String>) -> BoardState {
        BoardState {
            board_id: board_id.into(),
            board: self.board.clone(),
            viewport: self.viewport.state(),
            settings: self.settings.clone(),
        }
    }

    /// Replaces the session contents with a loaded record.
    ///
    /// Any in-progress gesture, pending move, or crop selection is
    /// discarded; in-flight decodes keep their (world-space) drop points and
    /// will insert into the restored board.
    pub fn restore(&mut self, state: BoardState) {
        self.board = state.board;
        self.viewport.restore(state.viewport);
        self.settings = state.settings;
        self.crop = None;
        self.active = None;
        self.pending_move.cancel();
    }

    /// Captures the view-space positions the rasterizer needs.
    ///
    /// Corner positions are computed from the live board and camera at call
    /// time, back to front, together with the crop selection (if cropping)
    /// and the requested pixel scale factor.
    #[must_use]
    pub fn export_view(&self, pixel_scale: f64) -> ExportView {
        let objects = self
            .board
            .iter()
            .map(|object| ExportObject {
                id: object.id,
                kind: object.kind,
                content: object.content.clone(),
                corners: object
                    .quad
                    .corners()
                    .map(|p| self.viewport.world_to_view_point(p)),
            })
            .collect();
        ExportView {
            objects,
            crop: self.crop,
            pixel_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn session_with_image_at(center: Point) -> (BoardSession, ObjectId) {
        let mut session = BoardSession::new();
        let tickets = session.drop_images(center, ["img.png".to_string()]);
        let id = session.complete_image(tickets[0], 100.0, 100.0).unwrap();
        (session, id)
    }

    #[test]
    fn body_press_on_an_object_starts_a_drag() {
        let (mut session, _) = session_with_image_at(Point::new(200.0, 200.0));
        session.pointer_down_on_body(Point::new(200.0, 200.0));
        assert!(session.gesture_active());
    }

    #[test]
    fn body_press_on_a_locked_object_starts_nothing() {
        let (mut session, id) = session_with_image_at(Point::new(200.0, 200.0));
        session.board_mut().set_locked(id, true);

        session.pointer_down_on_body(Point::new(200.0, 200.0));
        assert!(!session.gesture_active());

        session.pointer_down_on_handle(
            id,
            Handle::Resize(ResizeDirection::Right),
            Point::new(250.0, 200.0),
        );
        assert!(!session.gesture_active());
    }

    #[test]
    fn empty_canvas_press_starts_a_pan() {
        let mut session = BoardSession::new();
        session.pointer_down_on_body(Point::new(10.0, 10.0));
        assert!(session.gesture_active());

        let _ = session.pointer_move(Point::new(30.0, 10.0));
        session.on_frame();
        // Panning by +20 in view space moves the offset by -20 world units.
        assert!((session.viewport().offset() - Vec2::new(-20.0, 0.0)).hypot() < 1e-12);

        session.pointer_left_canvas();
        assert!(!session.gesture_active());
    }

    #[test]
    fn moves_without_a_gesture_request_no_frames() {
        let mut session = BoardSession::new();
        assert!(!session.pointer_move(Point::new(5.0, 5.0)));
        session.on_frame();
        assert!((session.viewport().offset() - Vec2::ZERO).hypot() < 1e-12);
    }

    #[test]
    fn pointer_up_applies_the_pending_move_before_resetting() {
        let (mut session, id) = session_with_image_at(Point::new(100.0, 100.0));
        session.pointer_down_on_body(Point::new(100.0, 100.0));

        // Two moves in one frame window; only the last matters, and the
        // frame callback never runs before release.
        assert!(session.pointer_move(Point::new(120.0, 100.0)));
        assert!(!session.pointer_move(Point::new(130.0, 100.0)));
        session.pointer_up();

        let quad = session.board().get(id).unwrap().quad;
        assert_eq!(quad.center(), Point::new(130.0, 100.0));
        assert!(!session.gesture_active());
    }

    #[test]
    fn deleting_the_object_mid_gesture_is_harmless() {
        let (mut session, id) = session_with_image_at(Point::new(100.0, 100.0));
        session.pointer_down_on_body(Point::new(100.0, 100.0));
        let _ = session.pointer_move(Point::new(150.0, 100.0));
        session.board_mut().remove(id);

        // The pending update lands on a stale id: a silent no-op.
        session.on_frame();
        session.pointer_up();
        assert!(session.board().is_empty());
    }

    #[test]
    fn handle_press_on_a_stale_id_is_a_no_op() {
        let mut session = BoardSession::new();
        session.pointer_down_on_handle(
            ObjectId::from_raw(42),
            Handle::Rotate,
            Point::new(0.0, 0.0),
        );
        assert!(!session.gesture_active());
    }

    #[test]
    fn crop_lifecycle_is_independent() {
        let mut session = BoardSession::new();

        // Replacing outside cropping mode does nothing.
        session.set_crop(CropRect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(session.crop(), None);

        session.begin_crop(Rect::new(0.0, 0.0, 1000.0, 1000.0));
        assert_eq!(session.crop(), Some(CropRect::new(250.0, 250.0, 500.0, 500.0)));

        session.set_crop(CropRect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(session.crop(), Some(CropRect::new(0.0, 0.0, 200.0, 100.0)));

        session.end_crop();
        assert_eq!(session.crop(), None);
    }
}
