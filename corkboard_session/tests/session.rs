// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end flows through `BoardSession`: drop, transform, navigate,
//! persist, export.

use kurbo::Point;

use corkboard_geometry::ResizeDirection;
use corkboard_session::{BoardSession, BoardStorage, Handle, MemoryStorage};

#[test]
fn a_dropped_image_lands_capped_and_centered_under_the_cursor() {
    let mut session = BoardSession::new();

    let tickets = session.drop_images(Point::new(1000.0, 500.0), ["photo.png".to_string()]);
    let id = session.complete_image(tickets[0], 400.0, 300.0).unwrap();

    // 400x300 is capped to 300x225, preserving the ratio, centered on the
    // drop point.
    let quad = session.board().get(id).unwrap().quad;
    assert_eq!(quad.center(), Point::new(1000.0, 500.0));
    assert_eq!(quad.width(), 300.0);
    assert_eq!(quad.height(), 225.0);
    assert_eq!(quad.rotation(), 0.0);
    assert_eq!(quad.p1, Point::new(850.0, 387.5));
    assert_eq!(quad.p3, Point::new(1150.0, 612.5));
}

#[test]
fn a_dropped_image_lands_under_the_cursor_at_any_pan_and_zoom() {
    let mut session = BoardSession::new();

    // Zoom in a couple of notches and pan away from the origin.
    session.wheel(Point::new(300.0, 200.0), -1.0);
    session.wheel(Point::new(300.0, 200.0), -1.0);
    session.pointer_down_on_body(Point::new(50.0, 50.0));
    let _ = session.pointer_move(Point::new(90.0, 20.0));
    session.on_frame();
    session.pointer_up();

    let cursor = Point::new(640.0, 360.0);
    let expected = session.viewport().view_to_world_point(cursor);

    let tickets = session.drop_images(cursor, ["photo.png".to_string()]);
    let id = session.complete_image(tickets[0], 120.0, 120.0).unwrap();

    let center = session.board().get(id).unwrap().quad.center();
    assert!((center - expected).hypot() < 1e-9);
}

#[test]
fn simultaneous_drops_spread_and_complete_out_of_order() {
    let mut session = BoardSession::new();

    let tickets = session.drop_images(
        Point::new(100.0, 100.0),
        ["a.png".to_string(), "b.png".to_string(), "c.png".to_string()],
    );
    assert_eq!(tickets.len(), 3);
    assert_eq!(session.pending_images(), 3);

    // The decodes finish in reverse order; each inserts independently.
    let c = session.complete_image(tickets[2], 50.0, 50.0).unwrap();
    let a = session.complete_image(tickets[0], 50.0, 50.0).unwrap();
    let b = session.complete_image(tickets[1], 50.0, 50.0).unwrap();
    assert_eq!(session.pending_images(), 0);

    let center_of = |id| session.board().get(id).unwrap().quad.center();
    assert_eq!(center_of(a), Point::new(100.0, 100.0));
    assert_eq!(center_of(b), Point::new(200.0, 100.0));
    assert_eq!(center_of(c), Point::new(300.0, 100.0));
}

#[test]
fn a_failed_decode_inserts_nothing() {
    let mut session = BoardSession::new();
    let tickets = session.drop_images(Point::new(0.0, 0.0), ["broken.png".to_string()]);

    session.fail_image(tickets[0]);
    assert!(session.board().is_empty());
    assert_eq!(session.pending_images(), 0);

    // A late completion for the settled ticket stays dropped.
    assert_eq!(session.complete_image(tickets[0], 10.0, 10.0), None);
    assert!(session.board().is_empty());
}

#[test]
fn snapped_drag_moves_by_grid_multiples() {
    let mut session = BoardSession::new();
    let tickets = session.drop_images(Point::new(100.0, 100.0), ["img.png".to_string()]);
    let id = session.complete_image(tickets[0], 100.0, 100.0).unwrap();
    session.settings_mut().snap_to_grid = true;

    session.pointer_down_on_body(Point::new(100.0, 100.0));
    let _ = session.pointer_move(Point::new(150.0, 100.0));
    session.on_frame();
    session.pointer_up();

    // A raw offset of (50, 0) snaps to (40, 0) on the 20-unit grid.
    let quad = session.board().get(id).unwrap().quad;
    assert_eq!(quad.center(), Point::new(140.0, 100.0));
    assert_eq!(quad.width(), 100.0);
    assert_eq!(quad.height(), 100.0);
}

#[test]
fn dragging_converts_pointer_positions_through_the_viewport() {
    let mut session = BoardSession::new();
    let tickets = session.drop_images(Point::new(100.0, 100.0), ["img.png".to_string()]);
    let id = session.complete_image(tickets[0], 100.0, 100.0).unwrap();

    // Two zoom-in notches at the origin: scale 1.21, offset unchanged.
    session.wheel(Point::ZERO, -1.0);
    session.wheel(Point::ZERO, -1.0);
    let scale = session.viewport().scale();
    assert!((scale - 1.21).abs() < 1e-12);

    // The object's center sits at view (121, 121); drag it 60.5 view units
    // right, which is 50 world units at this zoom.
    session.pointer_down_on_body(Point::new(121.0, 121.0));
    let _ = session.pointer_move(Point::new(181.5, 121.0));
    session.on_frame();
    session.pointer_up();

    let center = session.board().get(id).unwrap().quad.center();
    assert!((center - Point::new(150.0, 100.0)).hypot() < 1e-9);
}

#[test]
fn rotating_a_quarter_turn_through_the_session() {
    let mut session = BoardSession::new();
    let tickets = session.drop_images(Point::new(200.0, 200.0), ["img.png".to_string()]);
    let id = session.complete_image(tickets[0], 100.0, 100.0).unwrap();

    session.pointer_down_on_handle(id, Handle::Rotate, Point::new(280.0, 200.0));
    let _ = session.pointer_move(Point::new(200.0, 280.0));
    session.on_frame();
    session.pointer_up();

    let quad = session.board().get(id).unwrap().quad;
    assert!((quad.rotation() - core::f64::consts::FRAC_PI_2).abs() < 1e-9);
    assert!((quad.center() - Point::new(200.0, 200.0)).hypot() < 1e-9);
    assert!(quad.is_parallelogram(1e-9));
}

#[test]
fn resizing_reads_the_aspect_lock_from_the_object() {
    let mut session = BoardSession::new();
    let tickets = session.drop_images(Point::new(100.0, 100.0), ["img.png".to_string()]);
    let id = session.complete_image(tickets[0], 100.0, 100.0).unwrap();

    // Images default to aspect-locked: a right-edge drag scales both axes.
    session.pointer_down_on_handle(
        id,
        Handle::Resize(ResizeDirection::Right),
        Point::new(150.0, 100.0),
    );
    let _ = session.pointer_move(Point::new(190.0, 100.0));
    session.on_frame();
    session.pointer_up();

    let quad = session.board().get(id).unwrap().quad;
    assert!((quad.width() - 140.0).abs() < 1e-9);
    assert!((quad.height() - 140.0).abs() < 1e-9);

    // Unlock and repeat: now only the width grows.
    session.board_mut().set_lock_aspect_ratio(id, false);
    session.pointer_down_on_handle(
        id,
        Handle::Resize(ResizeDirection::Right),
        Point::new(190.0, 100.0),
    );
    let _ = session.pointer_move(Point::new(210.0, 100.0));
    session.on_frame();
    session.pointer_up();

    let quad = session.board().get(id).unwrap().quad;
    assert!((quad.width() - 160.0).abs() < 1e-9);
    assert!((quad.height() - 140.0).abs() < 1e-9);
}

#[test]
fn wheel_zoom_out_recomputes_the_offset_around_the_cursor() {
    let mut session = BoardSession::new();

    session.wheel(Point::new(400.0, 300.0), 120.0);

    assert_eq!(session.viewport().scale(), 0.9);
    // World point (400, 300) still maps to view point (400, 300).
    let view = session.viewport().world_to_view_point(Point::new(400.0, 300.0));
    assert!((view - Point::new(400.0, 300.0)).hypot() < 1e-9);
}

#[test]
fn save_and_load_round_trip_through_storage() {
    let mut storage = MemoryStorage::new();
    let mut session = BoardSession::new();

    let tickets = session.drop_images(Point::new(50.0, 60.0), ["img.png".to_string()]);
    let id = session.complete_image(tickets[0], 80.0, 40.0).unwrap();
    session.settings_mut().name = "Inspiration".to_string();
    session.wheel(Point::new(10.0, 10.0), -1.0);

    storage.save(&session.snapshot("board-1")).unwrap();

    let mut reopened = BoardSession::new();
    let state = storage.load(None).unwrap().unwrap();
    assert_eq!(state.board_id, "board-1");
    reopened.restore(state);

    assert_eq!(reopened.settings().name, "Inspiration");
    assert_eq!(reopened.viewport().scale(), session.viewport().scale());
    assert_eq!(
        reopened.board().get(id).unwrap().quad,
        session.board().get(id).unwrap().quad
    );
}

#[test]
fn export_positions_reflect_the_camera_at_call_time() {
    let mut session = BoardSession::new();
    let tickets = session.drop_images(Point::new(100.0, 100.0), ["img.png".to_string()]);
    let id = session.complete_image(tickets[0], 100.0, 100.0).unwrap();

    session.wheel(Point::ZERO, 120.0);
    let export = session.export_view(2.0);

    assert_eq!(export.pixel_scale, 2.0);
    assert_eq!(export.crop, None);
    assert_eq!(export.objects.len(), 1);
    assert_eq!(export.objects[0].id, id);

    let expected = session
        .viewport()
        .world_to_view_point(session.board().get(id).unwrap().quad.p1);
    assert!((export.objects[0].corners[0] - expected).hypot() < 1e-12);
}

#[cfg(feature = "serde")]
#[test]
fn the_persisted_record_round_trips_through_serde() {
    let mut session = BoardSession::new();
    let tickets = session.drop_images(Point::new(25.0, 75.0), ["img.png".to_string()]);
    let id = session.complete_image(tickets[0], 60.0, 90.0).unwrap();
    session.settings_mut().background_color = "#112233".to_string();
    session.wheel(Point::new(40.0, 40.0), 1.0);

    let state = session.snapshot("board-9");
    let json = serde_json::to_string(&state).unwrap();
    let restored: corkboard_session::BoardState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.board_id, "board-9");
    assert_eq!(restored.settings, *session.settings());
    assert_eq!(restored.viewport, session.viewport().state());
    assert_eq!(restored.board.objects(), session.board().objects());
    assert_eq!(restored.board.get(id), session.board().get(id));
}

#[test]
fn export_lists_objects_back_to_front() {
    let mut session = BoardSession::new();
    let tickets = session.drop_images(
        Point::new(0.0, 0.0),
        ["a.png".to_string(), "b.png".to_string()],
    );
    let a = session.complete_image(tickets[0], 10.0, 10.0).unwrap();
    let b = session.complete_image(tickets[1], 10.0, 10.0).unwrap();

    session.board_mut().send_to_back(b);
    let export = session.export_view(1.0);
    let order: Vec<_> = export.objects.iter().map(|object| object.id).collect();
    assert_eq!(order, vec![b, a]);
}
