// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Session: one open board, wired end to end.
//!
//! [`BoardSession`] is the explicitly owned state container tying the other
//! Corkboard crates together: the object store (`corkboard_board`), the
//! camera (`corkboard_view2d`), and the gesture state machines
//! (`corkboard_gesture`). Hosts construct a session per open board and pass
//! it wherever it is needed; there is no process-wide singleton, so tests
//! and multi-board UIs instantiate isolated sessions freely.
//!
//! The session consumes an abstract input vocabulary — pointer downs on
//! object bodies or transform handles, pointer moves, pointer up, wheel
//! scrolls, image drops — and owns no window or event-loop lifecycle. It is
//! single-threaded and event-driven: every mutation is a synchronous,
//! whole-value replacement, and pointer-move work is coalesced to at most
//! one geometry write per frame via [`BoardSession::on_frame`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use corkboard_session::BoardSession;
//!
//! let mut session = BoardSession::new();
//!
//! // Drop an image; geometry is created once the host reports the decode.
//! let tickets = session.drop_images(Point::new(400.0, 300.0), ["a.png".to_string()]);
//! let id = session.complete_image(tickets[0], 400.0, 300.0).unwrap();
//!
//! // Drag it 50 units right: down on the body, move, frame, up.
//! session.pointer_down_on_body(Point::new(400.0, 300.0));
//! if session.pointer_move(Point::new(450.0, 300.0)) {
//!     session.on_frame();
//! }
//! session.pointer_up();
//!
//! let quad = session.board().get(id).unwrap().quad;
//! assert_eq!(quad.center(), Point::new(450.0, 300.0));
//! ```
//!
//! The persistence and export collaborators are specified only at the
//! boundary the session produces: [`BoardStorage`] consumes the plain
//! [`BoardState`] record, and [`ExportView`] hands the rasterizer accurate
//! view-space corner positions at snapshot time.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod export;
mod intake;
mod session;
mod storage;

pub use export::{ExportObject, ExportView};
pub use intake::DecodeTicket;
pub use session::{BoardSession, Handle};
pub use storage::{BoardState, BoardStorage, BoardSummary, MemoryStorage};
