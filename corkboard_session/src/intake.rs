// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Asynchronous image intake bookkeeping.
//!
//! Dropping an image does not create geometry immediately: the host must
//! first decode the file to learn its pixel size. The session therefore
//! hands out a [`DecodeTicket`] per dropped image, remembers where on the
//! board it belongs, and builds the object only when the host reports the
//! decode result. Tickets are independent: decodes may complete out of
//! order, and each completion inserts on its own.

use alloc::string::String;

use hashbrown::HashMap;
use kurbo::Point;

/// Identifies one in-flight image decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DecodeTicket(u64);

/// A dropped image waiting for its decode to finish.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct PendingImage {
    /// World-space point the image will be centered on.
    pub(crate) world_point: Point,
    /// Embedded data URI or remote URL.
    pub(crate) content: String,
}

/// Ticket allocation and the pending-decode table.
#[derive(Clone, Debug, Default)]
pub(crate) struct ImageIntake {
    pending: HashMap<DecodeTicket, PendingImage>,
    next_ticket: u64,
}

impl ImageIntake {
    /// Registers a dropped image and returns its ticket.
    pub(crate) fn begin(&mut self, world_point: Point, content: String) -> DecodeTicket {
        let ticket = DecodeTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.insert(
            ticket,
            PendingImage {
                world_point,
                content,
            },
        );
        ticket
    }

    /// Settles a ticket, returning the pending entry if it was still open.
    ///
    /// Used for both successful and failed decodes; a failure simply drops
    /// the returned entry. Unknown or already-settled tickets yield `None`.
    pub(crate) fn settle(&mut self, ticket: DecodeTicket) -> Option<PendingImage> {
        self.pending.remove(&ticket)
    }

    /// Returns the number of decodes still in flight.
    pub(crate) fn in_flight(&self) -> usize {
        self.pending.len()
    }
}
