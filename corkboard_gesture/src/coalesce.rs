// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame coalescing: bound geometry writes to one per repaint.
//!
//! Pointer-move events arrive much faster than frames are painted. The
//! [`MoveCoalescer`] is a single pending-update slot with cancel-replace
//! semantics: submitting a new update **replaces** any pending one (the
//! superseded value is dropped, never queued), and the host drains at most
//! one value per frame. Fast mouse movement therefore costs one geometry
//! write per frame while the final position is never lost.
//!
//! The slot is independent of any rendering runtime. The host owns the
//! frame source (a `requestAnimationFrame`-style callback, a vsync signal, a
//! test loop) and wires it up as:
//!
//! 1. On each move event, call [`MoveCoalescer::submit`]. A `true` return
//!    means no frame callback was outstanding, so request one.
//! 2. In the frame callback, call [`MoveCoalescer::take`] and apply the
//!    update, if any.
//! 3. On gesture end, call [`MoveCoalescer::cancel`] to drop whatever is
//!    still pending.

/// Single-slot pending update with cancel-replace semantics.
#[derive(Debug, Clone, Default)]
pub struct MoveCoalescer<T> {
    pending: Option<T>,
}

impl<T> MoveCoalescer<T> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Submits an update, replacing any pending one.
    ///
    /// Returns `true` if the slot was empty, i.e. the host must request a
    /// frame callback; while a callback is already outstanding, resubmitting
    /// only swaps the payload.
    pub fn submit(&mut self, update: T) -> bool {
        let was_empty = self.pending.is_none();
        self.pending = Some(update);
        was_empty
    }

    /// Drains the pending update, if any.
    ///
    /// Called once per frame; returns at most one value no matter how many
    /// were submitted since the last call.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Drops the pending update without applying it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` if an update is waiting for the next frame.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}
