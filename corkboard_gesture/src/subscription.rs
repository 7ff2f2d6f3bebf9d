// Copyright 2026 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped gesture lifetime: teardown that runs exactly once.
//!
//! Beginning a gesture usually acquires resources outside the engine — a
//! global pointer-up listener, a cursor override, a capture grab. Those must
//! be released exactly once no matter how the gesture ends: a regular
//! pointer-up, the pointer leaving the window, or the owning component being
//! torn down mid-drag.
//!
//! [`GestureSubscription`] makes the release structural instead of a
//! convention: `begin gesture` returns the subscription, and the teardown
//! closure runs either on an explicit [`GestureSubscription::end`] or when
//! the subscription is dropped — whichever happens first, and never twice.

/// RAII scope for one gesture; runs its teardown exactly once.
#[derive(Debug)]
pub struct GestureSubscription<F: FnOnce()> {
    on_end: Option<F>,
}

impl<F: FnOnce()> GestureSubscription<F> {
    /// Creates a subscription whose `on_end` runs when the gesture ends.
    #[must_use]
    pub const fn new(on_end: F) -> Self {
        Self { on_end: Some(on_end) }
    }

    /// Ends the gesture now, running the teardown.
    pub fn end(mut self) {
        if let Some(on_end) = self.on_end.take() {
            on_end();
        }
    }
}

impl<F: FnOnce()> Drop for GestureSubscription<F> {
    fn drop(&mut self) {
        if let Some(on_end) = self.on_end.take() {
            on_end();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn explicit_end_runs_teardown_once() {
        let calls = Cell::new(0);
        let subscription = GestureSubscription::new(|| calls.set(calls.get() + 1));

        subscription.end();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn drop_runs_teardown_once() {
        let calls = Cell::new(0);
        {
            let _subscription = GestureSubscription::new(|| calls.set(calls.get() + 1));
        }
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn end_then_drop_does_not_run_teardown_twice() {
        let calls = Cell::new(0);
        let subscription = GestureSubscription::new(|| calls.set(calls.get() + 1));

        // `end` consumes the subscription, and its internal drop must not
        // fire the teardown again.
        subscription.end();
        assert_eq!(calls.get(), 1);
    }
}
