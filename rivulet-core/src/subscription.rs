// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Ownership handle for an active stream connection.

use parking_lot::Mutex;
use std::fmt;

type ReleaseAction = Box<dyn FnOnce() + Send>;

/// Handle holding exactly one release action.
///
/// The action runs at most once: the first call to [`unsubscribe`](Self::unsubscribe)
/// runs it, later calls do nothing. Dropping the handle releases it, so a
/// subscription lives exactly as long as its owner keeps it.
///
/// ```
/// use rivulet_core::Subscription;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let released = Arc::new(AtomicUsize::new(0));
/// let counter = released.clone();
/// let subscription = Subscription::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// subscription.unsubscribe();
/// subscription.unsubscribe();
/// drop(subscription);
///
/// assert_eq!(released.load(Ordering::SeqCst), 1);
/// ```
pub struct Subscription {
    release: Mutex<Option<ReleaseAction>>,
}

impl Subscription {
    /// Creates a subscription that runs `release` when released.
    pub fn new<F>(release: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            release: Mutex::new(Some(Box::new(release))),
        }
    }

    /// Creates a subscription with nothing to release.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            release: Mutex::new(None),
        }
    }

    /// Runs the release action if it has not run yet.
    pub fn unsubscribe(&self) {
        // Take under the lock, run outside it: the action may re-enter.
        let action = self.release.lock().take();
        if let Some(action) = action {
            action();
        }
    }

    /// Returns `true` once the release action has run (or there never was one).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.release.lock().is_none()
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::empty()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(action) = self.release.get_mut().take() {
            action();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("closed", &self.is_closed())
            .finish()
    }
}
