// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Composite owner that releases a group of subscriptions together.

use crate::Subscription;
use parking_lot::Mutex;
use std::fmt;

struct BagState {
    disposed: bool,
    items: Vec<Subscription>,
}

/// Aggregates [`Subscription`]s and releases all of them at once.
///
/// - Items are released in the order they were added.
/// - Adding to a bag that is already disposed releases the item immediately.
/// - Disposing twice is a no-op; dropping the bag disposes it.
///
/// ```
/// use rivulet_core::{DisposeBag, Subscription};
/// use std::sync::Arc;
/// use parking_lot::Mutex;
///
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let bag = DisposeBag::new();
///
/// let first = log.clone();
/// bag.add(Subscription::new(move || first.lock().push("inner")));
/// let second = log.clone();
/// bag.add_action(move || second.lock().push("hook"));
///
/// bag.dispose();
/// assert_eq!(*log.lock(), vec!["inner", "hook"]);
/// ```
pub struct DisposeBag {
    state: Mutex<BagState>,
}

impl DisposeBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BagState {
                disposed: false,
                items: Vec::new(),
            }),
        }
    }

    /// Adds a subscription to the bag.
    pub fn add(&self, subscription: Subscription) {
        let mut state = self.state.lock();
        if state.disposed {
            drop(state);
            subscription.unsubscribe();
            return;
        }
        state.items.push(subscription);
    }

    /// Adds a bare release action to the bag.
    pub fn add_action<F>(&self, release: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.add(Subscription::new(release));
    }

    /// Releases every held subscription in insertion order.
    pub fn dispose(&self) {
        let items = {
            let mut state = self.state.lock();
            state.disposed = true;
            std::mem::take(&mut state.items)
        };

        for item in items {
            item.unsubscribe();
        }
    }

    /// Returns `true` once [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.state.lock().disposed
    }

    /// Number of subscriptions currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().items.len()
    }

    /// Returns `true` if the bag holds no subscriptions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DisposeBag {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DisposeBag {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for DisposeBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("DisposeBag")
            .field("disposed", &state.disposed)
            .field("len", &state.items.len())
            .finish()
    }
}
