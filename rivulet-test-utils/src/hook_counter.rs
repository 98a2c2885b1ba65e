// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counter handing out hook closures for lifecycle tests.
#[derive(Clone, Debug, Default)]
pub struct HookCounter {
    count: Arc<AtomicUsize>,
}

impl HookCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A closure that increments the counter each time it is called.
    pub fn hook(&self) -> impl FnOnce() + Send + 'static {
        let count = self.count.clone();
        move || {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// A fallible hook for APIs expecting `Result<()>`.
    pub fn ok_hook(&self) -> impl FnOnce() -> rivulet_core::Result<()> + Send + 'static {
        let count = self.count.clone();
        move || {
            count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}
