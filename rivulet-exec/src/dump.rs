// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::consumer::{spawn_consumer, Notification};
use core::fmt::Debug;
use core::ops::ControlFlow;
use futures::Stream;
use rivulet_core::{StreamItem, Subscription};

/// Debugging subscriber that logs everything a stream produces.
pub trait DumpExt<T>: Stream<Item = StreamItem<T>> + Sized {
    /// Consumes the stream and logs each notification prefixed with `name`:
    /// `{name}-->{value:?}`, `{name} failed-->{error}` and `{name} completed`.
    ///
    /// Outside a tokio runtime nothing is consumed; the failure is logged and an
    /// already-closed subscription is returned.
    fn dump(self, name: impl Into<String>) -> Subscription;
}

impl<S, T> DumpExt<T> for S
where
    S: Stream<Item = StreamItem<T>> + Send + 'static,
    T: Debug + Send + 'static,
{
    fn dump(self, name: impl Into<String>) -> Subscription {
        let name = name.into();
        let task_name = name.clone();

        let spawned = spawn_consumer(self, move |notification| match notification {
            Notification::Next(value) => {
                info!("{}-->{:?}", task_name, value);
                ControlFlow::Continue(())
            }
            Notification::Error(error) => {
                warn!("{} failed-->{}", task_name, error);
                ControlFlow::Break(())
            }
            Notification::Completed => {
                info!("{} completed", task_name);
                ControlFlow::Break(())
            }
        });

        spawned.unwrap_or_else(|error| {
            warn!("{} failed-->{}", name, error);
            Subscription::empty()
        })
    }
}
