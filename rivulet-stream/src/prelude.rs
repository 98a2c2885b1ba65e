// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Convenient re-exports of every stream operator trait.
//!
//! ```
//! use rivulet_stream::prelude::*;
//! ```

pub use crate::do_lifetime::DoLifetimeExt;
pub use crate::merge_signals::{merge_signals, SignalStream, ToSignalExt};
pub use crate::spy::SpyExt;
pub use crate::types::WithPrevious;
pub use crate::where_some::WhereSomeExt;
pub use crate::with_previous::WithPreviousExt;
pub use rivulet_core::{RivuletError, StreamItem};
