// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the time-based extension traits.
//!
//! ```ignore
//! use fluxion_observable_time::prelude::*;
//!
//! let late = source.skip_for(Duration::from_millis(100));
//! ```

pub use crate::skip_for::SkipForExt;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use crate::skip_for::SkipForWithDefaultSchedulerExt;

pub use fluxion_runtime::Scheduler;
