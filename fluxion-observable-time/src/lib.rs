// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Time-based operators for Fluxion observables.
//!
//! # Overview
//!
//! - **`SkipForExt`** - `.skip_for_on(duration, scheduler)`: drop every item that
//!   arrives before `duration` has elapsed on `scheduler`
//! - **`SkipForWithDefaultSchedulerExt`** - `.skip_for(duration)` on the
//!   [`DefaultScheduler`](fluxion_runtime::DefaultScheduler)
//! - **`SkipForObserver`** - The observer decorator behind both
//!
//! The window starts when the observer subscribes, not when the first item arrives.
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - timers run on tokio
//! - `runtime-smol` - timers run on smol / async-io
//!
//! Any other time source can be plugged in by implementing
//! [`Scheduler`](fluxion_runtime::Scheduler) and calling `skip_for_on`.

#[macro_use]
mod logging;

mod skip_for;

pub mod prelude;

pub use skip_for::{skip_for_on, SkipForExt, SkipForObserver};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use skip_for::{skip_for, SkipForWithDefaultSchedulerExt};

pub use fluxion_runtime::{ScheduledTask, Scheduler};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use fluxion_runtime::DefaultScheduler;
