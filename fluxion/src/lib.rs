// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! # Fluxion
//!
//! Async, push-based observables with awaited observers and cancellable subscriptions.
//!
//! ## Overview
//!
//! A source pushes items into an [`AsyncObserver`] one call at a time and awaits each
//! call before pushing the next. Operators wrap the observer on its way to the source,
//! and every `subscribe` returns a [`Subscription`] that detaches it again.
//!
//! - `skip(count)` - drop the first `count` items
//! - `skip_for(duration)` - drop the items arriving during the first `duration`
//! - `skip_for_on(duration, scheduler)` - same, on an explicit [`Scheduler`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fluxion_async_rx::prelude::*;
//! use fluxion_async_rx::{observer, Subject};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> fluxion_async_rx::Result<()> {
//!     let readings = Subject::<f64>::new();
//!
//!     // Ignore the warm-up period, then the first settled reading
//!     let subscription = readings
//!         .as_observable()
//!         .skip_for(Duration::from_secs(2))
//!         .skip(1)
//!         .subscribe(observer::create(
//!             |value: f64| async move {
//!                 println!("reading: {value}");
//!                 Ok(())
//!             },
//!             |error| async move {
//!                 eprintln!("sensor failed: {error}");
//!                 Ok(())
//!             },
//!             || async { Ok(()) },
//!         ))
//!         .await?;
//!
//!     readings.next(0.1).await?;
//!     subscription.dispose();
//!     Ok(())
//! }
//! ```
//!
//! ## Runtime Support
//!
//! - `runtime-tokio` (default)
//! - `runtime-smol`

// Re-export core types
pub use fluxion_core::{
    observable, observer, AsyncObservable, AsyncObserver, BoxObserver, FluxionError,
    IntoFluxionError, Notification, Observable, Result, ResultExt, Subject, Subscription,
};

// Re-export operators and sources
pub use fluxion_observable::{empty, from_iter, never, skip, throw, SkipExt, SkipObserver};
pub use fluxion_observable_time::{skip_for_on, SkipForExt, SkipForObserver};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use fluxion_observable_time::{skip_for, SkipForWithDefaultSchedulerExt};

// Re-export scheduling
pub use fluxion_runtime::{RuntimeScheduler, ScheduledTask, Scheduler};

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub use fluxion_runtime::{DefaultRuntime, DefaultScheduler};

/// Prelude module for convenient imports
pub mod prelude {
    pub use fluxion_observable::prelude::*;
    pub use fluxion_observable_time::prelude::*;
}
