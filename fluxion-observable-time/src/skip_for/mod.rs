// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension traits providing the duration-based `skip_for` operator.
//!
//! Every subscriber gets its own window: a one-shot timer of `duration` is scheduled
//! when the observer subscribes. Items arriving before the timer fires are
//! discarded, items arriving afterwards are forwarded. Errors and completion are
//! forwarded at any time and cancel a timer that is still pending.
//!
//! Disposing the returned subscription cancels the timer and detaches the
//! observer from the source.
//!
//! A zero duration returns the source itself.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(feature = "runtime-tokio")]
//! use fluxion_observable_time::prelude::*;
//! use fluxion_core::{observer, Subject};
//! use std::time::Duration;
//!
//! # #[cfg(feature = "runtime-tokio")]
//! # #[tokio::main]
//! # async fn main() -> fluxion_core::Result<()> {
//! let subject = Subject::<i32>::new();
//!
//! let subscription = subject
//!     .as_observable()
//!     .skip_for(Duration::from_millis(100))
//!     .subscribe(observer::create(
//!         |item: i32| async move {
//!             println!("late item: {item}");
//!             Ok(())
//!         },
//!         |_| async { Ok(()) },
//!         || async { Ok(()) },
//!     ))
//!     .await?;
//!
//! subject.next(1).await?; // discarded
//! tokio::time::sleep(Duration::from_millis(150)).await;
//! subject.next(2).await?; // forwarded
//!
//! subscription.dispose();
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "runtime-tokio"))]
//! # fn main() {}
//! ```

mod observer;

pub use observer::SkipForObserver;

use core::time::Duration;
use fluxion_core::{observable, BoxObserver, Observable};
use fluxion_runtime::Scheduler;

/// Extension trait providing `skip_for` with an explicit scheduler.
pub trait SkipForExt<T: Send + 'static>: Sized {
    /// Discard items that arrive before `duration` has elapsed on `scheduler`.
    ///
    /// # Arguments
    ///
    /// * `duration` - Length of the window opened at subscription time
    /// * `scheduler` - Time source running the window's timer
    fn skip_for_on<S: Scheduler>(self, duration: Duration, scheduler: S) -> Observable<T>;
}

impl<T: Send + 'static> SkipForExt<T> for Observable<T> {
    fn skip_for_on<S: Scheduler>(self, duration: Duration, scheduler: S) -> Observable<T> {
        skip_for_on(self, duration, scheduler)
    }
}

/// Extension trait providing `skip_for` on the default scheduler.
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub trait SkipForWithDefaultSchedulerExt<T: Send + 'static>: Sized {
    /// Discard items that arrive before `duration` has elapsed.
    ///
    /// The timer runs on [`DefaultScheduler`](fluxion_runtime::DefaultScheduler).
    fn skip_for(self, duration: Duration) -> Observable<T>;
}

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
impl<T: Send + 'static> SkipForWithDefaultSchedulerExt<T> for Observable<T> {
    fn skip_for(self, duration: Duration) -> Observable<T> {
        skip_for(self, duration)
    }
}

/// Free-function form of [`SkipForWithDefaultSchedulerExt::skip_for`].
#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub fn skip_for<T: Send + 'static>(source: Observable<T>, duration: Duration) -> Observable<T> {
    skip_for_on(source, duration, fluxion_runtime::DefaultScheduler::default())
}

/// Free-function form of [`SkipForExt::skip_for_on`].
pub fn skip_for_on<T, S>(source: Observable<T>, duration: Duration, scheduler: S) -> Observable<T>
where
    T: Send + 'static,
    S: Scheduler,
{
    if duration.is_zero() {
        return source;
    }

    observable::create(move |observer: BoxObserver<T>| {
        let source = source.clone();
        let scheduler = scheduler.clone();
        async move {
            // The window opens here, before the source gets a chance to push
            let decorator = SkipForObserver::new(observer, duration, &scheduler)?;
            let subscription = decorator.subscription();

            let upstream = source.subscribe(decorator).await?;
            subscription.add(upstream);

            Ok(subscription)
        }
    })
}
