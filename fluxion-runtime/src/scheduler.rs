// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Delayed, cancellable actions.
//!
//! A [`Scheduler`] runs an async action once a duration has elapsed and hands back a
//! [`ScheduledTask`] that cancels it. Cancelling after the action started has no
//! effect on the running action; cancelling before prevents it from ever running.
//!
//! # Example
//!
//! ```rust,no_run
//! use fluxion_runtime::{DefaultScheduler, Scheduler};
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let scheduler = DefaultScheduler::default();
//!
//! let task = scheduler.schedule_after(Duration::from_millis(100), || async {
//!     println!("fired");
//! });
//!
//! // Changed our mind
//! task.cancel();
//! # }
//! ```

use crate::runtime::Runtime;
use crate::timer::Timer;
use core::fmt;
use core::future::Future;
use core::marker::PhantomData;
use core::time::Duration;
use fluxion_core::Subscription;
use futures::future::{select, Either};

/// Time source able to run an action after a delay.
pub trait Scheduler: Clone + Send + Sync + fmt::Debug + 'static {
    /// Run `action` once `due` has elapsed, unless the returned task is cancelled first.
    fn schedule_after<F, Fut>(&self, due: Duration, action: F) -> ScheduledTask
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static;
}

/// Cancellation handle for an action registered with [`Scheduler::schedule_after`].
///
/// Dropping the handle cancels the action.
#[derive(Debug)]
pub struct ScheduledTask {
    subscription: Subscription,
}

impl ScheduledTask {
    /// Build a handle around the subscription the scheduler watches.
    #[must_use]
    pub fn new(subscription: Subscription) -> Self {
        Self { subscription }
    }

    /// Cancel the pending action. Idempotent.
    pub fn cancel(&self) {
        self.subscription.dispose();
    }

    /// Returns `true` once the task has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.subscription.is_disposed()
    }

    /// A subscription whose disposal cancels this task.
    ///
    /// Lets the task join a larger teardown without giving up ownership of the handle.
    #[must_use]
    pub fn subscription(&self) -> Subscription {
        self.subscription.clone()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// [`Scheduler`] backed by a [`Runtime`]: sleeps on the runtime's timer inside a
/// spawned task.
pub struct RuntimeScheduler<R: Runtime> {
    timer: R::Timer,
    _runtime: PhantomData<fn() -> R>,
}

impl<R: Runtime> RuntimeScheduler<R> {
    /// Scheduler using the given timer instance.
    pub fn new(timer: R::Timer) -> Self {
        Self {
            timer,
            _runtime: PhantomData,
        }
    }

    /// The timer this scheduler sleeps on.
    pub fn timer(&self) -> &R::Timer {
        &self.timer
    }
}

impl<R: Runtime> Scheduler for RuntimeScheduler<R> {
    fn schedule_after<F, Fut>(&self, due: Duration, action: F) -> ScheduledTask
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let subscription = Subscription::empty();
        let cancelled = subscription.disposed();
        let guard = subscription.clone();
        let sleep = self.timer.sleep_future(due);

        trace!(?due, "action scheduled");
        R::spawn(async move {
            match select(cancelled, sleep).await {
                Either::Left(_) => trace!("scheduled action cancelled"),
                Either::Right(_) if guard.is_disposed() => {
                    trace!("scheduled action cancelled at due time");
                }
                Either::Right(_) => {
                    trace!("scheduled action fired");
                    action().await;
                }
            }
        });

        ScheduledTask::new(subscription)
    }
}

impl<R: Runtime> Default for RuntimeScheduler<R> {
    fn default() -> Self {
        Self::new(R::Timer::default())
    }
}

impl<R: Runtime> Clone for RuntimeScheduler<R> {
    fn clone(&self) -> Self {
        Self::new(self.timer.clone())
    }
}

impl<R: Runtime> fmt::Debug for RuntimeScheduler<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeScheduler")
            .field("timer", &self.timer)
            .finish()
    }
}
