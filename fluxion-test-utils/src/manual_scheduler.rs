// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! A scheduler driven by hand.
//!
//! [`ManualScheduler`] never looks at a clock. Scheduled actions wait until the test
//! calls [`ManualScheduler::advance`], which moves virtual time forward and runs
//! every action that became due, in due order.

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::time::Duration;
use fluxion_core::Subscription;
use fluxion_runtime::{ScheduledTask, Scheduler};
use parking_lot::Mutex;
use std::sync::Arc;

type Action = Box<dyn FnOnce() -> Pin<Box<dyn Future<Output = ()> + Send>> + Send>;

struct Pending {
    at: Duration,
    subscription: Subscription,
    action: Action,
}

#[derive(Default)]
struct State {
    now: Duration,
    pending: Vec<Pending>,
}

/// Virtual-time [`Scheduler`] for deterministic tests.
///
/// # Example
///
/// ```rust
/// use fluxion_runtime::Scheduler;
/// use fluxion_test_utils::ManualScheduler;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() {
/// let scheduler = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = fired.clone();
///
/// let _task = scheduler.schedule_after(Duration::from_secs(5), move || async move {
///     flag.store(true, Ordering::SeqCst);
/// });
///
/// scheduler.advance(Duration::from_secs(4)).await;
/// assert!(!fired.load(Ordering::SeqCst));
///
/// scheduler.advance(Duration::from_secs(1)).await;
/// assert!(fired.load(Ordering::SeqCst));
/// # }
/// ```
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<State>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Actions neither fired nor cancelled yet.
    pub fn pending(&self) -> usize {
        self.state
            .lock()
            .pending
            .iter()
            .filter(|pending| !pending.subscription.is_disposed())
            .count()
    }

    /// Move virtual time forward by `by` and run every action that became due.
    ///
    /// Actions cancelled before their turn are dropped without running.
    pub async fn advance(&self, by: Duration) {
        let mut due = {
            let mut state = self.state.lock();
            state.now += by;
            let now = state.now;

            let (due, later): (Vec<_>, Vec<_>) = core::mem::take(&mut state.pending)
                .into_iter()
                .partition(|pending| pending.at <= now);
            state.pending = later;
            due
        };
        due.sort_by_key(|pending| pending.at);

        for pending in due {
            if pending.subscription.is_disposed() {
                continue;
            }
            (pending.action)().await;
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_after<F, Fut>(&self, due: Duration, action: F) -> ScheduledTask
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let subscription = Subscription::empty();
        let mut state = self.state.lock();
        state
            .pending
            .retain(|pending| !pending.subscription.is_disposed());
        let at = state.now + due;
        state.pending.push(Pending {
            at,
            subscription: subscription.clone(),
            action: Box::new(move || Box::pin(action())),
        });

        ScheduledTask::new(subscription)
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}
