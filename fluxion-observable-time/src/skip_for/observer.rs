// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use core::time::Duration;
use fluxion_core::{AsyncObserver, FluxionError, Result, Subscription};
use fluxion_runtime::{ScheduledTask, Scheduler};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipState {
    Skipping,
    Forwarding,
}

/// Observer decorator that drops items until a timer fires.
///
/// The timer is scheduled by [`SkipForObserver::new`] and only ever moves the state
/// from skipping to forwarding. Dropping the decorator cancels a timer that has not
/// fired yet.
///
/// [`SkipForObserver::subscription`] returns the handle that shuts the decorator
/// down: disposing it cancels the timer and makes every later notification a no-op.
#[derive(Debug)]
pub struct SkipForObserver<O> {
    downstream: O,
    state: Arc<Mutex<SkipState>>,
    timer: ScheduledTask,
    subscription: Subscription,
}

impl<O> SkipForObserver<O> {
    /// Wrap `downstream` and open a window of `duration` on `scheduler`.
    ///
    /// # Errors
    ///
    /// `FluxionError::InvalidArgument` when `duration` is zero.
    pub fn new<S: Scheduler>(downstream: O, duration: Duration, scheduler: &S) -> Result<Self> {
        if duration.is_zero() {
            return Err(FluxionError::invalid_argument(
                "duration",
                "must be greater than zero",
            ));
        }

        let state = Arc::new(Mutex::new(SkipState::Skipping));
        let shared = state.clone();
        let timer = scheduler.schedule_after(duration, move || async move {
            *shared.lock() = SkipState::Forwarding;
            trace!("skip_for: window elapsed, forwarding");
        });

        let subscription = Subscription::empty();
        subscription.add(timer.subscription());

        Ok(Self {
            downstream,
            state,
            timer,
            subscription,
        })
    }

    /// Handle whose disposal cancels the timer and silences the decorator.
    #[must_use]
    pub fn subscription(&self) -> Subscription {
        self.subscription.clone()
    }

    /// `true` once the window has elapsed.
    pub fn is_forwarding(&self) -> bool {
        *self.state.lock() == SkipState::Forwarding
    }

    fn is_disposed(&self) -> bool {
        if self.subscription.is_disposed() {
            debug!("skip_for: notification after disposal ignored");
            return true;
        }
        false
    }
}

#[async_trait]
impl<T, O> AsyncObserver<T> for SkipForObserver<O>
where
    T: Send + 'static,
    O: AsyncObserver<T>,
{
    async fn on_next(&mut self, item: T) -> Result<()> {
        if self.is_disposed() {
            return Ok(());
        }

        let forwarding = self.is_forwarding();
        if !forwarding {
            trace!("skip_for: item discarded");
            return Ok(());
        }

        self.downstream.on_next(item).await
    }

    async fn on_error(&mut self, error: FluxionError) -> Result<()> {
        if self.is_disposed() {
            return Ok(());
        }

        self.timer.cancel();
        self.downstream.on_error(error).await
    }

    async fn on_completed(&mut self) -> Result<()> {
        if self.is_disposed() {
            return Ok(());
        }

        self.timer.cancel();
        self.downstream.on_completed().await
    }
}
