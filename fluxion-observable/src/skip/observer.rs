// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use fluxion_core::{AsyncObserver, FluxionError, Result};

/// Observer decorator that drops the first `count` items.
///
/// `remaining` is only reachable through `&mut self`, so the single owner driving
/// the observer is also the only one mutating the counter.
///
/// The decorator owns no subscription of its own: it stops receiving items only
/// when the source honours the disposal of its upstream subscription.
#[derive(Debug)]
pub struct SkipObserver<O> {
    downstream: O,
    remaining: usize,
}

impl<O> SkipObserver<O> {
    /// Wrap `downstream`, discarding its first `count` items.
    ///
    /// # Errors
    ///
    /// `FluxionError::InvalidArgument` when `count` is zero.
    pub fn new(downstream: O, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(FluxionError::invalid_argument(
                "count",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            downstream,
            remaining: count,
        })
    }

    /// Items still to be discarded.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Unwrap the decorated observer.
    pub fn into_inner(self) -> O {
        self.downstream
    }
}

#[async_trait]
impl<T, O> AsyncObserver<T> for SkipObserver<O>
where
    T: Send + 'static,
    O: AsyncObserver<T>,
{
    async fn on_next(&mut self, item: T) -> Result<()> {
        if self.remaining > 0 {
            self.remaining -= 1;
            trace!(remaining = self.remaining, "skip: item discarded");
            return Ok(());
        }

        self.downstream.on_next(item).await
    }

    async fn on_error(&mut self, error: FluxionError) -> Result<()> {
        self.downstream.on_error(error).await
    }

    async fn on_completed(&mut self) -> Result<()> {
        self.downstream.on_completed().await
    }
}
