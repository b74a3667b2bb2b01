// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Observers that fail on purpose.
//!
//! Used to check that operators hand downstream failures back to whoever is
//! driving them instead of swallowing them.

use crate::recording::Recorded;
use async_trait::async_trait;
use fluxion_core::{AsyncObserver, FluxionError, Notification, Result};

/// Records like [`RecordingObserver`](crate::RecordingObserver) but returns an
/// error from the `fail_at`-th `on_next` call (1-based).
///
/// The failing item is not recorded.
///
/// # Examples
///
/// ```rust
/// use fluxion_core::AsyncObserver;
/// use fluxion_test_utils::FailingObserver;
///
/// # #[tokio::main]
/// # async fn main() {
/// let (mut observer, recorded) = FailingObserver::new(2);
///
/// assert!(observer.on_next(1).await.is_ok());
/// assert!(observer.on_next(2).await.is_err());
/// assert_eq!(recorded.values(), vec![1]);
/// # }
/// ```
#[derive(Debug)]
pub struct FailingObserver<T> {
    log: Recorded<T>,
    fail_at: usize,
    seen: usize,
}

impl<T> FailingObserver<T> {
    #[must_use]
    pub fn new(fail_at: usize) -> (Self, Recorded<T>) {
        let log = Recorded::new();
        (
            Self {
                log: log.clone(),
                fail_at,
                seen: 0,
            },
            log,
        )
    }
}

/// The error every [`FailingObserver`] returns.
#[must_use]
pub fn injected_error() -> FluxionError {
    FluxionError::stream_error("injected failure")
}

#[async_trait]
impl<T: Send + 'static> AsyncObserver<T> for FailingObserver<T> {
    async fn on_next(&mut self, item: T) -> Result<()> {
        self.seen += 1;
        if self.seen == self.fail_at {
            return Err(injected_error());
        }

        self.log.push(Notification::Next(item));
        Ok(())
    }

    async fn on_error(&mut self, error: FluxionError) -> Result<()> {
        self.log.push(Notification::Error(error));
        Ok(())
    }

    async fn on_completed(&mut self) -> Result<()> {
        self.log.push(Notification::Completed);
        Ok(())
    }
}
