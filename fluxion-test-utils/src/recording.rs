// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use async_trait::async_trait;
use fluxion_core::{AsyncObserver, FluxionError, Notification, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// Observer writing every notification into a shared log.
#[derive(Debug)]
pub struct RecordingObserver<T> {
    log: Recorded<T>,
}

impl<T> RecordingObserver<T> {
    /// A fresh observer plus the handle reading its log.
    #[must_use]
    pub fn new() -> (Self, Recorded<T>) {
        let log = Recorded::new();
        (Self { log: log.clone() }, log)
    }

    /// An observer appending to an existing log.
    #[must_use]
    pub fn with_log(log: &Recorded<T>) -> Self {
        Self { log: log.clone() }
    }
}

#[async_trait]
impl<T: Send + 'static> AsyncObserver<T> for RecordingObserver<T> {
    async fn on_next(&mut self, item: T) -> Result<()> {
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

/// Read side of a [`RecordingObserver`]. Cheap to clone.
#[derive(Debug)]
pub struct Recorded<T> {
    notifications: Arc<Mutex<Vec<Notification<T>>>>,
}

impl<T> Recorded<T> {
    pub(crate) fn new() -> Self {
        Self {
            notifications: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn push(&self, notification: Notification<T>) {
        self.notifications.lock().push(notification);
    }

    /// Number of notifications recorded so far.
    pub fn len(&self) -> usize {
        self.notifications.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.lock().is_empty()
    }

    /// `true` once `on_completed` has been recorded.
    pub fn is_completed(&self) -> bool {
        self.notifications
            .lock()
            .iter()
            .any(|n| matches!(n, Notification::Completed))
    }

    /// The first recorded error, if any.
    pub fn error(&self) -> Option<FluxionError> {
        self.notifications.lock().iter().find_map(|n| match n {
            Notification::Error(error) => Some(error.clone()),
            _ => None,
        })
    }
}

impl<T: Clone> Recorded<T> {
    /// Snapshot of every notification, in arrival order.
    pub fn notifications(&self) -> Vec<Notification<T>> {
        self.notifications.lock().clone()
    }

    /// Snapshot of the `on_next` items, in arrival order.
    pub fn values(&self) -> Vec<T> {
        self.notifications
            .lock()
            .iter()
            .filter_map(|n| match n {
                Notification::Next(value) => Some(value.clone()),
                _ => None,
            })
            .collect()
    }
}

impl<T> Clone for Recorded<T> {
    fn clone(&self) -> Self {
        Self {
            notifications: self.notifications.clone(),
        }
    }
}
