// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Hot, multi-subscriber subject.
//!
//! A [`Subject`] forwards every notification it receives to all observers subscribed
//! at that moment.
//!
//! ## Characteristics
//!
//! - **Hot**: late subscribers do not receive past items.
//! - **Serialized**: notifications are delivered one at a time; each observer call is
//!   awaited before the next one starts.
//! - **Thread-safe**: cheap to clone; all clones share the same state.
//! - **Terminal**: after `error` or `complete` the subject is closed and refuses both
//!   new observers and new notifications.
//!
//! Observers must not call back into the same subject from inside a notification.
//!
//! ## Example
//!
//! ```
//! use fluxion_core::{observer, Subject};
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//!
//! # #[tokio::main]
//! # async fn main() -> fluxion_core::Result<()> {
//! let subject = Subject::<i32>::new();
//! let received = Arc::new(Mutex::new(Vec::new()));
//! let sink = received.clone();
//!
//! subject
//!     .as_observable()
//!     .subscribe(observer::create(
//!         move |item: i32| {
//!             let sink = sink.clone();
//!             async move {
//!                 sink.lock().push(item);
//!                 Ok(())
//!             }
//!         },
//!         |_| async { Ok(()) },
//!         || async { Ok(()) },
//!     ))
//!     .await?;
//!
//! subject.next(1).await?;
//! subject.next(2).await?;
//! subject.complete().await?;
//!
//! assert_eq!(*received.lock(), vec![1, 2]);
//! # Ok(())
//! # }
//! ```

use crate::notification::Notification;
use crate::observable::{AsyncObservable, Observable};
use crate::observer::{AsyncObserver, BoxObserver};
use crate::subscription::Subscription;
use async_trait::async_trait;
use fluxion_error::{FluxionError, Result};
use futures::lock::Mutex;
use std::sync::Arc;

struct Subscriber<T: Send + 'static> {
    observer: BoxObserver<T>,
    subscription: Subscription,
}

struct SubjectState<T: Send + 'static> {
    closed: bool,
    subscribers: Vec<Subscriber<T>>,
}

/// A hot subject broadcasting to all current subscribers.
///
/// See the [module documentation](crate::subject) for details.
pub struct Subject<T: Clone + Send + 'static> {
    state: Arc<Mutex<SubjectState<T>>>,
}

impl<T: Clone + Send + 'static> Subject<T> {
    /// Creates a new open subject with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SubjectState {
                closed: false,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Push an item to every live subscriber.
    ///
    /// # Errors
    ///
    /// - `FluxionError::SubscriptionError` if the subject is closed
    /// - the first error returned by a subscriber's `on_next`
    pub async fn next(&self, item: T) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.closed {
            return Err(closed_error());
        }

        state
            .subscribers
            .retain(|subscriber| !subscriber.subscription.is_disposed());

        for subscriber in state.subscribers.iter_mut() {
            // A previous subscriber may have disposed this one during the broadcast
            if subscriber.subscription.is_disposed() {
                continue;
            }
            subscriber.observer.on_next(item.clone()).await?;
        }

        Ok(())
    }

    /// Terminate every subscriber with `error` and close the subject.
    ///
    /// # Errors
    ///
    /// Same as [`Subject::next`].
    pub async fn error(&self, error: FluxionError) -> Result<()> {
        self.terminate(Notification::Error(error)).await
    }

    /// Complete every subscriber and close the subject.
    ///
    /// # Errors
    ///
    /// Same as [`Subject::next`].
    pub async fn complete(&self) -> Result<()> {
        self.terminate(Notification::Completed).await
    }

    /// Returns `true` once the subject has been terminated.
    pub async fn is_closed(&self) -> bool {
        self.state.lock().await.closed
    }

    /// Number of subscribers that have not been disposed.
    pub async fn subscriber_count(&self) -> usize {
        self.state
            .lock()
            .await
            .subscribers
            .iter()
            .filter(|subscriber| !subscriber.subscription.is_disposed())
            .count()
    }

    /// A clonable observable view of this subject.
    #[must_use]
    pub fn as_observable(&self) -> Observable<T> {
        Observable::new(self.clone())
    }

    async fn terminate(&self, notification: Notification<T>) -> Result<()> {
        let mut state = self.state.lock().await;
        if state.closed {
            return Err(closed_error());
        }

        state.closed = true;
        let subscribers = core::mem::take(&mut state.subscribers);
        trace!(subscribers = subscribers.len(), "subject terminated");

        for mut subscriber in subscribers {
            if subscriber.subscription.is_disposed() {
                continue;
            }
            notification
                .clone()
                .accept(&mut subscriber.observer)
                .await?;
        }

        Ok(())
    }
}

fn closed_error() -> FluxionError {
    FluxionError::subscription_error("Subject is closed")
}

impl<T: Clone + Send + 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

#[async_trait]
impl<T: Clone + Send + 'static> AsyncObservable<T> for Subject<T> {
    async fn subscribe(&self, observer: BoxObserver<T>) -> Result<Subscription> {
        let mut state = self.state.lock().await;
        if state.closed {
            return Err(closed_error());
        }

        let subscription = Subscription::empty();
        state.subscribers.push(Subscriber {
            observer,
            subscription: subscription.clone(),
        });

        Ok(subscription)
    }
}

#[async_trait]
impl<T: Clone + Send + 'static> AsyncObserver<T> for Subject<T> {
    async fn on_next(&mut self, item: T) -> Result<()> {
        self.next(item).await
    }

    async fn on_error(&mut self, error: FluxionError) -> Result<()> {
        self.error(error).await
    }

    async fn on_completed(&mut self) -> Result<()> {
        self.complete().await
    }
}
