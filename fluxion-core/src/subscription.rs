// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Disposable link between a source and an observer.
//!
//! A [`Subscription`] is returned by every `subscribe` call. Disposing it runs the
//! teardown actions registered by the source (releasing timers, detaching the
//! observer) exactly once, disposes every child subscription, and wakes all tasks
//! waiting on [`Subscription::disposed`].

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::{ready, Context, Poll};
use event_listener::{Event, EventListener};
use parking_lot::Mutex;
use std::sync::Arc;

type Teardown = Box<dyn FnOnce() + Send>;

/// Clonable handle to a disposable resource.
///
/// All clones share the same state: disposing any of them disposes all.
///
/// # Example
///
/// ```
/// use fluxion_core::Subscription;
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
///
/// let released = Arc::new(AtomicBool::new(false));
/// let flag = released.clone();
///
/// let subscription = Subscription::new(move || flag.store(true, Ordering::SeqCst));
/// assert!(!subscription.is_disposed());
///
/// subscription.dispose();
/// assert!(subscription.is_disposed());
/// assert!(released.load(Ordering::SeqCst));
/// ```
#[derive(Clone)]
pub struct Subscription {
    inner: Arc<Inner>,
}

struct Inner {
    disposed: AtomicBool,
    event: Event,
    teardown: Mutex<Vec<Teardown>>,
}

impl Subscription {
    /// Create a subscription that runs `teardown` when disposed.
    pub fn new<F>(teardown: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let subscription = Self::empty();
        subscription.add_teardown(teardown);
        subscription
    }

    /// Create a subscription with nothing to release.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(Inner {
                disposed: AtomicBool::new(false),
                event: Event::new(),
                teardown: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Register an action to run on disposal.
    ///
    /// If the subscription is already disposed the action runs immediately.
    pub fn add_teardown<F>(&self, teardown: F)
    where
        F: FnOnce() + Send + 'static,
    {
        {
            let mut actions = self.inner.teardown.lock();
            if !self.is_disposed() {
                actions.push(Box::new(teardown));
                return;
            }
        }
        teardown();
    }

    /// Dispose `child` together with this subscription.
    pub fn add(&self, child: Subscription) {
        self.add_teardown(move || child.dispose());
    }

    /// Dispose the subscription, running every registered teardown once.
    ///
    /// Idempotent: later calls have no effect.
    pub fn dispose(&self) {
        if self.inner.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        let actions = core::mem::take(&mut *self.inner.teardown.lock());
        debug!(teardown_count = actions.len(), "subscription disposed");
        for action in actions {
            action();
        }

        self.inner.event.notify(usize::MAX);
    }

    /// Check whether the subscription has been disposed (non-blocking).
    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }

    /// Wait asynchronously until the subscription is disposed.
    ///
    /// The returned future owns a handle to the subscription, so it can be moved
    /// into a spawned task.
    pub fn disposed(&self) -> Disposed {
        Disposed {
            subscription: self.clone(),
            listener: None,
        }
    }
}

impl Default for Subscription {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

/// Future returned by [`Subscription::disposed()`].
pub struct Disposed {
    subscription: Subscription,
    listener: Option<EventListener>,
}

impl Future for Disposed {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let this = self.get_mut();

        loop {
            if this.subscription.is_disposed() {
                return Poll::Ready(());
            }

            match this.listener.as_mut() {
                Some(listener) => {
                    ready!(Pin::new(listener).poll(cx));
                    this.listener = None;
                }
                // Register first, then re-check the flag at the top of the loop
                None => this.listener = Some(this.subscription.inner.event.listen()),
            }
        }
    }
}
