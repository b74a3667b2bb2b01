// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The producer side of a push-based sequence.

use crate::observer::{AsyncObserver, BoxObserver};
use crate::subscription::Subscription;
use async_trait::async_trait;
use core::fmt;
use core::future::Future;
use fluxion_error::Result;
use std::sync::Arc;

/// A source able to attach observers.
///
/// Implementations own no per-subscription state: every call to `subscribe`
/// starts an independent attachment and returns the subscription that ends it.
#[async_trait]
pub trait AsyncObservable<T: Send + 'static>: Send + Sync {
    /// Attach `observer` to this source.
    async fn subscribe(&self, observer: BoxObserver<T>) -> Result<Subscription>;
}

/// Clonable handle to an [`AsyncObservable`].
///
/// Operators take and return `Observable<T>`, so an operator that has nothing to do
/// can hand back its input unchanged. [`Observable::ptr_eq`] tells whether two
/// handles share the same source.
pub struct Observable<T: Send + 'static> {
    source: Arc<dyn AsyncObservable<T>>,
}

impl<T: Send + 'static> Observable<T> {
    /// Wrap a source into a clonable handle.
    pub fn new<S>(source: S) -> Self
    where
        S: AsyncObservable<T> + 'static,
    {
        Self {
            source: Arc::new(source),
        }
    }

    /// Attach `observer` to the underlying source.
    ///
    /// # Errors
    /// Returns the error raised by the source while attaching, or by the observer
    /// if the source notified it during the call.
    pub async fn subscribe<O>(&self, observer: O) -> Result<Subscription>
    where
        O: AsyncObserver<T> + 'static,
    {
        self.source.subscribe(Box::new(observer)).await
    }

    /// Attach an already boxed observer without boxing it again.
    ///
    /// # Errors
    /// Same as [`Observable::subscribe`].
    pub async fn subscribe_boxed(&self, observer: BoxObserver<T>) -> Result<Subscription> {
        self.source.subscribe(observer).await
    }

    /// Returns `true` when both handles point to the same source.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.source, &other.source)
    }
}

impl<T: Send + 'static> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T: Send + 'static> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable").finish_non_exhaustive()
    }
}

struct AnonymousObservable<F> {
    subscribe: F,
}

#[async_trait]
impl<T, F, Fut> AsyncObservable<T> for AnonymousObservable<F>
where
    T: Send + 'static,
    F: Fn(BoxObserver<T>) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Subscription>> + Send + 'static,
{
    async fn subscribe(&self, observer: BoxObserver<T>) -> Result<Subscription> {
        (self.subscribe)(observer).await
    }
}

/// Build an observable from its subscribe function.
///
/// The function runs once per subscriber and returns the subscription that
/// detaches that subscriber.
///
/// # Example
///
/// ```
/// use fluxion_core::{observable, observer, AsyncObserver, BoxObserver, Subscription};
///
/// # #[tokio::main]
/// # async fn main() -> fluxion_core::Result<()> {
/// let answer = observable::create(|mut observer: BoxObserver<i32>| async move {
///     observer.on_next(42).await?;
///     observer.on_completed().await?;
///     Ok(Subscription::empty())
/// });
///
/// let subscription = answer
///     .subscribe(observer::create(
///         |item: i32| async move {
///             assert_eq!(item, 42);
///             Ok(())
///         },
///         |_| async { Ok(()) },
///         || async { Ok(()) },
///     ))
///     .await?;
///
/// subscription.dispose();
/// # Ok(())
/// # }
/// ```
pub fn create<T, F, Fut>(subscribe: F) -> Observable<T>
where
    T: Send + 'static,
    F: Fn(BoxObserver<T>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Subscription>> + Send + 'static,
{
    Observable::new(AnonymousObservable { subscribe })
}
