// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Cold sources.
//!
//! Each subscriber gets its own run of the sequence, delivered inside the
//! `subscribe` call: the call returns once the sequence has terminated.

use fluxion_core::{observable, AsyncObserver, BoxObserver, FluxionError, Observable, Subscription};

/// Emit every item of `items`, then complete.
///
/// `items` is cloned for each subscriber.
pub fn from_iter<I>(items: I) -> Observable<I::Item>
where
    I: IntoIterator + Clone + Send + Sync + 'static,
    I::Item: Send + 'static,
    I::IntoIter: Send,
{
    observable::create(move |mut observer: BoxObserver<I::Item>| {
        let items = items.clone();
        async move {
            for item in items {
                observer.on_next(item).await?;
            }
            observer.on_completed().await?;
            Ok(Subscription::empty())
        }
    })
}

/// Complete immediately without emitting any item.
pub fn empty<T: Send + 'static>() -> Observable<T> {
    observable::create(|mut observer: BoxObserver<T>| async move {
        observer.on_completed().await?;
        Ok(Subscription::empty())
    })
}

/// Fail immediately with `error`.
pub fn throw<T: Send + 'static>(error: FluxionError) -> Observable<T> {
    observable::create(move |mut observer: BoxObserver<T>| {
        let error = error.clone();
        async move {
            observer.on_error(error).await?;
            Ok(Subscription::empty())
        }
    })
}

/// Never emit anything, never terminate.
pub fn never<T: Send + 'static>() -> Observable<T> {
    observable::create(|_observer: BoxObserver<T>| async { Ok(Subscription::empty()) })
}
