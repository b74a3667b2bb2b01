// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Extension trait providing the count-based `skip` operator.
//!
//! `skip(count)` discards the first `count` items of the source and forwards the
//! rest. Errors and completion always pass through, even while items are still
//! being discarded.
//!
//! A count of zero returns the source itself: no decorator is allocated.
//!
//! # Example
//!
//! ```rust
//! use fluxion_observable::{from_iter, SkipExt};
//!
//! let source = from_iter(vec![1, 2, 3]);
//!
//! assert!(source.clone().skip(0).ptr_eq(&source));
//! let tail = source.skip(2);
//! ```

mod observer;

pub use observer::SkipObserver;

use fluxion_core::{observable, BoxObserver, Observable};

/// Extension trait providing the `skip` operator for observables.
pub trait SkipExt<T: Send + 'static>: Sized {
    /// Discard the first `count` items, forward everything after them.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of leading items to discard
    fn skip(self, count: usize) -> Observable<T>;
}

impl<T: Send + 'static> SkipExt<T> for Observable<T> {
    fn skip(self, count: usize) -> Observable<T> {
        skip(self, count)
    }
}

/// Free-function form of [`SkipExt::skip`].
pub fn skip<T: Send + 'static>(source: Observable<T>, count: usize) -> Observable<T> {
    if count == 0 {
        return source;
    }

    observable::create(move |observer: BoxObserver<T>| {
        let source = source.clone();
        async move {
            let decorator = SkipObserver::new(observer, count)?;
            source.subscribe(decorator).await
        }
    })
}
