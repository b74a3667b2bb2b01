// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The observer side of a push-based sequence.
//!
//! Observers are driven through `&mut self`: whoever owns an observer is the only one
//! able to notify it, so two notifications for the same observer can never overlap.
//! Each call is awaited to completion before the source pushes the next one.

use async_trait::async_trait;
use core::future::Future;
use fluxion_error::{FluxionError, Result};

/// Consumer of an asynchronous sequence.
///
/// After `on_error` or `on_completed` no further calls are made. An `Err` returned by
/// any method is a failure of that notification and is propagated to the caller.
#[async_trait]
pub trait AsyncObserver<T: Send + 'static>: Send {
    /// Receive the next item of the sequence.
    async fn on_next(&mut self, item: T) -> Result<()>;

    /// Receive the terminal error of the sequence.
    async fn on_error(&mut self, error: FluxionError) -> Result<()>;

    /// Receive the normal termination of the sequence.
    async fn on_completed(&mut self) -> Result<()>;
}

/// Type-erased observer, the form in which observers travel through operators.
pub type BoxObserver<T> = Box<dyn AsyncObserver<T>>;

#[async_trait]
impl<T, O> AsyncObserver<T> for Box<O>
where
    T: Send + 'static,
    O: AsyncObserver<T> + ?Sized,
{
    async fn on_next(&mut self, item: T) -> Result<()> {
        (**self).on_next(item).await
    }

    async fn on_error(&mut self, error: FluxionError) -> Result<()> {
        (**self).on_error(error).await
    }

    async fn on_completed(&mut self) -> Result<()> {
        (**self).on_completed().await
    }
}

/// Observer assembled from three async handlers, see [`create`].
pub struct AnonymousObserver<N, E, C> {
    on_next: N,
    on_error: E,
    on_completed: C,
}

/// Build an observer from its three handlers.
///
/// # Example
///
/// ```
/// use fluxion_core::{observer, AsyncObserver};
///
/// # #[tokio::main]
/// # async fn main() -> fluxion_core::Result<()> {
/// let mut printer = observer::create(
///     |item: i32| async move {
///         println!("next: {item}");
///         Ok(())
///     },
///     |error| async move {
///         println!("error: {error}");
///         Ok(())
///     },
///     || async { Ok(()) },
/// );
///
/// printer.on_next(42).await?;
/// printer.on_completed().await?;
/// # Ok(())
/// # }
/// ```
pub fn create<T, N, NFut, E, EFut, C, CFut>(
    on_next: N,
    on_error: E,
    on_completed: C,
) -> AnonymousObserver<N, E, C>
where
    T: Send + 'static,
    N: FnMut(T) -> NFut + Send,
    NFut: Future<Output = Result<()>> + Send + 'static,
    E: FnMut(FluxionError) -> EFut + Send,
    EFut: Future<Output = Result<()>> + Send + 'static,
    C: FnMut() -> CFut + Send,
    CFut: Future<Output = Result<()>> + Send + 'static,
{
    AnonymousObserver {
        on_next,
        on_error,
        on_completed,
    }
}

#[async_trait]
impl<T, N, NFut, E, EFut, C, CFut> AsyncObserver<T> for AnonymousObserver<N, E, C>
where
    T: Send + 'static,
    N: FnMut(T) -> NFut + Send,
    NFut: Future<Output = Result<()>> + Send + 'static,
    E: FnMut(FluxionError) -> EFut + Send,
    EFut: Future<Output = Result<()>> + Send + 'static,
    C: FnMut() -> CFut + Send,
    CFut: Future<Output = Result<()>> + Send + 'static,
{
    async fn on_next(&mut self, item: T) -> Result<()> {
        (self.on_next)(item).await
    }

    async fn on_error(&mut self, error: FluxionError) -> Result<()> {
        (self.on_error)(error).await
    }

    async fn on_completed(&mut self) -> Result<()> {
        (self.on_completed)().await
    }
}
