// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::observer::AsyncObserver;
use fluxion_error::{FluxionError, Result};

/// A single observer call captured as a value.
///
/// Follows Rx semantics: `Error` and `Completed` are terminal, nothing is
/// delivered after either of them.
#[derive(Debug, Clone)]
pub enum Notification<T> {
    /// An item delivered through `on_next`
    Next(T),
    /// A terminal error delivered through `on_error`
    Error(FluxionError),
    /// Normal termination delivered through `on_completed`
    Completed,
}

impl<T: PartialEq> PartialEq for Notification<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Next(a), Self::Next(b)) => a == b,
            (Self::Completed, Self::Completed) => true,
            _ => false, // Errors are never equal
        }
    }
}

impl<T> Notification<T> {
    /// Returns `true` for `Error` and `Completed`.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Error(_) | Self::Completed)
    }

    /// Converts to `Option<T>`, discarding terminals.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Next(value) => Some(value),
            _ => None,
        }
    }

    /// Converts to `Option<FluxionError>`, discarding everything else.
    pub fn into_error(self) -> Option<FluxionError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Replays this notification into `observer`.
    ///
    /// # Errors
    /// Returns whatever the observer returns for the replayed call.
    pub async fn accept<O>(self, observer: &mut O) -> Result<()>
    where
        O: AsyncObserver<T> + ?Sized,
        T: Send + 'static,
    {
        match self {
            Self::Next(value) => observer.on_next(value).await,
            Self::Error(error) => observer.on_error(error).await,
            Self::Completed => observer.on_completed().await,
        }
    }
}
