// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core traits and types for Fluxion's async push-based observables.
//!
//! - [`AsyncObserver`] - three-method sink driven through `&mut self`
//! - [`Observable`] - clonable recipe that attaches observers to a source
//! - [`Subscription`] - disposable link between a source and an observer
//! - [`Subject`] - hot source that broadcasts to every subscribed observer
//! - [`Notification`] - the recorded form of an observer call

#[macro_use]
mod logging;

pub mod notification;
pub mod observable;
pub mod observer;
pub mod subject;
pub mod subscription;

pub use self::notification::Notification;
pub use self::observable::{AsyncObservable, Observable};
pub use self::observer::{AnonymousObserver, AsyncObserver, BoxObserver};
pub use self::subject::Subject;
pub use self::subscription::{Disposed, Subscription};
pub use fluxion_error::{FluxionError, IntoFluxionError, Result, ResultExt};
