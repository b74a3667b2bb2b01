// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime abstraction for Fluxion observables.
//!
//! - [`timer::Timer`] - sleep futures and a clock
//! - [`runtime::Runtime`] - a timer plus a way to spawn detached tasks
//! - [`scheduler::Scheduler`] - `schedule_after(duration, action)` returning a
//!   cancellable [`scheduler::ScheduledTask`]
//!
//! # Runtime Support
//!
//! - `runtime-tokio` (default) - [`impls::tokio::TokioRuntime`]
//! - `runtime-smol` - [`impls::smol::SmolRuntime`]
//!
//! [`DefaultScheduler`] resolves to tokio when `runtime-tokio` is enabled and to smol
//! otherwise.

#[macro_use]
mod logging;

pub mod impls;
pub mod runtime;
pub mod scheduler;
pub mod timer;

pub use scheduler::{RuntimeScheduler, ScheduledTask, Scheduler};

#[cfg(feature = "runtime-tokio")]
pub type DefaultRuntime = impls::tokio::TokioRuntime;

#[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
pub type DefaultRuntime = impls::smol::SmolRuntime;

#[cfg(any(feature = "runtime-tokio", feature = "runtime-smol"))]
pub type DefaultScheduler = RuntimeScheduler<DefaultRuntime>;
