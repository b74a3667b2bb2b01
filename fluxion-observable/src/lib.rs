// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Sources and count-based operators for Fluxion observables.
//!
//! # Overview
//!
//! - **Sources** - [`from_iter`], [`empty`], [`throw`], [`never`]
//! - **`SkipExt`** - Extension trait for `.skip(count)`
//! - **`SkipObserver`** - The observer decorator behind `skip`, usable on its own
//!
//! Time-based operators live in `fluxion-observable-time`.
//!
//! # Example
//!
//! ```rust
//! use fluxion_observable::prelude::*;
//! use fluxion_core::observer;
//!
//! # #[tokio::main]
//! # async fn main() -> fluxion_core::Result<()> {
//! from_iter(vec![1, 2, 3, 4, 5])
//!     .skip(2)
//!     .subscribe(observer::create(
//!         |item: i32| async move {
//!             assert!(item > 2);
//!             Ok(())
//!         },
//!         |_| async { Ok(()) },
//!         || async { Ok(()) },
//!     ))
//!     .await?;
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod logging;

mod skip;
mod sources;

pub mod prelude;

pub use skip::{skip, SkipExt, SkipObserver};
pub use sources::{empty, from_iter, never, throw};
