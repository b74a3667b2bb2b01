// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting the sources and the count-based operators.
//!
//! ```ignore
//! use fluxion_observable::prelude::*;
//!
//! let tail = from_iter(0..10).skip(5);
//! ```

pub use crate::skip::SkipExt;
pub use crate::sources::{empty, from_iter, never, throw};
pub use fluxion_core::{AsyncObserver, Observable, Subscription};
