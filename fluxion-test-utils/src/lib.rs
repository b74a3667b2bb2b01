// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for Fluxion observables.
//!
//! Designed for tests only, not for production code.
//!
//! # Key Types
//!
//! ## `RecordingObserver<T>`
//!
//! An observer that writes every notification it receives into a shared log. The
//! observer itself moves into the pipeline; the [`Recorded`] handle stays with the
//! test:
//!
//! ```rust
//! use fluxion_core::{AsyncObserver, Notification};
//! use fluxion_test_utils::RecordingObserver;
//!
//! # #[tokio::main]
//! # async fn main() -> fluxion_core::Result<()> {
//! let (mut observer, recorded) = RecordingObserver::new();
//!
//! observer.on_next(1).await?;
//! observer.on_completed().await?;
//!
//! assert_eq!(recorded.values(), vec![1]);
//! assert!(recorded.is_completed());
//! # Ok(())
//! # }
//! ```
//!
//! ## `FailingObserver<T>`
//!
//! Records like `RecordingObserver` but fails the n-th `on_next` call, for testing
//! how operators surface downstream errors.
//!
//! ## `ManualScheduler`
//!
//! A virtual-time scheduler: scheduled actions run only when the test calls
//! `advance`, which makes time-based operators deterministic to test.
//!
//! ## TestData and Variants
//!
//! ```rust
//! use fluxion_test_utils::test_data::{TestData, person_alice};
//!
//! match person_alice() {
//!     TestData::Person(p) => assert_eq!(p.name, "Alice"),
//!     _ => panic!("Expected person"),
//! }
//! ```
//!
//! # Module Organization
//!
//! - `recording` - `RecordingObserver` and its `Recorded` handle
//! - `error_injection` - `FailingObserver`
//! - `manual_scheduler` - `ManualScheduler`
//! - `test_data` - Enum variants for diverse test scenarios
//! - `person`, `animal`, `plant` - Specific fixture types
//! - `helpers` - Assertion helpers

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod animal;
pub mod error_injection;
pub mod helpers;
pub mod manual_scheduler;
pub mod person;
pub mod plant;
pub mod recording;
pub mod test_data;

// Re-export commonly used test utilities
pub use error_injection::FailingObserver;
pub use helpers::{assert_completed_with, assert_failed_with, assert_nothing_recorded};
pub use manual_scheduler::ManualScheduler;
pub use recording::{Recorded, RecordingObserver};
pub use test_data::{DataVariant, TestData};
