// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_core::{FluxionError, Subject};
use fluxion_observable::throw;
use fluxion_observable_time::prelude::*;
use fluxion_test_utils::{
    assert_failed_with, FailingObserver, ManualScheduler, RecordingObserver,
};
use std::time::Duration;

const WINDOW: Duration = Duration::from_millis(100);

#[tokio::test]
async fn test_error_while_skipping_is_forwarded() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let subject = Subject::<i32>::new();
    let (observer, recorded) = RecordingObserver::new();
    subject
        .as_observable()
        .skip_for_on(WINDOW, scheduler.clone())
        .subscribe(observer)
        .await?;

    // Act
    subject.next(1).await?;
    subject
        .error(FluxionError::stream_error("early failure"))
        .await?;

    // Assert
    assert_failed_with(&recorded, &[], "early failure");
    assert_eq!(scheduler.pending(), 0);
    Ok(())
}

#[tokio::test]
async fn test_error_after_window_is_forwarded() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let subject = Subject::<i32>::new();
    let (observer, recorded) = RecordingObserver::new();
    subject
        .as_observable()
        .skip_for_on(WINDOW, scheduler.clone())
        .subscribe(observer)
        .await?;

    // Act
    scheduler.advance(WINDOW).await;
    subject.next(7).await?;
    subject
        .error(FluxionError::stream_error("late failure"))
        .await?;

    // Assert
    assert_failed_with(&recorded, &[7], "late failure");
    Ok(())
}

#[tokio::test]
async fn test_throw_source_reaches_observer() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let (observer, recorded) = RecordingObserver::<i32>::new();

    // Act
    throw(FluxionError::stream_error("at once"))
        .skip_for_on(WINDOW, scheduler.clone())
        .subscribe(observer)
        .await?;

    // Assert
    assert_failed_with(&recorded, &[], "at once");
    assert_eq!(scheduler.pending(), 0);
    Ok(())
}

#[tokio::test]
async fn test_downstream_failure_propagates_to_source() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let subject = Subject::<i32>::new();
    let (observer, recorded) = FailingObserver::new(2);
    subject
        .as_observable()
        .skip_for_on(WINDOW, scheduler.clone())
        .subscribe(observer)
        .await?;
    scheduler.advance(WINDOW).await;

    // Act
    subject.next(1).await?;
    let result = subject.next(2).await;

    // Assert
    assert!(matches!(
        result,
        Err(FluxionError::StreamProcessingError { .. })
    ));
    assert_eq!(recorded.values(), vec![1]);
    Ok(())
}

#[tokio::test]
async fn test_discarded_items_never_reach_failing_observer() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let subject = Subject::<i32>::new();
    let (observer, recorded) = FailingObserver::new(1);
    subject
        .as_observable()
        .skip_for_on(WINDOW, scheduler.clone())
        .subscribe(observer)
        .await?;

    // Act
    let result = subject.next(1).await;

    // Assert
    assert!(result.is_ok());
    assert!(recorded.is_empty());
    Ok(())
}
