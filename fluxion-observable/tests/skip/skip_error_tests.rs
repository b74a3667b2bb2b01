// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_core::{observable, AsyncObserver, BoxObserver, FluxionError, Subscription};
use fluxion_observable::prelude::*;
use fluxion_test_utils::{assert_failed_with, FailingObserver, RecordingObserver};

#[tokio::test]
async fn test_error_passes_through_while_skipping() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = RecordingObserver::<i32>::new();
    let source = observable::create(|mut observer: BoxObserver<i32>| async move {
        observer.on_next(1).await?;
        observer
            .on_error(FluxionError::stream_error("upstream failed"))
            .await?;
        Ok(Subscription::empty())
    });

    // Act
    source.skip(3).subscribe(observer).await?;

    // Assert
    assert_failed_with(&recorded, &[], "upstream failed");
    Ok(())
}

#[tokio::test]
async fn test_error_after_skipping_window() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = RecordingObserver::<i32>::new();
    let source = observable::create(|mut observer: BoxObserver<i32>| async move {
        for item in 1..=4 {
            observer.on_next(item).await?;
        }
        observer
            .on_error(FluxionError::stream_error("late failure"))
            .await?;
        Ok(Subscription::empty())
    });

    // Act
    source.skip(2).subscribe(observer).await?;

    // Assert
    assert_failed_with(&recorded, &[3, 4], "late failure");
    Ok(())
}

#[tokio::test]
async fn test_throw_source_is_not_counted() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = RecordingObserver::<i32>::new();

    // Act
    throw(FluxionError::stream_error("immediate"))
        .skip(1)
        .subscribe(observer)
        .await?;

    // Assert
    assert_failed_with(&recorded, &[], "immediate");
    Ok(())
}

#[tokio::test]
async fn test_downstream_failure_reaches_subscriber() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = FailingObserver::new(2);

    // Act
    let result = from_iter(vec![1, 2, 3, 4]).skip(1).subscribe(observer).await;

    // Assert
    assert!(matches!(
        result,
        Err(FluxionError::StreamProcessingError { .. })
    ));
    assert_eq!(recorded.values(), vec![2]);
    assert!(!recorded.is_completed());
    Ok(())
}

#[tokio::test]
async fn test_skipped_items_never_reach_failing_observer() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = FailingObserver::new(1);

    // Act
    let result = from_iter(vec![1, 2, 3]).skip(3).subscribe(observer).await;

    // Assert
    assert!(result.is_ok());
    assert!(recorded.values().is_empty());
    assert!(recorded.is_completed());
    Ok(())
}
