// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_core::Subject;
use fluxion_observable_time::prelude::*;
use fluxion_observable_time::{skip_for, DefaultScheduler};
use fluxion_test_utils::test_data::{person_alice, person_bob, person_charlie, TestData};
use fluxion_test_utils::{assert_completed_with, assert_nothing_recorded, RecordingObserver};
use std::time::Duration;
use tokio::time::{pause, sleep};

#[tokio::test]
async fn test_skip_for_on_default_scheduler() -> anyhow::Result<()> {
    // Arrange
    pause();
    let subject = Subject::<TestData>::new();
    let (observer, recorded) = RecordingObserver::new();
    subject
        .as_observable()
        .skip_for(Duration::from_millis(100))
        .subscribe(observer)
        .await?;

    // Act
    subject.next(person_alice()).await?;
    sleep(Duration::from_millis(50)).await;
    subject.next(person_bob()).await?;
    sleep(Duration::from_millis(51)).await;
    subject.next(person_charlie()).await?;
    subject.complete().await?;

    // Assert
    assert_completed_with(&recorded, &[person_charlie()]);
    Ok(())
}

#[tokio::test]
async fn test_skip_for_with_explicit_runtime_scheduler() -> anyhow::Result<()> {
    // Arrange
    pause();
    let subject = Subject::<i32>::new();
    let (observer, recorded) = RecordingObserver::new();
    subject
        .as_observable()
        .skip_for_on(Duration::from_secs(1), DefaultScheduler::default())
        .subscribe(observer)
        .await?;

    // Act
    subject.next(1).await?;
    sleep(Duration::from_millis(1001)).await;
    subject.next(2).await?;
    subject.next(3).await?;
    subject.complete().await?;

    // Assert
    assert_completed_with(&recorded, &[2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_dispose_before_timer_fires() -> anyhow::Result<()> {
    // Arrange
    pause();
    let subject = Subject::<i32>::new();
    let (observer, recorded) = RecordingObserver::new();
    let subscription = skip_for(subject.as_observable(), Duration::from_millis(100))
        .subscribe(observer)
        .await?;

    // Act
    sleep(Duration::from_millis(10)).await;
    subscription.dispose();
    sleep(Duration::from_millis(200)).await;
    subject.next(1).await?;

    // Assert
    assert!(subscription.is_disposed());
    assert_nothing_recorded(&recorded);
    assert_eq!(subject.subscriber_count().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_completion_before_timer_fires() -> anyhow::Result<()> {
    // Arrange
    pause();
    let subject = Subject::<i32>::new();
    let (observer, recorded) = RecordingObserver::new();
    subject
        .as_observable()
        .skip_for(Duration::from_millis(100))
        .subscribe(observer)
        .await?;

    // Act
    subject.next(1).await?;
    subject.complete().await?;
    sleep(Duration::from_millis(200)).await;

    // Assert
    assert_completed_with(&recorded, &[]);
    Ok(())
}

#[tokio::test]
async fn test_zero_duration_forwards_everything() -> anyhow::Result<()> {
    // Arrange
    pause();
    let subject = Subject::<i32>::new();
    let (observer, recorded) = RecordingObserver::new();
    subject
        .as_observable()
        .skip_for(Duration::ZERO)
        .subscribe(observer)
        .await?;

    // Act
    subject.next(1).await?;
    subject.next(2).await?;
    subject.complete().await?;

    // Assert
    assert_completed_with(&recorded, &[1, 2]);
    Ok(())
}
