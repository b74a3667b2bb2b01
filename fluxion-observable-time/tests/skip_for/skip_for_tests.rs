// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_core::{AsyncObserver, FluxionError, Subject};
use fluxion_observable::{from_iter, SkipExt};
use fluxion_observable_time::prelude::*;
use fluxion_observable_time::{skip_for_on, SkipForObserver};
use fluxion_test_utils::test_data::{animal_dog, person_alice, person_bob, plant_rose, TestData};
use fluxion_test_utils::{
    assert_completed_with, assert_nothing_recorded, ManualScheduler, RecordingObserver,
};
use std::time::Duration;

const WINDOW: Duration = Duration::from_millis(100);

#[tokio::test]
async fn test_items_before_window_are_discarded() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let subject = Subject::<TestData>::new();
    let (observer, recorded) = RecordingObserver::new();
    subject
        .as_observable()
        .skip_for_on(WINDOW, scheduler.clone())
        .subscribe(observer)
        .await?;

    // Act
    subject.next(person_alice()).await?;
    subject.next(person_bob()).await?;
    scheduler.advance(WINDOW).await;
    subject.next(animal_dog()).await?;
    subject.next(plant_rose()).await?;
    subject.complete().await?;

    // Assert
    assert_completed_with(&recorded, &[animal_dog(), plant_rose()]);
    Ok(())
}

#[tokio::test]
async fn test_window_not_yet_elapsed() -> anyhow::Result<()> {
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
    scheduler.advance(WINDOW - Duration::from_millis(1)).await;
    subject.next(1).await?;

    // Assert
    assert_nothing_recorded(&recorded);
    assert_eq!(scheduler.pending(), 1);
    Ok(())
}

#[tokio::test]
async fn test_completion_while_skipping_cancels_timer() -> anyhow::Result<()> {
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
    subject.complete().await?;

    // Assert
    assert_completed_with(&recorded, &[]);
    assert_eq!(scheduler.pending(), 0);
    Ok(())
}

#[tokio::test]
async fn test_cold_source_finishes_inside_window() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let (observer, recorded) = RecordingObserver::new();

    // Act
    from_iter(vec![1, 2, 3])
        .skip_for_on(WINDOW, scheduler.clone())
        .subscribe(observer)
        .await?;

    // Assert
    assert_completed_with(&recorded, &[]);
    assert_eq!(scheduler.pending(), 0);
    Ok(())
}

#[tokio::test]
async fn test_dispose_before_window_elapses() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let subject = Subject::<i32>::new();
    let (observer, recorded) = RecordingObserver::new();
    let subscription = subject
        .as_observable()
        .skip_for_on(WINDOW, scheduler.clone())
        .subscribe(observer)
        .await?;

    // Act
    subject.next(1).await?;
    subscription.dispose();
    scheduler.advance(WINDOW).await;
    subject.next(2).await?;
    subject.complete().await?;

    // Assert
    assert_nothing_recorded(&recorded);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(subject.subscriber_count().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_dispose_after_window_elapses() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let subject = Subject::<i32>::new();
    let (observer, recorded) = RecordingObserver::new();
    let subscription = subject
        .as_observable()
        .skip_for_on(WINDOW, scheduler.clone())
        .subscribe(observer)
        .await?;
    scheduler.advance(WINDOW).await;
    subject.next(1).await?;

    // Act
    subscription.dispose();
    subject.next(2).await?;

    // Assert
    assert_eq!(recorded.values(), vec![1]);
    assert!(!recorded.is_completed());
    Ok(())
}

#[tokio::test]
async fn test_each_subscriber_gets_its_own_window() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let subject = Subject::<i32>::new();
    let delayed = subject.as_observable().skip_for_on(WINDOW, scheduler.clone());
    let (early, early_recorded) = RecordingObserver::new();
    let (late, late_recorded) = RecordingObserver::new();

    // Act
    delayed.subscribe(early).await?;
    scheduler.advance(WINDOW / 2).await;
    delayed.subscribe(late).await?;
    scheduler.advance(WINDOW / 2).await;
    subject.next(1).await?;
    scheduler.advance(WINDOW / 2).await;
    subject.next(2).await?;
    subject.complete().await?;

    // Assert
    assert_completed_with(&early_recorded, &[1, 2]);
    assert_completed_with(&late_recorded, &[2]);
    Ok(())
}

#[tokio::test]
async fn test_composes_with_count_based_skip() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let subject = Subject::<i32>::new();
    let (observer, recorded) = RecordingObserver::new();
    subject
        .as_observable()
        .skip_for_on(WINDOW, scheduler.clone())
        .skip(1)
        .subscribe(observer)
        .await?;

    // Act
    subject.next(1).await?;
    scheduler.advance(WINDOW).await;
    subject.next(2).await?;
    subject.next(3).await?;
    subject.complete().await?;

    // Assert
    assert_completed_with(&recorded, &[3]);
    Ok(())
}

#[test]
fn test_zero_duration_returns_same_source() {
    let source = from_iter(vec![1, 2, 3]);

    let skipped = skip_for_on(source.clone(), Duration::ZERO, ManualScheduler::new());

    assert!(skipped.ptr_eq(&source));
}

#[test]
fn test_zero_duration_schedules_nothing() {
    let scheduler = ManualScheduler::new();

    let _skipped = from_iter(vec![1]).skip_for_on(Duration::ZERO, scheduler.clone());

    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn test_observer_rejects_zero_duration() {
    let (observer, _recorded) = RecordingObserver::<i32>::new();

    let result = SkipForObserver::new(observer, Duration::ZERO, &ManualScheduler::new());

    match result {
        Err(FluxionError::InvalidArgument { name, .. }) => assert_eq!(name, "duration"),
        other => panic!("Expected InvalidArgument, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_observer_used_directly() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let (observer, recorded) = RecordingObserver::new();
    let mut skip = SkipForObserver::new(observer, WINDOW, &scheduler)?;

    // Act
    skip.on_next("early").await?;
    assert!(!skip.is_forwarding());
    scheduler.advance(WINDOW).await;
    skip.on_next("late").await?;
    skip.on_completed().await?;

    // Assert
    assert!(skip.is_forwarding());
    assert_completed_with(&recorded, &["late"]);
    Ok(())
}

#[test]
fn test_dropping_observer_cancels_timer() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let (observer, _recorded) = RecordingObserver::<i32>::new();
    let skip = SkipForObserver::new(observer, WINDOW, &scheduler)?;
    assert_eq!(scheduler.pending(), 1);

    // Act
    drop(skip);

    // Assert
    assert_eq!(scheduler.pending(), 0);
    Ok(())
}

#[test]
fn test_disposing_observer_subscription_cancels_timer() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let (observer, _recorded) = RecordingObserver::<i32>::new();
    let skip = SkipForObserver::new(observer, WINDOW, &scheduler)?;

    // Act
    skip.subscription().dispose();

    // Assert
    assert_eq!(scheduler.pending(), 0);
    Ok(())
}
