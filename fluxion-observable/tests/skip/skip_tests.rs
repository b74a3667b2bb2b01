// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use fluxion_core::{AsyncObserver, FluxionError};
use fluxion_observable::prelude::*;
use fluxion_observable::{skip, SkipObserver};
use fluxion_test_utils::test_data::{
    animal_dog, mixed_sequence, person_alice, person_bob, person_charlie, plant_rose,
};
use fluxion_test_utils::{assert_completed_with, RecordingObserver};

#[tokio::test]
async fn test_skip_drops_leading_items() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = RecordingObserver::new();

    // Act
    from_iter(vec![1, 2, 3, 4, 5])
        .skip(2)
        .subscribe(observer)
        .await?;

    // Assert
    assert_completed_with(&recorded, &[3, 4, 5]);
    Ok(())
}

#[tokio::test]
async fn test_skip_with_test_data() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = RecordingObserver::new();

    // Act
    from_iter(mixed_sequence())
        .skip(1)
        .subscribe(observer)
        .await?;

    // Assert
    assert_completed_with(
        &recorded,
        &[animal_dog(), person_bob(), plant_rose(), person_charlie()],
    );
    Ok(())
}

#[tokio::test]
async fn test_skip_more_than_available_only_completes() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = RecordingObserver::<i32>::new();

    // Act
    from_iter(vec![1, 2]).skip(5).subscribe(observer).await?;

    // Assert
    assert_completed_with(&recorded, &[]);
    Ok(())
}

#[tokio::test]
async fn test_skip_exactly_all_items() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = RecordingObserver::new();

    // Act
    from_iter(vec![person_alice(), person_bob()])
        .skip(2)
        .subscribe(observer)
        .await?;

    // Assert
    assert_completed_with(&recorded, &[]);
    Ok(())
}

#[tokio::test]
async fn test_skip_on_empty_source() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = RecordingObserver::<i32>::new();

    // Act
    empty().skip(3).subscribe(observer).await?;

    // Assert
    assert_completed_with(&recorded, &[]);
    Ok(())
}

#[test]
fn test_skip_zero_returns_same_source() {
    let source = from_iter(vec![1, 2, 3]);

    let skipped = source.clone().skip(0);

    assert!(skipped.ptr_eq(&source));
}

#[test]
fn test_skip_non_zero_returns_new_observable() {
    let source = from_iter(vec![1, 2, 3]);

    let skipped = skip(source.clone(), 1);

    assert!(!skipped.ptr_eq(&source));
}

#[tokio::test]
async fn test_skip_is_cold_per_subscriber() -> anyhow::Result<()> {
    // Arrange
    let skipped = from_iter(vec![1, 2, 3]).skip(1);
    let (first, first_recorded) = RecordingObserver::new();
    let (second, second_recorded) = RecordingObserver::new();

    // Act
    skipped.subscribe(first).await?;
    skipped.subscribe(second).await?;

    // Assert
    assert_completed_with(&first_recorded, &[2, 3]);
    assert_completed_with(&second_recorded, &[2, 3]);
    Ok(())
}

#[tokio::test]
async fn test_chained_skips_add_up() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = RecordingObserver::new();

    // Act
    from_iter(1..=6)
        .skip(1)
        .skip(2)
        .subscribe(observer)
        .await?;

    // Assert
    assert_completed_with(&recorded, &[4, 5, 6]);
    Ok(())
}

#[tokio::test]
async fn test_skip_observer_used_directly() -> anyhow::Result<()> {
    // Arrange
    let (observer, recorded) = RecordingObserver::new();
    let mut skip = SkipObserver::new(observer, 1)?;

    // Act
    skip.on_next("dropped").await?;
    skip.on_next("kept").await?;
    skip.on_completed().await?;

    // Assert
    assert_eq!(skip.remaining(), 0);
    assert_completed_with(&recorded, &["kept"]);
    Ok(())
}

#[test]
fn test_skip_observer_rejects_zero_count() {
    let (observer, _recorded) = RecordingObserver::<i32>::new();

    let result = SkipObserver::new(observer, 0);

    match result {
        Err(FluxionError::InvalidArgument { name, .. }) => assert_eq!(name, "count"),
        other => panic!("Expected InvalidArgument, got {:?}", other.map(|_| ())),
    }
}
