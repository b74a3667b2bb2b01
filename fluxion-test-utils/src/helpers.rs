// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::recording::Recorded;
use core::fmt::Debug;
use fluxion_core::Notification;

/// Assert that the log holds exactly `expected` followed by `Completed`.
pub fn assert_completed_with<T>(recorded: &Recorded<T>, expected: &[T])
where
    T: Clone + Debug + PartialEq,
{
    let mut wanted: Vec<Notification<T>> =
        expected.iter().cloned().map(Notification::Next).collect();
    wanted.push(Notification::Completed);

    assert_eq!(recorded.notifications(), wanted);
}

/// Assert that the log holds exactly `expected` followed by an error whose message
/// contains `message`.
pub fn assert_failed_with<T>(recorded: &Recorded<T>, expected: &[T], message: &str)
where
    T: Clone + Debug + PartialEq,
{
    let notifications = recorded.notifications();
    let Some((last, items)) = notifications.split_last() else {
        panic!("Expected an error notification, but nothing was recorded");
    };

    assert_eq!(
        items.iter().cloned().filter_map(Notification::into_value).collect::<Vec<_>>(),
        expected
    );
    assert_eq!(items.len(), expected.len(), "Unexpected terminal before the error");
    match last {
        Notification::Error(error) => assert!(
            error.to_string().contains(message),
            "Expected error containing {message:?}, got {error}"
        ),
        other => panic!("Expected error notification, got {other:?}"),
    }
}

/// Assert that nothing at all reached the observer.
pub fn assert_nothing_recorded<T: Clone + Debug>(recorded: &Recorded<T>) {
    assert!(
        recorded.is_empty(),
        "Unexpected notifications, expected no output: {:?}",
        recorded.notifications()
    );
}
