// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use solus_core::{Result, SingleRef};

/// Extension trait providing the chaining operators on [`SingleRef`].
///
/// Chained stages compose: `source.map(f).map(g)` succeeds with the same value as
/// `source.map(|x| g(f(x)))`.
///
/// ```
/// use solus_core::Single;
/// use solus_single::{just, SingleExt};
/// use solus_test_utils::{Event, RecordingObserver};
///
/// let observer = RecordingObserver::<String>::new();
/// just(3)
///     .map(|x| x + 1)
///     .map(|x| format!("#{x}"))
///     .subscribe(observer.clone());
///
/// assert_eq!(
///     observer.events(),
///     vec![Event::Subscribed, Event::Success("#4".to_string())]
/// );
/// ```
pub trait SingleExt<T: 'static> {
    /// Transforms the success value. See [`crate::map()`].
    fn map<D, F>(self, function: F) -> SingleRef<D>
    where
        D: 'static,
        F: Fn(T) -> D + Send + Sync + 'static;

    /// Transforms the success value with a fallible function. See [`crate::try_map()`].
    fn try_map<D, F>(self, function: F) -> SingleRef<D>
    where
        D: 'static,
        F: Fn(T) -> Result<D> + Send + Sync + 'static;
}

impl<T: 'static> SingleExt<T> for SingleRef<T> {
    fn map<D, F>(self, function: F) -> SingleRef<D>
    where
        D: 'static,
        F: Fn(T) -> D + Send + Sync + 'static,
    {
        crate::map::map(self, function)
    }

    fn try_map<D, F>(self, function: F) -> SingleRef<D>
    where
        D: 'static,
        F: Fn(T) -> Result<D> + Send + Sync + 'static,
    {
        crate::map::try_map(self, function)
    }
}
