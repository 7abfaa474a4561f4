// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A value holder that reports changes.
//!
//! The interaction states in this crate are immutable values; a host usually
//! keeps the current one in a [`Stateful`] and re-renders from its callback.

use core::fmt;

/// Owns a value and calls `on_change` whenever it is replaced by a different
/// one.
///
/// Setting a value equal to the current one keeps the current value and does
/// not notify.
///
/// ```rust
/// use understory_interaction::stateful::Stateful;
///
/// let mut changes = 0;
/// let mut count = Stateful::new(0, |_: &i32| changes += 1);
/// count.set(1);
/// count.set(1);
/// count.update(|n| n + 1);
/// assert_eq!(*count.get(), 2);
/// drop(count);
/// assert_eq!(changes, 2);
/// ```
pub struct Stateful<T, F>
where
    F: FnMut(&T),
{
    value: T,
    on_change: F,
}

impl<T, F> Stateful<T, F>
where
    T: PartialEq,
    F: FnMut(&T),
{
    /// Wraps `value`. The callback is not called for the initial value.
    pub fn new(value: T, on_change: F) -> Self {
        Self { value, on_change }
    }

    /// The current value.
    #[must_use]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value. Returns whether it changed.
    pub fn set(&mut self, value: T) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        (self.on_change)(&self.value);
        true
    }

    /// Replaces the value with `f(current)`. Returns whether it changed.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value);
        self.set(next)
    }

    /// Unwraps the value, dropping the callback.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, F> fmt::Debug for Stateful<T, F>
where
    T: fmt::Debug,
    F: FnMut(&T),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stateful")
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use understory_geometry::NumericRange;

    use super::Stateful;
    use crate::slider::Slider;

    #[test]
    fn notifies_only_on_change() {
        let mut seen = Vec::new();
        {
            let mut state = Stateful::new(1, |v: &i32| seen.push(*v));
            assert!(!state.set(1));
            assert!(state.set(2));
            assert!(!state.update(|v| *v));
            assert!(state.update(|v| v * 10));
            assert_eq!(state.into_inner(), 20);
        }
        assert_eq!(seen, [2, 20]);
    }

    #[test]
    fn holds_interaction_values() {
        let slider = Slider::default();
        let mut renders = 0;
        let mut value =
            Stateful::new(NumericRange::new(0.0, 0.5), |_: &NumericRange| renders += 1);
        value.update(|v| slider.drag_body(*v, 0.0, 100.0));
        value.update(|v| slider.drag_body(*v, 25.0, 100.0));
        assert_eq!(*value.get(), NumericRange::new(0.25, 0.75));
        assert_eq!(
            format!("{value:?}"),
            "Stateful { value: NumericRange { start: 0.25, end: 0.75 }, .. }"
        );
        drop(value);
        assert_eq!(renders, 1);
    }
}
