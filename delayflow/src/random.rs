//! Random number sources.
//!
//! The simulator never touches an RNG directly; it asks a [`NumberSource`]
//! for a value. Tests swap in [`FixedSource`] or [`ScriptedSource`] to force
//! a branch.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of drawn values.
#[cfg_attr(test, mockall::automock)]
pub trait NumberSource: Send + Sync {
    /// Draws a value from the inclusive range `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn draw(&self, low: i64, high: i64) -> i64;
}

/// Draws uniformly using the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl NumberSource for ThreadRngSource {
    fn draw(&self, low: i64, high: i64) -> i64 {
        rand::thread_rng().gen_range(low..=high)
    }
}

/// Draws uniformly from a seeded RNG, reproducible across runs.
#[derive(Debug)]
pub struct SeededSource {
    rng: Mutex<StdRng>,
}

impl SeededSource {
    /// Creates a seeded source.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl NumberSource for SeededSource {
    fn draw(&self, low: i64, high: i64) -> i64 {
        self.rng.lock().gen_range(low..=high)
    }
}

/// Always returns the same value, ignoring the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSource(pub i64);

impl NumberSource for FixedSource {
    fn draw(&self, _low: i64, _high: i64) -> i64 {
        self.0
    }
}

/// Returns queued values in order, then `low` once exhausted.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    values: Mutex<VecDeque<i64>>,
}

impl ScriptedSource {
    /// Creates a source that yields `values` in order.
    #[must_use]
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }

    /// Returns the number of values not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.lock().len()
    }
}

impl NumberSource for ScriptedSource {
    fn draw(&self, low: i64, _high: i64) -> i64 {
        self.values.lock().pop_front().unwrap_or(low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_stays_in_bounds() {
        let source = ThreadRngSource;
        for _ in 0..1000 {
            let value = source.draw(500, 1500);
            assert!((500..=1500).contains(&value), "out of range: {value}");
        }
    }

    #[test]
    fn test_thread_rng_single_value_range() {
        assert_eq!(ThreadRngSource.draw(42, 42), 42);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let a = SeededSource::new(7);
        let b = SeededSource::new(7);
        let first: Vec<i64> = (0..20).map(|_| a.draw(500, 1500)).collect();
        let second: Vec<i64> = (0..20).map(|_| b.draw(500, 1500)).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|v| (500..=1500).contains(v)));
    }

    #[test]
    fn test_fixed_source_ignores_range() {
        let source = FixedSource(1200);
        assert_eq!(source.draw(0, 10), 1200);
        assert_eq!(source.draw(500, 1500), 1200);
    }

    #[test]
    fn test_scripted_source_order_then_low() {
        let source = ScriptedSource::new([1200, 800]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.draw(500, 1500), 1200);
        assert_eq!(source.draw(500, 1500), 800);
        assert_eq!(source.remaining(), 0);
        assert_eq!(source.draw(500, 1500), 500);
    }

    #[test]
    fn test_mock_source() {
        let mut source = MockNumberSource::new();
        source
            .expect_draw()
            .withf(|low, high| *low == 500 && *high == 1500)
            .times(1)
            .return_const(999_i64);

        assert_eq!(source.draw(500, 1500), 999);
    }
}
