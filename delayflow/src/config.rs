//! Simulator configuration.
//!
//! The defaults are the reference parameters: draw from `[500, 1500]`,
//! succeed above `1000`, settle after one second.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a [`DelayedOutcomeSimulator`](crate::simulator::DelayedOutcomeSimulator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Inclusive lower bound of the draw.
    pub low: i64,
    /// Inclusive upper bound of the draw.
    pub high: i64,
    /// Values strictly greater than this succeed.
    pub threshold: i64,
    /// Delay before the outcome settles, in milliseconds.
    pub delay_ms: u64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            low: 500,
            high: 1500,
            threshold: 1000,
            delay_ms: 1000,
        }
    }
}

impl SimulatorConfig {
    /// Creates a config with the reference parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive draw range.
    #[must_use]
    pub const fn with_range(mut self, low: i64, high: i64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Sets the success threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the delay.
    #[must_use]
    pub const fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Returns the delay as a [`Duration`].
    #[must_use]
    pub const fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Checks that the draw range is non-empty.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.low > self.high {
            return Err(ConfigError::EmptyRange {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }
}
