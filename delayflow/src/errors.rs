//! Error types for delayflow.
//!
//! The only domain error is [`SimulatedFailure`], the modeled "failed to
//! load" branch. Everything else covers misuse (bad configuration) or the
//! runtime tearing down a pending simulation.

use crate::core::{Outcome, OutcomeStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The main error type for delayflow operations.
#[derive(Debug, Error)]
pub enum DelayflowError {
    /// The simulator configuration was rejected.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// The simulation settled on the failure branch or was aborted.
    #[error("{0}")]
    Simulation(#[from] SimulationError),

    /// IO error while reporting.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error while reporting.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// The modeled failure: the drawn value did not exceed the threshold.
///
/// Displays as the caller prints it, e.g. `Failed to load! 800`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("Failed to load! {value}")]
pub struct SimulatedFailure {
    /// The drawn value.
    #[serde(rename = "randomNumber")]
    pub value: i64,
}

impl SimulatedFailure {
    /// Status label carried by every failure payload.
    pub const STATUS: &'static str = "Failed to load!";

    /// Creates a new simulated failure.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }

    /// Returns the status label.
    #[must_use]
    pub const fn status(&self) -> &'static str {
        Self::STATUS
    }

    /// Returns the failure as an [`Outcome`].
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        Outcome {
            status: OutcomeStatus::Failure,
            value: self.value,
        }
    }
}

/// Error delivered through a pending simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The simulation settled on the failure branch.
    #[error("{0}")]
    Failed(#[from] SimulatedFailure),

    /// The settlement task never produced a result.
    #[error("Simulation aborted: {0}")]
    Aborted(String),
}

impl SimulationError {
    /// Returns the failure payload if this is the modeled failure branch.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&SimulatedFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Aborted(_) => None,
        }
    }
}

/// Error raised when a simulator configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The draw range contains no integers.
    #[error("Empty draw range: low {low} is greater than high {high}")]
    EmptyRange {
        /// Lower bound.
        low: i64,
        /// Upper bound.
        high: i64,
    },
}
