//! Settled outcome of a simulation.

use super::OutcomeStatus;
use crate::errors::SimulatedFailure;
use serde::{Deserialize, Serialize};

/// The settled result of one simulation.
///
/// An `Outcome` is built when the delay elapses and handed straight to the
/// caller. The same `value` is carried whichever branch was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    /// Which branch the simulation settled on.
    pub status: OutcomeStatus,

    /// The drawn value that decided the branch.
    #[serde(rename = "randomNumber")]
    pub value: i64,
}

impl Outcome {
    /// Creates a successful outcome.
    #[must_use]
    pub const fn success(value: i64) -> Self {
        Self {
            status: OutcomeStatus::Success,
            value,
        }
    }

    /// Creates a failed outcome.
    #[must_use]
    pub const fn failure(value: i64) -> Self {
        Self {
            status: OutcomeStatus::Failure,
            value,
        }
    }

    /// Decides the branch for a drawn value.
    ///
    /// The comparison is strict: a value equal to the threshold fails.
    #[must_use]
    pub const fn decide(value: i64, threshold: i64) -> Self {
        if value > threshold {
            Self::success(value)
        } else {
            Self::failure(value)
        }
    }

    /// Returns true if the outcome is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Returns true if the outcome is a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.status.is_failure()
    }

    /// Splits the outcome into the success payload or the failure error.
    pub const fn into_result(self) -> Result<Self, SimulatedFailure> {
        match self.status {
            OutcomeStatus::Success => Ok(self),
            OutcomeStatus::Failure => Err(SimulatedFailure::new(self.value)),
        }
    }
}

impl From<SimulatedFailure> for Outcome {
    fn from(failure: SimulatedFailure) -> Self {
        Self::failure(failure.value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decide_above_threshold_succeeds() {
        assert_eq!(Outcome::decide(1200, 1000), Outcome::success(1200));
        assert_eq!(Outcome::decide(1001, 1000), Outcome::success(1001));
    }

    #[test]
    fn test_decide_at_or_below_threshold_fails() {
        assert_eq!(Outcome::decide(1000, 1000), Outcome::failure(1000));
        assert_eq!(Outcome::decide(800, 1000), Outcome::failure(800));
    }

    #[test]
    fn test_decide_matches_comparison_over_reference_range() {
        for value in 500..=1500 {
            let outcome = Outcome::decide(value, 1000);
            assert_eq!(outcome.value, value);
            assert_eq!(outcome.is_success(), value > 1000, "value {value}");
            assert_ne!(outcome.is_success(), outcome.is_failure());
        }
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::success(1200).into_result(), Ok(Outcome::success(1200)));

        let err = Outcome::failure(800).into_result().unwrap_err();
        assert_eq!(err.value, 800);
        assert_eq!(Outcome::from(err), Outcome::failure(800));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Outcome::success(1200)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"status": "Data loaded", "randomNumber": 1200})
        );

        let back: Outcome =
            serde_json::from_str(r#"{"status":"Failed to load!","randomNumber":800}"#).unwrap();
        assert_eq!(back, Outcome::failure(800));
    }
}
