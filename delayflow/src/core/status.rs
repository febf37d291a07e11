//! Outcome status enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which branch a simulation settled on.
///
/// Serializes as the human-readable label printed by the caller, so a
/// serialized outcome reads `{"status":"Data loaded", ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeStatus {
    /// The drawn value exceeded the threshold.
    #[serde(rename = "Data loaded")]
    Success,
    /// The drawn value was at or below the threshold.
    #[serde(rename = "Failed to load!")]
    Failure,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

impl OutcomeStatus {
    /// Label used in console output.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Success => "Data loaded",
            Self::Failure => "Failed to load!",
        }
    }

    /// Returns true if the status indicates success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns true if the status indicates failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_status_display() {
        assert_eq!(OutcomeStatus::Success.to_string(), "success");
        assert_eq!(OutcomeStatus::Failure.to_string(), "failure");
    }

    #[test]
    fn test_outcome_status_labels() {
        assert_eq!(OutcomeStatus::Success.label(), "Data loaded");
        assert_eq!(OutcomeStatus::Failure.label(), "Failed to load!");
    }

    #[test]
    fn test_outcome_status_predicates() {
        assert!(OutcomeStatus::Success.is_success());
        assert!(!OutcomeStatus::Success.is_failure());
        assert!(OutcomeStatus::Failure.is_failure());
        assert!(!OutcomeStatus::Failure.is_success());
    }

    #[test]
    fn test_outcome_status_serializes_as_label() {
        let json = serde_json::to_string(&OutcomeStatus::Failure).unwrap();
        assert_eq!(json, "\"Failed to load!\"");

        let status: OutcomeStatus = serde_json::from_str("\"Data loaded\"").unwrap();
        assert_eq!(status, OutcomeStatus::Success);
    }
}
