//! Caller side: wait for a pending outcome and report it.
//!
//! A success prints the whole outcome object, e.g.
//! `{"status":"Data loaded","randomNumber":1200}`. A failure is caught and
//! prints its status and value, e.g. `Failed to load! 800`.

use std::io::Write;
use tracing::{error, info};

use crate::core::Outcome;
use crate::errors::{DelayflowError, SimulationError};
use crate::simulator::PendingOutcome;

/// Writes the report line for a settled simulation.
///
/// Both branches return the settled [`Outcome`]. Only an aborted simulation
/// or a write error is returned as an error.
pub fn report_outcome<W: Write>(
    result: Result<Outcome, SimulationError>,
    out: &mut W,
) -> Result<Outcome, DelayflowError> {
    let outcome = match result {
        Ok(outcome) => {
            writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
            outcome
        }
        Err(SimulationError::Failed(failure)) => {
            writeln!(out, "{} {}", failure.status(), failure.value)?;
            failure.outcome()
        }
        Err(err @ SimulationError::Aborted(_)) => {
            error!(error = %err, "Simulation did not settle");
            return Err(err.into());
        }
    };
    out.flush()?;

    info!(status = %outcome.status, value = outcome.value, "Outcome reported");
    Ok(outcome)
}

/// Waits for `pending` to settle, then reports it.
pub async fn fetch_and_report<W: Write>(
    pending: PendingOutcome,
    out: &mut W,
) -> Result<Outcome, DelayflowError> {
    let result = pending.await;
    report_outcome(result, out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::SimulatorConfig;
    use crate::errors::SimulatedFailure;
    use crate::events::ConsoleEventSink;
    use crate::random::FixedSource;
    use crate::simulator::DelayedOutcomeSimulator;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn report_to_string(result: Result<Outcome, SimulationError>) -> (Outcome, String) {
        let mut out = Vec::new();
        let outcome = report_outcome(result, &mut out).unwrap();
        (outcome, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_report_success_prints_full_object() {
        let (outcome, printed) = report_to_string(Ok(Outcome::success(1200)));
        assert_eq!(outcome, Outcome::success(1200));
        assert_eq!(printed, "{\"status\":\"Data loaded\",\"randomNumber\":1200}\n");
    }

    #[test]
    fn test_report_failure_prints_status_and_value() {
        let (outcome, printed) =
            report_to_string(Err(SimulatedFailure::new(800).into()));
        assert_eq!(outcome, Outcome::failure(800));
        assert_eq!(printed, "Failed to load! 800\n");
    }

    #[test]
    fn test_report_aborted_is_error() {
        let mut out = Vec::new();
        let err = report_outcome(
            Err(SimulationError::Aborted("task panicked".to_string())),
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(err, DelayflowError::Simulation(SimulationError::Aborted(_))));
        assert!(out.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_console_transcript_for_boundary_draw() {
        let console = Arc::new(ConsoleEventSink::new(Vec::new()));
        let sim = DelayedOutcomeSimulator::new(SimulatorConfig::default(), FixedSource(1000))
            .unwrap()
            .with_sink(console.clone());

        let mut report = Vec::new();
        let outcome = fetch_and_report(sim.start(), &mut report).await.unwrap();
        drop(sim);

        assert_eq!(outcome, Outcome::failure(1000));
        assert_eq!(String::from_utf8(report).unwrap(), "Failed to load! 1000\n");

        let console = Arc::try_unwrap(console).unwrap();
        assert_eq!(String::from_utf8(console.into_inner()).unwrap(), "1000\n");
    }
}
