//! The delayed-outcome simulator.
//!
//! A simulation draws a value, announces it, waits out a fixed delay, then
//! succeeds if the value exceeds the threshold and fails otherwise. The draw
//! and the announcement happen synchronously inside [`DelayedOutcomeSimulator::start`];
//! the wait and the decision run on the tokio runtime behind a
//! [`PendingOutcome`].

mod pending;

pub use pending::PendingOutcome;

use serde_json::json;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SimulatorConfig;
use crate::core::Outcome;
use crate::errors::{ConfigError, SimulationError};
use crate::events::{
    ConsoleEventSink, EventSink, LoggingEventSink, OUTCOME_SETTLED, VALUE_DRAWN,
};
use crate::random::{NumberSource, ThreadRngSource};

/// Produces, after a fixed delay, an outcome decided by a random draw.
pub struct DelayedOutcomeSimulator {
    config: SimulatorConfig,
    source: Arc<dyn NumberSource>,
    sink: Arc<dyn EventSink>,
}

impl fmt::Debug for DelayedOutcomeSimulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelayedOutcomeSimulator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl DelayedOutcomeSimulator {
    /// Creates a simulator drawing from `source`.
    ///
    /// Events go to a [`LoggingEventSink`] until [`with_sink`](Self::with_sink)
    /// replaces it.
    pub fn new(
        config: SimulatorConfig,
        source: impl NumberSource + 'static,
    ) -> Result<Self, ConfigError> {
        Self::with_source(config, Arc::new(source))
    }

    /// Creates a simulator from a shared source.
    pub fn with_source(
        config: SimulatorConfig,
        source: Arc<dyn NumberSource>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            sink: Arc::new(LoggingEventSink::default()),
        })
    }

    /// The reference simulator: default parameters, thread RNG, and drawn
    /// values printed to standard output.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            config: SimulatorConfig::default(),
            source: Arc::new(ThreadRngSource),
            sink: Arc::new(ConsoleEventSink::stdout()),
        }
    }

    /// Replaces the event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Starts a simulation.
    ///
    /// The value is drawn and the `value.drawn` event emitted before this
    /// returns. The delay is measured from this call.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn start(&self) -> PendingOutcome {
        let invocation_id = Uuid::new_v4();
        let value = self.source.draw(self.config.low, self.config.high);

        info!(%invocation_id, value, "Drew value");
        self.sink.try_emit(
            VALUE_DRAWN,
            Some(json!({
                "invocation_id": invocation_id.to_string(),
                "value": value,
            })),
        );

        // Armed here so the deadline does not depend on when the task is first polled.
        let delay = tokio::time::sleep(self.config.delay());
        let threshold = self.config.threshold;
        let sink = Arc::clone(&self.sink);

        let handle = tokio::spawn(async move {
            delay.await;

            let outcome = Outcome::decide(value, threshold);
            debug!(
                %invocation_id,
                value,
                threshold,
                status = %outcome.status,
                "Outcome settled"
            );
            sink.emit(
                OUTCOME_SETTLED,
                Some(json!({
                    "invocation_id": invocation_id.to_string(),
                    "status": outcome.status.to_string(),
                    "value": value,
                })),
            )
            .await;

            outcome.into_result()
        });

        PendingOutcome::new(invocation_id, value, handle)
    }

    /// Starts a simulation and waits for it to settle.
    pub async fn run(&self) -> Result<Outcome, SimulationError> {
        self.start().await
    }
}

/// Starts the reference simulation.
///
/// Prints the drawn value immediately and returns the deferred result. The
/// failure branch is only observed if the caller awaits the result.
///
/// # Panics
///
/// Panics if called outside a tokio runtime.
pub fn fetch_data() -> PendingOutcome {
    DelayedOutcomeSimulator::reference().start()
}
