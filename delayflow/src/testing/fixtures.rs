//! Test fixtures.

use std::sync::Arc;

use crate::config::SimulatorConfig;
use crate::events::CollectingEventSink;
use crate::random::{FixedSource, NumberSource, ScriptedSource};
use crate::simulator::{DelayedOutcomeSimulator, PendingOutcome};

/// A simulator wired to a collecting sink.
#[derive(Debug)]
pub struct TestSimulator {
    /// The simulator under test.
    pub simulator: DelayedOutcomeSimulator,
    /// Sink recording every event the simulator emits.
    pub sink: Arc<CollectingEventSink>,
}

impl TestSimulator {
    /// Builds a fixture from any source and config.
    ///
    /// # Panics
    ///
    /// Panics if `config` is invalid.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new(config: SimulatorConfig, source: Arc<dyn NumberSource>) -> Self {
        let sink = Arc::new(CollectingEventSink::new());
        let simulator = DelayedOutcomeSimulator::with_source(config, source)
            .expect("test config must be valid")
            .with_sink(sink.clone());
        Self { simulator, sink }
    }

    /// Reference parameters with every draw forced to `value`.
    #[must_use]
    pub fn fixed(value: i64) -> Self {
        Self::new(SimulatorConfig::default(), Arc::new(FixedSource(value)))
    }

    /// Reference parameters with draws taken from `values` in order.
    #[must_use]
    pub fn scripted(values: impl IntoIterator<Item = i64>) -> Self {
        Self::new(SimulatorConfig::default(), Arc::new(ScriptedSource::new(values)))
    }

    /// Starts a simulation.
    pub fn start(&self) -> PendingOutcome {
        self.simulator.start()
    }
}
