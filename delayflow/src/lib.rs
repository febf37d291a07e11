//! # Delayflow
//!
//! A delayed-outcome simulator: the smallest useful model of an operation
//! that takes a while and may fail.
//!
//! A simulation:
//!
//! - **Draws** a value uniformly from an inclusive range, announcing it at once
//! - **Waits** a fixed delay on the tokio timer
//! - **Settles** exactly once, succeeding if the value exceeds the threshold
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use delayflow::prelude::*;
//!
//! # async fn demo() -> Result<(), DelayflowError> {
//! // Prints the drawn value immediately, then the outcome a second later.
//! let pending = fetch_data();
//! let outcome = fetch_and_report(pending, &mut std::io::stdout()).await?;
//! assert_eq!(outcome.is_success(), outcome.value > 1000);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod caller;
pub mod config;
pub mod core;
pub mod errors;
pub mod events;
pub mod observability;
pub mod random;
pub mod simulator;
pub mod testing;

pub use simulator::fetch_data;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::caller::{fetch_and_report, report_outcome};
    pub use crate::config::SimulatorConfig;
    pub use crate::core::{Outcome, OutcomeStatus};
    pub use crate::errors::{ConfigError, DelayflowError, SimulatedFailure, SimulationError};
    pub use crate::events::{
        CollectingEventSink, ConsoleEventSink, EventSink, LoggingEventSink,
    };
    pub use crate::random::{
        FixedSource, NumberSource, ScriptedSource, SeededSource, ThreadRngSource,
    };
    pub use crate::simulator::{fetch_data, DelayedOutcomeSimulator, PendingOutcome};
}
