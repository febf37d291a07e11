//! Event sink system for observability.
//!
//! The simulator announces each drawn value and each settlement through an
//! [`EventSink`]. Sinks decide whether that means a tracing line, a console
//! line, or a recorded entry in a test.

mod sink;

pub use sink::{
    CollectingEventSink, ConsoleEventSink, EventSink, LoggingEventSink,
};

/// Emitted synchronously when a value is drawn, before the delay starts.
pub const VALUE_DRAWN: &str = "value.drawn";

/// Emitted when the delay elapses, before the pending outcome resolves.
pub const OUTCOME_SETTLED: &str = "outcome.settled";
