//! Event sink trait and implementations.

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use std::io::{self, Write};
use tracing::{debug, info, warn, Level};

use super::VALUE_DRAWN;

/// Trait for event sinks that receive simulator events.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Emits an event asynchronously.
    ///
    /// # Arguments
    ///
    /// * `event_type` - The type of event (e.g., "value.drawn")
    /// * `data` - Optional event data
    async fn emit(&self, event_type: &str, data: Option<serde_json::Value>);

    /// Emits an event without blocking.
    ///
    /// This method must never panic. Errors are logged but suppressed.
    fn try_emit(&self, event_type: &str, data: Option<serde_json::Value>);
}

/// An event sink that logs events using the tracing framework.
#[derive(Debug, Clone)]
pub struct LoggingEventSink {
    level: Level,
}

impl Default for LoggingEventSink {
    fn default() -> Self {
        Self::new(Level::INFO)
    }
}

impl LoggingEventSink {
    /// Creates a new logging event sink with the specified level.
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    fn log_event(&self, event_type: &str, data: Option<&serde_json::Value>) {
        if self.level == Level::DEBUG {
            debug!(
                event_type = %event_type,
                event_data = ?data,
                "Event: {}", event_type
            );
        } else {
            info!(
                event_type = %event_type,
                event_data = ?data,
                "Event: {}", event_type
            );
        }
    }
}

#[async_trait]
impl EventSink for LoggingEventSink {
    async fn emit(&self, event_type: &str, data: Option<serde_json::Value>) {
        self.log_event(event_type, data.as_ref());
    }

    fn try_emit(&self, event_type: &str, data: Option<serde_json::Value>) {
        self.log_event(event_type, data.as_ref());
    }
}

/// A collecting event sink for testing purposes.
#[derive(Debug, Default)]
pub struct CollectingEventSink {
    events: RwLock<Vec<(String, Option<serde_json::Value>)>>,
}

impl CollectingEventSink {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    #[must_use]
    pub fn events(&self) -> Vec<(String, Option<serde_json::Value>)> {
        self.events.read().clone()
    }

    /// Returns the collected event types in emission order.
    #[must_use]
    pub fn event_types(&self) -> Vec<String> {
        self.events.read().iter().map(|(t, _)| t.clone()).collect()
    }

    /// Returns the number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Returns true if no events have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Clears all collected events.
    pub fn clear(&self) {
        self.events.write().clear();
    }

    /// Returns events matching a type prefix.
    #[must_use]
    pub fn events_of_type(&self, type_prefix: &str) -> Vec<(String, Option<serde_json::Value>)> {
        self.events
            .read()
            .iter()
            .filter(|(t, _)| t.starts_with(type_prefix))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl EventSink for CollectingEventSink {
    async fn emit(&self, event_type: &str, data: Option<serde_json::Value>) {
        self.events.write().push((event_type.to_string(), data));
    }

    fn try_emit(&self, event_type: &str, data: Option<serde_json::Value>) {
        self.events.write().push((event_type.to_string(), data));
    }
}

/// Prints each drawn value as a bare line, the way the demo announces it.
///
/// Other event types are only traced at debug level.
#[derive(Debug)]
pub struct ConsoleEventSink<W> {
    out: Mutex<W>,
}

impl ConsoleEventSink<io::Stdout> {
    /// Creates a sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleEventSink<W> {
    /// Creates a sink writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the sink and returns the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_event(&self, event_type: &str, data: Option<&serde_json::Value>) {
        if event_type != VALUE_DRAWN {
            debug!(event_type = %event_type, "Console sink ignoring event");
            return;
        }

        let Some(value) = data.and_then(|d| d.get("value")).and_then(serde_json::Value::as_i64)
        else {
            warn!(event_type = %event_type, "Drawn event carried no value");
            return;
        };

        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{value}").and_then(|()| out.flush()) {
            warn!(error = %e, "Failed to write drawn value");
        }
    }
}

#[async_trait]
impl<W: Write + Send> EventSink for ConsoleEventSink<W> {
    async fn emit(&self, event_type: &str, data: Option<serde_json::Value>) {
        self.write_event(event_type, data.as_ref());
    }

    fn try_emit(&self, event_type: &str, data: Option<serde_json::Value>) {
        self.write_event(event_type, data.as_ref());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::events::OUTCOME_SETTLED;

    #[tokio::test]
    async fn test_logging_sink() {
        let sink = LoggingEventSink::default();
        sink.emit(VALUE_DRAWN, Some(serde_json::json!({"value": 1200}))).await;
        LoggingEventSink::new(Level::DEBUG).try_emit(OUTCOME_SETTLED, None);
    }

    #[tokio::test]
    async fn test_collecting_sink() {
        let sink = CollectingEventSink::new();
        assert!(sink.is_empty());

        sink.try_emit(VALUE_DRAWN, Some(serde_json::json!({"value": 800})));
        sink.emit(OUTCOME_SETTLED, None).await;

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.event_types(), vec![VALUE_DRAWN, OUTCOME_SETTLED]);
        assert_eq!(sink.events_of_type("value.").len(), 1);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[tokio::test]
    async fn test_console_sink_prints_drawn_value_only() {
        let sink = ConsoleEventSink::new(Vec::new());
        sink.try_emit(VALUE_DRAWN, Some(serde_json::json!({"value": 1200})));
        sink.emit(OUTCOME_SETTLED, Some(serde_json::json!({"value": 1200})))
            .await;
        sink.try_emit(VALUE_DRAWN, None);

        let printed = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(printed, "1200\n");
    }
}
