//! Test assertions for settled simulations.

use std::collections::BTreeMap;

use crate::core::Outcome;
use crate::errors::SimulationError;
use crate::events::{CollectingEventSink, OUTCOME_SETTLED, VALUE_DRAWN};

/// Asserts that the simulation succeeded with `value`.
pub fn assert_succeeded_with(result: &Result<Outcome, SimulationError>, value: i64) {
    match result {
        Ok(outcome) => assert_eq!(
            *outcome,
            Outcome::success(value),
            "Expected success with {value}, got {outcome:?}"
        ),
        Err(err) => panic!("Expected success with {value}, got error: {err}"),
    }
}

/// Asserts that the simulation failed with `value`.
pub fn assert_failed_with(result: &Result<Outcome, SimulationError>, value: i64) {
    match result {
        Ok(outcome) => panic!("Expected failure with {value}, got {outcome:?}"),
        Err(err) => assert_eq!(
            err.as_failure().map(|f| f.value),
            Some(value),
            "Expected failure with {value}, got error: {err}"
        ),
    }
}

/// Asserts that every invocation recorded exactly one drawn event followed by
/// exactly one settled event.
///
/// Events are grouped by `invocation_id`, so interleaved concurrent runs and
/// back-to-back sequential runs both pass. An invocation that never settled
/// fails.
pub fn assert_drawn_before_settled(sink: &CollectingEventSink) {
    let mut by_invocation: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (event_type, data) in sink.events() {
        if event_type != VALUE_DRAWN && event_type != OUTCOME_SETTLED {
            continue;
        }
        let Some(id) = data
            .as_ref()
            .and_then(|d| d.get("invocation_id"))
            .and_then(serde_json::Value::as_str)
        else {
            panic!("Event '{event_type}' carried no invocation_id: {data:?}");
        };
        by_invocation.entry(id.to_string()).or_default().push(event_type);
    }

    for (id, types) in &by_invocation {
        assert!(
            types.len() == 2 && types[0] == VALUE_DRAWN && types[1] == OUTCOME_SETTLED,
            "Expected invocation {id} to record [{VALUE_DRAWN}, {OUTCOME_SETTLED}], got {types:?}"
        );
    }
}
