//! Deferred result of a started simulation.

use futures::{ready, FutureExt};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::core::Outcome;
use crate::errors::{SimulatedFailure, SimulationError};

/// A simulation that has drawn its value and is waiting out the delay.
///
/// Resolves exactly once, to either the success outcome or the failure.
/// Dropping it does not stop the simulation; the settlement still runs.
#[derive(Debug)]
#[must_use = "a failed simulation goes unobserved unless the pending outcome is awaited"]
pub struct PendingOutcome {
    invocation_id: Uuid,
    drawn_value: i64,
    handle: JoinHandle<Result<Outcome, SimulatedFailure>>,
}

impl PendingOutcome {
    pub(crate) const fn new(
        invocation_id: Uuid,
        drawn_value: i64,
        handle: JoinHandle<Result<Outcome, SimulatedFailure>>,
    ) -> Self {
        Self {
            invocation_id,
            drawn_value,
            handle,
        }
    }

    /// Returns the id correlating this invocation's events.
    #[must_use]
    pub const fn invocation_id(&self) -> Uuid {
        self.invocation_id
    }

    /// Returns the value drawn when the simulation started.
    #[must_use]
    pub const fn drawn_value(&self) -> i64 {
        self.drawn_value
    }

    /// Returns true once the delay has elapsed and the outcome is decided.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Future for PendingOutcome {
    type Output = Result<Outcome, SimulationError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let joined = ready!(self.handle.poll_unpin(cx));
        Poll::Ready(match joined {
            Ok(settled) => settled.map_err(SimulationError::from),
            Err(e) => Err(SimulationError::Aborted(e.to_string())),
        })
    }
}
