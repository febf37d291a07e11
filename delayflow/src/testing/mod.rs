//! Testing utilities for delayflow simulations.
//!
//! This module provides:
//! - A simulator fixture wired to a collecting sink
//! - Assertions for settled outcomes and event ordering

mod assertions;
mod fixtures;

pub use assertions::{assert_drawn_before_settled, assert_failed_with, assert_succeeded_with};
pub use fixtures::TestSimulator;
