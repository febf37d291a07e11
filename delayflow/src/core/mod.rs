//! Core value types for delayflow.
//!
//! This module contains the transient values a simulation produces:
//! - The outcome status enum
//! - The settled outcome carrying the drawn value

mod outcome;
mod status;

pub use outcome::Outcome;
pub use status::OutcomeStatus;
