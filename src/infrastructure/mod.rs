//! Infrastructure adapters
//!
//! The core consumes the time-mutation facility through
//! [`crate::domain::TimeControl`]; this module provides the in-process
//! reference implementation used by this crate's tests and available to
//! downstream harness adapters.

pub mod sim_clock;

pub use sim_clock::SimClock;
