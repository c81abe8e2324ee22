//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] - [`ScriptedSource`](source::ScriptedSource), an in-memory
//!   [`AvailabilitySource`](crate::availability::AvailabilitySource) with
//!   injectable failures and call counters.
//! - [`domain`] - Builders for properties, bookings, blocks and pricing rules.

pub mod domain;
pub mod source;
