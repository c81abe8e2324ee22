//! Stayrate - availability calendars and seasonal stay pricing for rental listings.
//!
//! Given a property's bookings, admin date blocks and seasonal pricing rules,
//! the crate computes a unified calendar event list for display and the total
//! price of a stay, including half-day check-in/check-out adjustments.
//!
//! # Modules
//!
//! - [`domain`] - Pure logic: interval classification, style tokens, seasonal
//!   price resolution, stay price calculation
//! - [`availability`] - Facade joining a data source to the domain, plus
//!   per-view load state with a stale-response guard
//! - [`api`] - REST client with bearer-token refresh, JSON snapshot source,
//!   boundary adapters for raw upstream records
//! - [`config`] - Configuration loading from TOML files
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use stayrate::domain::{HalfDaySlot, PricingSchedule, StayPriceCalculator, StayRequest};
//!
//! let schedule = PricingSchedule::new(dec!(100), Vec::new());
//! let check_in = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let check_out = chrono::NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
//! let request = StayRequest::new(check_in, check_out).with_check_out_slot(HalfDaySlot::Morning);
//!
//! assert_eq!(StayPriceCalculator::new(&schedule).total(&request), dec!(250));
//! ```

pub mod api;
pub mod availability;
pub mod config;
pub mod domain;
pub mod error;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
