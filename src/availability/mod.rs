//! Availability query facade.
//!
//! Joins an [`AvailabilitySource`] to the domain components:
//!
//! - [`AvailabilityService`] - concurrent fetches, month calendars, stay quotes
//! - [`calendar`] - event building and synthetic base-rate days
//! - [`AvailabilityView`] - caller-owned view state with load states,
//!   stale-response guard and memoized events

pub mod calendar;
mod service;
mod source;
mod view;

pub use calendar::{
    build_base_day_events, build_events, build_events_at, month_bounds, overridden_dates,
    parse_month,
};
pub use service::{Availability, AvailabilityService};
pub use source::AvailabilitySource;
pub use view::{AvailabilityView, LoadOutcome, LoadState, LoadTicket};
