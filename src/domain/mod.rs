//! Availability and pricing domain logic.
//!
//! Everything here is pure: no I/O, no clock reads except where a caller
//! passes the date in, no shared state.

mod event;
mod ids;
mod interval;
mod money;
mod record;

pub mod classifier;
pub mod pricing;
pub mod stay;
pub mod style;

// Core domain types
pub use event::{CalendarEvent, EventKind};
pub use ids::{PropertyId, RecordId};
pub use interval::DateInterval;
pub use money::Price;
pub use record::{BlockRecord, BookingRecord, BookingStatus, PricingRule, Property, PropertyScoped};

// Components
pub use classifier::{IntervalClassifier, PropertyDirectory, UNKNOWN_PROPERTY};
pub use pricing::{PricingSchedule, RuleOverlap};
pub use stay::{HalfDaySlot, NightLine, StayPriceCalculator, StayQuote, StayRequest};
pub use style::{resolve_style, EventStyle};
