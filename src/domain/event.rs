//! Display-oriented calendar events.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::DateInterval;

/// What an event on the availability calendar represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Booking,
    Blocked,
    Pricing,
    /// Synthetic per-day event showing the property's base rate.
    BasePrice,
}

impl EventKind {
    /// Whether events of this kind take precedence over the base rate for a day.
    #[must_use]
    pub fn overrides_base_price(&self) -> bool {
        matches!(self, EventKind::Pricing | EventKind::Blocked)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Booking => "booking",
            EventKind::Blocked => "blocked",
            EventKind::Pricing => "pricing",
            EventKind::BasePrice => "base_price",
        };
        f.write_str(name)
    }
}

/// A unified, ephemeral calendar entry derived from a booking, block or
/// pricing rule (or synthesized for a base-rate day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub kind: EventKind,
    pub status: String,
    pub property_label: String,
    pub all_day: bool,
}

impl CalendarEvent {
    /// The days this event spans.
    #[must_use]
    pub fn interval(&self) -> DateInterval {
        DateInterval::new(self.start, self.end)
    }
}
