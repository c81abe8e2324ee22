//! Interval classification: bookings, blocks and pricing rules to calendar events.
//!
//! Classification never fails. Missing dates and unknown property references
//! degrade to defaults so a partially broken upstream row still renders:
//!
//! - start falls back to the end date, then to `today`
//! - end falls back to start (a zero-length event)
//! - an unresolved property is labelled [`UNKNOWN_PROPERTY`]
//!
//! Output preserves input cardinality and order (bookings, blocks, pricing).
//! Overlapping events pass through untouched.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::{
    BlockRecord, BookingRecord, BookingStatus, CalendarEvent, EventKind, PricingRule, Property,
    PropertyId,
};

/// Label used when a record's property cannot be resolved.
pub const UNKNOWN_PROPERTY: &str = "Unknown";

/// Lookup from property id to display label.
#[derive(Debug, Clone, Default)]
pub struct PropertyDirectory {
    labels: HashMap<PropertyId, String>,
}

impl PropertyDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: PropertyId, label: impl Into<String>) {
        self.labels.insert(id, label.into());
    }

    /// Label for `id`, or [`UNKNOWN_PROPERTY`] when absent or unresolved.
    #[must_use]
    pub fn label(&self, id: Option<&PropertyId>) -> &str {
        id.and_then(|id| self.labels.get(id))
            .map_or(UNKNOWN_PROPERTY, String::as_str)
    }
}

impl<'a> FromIterator<&'a Property> for PropertyDirectory {
    fn from_iter<I: IntoIterator<Item = &'a Property>>(iter: I) -> Self {
        let labels = iter
            .into_iter()
            .map(|p| (p.id.clone(), p.title.clone()))
            .collect();
        Self { labels }
    }
}

/// Turns raw records into [`CalendarEvent`]s.
#[derive(Debug, Clone, Copy)]
pub struct IntervalClassifier<'a> {
    directory: &'a PropertyDirectory,
    today: NaiveDate,
}

impl<'a> IntervalClassifier<'a> {
    /// `today` is the start date of last resort for rows without any date.
    #[must_use]
    pub fn new(directory: &'a PropertyDirectory, today: NaiveDate) -> Self {
        Self { directory, today }
    }

    /// Classify every record, bookings first, then blocks, then pricing rules.
    #[must_use]
    pub fn classify(
        &self,
        bookings: &[BookingRecord],
        blocks: &[BlockRecord],
        rules: &[PricingRule],
    ) -> Vec<CalendarEvent> {
        let mut events = Vec::with_capacity(bookings.len() + blocks.len() + rules.len());
        events.extend(bookings.iter().map(|b| self.booking_event(b)));
        events.extend(blocks.iter().map(|b| self.block_event(b)));
        events.extend(rules.iter().map(|r| self.pricing_event(r)));
        events
    }

    fn booking_event(&self, booking: &BookingRecord) -> CalendarEvent {
        let label = self.directory.label(booking.property_id.as_ref());
        let (start, end) = self.resolve_dates(booking.check_in, booking.check_out);

        let (kind, title) = if booking.status == BookingStatus::Blocked {
            (EventKind::Blocked, format!("Blocked: {label}"))
        } else {
            (EventKind::Booking, format!("Booking: {label}"))
        };

        CalendarEvent {
            id: format!("booking-{}", booking.id),
            title,
            start,
            end,
            kind,
            status: booking.status.to_string(),
            property_label: label.to_string(),
            all_day: true,
        }
    }

    fn block_event(&self, block: &BlockRecord) -> CalendarEvent {
        let label = self.directory.label(block.property_id.as_ref());
        let (start, end) = self.resolve_dates(block.check_in, block.check_out);

        CalendarEvent {
            id: format!("block-{}", block.id),
            title: format!("Blocked: {label}"),
            start,
            end,
            kind: EventKind::Blocked,
            status: BookingStatus::Blocked.to_string(),
            property_label: label.to_string(),
            all_day: true,
        }
    }

    /// Titles keep a literal `$` regardless of the configured currency symbol.
    fn pricing_event(&self, rule: &PricingRule) -> CalendarEvent {
        let label = self.directory.label(rule.property_id.as_ref());
        let (start, end) = self.resolve_dates(rule.start_date, rule.end_date);

        CalendarEvent {
            id: format!("pricing-{}", rule.id),
            title: format!("Rate ${}", rule.price_per_night),
            start,
            end,
            kind: EventKind::Pricing,
            status: "pricing".to_string(),
            property_label: label.to_string(),
            all_day: true,
        }
    }

    fn resolve_dates(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> (NaiveDate, NaiveDate) {
        let start = start.or(end).unwrap_or(self.today);
        (start, end.unwrap_or(start))
    }
}
