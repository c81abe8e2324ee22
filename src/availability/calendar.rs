//! Calendar assembly: classified events plus synthetic base-rate days.

use std::collections::BTreeSet;

use chrono::{Datelike, Local, NaiveDate};

use crate::domain::{
    BlockRecord, BookingRecord, CalendarEvent, DateInterval, EventKind, IntervalClassifier, Price,
    PricingRule, Property, PropertyDirectory,
};
use crate::error::{Error, Result};

/// Classify records into calendar events, using the local date as the
/// fallback for undated rows.
#[must_use]
pub fn build_events(
    bookings: &[BookingRecord],
    blocks: &[BlockRecord],
    pricing_rules: &[PricingRule],
    properties: &[Property],
) -> Vec<CalendarEvent> {
    build_events_at(
        bookings,
        blocks,
        pricing_rules,
        properties,
        Local::now().date_naive(),
    )
}

/// [`build_events`] with an explicit fallback date.
#[must_use]
pub fn build_events_at(
    bookings: &[BookingRecord],
    blocks: &[BlockRecord],
    pricing_rules: &[PricingRule],
    properties: &[Property],
    today: NaiveDate,
) -> Vec<CalendarEvent> {
    let directory: PropertyDirectory = properties.iter().collect();
    IntervalClassifier::new(&directory, today).classify(bookings, blocks, pricing_rules)
}

/// Days within `range` already carrying a pricing or blocked event.
#[must_use]
pub fn overridden_dates(events: &[CalendarEvent], range: DateInterval) -> BTreeSet<NaiveDate> {
    events
        .iter()
        .filter(|e| e.kind.overrides_base_price())
        .filter_map(|e| e.interval().intersection(&range))
        .flat_map(|clipped| clipped.days())
        .collect()
}

/// One [`EventKind::BasePrice`] event per day of `[month_start, month_end]`
/// that is not in `overridden`.
#[must_use]
pub fn build_base_day_events(
    month_start: NaiveDate,
    month_end: NaiveDate,
    base_price: Price,
    overridden: &BTreeSet<NaiveDate>,
    property_label: &str,
) -> Vec<CalendarEvent> {
    DateInterval::new(month_start, month_end)
        .days()
        .filter(|day| !overridden.contains(day))
        .map(|day| CalendarEvent {
            id: format!("base-{day}"),
            title: format!("Rate ${base_price}"),
            start: day,
            end: day,
            kind: EventKind::BasePrice,
            status: "base_price".to_string(),
            property_label: property_label.to_string(),
            all_day: true,
        })
        .collect()
}

/// First and last day of the month containing `date`.
#[must_use]
pub fn month_bounds(date: NaiveDate) -> DateInterval {
    let first = date.with_day(1).unwrap_or(date);
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    let last = next_month.and_then(|d| d.pred_opt()).unwrap_or(first);
    DateInterval::new(first, last)
}

/// Parse a `YYYY-MM` month into its day range.
pub fn parse_month(raw: &str) -> Result<DateInterval> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map_err(|e| Error::InvalidInput(format!("invalid month '{raw}': {e}")))?;
    Ok(month_bounds(first))
}
