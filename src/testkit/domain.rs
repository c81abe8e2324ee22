//! Builders for domain records used across tests.
//!
//! Concise factory functions so tests focus on assertions rather than
//! construction boilerplate. Dates are written as `"YYYY-MM-DD"` strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::{
    BlockRecord, BookingRecord, BookingStatus, PricingRule, Property, PropertyId, RecordId,
};

/// Parse a `YYYY-MM-DD` date. Panics on malformed input.
pub fn day(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").expect("valid YYYY-MM-DD date")
}

/// A property with the given id, title and base price.
pub fn property(id: i64, title: &str, base_price: Decimal) -> Property {
    Property {
        id: PropertyId::from(id),
        title: title.to_string(),
        base_price_per_night: base_price,
    }
}

/// A two-guest booking for `property` between the given dates.
pub fn booking(id: i64, property: i64, check_in: &str, check_out: &str, status: BookingStatus) -> BookingRecord {
    BookingRecord {
        id: RecordId::from(id),
        property_id: Some(PropertyId::from(property)),
        check_in: Some(day(check_in)),
        check_out: Some(day(check_out)),
        status,
        guest_count: 2,
        total_amount: Decimal::ZERO,
    }
}

/// A block for `property` between the given dates.
pub fn block(id: i64, property: i64, check_in: &str, check_out: &str) -> BlockRecord {
    BlockRecord {
        id: RecordId::from(id),
        property_id: Some(PropertyId::from(property)),
        check_in: Some(day(check_in)),
        check_out: Some(day(check_out)),
        reason: None,
    }
}

/// A one-night-minimum pricing rule for `property`.
pub fn rule(id: i64, property: i64, start: &str, end: &str, price: Decimal) -> PricingRule {
    PricingRule {
        id: RecordId::from(id),
        property_id: Some(PropertyId::from(property)),
        start_date: Some(day(start)),
        end_date: Some(day(end)),
        price_per_night: price,
        min_nights: 1,
        max_nights: None,
    }
}
