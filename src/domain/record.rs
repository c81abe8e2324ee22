//! Normalized upstream records: properties, bookings, blocks and pricing rules.
//!
//! These are the fixed shapes the boundary adapters in [`crate::api`] produce.
//! Dates stay optional because upstream rows are not guaranteed to carry them;
//! the classifier and resolvers decide how a missing date degrades.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{DateInterval, Price, PropertyId, RecordId};

/// A record that may reference the property it belongs to.
pub trait PropertyScoped {
    fn property_id(&self) -> Option<&PropertyId>;

    /// Whether the record belongs to `property`. Records without a
    /// property reference belong to every property.
    fn belongs_to(&self, property: &PropertyId) -> bool {
        self.property_id().map_or(true, |id| id == property)
    }
}

/// Reference data for a listed property.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub base_price_per_night: Price,
}

/// Lifecycle status of a guest booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
    /// A booking row used upstream to mark the dates unavailable.
    Blocked,
    /// Any status string this crate does not recognize.
    Unknown,
}

impl BookingStatus {
    /// Parse an upstream status string, case-insensitively.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "confirmed" => Self::Confirmed,
            "pending" => Self::Pending,
            "cancelled" | "canceled" => Self::Cancelled,
            "completed" => Self::Completed,
            "blocked" => Self::Blocked,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A guest reservation. Read-only to this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRecord {
    pub id: RecordId,
    pub property_id: Option<PropertyId>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub status: BookingStatus,
    pub guest_count: u32,
    pub total_amount: Decimal,
}

/// An admin-imposed unavailability window.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockRecord {
    pub id: RecordId,
    pub property_id: Option<PropertyId>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub reason: Option<String>,
}

/// A seasonal nightly rate that supersedes a property's base price.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingRule {
    pub id: RecordId,
    pub property_id: Option<PropertyId>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price_per_night: Price,
    pub min_nights: u32,
    pub max_nights: Option<u32>,
}

impl PropertyScoped for BookingRecord {
    fn property_id(&self) -> Option<&PropertyId> {
        self.property_id.as_ref()
    }
}

impl PropertyScoped for BlockRecord {
    fn property_id(&self) -> Option<&PropertyId> {
        self.property_id.as_ref()
    }
}

impl PropertyScoped for PricingRule {
    fn property_id(&self) -> Option<&PropertyId> {
        self.property_id.as_ref()
    }
}

impl PricingRule {
    /// The dated range the rule covers. `None` unless both bounds are known.
    #[must_use]
    pub fn interval(&self) -> Option<DateInterval> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some(DateInterval::new(start, end)),
            _ => None,
        }
    }

    /// Whether the rule's range covers `date`.
    #[must_use]
    pub fn applies_to(&self, date: NaiveDate) -> bool {
        self.interval().is_some_and(|range| range.contains(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(BookingStatus::parse("Confirmed"), BookingStatus::Confirmed);
        assert_eq!(BookingStatus::parse(" PENDING "), BookingStatus::Pending);
        assert_eq!(BookingStatus::parse("canceled"), BookingStatus::Cancelled);
        assert_eq!(BookingStatus::parse("blocked"), BookingStatus::Blocked);
        assert_eq!(BookingStatus::parse("on-hold"), BookingStatus::Unknown);
    }

    #[test]
    fn undated_rule_applies_nowhere() {
        let rule = PricingRule {
            id: RecordId::from(1),
            property_id: None,
            start_date: NaiveDate::from_ymd_opt(2024, 7, 1),
            end_date: None,
            price_per_night: Decimal::from(200),
            min_nights: 1,
            max_nights: None,
        };
        assert!(rule.interval().is_none());
        assert!(!rule.applies_to(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap()));
    }
}
