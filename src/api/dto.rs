//! Raw JSON shapes of the listings API and their boundary adapters.
//!
//! Upstream rows vary by endpoint: the property reference may be `property`
//! or `property_id`, a number, a string or a nested object; collections may be
//! bare arrays or paginated `{ "results": [...] }` envelopes. Everything is
//! normalized here so the domain only sees the fixed record shapes.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::domain::{
    BlockRecord, BookingRecord, BookingStatus, PricingRule, Property, PropertyId, PropertyScoped,
    RecordId,
};

/// An identifier that may arrive as a JSON number or string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Text(String),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            RawId::Int(n) => n.to_string(),
            RawId::Text(s) => s,
        }
    }
}

/// A property reference: a bare id or an embedded property object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawPropertyRef {
    Id(RawId),
    Object { id: RawId },
}

impl RawPropertyRef {
    fn into_property_id(self) -> PropertyId {
        match self {
            RawPropertyRef::Id(id) | RawPropertyRef::Object { id } => {
                PropertyId::new(id.into_string())
            }
        }
    }
}

/// A collection response, bare or paginated.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawList<T> {
    Bare(Vec<T>),
    Paged {
        results: Vec<T>,
        /// Link to the following page, absolute or relative to the server.
        #[serde(default)]
        next: Option<String>,
    },
}

impl<T> RawList<T> {
    /// Items of this page and the link to the next one, if any.
    pub fn into_page(self) -> (Vec<T>, Option<String>) {
        match self {
            RawList::Bare(items) => (items, None),
            RawList::Paged { results, next } => {
                (results, next.filter(|n| !n.trim().is_empty()))
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawProperty {
    pub id: RawId,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default, alias = "price_per_night")]
    pub base_price_per_night: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBooking {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub property: Option<RawPropertyRef>,
    #[serde(default)]
    pub property_id: Option<RawPropertyRef>,
    #[serde(default)]
    pub check_in_date: Option<String>,
    #[serde(default)]
    pub check_out_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, alias = "guests")]
    pub guest_count: Option<u32>,
    #[serde(default, alias = "total_price")]
    pub total_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawBlock {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub property: Option<RawPropertyRef>,
    #[serde(default)]
    pub property_id: Option<RawPropertyRef>,
    #[serde(default)]
    pub check_in_date: Option<String>,
    #[serde(default)]
    pub check_out_date: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPricingRule {
    #[serde(default)]
    pub id: Option<RawId>,
    #[serde(default)]
    pub property: Option<RawPropertyRef>,
    #[serde(default)]
    pub property_id: Option<RawPropertyRef>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub price_per_night: Option<Decimal>,
    #[serde(default)]
    pub min_nights: Option<u32>,
    #[serde(default)]
    pub max_nights: Option<u32>,
}

/// Body of the token refresh endpoint.
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Parse an ISO date, ignoring any time component. Unparseable input is `None`.
pub fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }
    let day = raw.get(..10).unwrap_or(raw);
    match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            debug!(value = raw, error = %e, "Ignoring unparseable date");
            None
        }
    }
}

fn record_id(id: Option<RawId>) -> RecordId {
    id.map_or_else(|| RecordId::new("unknown"), |id| RecordId::new(id.into_string()))
}

fn property_ref(
    property: Option<RawPropertyRef>,
    property_id: Option<RawPropertyRef>,
) -> Option<PropertyId> {
    property.or(property_id).map(RawPropertyRef::into_property_id)
}

/// Parse both bounds, swapping them when they arrive reversed.
fn ordered_dates(
    start: Option<&str>,
    end: Option<&str>,
) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match (parse_date(start), parse_date(end)) {
        (Some(s), Some(e)) if s > e => (Some(e), Some(s)),
        other => other,
    }
}

impl From<RawProperty> for Property {
    fn from(raw: RawProperty) -> Self {
        let id = PropertyId::new(raw.id.into_string());
        let title = raw
            .title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("Property {id}"));
        Property {
            base_price_per_night: raw.base_price_per_night.unwrap_or_default(),
            id,
            title,
        }
    }
}

impl From<RawBooking> for BookingRecord {
    fn from(raw: RawBooking) -> Self {
        let (check_in, check_out) =
            ordered_dates(raw.check_in_date.as_deref(), raw.check_out_date.as_deref());
        BookingRecord {
            id: record_id(raw.id),
            property_id: property_ref(raw.property, raw.property_id),
            check_in,
            check_out,
            status: raw
                .status
                .as_deref()
                .map_or(BookingStatus::Unknown, BookingStatus::parse),
            guest_count: raw.guest_count.unwrap_or(0),
            total_amount: raw.total_amount.unwrap_or_default(),
        }
    }
}

impl From<RawBlock> for BlockRecord {
    fn from(raw: RawBlock) -> Self {
        let (check_in, check_out) =
            ordered_dates(raw.check_in_date.as_deref(), raw.check_out_date.as_deref());
        BlockRecord {
            id: record_id(raw.id),
            property_id: property_ref(raw.property, raw.property_id),
            check_in,
            check_out,
            reason: raw.reason.filter(|r| !r.trim().is_empty()),
        }
    }
}

impl From<RawPricingRule> for PricingRule {
    fn from(raw: RawPricingRule) -> Self {
        let (start_date, end_date) =
            ordered_dates(raw.start_date.as_deref(), raw.end_date.as_deref());
        let id = record_id(raw.id);

        let mut price_per_night = raw.price_per_night.unwrap_or_default();
        if price_per_night.is_sign_negative() {
            warn!(rule = %id, price = %price_per_night, "Negative nightly price clamped to zero");
            price_per_night = Decimal::ZERO;
        }

        PricingRule {
            property_id: property_ref(raw.property, raw.property_id),
            start_date,
            end_date,
            price_per_night,
            min_nights: raw.min_nights.unwrap_or(1).max(1),
            max_nights: raw.max_nights,
            id,
        }
    }
}

/// Normalize raw rows and keep those belonging to `property`.
pub fn normalize_for<R, T>(raw: Vec<R>, property: &PropertyId) -> Vec<T>
where
    T: From<R> + PropertyScoped,
{
    raw.into_iter()
        .map(T::from)
        .filter(|record| record.belongs_to(property))
        .collect()
}
