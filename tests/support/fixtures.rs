use std::sync::Arc;

use rust_decimal_macros::dec;
use stayrate::availability::AvailabilityService;
use stayrate::domain::BookingStatus;
use stayrate::testkit::domain::{block, booking, property, rule};
use stayrate::testkit::source::ScriptedSource;

/// Property 1 ("Seaside Villa", $100) with July 2024 activity, plus a
/// neighbouring property 2 whose records must never leak into property 1.
pub fn seaside_source() -> ScriptedSource {
    ScriptedSource::new()
        .with_properties(vec![
            property(1, "Seaside Villa", dec!(100)),
            property(2, "Mountain Cabin", dec!(80)),
        ])
        .with_bookings(vec![
            booking(10, 1, "2024-07-01", "2024-07-05", BookingStatus::Confirmed),
            booking(11, 1, "2024-07-20", "2024-07-22", BookingStatus::Blocked),
            booking(12, 2, "2024-07-01", "2024-07-05", BookingStatus::Pending),
        ])
        .with_blocks(vec![block(20, 1, "2024-07-10", "2024-07-12")])
        .with_pricing_rules(vec![
            rule(30, 1, "2024-07-14", "2024-07-16", dec!(200)),
            rule(31, 2, "2024-07-01", "2024-07-31", dec!(150)),
        ])
}

pub fn service_over(source: ScriptedSource) -> AvailabilityService {
    AvailabilityService::new(Arc::new(source))
}

/// Snapshot document in the raw upstream shape.
pub const SNAPSHOT_JSON: &str = r#"{
  "properties": [
    {"id": 1, "title": "Seaside Villa", "base_price_per_night": "100.00"}
  ],
  "bookings": [
    {"id": 10, "property": 1, "check_in_date": "2024-07-01", "check_out_date": "2024-07-05", "status": "confirmed"}
  ],
  "blocks": [
    {"id": 20, "property_id": "1", "check_in_date": "2024-07-10", "check_out_date": "2024-07-12"}
  ],
  "pricing_rules": [
    {"id": 30, "property": 1, "start_date": "2024-07-14", "end_date": "2024-07-16", "price_per_night": "200.00", "min_nights": 2},
    {"id": 31, "property": 1, "start_date": "2024-07-15", "end_date": "2024-07-18", "price_per_night": "250.00"}
  ]
}"#;
