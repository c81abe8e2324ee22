//! Data source trait for availability records.
//!
//! The REST client and the snapshot file both implement [`AvailabilitySource`];
//! tests use the scripted source from the testkit.

use async_trait::async_trait;

use crate::domain::{BlockRecord, BookingRecord, PricingRule, Property, PropertyId};
use crate::error::{Error, Result};

/// Supplier of property, booking, block and pricing data.
#[async_trait]
pub trait AvailabilitySource: Send + Sync {
    /// All listed properties.
    async fn properties(&self) -> Result<Vec<Property>>;

    /// One property by id.
    async fn property(&self, id: &PropertyId) -> Result<Property> {
        self.properties()
            .await?
            .into_iter()
            .find(|p| p.id == *id)
            .ok_or_else(|| Error::InvalidInput(format!("unknown property {id}")))
    }

    /// Bookings for a property.
    async fn bookings(&self, property: &PropertyId) -> Result<Vec<BookingRecord>>;

    /// Admin date blocks for a property.
    async fn blocks(&self, property: &PropertyId) -> Result<Vec<BlockRecord>>;

    /// Seasonal pricing rules for a property, in precedence order.
    async fn pricing_rules(&self, property: &PropertyId) -> Result<Vec<PricingRule>>;

    /// Source name for logging/debugging.
    fn source_name(&self) -> &'static str;
}
