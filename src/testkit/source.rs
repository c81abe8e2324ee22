//! Scripted in-memory [`AvailabilitySource`].
//!
//! Records are served from memory; a failure can be scripted per data set
//! and every fetch is counted so tests can assert call patterns.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::availability::AvailabilitySource;
use crate::domain::{
    BlockRecord, BookingRecord, PricingRule, Property, PropertyId, PropertyScoped,
};
use crate::error::{ApiError, Error, Result};

/// Which record set a scripted failure applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Properties,
    Bookings,
    Blocks,
    PricingRules,
}

/// In-memory source with scriptable failures.
#[derive(Default)]
pub struct ScriptedSource {
    properties: Vec<Property>,
    unlisted: Vec<Property>,
    bookings: Vec<BookingRecord>,
    blocks: Vec<BlockRecord>,
    pricing_rules: Vec<PricingRule>,
    failures: Mutex<Vec<(Dataset, u16)>>,
    calls: Arc<AtomicU32>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(mut self, properties: Vec<Property>) -> Self {
        self.properties = properties;
        self
    }

    /// A property reachable by id that the `properties()` listing omits,
    /// as happens when it sits past the first page upstream.
    pub fn with_unlisted_property(mut self, property: Property) -> Self {
        self.unlisted.push(property);
        self
    }

    pub fn with_bookings(mut self, bookings: Vec<BookingRecord>) -> Self {
        self.bookings = bookings;
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<BlockRecord>) -> Self {
        self.blocks = blocks;
        self
    }

    pub fn with_pricing_rules(mut self, rules: Vec<PricingRule>) -> Self {
        self.pricing_rules = rules;
        self
    }

    /// Make the next fetch of `dataset` fail with HTTP `status`.
    pub fn fail_next(self, dataset: Dataset, status: u16) -> Self {
        self.failures.lock().push((dataset, status));
        self
    }

    /// Shared counter of fetches across all data sets.
    pub fn calls(&self) -> Arc<AtomicU32> {
        Arc::clone(&self.calls)
    }

    fn check(&self, dataset: Dataset) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut failures = self.failures.lock();
        if let Some(pos) = failures.iter().position(|(d, _)| *d == dataset) {
            let (_, status) = failures.remove(pos);
            return Err(Error::Api(ApiError::Status {
                status,
                url: format!("scripted://{dataset:?}"),
            }));
        }
        Ok(())
    }

    fn scoped<T: PropertyScoped + Clone>(records: &[T], property: &PropertyId) -> Vec<T> {
        records
            .iter()
            .filter(|r| r.belongs_to(property))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl AvailabilitySource for ScriptedSource {
    async fn properties(&self) -> Result<Vec<Property>> {
        self.check(Dataset::Properties)?;
        Ok(self.properties.clone())
    }

    async fn property(&self, id: &PropertyId) -> Result<Property> {
        self.check(Dataset::Properties)?;
        self.properties
            .iter()
            .chain(&self.unlisted)
            .find(|p| p.id == *id)
            .cloned()
            .ok_or_else(|| Error::InvalidInput(format!("unknown property {id}")))
    }

    async fn bookings(&self, property: &PropertyId) -> Result<Vec<BookingRecord>> {
        self.check(Dataset::Bookings)?;
        Ok(Self::scoped(&self.bookings, property))
    }

    async fn blocks(&self, property: &PropertyId) -> Result<Vec<BlockRecord>> {
        self.check(Dataset::Blocks)?;
        Ok(Self::scoped(&self.blocks, property))
    }

    async fn pricing_rules(&self, property: &PropertyId) -> Result<Vec<PricingRule>> {
        self.check(Dataset::PricingRules)?;
        Ok(Self::scoped(&self.pricing_rules, property))
    }

    fn source_name(&self) -> &'static str {
        "scripted"
    }
}
