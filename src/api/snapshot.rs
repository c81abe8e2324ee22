//! Offline data source backed by a JSON snapshot file.
//!
//! The file holds the four collections in the same raw shape the API serves:
//!
//! ```json
//! { "properties": [...], "bookings": [...], "blocks": [...], "pricing_rules": [...] }
//! ```

use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use super::dto::{normalize_for, RawBlock, RawBooking, RawPricingRule, RawProperty};
use crate::availability::AvailabilitySource;
use crate::domain::{BlockRecord, BookingRecord, PricingRule, Property, PropertyId, PropertyScoped};
use crate::error::Result;

#[derive(Debug, Default, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    properties: Vec<RawProperty>,
    #[serde(default)]
    bookings: Vec<RawBooking>,
    #[serde(default)]
    blocks: Vec<RawBlock>,
    #[serde(default)]
    pricing_rules: Vec<RawPricingRule>,
}

/// Normalized records loaded from a snapshot.
#[derive(Debug, Clone, Default)]
pub struct SnapshotSource {
    properties: Vec<Property>,
    bookings: Vec<BookingRecord>,
    blocks: Vec<BlockRecord>,
    pricing_rules: Vec<PricingRule>,
}

impl SnapshotSource {
    /// Load and normalize a snapshot file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            properties = snapshot.properties.len(),
            bookings = snapshot.bookings.len(),
            blocks = snapshot.blocks.len(),
            pricing_rules = snapshot.pricing_rules.len(),
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    /// Parse and normalize a snapshot document.
    pub fn from_json(content: &str) -> Result<Self> {
        let raw: RawSnapshot = serde_json::from_str(content)?;
        Ok(Self {
            properties: raw.properties.into_iter().map(Property::from).collect(),
            bookings: raw.bookings.into_iter().map(BookingRecord::from).collect(),
            blocks: raw.blocks.into_iter().map(BlockRecord::from).collect(),
            pricing_rules: raw.pricing_rules.into_iter().map(PricingRule::from).collect(),
        })
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
impl AvailabilitySource for SnapshotSource {
    async fn properties(&self) -> Result<Vec<Property>> {
        Ok(self.properties.clone())
    }

    async fn bookings(&self, property: &PropertyId) -> Result<Vec<BookingRecord>> {
        Ok(Self::scoped(&self.bookings, property))
    }

    async fn blocks(&self, property: &PropertyId) -> Result<Vec<BlockRecord>> {
        Ok(Self::scoped(&self.blocks, property))
    }

    async fn pricing_rules(&self, property: &PropertyId) -> Result<Vec<PricingRule>> {
        Ok(Self::scoped(&self.pricing_rules, property))
    }

    fn source_name(&self) -> &'static str {
        "snapshot"
    }
}
