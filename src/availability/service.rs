//! Availability query facade over an [`AvailabilitySource`].

use std::sync::Arc;

use tracing::{debug, info};

use super::calendar::{build_base_day_events, build_events, overridden_dates};
use super::source::AvailabilitySource;
use super::view::{LoadOutcome, LoadTicket};
use crate::domain::{
    BlockRecord, BookingRecord, CalendarEvent, DateInterval, PricingRule, PricingSchedule,
    PropertyId, StayPriceCalculator, StayQuote, StayRequest,
};
use crate::error::Result;

/// The three record sets behind one property's calendar.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Availability {
    pub bookings: Vec<BookingRecord>,
    pub blocks: Vec<BlockRecord>,
    pub pricing_rules: Vec<PricingRule>,
}

/// Stateless facade joining a data source to the domain components.
pub struct AvailabilityService {
    source: Arc<dyn AvailabilitySource>,
}

impl AvailabilityService {
    pub fn new(source: Arc<dyn AvailabilitySource>) -> Self {
        Self { source }
    }

    /// Fetch bookings, blocks and pricing rules concurrently.
    ///
    /// The first failing fetch is returned unchanged.
    pub async fn load_availability(&self, property: &PropertyId) -> Result<Availability> {
        info!(property = %property, source = self.source.source_name(), "Loading availability");

        let (bookings, blocks, pricing_rules) = tokio::try_join!(
            self.source.bookings(property),
            self.source.blocks(property),
            self.source.pricing_rules(property),
        )?;

        debug!(
            bookings = bookings.len(),
            blocks = blocks.len(),
            pricing_rules = pricing_rules.len(),
            "Loaded availability"
        );

        Ok(Availability {
            bookings,
            blocks,
            pricing_rules,
        })
    }

    /// Fetch all three record sets for a view load, keeping each result
    /// separate so partial data can be shown.
    pub async fn fetch(&self, ticket: LoadTicket) -> LoadOutcome {
        let property = ticket.property_id().clone();
        let (bookings, blocks, pricing_rules) = tokio::join!(
            self.source.bookings(&property),
            self.source.blocks(&property),
            self.source.pricing_rules(&property),
        );
        LoadOutcome {
            ticket,
            bookings,
            blocks,
            pricing_rules,
        }
    }

    /// Classified events for the property plus one base-rate event for every
    /// day of `month` not already covered by a pricing or blocked event.
    ///
    /// The property is resolved by id, so its label and base price do not
    /// depend on it appearing in the `properties()` listing.
    pub async fn month_events(
        &self,
        property_id: &PropertyId,
        month: DateInterval,
    ) -> Result<Vec<CalendarEvent>> {
        let (property, availability) = tokio::try_join!(
            self.source.property(property_id),
            self.load_availability(property_id),
        )?;

        let mut events = build_events(
            &availability.bookings,
            &availability.blocks,
            &availability.pricing_rules,
            std::slice::from_ref(&property),
        );

        let overridden = overridden_dates(&events, month);
        events.extend(build_base_day_events(
            month.start(),
            month.end(),
            property.base_price_per_night,
            &overridden,
            &property.title,
        ));

        Ok(events)
    }

    /// Pricing schedule for one property.
    pub async fn schedule(&self, property_id: &PropertyId) -> Result<PricingSchedule> {
        let (property, rules) = tokio::try_join!(
            self.source.property(property_id),
            self.source.pricing_rules(property_id),
        )?;
        Ok(PricingSchedule::for_property(&property, &rules))
    }

    /// Itemized price for a prospective stay.
    pub async fn quote(&self, property_id: &PropertyId, request: &StayRequest) -> Result<StayQuote> {
        let schedule = self.schedule(property_id).await?;
        let quote = StayPriceCalculator::new(&schedule).quote(request);
        info!(
            property = %property_id,
            nights = quote.night_count(),
            total = %quote.total,
            "Quoted stay"
        );
        Ok(quote)
    }
}
