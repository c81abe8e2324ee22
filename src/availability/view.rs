//! Per-property calendar view state.
//!
//! A view tracks the three record sets independently as [`LoadState`]s so a
//! caller can render partial data, guards against stale responses with a
//! generation counter, and memoizes the classified events until one of its
//! inputs changes.

use chrono::NaiveDate;
use tracing::debug;

use super::calendar::build_events_at;
use crate::domain::{BlockRecord, BookingRecord, CalendarEvent, PricingRule, Property, PropertyId};
use crate::error::Result;

/// Load status of one data source.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> LoadState<T> {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    #[must_use]
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> From<Result<T>> for LoadState<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => LoadState::Failed(err.to_string()),
        }
    }
}

/// Identifies one load cycle of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    property_id: PropertyId,
    generation: u64,
}

impl LoadTicket {
    #[must_use]
    pub fn property_id(&self) -> &PropertyId {
        &self.property_id
    }
}

/// Results of fetching the three record sets for one ticket.
#[derive(Debug)]
pub struct LoadOutcome {
    pub ticket: LoadTicket,
    pub bookings: Result<Vec<BookingRecord>>,
    pub blocks: Result<Vec<BlockRecord>>,
    pub pricing_rules: Result<Vec<PricingRule>>,
}

/// Calendar state of one property, owned by the caller.
#[derive(Debug)]
pub struct AvailabilityView {
    property_id: PropertyId,
    properties: Vec<Property>,
    generation: u64,
    closed: bool,
    bookings: LoadState<Vec<BookingRecord>>,
    blocks: LoadState<Vec<BlockRecord>>,
    pricing_rules: LoadState<Vec<PricingRule>>,
    revision: u64,
    memo: Option<Memo>,
    recomputations: u64,
}

#[derive(Debug)]
struct Memo {
    revision: u64,
    today: NaiveDate,
    events: Vec<CalendarEvent>,
}

impl AvailabilityView {
    #[must_use]
    pub fn new(property_id: PropertyId, properties: Vec<Property>) -> Self {
        Self {
            property_id,
            properties,
            generation: 0,
            closed: false,
            bookings: LoadState::Loading,
            blocks: LoadState::Loading,
            pricing_rules: LoadState::Loading,
            revision: 0,
            memo: None,
            recomputations: 0,
        }
    }

    #[must_use]
    pub fn property_id(&self) -> &PropertyId {
        &self.property_id
    }

    /// Start a new load cycle. Results of earlier cycles are discarded from now on.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.bookings = LoadState::Loading;
        self.blocks = LoadState::Loading;
        self.pricing_rules = LoadState::Loading;
        self.touch();
        LoadTicket {
            property_id: self.property_id.clone(),
            generation: self.generation,
        }
    }

    /// Tear the view down. Every later result is discarded.
    pub fn close(&mut self) {
        self.closed = true;
    }

    fn accepts(&self, ticket: &LoadTicket) -> bool {
        let current = !self.closed
            && ticket.generation == self.generation
            && ticket.property_id == self.property_id;
        if !current {
            debug!(
                property = %ticket.property_id,
                generation = ticket.generation,
                current_generation = self.generation,
                closed = self.closed,
                "Discarding stale availability response"
            );
        }
        current
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    /// Apply a bookings result. Returns false when the ticket is stale.
    pub fn apply_bookings(&mut self, ticket: &LoadTicket, result: Result<Vec<BookingRecord>>) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.bookings = result.into();
        self.touch();
        true
    }

    /// Apply a blocks result. Returns false when the ticket is stale.
    pub fn apply_blocks(&mut self, ticket: &LoadTicket, result: Result<Vec<BlockRecord>>) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.blocks = result.into();
        self.touch();
        true
    }

    /// Apply a pricing rules result. Returns false when the ticket is stale.
    pub fn apply_pricing_rules(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Vec<PricingRule>>,
    ) -> bool {
        if !self.accepts(ticket) {
            return false;
        }
        self.pricing_rules = result.into();
        self.touch();
        true
    }

    /// Apply all three results of a fetch. Returns false when the ticket is stale.
    pub fn apply(&mut self, outcome: LoadOutcome) -> bool {
        if !self.accepts(&outcome.ticket) {
            return false;
        }
        let LoadOutcome {
            ticket,
            bookings,
            blocks,
            pricing_rules,
        } = outcome;
        self.apply_bookings(&ticket, bookings);
        self.apply_blocks(&ticket, blocks);
        self.apply_pricing_rules(&ticket, pricing_rules);
        true
    }

    #[must_use]
    pub fn bookings(&self) -> &LoadState<Vec<BookingRecord>> {
        &self.bookings
    }

    #[must_use]
    pub fn blocks(&self) -> &LoadState<Vec<BlockRecord>> {
        &self.blocks
    }

    #[must_use]
    pub fn pricing_rules(&self) -> &LoadState<Vec<PricingRule>> {
        &self.pricing_rules
    }

    /// Whether every source has loaded successfully.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.bookings.is_ready() && self.blocks.is_ready() && self.pricing_rules.is_ready()
    }

    /// The first failure among the three sources, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.bookings
            .error()
            .or_else(|| self.blocks.error())
            .or_else(|| self.pricing_rules.error())
    }

    /// Classified events, once all three sources are ready.
    ///
    /// The result is cached and only recomputed after an input changed.
    pub fn events(&mut self, today: NaiveDate) -> Option<&[CalendarEvent]> {
        let (Some(bookings), Some(blocks), Some(rules)) = (
            self.bookings.ready(),
            self.blocks.ready(),
            self.pricing_rules.ready(),
        ) else {
            return None;
        };

        let fresh = self
            .memo
            .as_ref()
            .is_some_and(|m| m.revision == self.revision && m.today == today);
        if !fresh {
            let events = build_events_at(bookings, blocks, rules, &self.properties, today);
            self.recomputations += 1;
            debug!(
                property = %self.property_id,
                events = events.len(),
                "Recomputed calendar events"
            );
            self.memo = Some(Memo {
                revision: self.revision,
                today,
                events,
            });
        }

        self.memo.as_ref().map(|m| m.events.as_slice())
    }

    /// How many times the events have been rebuilt.
    #[must_use]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
