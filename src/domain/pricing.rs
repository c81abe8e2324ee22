//! Seasonal price resolution.
//!
//! A [`PricingSchedule`] answers "what does one night cost on this date?".
//! Rules are scanned in list order and the first rule whose range contains
//! the date wins; with no match the property's base price applies.
//!
//! Overlapping rules are not rejected. The first-match tie-break is kept for
//! compatibility with existing rule lists, and [`PricingSchedule::overlaps`]
//! reports every intersecting pair so callers can surface them.

use chrono::NaiveDate;
use tracing::warn;

use super::{Price, PricingRule, Property, PropertyScoped, RecordId};

/// Two rules whose date ranges share at least one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOverlap {
    /// The rule that wins for the shared days.
    pub winner: RecordId,
    pub shadowed: RecordId,
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
}

/// Base price plus the ordered seasonal rules of one property.
#[derive(Debug, Clone)]
pub struct PricingSchedule {
    base_price: Price,
    rules: Vec<PricingRule>,
}

impl PricingSchedule {
    /// Build a schedule from rules already scoped to one property.
    #[must_use]
    pub fn new(base_price: Price, rules: Vec<PricingRule>) -> Self {
        let schedule = Self { base_price, rules };
        let overlaps = schedule.overlaps();
        if !overlaps.is_empty() {
            warn!(
                count = overlaps.len(),
                "Overlapping pricing rules; earlier rules take precedence"
            );
        }
        schedule
    }

    /// Build the schedule for `property`, keeping only rules that belong to it.
    ///
    /// Rules without a property reference are kept, since they can only have
    /// come from a per-property fetch.
    #[must_use]
    pub fn for_property(property: &Property, rules: &[PricingRule]) -> Self {
        let scoped = rules
            .iter()
            .filter(|r| r.belongs_to(&property.id))
            .cloned()
            .collect();
        Self::new(property.base_price_per_night, scoped)
    }

    #[must_use]
    pub fn base_price(&self) -> Price {
        self.base_price
    }

    #[must_use]
    pub fn rules(&self) -> &[PricingRule] {
        &self.rules
    }

    /// The rule governing `date`, if any.
    #[must_use]
    pub fn rule_for(&self, date: NaiveDate) -> Option<&PricingRule> {
        self.rules.iter().find(|rule| rule.applies_to(date))
    }

    /// Nightly price for `date`.
    #[must_use]
    pub fn resolve(&self, date: NaiveDate) -> Price {
        self.rule_for(date)
            .map_or(self.base_price, |rule| rule.price_per_night)
    }

    /// Every pair of dated rules whose ranges intersect, in list order.
    #[must_use]
    pub fn overlaps(&self) -> Vec<RuleOverlap> {
        let dated: Vec<_> = self
            .rules
            .iter()
            .filter_map(|rule| rule.interval().map(|range| (rule, range)))
            .collect();

        let mut overlaps = Vec::new();
        for (i, (winner, a)) in dated.iter().enumerate() {
            for (shadowed, b) in &dated[i + 1..] {
                if a.overlaps(b) {
                    overlaps.push(RuleOverlap {
                        winner: winner.id.clone(),
                        shadowed: shadowed.id.clone(),
                        first_day: a.start().max(b.start()),
                        last_day: a.end().min(b.end()),
                    });
                }
            }
        }
        overlaps
    }
}
