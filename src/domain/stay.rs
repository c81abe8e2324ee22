//! Stay price calculation with half-day adjustments.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::half;
use super::{DateInterval, Price, PricingSchedule};

/// Coarse time-of-day attached to a check-in or check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HalfDaySlot {
    Morning,
    Afternoon,
}

impl FromStr for HalfDaySlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" | "am" => Ok(Self::Morning),
            "afternoon" | "pm" => Ok(Self::Afternoon),
            other => Err(format!("unknown half-day slot '{other}' (expected morning or afternoon)")),
        }
    }
}

impl fmt::Display for HalfDaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Morning => f.write_str("morning"),
            Self::Afternoon => f.write_str("afternoon"),
        }
    }
}

/// A prospective stay as entered by a guest. Any field may still be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StayRequest {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub check_in_slot: Option<HalfDaySlot>,
    pub check_out_slot: Option<HalfDaySlot>,
}

impl StayRequest {
    #[must_use]
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in: Some(check_in),
            check_out: Some(check_out),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_check_in_slot(mut self, slot: HalfDaySlot) -> Self {
        self.check_in_slot = Some(slot);
        self
    }

    #[must_use]
    pub fn with_check_out_slot(mut self, slot: HalfDaySlot) -> Self {
        self.check_out_slot = Some(slot);
        self
    }

    /// The billable range, present only when both dates are set and ordered.
    #[must_use]
    pub fn billable_range(&self) -> Option<DateInterval> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) if check_in < check_out => {
                Some(DateInterval::new(check_in, check_out))
            }
            _ => None,
        }
    }
}

/// One billed night.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NightLine {
    pub date: NaiveDate,
    pub price: Price,
    /// Whether a seasonal rule set this price.
    pub seasonal: bool,
}

/// Itemized price of a stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StayQuote {
    pub nights: Vec<NightLine>,
    pub subtotal: Price,
    pub check_in_discount: Price,
    pub check_out_discount: Price,
    pub total: Price,
    /// Stay limits of the rule governing the first night (1/unbounded otherwise).
    pub min_nights: u32,
    pub max_nights: Option<u32>,
}

impl StayQuote {
    fn empty() -> Self {
        Self {
            nights: Vec::new(),
            subtotal: Decimal::ZERO,
            check_in_discount: Decimal::ZERO,
            check_out_discount: Decimal::ZERO,
            total: Decimal::ZERO,
            min_nights: 1,
            max_nights: None,
        }
    }

    #[must_use]
    pub fn night_count(&self) -> usize {
        self.nights.len()
    }

    /// Whether the stay length respects the governing rule's limits.
    #[must_use]
    pub fn satisfies_stay_limits(&self) -> bool {
        let n = u32::try_from(self.nights.len()).unwrap_or(u32::MAX);
        n >= self.min_nights && self.max_nights.map_or(true, |max| n <= max)
    }
}

/// Sums nightly prices over a stay using a property's [`PricingSchedule`].
#[derive(Debug, Clone, Copy)]
pub struct StayPriceCalculator<'a> {
    schedule: &'a PricingSchedule,
}

impl<'a> StayPriceCalculator<'a> {
    #[must_use]
    pub fn new(schedule: &'a PricingSchedule) -> Self {
        Self { schedule }
    }

    /// Total price of the stay, or zero when the dates are missing or unordered.
    #[must_use]
    pub fn total(&self, request: &StayRequest) -> Price {
        self.quote(request).total
    }

    /// Itemized price of the stay.
    ///
    /// An afternoon check-in takes half of the first night off; a morning
    /// check-out takes half of the last night off. Both may apply, including
    /// to the same night on a one-night stay. No rounding is performed.
    #[must_use]
    pub fn quote(&self, request: &StayRequest) -> StayQuote {
        let Some(range) = request.billable_range() else {
            return StayQuote::empty();
        };

        let nights: Vec<NightLine> = range
            .nights()
            .map(|date| match self.schedule.rule_for(date) {
                Some(rule) => NightLine {
                    date,
                    price: rule.price_per_night,
                    seasonal: true,
                },
                None => NightLine {
                    date,
                    price: self.schedule.base_price(),
                    seasonal: false,
                },
            })
            .collect();

        let subtotal: Price = nights.iter().map(|n| n.price).sum();

        let check_in_discount = match (request.check_in_slot, nights.first()) {
            (Some(HalfDaySlot::Afternoon), Some(first)) => half(first.price),
            _ => Decimal::ZERO,
        };
        let check_out_discount = match (request.check_out_slot, nights.last()) {
            (Some(HalfDaySlot::Morning), Some(last)) => half(last.price),
            _ => Decimal::ZERO,
        };

        let (min_nights, max_nights) = self
            .schedule
            .rule_for(range.start())
            .map_or((1, None), |rule| (rule.min_nights.max(1), rule.max_nights));

        StayQuote {
            total: subtotal - check_in_discount - check_out_discount,
            nights,
            subtotal,
            check_in_discount,
            check_out_discount,
            min_nights,
            max_nights,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PricingRule, PropertyId, RecordId};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn base_schedule() -> PricingSchedule {
        PricingSchedule::new(dec!(100), Vec::new())
    }

    #[test]
    fn three_base_nights() {
        let schedule = base_schedule();
        let calc = StayPriceCalculator::new(&schedule);
        let request = StayRequest::new(date(2024, 1, 1), date(2024, 1, 4));
        assert_eq!(calc.total(&request), dec!(300));
    }

    #[test]
    fn morning_checkout_halves_last_night() {
        let schedule = base_schedule();
        let calc = StayPriceCalculator::new(&schedule);
        let request = StayRequest::new(date(2024, 1, 1), date(2024, 1, 4))
            .with_check_out_slot(HalfDaySlot::Morning);
        assert_eq!(calc.total(&request), dec!(250));
    }

    #[test]
    fn both_half_days_apply_independently() {
        let schedule = base_schedule();
        let calc = StayPriceCalculator::new(&schedule);
        let request = StayRequest::new(date(2024, 1, 1), date(2024, 1, 4))
            .with_check_in_slot(HalfDaySlot::Afternoon)
            .with_check_out_slot(HalfDaySlot::Morning);
        assert_eq!(calc.total(&request), dec!(200));
    }

    #[test]
    fn morning_checkin_and_afternoon_checkout_are_full_price() {
        let schedule = base_schedule();
        let calc = StayPriceCalculator::new(&schedule);
        let request = StayRequest::new(date(2024, 1, 1), date(2024, 1, 4))
            .with_check_in_slot(HalfDaySlot::Morning)
            .with_check_out_slot(HalfDaySlot::Afternoon);
        assert_eq!(calc.total(&request), dec!(300));
    }

    #[test]
    fn invalid_ranges_cost_nothing() {
        let schedule = base_schedule();
        let calc = StayPriceCalculator::new(&schedule);

        let missing = StayRequest {
            check_out: Some(date(2024, 1, 4)),
            ..StayRequest::default()
        };
        assert_eq!(calc.total(&missing), Decimal::ZERO);

        let same_day = StayRequest::new(date(2024, 1, 4), date(2024, 1, 4));
        assert_eq!(calc.total(&same_day), Decimal::ZERO);

        let reversed = StayRequest::new(date(2024, 1, 4), date(2024, 1, 1))
            .with_check_in_slot(HalfDaySlot::Afternoon);
        assert_eq!(calc.total(&reversed), Decimal::ZERO);
    }

    #[test]
    fn discounts_use_boundary_night_prices() {
        let rule = PricingRule {
            id: RecordId::from(1),
            property_id: Some(PropertyId::from(1)),
            start_date: Some(date(2024, 7, 3)),
            end_date: Some(date(2024, 7, 31)),
            price_per_night: dec!(180),
            min_nights: 3,
            max_nights: Some(14),
        };
        let schedule = PricingSchedule::new(dec!(100), vec![rule]);
        let calc = StayPriceCalculator::new(&schedule);
        // Nights: 07-01 (100), 07-02 (100), 07-03 (180)
        let request = StayRequest::new(date(2024, 7, 1), date(2024, 7, 4))
            .with_check_in_slot(HalfDaySlot::Afternoon)
            .with_check_out_slot(HalfDaySlot::Morning);
        let quote = calc.quote(&request);

        assert_eq!(quote.subtotal, dec!(380));
        assert_eq!(quote.check_in_discount, dec!(50));
        assert_eq!(quote.check_out_discount, dec!(90));
        assert_eq!(quote.total, dec!(240));
        assert!(!quote.nights[0].seasonal);
        assert!(quote.nights[2].seasonal);
    }

    #[test]
    fn stay_limits_come_from_first_night_rule() {
        let rule = PricingRule {
            id: RecordId::from(1),
            property_id: None,
            start_date: Some(date(2024, 7, 1)),
            end_date: Some(date(2024, 7, 31)),
            price_per_night: dec!(150),
            min_nights: 5,
            max_nights: None,
        };
        let schedule = PricingSchedule::new(dec!(100), vec![rule]);
        let calc = StayPriceCalculator::new(&schedule);

        let short = calc.quote(&StayRequest::new(date(2024, 7, 1), date(2024, 7, 3)));
        assert_eq!(short.min_nights, 5);
        assert!(!short.satisfies_stay_limits());

        let long = calc.quote(&StayRequest::new(date(2024, 7, 1), date(2024, 7, 8)));
        assert!(long.satisfies_stay_limits());
        assert_eq!(long.total, dec!(1050));
    }

    #[test]
    fn half_day_total_may_be_fractional() {
        let schedule = PricingSchedule::new(dec!(99.99), Vec::new());
        let calc = StayPriceCalculator::new(&schedule);
        let request = StayRequest::new(date(2024, 1, 1), date(2024, 1, 2))
            .with_check_in_slot(HalfDaySlot::Afternoon);
        assert_eq!(calc.total(&request), dec!(49.995));
    }

    #[test]
    fn slot_parsing() {
        assert_eq!("Morning".parse::<HalfDaySlot>(), Ok(HalfDaySlot::Morning));
        assert_eq!("pm".parse::<HalfDaySlot>(), Ok(HalfDaySlot::Afternoon));
        assert!("evening".parse::<HalfDaySlot>().is_err());
    }
}
