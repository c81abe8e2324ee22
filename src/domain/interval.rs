//! Day-granular date ranges.

use chrono::NaiveDate;

/// A day-precision date range with `start <= end`.
///
/// Containment is inclusive on both ends. [`DateInterval::nights`] walks the
/// half-open range `[start, end)`, which is how stays are billed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateInterval {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval {
    /// Create an interval, swapping the bounds if they arrive reversed.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self { start: end, end: start }
        }
    }

    /// A single-day interval.
    #[must_use]
    pub fn day(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls within `[start, end]`.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether the two closed intervals share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &DateInterval) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// The days shared with `other`, if any.
    #[must_use]
    pub fn intersection(&self, other: &DateInterval) -> Option<DateInterval> {
        self.overlaps(other).then(|| DateInterval {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Each night in `[start, end)`.
    pub fn nights(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d < end)
    }

    /// Each day in `[start, end]`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
