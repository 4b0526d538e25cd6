//! Canonical instants and date representations.
//!
//! Representations are immutable value objects: every "set" is a `with_*`
//! transformation returning a new instance. Facet capabilities are exposed
//! as runtime probes with skip-by-default implementations, so one converter
//! chain serves heterogeneous representation types and simply no-ops on
//! facets a representation does not carry.

use crate::model::Time;

/// Number of microseconds in one second.
pub(crate) const MICROS_PER_SECOND: i64 = 1_000_000;

/// Canonical instant: whole seconds since the epoch plus a microsecond
/// fraction.
///
/// The normalized form keeps `micros` in `[0, 1_000_000)`; instants before
/// the epoch carry negative `seconds` with a non-negative fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Epoch {
    pub seconds: i64,
    pub micros: i64,
}

impl Epoch {
    /// Creates an instant from seconds and a microsecond fraction.
    pub fn new(seconds: i64, micros: i64) -> Self {
        Self { seconds, micros }
    }

    /// Carries overflow so the microsecond fraction lies in `[0, 1_000_000)`.
    pub fn normalized(self) -> Self {
        Self {
            seconds: self.seconds + self.micros.div_euclid(MICROS_PER_SECOND),
            micros: self.micros.rem_euclid(MICROS_PER_SECOND),
        }
    }
}

/// Ordered (month, day) pair, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateParts {
    pub month0: i64,
    pub day0: i64,
}

impl DateParts {
    /// Creates a (month, day) pair from zero-based indices.
    pub fn new(month0: i64, day0: i64) -> Self {
        Self { month0, day0 }
    }
}

/// A date/time representation convertible to and from epoch time.
///
/// The facet accessors are capability probes: a representation that carries
/// a facet overrides the matching `supports_*`/accessor/`with_*` trio, and
/// the defaults signal "unsupported" so facet converters skip it without
/// side effects.
pub trait Representation: Clone {
    /// The representation's canonical instant.
    fn epoch(&self) -> Epoch;

    /// Returns a copy carrying the given instant.
    fn with_epoch(self, epoch: Epoch) -> Self;

    /// Whether this representation carries a time-of-day facet.
    fn supports_time_of_day(&self) -> bool {
        false
    }

    /// The time-of-day value, when supported and present.
    fn time_of_day(&self) -> Option<&Time> {
        None
    }

    /// Returns a copy carrying the given time of day.
    fn with_time_of_day(self, _time: Time) -> Self
    where
        Self: Sized,
    {
        self
    }

    /// Whether this representation carries an era day index facet.
    fn supports_day_index(&self) -> bool {
        false
    }

    /// Signed count of days since the epoch, when supported and present.
    fn day_index(&self) -> Option<i64> {
        None
    }

    /// Returns a copy carrying the given era day index.
    fn with_day_index(self, _index: i64) -> Self
    where
        Self: Sized,
    {
        self
    }

    /// Whether this representation carries a fragmented-date facet.
    fn supports_date_parts(&self) -> bool {
        false
    }

    /// The (month, day) pair, when supported and present.
    fn date_parts(&self) -> Option<DateParts> {
        None
    }

    /// The calendar year, when supported and present.
    fn year(&self) -> Option<i64> {
        None
    }

    /// Zero-based day of year, when supported and present.
    fn day_of_year(&self) -> Option<i64> {
        None
    }

    /// Returns a copy carrying the given fragmentation.
    fn with_fragments(self, _year: i64, _day_of_year: i64, _parts: DateParts) -> Self
    where
        Self: Sized,
    {
        self
    }
}

/// Render-side view of a fragmented calendar date.
///
/// Accessors return `None` when the underlying representation does not
/// carry the field, which degrades the affected symbols to literal text.
/// The era day index is anchored so that day 0 falls on a Thursday.
pub trait FragmentedDate {
    /// Zero-based (month, day) pair.
    fn date_parts(&self) -> Option<DateParts>;

    /// Zero-based day of year.
    fn day_of_year_index(&self) -> Option<i64>;

    /// Signed count of days since the epoch.
    fn era_day_index(&self) -> Option<i64>;

    /// Calendar year.
    fn year(&self) -> Option<i64>;

    /// Time of day, for representations that carry one.
    fn time_of_day(&self) -> Option<&Time> {
        None
    }
}

/// Concrete representation carrying every facet the standard chain
/// produces: epoch time, a mixed-radix time of day, the era day index and
/// the Gregorian fragmentation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SolarDate {
    epoch: Epoch,
    time: Option<Time>,
    day_index: Option<i64>,
    year: Option<i64>,
    day_of_year: Option<i64>,
    parts: Option<DateParts>,
}

impl SolarDate {
    /// Creates an empty representation anchored at the given instant.
    pub fn at(epoch: Epoch) -> Self {
        Self {
            epoch,
            ..Self::default()
        }
    }
}

impl Representation for SolarDate {
    fn epoch(&self) -> Epoch {
        self.epoch
    }

    fn with_epoch(mut self, epoch: Epoch) -> Self {
        self.epoch = epoch;
        self
    }

    fn supports_time_of_day(&self) -> bool {
        true
    }

    fn time_of_day(&self) -> Option<&Time> {
        self.time.as_ref()
    }

    fn with_time_of_day(mut self, time: Time) -> Self {
        self.time = Some(time);
        self
    }

    fn supports_day_index(&self) -> bool {
        true
    }

    fn day_index(&self) -> Option<i64> {
        self.day_index
    }

    fn with_day_index(mut self, index: i64) -> Self {
        self.day_index = Some(index);
        self
    }

    fn supports_date_parts(&self) -> bool {
        true
    }

    fn date_parts(&self) -> Option<DateParts> {
        self.parts
    }

    fn year(&self) -> Option<i64> {
        self.year
    }

    fn day_of_year(&self) -> Option<i64> {
        self.day_of_year
    }

    fn with_fragments(mut self, year: i64, day_of_year: i64, parts: DateParts) -> Self {
        self.year = Some(year);
        self.day_of_year = Some(day_of_year);
        self.parts = Some(parts);
        self
    }
}

impl FragmentedDate for SolarDate {
    fn date_parts(&self) -> Option<DateParts> {
        self.parts
    }

    fn day_of_year_index(&self) -> Option<i64> {
        self.day_of_year
    }

    fn era_day_index(&self) -> Option<i64> {
        self.day_index
    }

    fn year(&self) -> Option<i64> {
        self.year
    }

    fn time_of_day(&self) -> Option<&Time> {
        self.time.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_normalized() {
        assert_eq!(Epoch::new(10, 2_500_000).normalized(), Epoch::new(12, 500_000));
        assert_eq!(Epoch::new(0, -1).normalized(), Epoch::new(-1, 999_999));
        assert_eq!(Epoch::new(5, 0).normalized(), Epoch::new(5, 0));
    }

    #[test]
    fn test_with_transformations_return_new_instances() {
        let base = SolarDate::at(Epoch::new(42, 0));
        let with_index = base.clone().with_day_index(3);
        assert_eq!(Representation::day_index(&base), None);
        assert_eq!(Representation::day_index(&with_index), Some(3));
        assert_eq!(with_index.epoch(), Epoch::new(42, 0));
    }

    #[test]
    fn test_fragmented_view() {
        let date = SolarDate::default().with_fragments(2024, 74, DateParts::new(2, 14));
        assert_eq!(FragmentedDate::year(&date), Some(2024));
        assert_eq!(FragmentedDate::date_parts(&date).map(|p| p.month0), Some(2));
        assert_eq!(FragmentedDate::era_day_index(&date), None);
    }
}
