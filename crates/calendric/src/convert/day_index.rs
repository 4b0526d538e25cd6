//! Whole-day facet: remaining seconds to and from a signed era day index.

use crate::convert::time_of_day::DEFAULT_DAY_LENGTH;
use crate::convert::{Conversion, FacetConverter};
use crate::error::ConfigError;
use crate::model::Representation;

/// Converts the whole-day part of the accumulator into a signed count of
/// days since the epoch.
///
/// Runs after [`TimeOfDay`](crate::convert::TimeOfDay) has consumed the
/// sub-day remainder, so the seconds it sees are an exact multiple of the
/// day length; floor division keeps pre-epoch instants on the correct day.
#[derive(Debug, Clone)]
pub struct DayIndex {
    day_length: i64,
}

impl DayIndex {
    /// Creates a converter for the given day length in seconds.
    pub fn new(day_length: i64) -> Result<Self, ConfigError> {
        if day_length <= 0 {
            return Err(ConfigError::InvalidDayLength { day_length });
        }
        Ok(Self { day_length })
    }

    /// The configured day length in seconds.
    pub fn day_length(&self) -> i64 {
        self.day_length
    }
}

impl Default for DayIndex {
    fn default() -> Self {
        Self {
            day_length: DEFAULT_DAY_LENGTH,
        }
    }
}

impl<R: Representation> FacetConverter<R> for DayIndex {
    fn from_epoch(&self, conversion: &mut Conversion<R>) {
        if !conversion.to().supports_day_index() {
            return;
        }

        let days = conversion.seconds().div_euclid(self.day_length);
        conversion.set_seconds(conversion.seconds() - days * self.day_length);
        let to = conversion.to().clone().with_day_index(days);
        conversion.set_to(to);
    }

    fn to_epoch(&self, conversion: &mut Conversion<R>) {
        let Some(days) = conversion.to().day_index() else {
            return;
        };
        conversion.set_seconds(conversion.seconds() + days * self.day_length);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Epoch, SolarDate};

    #[test]
    fn test_from_epoch_consumes_whole_days() {
        let converter = DayIndex::default();
        let source = SolarDate::at(Epoch::new(19_797 * 86_400, 0));
        let mut conversion = Conversion::new(source.clone(), source);

        FacetConverter::<SolarDate>::from_epoch(&converter, &mut conversion);
        assert_eq!(conversion.seconds(), 0);
        assert_eq!(conversion.to().day_index(), Some(19_797));
    }

    #[test]
    fn test_negative_day_index() {
        let converter = DayIndex::default();
        // Half a day before the epoch.
        let source = SolarDate::at(Epoch::new(-43_200, 0));
        let mut conversion = Conversion::new(source.clone(), source);

        FacetConverter::<SolarDate>::from_epoch(&converter, &mut conversion);
        assert_eq!(conversion.to().day_index(), Some(-1));
        assert_eq!(conversion.seconds(), 43_200);
    }

    #[test]
    fn test_to_epoch_adds_days_back() {
        let converter = DayIndex::default();
        let date = SolarDate::default().with_day_index(-3);
        let mut conversion = Conversion::accumulating(date);

        FacetConverter::<SolarDate>::to_epoch(&converter, &mut conversion);
        assert_eq!(conversion.seconds(), -3 * 86_400);
    }

    #[test]
    fn test_rejects_bad_day_length() {
        assert!(matches!(
            DayIndex::new(-60),
            Err(ConfigError::InvalidDayLength { day_length: -60 })
        ));
    }
}
