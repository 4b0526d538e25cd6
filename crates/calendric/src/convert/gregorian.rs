//! Gregorian fragmentation facet: era day index to and from calendar parts.

use crate::convert::{Conversion, FacetConverter};
use crate::model::{DateParts, Representation};

/// Fragments the era day index into proleptic Gregorian calendar parts
/// (year, zero-based month/day, zero-based day of year) and back.
///
/// Consumes no accumulator time: it derives its fields from the day index
/// attached by [`DayIndex`](crate::convert::DayIndex), and replays them
/// into a day index on the way back. When a representation carries both a
/// day index and date parts, the parts win.
#[derive(Debug, Clone, Copy, Default)]
pub struct Gregorian;

impl<R: Representation> FacetConverter<R> for Gregorian {
    fn from_epoch(&self, conversion: &mut Conversion<R>) {
        if !conversion.to().supports_date_parts() {
            return;
        }
        let Some(day_index) = conversion.to().day_index() else {
            return;
        };

        let (year, month, day) = civil_from_days(day_index);
        let day_of_year = day_index - days_from_civil(year, 1, 1);
        let parts = DateParts::new(month - 1, day - 1);

        let to = conversion.to().clone().with_fragments(year, day_of_year, parts);
        conversion.set_to(to);
    }

    fn to_epoch(&self, conversion: &mut Conversion<R>) {
        let to = conversion.to();
        let (Some(year), Some(parts)) = (to.year(), to.date_parts()) else {
            return;
        };

        let day_index = days_from_civil(year, parts.month0 + 1, parts.day0 + 1);
        let to = conversion.to().clone().with_day_index(day_index);
        conversion.set_to(to);
    }
}

/// Calculates days since the epoch for a given date.
///
/// This is based on the algorithm from Howard Hinnant.
pub(crate) fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let m = if month <= 2 { month + 9 } else { month - 3 };

    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // year of era
    let doy = (153 * m + 2) / 5 + day - 1; // day of year
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // day of era

    era * 146_097 + doe - 719_468
}

/// Converts days since the epoch to (year, month, day), months and days
/// one-based.
///
/// Howard Hinnant's algorithm in reverse.
pub(crate) fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // day of era
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // year of era
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // day of year
    let mp = (5 * doy + 2) / 153; // month index
    let d = doy - (153 * mp + 2) / 5 + 1; // day
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // month

    let year = if m <= 2 { y + 1 } else { y };
    (year, m, d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SolarDate;

    #[test]
    fn test_civil_anchors() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(days_from_civil(2024, 3, 15), 19_797);
        assert_eq!(civil_from_days(19_797), (2024, 3, 15));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
    }

    #[test]
    fn test_civil_roundtrip_over_leap_boundaries() {
        for days in [-719_468, -141, -1, 0, 59, 60, 11_016, 19_797, 2_932_896] {
            let (year, month, day) = civil_from_days(days);
            assert_eq!(days_from_civil(year, month, day), days, "failed for {}", days);
        }
        // 2000-02-29 exists, 1900-02-29 does not.
        assert_eq!(civil_from_days(days_from_civil(2000, 2, 29)), (2000, 2, 29));
        assert_eq!(civil_from_days(days_from_civil(1900, 3, 1)), (1900, 3, 1));
    }

    #[test]
    fn test_fragments_from_day_index() {
        let converter = Gregorian;
        let date = SolarDate::default().with_day_index(19_797);
        let mut conversion = Conversion::accumulating(date);

        FacetConverter::<SolarDate>::from_epoch(&converter, &mut conversion);
        let to = conversion.to();
        assert_eq!(to.year(), Some(2024));
        assert_eq!(to.date_parts(), Some(DateParts::new(2, 14)));
        // 2024 is a leap year: Mar 15 is day index 74.
        assert_eq!(to.day_of_year(), Some(74));
    }

    #[test]
    fn test_parts_replay_into_day_index() {
        let converter = Gregorian;
        let date = SolarDate::default().with_fragments(1969, 364, DateParts::new(11, 30));
        let mut conversion = Conversion::accumulating(date);

        FacetConverter::<SolarDate>::to_epoch(&converter, &mut conversion);
        assert_eq!(conversion.to().day_index(), Some(-1));
        // Fragmentation itself consumes no accumulator time.
        assert_eq!(conversion.seconds(), 0);
    }

    #[test]
    fn test_skips_without_day_index() {
        let converter = Gregorian;
        let date = SolarDate::default();
        let mut conversion = Conversion::accumulating(date.clone());

        FacetConverter::<SolarDate>::from_epoch(&converter, &mut conversion);
        assert_eq!(conversion.to(), &date);
    }
}
