//! Mixed-radix time-of-day codec and its facet converter.

use crate::convert::{Conversion, FacetConverter};
use crate::error::ConfigError;
use crate::model::date::MICROS_PER_SECOND;
use crate::model::{Representation, Time};

/// Default place-value ranges: hour/minute/second/millisecond/microsecond.
pub const DEFAULT_RANGES: [i64; 5] = [24, 60, 60, 1000, 1000];

/// Default day length in seconds.
pub const DEFAULT_DAY_LENGTH: i64 = 86_400;

/// Codec between a signed microsecond duration and a mixed-radix [`Time`].
///
/// The place-value list is not hard-coded to 24/60/60: any ordered list of
/// positive ranges works, and when the radix product differs from the day
/// length in microseconds the codec rescales between the two schemes. As a
/// facet converter its capability is "has a time-of-day field".
#[derive(Debug, Clone)]
pub struct TimeOfDay {
    ranges: Vec<i64>,
    day_length: i64,
    day_length_micros: i64,
    radix_product: i64,
}

impl TimeOfDay {
    /// Creates a codec for the given place-value ranges and day length in
    /// seconds.
    ///
    /// Fails on an empty range list, a non-positive range or day length,
    /// or a scheme too large to express in microseconds.
    pub fn new(ranges: Vec<i64>, day_length: i64) -> Result<Self, ConfigError> {
        if ranges.is_empty() {
            return Err(ConfigError::EmptyRanges);
        }
        for (index, &range) in ranges.iter().enumerate() {
            if range <= 0 {
                return Err(ConfigError::InvalidRange { index, range });
            }
        }
        if day_length <= 0 {
            return Err(ConfigError::InvalidDayLength { day_length });
        }

        let radix_product = ranges
            .iter()
            .try_fold(1i64, |acc, &range| acc.checked_mul(range))
            .ok_or(ConfigError::RangeProductOverflow)?;
        let day_length_micros = day_length
            .checked_mul(MICROS_PER_SECOND)
            .ok_or(ConfigError::DayLengthOverflow { day_length })?;

        Ok(Self {
            ranges,
            day_length,
            day_length_micros,
            radix_product,
        })
    }

    /// The configured place-value ranges.
    pub fn ranges(&self) -> &[i64] {
        &self.ranges
    }

    /// The configured day length in seconds.
    pub fn day_length(&self) -> i64 {
        self.day_length
    }

    /// Decomposes a signed microsecond duration into a [`Time`].
    ///
    /// Negative durations decompose with floor-division semantics, so the
    /// digits always land in `[0, range)` and the deficit is carried by the
    /// discarded high-order quotient.
    pub fn decode(&self, micros: i64) -> Time {
        // Dividing microseconds by a seconds value is intentional: the
        // ratio mirrors what encode's whole-cycle fallback multiplies back.
        let ratio = micros.div_euclid(self.day_length);

        let mut rest = micros;
        if self.day_length_micros != self.radix_product {
            rest = rescale(rest, self.radix_product, self.day_length_micros);
        }

        let mut digits = vec![0i64; self.ranges.len()];
        for index in (0..self.ranges.len()).rev() {
            digits[index] = rest.rem_euclid(self.ranges[index]);
            rest = rest.div_euclid(self.ranges[index]);
        }

        Time::new(digits, self.ranges.clone()).with_ratio(ratio)
    }

    /// Composes a [`Time`] back into its value in the lowest unit.
    ///
    /// A time with no meaningful digits falls back to its whole-cycle
    /// ratio, bypassing the digit math entirely.
    pub fn encode(&self, time: &Time) -> i64 {
        if !time.is_meaningful() {
            if let Some(ratio) = time.ratio() {
                return ratio * self.day_length;
            }
        }

        let mut acc = 0i64;
        for (index, &range) in self.ranges.iter().enumerate() {
            acc = acc * range + time.get(index);
        }

        if self.day_length_micros != self.radix_product {
            acc = rescale(acc, self.day_length_micros, self.radix_product);
        }

        acc
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        // The default scheme is statically valid, so construct directly.
        Self {
            ranges: DEFAULT_RANGES.to_vec(),
            day_length: DEFAULT_DAY_LENGTH,
            day_length_micros: DEFAULT_DAY_LENGTH * MICROS_PER_SECOND,
            radix_product: 24 * 60 * 60 * 1000 * 1000,
        }
    }
}

/// Floor-scales `value` by `numerator / denominator` through a 128-bit
/// intermediate.
fn rescale(value: i64, numerator: i64, denominator: i64) -> i64 {
    ((value as i128 * numerator as i128).div_euclid(denominator as i128)) as i64
}

impl<R: Representation> FacetConverter<R> for TimeOfDay {
    fn from_epoch(&self, conversion: &mut Conversion<R>) {
        if !conversion.to().supports_time_of_day() {
            return;
        }

        let seconds = conversion.seconds();
        let consumed = seconds.rem_euclid(self.day_length);
        let micros = conversion.micros() + consumed * MICROS_PER_SECOND;

        let time = self.decode(micros);

        conversion.set_seconds(seconds - consumed);
        conversion.set_micros(0);
        let to = conversion.to().clone().with_time_of_day(time);
        conversion.set_to(to);
    }

    fn to_epoch(&self, conversion: &mut Conversion<R>) {
        let Some(time) = conversion.to().time_of_day() else {
            return;
        };

        let time = time.clone().with_ranges(&self.ranges);
        let micros = self.encode(&time);

        let to = conversion.to().clone().with_time_of_day(time);
        conversion.set_to(to);
        conversion.add_micros(micros);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_decode_example() {
        // 3661.5 seconds after midnight: 1h 1m 1s 500ms.
        let codec = TimeOfDay::default();
        let time = codec.decode(3_661_500_000);
        assert_eq!(time.digits(), &[1, 1, 1, 500, 0]);
    }

    #[test]
    fn test_decode_negative_uses_floor_semantics() {
        let codec = TimeOfDay::default();
        let time = codec.decode(-1);
        assert_eq!(time.digits(), &[23, 59, 59, 999, 999]);
        assert_eq!(time.ratio(), Some(-1));
    }

    #[test]
    fn test_ratio_short_circuit() {
        let codec = TimeOfDay::default();
        let time = Time::new(vec![0, 0, 0, 0, 0], DEFAULT_RANGES.to_vec()).with_ratio(3);
        assert_eq!(codec.encode(&time), 3 * DEFAULT_DAY_LENGTH);

        // Independent of the configured radix list.
        let codec = TimeOfDay::new(vec![10, 10], DEFAULT_DAY_LENGTH).unwrap();
        let time = Time::new(vec![0, 0], vec![10, 10]).with_ratio(3);
        assert_eq!(codec.encode(&time), 3 * DEFAULT_DAY_LENGTH);
    }

    #[test]
    fn test_meaningful_digits_beat_ratio() {
        let codec = TimeOfDay::default();
        let time = Time::new(vec![0, 0, 1, 0, 0], DEFAULT_RANGES.to_vec()).with_ratio(99);
        assert_eq!(codec.encode(&time), 1_000_000);
    }

    #[test]
    fn test_custom_radix_rescaling() {
        // Decimal time: 10 "hours" of 100 "minutes", day length unchanged.
        let codec = TimeOfDay::new(vec![10, 100], 86_400).unwrap();
        // Half a day lands exactly on 5:00.
        let time = codec.decode(43_200_000_000);
        assert_eq!(time.digits(), &[5, 0]);
        assert_eq!(codec.encode(&time), 43_200_000_000);
    }

    #[test]
    fn test_config_validation() {
        assert!(matches!(
            TimeOfDay::new(vec![], 86_400),
            Err(ConfigError::EmptyRanges)
        ));
        assert!(matches!(
            TimeOfDay::new(vec![24, 0], 86_400),
            Err(ConfigError::InvalidRange { index: 1, range: 0 })
        ));
        assert!(matches!(
            TimeOfDay::new(vec![24], 0),
            Err(ConfigError::InvalidDayLength { day_length: 0 })
        ));
        assert!(matches!(
            TimeOfDay::new(vec![i64::MAX, 2], 86_400),
            Err(ConfigError::RangeProductOverflow)
        ));
    }

    proptest! {
        #[test]
        fn prop_roundtrip_within_day(micros in 0i64..86_400_000_000) {
            let codec = TimeOfDay::default();
            let time = codec.decode(micros);
            prop_assert_eq!(codec.encode(&time), micros);
        }

        #[test]
        fn prop_digits_in_range(micros in -200_000_000_000i64..200_000_000_000) {
            let codec = TimeOfDay::default();
            let time = codec.decode(micros);
            for (digit, range) in time.digits().iter().zip(DEFAULT_RANGES) {
                prop_assert!((0..range).contains(digit));
            }
        }

        #[test]
        fn prop_decode_encode_digits_stable(micros in 0i64..86_400_000_000) {
            let codec = TimeOfDay::default();
            let time = codec.decode(micros);
            let redecoded = codec.decode(codec.encode(&time));
            prop_assert_eq!(time.digits(), redecoded.digits());
        }
    }
}
