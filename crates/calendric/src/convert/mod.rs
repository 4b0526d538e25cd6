//! Conversion accumulator and facet converter chain.
//!
//! A conversion threads a mutable transfer record — the remaining (seconds,
//! microseconds) pair plus the representation under construction — through
//! an ordered chain of facet converters. Each converter handles one
//! independently convertible component of the representation (time of day,
//! era day index, calendar fragmentation) and communicates with the others
//! only through the shared accumulator.

pub mod day_index;
pub mod gregorian;
pub mod time_of_day;

pub use day_index::DayIndex;
pub use gregorian::Gregorian;
pub use time_of_day::TimeOfDay;

use crate::model::{Epoch, Representation, SolarDate};
use crate::model::date::MICROS_PER_SECOND;

/// Mutable transfer record for one conversion.
///
/// Owns the representation being built (`to`) for the duration of the call;
/// `from` is the read-only source. Facet converters may read and rewrite
/// the accumulator fields freely but must leave the microsecond remainder
/// non-negative before returning control.
#[derive(Debug, Clone)]
pub struct Conversion<R> {
    from: R,
    to: R,
    seconds: i64,
    micros: i64,
}

impl<R: Representation> Conversion<R> {
    /// Seeds the accumulator from the source representation's instant.
    pub fn new(from: R, to: R) -> Self {
        let epoch = from.epoch();
        Self {
            from,
            to,
            seconds: epoch.seconds,
            micros: epoch.micros,
        }
    }

    /// Starts an accumulating conversion toward epoch time: the counters
    /// begin at zero and facet converters add their contributions in.
    pub fn accumulating(source: R) -> Self {
        Self {
            from: source.clone(),
            to: source,
            seconds: 0,
            micros: 0,
        }
    }

    /// The read-only source representation.
    pub fn source(&self) -> &R {
        &self.from
    }

    /// The representation under construction.
    pub fn to(&self) -> &R {
        &self.to
    }

    /// Replaces the representation under construction.
    pub fn set_to(&mut self, to: R) {
        self.to = to;
    }

    /// Remaining/accumulated whole seconds.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Sets the remaining/accumulated whole seconds.
    pub fn set_seconds(&mut self, seconds: i64) {
        self.seconds = seconds;
    }

    /// Remaining/accumulated microsecond fraction.
    pub fn micros(&self) -> i64 {
        self.micros
    }

    /// Sets the remaining/accumulated microsecond fraction.
    pub fn set_micros(&mut self, micros: i64) {
        self.micros = micros;
    }

    /// Adds a signed microsecond count, carrying whole seconds so the
    /// microsecond remainder stays in `[0, 1_000_000)`.
    pub fn add_micros(&mut self, micros: i64) {
        let total = self.micros + micros;
        self.seconds += total.div_euclid(MICROS_PER_SECOND);
        self.micros = total.rem_euclid(MICROS_PER_SECOND);
    }

    /// The accumulated instant.
    pub fn epoch(&self) -> Epoch {
        Epoch::new(self.seconds, self.micros).normalized()
    }

    /// Finishes the conversion, yielding the built representation.
    pub fn into_to(self) -> R {
        self.to
    }
}

/// One independently convertible facet of a representation.
///
/// Both operations read `conversion.to()`; a converter that finds the
/// representation does not support its capability returns immediately
/// without side effects, so heterogeneous chains skip irrelevant
/// converters rather than failing.
pub trait FacetConverter<R: Representation>: Send + Sync {
    /// Consumes part of the remaining epoch time and attaches the facet
    /// value to the representation under construction.
    fn from_epoch(&self, conversion: &mut Conversion<R>);

    /// Reads the facet value from the representation and accumulates its
    /// epoch-time contribution.
    fn to_epoch(&self, conversion: &mut Conversion<R>);
}

/// Ordered chain of facet converters.
///
/// Building a representation runs the chain in declaration order, each
/// converter consuming its share of the remainder; accumulating epoch time
/// runs it in reverse, so derived facets (calendar fragmentation) replay
/// into the primitive ones (day index, time of day) before those add their
/// seconds back.
pub struct ConverterChain<R: Representation> {
    converters: Vec<Box<dyn FacetConverter<R>>>,
}

impl<R: Representation> ConverterChain<R> {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self {
            converters: Vec::new(),
        }
    }

    /// Appends a converter to the chain.
    pub fn with(mut self, converter: impl FacetConverter<R> + 'static) -> Self {
        self.converters.push(Box::new(converter));
        self
    }

    /// Number of converters in the chain.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Returns true when the chain holds no converters.
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Converts an instant into the target representation.
    pub fn from_epoch(&self, epoch: Epoch, target: R) -> R {
        let source = target.with_epoch(epoch.normalized());
        let mut conversion = Conversion::new(source.clone(), source);
        for converter in &self.converters {
            converter.from_epoch(&mut conversion);
        }
        trace!(
            "converted epoch {}s+{}us through {} facet(s)",
            epoch.seconds,
            epoch.micros,
            self.converters.len()
        );
        conversion.into_to()
    }

    /// Accumulates a representation's facets back into an instant.
    pub fn to_epoch(&self, representation: &R) -> Epoch {
        let mut conversion = Conversion::accumulating(representation.clone());
        for converter in self.converters.iter().rev() {
            converter.to_epoch(&mut conversion);
        }
        conversion.epoch()
    }
}

impl<R: Representation> Default for ConverterChain<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterChain<SolarDate> {
    /// The standard chain: mixed-radix time of day, then whole days, then
    /// Gregorian fragmentation.
    pub fn standard() -> Self {
        Self::new()
            .with(TimeOfDay::default())
            .with(DayIndex::default())
            .with(Gregorian)
    }
}
