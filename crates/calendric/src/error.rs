//! Error types for configuration, format compilation and parsing.

use thiserror::Error;

/// Error constructing a converter or codec from malformed configuration.
///
/// Configuration is checked once at construction, never per call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("time scheme requires at least one place-value range")]
    EmptyRanges,

    #[error("place-value range at position {index} must be positive, got {range}")]
    InvalidRange { index: usize, range: i64 },

    #[error("place-value ranges overflow when multiplied together")]
    RangeProductOverflow,

    #[error("day length must be positive, got {day_length}")]
    InvalidDayLength { day_length: i64 },

    #[error("day length {day_length}s does not fit in microseconds")]
    DayLengthOverflow { day_length: i64 },
}

/// Error compiling a format string into a matcher.
#[derive(Debug, Clone, Error)]
pub enum FormatError {
    #[error("sub-format expansion of '{symbol}' exceeded {max} levels")]
    RecursionLimit { symbol: char, max: usize },

    #[error("assembled branch pattern failed to compile: {0}")]
    Pattern(#[from] regex::Error),
}

/// Error parsing an input string against a compiled format.
///
/// A failed parse is recoverable: the caller decides whether to surface it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input {input:?} matched none of the {branches} format branch(es)")]
    NoMatch { input: String, branches: usize },
}
