//! Calendar-agnostic date/time conversion, formatting and parsing.
//!
//! This crate translates between a single canonical instant (seconds plus
//! a microsecond fraction since a fixed epoch) and structured calendar
//! representations, and compiles human-readable format strings into
//! bidirectional matchers and renderers.
//!
//! # Overview
//!
//! Three pieces carry the engine:
//! - **Facet converters**: independent converters (time of day, era day
//!   index, calendar fragmentation) consume and produce a shared running
//!   total of epoch seconds and microseconds, threaded through a
//!   [`Conversion`] accumulator.
//! - **Mixed-radix time codec**: decomposes a sub-day duration into an
//!   arbitrary ordered list of place values, not hard-coded to 24/60/60.
//! - **Format compiler**: lexes a format string into symbol and literal
//!   tokens, resolves each symbol to a match fragment or a recursively
//!   compiled sub-format, and assembles an alternation-aware matcher; the
//!   render side resolves the same symbols to text.
//!
//! # Quick Start
//!
//! ```rust
//! use calendric::{ConverterChain, Epoch, Formatter, SolarDate};
//!
//! // Convert an instant into a structured date.
//! let chain = ConverterChain::standard();
//! let date = chain.from_epoch(Epoch::new(1_710_513_000, 0), SolarDate::default());
//!
//! // Render it.
//! let formatter = Formatter::new();
//! assert_eq!(formatter.format(&date, "Y-m-d H:i:s"), "2024-03-15 14:30:00");
//!
//! // Parse it back, with an alternation fallback branch.
//! let compiled = calendric::compile("Y-m-d H:i:s|Y-m-d").unwrap();
//! let fields = compiled.parse("2024-03-15 14:30:00").unwrap();
//! assert_eq!(fields.get('Y'), Some("2024"));
//! assert_eq!(fields.get('i'), Some("30"));
//!
//! // And accumulate the structured date back into an instant.
//! assert_eq!(chain.to_epoch(&date), Epoch::new(1_710_513_000, 0));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Value types (tokens, mixed-radix times, representations)
//! - [`convert`]: Conversion accumulator and facet converter chain
//! - [`format`]: Format lexing, compiling, parsing and rendering
//! - [`error`]: Error types
//! - [`limits`]: Hard limits for format compilation
//!
//! # Scope
//!
//! The engine performs no timezone database lookups, does not validate
//! calendar legality (day 31 of a 30-day month parses fine), and does not
//! cache compiled formats: every compilation and conversion is a pure,
//! stateless-per-call operation, so instances are safely shared across
//! threads.

#[macro_use]
mod logging;

pub mod convert;
pub mod error;
pub mod format;
pub mod limits;
pub mod model;

// Re-export commonly used types at crate root
pub use convert::{Conversion, ConverterChain, DayIndex, FacetConverter, Gregorian, TimeOfDay};
pub use error::{ConfigError, FormatError, ParseError};
pub use format::{CompiledFormat, English, Formatter, Locale, ParsedFields, SymbolRenderer, compile};
pub use model::{
    DateParts, Epoch, FormatToken, FragmentedDate, Representation, SolarDate, Time, TokenKind,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
