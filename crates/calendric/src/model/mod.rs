//! Value types shared across the conversion and format engines.
//!
//! - Format tokens (lexical units of the format language)
//! - Mixed-radix time-of-day values
//! - Canonical instants and calendar representations

pub mod date;
pub mod time;
pub mod token;

pub use date::{DateParts, Epoch, FragmentedDate, Representation, SolarDate};
pub use time::Time;
pub use token::{FormatToken, TokenKind};
