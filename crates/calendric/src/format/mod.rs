//! The format language: tokenizing, compiling, parsing and rendering.
//!
//! A format string is a sequence of one-letter symbols, literal text, an
//! alternation separator (`|`) splitting it into fallback branches, and a
//! backslash escape forcing a symbol character to literal. The parse side
//! compiles a format into an ordered branch matcher; the render side walks
//! the same token stream and resolves each symbol to its textual value.

pub mod compiler;
pub mod lexer;
pub mod locale;
pub mod render;
mod symbol;

pub use compiler::{CompiledFormat, ParsedFields, compile};
pub use lexer::tokenize;
pub use locale::{English, Locale};
pub use render::{
    DateRenderer, Formatter, SymbolRenderer, TimeRenderer, iso_day_of_week, iso_week_number,
    iso_week_year,
};
