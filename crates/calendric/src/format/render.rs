//! Render-side symbol resolution and ISO week math.
//!
//! Rendering mirrors the parse side: each symbol is offered to a chain of
//! resolvers, and a symbol no resolver claims is emitted verbatim, exactly
//! as the parse side matches it verbatim. Resolvers consume the
//! fragmented-date abstraction and never own it.

use crate::format::lexer;
use crate::format::locale::{English, Locale};
use crate::format::symbol::{self, Resolution};
use crate::limits::MAX_SUBFORMAT_DEPTH;
use crate::model::{FormatToken, FragmentedDate, TokenKind};

/// Renders one symbol's textual value.
pub trait SymbolRenderer: Send + Sync {
    /// Renders the symbol for the given date, or `None` when this resolver
    /// does not handle it (the caller then tries the next resolver and
    /// finally degrades the token to literal text).
    fn render(&self, date: &dyn FragmentedDate, token: &FormatToken) -> Option<String>;
}

// =============================================================================
// ISO-8601 week math
// =============================================================================

/// ISO-8601 day of week (1 = Monday through 7 = Sunday) for an era day
/// index.
///
/// Era day 0 is anchored to Thursday (ISO value 4); the Euclidean
/// remainder keeps pre-epoch indices inside `1..=7`.
pub fn iso_day_of_week(era_day_index: i64) -> i64 {
    (era_day_index + 3).rem_euclid(7) + 1
}

/// Offset of the date from the Monday that starts ISO week 1 of its year.
fn fixed_iso_day_index(era_day_index: i64, day_of_year: i64) -> i64 {
    let mut first_week_start = iso_day_of_week(era_day_index - day_of_year) - 1;
    if first_week_start > 3 {
        first_week_start -= 7;
    }
    day_of_year + first_week_start
}

/// ISO-8601 week number.
///
/// A date before the Monday of week 1 belongs to the previous ISO year and
/// reports week 52; 53-week previous years are not detected.
pub fn iso_week_number(era_day_index: i64, day_of_year: i64) -> i64 {
    let fixed = fixed_iso_day_index(era_day_index, day_of_year);
    if fixed < 0 { 52 } else { fixed / 7 + 1 }
}

/// ISO-8601 week-numbering year.
pub fn iso_week_year(era_day_index: i64, day_of_year: i64, year: i64) -> i64 {
    if fixed_iso_day_index(era_day_index, day_of_year) < 0 {
        year - 1
    } else {
        year
    }
}

// =============================================================================
// Resolvers
// =============================================================================

/// Resolves date symbols against a fragmented date, with names and
/// suffixes delegated to a locale.
#[derive(Debug, Clone)]
pub struct DateRenderer<L> {
    locale: L,
}

impl<L: Locale> DateRenderer<L> {
    /// Creates a date resolver over the given locale.
    pub fn new(locale: L) -> Self {
        Self { locale }
    }
}

impl<L: Locale> SymbolRenderer for DateRenderer<L> {
    fn render(&self, date: &dyn FragmentedDate, token: &FormatToken) -> Option<String> {
        let rendered = match token.symbol_char()? {
            'F' => {
                let month0 = usize::try_from(date.date_parts()?.month0).ok()?;
                self.locale.month_name(month0).to_string()
            }
            'M' => {
                let month0 = usize::try_from(date.date_parts()?.month0).ok()?;
                self.locale.month_abbr(month0).to_string()
            }
            'm' => format!("{:02}", date.date_parts()?.month0 + 1),
            'n' => (date.date_parts()?.month0 + 1).to_string(),
            // Days in month, not derivable from the fragmented view.
            't' => {
                date.date_parts()?;
                "0".to_string()
            }
            'd' => format!("{:02}", date.date_parts()?.day0 + 1),
            'j' => (date.date_parts()?.day0 + 1).to_string(),
            'S' => self.locale.ordinal_suffix(date.date_parts()?.day0).to_string(),
            'l' => {
                let day0 = usize::try_from(iso_day_of_week(date.era_day_index()?) - 1).ok()?;
                self.locale.day_name(day0).to_string()
            }
            'D' => {
                let day0 = usize::try_from(iso_day_of_week(date.era_day_index()?) - 1).ok()?;
                self.locale.day_abbr(day0).to_string()
            }
            'w' => (iso_day_of_week(date.era_day_index()?) % 7).to_string(),
            'N' => iso_day_of_week(date.era_day_index()?).to_string(),
            'z' => date.day_of_year_index()?.to_string(),
            'W' => iso_week_number(date.era_day_index()?, date.day_of_year_index()?).to_string(),
            'o' => {
                let week_year = iso_week_year(
                    date.era_day_index()?,
                    date.day_of_year_index()?,
                    date.year()?,
                );
                format!("{:04}", week_year)
            }
            'Y' => format!("{:04}", date.year()?),
            'y' => format!("{:02}", date.year()?.rem_euclid(100)),
            _ => return None,
        };
        Some(rendered)
    }
}

/// Resolves time symbols against the representation's time of day.
///
/// The leading place values are read as hours, minutes and seconds, then
/// milliseconds and microseconds; a representation without a time of day
/// leaves every time symbol unresolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeRenderer;

impl SymbolRenderer for TimeRenderer {
    fn render(&self, date: &dyn FragmentedDate, token: &FormatToken) -> Option<String> {
        let symbol = token.symbol_char()?;
        let time = date.time_of_day()?;

        let hour12 = || (time.get(0) + 11).rem_euclid(12) + 1;
        let rendered = match symbol {
            'H' => format!("{:02}", time.get(0)),
            'G' => time.get(0).to_string(),
            'h' => format!("{:02}", hour12()),
            'g' => hour12().to_string(),
            'i' => format!("{:02}", time.get(1)),
            's' => format!("{:02}", time.get(2)),
            'v' => format!("{:03}", time.get(3)),
            'u' => format!("{:06}", time.get(3) * 1000 + time.get(4)),
            'a' => {
                if time.get(0) < 12 { "am" } else { "pm" }.to_string()
            }
            'A' => {
                if time.get(0) < 12 { "AM" } else { "PM" }.to_string()
            }
            _ => return None,
        };
        Some(rendered)
    }
}

// =============================================================================
// Formatter
// =============================================================================

/// Formats a date representation into a string, one symbol at a time.
///
/// Symbols are offered to the resolver chain in order; literal tokens and
/// unresolved symbols are emitted verbatim. When a format carries
/// alternation branches, rendering uses the first branch only (alternation
/// is a parsing concept).
pub struct Formatter {
    renderers: Vec<Box<dyn SymbolRenderer>>,
}

impl Formatter {
    /// Creates a formatter with the standard resolvers and English names.
    pub fn new() -> Self {
        Self::with_locale(English)
    }

    /// Creates a formatter with the standard resolvers over a locale.
    pub fn with_locale(locale: impl Locale + 'static) -> Self {
        Self {
            renderers: vec![Box::new(DateRenderer::new(locale)), Box::new(TimeRenderer)],
        }
    }

    /// Appends a resolver tried after the standard ones.
    pub fn with_renderer(mut self, renderer: impl SymbolRenderer + 'static) -> Self {
        self.renderers.push(Box::new(renderer));
        self
    }

    /// Renders the date according to the format string.
    pub fn format(&self, date: &dyn FragmentedDate, format: &str) -> String {
        self.format_at_depth(date, format, 0)
    }

    fn format_at_depth(&self, date: &dyn FragmentedDate, format: &str, depth: usize) -> String {
        let mut output = String::new();
        for token in lexer::tokenize(format) {
            match token.kind() {
                TokenKind::Separator => break,
                TokenKind::Literal => output.push_str(token.text()),
                TokenKind::Symbol => match self.render_symbol(date, &token, depth) {
                    Some(text) => output.push_str(&text),
                    None => output.push_str(token.text()),
                },
                TokenKind::EndOfInput => {}
            }
        }
        output
    }

    fn render_symbol(
        &self,
        date: &dyn FragmentedDate,
        token: &FormatToken,
        depth: usize,
    ) -> Option<String> {
        for renderer in &self.renderers {
            if let Some(text) = renderer.render(date, token) {
                return Some(text);
            }
        }

        // Composite symbols expand to their sub-format, mirroring the
        // parse side.
        if depth < MAX_SUBFORMAT_DEPTH {
            if let Some(Resolution::SubFormat(sub_format)) = symbol::resolve(token.symbol_char()?)
            {
                return Some(self.format_at_depth(date, sub_format, depth + 1));
            }
        }

        None
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}
