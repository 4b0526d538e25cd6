//! Parse-side symbol resolution.
//!
//! Maps each one-letter symbol to the lexical shape its value takes in an
//! input string. Simple symbols resolve to a single capturing fragment;
//! composite symbols stand for a whole sub-format string and resolve by
//! recursively compiling it. Symbols absent from the table resolve to
//! nothing, and the compiler reclassifies them as literals.

/// How a symbol participates in a compiled matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// Regex fragment capturing the symbol's value.
    Fragment(&'static str),
    /// Fixed equivalent sub-format, compiled recursively.
    SubFormat(&'static str),
}

/// Resolves a symbol to its match shape, or `None` for unknown symbols.
pub(crate) fn resolve(symbol: char) -> Option<Resolution> {
    use Resolution::{Fragment, SubFormat};

    let resolution = match symbol {
        // Years: two digits, or four for the full and ISO week-numbering
        // forms.
        'y' => Fragment(r"\d\d"),
        'Y' | 'o' => Fragment(r"\d\d\d\d"),
        'L' => Fragment("[01]"),
        // Month names stop at the first whitespace; abbreviations are at
        // most three characters.
        'F' => Fragment(r"\S.*?"),
        'M' => Fragment(".{1,3}"),
        'm' => Fragment(r"\d\d"),
        'n' => Fragment(r"\d\d?"),
        't' => Fragment(r"\d\d"),
        'd' => Fragment(r"\d\d"),
        'j' => Fragment(r"\d\d?"),
        'l' => Fragment(r"\S.*?"),
        'D' => Fragment(".{1,3}"),
        'S' => Fragment(r"\S{1,2}"),
        'w' => Fragment(r"\d"),
        'z' => Fragment(r"\d{1,3}"),
        'N' => Fragment(r"\d"),
        'W' => Fragment(r"\d\d?"),
        'a' | 'A' => Fragment("[apAP][mM]"),
        // Swatch Internet time.
        'B' => Fragment(r"\d\d\d"),
        'g' | 'G' | 'h' | 'H' => Fragment(r"\d\d"),
        'i' => Fragment(r"\d\d"),
        's' => Fragment(r"\d\d"),
        'u' => Fragment(r"\d{6}"),
        'v' => Fragment(r"\d\d\d"),
        'e' => Fragment(r"\S.*?"),
        'I' => Fragment(r"\d"),
        // Offsets: +0200 and +02:00 forms, or raw seconds.
        'O' => Fragment(r"[+\-]\d{4}"),
        'P' => Fragment(r"[+\-]\d\d:\d\d"),
        'T' => Fragment("[A-Z]{1,3}"),
        'Z' => Fragment(r"-?\d{1,5}"),
        'U' => Fragment(r"-?\d+?"),
        // Composite symbols stand for a whole sub-format.
        'c' => SubFormat(r"Y-m-d\TH:i:sP"),
        'r' => SubFormat("D, d M Y H:i:s P"),
        _ => return None,
    };

    Some(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_symbols_resolve_to_fragments() {
        assert_eq!(resolve('Y'), Some(Resolution::Fragment(r"\d\d\d\d")));
        assert_eq!(resolve('m'), Some(Resolution::Fragment(r"\d\d")));
        assert_eq!(resolve('P'), Some(Resolution::Fragment(r"[+\-]\d\d:\d\d")));
    }

    #[test]
    fn test_composite_symbols_resolve_to_subformats() {
        assert!(matches!(resolve('c'), Some(Resolution::SubFormat(_))));
        assert!(matches!(resolve('r'), Some(Resolution::SubFormat(_))));
    }

    #[test]
    fn test_unknown_symbols_resolve_to_nothing() {
        assert_eq!(resolve('Q'), None);
        assert_eq!(resolve('x'), None);
    }
}
