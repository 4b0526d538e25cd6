//! Format compiler: assembles alternation-aware matchers.
//!
//! The compiler walks the token stream once, growing one branch at a time:
//! symbols resolve to capturing fragments (or recursively compiled
//! sub-formats), unresolved symbols and literal runs match verbatim, and
//! the alternation separator closes the current branch behind an
//! end-of-input anchor. Matching tries branches strictly in declaration
//! order and commits to the first one that matches the entire input.

use regex::Regex;

use crate::error::{FormatError, ParseError};
use crate::format::lexer;
use crate::format::symbol::{self, Resolution};
use crate::limits::MAX_SUBFORMAT_DEPTH;
use crate::model::{FormatToken, TokenKind};

/// A format string compiled into an ordered list of branch matchers.
#[derive(Debug)]
pub struct CompiledFormat {
    branches: Vec<Branch>,
}

#[derive(Debug)]
struct Branch {
    regex: Regex,
    /// Symbols owning the capture groups, in capture order.
    symbols: Vec<char>,
}

/// A branch under construction: its assembled pattern and the symbols
/// whose captured substrings must be mapped back to fields.
#[derive(Debug, Default)]
struct BranchFragment {
    pattern: String,
    symbols: Vec<char>,
}

/// Compiles a format string into a bidirectional matcher.
pub fn compile(format: &str) -> Result<CompiledFormat, FormatError> {
    let fragments = compile_branches(format, 0)?;

    let mut branches = Vec::with_capacity(fragments.len());
    for fragment in fragments {
        let anchored = format!(r"\A{}", fragment.pattern);
        branches.push(Branch {
            regex: Regex::new(&anchored)?,
            symbols: fragment.symbols,
        });
    }

    trace!("compiled format {:?} into {} branch(es)", format, branches.len());
    Ok(CompiledFormat { branches })
}

/// Compiles a format into per-branch fragments, each closed by an
/// end-of-input anchor.
fn compile_branches(format: &str, depth: usize) -> Result<Vec<BranchFragment>, FormatError> {
    let mut branches = Vec::new();
    let mut current = BranchFragment::default();

    for token in lexer::tokenize(format) {
        if token.kind() == TokenKind::Separator {
            current.pattern.push_str(r"\z");
            branches.push(std::mem::take(&mut current));
            continue;
        }
        append_token(&mut current, token, depth)?;
    }

    current.pattern.push_str(r"\z");
    branches.push(current);

    Ok(branches)
}

/// Appends one token's sub-matcher to the branch under construction.
fn append_token(
    branch: &mut BranchFragment,
    token: FormatToken,
    depth: usize,
) -> Result<(), FormatError> {
    match token.kind() {
        TokenKind::Symbol => {
            let Some(symbol) = token.symbol_char() else {
                return Ok(());
            };
            match symbol::resolve(symbol) {
                Some(Resolution::Fragment(fragment)) => {
                    branch.pattern.push('(');
                    branch.pattern.push_str(fragment);
                    branch.pattern.push(')');
                    branch.symbols.push(symbol);
                }
                Some(Resolution::SubFormat(sub_format)) => {
                    if depth >= MAX_SUBFORMAT_DEPTH {
                        return Err(FormatError::RecursionLimit {
                            symbol,
                            max: MAX_SUBFORMAT_DEPTH,
                        });
                    }
                    // Composite symbols expand through the ordinary entry
                    // point; their fixed sub-formats hold no alternation,
                    // so the expansion is a single branch.
                    let sub_branches = compile_branches(sub_format, depth + 1)?;
                    if let Some(mut first) = sub_branches.into_iter().next() {
                        strip_anchor(&mut first.pattern);
                        branch.pattern.push_str(&first.pattern);
                        branch.symbols.extend(first.symbols);
                    }
                }
                // The token seems literal after all.
                None => {
                    let token = token.into_literal();
                    branch.pattern.push_str(&regex::escape(token.text()));
                }
            }
        }
        TokenKind::Literal => {
            branch.pattern.push_str(&regex::escape(token.text()));
        }
        TokenKind::Separator | TokenKind::EndOfInput => {}
    }
    Ok(())
}

/// Removes the end-of-input anchor a nested compilation appended.
fn strip_anchor(pattern: &mut String) {
    if pattern.ends_with(r"\z") {
        pattern.truncate(pattern.len() - 2);
    }
}

/// Ordered `(symbol, substring)` captures from a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFields<'i> {
    fields: Vec<(char, &'i str)>,
}

impl<'i> ParsedFields<'i> {
    /// The captures in declaration order.
    pub fn fields(&self) -> &[(char, &'i str)] {
        &self.fields
    }

    /// The first capture for the given symbol.
    pub fn get(&self, symbol: char) -> Option<&'i str> {
        self.fields
            .iter()
            .find(|(captured, _)| *captured == symbol)
            .map(|(_, text)| *text)
    }

    /// Number of captured fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when the winning branch captured nothing.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl CompiledFormat {
    /// Number of alternation branches.
    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    /// Matches an input string against the branches in declaration order.
    ///
    /// The first branch whose pattern matches the entire input wins; its
    /// captures are returned in order. A failed parse is atomic: no
    /// partially-populated result is produced.
    pub fn parse<'i>(&self, input: &'i str) -> Result<ParsedFields<'i>, ParseError> {
        for branch in &self.branches {
            if let Some(captures) = branch.regex.captures(input) {
                let fields = branch
                    .symbols
                    .iter()
                    .enumerate()
                    .map(|(index, &symbol)| {
                        let text = captures
                            .get(index + 1)
                            .map(|capture| capture.as_str())
                            .unwrap_or("");
                        (symbol, text)
                    })
                    .collect();
                return Ok(ParsedFields { fields });
            }
        }

        Err(ParseError::NoMatch {
            input: input.to_string(),
            branches: self.branches.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_branch_captures() {
        let compiled = compile("Y-m-d").unwrap();
        let fields = compiled.parse("2024-03-05").unwrap();
        assert_eq!(fields.fields(), &[('Y', "2024"), ('m', "03"), ('d', "05")]);
        assert_eq!(fields.get('Y'), Some("2024"));
        assert_eq!(fields.get('H'), None);
    }

    #[test]
    fn test_alternation_fallback() {
        let compiled = compile("Y-m-d|Y").unwrap();
        assert_eq!(compiled.branch_count(), 2);

        let fields = compiled.parse("2024-03-05").unwrap();
        assert_eq!(fields.fields(), &[('Y', "2024"), ('m', "03"), ('d', "05")]);

        let fields = compiled.parse("2024").unwrap();
        assert_eq!(fields.fields(), &[('Y', "2024")]);
    }

    #[test]
    fn test_declaration_order_wins() {
        // Both branches match a four-digit input; the first declared one
        // must take it.
        let compiled = compile("Y|o").unwrap();
        let fields = compiled.parse("2024").unwrap();
        assert_eq!(fields.fields(), &[('Y', "2024")]);
    }

    #[test]
    fn test_end_of_input_anchor() {
        let compiled = compile("Y").unwrap();
        assert!(compiled.parse("2024-03").is_err());
        assert!(compiled.parse("202").is_err());
    }

    #[test]
    fn test_no_match_reports_input() {
        let compiled = compile("Y-m-d|Y").unwrap();
        let err = compiled.parse("not a date").unwrap_err();
        assert_eq!(
            err,
            ParseError::NoMatch {
                input: "not a date".to_string(),
                branches: 2,
            }
        );
    }

    #[test]
    fn test_unresolved_symbol_matches_verbatim() {
        let compiled = compile("Qd").unwrap();
        let fields = compiled.parse("Q25").unwrap();
        assert_eq!(fields.fields(), &[('d', "25")]);
        assert!(compiled.parse("X25").is_err());
    }

    #[test]
    fn test_escaped_symbol_matches_verbatim() {
        let compiled = compile(r"\Y Y").unwrap();
        let fields = compiled.parse("Y 2024").unwrap();
        assert_eq!(fields.fields(), &[('Y', "2024")]);
    }

    #[test]
    fn test_literal_metacharacters_are_escaped() {
        let compiled = compile("Y.m").unwrap();
        assert!(compiled.parse("2024x03").is_err());
        assert!(compiled.parse("2024.03").is_ok());
    }

    #[test]
    fn test_composite_symbol_expands() {
        let compiled = compile("c").unwrap();
        let fields = compiled.parse("2004-02-12T15:19:21+00:00").unwrap();
        assert_eq!(
            fields.fields(),
            &[
                ('Y', "2004"),
                ('m', "02"),
                ('d', "12"),
                ('H', "15"),
                ('i', "19"),
                ('s', "21"),
                ('P', "+00:00"),
            ]
        );
    }

    #[test]
    fn test_rfc2822_composite() {
        let compiled = compile("r").unwrap();
        let fields = compiled.parse("Thu, 21 Dec 2000 16:01:07 +02:00").unwrap();
        assert_eq!(fields.get('D'), Some("Thu"));
        assert_eq!(fields.get('Y'), Some("2000"));
        assert_eq!(fields.get('P'), Some("+02:00"));
    }

    #[test]
    fn test_recursion_limit_guard() {
        // A compilation already at the depth limit refuses to expand a
        // composite symbol further.
        let result = compile_branches("c", MAX_SUBFORMAT_DEPTH);
        assert!(matches!(
            result,
            Err(FormatError::RecursionLimit { symbol: 'c', .. })
        ));
    }

    #[test]
    fn test_empty_branch_matches_empty_input() {
        let compiled = compile("Y|").unwrap();
        assert!(compiled.parse("").is_ok());
        assert_eq!(compiled.parse("2024").unwrap().get('Y'), Some("2024"));
    }
}
