//! Format-string tokenizer.
//!
//! Every character of the format string lands in exactly one token: ASCII
//! letters become single-character symbol tokens, `|` becomes the
//! alternation separator, and everything else accumulates into literal
//! runs. A backslash escapes the following character into the current
//! literal run, which is how a symbol character is forced to literal; the
//! de-escaping happens here, invisibly to the compiler.

use crate::model::FormatToken;

/// Tokenizes a format string.
pub fn tokenize(format: &str) -> Vec<FormatToken> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = format.chars();

    let flush = |literal: &mut String, tokens: &mut Vec<FormatToken>| {
        if !literal.is_empty() {
            tokens.push(FormatToken::literal(std::mem::take(literal)));
        }
    };

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(escaped) => literal.push(escaped),
                // A trailing backslash escapes nothing; keep it verbatim.
                None => literal.push('\\'),
            },
            '|' => {
                flush(&mut literal, &mut tokens);
                tokens.push(FormatToken::separator());
            }
            ch if ch.is_ascii_alphabetic() => {
                flush(&mut literal, &mut tokens);
                tokens.push(FormatToken::symbol(ch));
            }
            ch => literal.push(ch),
        }
    }
    flush(&mut literal, &mut tokens);

    tokens
}
