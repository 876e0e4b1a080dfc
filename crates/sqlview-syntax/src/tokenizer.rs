#![forbid(unsafe_code)]

//! Single-pass SQL tokenizer.
//!
//! At each position the rules below are tried in priority order and the first
//! one that matches a non-empty prefix wins:
//!
//! 1. String literal: `'` up to and including the next `'`, or to end of input.
//!    Doubled quotes (`''`) are not treated as escapes.
//! 2. Line comment: `--` up to the next line terminator (exclusive) or end of
//!    input. Terminators are `\n`, `\r`, U+2028 and U+2029.
//! 3. Word: `[A-Za-z_][A-Za-z0-9_]*`.
//! 4. Whitespace: a maximal run of Unicode whitespace.
//! 5. Symbol: a maximal run of characters that are not ASCII alphanumerics,
//!    `_`, whitespace, `'`, or `-`.
//!
//! A position none of the rules covers (a digit, or a `-` not followed by a
//! second `-`) becomes a one-character `Symbol`. Every step consumes at least
//! one character, so scanning is linear and always terminates.

use std::iter::FusedIterator;

use crate::token::{Token, TokenKind};

/// Returns the byte length of the match at the start of `rest`, if any.
type Matcher = fn(&str) -> Option<usize>;

const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

const RULES: [(TokenKind, Matcher); 5] = [
    (TokenKind::StringLiteral, match_string),
    (TokenKind::LineComment, match_line_comment),
    (TokenKind::Word, match_word),
    (TokenKind::Whitespace, match_whitespace),
    (TokenKind::Symbol, match_symbol),
];

// ---------------------------------------------------------------------------
// Matchers
// ---------------------------------------------------------------------------

fn match_string(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix('\'')?;
    Some(match body.find('\'') {
        Some(close) => close + 2,
        None => rest.len(),
    })
}

fn match_line_comment(rest: &str) -> Option<usize> {
    if !rest.starts_with("--") {
        return None;
    }
    Some(rest.find(LINE_TERMINATORS).unwrap_or(rest.len()))
}

fn match_word(rest: &str) -> Option<usize> {
    let first = *rest.as_bytes().first()?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }
    run_len(rest, |c| c.is_ascii_alphanumeric() || c == '_')
}

fn match_whitespace(rest: &str) -> Option<usize> {
    run_len(rest, char::is_whitespace)
}

fn match_symbol(rest: &str) -> Option<usize> {
    run_len(rest, is_symbol_char)
}

fn is_symbol_char(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_' || c == '\'' || c == '-' || c.is_whitespace())
}

/// Byte length of the leading run of characters satisfying `pred`.
fn run_len(rest: &str, pred: impl Fn(char) -> bool) -> Option<usize> {
    let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
    (len > 0).then_some(len)
}

/// Try every rule in order; fall back to a single-character symbol.
fn next_match(rest: &str) -> (TokenKind, usize) {
    RULES
        .iter()
        .find_map(|&(kind, matcher)| matcher(rest).filter(|&len| len > 0).map(|len| (kind, len)))
        .unwrap_or_else(|| {
            let len = rest.chars().next().map_or(1, char::len_utf8);
            (TokenKind::Symbol, len)
        })
}

// ---------------------------------------------------------------------------
// Tokens iterator
// ---------------------------------------------------------------------------

/// Lazy token stream over a source string.
///
/// Yields tokens in order; together they cover the input exactly.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    source: &'a str,
    byte_pos: usize,
    char_pos: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            byte_pos: 0,
            char_pos: 0,
        }
    }

    /// The remaining, not yet tokenized input.
    pub fn remainder(&self) -> &'a str {
        &self.source[self.byte_pos..]
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = self.remainder();
        if rest.is_empty() {
            return None;
        }

        let (kind, len) = next_match(rest);
        let text = &rest[..len];
        let chars = text.chars().count();
        let start = self.char_pos;

        self.byte_pos += len;
        self.char_pos += chars;

        Some(Token::new(kind, text, start..self.char_pos))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.source.len() - self.byte_pos;
        ((rest > 0) as usize, Some(rest))
    }
}

impl FusedIterator for Tokens<'_> {}

/// Iterate the tokens of `source` without collecting them.
pub fn tokens(source: &str) -> Tokens<'_> {
    Tokens::new(source)
}

/// Tokenize `source` into an ordered, contiguous token sequence.
///
/// Total over all inputs: the empty string yields an empty vector and
/// malformed SQL degrades per the fallback rules.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<Token<'_>> = Tokens::new(source).collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(bytes = source.len(), tokens = tokens.len(), "sql tokenized");

    tokens
}
