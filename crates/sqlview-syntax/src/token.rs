#![forbid(unsafe_code)]

//! Token model for the SQL span classifier.

use std::ops::Range;

use crate::keywords::is_keyword;

// ---------------------------------------------------------------------------
// Token kinds
// ---------------------------------------------------------------------------

/// Lexical category assigned by the rule that matched a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `'...'`, closed by the next quote or running to end of input.
    StringLiteral,
    /// `--` up to (not including) the end of the line.
    LineComment,
    /// Identifier or keyword; the distinction is made by [`Token::highlight`].
    Word,
    /// A run of whitespace, newlines included.
    Whitespace,
    /// Everything else: punctuation, operators, digits, lone hyphens.
    Symbol,
}

/// Render-time classification of a token.
///
/// `Word` tokens split into `Keyword` and `Identifier`; every other kind maps
/// one-to-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    String,
    Comment,
    Keyword,
    Identifier,
    Whitespace,
    Symbol,
}

impl Highlight {
    /// Whether the renderer attaches a style marker to this class.
    #[must_use]
    pub const fn is_styled(self) -> bool {
        matches!(self, Self::String | Self::Comment | Self::Keyword)
    }
}

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A classified span of the source text.
///
/// `text` is the exact slice of the input. `range` is a half-open range of
/// character (Unicode scalar value) offsets, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub range: Range<usize>,
}

impl<'a> Token<'a> {
    /// Create a token. Panics in debug builds if the range is inverted.
    pub fn new(kind: TokenKind, text: &'a str, range: Range<usize>) -> Self {
        debug_assert!(range.start <= range.end, "token range must be ordered");
        Self { kind, text, range }
    }

    /// Start offset in characters.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// End offset in characters (exclusive).
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// Token length in characters.
    pub fn len(&self) -> usize {
        self.range.end.saturating_sub(self.range.start)
    }

    pub fn is_empty(&self) -> bool {
        self.range.start >= self.range.end
    }

    /// Classify for rendering. Pure function of `kind` and `text`.
    #[must_use]
    pub fn highlight(&self) -> Highlight {
        match self.kind {
            TokenKind::StringLiteral => Highlight::String,
            TokenKind::LineComment => Highlight::Comment,
            TokenKind::Word if is_keyword(self.text) => Highlight::Keyword,
            TokenKind::Word => Highlight::Identifier,
            TokenKind::Whitespace => Highlight::Whitespace,
            TokenKind::Symbol => Highlight::Symbol,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check that `tokens` tile `source` exactly.
///
/// Every token must be non-empty, start where the previous one ended, carry a
/// character range that agrees with its text, and the concatenated texts must
/// equal `source`.
pub fn validate_tokens(source: &str, tokens: &[Token<'_>]) -> bool {
    let mut rest = source;
    let mut prev_end = 0;
    for token in tokens {
        if token.is_empty() || token.range.start != prev_end {
            return false;
        }
        if token.text.chars().count() != token.len() {
            return false;
        }
        match rest.strip_prefix(token.text) {
            Some(tail) => rest = tail,
            None => return false,
        }
        prev_end = token.range.end;
    }
    rest.is_empty()
}
