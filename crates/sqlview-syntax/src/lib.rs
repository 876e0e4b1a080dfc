#![forbid(unsafe_code)]

//! Lossless SQL span classifier.
//!
//! Turns arbitrary SQL source into an ordered sequence of typed spans (string
//! literal, line comment, word, whitespace, symbol) whose texts concatenate
//! back to the input byte-for-byte. No parse tree is built and no grammar is
//! checked; malformed input degrades to well-defined tokens instead of
//! failing.
//!
//! # Example
//!
//! ```
//! use sqlview_syntax::{Highlight, tokenize};
//!
//! let tokens = tokenize("select id from t");
//! assert_eq!(tokens[0].highlight(), Highlight::Keyword);
//! assert_eq!(tokens[2].highlight(), Highlight::Identifier);
//! ```

pub mod keywords;
pub mod token;
pub mod tokenizer;

pub use keywords::is_keyword;
pub use token::{Highlight, Token, TokenKind, validate_tokens};
pub use tokenizer::{Tokens, tokenize, tokens};
