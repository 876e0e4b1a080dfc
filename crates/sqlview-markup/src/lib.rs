#![forbid(unsafe_code)]

//! Escaped, styled HTML rendering of SQL source.
//!
//! Data flows one way: raw text is tokenized by `sqlview-syntax`, each token
//! is escaped and optionally wrapped in a style marker, and the result is
//! handed to a [`DisplaySurface`] inside a self-contained [`SourcePage`].
//!
//! # Example
//!
//! ```
//! use sqlview_markup::{render, strip_markup};
//!
//! let html = render("select '<x>' from t");
//! assert!(html.starts_with("<span class=\"sql-keyword\">select</span>"));
//! assert_eq!(strip_markup(&html), "select '<x>' from t");
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`escape`] | HTML escaping and its inverse |
//! | [`render`](mod@render) | Token-to-markup renderer |
//! | [`config`] | Render settings with `SQLVIEW_*` overrides |
//! | [`theme`] | Page and token colors |
//! | [`page`] | Complete HTML document for a webview |
//! | [`surface`] | Display surface trait and viewer |

pub mod config;
pub mod escape;
pub mod page;
pub mod render;
pub mod surface;
pub mod theme;

pub use config::{RenderConfig, RenderConfigError, RenderConfigParse};
pub use page::SourcePage;
pub use render::{Renderer, StyleClass, render, strip_markup};
pub use surface::{CaptureSurface, DisplaySurface, Presented, SourceViewer, SurfaceError};
pub use theme::{CssStyle, MarkupTheme, Rgb, ThemeId};

pub use sqlview_syntax::{Token, TokenKind, tokenize};
