#![forbid(unsafe_code)]

//! Token sequence to escaped, styled markup.
//!
//! Each token's text is HTML-escaped and, for keywords, string literals and
//! comments, wrapped in `<span class="{prefix}-{class}">`. Removing the spans
//! and reversing the escaping yields the original input exactly; see
//! [`strip_markup`].

use std::sync::LazyLock;

use sqlview_syntax::{Highlight, Token, tokenize};

use crate::config::{RenderConfig, RenderConfigError};
use crate::escape::{escape_into, unescape};

/// Style marker categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleClass {
    String,
    Comment,
    Keyword,
}

impl StyleClass {
    pub const ALL: [StyleClass; 3] = [Self::String, Self::Comment, Self::Keyword];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Comment => "comment",
            Self::Keyword => "keyword",
        }
    }

    /// Style for a token class, or `None` for plain text.
    #[must_use]
    pub const fn for_highlight(highlight: Highlight) -> Option<Self> {
        match highlight {
            Highlight::String => Some(Self::String),
            Highlight::Comment => Some(Self::Comment),
            Highlight::Keyword => Some(Self::Keyword),
            Highlight::Identifier | Highlight::Whitespace | Highlight::Symbol => None,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

const CLOSE_TAG: &str = "</span>";

/// Renders SQL source into escaped markup.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    open_tags: [String; 3],
}

impl Default for Renderer {
    fn default() -> Self {
        Self::from_valid(RenderConfig::default())
    }
}

impl Renderer {
    /// Create a renderer, rejecting configs that could break out of markup.
    pub fn new(config: RenderConfig) -> Result<Self, Vec<RenderConfigError>> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    /// Renderer configured from `SQLVIEW_*` environment variables.
    ///
    /// Invalid variables are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_valid(RenderConfig::from_env())
    }

    fn from_valid(config: RenderConfig) -> Self {
        let open_tags =
            StyleClass::ALL.map(|class| format!("<span class=\"{}\">", config.class_name(class.as_str())));
        Self { config, open_tags }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Tokenize and render `source`.
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let tokens = tokenize(source);
        let out = self.render_tokens(&tokens);
        tracing::debug!(
            bytes = source.len(),
            tokens = tokens.len(),
            output_bytes = out.len(),
            "sql rendered"
        );
        out
    }

    /// Render an already tokenized sequence, in order.
    #[must_use]
    pub fn render_tokens(&self, tokens: &[Token<'_>]) -> String {
        let capacity = tokens.iter().map(|t| t.text.len()).sum::<usize>() * 2;
        let mut out = String::with_capacity(capacity);
        for token in tokens {
            self.render_token_into(&mut out, token);
        }
        out
    }

    fn render_token_into(&self, out: &mut String, token: &Token<'_>) {
        let style = self
            .config
            .highlight
            .then(|| StyleClass::for_highlight(token.highlight()))
            .flatten();

        match style {
            Some(class) => {
                out.push_str(&self.open_tags[class.index()]);
                escape_into(out, token.text);
                out.push_str(CLOSE_TAG);
            }
            None => escape_into(out, token.text),
        }
    }
}

static DEFAULT_RENDERER: LazyLock<Renderer> = LazyLock::new(Renderer::default);

/// Render `source` with the default configuration.
#[must_use]
pub fn render(source: &str) -> String {
    DEFAULT_RENDERER.render(source)
}

/// Remove style markers and reverse escaping.
///
/// Escaped text never contains `<` or `>`, so every angle-bracketed run in
/// rendered output is a marker.
pub fn strip_markup(rendered: &str) -> String {
    let mut text = String::with_capacity(rendered.len());
    let mut rest = rendered;
    while let Some(open) = rest.find('<') {
        text.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => rest = "",
        }
    }
    text.push_str(rest);
    unescape(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_star_from_t() {
        assert_eq!(
            render("SELECT * FROM T"),
            "<span class=\"sql-keyword\">SELECT</span> * \
             <span class=\"sql-keyword\">FROM</span> T"
        );
    }

    #[test]
    fn keywords_keep_original_casing() {
        for word in ["select", "SELECT", "Select"] {
            assert_eq!(
                render(word),
                format!("<span class=\"sql-keyword\">{word}</span>")
            );
        }
    }

    #[test]
    fn comment_then_statement() {
        assert_eq!(
            render("-- comment\nSELECT 1"),
            "<span class=\"sql-comment\">-- comment</span>\n\
             <span class=\"sql-keyword\">SELECT</span> 1"
        );
    }

    #[test]
    fn string_literals_are_escaped_inside_marker() {
        assert_eq!(
            render("'a<b'"),
            "<span class=\"sql-string\">&#39;a&lt;b&#39;</span>"
        );
    }

    #[test]
    fn comments_are_escaped_inside_marker() {
        assert_eq!(
            render("-- <b>&"),
            "<span class=\"sql-comment\">-- &lt;b&gt;&amp;</span>"
        );
    }

    #[test]
    fn script_tag_is_neutralized() {
        let out = render("<script>");
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert_eq!(out, "&lt;script&gt;");
    }

    #[test]
    fn keyword_inside_string_is_not_styled_as_keyword() {
        let out = render("'select'");
        assert!(!out.contains("sql-keyword"));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }

    #[test]
    fn whitespace_only_is_unstyled() {
        assert_eq!(render("   \n\t"), "   \n\t");
    }

    #[test]
    fn highlight_off_still_escapes() {
        let renderer = Renderer::new(RenderConfig {
            highlight: false,
            ..RenderConfig::default()
        })
        .unwrap();
        assert_eq!(renderer.render("select '<x>'"), "select &#39;&lt;x&gt;&#39;");
    }

    #[test]
    fn custom_prefix() {
        let renderer = Renderer::new(RenderConfig {
            class_prefix: "fb".into(),
            ..RenderConfig::default()
        })
        .unwrap();
        assert_eq!(
            renderer.render("end"),
            "<span class=\"fb-keyword\">end</span>"
        );
    }

    #[test]
    fn new_rejects_injecting_prefix() {
        let err = Renderer::new(RenderConfig {
            class_prefix: "x\"><script>".into(),
            ..RenderConfig::default()
        })
        .unwrap_err();
        assert_eq!(err[0].field, "class_prefix");
    }

    #[test]
    fn new_rejects_font_that_opens_css_comment() {
        let err = Renderer::new(RenderConfig {
            font_family: "monospace /*".into(),
            ..RenderConfig::default()
        })
        .unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err[0].field, "font_family");
    }

    #[test]
    fn from_env_always_yields_valid_config() {
        assert!(Renderer::from_env().config().validate().is_ok());
    }

    #[test]
    fn render_tokens_matches_render() {
        let source = "update t set a = 'x' -- y";
        let renderer = Renderer::default();
        assert_eq!(renderer.render_tokens(&tokenize(source)), renderer.render(source));
    }

    #[test]
    fn strip_markup_round_trips() {
        for source in [
            "SELECT * FROM T",
            "'it''s' -- \"quoted\" <tag>",
            "a & b && c",
            "&amp; literally",
            "",
        ] {
            assert_eq!(strip_markup(&render(source)), source);
        }
    }

    #[test]
    fn style_class_mapping() {
        assert_eq!(StyleClass::for_highlight(Highlight::Keyword), Some(StyleClass::Keyword));
        assert_eq!(StyleClass::for_highlight(Highlight::Identifier), None);
        for class in StyleClass::ALL {
            assert_eq!(StyleClass::ALL[class.index()], class);
        }
    }
}
