#![forbid(unsafe_code)]

//! Self-contained HTML documents for a display surface.
//!
//! A [`SourcePage`] wraps rendered SQL in a `<pre>` block with a `<style>`
//! sheet for the configured class prefix, so a webview can show it without
//! any other assets.

use std::fmt::Write;

use crate::escape::escape_into;
use crate::render::{Renderer, StyleClass};
use crate::theme::{CssStyle, MarkupTheme};

/// A rendered SQL source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePage {
    title: String,
    body: String,
    document: String,
}

impl SourcePage {
    /// Render `source` and assemble the full document.
    pub fn build(renderer: &Renderer, title: &str, source: &str) -> Self {
        let theme = MarkupTheme::for_id(renderer.config().theme);
        Self::build_with_theme(renderer, &theme, title, source)
    }

    /// Like [`SourcePage::build`] with an explicit theme.
    pub fn build_with_theme(
        renderer: &Renderer,
        theme: &MarkupTheme,
        title: &str,
        source: &str,
    ) -> Self {
        let body = renderer.render(source);
        let document = assemble(renderer, theme, title, &body);
        Self {
            title: title.to_string(),
            body,
            document,
        }
    }

    /// The unescaped title as given.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rendered source only, without the surrounding document.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The complete HTML document.
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn into_document(self) -> String {
        self.document
    }
}

fn assemble(renderer: &Renderer, theme: &MarkupTheme, title: &str, body: &str) -> String {
    let config = renderer.config();
    let mut out = String::with_capacity(body.len() + 1024);

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    escape_into(&mut out, title);
    out.push_str("</title>\n<style>\n");

    let _ = writeln!(
        out,
        "body {{ margin:0; background:{}; color:{}; }}",
        theme.background, theme.foreground
    );
    let _ = writeln!(
        out,
        ".{} {{ margin:0; padding:8px; font-family:{}; font-size:{}; white-space:pre; }}",
        config.class_name("source"),
        config.font_family,
        config.font_size,
    );
    for class in StyleClass::ALL {
        write_class_rule(&mut out, &config.class_name(class.as_str()), style_for(theme, class));
    }

    let _ = write!(
        out,
        "</style>\n</head>\n<body>\n<pre class=\"{}\">",
        config.class_name("source")
    );
    out.push_str(body);
    out.push_str("</pre>\n</body>\n</html>\n");
    out
}

fn style_for(theme: &MarkupTheme, class: StyleClass) -> &CssStyle {
    match class {
        StyleClass::String => &theme.string,
        StyleClass::Comment => &theme.comment,
        StyleClass::Keyword => &theme.keyword,
    }
}

fn write_class_rule(out: &mut String, class_name: &str, style: &CssStyle) {
    let _ = write!(out, ".{class_name} {{ ");
    style.write_css(out);
    out.push_str(" }\n");
}
