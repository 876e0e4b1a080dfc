#![forbid(unsafe_code)]

//! Color themes for rendered SQL pages.

use std::fmt::{self, Write};

/// Built-in theme identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    Dark,
    Light,
}

impl ThemeId {
    pub const ALL: [ThemeId; 2] = [Self::Dark, Self::Light];

    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Text style expressed as a CSS declaration list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CssStyle {
    pub fg: Option<Rgb>,
    pub bold: bool,
    pub italic: bool,
}

impl CssStyle {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bold: false,
            italic: false,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Rgb) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Write the declarations (`color:#rrggbb;font-weight:bold;...`).
    pub fn write_css(&self, out: &mut String) {
        if let Some(fg) = self.fg {
            let _ = write!(out, "color:{fg};");
        }
        if self.bold {
            out.push_str("font-weight:bold;");
        }
        if self.italic {
            out.push_str("font-style:italic;");
        }
    }

    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        self.write_css(&mut out);
        out
    }
}

/// Page colors plus one style per styled token class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupTheme {
    pub background: Rgb,
    pub foreground: Rgb,
    pub keyword: CssStyle,
    pub string: CssStyle,
    pub comment: CssStyle,
}

impl MarkupTheme {
    /// Dark theme.
    pub fn dark() -> Self {
        let purple = Rgb::rgb(198, 120, 221); // Keywords
        let cyan = Rgb::rgb(86, 182, 194); // Strings
        let green = Rgb::rgb(152, 195, 121); // Comments

        Self {
            background: Rgb::rgb(40, 44, 52),
            foreground: Rgb::rgb(171, 178, 191),
            keyword: CssStyle::new().fg(purple).bold(),
            string: CssStyle::new().fg(cyan),
            comment: CssStyle::new().fg(green).italic(),
        }
    }

    /// Light theme.
    pub fn light() -> Self {
        let blue = Rgb::rgb(0, 0, 192);
        let red = Rgb::rgb(163, 21, 21);
        let green = Rgb::rgb(0, 128, 0);

        Self {
            background: Rgb::rgb(255, 255, 255),
            foreground: Rgb::rgb(30, 30, 30),
            keyword: CssStyle::new().fg(blue).bold(),
            string: CssStyle::new().fg(red),
            comment: CssStyle::new().fg(green).italic(),
        }
    }

    pub fn for_id(id: ThemeId) -> Self {
        match id {
            ThemeId::Dark => Self::dark(),
            ThemeId::Light => Self::light(),
        }
    }
}

impl Default for MarkupTheme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_formats_as_hex() {
        assert_eq!(Rgb::rgb(255, 0, 16).to_string(), "#ff0010");
    }

    #[test]
    fn css_style_declarations() {
        let style = CssStyle::new().fg(Rgb::rgb(1, 2, 3)).bold().italic();
        assert_eq!(
            style.to_css(),
            "color:#010203;font-weight:bold;font-style:italic;"
        );
        assert_eq!(CssStyle::new().to_css(), "");
    }

    #[test]
    fn theme_ids_round_trip() {
        for id in ThemeId::ALL {
            assert_eq!(ThemeId::parse(id.as_str()), Some(id));
        }
        assert_eq!(ThemeId::parse(" LIGHT "), Some(ThemeId::Light));
        assert_eq!(ThemeId::parse("solarized"), None);
    }

    #[test]
    fn presets_style_every_class() {
        for id in ThemeId::ALL {
            let theme = MarkupTheme::for_id(id);
            assert!(theme.keyword.fg.is_some());
            assert!(theme.string.fg.is_some());
            assert!(theme.comment.fg.is_some());
            assert_ne!(theme.background, theme.foreground);
        }
    }
}
