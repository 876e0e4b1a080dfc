#![forbid(unsafe_code)]

//! Render configuration with environment overrides.

use std::env;
use std::fmt;

use crate::theme::ThemeId;

const ENV_HIGHLIGHT: &str = "SQLVIEW_HIGHLIGHT";
const ENV_CLASS_PREFIX: &str = "SQLVIEW_CLASS_PREFIX";
const ENV_THEME: &str = "SQLVIEW_THEME";
const ENV_FONT_FAMILY: &str = "SQLVIEW_FONT_FAMILY";
const ENV_FONT_SIZE: &str = "SQLVIEW_FONT_SIZE";

/// Rendering options.
///
/// Environment overrides (all optional):
/// - `SQLVIEW_HIGHLIGHT` (bool): emit style markers; escaping always applies
/// - `SQLVIEW_CLASS_PREFIX` = `[A-Za-z0-9_-]+`
/// - `SQLVIEW_THEME` = dark|light
/// - `SQLVIEW_FONT_FAMILY` (CSS value)
/// - `SQLVIEW_FONT_SIZE` (CSS value)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub highlight: bool,
    pub class_prefix: String,
    pub theme: ThemeId,
    pub font_family: String,
    pub font_size: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            highlight: true,
            class_prefix: "sql".into(),
            theme: ThemeId::Dark,
            font_family: "monospace".into(),
            font_size: "13px".into(),
        }
    }
}

/// Configuration parse diagnostics (env + validation).
#[derive(Debug, Clone)]
pub struct RenderConfigParse {
    pub config: RenderConfig,
    pub errors: Vec<RenderConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl RenderConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for RenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for RenderConfigError {}

impl RenderConfig {
    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> RenderConfig {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> RenderConfigParse {
        let parsed = from_env_with(|key| env::var(key).ok());
        for error in &parsed.errors {
            tracing::warn!(%error, "ignoring invalid render setting");
        }
        parsed
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<RenderConfigError>> {
        let mut errors = Vec::new();
        if let Err(message) = check_class_prefix(&self.class_prefix) {
            errors.push(RenderConfigError::new(
                "class_prefix",
                self.class_prefix.clone(),
                message,
            ));
        }
        if let Err(message) = check_css_value(&self.font_family) {
            errors.push(RenderConfigError::new(
                "font_family",
                self.font_family.clone(),
                message,
            ));
        }
        if let Err(message) = check_css_value(&self.font_size) {
            errors.push(RenderConfigError::new(
                "font_size",
                self.font_size.clone(),
                message,
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// CSS class for a style marker, e.g. `sql-keyword`.
    #[must_use]
    pub fn class_name(&self, class: &str) -> String {
        format!("{}-{}", self.class_prefix, class)
    }
}

fn from_env_with<F>(mut get: F) -> RenderConfigParse
where
    F: FnMut(&str) -> Option<String>,
{
    let mut config = RenderConfig::default();
    let mut errors = Vec::new();

    if let Some(value) = get(ENV_HIGHLIGHT) {
        match parse_bool(&value) {
            Some(parsed) => config.highlight = parsed,
            None => errors.push(RenderConfigError::new(
                "highlight",
                value,
                "expected bool (1/0/true/false)",
            )),
        }
    }

    if let Some(value) = get(ENV_CLASS_PREFIX) {
        let trimmed = value.trim();
        match check_class_prefix(trimmed) {
            Ok(()) => config.class_prefix = trimmed.to_string(),
            Err(message) => errors.push(RenderConfigError::new("class_prefix", value, message)),
        }
    }

    if let Some(value) = get(ENV_THEME) {
        match ThemeId::parse(&value) {
            Some(parsed) => config.theme = parsed,
            None => errors.push(RenderConfigError::new(
                "theme",
                value,
                "expected dark|light",
            )),
        }
    }

    if let Some(value) = get(ENV_FONT_FAMILY) {
        let trimmed = value.trim();
        match check_css_value(trimmed) {
            Ok(()) => config.font_family = trimmed.to_string(),
            Err(message) => errors.push(RenderConfigError::new("font_family", value, message)),
        }
    }

    if let Some(value) = get(ENV_FONT_SIZE) {
        let trimmed = value.trim();
        match check_css_value(trimmed) {
            Ok(()) => config.font_size = trimmed.to_string(),
            Err(message) => errors.push(RenderConfigError::new("font_size", value, message)),
        }
    }

    RenderConfigParse { config, errors }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Prefix lands inside a `class` attribute and a CSS selector.
fn check_class_prefix(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("must not be empty");
    }
    if !value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
    {
        return Err("expected [A-Za-z0-9_-]+");
    }
    Ok(())
}

/// Font settings land inside a `<style>` sheet as a bare declaration value.
fn check_css_value(value: &str) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("must not be empty");
    }
    if value.contains([';', '"', '\'', '\\', '<', '>', '{', '}']) {
        return Err("must not contain ; \" ' \\ < > { }");
    }
    if value.contains("/*") || value.contains("*/") {
        return Err("must not contain a CSS comment");
    }
    if value.chars().any(char::is_control) {
        return Err("must not contain control characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse(pairs: &[(&str, &str)]) -> RenderConfigParse {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        from_env_with(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let parsed = parse(&[]);
        assert!(parsed.errors.is_empty());
        assert_eq!(parsed.config, RenderConfig::default());
        assert!(parsed.config.validate().is_ok());
    }

    #[test]
    fn reads_every_field() {
        let parsed = parse(&[
            (ENV_HIGHLIGHT, "off"),
            (ENV_CLASS_PREFIX, " fb-sql "),
            (ENV_THEME, "Light"),
            (ENV_FONT_FAMILY, "Fira Code, monospace"),
            (ENV_FONT_SIZE, "12pt"),
        ]);
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        let config = parsed.config;
        assert!(!config.highlight);
        assert_eq!(config.class_prefix, "fb-sql");
        assert_eq!(config.theme, ThemeId::Light);
        assert_eq!(config.font_family, "Fira Code, monospace");
        assert_eq!(config.font_size, "12pt");
    }

    #[test]
    fn invalid_values_keep_defaults_and_report() {
        let parsed = parse(&[
            (ENV_HIGHLIGHT, "maybe"),
            (ENV_CLASS_PREFIX, "x\" onclick=\"y"),
            (ENV_THEME, "neon"),
            (ENV_FONT_SIZE, "12px;color:red"),
        ]);
        let fields: Vec<_> = parsed.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["highlight", "class_prefix", "theme", "font_size"]);
        assert_eq!(parsed.config, RenderConfig::default());
    }

    #[test]
    fn validate_collects_all_violations() {
        let config = RenderConfig {
            class_prefix: String::new(),
            font_family: "a{b}".into(),
            font_size: "<".into(),
            ..RenderConfig::default()
        };
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn validate_rejects_css_escapes_from_font_values() {
        for bad in [
            "monospace /*",
            "*/ monospace",
            "'Fira Code",
            "mono\\space",
            "mono\nspace",
            "13px\u{7f}",
        ] {
            let config = RenderConfig {
                font_family: bad.into(),
                font_size: bad.into(),
                ..RenderConfig::default()
            };
            let errors = config.validate().unwrap_err();
            let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
            assert_eq!(fields, vec!["font_family", "font_size"], "{bad:?}");
        }
    }

    #[test]
    fn env_font_with_comment_keeps_default() {
        let parsed = parse(&[(ENV_FONT_FAMILY, "monospace /*")]);
        assert_eq!(parsed.errors.len(), 1);
        assert_eq!(parsed.errors[0].field, "font_family");
        assert_eq!(parsed.config.font_family, "monospace");
    }

    #[test]
    fn error_display_names_field() {
        let err = RenderConfigError::new("theme", "neon", "expected dark|light");
        assert_eq!(err.to_string(), "theme=neon (expected dark|light)");
    }

    #[test]
    fn class_name_joins_prefix() {
        assert_eq!(RenderConfig::default().class_name("keyword"), "sql-keyword");
    }

    #[test]
    fn parse_bool_variants() {
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool(" TRUE "), Some(true));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool(""), None);
    }
}
