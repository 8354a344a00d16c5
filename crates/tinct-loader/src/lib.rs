#![forbid(unsafe_code)]

//! JSON theme loading for Tinct.
//!
//! # Role in Tinct
//! Turns theme documents into finished `tinct-core` values. The registry
//! never does I/O; this crate sits at the edge, producing
//! [`ColorScheme`] and [`TextTheme`] instances that callers then hand to
//! the registry or use directly.
//!
//! # Document shapes
//!
//! Color scheme:
//! ```json
//! {
//!   "name": "ocean",
//!   "colors": {
//!     "PRIMARY": "#0077BE",
//!     "BACKGROUND": "#0A1929",
//!     "OVERLAY": "#80000000"
//!   }
//! }
//! ```
//!
//! Text theme:
//! ```json
//! {
//!   "name": "mono",
//!   "styles": {
//!     "bodyMedium": { "color": "#FFFFFF" },
//!     "titleLarge": { "color": "#FFD700", "decorations": ["BOLD"] }
//!   }
//! }
//! ```
//!
//! Role and decoration names come from the closed sets in `tinct-core`;
//! anything else fails the parse. Nothing is silently defaulted.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use tinct_core::{
    Color, ColorRole, ColorScheme, ParseColorError, ParseDecorationError, ParseRoleError,
    SchemeError, TextDecoration, TextStyle, TextTheme, TextThemeError,
};

/// Errors raised while loading a theme document.
#[derive(Debug)]
pub enum LoadError {
    /// A required field was absent.
    MissingField(&'static str),
    /// A color role name outside the closed set.
    Role(ParseRoleError),
    /// A text decoration name outside the closed set.
    Decoration(ParseDecorationError),
    /// A malformed hex color value.
    Color(ParseColorError),
    /// The parsed scheme violated a scheme invariant (e.g. no colors).
    Scheme(SchemeError),
    /// The parsed text theme violated a theme invariant.
    TextTheme(TextThemeError),
    /// The document was not valid JSON.
    Json(serde_json::Error),
    /// The file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "theme document is missing field '{field}'"),
            Self::Role(err) => err.fmt(f),
            Self::Decoration(err) => err.fmt(f),
            Self::Color(err) => err.fmt(f),
            Self::Scheme(err) => err.fmt(f),
            Self::TextTheme(err) => err.fmt(f),
            Self::Json(err) => write!(f, "invalid theme JSON: {err}"),
            Self::Io(err) => write!(f, "cannot read theme file: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingField(_) => None,
            Self::Role(err) => Some(err),
            Self::Decoration(err) => Some(err),
            Self::Color(err) => Some(err),
            Self::Scheme(err) => Some(err),
            Self::TextTheme(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ParseRoleError> for LoadError {
    fn from(err: ParseRoleError) -> Self {
        Self::Role(err)
    }
}

impl From<ParseDecorationError> for LoadError {
    fn from(err: ParseDecorationError) -> Self {
        Self::Decoration(err)
    }
}

impl From<ParseColorError> for LoadError {
    fn from(err: ParseColorError) -> Self {
        Self::Color(err)
    }
}

#[derive(Deserialize)]
struct SchemeDoc {
    name: Option<String>,
    colors: Option<BTreeMap<String, String>>,
}

#[derive(Deserialize)]
struct TextThemeDoc {
    name: Option<String>,
    styles: Option<BTreeMap<String, StyleDoc>>,
}

#[derive(Deserialize)]
struct StyleDoc {
    color: Option<String>,
    #[serde(default)]
    decorations: Vec<String>,
}

/// Parse a color scheme document.
pub fn parse_scheme(json: &str) -> Result<ColorScheme, LoadError> {
    let doc: SchemeDoc = serde_json::from_str(json)?;
    let name = doc.name.ok_or(LoadError::MissingField("name"))?;
    let colors = doc.colors.ok_or(LoadError::MissingField("colors"))?;

    let mut builder = ColorScheme::builder(name);
    for (role_name, hex) in &colors {
        let role: ColorRole = role_name.parse()?;
        let color = Color::from_hex(hex)?;
        builder = builder.set(role, color);
    }

    builder.build().map_err(LoadError::Scheme)
}

/// Parse a text theme document.
pub fn parse_text_theme(json: &str) -> Result<TextTheme, LoadError> {
    let doc: TextThemeDoc = serde_json::from_str(json)?;
    let name = doc.name.ok_or(LoadError::MissingField("name"))?;
    let styles = doc.styles.ok_or(LoadError::MissingField("styles"))?;

    let mut builder = TextTheme::builder(name);
    for (key, style_doc) in &styles {
        builder = builder.style(key.clone(), parse_style(style_doc)?);
    }

    builder.build().map_err(LoadError::TextTheme)
}

fn parse_style(doc: &StyleDoc) -> Result<TextStyle, LoadError> {
    let hex = doc.color.as_deref().ok_or(LoadError::MissingField("color"))?;
    let color = Color::from_hex(hex)?;

    let mut style = TextStyle::of(color);
    for name in &doc.decorations {
        let decoration: TextDecoration = name.parse()?;
        style = style.with(decoration);
    }
    Ok(style)
}

/// Load a color scheme from a JSON file.
pub fn load_scheme(path: impl AsRef<Path>) -> Result<ColorScheme, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let scheme = parse_scheme(&json)?;
    debug!(name = %scheme.name(), path = %path.display(), "loaded color scheme");
    Ok(scheme)
}

/// Load a text theme from a JSON file.
pub fn load_text_theme(path: impl AsRef<Path>) -> Result<TextTheme, LoadError> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let theme = parse_text_theme(&json)?;
    debug!(name = %theme.name(), path = %path.display(), "loaded text theme");
    Ok(theme)
}
