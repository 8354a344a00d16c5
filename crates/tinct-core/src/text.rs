//! Text styles and typography themes.
//!
//! A [`TextStyle`] pairs a [`Color`] with a set of decorations; a
//! [`TextTheme`] names a collection of styles keyed by typography slot
//! (the Material-style keys in [`keys`], plus free-form custom keys).
//! Both are immutable, mirroring the scheme types.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::color::Color;

/// A single text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum TextDecoration {
    /// Bold text.
    Bold,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underlined,
    /// Strikethrough text.
    Strikethrough,
    /// Obfuscated/scrambled text.
    Obfuscated,
}

impl TextDecoration {
    /// Every decoration, in declaration order.
    pub const ALL: [TextDecoration; 5] = [
        Self::Bold,
        Self::Italic,
        Self::Underlined,
        Self::Strikethrough,
        Self::Obfuscated,
    ];

    /// The stable wire name used in theme documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "BOLD",
            Self::Italic => "ITALIC",
            Self::Underlined => "UNDERLINED",
            Self::Strikethrough => "STRIKETHROUGH",
            Self::Obfuscated => "OBFUSCATED",
        }
    }
}

impl fmt::Display for TextDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextDecoration {
    type Err = ParseDecorationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|decoration| decoration.as_str() == s)
            .ok_or_else(|| ParseDecorationError(s.to_string()))
    }
}

/// Error for a decoration name outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDecorationError(pub String);

impl fmt::Display for ParseDecorationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown text decoration: {}", self.0)
    }
}

impl std::error::Error for ParseDecorationError {}

bitflags::bitflags! {
    /// A set of [`TextDecoration`]s.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decorations: u8 {
        /// Bold text.
        const BOLD = 1 << 0;
        /// Italic text.
        const ITALIC = 1 << 1;
        /// Underlined text.
        const UNDERLINED = 1 << 2;
        /// Strikethrough text.
        const STRIKETHROUGH = 1 << 3;
        /// Obfuscated/scrambled text.
        const OBFUSCATED = 1 << 4;
    }
}

impl From<TextDecoration> for Decorations {
    fn from(decoration: TextDecoration) -> Self {
        match decoration {
            TextDecoration::Bold => Self::BOLD,
            TextDecoration::Italic => Self::ITALIC,
            TextDecoration::Underlined => Self::UNDERLINED,
            TextDecoration::Strikethrough => Self::STRIKETHROUGH,
            TextDecoration::Obfuscated => Self::OBFUSCATED,
        }
    }
}

impl FromIterator<TextDecoration> for Decorations {
    fn from_iter<I: IntoIterator<Item = TextDecoration>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, decoration| set | decoration.into())
    }
}

/// An immutable text style: a color plus decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextStyle {
    color: Color,
    decorations: Decorations,
}

impl TextStyle {
    /// A plain style with only a color.
    #[must_use]
    pub const fn of(color: Color) -> Self {
        Self {
            color,
            decorations: Decorations::empty(),
        }
    }

    /// A style with a color and an explicit decoration set.
    #[must_use]
    pub const fn new(color: Color, decorations: Decorations) -> Self {
        Self { color, decorations }
    }

    /// The style's color.
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// The style's decoration set.
    #[must_use]
    pub const fn decorations(self) -> Decorations {
        self.decorations
    }

    /// Return the style with an additional decoration.
    #[must_use]
    pub fn with(self, decoration: TextDecoration) -> Self {
        Self {
            decorations: self.decorations | decoration.into(),
            ..self
        }
    }

    /// Return the style with bold added.
    #[must_use]
    pub fn bold(self) -> Self {
        self.with(TextDecoration::Bold)
    }

    /// Return the style with italic added.
    #[must_use]
    pub fn italic(self) -> Self {
        self.with(TextDecoration::Italic)
    }

    /// Return the style with underline added.
    #[must_use]
    pub fn underlined(self) -> Self {
        self.with(TextDecoration::Underlined)
    }

    /// Return the style with strikethrough added.
    #[must_use]
    pub fn strikethrough(self) -> Self {
        self.with(TextDecoration::Strikethrough)
    }

    /// Return the style with obfuscation added.
    #[must_use]
    pub fn obfuscated(self) -> Self {
        self.with(TextDecoration::Obfuscated)
    }

    /// Check for a specific decoration.
    #[must_use]
    pub fn has(self, decoration: TextDecoration) -> bool {
        self.decorations.contains(decoration.into())
    }

    /// Whether the style is bold.
    #[must_use]
    pub fn is_bold(self) -> bool {
        self.has(TextDecoration::Bold)
    }

    /// Whether the style is italic.
    #[must_use]
    pub fn is_italic(self) -> bool {
        self.has(TextDecoration::Italic)
    }

    /// Whether the style is underlined.
    #[must_use]
    pub fn is_underlined(self) -> bool {
        self.has(TextDecoration::Underlined)
    }
}

/// Well-known typography keys, following the Material type scale.
pub mod keys {
    /// Largest display text.
    pub const DISPLAY_LARGE: &str = "displayLarge";
    /// Medium display text.
    pub const DISPLAY_MEDIUM: &str = "displayMedium";
    /// Small display text.
    pub const DISPLAY_SMALL: &str = "displaySmall";
    /// Large headline.
    pub const HEADLINE_LARGE: &str = "headlineLarge";
    /// Medium headline.
    pub const HEADLINE_MEDIUM: &str = "headlineMedium";
    /// Small headline.
    pub const HEADLINE_SMALL: &str = "headlineSmall";
    /// Large title.
    pub const TITLE_LARGE: &str = "titleLarge";
    /// Medium title.
    pub const TITLE_MEDIUM: &str = "titleMedium";
    /// Small title.
    pub const TITLE_SMALL: &str = "titleSmall";
    /// Large body text.
    pub const BODY_LARGE: &str = "bodyLarge";
    /// Medium body text.
    pub const BODY_MEDIUM: &str = "bodyMedium";
    /// Small body text.
    pub const BODY_SMALL: &str = "bodySmall";
    /// Large label (buttons, tags).
    pub const LABEL_LARGE: &str = "labelLarge";
    /// Medium label.
    pub const LABEL_MEDIUM: &str = "labelMedium";
    /// Small label.
    pub const LABEL_SMALL: &str = "labelSmall";
}

/// An immutable, named collection of text styles.
///
/// Structurally parallel to [`crate::ColorScheme`]: built through
/// [`TextThemeBuilder`], at least one style required.
#[derive(Debug, Clone, PartialEq)]
pub struct TextTheme {
    name: String,
    styles: HashMap<String, TextStyle>,
}

impl TextTheme {
    /// Start building a text theme with the given name.
    pub fn builder(name: impl Into<String>) -> TextThemeBuilder {
        TextThemeBuilder::new(name)
    }

    /// The theme's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The style stored under `key`, if any.
    #[must_use]
    pub fn style(&self, key: &str) -> Option<TextStyle> {
        self.styles.get(key).copied()
    }

    /// Number of defined styles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Iterate over `(key, style)` pairs in arbitrary order.
    pub fn styles(&self) -> impl Iterator<Item = (&str, TextStyle)> + '_ {
        self.styles.iter().map(|(key, style)| (key.as_str(), *style))
    }

    /// The `displayLarge` style, if defined.
    #[must_use]
    pub fn display_large(&self) -> Option<TextStyle> {
        self.style(keys::DISPLAY_LARGE)
    }

    /// The `headlineLarge` style, if defined.
    #[must_use]
    pub fn headline_large(&self) -> Option<TextStyle> {
        self.style(keys::HEADLINE_LARGE)
    }

    /// The `titleLarge` style, if defined.
    #[must_use]
    pub fn title_large(&self) -> Option<TextStyle> {
        self.style(keys::TITLE_LARGE)
    }

    /// The `bodyMedium` style, if defined.
    #[must_use]
    pub fn body_medium(&self) -> Option<TextStyle> {
        self.style(keys::BODY_MEDIUM)
    }

    /// The `labelMedium` style, if defined.
    #[must_use]
    pub fn label_medium(&self) -> Option<TextStyle> {
        self.style(keys::LABEL_MEDIUM)
    }
}

/// Builder for [`TextTheme`].
#[derive(Debug, Clone)]
pub struct TextThemeBuilder {
    name: String,
    styles: HashMap<String, TextStyle>,
}

impl TextThemeBuilder {
    /// Create a builder for a theme with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            styles: HashMap::new(),
        }
    }

    /// Store a style under `key`. Last write per key wins.
    #[must_use]
    pub fn style(mut self, key: impl Into<String>, style: TextStyle) -> Self {
        self.styles.insert(key.into(), style);
        self
    }

    /// Freeze the accumulated styles into a [`TextTheme`].
    pub fn build(self) -> Result<TextTheme, TextThemeError> {
        if self.name.trim().is_empty() {
            return Err(TextThemeError::EmptyName);
        }
        if self.styles.is_empty() {
            return Err(TextThemeError::NoStyles);
        }
        Ok(TextTheme {
            name: self.name,
            styles: self.styles,
        })
    }
}

/// Errors raised when freezing a [`TextThemeBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextThemeError {
    /// The theme name was empty or whitespace-only.
    EmptyName,
    /// No style was defined.
    NoStyles,
}

impl fmt::Display for TextThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("text theme name cannot be empty"),
            Self::NoStyles => f.write_str("text theme must define at least one style"),
        }
    }
}

impl std::error::Error for TextThemeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoration_wire_names_round_trip() {
        for decoration in TextDecoration::ALL {
            assert_eq!(
                decoration.as_str().parse::<TextDecoration>().unwrap(),
                decoration
            );
        }
    }

    #[test]
    fn unknown_decoration_fails() {
        let err = "SPARKLY".parse::<TextDecoration>().unwrap_err();
        assert!(err.to_string().contains("SPARKLY"));
    }

    #[test]
    fn style_of_has_no_decorations() {
        let style = TextStyle::of(Color::RED);
        assert_eq!(style.color(), Color::RED);
        assert!(style.decorations().is_empty());
        assert!(!style.is_bold());
    }

    #[test]
    fn style_chained_decorations() {
        let style = TextStyle::of(Color::WHITE).bold().underlined();
        assert!(style.is_bold());
        assert!(style.is_underlined());
        assert!(!style.is_italic());
    }

    #[test]
    fn decorations_collect_from_iterator() {
        let set: Decorations = [TextDecoration::Bold, TextDecoration::Italic]
            .into_iter()
            .collect();
        assert_eq!(set, Decorations::BOLD | Decorations::ITALIC);
    }

    #[test]
    fn theme_builder_collects_styles() {
        let theme = TextTheme::builder("mono")
            .style(keys::BODY_MEDIUM, TextStyle::of(Color::WHITE))
            .style("chatBadge", TextStyle::of(Color::YELLOW).bold())
            .build()
            .unwrap();

        assert_eq!(theme.name(), "mono");
        assert_eq!(theme.len(), 2);
        assert_eq!(theme.body_medium(), Some(TextStyle::of(Color::WHITE)));
        assert!(theme.style("chatBadge").unwrap().is_bold());
        assert_eq!(theme.style("missing"), None);
    }

    #[test]
    fn empty_theme_fails() {
        assert_eq!(
            TextTheme::builder("x").build().unwrap_err(),
            TextThemeError::NoStyles
        );
        assert_eq!(
            TextTheme::builder("  ")
                .style("k", TextStyle::of(Color::RED))
                .build()
                .unwrap_err(),
            TextThemeError::EmptyName
        );
    }

    #[test]
    fn last_write_per_key_wins() {
        let theme = TextTheme::builder("t")
            .style("k", TextStyle::of(Color::RED))
            .style("k", TextStyle::of(Color::BLUE))
            .build()
            .unwrap();
        assert_eq!(theme.style("k").unwrap().color(), Color::BLUE);
    }
}
