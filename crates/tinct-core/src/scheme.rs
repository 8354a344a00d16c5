//! Named color schemes with semantic role slots.
//!
//! A [`ColorScheme`] maps a subset of the [`ColorRole`] slots to concrete
//! colors. Schemes are immutable once built and are only created through
//! [`SchemeBuilder`], which rejects empty schemes.
//!
//! # Example
//! ```
//! use tinct_core::{Color, ColorRole, ColorScheme};
//!
//! let scheme = ColorScheme::builder("ocean")
//!     .primary(Color::rgb(0, 119, 190))
//!     .background(Color::rgb(10, 25, 41))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(scheme.name(), "ocean");
//! assert!(scheme.has_color(ColorRole::Primary));
//! assert_eq!(scheme.color(ColorRole::Error), None);
//! ```

use std::fmt;

use crate::color::Color;
use crate::role::ColorRole;

/// An immutable, named, partial mapping from [`ColorRole`] to [`Color`].
///
/// Invariant: at least one role is defined and the name is non-blank.
/// Roles are stored in a fixed array indexed by role, so lookups are
/// constant-time and equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorScheme {
    name: String,
    colors: [Option<Color>; ColorRole::COUNT],
}

impl ColorScheme {
    /// Start building a scheme with the given name.
    pub fn builder(name: impl Into<String>) -> SchemeBuilder {
        SchemeBuilder::new(name)
    }

    /// The scheme's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color for `role`, if defined.
    #[must_use]
    pub fn color(&self, role: ColorRole) -> Option<Color> {
        self.colors[role.index()]
    }

    /// Check whether `role` is defined.
    #[must_use]
    pub fn has_color(&self, role: ColorRole) -> bool {
        self.colors[role.index()].is_some()
    }

    /// Iterate over the defined roles in declaration order.
    pub fn defined_roles(&self) -> impl Iterator<Item = ColorRole> + '_ {
        ColorRole::ALL
            .into_iter()
            .filter(|role| self.has_color(*role))
    }

    /// Iterate over the defined `(role, color)` pairs in declaration order.
    pub fn colors(&self) -> impl Iterator<Item = (ColorRole, Color)> + '_ {
        ColorRole::ALL
            .into_iter()
            .filter_map(|role| self.color(role).map(|color| (role, color)))
    }

    /// Number of defined roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.iter().filter(|slot| slot.is_some()).count()
    }

    /// The primary color, if defined.
    #[must_use]
    pub fn primary(&self) -> Option<Color> {
        self.color(ColorRole::Primary)
    }

    /// The secondary color, if defined.
    #[must_use]
    pub fn secondary(&self) -> Option<Color> {
        self.color(ColorRole::Secondary)
    }

    /// The accent color, if defined.
    #[must_use]
    pub fn accent(&self) -> Option<Color> {
        self.color(ColorRole::Accent)
    }

    /// The background color, if defined.
    #[must_use]
    pub fn background(&self) -> Option<Color> {
        self.color(ColorRole::Background)
    }

    /// The text color, if defined.
    #[must_use]
    pub fn text(&self) -> Option<Color> {
        self.color(ColorRole::Text)
    }

    /// The error color, if defined.
    #[must_use]
    pub fn error(&self) -> Option<Color> {
        self.color(ColorRole::Error)
    }

    /// The success color, if defined.
    #[must_use]
    pub fn success(&self) -> Option<Color> {
        self.color(ColorRole::Success)
    }

    /// The warning color, if defined.
    #[must_use]
    pub fn warning(&self) -> Option<Color> {
        self.color(ColorRole::Warning)
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} colors)", self.name, self.len())
    }
}

/// Builder for [`ColorScheme`].
///
/// Accumulates role→color pairs; setting the same role twice keeps the
/// last value. [`SchemeBuilder::build`] fails if nothing was set.
#[derive(Debug, Clone)]
pub struct SchemeBuilder {
    name: String,
    colors: [Option<Color>; ColorRole::COUNT],
}

impl SchemeBuilder {
    /// Create a builder for a scheme with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colors: [None; ColorRole::COUNT],
        }
    }

    /// Set the color for an arbitrary role. Last write per role wins.
    pub fn set(mut self, role: ColorRole, color: Color) -> Self {
        self.colors[role.index()] = Some(color);
        self
    }

    /// Set the primary color.
    pub fn primary(self, color: Color) -> Self {
        self.set(ColorRole::Primary, color)
    }

    /// Set the secondary color.
    pub fn secondary(self, color: Color) -> Self {
        self.set(ColorRole::Secondary, color)
    }

    /// Set the tertiary color.
    pub fn tertiary(self, color: Color) -> Self {
        self.set(ColorRole::Tertiary, color)
    }

    /// Set the accent color.
    pub fn accent(self, color: Color) -> Self {
        self.set(ColorRole::Accent, color)
    }

    /// Set the background color.
    pub fn background(self, color: Color) -> Self {
        self.set(ColorRole::Background, color)
    }

    /// Set the surface color.
    pub fn surface(self, color: Color) -> Self {
        self.set(ColorRole::Surface, color)
    }

    /// Set the error color.
    pub fn error(self, color: Color) -> Self {
        self.set(ColorRole::Error, color)
    }

    /// Set the success color.
    pub fn success(self, color: Color) -> Self {
        self.set(ColorRole::Success, color)
    }

    /// Set the warning color.
    pub fn warning(self, color: Color) -> Self {
        self.set(ColorRole::Warning, color)
    }

    /// Set the info color.
    pub fn info(self, color: Color) -> Self {
        self.set(ColorRole::Info, color)
    }

    /// Set the text color.
    pub fn text(self, color: Color) -> Self {
        self.set(ColorRole::Text, color)
    }

    /// Set the secondary text color.
    pub fn text_secondary(self, color: Color) -> Self {
        self.set(ColorRole::TextSecondary, color)
    }

    /// Set the border color.
    pub fn border(self, color: Color) -> Self {
        self.set(ColorRole::Border, color)
    }

    /// Set the overlay color.
    pub fn overlay(self, color: Color) -> Self {
        self.set(ColorRole::Overlay, color)
    }

    /// Freeze the accumulated colors into a [`ColorScheme`].
    ///
    /// Fails with [`SchemeError::EmptyName`] when the name is blank and
    /// [`SchemeError::NoColors`] when no role was ever set.
    pub fn build(self) -> Result<ColorScheme, SchemeError> {
        if self.name.trim().is_empty() {
            return Err(SchemeError::EmptyName);
        }
        if self.colors.iter().all(|slot| slot.is_none()) {
            return Err(SchemeError::NoColors);
        }
        Ok(ColorScheme {
            name: self.name,
            colors: self.colors,
        })
    }
}

/// Errors raised when freezing a [`SchemeBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeError {
    /// The scheme name was empty or whitespace-only.
    EmptyName,
    /// No color was set for any role.
    NoColors,
}

impl fmt::Display for SchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => f.write_str("color scheme name cannot be empty"),
            Self::NoColors => f.write_str("color scheme must define at least one color"),
        }
    }
}

impl std::error::Error for SchemeError {}
