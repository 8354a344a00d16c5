//! Semantic color roles.

use std::fmt;
use std::str::FromStr;

/// The semantic slots a color can fill in a scheme.
///
/// This is a closed set; theme documents address roles by the
/// SCREAMING_SNAKE names returned from [`ColorRole::as_str`]. Extending
/// the set is a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ColorRole {
    /// Main brand color.
    Primary,
    /// Complementary brand color.
    Secondary,
    /// Additional accent color.
    Tertiary,
    /// Highlight for important elements.
    Accent,
    /// Main background.
    Background,
    /// Cards, sheets, menus.
    Surface,
    /// Errors and destructive actions.
    Error,
    /// Success states.
    Success,
    /// Warnings and caution states.
    Warning,
    /// Informational states.
    Info,
    /// Primary text.
    Text,
    /// Less prominent text.
    TextSecondary,
    /// Borders and dividers.
    Border,
    /// Overlays and shadows.
    Overlay,
}

impl ColorRole {
    /// Number of roles in the set.
    pub const COUNT: usize = 14;

    /// Every role, in declaration order.
    pub const ALL: [ColorRole; Self::COUNT] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Accent,
        Self::Background,
        Self::Surface,
        Self::Error,
        Self::Success,
        Self::Warning,
        Self::Info,
        Self::Text,
        Self::TextSecondary,
        Self::Border,
        Self::Overlay,
    ];

    /// The stable wire name used in theme documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Secondary => "SECONDARY",
            Self::Tertiary => "TERTIARY",
            Self::Accent => "ACCENT",
            Self::Background => "BACKGROUND",
            Self::Surface => "SURFACE",
            Self::Error => "ERROR",
            Self::Success => "SUCCESS",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Text => "TEXT",
            Self::TextSecondary => "TEXT_SECONDARY",
            Self::Border => "BORDER",
            Self::Overlay => "OVERLAY",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorRole {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseRoleError(s.to_string()))
    }
}

/// Error for a role name that is not part of the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(pub String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color role: {}", self.0)
    }
}

impl std::error::Error for ParseRoleError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_covers_every_role_once() {
        assert_eq!(ColorRole::ALL.len(), ColorRole::COUNT);
        for (i, role) in ColorRole::ALL.into_iter().enumerate() {
            assert_eq!(role.index(), i);
        }
    }

    #[test]
    fn wire_names_round_trip() {
        for role in ColorRole::ALL {
            assert_eq!(role.as_str().parse::<ColorRole>().unwrap(), role);
        }
    }

    #[test]
    fn unknown_name_fails() {
        let err = "SPARKLE".parse::<ColorRole>().unwrap_err();
        assert_eq!(err, ParseRoleError("SPARKLE".to_string()));
        assert!(err.to_string().contains("SPARKLE"));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("primary".parse::<ColorRole>().is_err());
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(ColorRole::TextSecondary.to_string(), "TEXT_SECONDARY");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&ColorRole::TextSecondary).unwrap();
        assert_eq!(json, "\"TEXT_SECONDARY\"");
        let back: ColorRole = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ColorRole::TextSecondary);
    }
}
