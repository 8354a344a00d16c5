//! Built-in color scheme presets.
//!
//! `default_dark` is the scheme every registry falls back to until a
//! caller replaces it.

use crate::color::Color;
use crate::scheme::ColorScheme;

/// The built-in dark scheme, named `default-dark`.
#[must_use]
pub fn default_dark() -> ColorScheme {
    ColorScheme::builder("default-dark")
        .primary(Color::rgb(98, 0, 238)) // Deep purple
        .secondary(Color::rgb(3, 218, 198)) // Teal
        .tertiary(Color::rgb(187, 134, 252)) // Light purple
        .accent(Color::rgb(255, 2, 102)) // Pink
        .background(Color::rgb(18, 18, 18)) // Near black
        .surface(Color::rgb(30, 30, 30)) // Slightly lighter
        .error(Color::rgb(207, 102, 121)) // Soft red
        .success(Color::rgb(76, 175, 80)) // Green
        .warning(Color::rgb(255, 193, 7)) // Amber
        .info(Color::rgb(33, 150, 243)) // Blue
        .text(Color::rgb(255, 255, 255)) // White
        .text_secondary(Color::rgb(176, 176, 176)) // Gray
        .border(Color::rgb(55, 55, 55)) // Dark gray
        .overlay(Color::rgba(0, 0, 0, 128)) // Translucent black
        .build()
        .expect("preset scheme is non-empty")
}

/// The built-in light scheme, named `default-light`.
#[must_use]
pub fn default_light() -> ColorScheme {
    ColorScheme::builder("default-light")
        .primary(Color::rgb(98, 0, 238)) // Deep purple
        .secondary(Color::rgb(1, 135, 134)) // Dark teal
        .tertiary(Color::rgb(123, 31, 162)) // Purple
        .accent(Color::rgb(233, 30, 99)) // Pink
        .background(Color::rgb(255, 255, 255)) // White
        .surface(Color::rgb(245, 245, 245)) // Light gray
        .error(Color::rgb(176, 0, 32)) // Dark red
        .success(Color::rgb(56, 142, 60)) // Green
        .warning(Color::rgb(245, 124, 0)) // Orange
        .info(Color::rgb(25, 118, 210)) // Blue
        .text(Color::rgb(0, 0, 0)) // Black
        .text_secondary(Color::rgb(102, 102, 102)) // Gray
        .border(Color::rgb(224, 224, 224)) // Light gray
        .overlay(Color::rgba(0, 0, 0, 51)) // Faint black
        .build()
        .expect("preset scheme is non-empty")
}

/// A classic 16-color terminal palette, named `classic-term`.
#[must_use]
pub fn classic_term() -> ColorScheme {
    ColorScheme::builder("classic-term")
        .primary(Color::rgb(85, 255, 85)) // Bright green
        .secondary(Color::rgb(85, 85, 255)) // Bright blue
        .tertiary(Color::rgb(255, 255, 85)) // Bright yellow
        .accent(Color::rgb(255, 85, 255)) // Bright magenta
        .background(Color::rgb(0, 0, 0)) // Black
        .surface(Color::rgb(85, 85, 85)) // Dark gray
        .error(Color::rgb(255, 85, 85)) // Bright red
        .success(Color::rgb(85, 255, 85)) // Bright green
        .warning(Color::rgb(255, 170, 0)) // Gold
        .info(Color::rgb(85, 255, 255)) // Bright cyan
        .text(Color::rgb(255, 255, 255)) // White
        .text_secondary(Color::rgb(170, 170, 170)) // Gray
        .border(Color::rgb(85, 85, 85)) // Dark gray
        .overlay(Color::rgba(0, 0, 0, 153)) // Translucent black
        .build()
        .expect("preset scheme is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::ColorRole;

    #[test]
    fn preset_names() {
        assert_eq!(default_dark().name(), "default-dark");
        assert_eq!(default_light().name(), "default-light");
        assert_eq!(classic_term().name(), "classic-term");
    }

    #[test]
    fn presets_define_every_role() {
        for scheme in [default_dark(), default_light(), classic_term()] {
            for role in ColorRole::ALL {
                assert!(
                    scheme.has_color(role),
                    "{} missing {role}",
                    scheme.name()
                );
            }
        }
    }

    #[test]
    fn dark_background_is_dark() {
        let bg = default_dark().background().unwrap();
        assert!(bg.luminance_u8() < 50);
    }

    #[test]
    fn light_background_is_light() {
        let bg = default_light().background().unwrap();
        assert!(bg.luminance_u8() > 200);
    }

    #[test]
    fn overlays_are_translucent() {
        for scheme in [default_dark(), default_light(), classic_term()] {
            let overlay = scheme.color(ColorRole::Overlay).unwrap();
            assert!(overlay.a < 255, "{} overlay is opaque", scheme.name());
        }
    }

    #[test]
    fn dark_and_light_differ() {
        assert_ne!(default_dark(), default_light());
    }
}
