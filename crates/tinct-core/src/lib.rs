#![forbid(unsafe_code)]

//! Color, role, scheme, and text-style primitives for Tinct.
//!
//! # Role in Tinct
//! `tinct-core` is the shared vocabulary for colors and themes. The
//! registry, loader, and consumers exchange these types without dragging
//! in locking or I/O dependencies.
//!
//! # This crate provides
//! - [`Color`] — immutable RGBA values with hex/HSL/packed conversions
//!   and blend operations.
//! - [`ColorRole`] — the closed set of semantic slots a scheme can fill.
//! - [`ColorScheme`] and [`SchemeBuilder`] — named partial role→color
//!   mappings, immutable once built.
//! - [`TextStyle`] and [`TextTheme`] — typography styles, structurally
//!   parallel to color schemes.
//! - [`presets`] — the built-in `default-dark`/`default-light`/
//!   `classic-term` schemes.
//!
//! # How it fits in the system
//! `tinct-registry` stores and resolves `ColorScheme` values per
//! namespace, and `tinct-loader` produces them from JSON documents. All
//! types here are immutable and freely shareable across threads.

/// Color values and conversions.
pub mod color;
/// Built-in scheme presets.
pub mod presets;
/// Semantic color roles.
pub mod role;
/// Named color schemes and their builder.
pub mod scheme;
/// Text styles and typography themes.
pub mod text;

pub use color::{Color, ParseColorError};
pub use role::{ColorRole, ParseRoleError};
pub use scheme::{ColorScheme, SchemeBuilder, SchemeError};
pub use text::{
    Decorations, ParseDecorationError, TextDecoration, TextStyle, TextTheme, TextThemeBuilder,
    TextThemeError,
};
