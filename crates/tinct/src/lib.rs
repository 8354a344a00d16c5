#![forbid(unsafe_code)]

//! Tinct public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use tinct::prelude::*;
//!
//! let registry: Arc<SchemeRegistry<u64>> = Arc::new(SchemeRegistry::new());
//!
//! let dark = ColorScheme::builder("app-dark")
//!     .background(Color::rgb(18, 18, 18))
//!     .text(Color::WHITE)
//!     .build()
//!     .unwrap();
//! let light = ColorScheme::builder("app-light")
//!     .background(Color::WHITE)
//!     .text(Color::BLACK)
//!     .build()
//!     .unwrap();
//!
//! registry
//!     .register("app", DarkModeResolver::of_schemes(dark, light, |id: &u64| *id % 2 == 0))
//!     .unwrap();
//!
//! let app = NamespacedRegistry::new(Arc::clone(&registry), "app").unwrap();
//! assert_eq!(app.resolve(&2).unwrap().name(), "app-dark");
//! assert_eq!(app.resolve(&3).unwrap().name(), "app-light");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use tinct_core::presets;
pub use tinct_core::{
    Color, ColorRole, ColorScheme, Decorations, ParseColorError, ParseDecorationError,
    ParseRoleError, SchemeBuilder, SchemeError, TextDecoration, TextStyle, TextTheme,
    TextThemeBuilder, TextThemeError,
};

// --- Registry re-exports ---------------------------------------------------

pub use tinct_registry::{
    DarkModeResolver, NamespacedRegistry, RegistryError, ResolverError, SchemeRegistry,
    SchemeResolver,
};

// --- Loader re-exports -----------------------------------------------------

#[cfg(feature = "loader")]
pub use tinct_loader::{LoadError, load_scheme, load_text_theme, parse_scheme, parse_text_theme};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Color, ColorRole, ColorScheme, DarkModeResolver, NamespacedRegistry, RegistryError,
        SchemeBuilder, SchemeRegistry, SchemeResolver, TextStyle, TextTheme,
    };

    pub use crate::{core, registry};
}

pub use tinct_core as core;
#[cfg(feature = "loader")]
pub use tinct_loader as loader;
pub use tinct_registry as registry;
