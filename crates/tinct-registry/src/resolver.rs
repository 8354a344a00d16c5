//! The scheme-resolution capability and resolver combinators.

use std::sync::Arc;

use tinct_core::ColorScheme;

/// Error type a resolver may surface. The registry propagates these to
/// the caller unchanged; it never retries or falls back on resolver
/// failure.
pub type ResolverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Computes the [`ColorScheme`] for a context.
///
/// A resolver is registered under exactly one namespace and is expected
/// to be fast and non-blocking; the registry invokes it while holding
/// its read lock.
pub trait SchemeResolver<C>: Send + Sync {
    /// Resolve a scheme for `context`.
    fn resolve(&self, context: &C) -> Result<Arc<ColorScheme>, ResolverError>;
}

impl<C, F> SchemeResolver<C> for F
where
    F: Fn(&C) -> Result<Arc<ColorScheme>, ResolverError> + Send + Sync,
{
    fn resolve(&self, context: &C) -> Result<Arc<ColorScheme>, ResolverError> {
        self(context)
    }
}

/// A scheme used directly as a fixed resolver: it resolves to itself for
/// every context.
impl<C> SchemeResolver<C> for Arc<ColorScheme> {
    fn resolve(&self, _context: &C) -> Result<Arc<ColorScheme>, ResolverError> {
        Ok(Arc::clone(self))
    }
}

/// A resolver that picks between a dark and a light sub-resolver based
/// on a per-context predicate.
///
/// The predicate is evaluated once per [`resolve`](SchemeResolver::resolve)
/// call; the chosen sub-resolver then handles the context entirely.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tinct_core::{Color, ColorScheme};
/// use tinct_registry::{DarkModeResolver, SchemeResolver};
///
/// struct User {
///     dark_mode: bool,
/// }
///
/// let dark = ColorScheme::builder("chat-dark")
///     .background(Color::BLACK)
///     .build()
///     .unwrap();
/// let light = ColorScheme::builder("chat-light")
///     .background(Color::WHITE)
///     .build()
///     .unwrap();
///
/// let resolver = DarkModeResolver::of_schemes(dark, light, |user: &User| user.dark_mode);
/// let scheme = resolver.resolve(&User { dark_mode: true }).unwrap();
/// assert_eq!(scheme.name(), "chat-dark");
/// ```
pub struct DarkModeResolver<C> {
    dark: Arc<dyn SchemeResolver<C>>,
    light: Arc<dyn SchemeResolver<C>>,
    is_dark: Box<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> DarkModeResolver<C> {
    /// Compose two resolvers behind a dark-mode predicate.
    pub fn new(
        dark: impl SchemeResolver<C> + 'static,
        light: impl SchemeResolver<C> + 'static,
        is_dark: impl Fn(&C) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            dark: Arc::new(dark),
            light: Arc::new(light),
            is_dark: Box::new(is_dark),
        }
    }

    /// Compose two fixed schemes behind a dark-mode predicate.
    pub fn of_schemes(
        dark: impl Into<Arc<ColorScheme>>,
        light: impl Into<Arc<ColorScheme>>,
        is_dark: impl Fn(&C) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::new(dark.into(), light.into(), is_dark)
    }
}

impl<C> SchemeResolver<C> for DarkModeResolver<C>
where
    C: Send + Sync,
{
    fn resolve(&self, context: &C) -> Result<Arc<ColorScheme>, ResolverError> {
        if (self.is_dark)(context) {
            self.dark.resolve(context)
        } else {
            self.light.resolve(context)
        }
    }
}

impl<C> std::fmt::Debug for DarkModeResolver<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DarkModeResolver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinct_core::Color;

    fn scheme(name: &str) -> ColorScheme {
        ColorScheme::builder(name)
            .primary(Color::RED)
            .build()
            .unwrap()
    }

    #[test]
    fn fixed_scheme_resolves_to_itself() {
        let fixed = Arc::new(scheme("fixed"));
        let resolved = SchemeResolver::<u32>::resolve(&fixed, &7).unwrap();
        assert_eq!(resolved.name(), "fixed");
        assert!(Arc::ptr_eq(&fixed, &resolved));
    }

    #[test]
    fn closure_resolver_receives_context() {
        let resolver = |context: &u32| -> Result<Arc<ColorScheme>, ResolverError> {
            Ok(Arc::new(scheme(&format!("user-{context}"))))
        };
        assert_eq!(resolver.resolve(&42).unwrap().name(), "user-42");
    }

    #[test]
    fn dark_predicate_picks_dark() {
        let resolver =
            DarkModeResolver::of_schemes(scheme("dark"), scheme("light"), |_: &u32| true);
        assert_eq!(resolver.resolve(&0).unwrap().name(), "dark");
    }

    #[test]
    fn light_predicate_picks_light() {
        let resolver =
            DarkModeResolver::of_schemes(scheme("dark"), scheme("light"), |_: &u32| false);
        assert_eq!(resolver.resolve(&0).unwrap().name(), "light");
    }

    #[test]
    fn predicate_reads_context_per_call() {
        let resolver = DarkModeResolver::of_schemes(
            scheme("dark"),
            scheme("light"),
            |context: &u32| *context % 2 == 0,
        );
        assert_eq!(resolver.resolve(&2).unwrap().name(), "dark");
        assert_eq!(resolver.resolve(&3).unwrap().name(), "light");
    }

    #[test]
    fn composes_dynamic_sub_resolvers() {
        let dark = |context: &u32| -> Result<Arc<ColorScheme>, ResolverError> {
            Ok(Arc::new(scheme(&format!("dark-{context}"))))
        };
        let light = |context: &u32| -> Result<Arc<ColorScheme>, ResolverError> {
            Ok(Arc::new(scheme(&format!("light-{context}"))))
        };
        let resolver = DarkModeResolver::new(dark, light, |context: &u32| *context > 10);
        assert_eq!(resolver.resolve(&20).unwrap().name(), "dark-20");
        assert_eq!(resolver.resolve(&5).unwrap().name(), "light-5");
    }

    #[test]
    fn sub_resolver_errors_pass_through() {
        let failing = |_: &u32| -> Result<Arc<ColorScheme>, ResolverError> {
            Err("preference store offline".into())
        };
        let resolver = DarkModeResolver::new(failing, Arc::new(scheme("light")), |_: &u32| true);
        let err = resolver.resolve(&1).unwrap_err();
        assert_eq!(err.to_string(), "preference store offline");
    }
}
