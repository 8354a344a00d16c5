//! The namespaced scheme-resolution registry.
//!
//! A [`SchemeRegistry`] lets independent modules register resolution
//! logic under their own namespace and lets callers resolve a scheme for
//! a context within a namespace. Resolution falls through a three-tier
//! priority chain: registered resolver, per-context override, global
//! default.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use tinct_core::{Color, ColorScheme};
//! use tinct_registry::SchemeRegistry;
//!
//! let registry: SchemeRegistry<u64> = SchemeRegistry::new();
//!
//! // No registrations yet: every namespace falls back to the default.
//! assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "default-dark");
//!
//! // A module claims its namespace with a fixed scheme.
//! let neon = Arc::new(
//!     ColorScheme::builder("neon")
//!         .primary(Color::rgb(57, 255, 20))
//!         .build()
//!         .unwrap(),
//! );
//! registry.register("chat", neon).unwrap();
//! assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "neon");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use dashmap::DashMap;
use tracing::{debug, trace};

use tinct_core::{ColorScheme, presets};

use crate::resolver::{ResolverError, SchemeResolver};

/// Errors raised by [`SchemeRegistry`] operations.
#[derive(Debug)]
pub enum RegistryError {
    /// A namespace argument was empty or whitespace-only.
    EmptyNamespace,
    /// A resolver is already registered for the namespace. The existing
    /// registration is left untouched.
    AlreadyRegistered {
        /// The contested namespace.
        namespace: String,
    },
    /// A registered resolver failed. The underlying error is carried
    /// unchanged and available through [`std::error::Error::source`].
    Resolver(ResolverError),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyNamespace => f.write_str("namespace cannot be empty"),
            Self::AlreadyRegistered { namespace } => {
                write!(f, "a resolver is already registered for namespace '{namespace}'")
            }
            Self::Resolver(err) => write!(f, "scheme resolver failed: {err}"),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resolver(err) => Some(&**err),
            _ => None,
        }
    }
}

/// Resolver table and default scheme, guarded together by one
/// reader-writer lock so a `register` concurrent with a `resolve` is
/// observed atomically as entirely-before or entirely-after.
struct Shared<C> {
    resolvers: HashMap<String, Arc<dyn SchemeResolver<C>>, ahash::RandomState>,
    default_scheme: Arc<ColorScheme>,
}

/// Thread-safe, namespace-partitioned scheme resolution.
///
/// Construct one registry at process start and share it as
/// `Arc<SchemeRegistry<C>>`; there is deliberately no global instance.
/// `C` is the opaque context type schemes are resolved for (a user id, a
/// session handle) and doubles as the override-table key.
///
/// Readers (`resolve`, `is_registered`, `registered_namespaces`,
/// `default_scheme`) run concurrently under the read lock; writers
/// (`register`, `unregister`, `set_default_scheme`, `reset`) serialize
/// against everything. Override tables are concurrent maps mutated
/// without the main lock, matching their weaker atomicity needs.
pub struct SchemeRegistry<C>
where
    C: Clone + Eq + Hash + Send + Sync + 'static,
{
    shared: RwLock<Shared<C>>,
    overrides: DashMap<String, DashMap<C, Arc<ColorScheme>>>,
}

impl<C> SchemeRegistry<C>
where
    C: Clone + Eq + Hash + Send + Sync + 'static,
{
    /// Create a registry whose default scheme is the built-in
    /// `default-dark` preset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shared: RwLock::new(Shared {
                resolvers: HashMap::default(),
                default_scheme: Arc::new(presets::default_dark()),
            }),
            overrides: DashMap::new(),
        }
    }

    /// Register `resolver` for `namespace`.
    ///
    /// Fails with [`RegistryError::AlreadyRegistered`] when the namespace
    /// is occupied — there is no silent replacement, so two unrelated
    /// modules cannot clobber one another's resolution logic. On failure
    /// the existing registration is unchanged.
    pub fn register(
        &self,
        namespace: impl Into<String>,
        resolver: impl SchemeResolver<C> + 'static,
    ) -> Result<(), RegistryError> {
        let namespace = namespace.into();
        validate_namespace(&namespace)?;

        let mut shared = self.shared.write().expect("registry lock poisoned");
        if shared.resolvers.contains_key(&namespace) {
            return Err(RegistryError::AlreadyRegistered { namespace });
        }
        debug!(namespace = %namespace, "registered scheme resolver");
        shared.resolvers.insert(namespace, Arc::new(resolver));
        Ok(())
    }

    /// Remove the resolver for `namespace`, if any.
    ///
    /// Silently succeeds when nothing was registered. Afterwards the
    /// namespace reverts to override/default resolution, including any
    /// overrides that lay dormant while the resolver was in place.
    pub fn unregister(&self, namespace: &str) {
        let mut shared = self.shared.write().expect("registry lock poisoned");
        if shared.resolvers.remove(namespace).is_some() {
            debug!(namespace, "unregistered scheme resolver");
        }
    }

    /// Resolve the scheme for `context` within `namespace`.
    ///
    /// Priority, first match wins:
    /// 1. the registered resolver, invoked with `context` — its failure
    ///    propagates as [`RegistryError::Resolver`] with no fallback;
    /// 2. an override stored for `(context, namespace)`;
    /// 3. the current global default scheme.
    ///
    /// Always yields a scheme unless it fails.
    pub fn resolve(&self, context: &C, namespace: &str) -> Result<Arc<ColorScheme>, RegistryError> {
        validate_namespace(namespace)?;

        let shared = self.shared.read().expect("registry lock poisoned");

        if let Some(resolver) = shared.resolvers.get(namespace) {
            return resolver.resolve(context).map_err(RegistryError::Resolver);
        }

        if let Some(table) = self.overrides.get(namespace)
            && let Some(scheme) = table.get(context)
        {
            return Ok(Arc::clone(&scheme));
        }

        trace!(namespace, "no resolver or override, falling back to default scheme");
        Ok(Arc::clone(&shared.default_scheme))
    }

    /// Store an override scheme for `(context, namespace)`.
    ///
    /// Overrides only take effect while no resolver is registered for the
    /// namespace; a later registration shadows them without deleting
    /// them.
    pub fn set_scheme(
        &self,
        context: C,
        scheme: impl Into<Arc<ColorScheme>>,
        namespace: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let namespace = namespace.into();
        validate_namespace(&namespace)?;
        self.overrides
            .entry(namespace)
            .or_default()
            .insert(context, scheme.into());
        Ok(())
    }

    /// Remove the override for `(context, namespace)`. Silently succeeds
    /// when none exists.
    pub fn remove_scheme(&self, context: &C, namespace: &str) {
        if let Some(table) = self.overrides.get(namespace) {
            table.remove(context);
        }
    }

    /// Drop every override stored under `namespace`. Silently succeeds
    /// when the namespace holds none.
    pub fn clear_namespace(&self, namespace: &str) {
        if let Some(table) = self.overrides.get(namespace) {
            table.clear();
        }
    }

    /// Drop every override in every namespace.
    pub fn clear_all(&self) {
        self.overrides.clear();
    }

    /// Replace the global default scheme used when neither a resolver
    /// nor an override applies. Takes effect process-wide immediately.
    pub fn set_default_scheme(&self, scheme: impl Into<Arc<ColorScheme>>) {
        let scheme = scheme.into();
        let mut shared = self.shared.write().expect("registry lock poisoned");
        debug!(scheme = %scheme.name(), "replaced default color scheme");
        shared.default_scheme = scheme;
    }

    /// The current global default scheme.
    #[must_use]
    pub fn default_scheme(&self) -> Arc<ColorScheme> {
        let shared = self.shared.read().expect("registry lock poisoned");
        Arc::clone(&shared.default_scheme)
    }

    /// Whether a resolver is registered for `namespace`.
    #[must_use]
    pub fn is_registered(&self, namespace: &str) -> bool {
        let shared = self.shared.read().expect("registry lock poisoned");
        shared.resolvers.contains_key(namespace)
    }

    /// The registered namespaces, sorted.
    #[must_use]
    pub fn registered_namespaces(&self) -> Vec<String> {
        let shared = self.shared.read().expect("registry lock poisoned");
        let mut namespaces: Vec<String> = shared.resolvers.keys().cloned().collect();
        namespaces.sort();
        namespaces
    }

    /// Restore the initial state: no resolvers, no overrides, built-in
    /// default scheme. Intended for test isolation; safe to call
    /// concurrently with every other operation.
    pub fn reset(&self) {
        let mut shared = self.shared.write().expect("registry lock poisoned");
        shared.resolvers.clear();
        shared.default_scheme = Arc::new(presets::default_dark());
        self.overrides.clear();
        debug!("registry reset to initial state");
    }
}

impl<C> Default for SchemeRegistry<C>
where
    C: Clone + Eq + Hash + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for SchemeRegistry<C>
where
    C: Clone + Eq + Hash + Send + Sync + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeRegistry")
            .field("namespaces", &self.registered_namespaces())
            .finish_non_exhaustive()
    }
}

fn validate_namespace(namespace: &str) -> Result<(), RegistryError> {
    if namespace.trim().is_empty() {
        return Err(RegistryError::EmptyNamespace);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::DarkModeResolver;
    use tinct_core::Color;

    fn scheme(name: &str) -> Arc<ColorScheme> {
        Arc::new(
            ColorScheme::builder(name)
                .primary(Color::RED)
                .build()
                .unwrap(),
        )
    }

    // --- Fallback chain ---

    #[test]
    fn fresh_registry_resolves_default() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        let resolved = registry.resolve(&1, "anything").unwrap();
        assert_eq!(resolved.name(), "default-dark");
    }

    #[test]
    fn resolver_wins_for_every_context() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.register("chat", scheme("neon")).unwrap();
        for context in 0..10 {
            assert_eq!(registry.resolve(&context, "chat").unwrap().name(), "neon");
        }
    }

    #[test]
    fn resolver_beats_override() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.set_scheme(1, scheme("override"), "chat").unwrap();
        registry.register("chat", scheme("resolver")).unwrap();
        assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "resolver");
    }

    #[test]
    fn override_applies_without_resolver() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.set_scheme(1, scheme("custom"), "chat").unwrap();

        assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "custom");
        // Other contexts and namespaces still fall through
        assert_eq!(registry.resolve(&2, "chat").unwrap().name(), "default-dark");
        assert_eq!(registry.resolve(&1, "board").unwrap().name(), "default-dark");
    }

    #[test]
    fn remove_scheme_reverts_to_default() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.set_scheme(1, scheme("custom"), "chat").unwrap();
        registry.remove_scheme(&1, "chat");
        assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "default-dark");
    }

    #[test]
    fn dormant_override_resurfaces_after_unregister() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.set_scheme(1, scheme("stored"), "chat").unwrap();
        registry.register("chat", scheme("live")).unwrap();
        assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "live");

        registry.unregister("chat");
        assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "stored");
    }

    #[test]
    fn namespaces_are_isolated() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.register("chat", scheme("chat-theme")).unwrap();
        registry.register("board", scheme("board-theme")).unwrap();

        assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "chat-theme");
        assert_eq!(registry.resolve(&1, "board").unwrap().name(), "board-theme");
        assert_eq!(registry.resolve(&1, "other").unwrap().name(), "default-dark");
    }

    // --- Registration conflicts ---

    #[test]
    fn duplicate_registration_fails_and_keeps_first() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.register("chat", scheme("first")).unwrap();

        let err = registry.register("chat", scheme("second")).unwrap_err();
        match err {
            RegistryError::AlreadyRegistered { namespace } => assert_eq!(namespace, "chat"),
            other => panic!("unexpected error: {other:?}"),
        }

        assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "first");
    }

    #[test]
    fn conflict_message_names_the_namespace() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.register("chat", scheme("first")).unwrap();
        let err = registry.register("chat", scheme("second")).unwrap_err();
        assert!(err.to_string().contains("chat"));
    }

    #[test]
    fn reregistration_allowed_after_unregister() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.register("chat", scheme("first")).unwrap();
        registry.unregister("chat");
        registry.register("chat", scheme("second")).unwrap();
        assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "second");
    }

    #[test]
    fn unregister_absent_namespace_is_noop() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.unregister("never-registered");
    }

    // --- Validation ---

    #[test]
    fn blank_namespaces_are_rejected() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();

        assert!(matches!(
            registry.register("", scheme("x")),
            Err(RegistryError::EmptyNamespace)
        ));
        assert!(matches!(
            registry.register("   ", scheme("x")),
            Err(RegistryError::EmptyNamespace)
        ));
        assert!(matches!(
            registry.resolve(&1, ""),
            Err(RegistryError::EmptyNamespace)
        ));
        assert!(matches!(
            registry.set_scheme(1, scheme("x"), "  "),
            Err(RegistryError::EmptyNamespace)
        ));
    }

    // --- Default scheme ---

    #[test]
    fn set_default_scheme_takes_effect_everywhere() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.set_default_scheme(scheme("corporate"));

        assert_eq!(registry.default_scheme().name(), "corporate");
        assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "corporate");
        assert_eq!(registry.resolve(&9, "board").unwrap().name(), "corporate");
    }

    #[test]
    fn default_scheme_starts_as_builtin_dark() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        assert_eq!(registry.default_scheme().name(), "default-dark");
    }

    // --- Bulk clears ---

    #[test]
    fn clear_namespace_scopes_to_one_namespace() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.set_scheme(1, scheme("a"), "chat").unwrap();
        registry.set_scheme(1, scheme("b"), "board").unwrap();

        registry.clear_namespace("chat");

        assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "default-dark");
        assert_eq!(registry.resolve(&1, "board").unwrap().name(), "b");
    }

    #[test]
    fn clear_all_drops_every_override() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.set_scheme(1, scheme("a"), "chat").unwrap();
        registry.set_scheme(2, scheme("b"), "board").unwrap();

        registry.clear_all();

        assert_eq!(registry.resolve(&1, "chat").unwrap().name(), "default-dark");
        assert_eq!(registry.resolve(&2, "board").unwrap().name(), "default-dark");
    }

    #[test]
    fn clears_on_empty_registry_are_noops() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.clear_namespace("nothing");
        registry.clear_all();
    }

    // --- Introspection ---

    #[test]
    fn introspection_reports_registrations() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        assert!(!registry.is_registered("chat"));
        assert!(registry.registered_namespaces().is_empty());

        registry.register("chat", scheme("x")).unwrap();
        registry.register("board", scheme("y")).unwrap();

        assert!(registry.is_registered("chat"));
        assert!(!registry.is_registered("profile"));
        assert_eq!(registry.registered_namespaces(), vec!["board", "chat"]);
    }

    // --- Reset ---

    #[test]
    fn reset_restores_initial_state() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.register("chat", scheme("x")).unwrap();
        registry.set_scheme(1, scheme("y"), "board").unwrap();
        registry.set_default_scheme(scheme("custom-default"));

        registry.reset();

        assert!(!registry.is_registered("chat"));
        assert_eq!(registry.default_scheme().name(), "default-dark");
        assert_eq!(registry.resolve(&1, "board").unwrap().name(), "default-dark");
        // The namespace is claimable again
        registry.register("chat", scheme("fresh")).unwrap();
    }

    // --- Resolver failures ---

    #[test]
    fn resolver_errors_propagate_unchanged() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry
            .register("chat", |_: &u64| -> Result<Arc<ColorScheme>, crate::ResolverError> {
                Err("preference store offline".into())
            })
            .unwrap();

        let err = registry.resolve(&1, "chat").unwrap_err();
        match &err {
            RegistryError::Resolver(source) => {
                assert_eq!(source.to_string(), "preference store offline");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        // Source chain is preserved for callers that walk it
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "preference store offline");
    }

    #[test]
    fn resolver_error_does_not_fall_back_to_default() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry.set_scheme(1, scheme("override"), "chat").unwrap();
        registry
            .register("chat", |_: &u64| -> Result<Arc<ColorScheme>, crate::ResolverError> {
                Err("boom".into())
            })
            .unwrap();

        // Neither the override nor the default masks the failure
        assert!(registry.resolve(&1, "chat").is_err());
    }

    // --- Dark/light composition scenario ---

    #[test]
    fn dark_mode_composition_resolves_dark_variant() {
        let registry: SchemeRegistry<u64> = SchemeRegistry::new();
        registry
            .register(
                "chat",
                DarkModeResolver::of_schemes(
                    ColorScheme::builder("rainbow-dark")
                        .primary(Color::MAGENTA)
                        .build()
                        .unwrap(),
                    ColorScheme::builder("rainbow-light")
                        .primary(Color::YELLOW)
                        .build()
                        .unwrap(),
                    |_: &u64| true,
                ),
            )
            .unwrap();

        assert_eq!(registry.resolve(&7, "chat").unwrap().name(), "rainbow-dark");
        assert_eq!(registry.resolve(&99, "chat").unwrap().name(), "rainbow-dark");
    }

    // --- Concurrency ---

    #[test]
    fn concurrent_resolves_observe_consistent_state() {
        use std::thread;

        let registry: Arc<SchemeRegistry<u64>> = Arc::new(SchemeRegistry::new());
        registry
            .register("chat", |context: &u64| -> Result<Arc<ColorScheme>, crate::ResolverError> {
                Ok(Arc::new(
                    ColorScheme::builder(format!("user-{context}"))
                        .primary(Color::RED)
                        .build()
                        .unwrap(),
                ))
            })
            .unwrap();

        let handles: Vec<_> = (0..8)
            .map(|context| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let resolved = registry.resolve(&context, "chat").unwrap();
                        // Each caller sees exactly its own context reflected back
                        assert_eq!(resolved.name(), format!("user-{context}"));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn concurrent_mutation_and_resolution_never_panics() {
        use std::thread;

        let registry: Arc<SchemeRegistry<u64>> = Arc::new(SchemeRegistry::new());

        let readers: Vec<_> = (0..4)
            .map(|context| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    for _ in 0..300 {
                        // Always a scheme: either a registered result or a fallback
                        let resolved = registry.resolve(&context, "flux").unwrap();
                        assert!(!resolved.name().is_empty());
                    }
                })
            })
            .collect();

        let writer = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for round in 0..50 {
                    let _ = registry.register("flux", scheme(&format!("round-{round}")));
                    registry.set_scheme(round, scheme("stored"), "flux").unwrap();
                    registry.unregister("flux");
                    if round % 10 == 0 {
                        registry.reset();
                    }
                }
            })
        };

        for handle in readers {
            handle.join().unwrap();
        }
        writer.join().unwrap();
    }
}
