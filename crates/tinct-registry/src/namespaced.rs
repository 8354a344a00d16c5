//! Namespace-bound registry handle.

use std::hash::Hash;
use std::sync::Arc;

use tinct_core::ColorScheme;

use crate::registry::{RegistryError, SchemeRegistry};

/// A lightweight handle pinning one namespace of a [`SchemeRegistry`],
/// so call sites stop repeating the namespace argument.
///
/// The handle holds no state beyond the namespace string and a shared
/// reference to the registry; any number of handles may bind the same
/// namespace.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use tinct_registry::{NamespacedRegistry, SchemeRegistry};
///
/// let registry: Arc<SchemeRegistry<u64>> = Arc::new(SchemeRegistry::new());
/// let chat = NamespacedRegistry::new(Arc::clone(&registry), "chat").unwrap();
///
/// assert_eq!(chat.namespace(), "chat");
/// assert_eq!(chat.resolve(&1).unwrap().name(), "default-dark");
/// ```
#[derive(Debug, Clone)]
pub struct NamespacedRegistry<C>
where
    C: Clone + Eq + Hash + Send + Sync + 'static,
{
    registry: Arc<SchemeRegistry<C>>,
    namespace: String,
}

impl<C> NamespacedRegistry<C>
where
    C: Clone + Eq + Hash + Send + Sync + 'static,
{
    /// Bind `namespace` over `registry`. Fails on a blank namespace.
    pub fn new(
        registry: Arc<SchemeRegistry<C>>,
        namespace: impl Into<String>,
    ) -> Result<Self, RegistryError> {
        let namespace = namespace.into();
        if namespace.trim().is_empty() {
            return Err(RegistryError::EmptyNamespace);
        }
        Ok(Self {
            registry,
            namespace,
        })
    }

    /// The namespace this handle is bound to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resolve the scheme for `context` within the bound namespace.
    ///
    /// Sugar for [`SchemeRegistry::resolve`].
    pub fn resolve(&self, context: &C) -> Result<Arc<ColorScheme>, RegistryError> {
        self.registry.resolve(context, &self.namespace)
    }

    /// Whether a resolver is registered for the bound namespace.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.registry.is_registered(&self.namespace)
    }
}
