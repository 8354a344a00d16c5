#![forbid(unsafe_code)]

//! Namespaced color-scheme resolution for Tinct.
//!
//! # Role in Tinct
//! This crate is the coordination point between modules that *own*
//! scheme-resolution logic and modules that merely *consume* schemes.
//! Each owner registers a [`SchemeResolver`] under its own namespace;
//! consumers resolve schemes for a context without knowing where
//! preferences are stored.
//!
//! # This crate provides
//! - [`SchemeRegistry`] — the process-wide, thread-safe registry with a
//!   three-tier fallback chain (resolver → override → default).
//! - [`NamespacedRegistry`] — a handle that pins one namespace.
//! - [`SchemeResolver`] — the resolution capability, implemented by
//!   closures and by `Arc<ColorScheme>` itself.
//! - [`DarkModeResolver`] — composition of two resolvers behind a
//!   per-context dark-mode predicate.
//!
//! # How it fits in the system
//! Construct one `SchemeRegistry` at process start, share it as an
//! `Arc`, and hand each module a [`NamespacedRegistry`] bound to its own
//! namespace. Scheme values come from `tinct-core` (built in code or
//! loaded by `tinct-loader`) and circulate as `Arc<ColorScheme>`.

/// Namespace-bound registry handle.
pub mod namespaced;
/// The namespaced resolution registry.
pub mod registry;
/// Resolver trait and combinators.
pub mod resolver;

pub use namespaced::NamespacedRegistry;
pub use registry::{RegistryError, SchemeRegistry};
pub use resolver::{DarkModeResolver, ResolverError, SchemeResolver};
