//! Destination namespace and stream-name resolution for replicated streams.
//!
//! A [`StreamMapper`] is built once per sync job from a [`MapperConfig`] and
//! rewrites catalogs (for destination setup) and record messages (on the
//! translation path) with the same rules.

pub mod config;
pub mod errors;
pub mod mapper;
pub mod namespace;
pub mod naming;
pub mod translate;

// Re-export public API for convenience
pub use errors::{MapperConfigError, TranslateError};
pub use mapper::{MapperConfig, StreamCollision, StreamMapper};
pub use namespace::{NamespaceDefinition, NamespaceDefinitionKind, SOURCE_NAMESPACE_PLACEHOLDER};
pub use naming::apply_prefix;
pub use translate::{translate_lines, TranslateSummary};
