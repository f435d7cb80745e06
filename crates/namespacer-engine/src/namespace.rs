//! Destination namespace resolution.
//!
//! The user picks one of three policies for where replicated streams land:
//! keep the source's namespace, defer to the destination's default, or
//! derive a namespace from a template.

use serde::{Deserialize, Serialize};

use crate::errors::MapperConfigError;

/// Token in a custom-format template replaced by the source namespace.
pub const SOURCE_NAMESPACE_PLACEHOLDER: &str = "${SOURCE_NAMESPACE}";

/// Policy selector as it appears in job settings, without a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamespaceDefinitionKind {
    #[default]
    Source,
    Destination,
    #[serde(alias = "customformat")]
    CustomFormat,
}

/// Namespace resolution policy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NamespaceDefinition {
    /// Use the namespace reported by the source, including none.
    Source,
    /// Emit no namespace; the destination applies its own default.
    Destination,
    /// Derive the namespace from a template that may reference
    /// [`SOURCE_NAMESPACE_PLACEHOLDER`].
    CustomFormat(String),
}

impl NamespaceDefinition {
    /// Build a custom-format policy, rejecting empty templates and templates
    /// that repeat the placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`MapperConfigError::EmptyCustomFormat`] or
    /// [`MapperConfigError::MultiplePlaceholders`].
    pub fn custom_format(template: impl Into<String>) -> Result<Self, MapperConfigError> {
        let template = template.into();
        if template.is_empty() {
            return Err(MapperConfigError::EmptyCustomFormat);
        }
        let count = template.matches(SOURCE_NAMESPACE_PLACEHOLDER).count();
        if count > 1 {
            return Err(MapperConfigError::MultiplePlaceholders { template, count });
        }
        Ok(Self::CustomFormat(template))
    }

    /// Build a policy from its settings selector and optional template.
    ///
    /// The template is ignored unless `kind` is [`NamespaceDefinitionKind::CustomFormat`].
    ///
    /// # Errors
    ///
    /// Returns an error if `kind` is `CustomFormat` and the template is unset,
    /// empty, or repeats the placeholder.
    pub fn from_kind(
        kind: NamespaceDefinitionKind,
        template: Option<&str>,
    ) -> Result<Self, MapperConfigError> {
        match kind {
            NamespaceDefinitionKind::Source => Ok(Self::Source),
            NamespaceDefinitionKind::Destination => Ok(Self::Destination),
            NamespaceDefinitionKind::CustomFormat => {
                let template = template.ok_or(MapperConfigError::MissingCustomFormat)?;
                Self::custom_format(template)
            }
        }
    }

    #[must_use]
    pub fn kind(&self) -> NamespaceDefinitionKind {
        match self {
            Self::Source => NamespaceDefinitionKind::Source,
            Self::Destination => NamespaceDefinitionKind::Destination,
            Self::CustomFormat(_) => NamespaceDefinitionKind::CustomFormat,
        }
    }

    /// Resolve the destination namespace for a stream whose source namespace
    /// is `source_namespace`.
    ///
    /// A custom format that substitutes to the empty string yields `None`.
    #[must_use]
    pub fn resolve(&self, source_namespace: Option<&str>) -> Option<String> {
        match self {
            Self::Source => source_namespace.map(str::to_owned),
            Self::Destination => None,
            Self::CustomFormat(template) => {
                let resolved =
                    template.replace(SOURCE_NAMESPACE_PLACEHOLDER, source_namespace.unwrap_or(""));
                (!resolved.is_empty()).then_some(resolved)
            }
        }
    }
}
