//! Job settings schema.

use serde::Deserialize;

use crate::namespace::NamespaceDefinitionKind;

/// Supported settings file version.
pub const SETTINGS_VERSION: &str = "1.0";

/// Destination naming settings for one sync job.
///
/// ```yaml
/// version: "1.0"
/// namespace_definition: custom_format
/// namespace_format: "${SOURCE_NAMESPACE}_raw"
/// prefix: "output_"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobSettings {
    pub version: String,
    #[serde(default)]
    pub namespace_definition: NamespaceDefinitionKind,
    /// Template for `custom_format`; may reference `${SOURCE_NAMESPACE}`.
    #[serde(default)]
    pub namespace_format: Option<String>,
    /// Prepended to every destination stream name.
    #[serde(default)]
    pub prefix: Option<String>,
}
