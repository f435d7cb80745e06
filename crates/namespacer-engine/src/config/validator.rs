//! Semantic validation for parsed job settings.

use anyhow::{bail, Result};

use crate::config::types::{JobSettings, SETTINGS_VERSION};
use crate::mapper::MapperConfig;
use crate::namespace::{NamespaceDefinition, NamespaceDefinitionKind};

/// Validate parsed job settings.
/// Returns `Ok(())` if valid, Err with all validation errors if not.
///
/// # Errors
///
/// Returns an error listing every validation failure found.
pub fn validate_settings(settings: &JobSettings) -> Result<()> {
    let mut errors = Vec::new();

    if settings.version != SETTINGS_VERSION {
        errors.push(format!(
            "Unsupported settings version '{}', expected '{SETTINGS_VERSION}'",
            settings.version
        ));
    }

    match settings.namespace_definition {
        NamespaceDefinitionKind::CustomFormat => {
            if let Err(e) = NamespaceDefinition::from_kind(
                settings.namespace_definition,
                settings.namespace_format.as_deref(),
            ) {
                errors.push(e.to_string());
            }
        }
        kind => {
            if settings.namespace_format.is_some() {
                tracing::warn!(
                    namespace_definition = ?kind,
                    "namespace_format is only used with custom_format and will be ignored"
                );
            }
        }
    }

    if !errors.is_empty() {
        bail!(
            "Job settings validation failed:\n{}",
            errors
                .iter()
                .map(|e| format!("  - {e}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(())
}

/// Validate `settings` and build the [`MapperConfig`] for the job.
///
/// # Errors
///
/// Returns an error listing every validation failure found.
pub fn build_mapper_config(settings: &JobSettings) -> Result<MapperConfig> {
    validate_settings(settings)?;
    let config = MapperConfig::from_parts(
        settings.namespace_definition,
        settings.namespace_format.as_deref(),
        settings.prefix.clone(),
    )?;
    Ok(config)
}
