//! Job settings YAML parsing with environment variable substitution.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::config::types::JobSettings;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid env var regex"));

/// Variable name reserved for the namespace template placeholder.
const RESERVED_VAR: &str = "SOURCE_NAMESPACE";

/// Substitute `${VAR_NAME}` patterns with environment variable values.
///
/// `${SOURCE_NAMESPACE}` is left in place for the namespace template.
///
/// # Errors
///
/// Returns an error if any referenced environment variable is not set.
pub fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = input.to_string();
    let mut errors = Vec::new();

    for cap in ENV_VAR_RE.captures_iter(input) {
        let var_name = &cap[1];
        if var_name == RESERVED_VAR {
            continue;
        }
        match std::env::var(var_name) {
            Ok(val) => {
                result = result.replace(&cap[0], &val);
            }
            Err(_) => {
                errors.push(var_name.to_string());
            }
        }
    }

    if !errors.is_empty() {
        anyhow::bail!("Missing environment variable(s): {}", errors.join(", "));
    }

    Ok(result)
}

/// Parse a job settings YAML string (after env var substitution).
///
/// # Errors
///
/// Returns an error if env var substitution fails or the YAML is invalid.
pub fn parse_settings_str(yaml_str: &str) -> Result<JobSettings> {
    let substituted = substitute_env_vars(yaml_str)?;
    let settings: JobSettings =
        serde_yaml::from_str(&substituted).context("Failed to parse job settings YAML")?;
    Ok(settings)
}

/// Parse a job settings YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the YAML is invalid.
pub fn parse_settings(path: &Path) -> Result<JobSettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job settings file: {}", path.display()))?;
    parse_settings_str(&content)
}
