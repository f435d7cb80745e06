use std::path::Path;

use anyhow::{Context, Result};

use namespacer_engine::config::{parser, validator};
use namespacer_engine::NamespaceDefinition;

/// Execute the `check` command: validate job settings and describe the policy.
pub fn execute(config_path: &Path) -> Result<()> {
    let settings = parser::parse_settings(config_path)
        .with_context(|| format!("Failed to parse job settings: {}", config_path.display()))?;
    let config = validator::build_mapper_config(&settings)?;

    let namespace = match config.namespace_definition() {
        NamespaceDefinition::Source => "source namespace".to_string(),
        NamespaceDefinition::Destination => "destination default".to_string(),
        NamespaceDefinition::CustomFormat(template) => format!("custom format '{template}'"),
    };
    println!("{:18} {}", "Namespace:", namespace);
    println!("{:18} {}", "Stream prefix:", config.stream_prefix().unwrap_or("(none)"));
    println!("\nJob settings OK.");
    Ok(())
}
