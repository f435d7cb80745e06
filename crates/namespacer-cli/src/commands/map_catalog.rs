use std::path::Path;

use anyhow::{Context, Result};

use namespacer_engine::config;
use namespacer_engine::StreamMapper;
use namespacer_types::catalog::ConfiguredCatalog;

/// Execute the `map-catalog` command: print the mapped catalog as JSON.
pub async fn execute(config_path: &Path, catalog_path: &Path) -> Result<()> {
    // 1. Build the mapper from job settings
    let mapper = StreamMapper::new(config::load_mapper_config(config_path)?);

    // 2. Load the configured catalog
    let raw = tokio::fs::read_to_string(catalog_path)
        .await
        .with_context(|| format!("Failed to read catalog file: {}", catalog_path.display()))?;
    let catalog: ConfiguredCatalog = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse catalog: {}", catalog_path.display()))?;

    // 3. Map (collisions are logged by the mapper) and print
    let mapped = mapper.map_catalog(&catalog);
    tracing::info!(streams = mapped.len(), "Mapped catalog");
    println!("{}", serde_json::to_string_pretty(&mapped)?);
    Ok(())
}
