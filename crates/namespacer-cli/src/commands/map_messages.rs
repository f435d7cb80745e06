use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{stdin, stdout, BufReader, BufWriter};

use namespacer_engine::config;
use namespacer_engine::{translate_lines, StreamMapper};

/// Execute the `map-messages` command: translate stdin to stdout.
pub async fn execute(config_path: &Path) -> Result<()> {
    let mapper = StreamMapper::new(config::load_mapper_config(config_path)?);

    let reader = BufReader::new(stdin());
    let writer = BufWriter::new(stdout());
    let summary = translate_lines(&mapper, reader, writer)
        .await
        .context("Message translation failed")?;

    tracing::info!(
        messages = summary.messages,
        records = summary.records,
        passthrough = summary.passthrough,
        "Translated message stream"
    );
    Ok(())
}
