//! Job settings loading: YAML parsing, validation, and mapper construction.

pub mod parser;
pub mod types;
pub mod validator;

use std::path::Path;

use anyhow::Result;

use crate::mapper::MapperConfig;

/// Parse, validate, and convert a job settings file into a [`MapperConfig`].
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid YAML, or fails
/// validation.
pub fn load_mapper_config(path: &Path) -> Result<MapperConfig> {
    let settings = parser::parse_settings(path)?;
    validator::build_mapper_config(&settings)
}
