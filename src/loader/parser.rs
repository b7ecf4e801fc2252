//! YAML parser for dataset definitions
//!
//! Parses and validates dataset definition files.

use crate::error::{Error, Result};
use crate::loader::types::DatasetDefinition;
use std::fs;
use std::path::Path;

/// Load a dataset definition from a YAML file
///
/// # Examples
///
/// ```ignore
/// let def = load_definition("datasets/baby-names.yaml")?;
/// let server = PageServer::new(def.source_config());
/// ```
pub fn load_definition(path: impl AsRef<Path>) -> Result<DatasetDefinition> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read definition file '{}': {e}",
            path.display()
        ))
    })?;
    load_definition_from_str(&content)
}

/// Load a dataset definition from a YAML string
pub fn load_definition_from_str(yaml: &str) -> Result<DatasetDefinition> {
    let def: DatasetDefinition = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse definition YAML: {e}")))?;

    validate_definition(&def)?;
    Ok(def)
}

/// Validate a dataset definition
fn validate_definition(def: &DatasetDefinition) -> Result<()> {
    if def.name.is_empty() {
        return Err(Error::config("Dataset name cannot be empty"));
    }

    if def.source.path.is_empty() {
        return Err(Error::config(format!(
            "Dataset '{}' source path cannot be empty",
            def.name
        )));
    }

    if def.default_page_size == 0 {
        return Err(Error::config(format!(
            "Dataset '{}' default_page_size must be a positive integer",
            def.name
        )));
    }

    Ok(())
}
