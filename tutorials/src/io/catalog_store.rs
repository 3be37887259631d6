//! Catalog load/save helpers with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::debug;

use crate::core::invariants::validate_catalog;
use crate::core::types::CatalogSource;

pub const CATALOG_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/catalog/v1.schema.json"
));

/// Load and validate a catalog from disk (schema + invariants).
pub fn load_catalog(schema_path: &Path, catalog_path: &Path) -> Result<CatalogSource> {
    let contents = fs::read_to_string(catalog_path)
        .with_context(|| format!("read catalog {}", catalog_path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse catalog {}", catalog_path.display()))?;
    validate_schema(schema_path, &value)?;
    let source: CatalogSource = serde_json::from_value(value)
        .with_context(|| format!("deserialize catalog {}", catalog_path.display()))?;
    validate_catalog_invariants(&source)?;
    debug!(
        path = %catalog_path.display(),
        tutorials = source.tutorials.len(),
        "catalog file loaded"
    );
    Ok(source)
}

/// Write a catalog as pretty-printed JSON with trailing newline.
pub fn write_catalog(catalog_path: &Path, source: &CatalogSource) -> Result<()> {
    let mut buf = serde_json::to_string_pretty(source)?;
    buf.push('\n');
    fs::write(catalog_path, buf)
        .with_context(|| format!("write catalog {}", catalog_path.display()))
}

fn validate_schema(schema_path: &Path, catalog: &Value) -> Result<()> {
    let schema_contents = fs::read_to_string(schema_path)
        .with_context(|| format!("read schema {}", schema_path.display()))?;
    let schema_value: Value = serde_json::from_str(&schema_contents)
        .with_context(|| format!("parse schema {}", schema_path.display()))?;
    let compiled =
        validator_for(&schema_value).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(catalog) {
        let messages = compiled
            .iter_errors(catalog)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "catalog schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn validate_catalog_invariants(source: &CatalogSource) -> Result<()> {
    let errors = validate_catalog(source);
    if errors.is_empty() {
        return Ok(());
    }
    Err(anyhow!("catalog invariants failed: {}", errors.join("; ")))
}
