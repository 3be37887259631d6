//! Startup orchestration: config + catalog file into a ready [`Registry`].

use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::catalog::{ExecutionContext, bootstrap, builtin_catalog};
use crate::core::registry::Registry;
use crate::io::catalog_store::load_catalog;
use crate::io::config::load_config;

/// Startup inputs decided by the caller.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Force the client context regardless of the config file.
    pub client: bool,
}

/// Load `config_path` (defaults when missing) and build the registry.
///
/// Relative paths in the config resolve against the config file's directory.
pub fn load_registry(config_path: &Path, options: &LoadOptions) -> Result<Registry> {
    let base = config_path.parent().unwrap_or_else(|| Path::new(""));
    let config = load_config(config_path)
        .with_context(|| format!("load {}", config_path.display()))?
        .resolve_paths(base);

    let context = if options.client {
        ExecutionContext::Client
    } else {
        config.execution_context
    };

    let source = match &config.catalog_path {
        Some(catalog_path) => load_catalog(&config.schema_path, catalog_path)
            .with_context(|| format!("load catalog {}", catalog_path.display()))?,
        None => {
            debug!("no catalog_path configured, using built-in catalog");
            builtin_catalog()
        }
    };

    let registry = bootstrap(source, context).context("build tutorial registry")?;
    Ok(registry)
}
