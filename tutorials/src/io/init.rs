//! Initialization helpers for a catalog project layout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use super::catalog_store::{CATALOG_SCHEMA, write_catalog};
use super::config::{AppConfig, DEFAULT_SCHEMA_PATH, write_config};
use crate::catalog::builtin_catalog;

pub const CONFIG_FILE: &str = "tutorials.toml";
pub const CATALOG_FILE: &str = "catalog/tutorials.json";

/// Canonical paths of a catalog project.
///
/// Schema and catalog live next to the config file, matching how
/// `AppConfig::resolve_paths` resolves the relative paths written into it.
#[derive(Debug, Clone)]
pub struct CatalogPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub schema_path: PathBuf,
    pub catalog_path: PathBuf,
}

impl CatalogPaths {
    /// Layout rooted at `root` with the default `tutorials.toml`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::for_config(root.into().join(CONFIG_FILE))
    }

    /// Layout for an explicit config file, whatever its name.
    pub fn for_config(config_path: impl Into<PathBuf>) -> Self {
        let config_path = config_path.into();
        let root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        Self {
            schema_path: root.join(DEFAULT_SCHEMA_PATH),
            catalog_path: root.join(CATALOG_FILE),
            config_path,
            root,
        }
    }
}

/// Options for `init_catalog`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing files.
    pub force: bool,
}

/// Write config, schema and a catalog seeded with the built-in tutorials.
///
/// Fails if the config file already exists unless `options.force` is set.
pub fn init_catalog(paths: &CatalogPaths, options: &InitOptions) -> Result<()> {
    if paths.config_path.exists() && !options.force {
        return Err(anyhow!(
            "tutorials init: {} already exists (use --force to overwrite)",
            paths.config_path.display()
        ));
    }

    let config = AppConfig {
        catalog_path: Some(PathBuf::from(CATALOG_FILE)),
        ..AppConfig::default()
    };
    write_config(&paths.config_path, &config)?;
    write_file(&paths.schema_path, CATALOG_SCHEMA)?;
    if let Some(parent) = paths.catalog_path.parent() {
        create_dir(parent)?;
    }
    write_catalog(&paths.catalog_path, &builtin_catalog())?;

    Ok(())
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("write file {}", path.display()))
}
