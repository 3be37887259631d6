//! Application configuration stored in `tutorials.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::catalog::ExecutionContext;

pub const DEFAULT_SCHEMA_PATH: &str = "schemas/catalog/v1.schema.json";

/// Catalog configuration (TOML).
///
/// Missing fields default to a server context reading the built-in catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Whether diff bindings are registered at startup.
    pub execution_context: ExecutionContext,

    /// JSON catalog to load instead of the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,

    /// JSON Schema used to check `catalog_path`.
    pub schema_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            execution_context: ExecutionContext::default(),
            catalog_path: None,
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("catalog_path must not be empty"));
            }
        }
        if self.schema_path.as_os_str().is_empty() {
            return Err(anyhow!("schema_path must not be empty"));
        }
        Ok(())
    }

    /// Resolve relative paths against the directory holding the config file.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if let Some(path) = self.catalog_path.take() {
            self.catalog_path = Some(base.join(path));
        }
        self.schema_path = base.join(&self.schema_path);
        self
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AppConfig::default()`.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        let cfg = AppConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AppConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &AppConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
