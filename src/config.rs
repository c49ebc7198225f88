use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file read by `verify` when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "daycount.toml";

/// Top-level daycount configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DaycountConfig {
    /// Verification sweep settings.
    #[serde(default)]
    pub verify: VerifyToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VerifyToml {
    #[serde(default = "default_years")]
    pub years: i32,
    #[serde(default = "default_chunk_years")]
    pub chunk_years: i32,
}

impl Default for VerifyToml {
    fn default() -> Self {
        Self {
            years: default_years(),
            chunk_years: default_chunk_years(),
        }
    }
}

fn default_years() -> i32 {
    1_000_000
}
fn default_chunk_years() -> i32 {
    10_000
}

impl DaycountConfig {
    /// Reads and parses a TOML config file.
    ///
    /// When `required` is false a missing file yields the defaults.
    pub fn load(path: &Path, required: bool) -> Result<Self> {
        if !required && !path.exists() {
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }
}
