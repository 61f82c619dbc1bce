use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::analysis::DEFAULT_MIN_LENGTH;
use crate::models::{AnalysisResult, ClauseCategory, RiskTier};

/// Root configuration structure, deserialized from `.legal-lens/config.toml`.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Input validation and catalogue filtering.
    #[serde(default)]
    pub analysis: AnalysisConfig,
    /// Exit-code policy.
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    /// Minimum trimmed input length in characters. Defaults to 50.
    #[serde(default = "default_min_length")]
    pub min_length: usize,
    /// Clause categories to leave out of the scan.
    #[serde(default)]
    pub exclude: Vec<ClauseCategory>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            exclude: Vec::new(),
        }
    }
}

fn default_min_length() -> usize {
    DEFAULT_MIN_LENGTH
}

#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct PolicyConfig {
    /// When set, a hit at or above this tier makes the CLI exit with code 1.
    #[serde(default)]
    pub fail_on: Option<RiskTier>,
}

/// Load the configuration, searching in order:
///
/// 1. `config_override`: path passed via `--config`
/// 2. `<base_dir>/.legal-lens/config.toml`
/// 3. `~/.config/legal-lens/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(base_dir: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let local = base_dir.join(".legal-lens").join("config.toml");
    if local.exists() {
        return read_config(&local);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("legal-lens").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}

/// Whether the result trips the `fail_on` threshold.
pub fn violates_policy(result: &AnalysisResult, fail_on: Option<RiskTier>) -> bool {
    match (fail_on, result.highest_tier()) {
        (Some(threshold), Some(highest)) => highest >= threshold,
        _ => false,
    }
}
