//! Configuration file support for appiumize
//!
//! Loads `.appiumize.toml` from current directory or parent directories.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".appiumize.toml";

/// Configuration file structure
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rules: RulesConfig,
    pub paths: PathsConfig,
    pub output: OutputConfig,
    pub convert: ConvertConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Built-in rules to drop
    pub disabled: Vec<String>,
    /// Extra YAML rule files or directories, appended after the built-in
    /// rules in order.
    /// Relative paths are resolved against the config file's directory.
    pub files: Vec<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Glob patterns of files to copy without converting
    pub exclude: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "text" or "json"
    pub format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Convert the files of each directory in parallel
    pub parallel: bool,
    /// Back up an existing output folder before it is cleared
    pub backup: bool,
}

impl Config {
    /// Load config from `.appiumize.toml` searching from current directory upward
    pub fn load() -> Result<Option<(Config, PathBuf)>> {
        Self::load_from(std::env::current_dir()?)
    }

    /// Load config searching from the given directory upward
    pub fn load_from(start_dir: PathBuf) -> Result<Option<(Config, PathBuf)>> {
        let mut current = Some(start_dir.as_path());

        while let Some(dir) = current {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                let config = Self::load_path(&config_path)?;
                return Ok(Some((config, config_path)));
            }
            current = dir.parent();
        }

        Ok(None)
    }

    /// Load config from a specific path
    pub fn load_path(path: &Path) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn disabled_rules(&self) -> HashSet<String> {
        self.rules.disabled.iter().cloned().collect()
    }

    /// Rule files with relative entries resolved against `base_dir`
    pub fn rule_files(&self, base_dir: Option<&Path>) -> Vec<PathBuf> {
        self.rules
            .files
            .iter()
            .map(|file| match base_dir {
                Some(base) if file.is_relative() => base.join(file),
                _ => file.clone(),
            })
            .collect()
    }
}
