//! Configuration loading and parsing for escompat
//!
//! Provides functionality to load and parse `escompat.toml` configuration
//! files, and to load the JSON rule files they (or the command line) point
//! at.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::analysis::AnalyzeError;
use crate::rules::{RuleSet, es5_baseline};

pub const CONFIG_FILENAME: &str = "escompat.toml";

const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["rules"];
const KNOWN_RULES_KEYS: &[&str] = &["builtin", "files"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML in '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// Failure loading one JSON rule file.
#[derive(Debug, thiserror::Error)]
pub enum RuleFileError {
    #[error("Failed to read rule file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid rule file '{path}': {source}")]
    Invalid {
        path: PathBuf,
        source: AnalyzeError,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub rules: RulesConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RulesConfig {
    /// Include the built-in ES5 baseline rule set.
    #[serde(default = "default_builtin")]
    pub builtin: bool,
    /// Extra rule files, merged after the baseline in listed order.
    /// Relative paths are resolved against the config file's directory.
    pub files: Vec<PathBuf>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            builtin: true,
            files: Vec::new(),
        }
    }
}

fn default_builtin() -> bool {
    true
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

pub fn load_config_with_warnings(path: &Path) -> Result<ConfigResult, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    let warnings = detect_unknown_keys(&content);

    Ok(ConfigResult { config, warnings })
}

fn detect_unknown_keys(content: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    let table: toml::Table = match content.parse() {
        Ok(t) => t,
        Err(_) => return warnings,
    };

    let known_top: HashSet<&str> = KNOWN_TOP_LEVEL_KEYS.iter().copied().collect();
    for key in table.keys() {
        if !known_top.contains(key.as_str()) {
            warnings.push(format!("Unknown config option: '{}'", key));
        }
    }

    if let Some(toml::Value::Table(rules)) = table.get("rules") {
        let known_rules: HashSet<&str> = KNOWN_RULES_KEYS.iter().copied().collect();
        for key in rules.keys() {
            if !known_rules.contains(key.as_str()) {
                warnings.push(format!("Unknown config option in [rules]: '{}'", key));
            }
        }
    }

    warnings
}

/// Reads and validates one JSON rule file.
pub fn load_rule_file(path: &Path) -> Result<RuleSet, RuleFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| RuleFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    RuleSet::from_json_str(&content).map_err(|e| RuleFileError::Invalid {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Builds the rule set for a run: the baseline (when enabled) merged with
/// each file's rules in listed order.
pub fn resolve_rule_set(
    builtin: bool,
    files: impl IntoIterator<Item = impl AsRef<Path>>,
) -> Result<RuleSet, RuleFileError> {
    let mut rules = if builtin {
        es5_baseline()
    } else {
        RuleSet::default()
    };
    for file in files {
        rules = rules.merge(load_rule_file(file.as_ref())?);
    }
    Ok(rules)
}
