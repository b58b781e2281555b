//! CLI command implementations

pub mod check;
pub mod init;
pub mod rules;

pub use check::CheckArgs;
pub use init::InitArgs;
pub use rules::RulesArgs;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use escompat_core::RuleSet;
use escompat_core::config::{
    Config, find_config_file, load_config_with_warnings, resolve_rule_set,
};
use std::path::{Path, PathBuf};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze JavaScript files for unsupported API usages
    Check(CheckArgs),

    /// Initialize escompat configuration in the current directory
    Init(InitArgs),

    /// Print the effective rule set
    Rules(RulesArgs),
}

/// Rule-selection flags shared by `check` and `rules`.
#[derive(Args, Debug, Default)]
pub struct RuleSelection {
    /// Extra JSON rule files, merged after the configured ones
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: Vec<PathBuf>,

    /// Leave out the built-in ES5 baseline rule set
    #[arg(long)]
    pub no_builtin: bool,

    /// Config file to use instead of discovering escompat.toml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl RuleSelection {
    /// Builds the rule set for a run: the config (explicit or discovered
    /// upward from `start_dir`), the baseline unless disabled on either
    /// side, then the configured files, then the command-line files.
    /// Unknown-key warnings go to stderr.
    pub fn effective_rule_set(&self, start_dir: &Path) -> Result<RuleSet> {
        let config_path = match &self.config {
            Some(path) => Some(path.clone()),
            None => find_config_file(start_dir),
        };

        let (config, config_dir) = match &config_path {
            Some(path) => {
                let result = load_config_with_warnings(path)
                    .with_context(|| format!("failed to load config '{}'", path.display()))?;
                for warning in &result.warnings {
                    eprintln!("{} {}", "warning:".yellow().bold(), warning);
                }
                (result.config, path.parent().map(Path::to_path_buf))
            }
            None => (Config::default(), None),
        };

        let builtin = config.rules.builtin && !self.no_builtin;
        let mut files: Vec<PathBuf> = config
            .rules
            .files
            .iter()
            .map(|file| match &config_dir {
                Some(dir) if file.is_relative() => dir.join(file),
                _ => file.clone(),
            })
            .collect();
        files.extend(self.rules.iter().cloned());

        resolve_rule_set(builtin, files).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn defaults_to_the_baseline_without_a_config() {
        let dir = tempdir().unwrap();

        let rules = RuleSelection::default()
            .effective_rule_set(dir.path())
            .unwrap();

        assert!(rules.contains("Symbol", "iterator"));
    }

    #[test]
    fn no_builtin_flag_drops_the_baseline() {
        let dir = tempdir().unwrap();
        let selection = RuleSelection {
            no_builtin: true,
            ..Default::default()
        };

        let rules = selection.effective_rule_set(dir.path()).unwrap();

        assert!(rules.is_empty());
    }

    #[test]
    fn config_files_resolve_relative_to_the_config() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("custom.json"),
            r#"{"memberExpression": [{"object": "Intl", "property": "Collator"}]}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("escompat.toml"),
            "[rules]\nbuiltin = false\nfiles = [\"custom.json\"]\n",
        )
        .unwrap();
        let nested = dir.path().join("src");
        fs::create_dir(&nested).unwrap();

        let rules = RuleSelection::default().effective_rule_set(&nested).unwrap();

        assert_eq!(rules.len(), 1);
        assert!(rules.contains("Intl", "Collator"));
    }

    #[test]
    fn command_line_files_merge_after_the_baseline() {
        let dir = tempdir().unwrap();
        let rule_path = dir.path().join("extra.json");
        fs::write(
            &rule_path,
            r#"{"memberExpression": [{"object": "Intl", "property": "Collator"}]}"#,
        )
        .unwrap();
        let selection = RuleSelection {
            rules: vec![rule_path],
            ..Default::default()
        };

        let rules = selection.effective_rule_set(dir.path()).unwrap();

        assert!(rules.contains("Symbol", "iterator"));
        assert_eq!(
            rules.member_expression.last().map(|r| r.object.as_str()),
            Some("Intl")
        );
    }

    #[test]
    fn explicit_config_beats_discovery() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("escompat.toml"),
            "[rules]\nbuiltin = true\n",
        )
        .unwrap();
        let other = dir.path().join("other.toml");
        fs::write(&other, "[rules]\nbuiltin = false\n").unwrap();
        let selection = RuleSelection {
            config: Some(other),
            ..Default::default()
        };

        let rules = selection.effective_rule_set(dir.path()).unwrap();

        assert!(rules.is_empty());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = tempdir().unwrap();
        let selection = RuleSelection {
            config: Some(dir.path().join("absent.toml")),
            ..Default::default()
        };

        assert!(selection.effective_rule_set(dir.path()).is_err());
    }

    #[test]
    fn missing_rule_file_is_an_error() {
        let dir = tempdir().unwrap();
        let selection = RuleSelection {
            rules: vec![dir.path().join("absent.json")],
            ..Default::default()
        };

        assert!(selection.effective_rule_set(dir.path()).is_err());
    }
}
