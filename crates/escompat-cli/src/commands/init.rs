//! Init command - writes a starter escompat configuration

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use escompat_core::config::CONFIG_FILENAME;
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# escompat configuration file

[rules]
# Include the built-in ES5 baseline rule set
builtin = true

# Extra JSON rule files, merged after the baseline in listed order.
# Each file is an object with a "memberExpression" array of
# {"object": ..., "property": ...} entries.
# files = ["rules/internal.json"]
"#;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl InitArgs {
    pub fn run(&self) -> Result<()> {
        let config_path = Path::new(CONFIG_FILENAME);

        if config_path.exists() && !self.force {
            anyhow::bail!(
                "Config file '{}' already exists. Use --force to overwrite.",
                CONFIG_FILENAME
            );
        }

        fs::write(config_path, DEFAULT_CONFIG)?;
        println!(
            "{} Created {} configuration file",
            "✓".green().bold(),
            CONFIG_FILENAME.cyan()
        );
        Ok(())
    }
}
