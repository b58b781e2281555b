//! Rules command - prints the effective merged rule set

use crate::commands::RuleSelection;
use anyhow::Result;
use clap::{Args, ValueEnum};
use colored::Colorize;
use escompat_core::RuleSet;
use escompat_core::rules::MEMBER_EXPRESSION;
use std::env;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum RulesFormat {
    /// Grouped listing
    #[default]
    Text,
    /// The JSON rule-file shape
    Json,
}

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: RulesFormat,

    #[command(flatten)]
    pub selection: RuleSelection,
}

impl RulesArgs {
    pub fn run(&self) -> Result<()> {
        let cwd = env::current_dir()?;
        let rules = self.selection.effective_rule_set(&cwd)?;

        let rendered = match self.format {
            RulesFormat::Text => render_listing(&rules),
            RulesFormat::Json => render_json(&rules),
        };
        print!("{rendered}");
        Ok(())
    }
}

fn render_listing(rules: &RuleSet) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}:\n", MEMBER_EXPRESSION.bold()));
    for rule in &rules.member_expression {
        out.push_str(&format!("  {}.{}\n", rule.object, rule.property));
    }
    out.push_str(&format!("\n{} rule(s)\n", rules.len()));
    out
}

/// The same shape a rule file carries, so the output can be fed back in
/// with `--rules`.
fn render_json(rules: &RuleSet) -> String {
    let mut out = serde_json::to_string_pretty(rules).unwrap_or_else(|_| "{}".to_string());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use escompat_core::rules::{MemberAccessRule, es5_baseline};

    fn small_set() -> RuleSet {
        RuleSet {
            member_expression: vec![
                MemberAccessRule::new("Symbol", "iterator"),
                MemberAccessRule::new("Array", "from"),
            ],
        }
    }

    #[test]
    fn listing_names_every_pair_and_the_count() {
        colored::control::set_override(false);
        let rendered = render_listing(&small_set());
        assert!(rendered.starts_with("memberExpression:\n"));
        assert!(rendered.contains("  Symbol.iterator\n"));
        assert!(rendered.contains("  Array.from\n"));
        assert!(rendered.ends_with("2 rule(s)\n"));
    }

    #[test]
    fn json_output_round_trips_as_a_rule_file() {
        let rendered = render_json(&small_set());
        let parsed = RuleSet::from_json_str(&rendered).unwrap();
        assert_eq!(parsed, small_set());
    }

    #[test]
    fn baseline_listing_is_not_empty() {
        colored::control::set_override(false);
        let rendered = render_listing(&es5_baseline());
        assert!(rendered.contains("Symbol.iterator"));
        assert!(rendered.contains("Object.assign"));
    }
}
