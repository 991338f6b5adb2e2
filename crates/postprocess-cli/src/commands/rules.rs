//! Rules command implementation

use colored::Colorize;
use postprocess_rules::RuleSource;
use serde::Serialize;

use crate::context::RunContext;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct RuleEntry<'a> {
    activator: &'a str,
    target: &'a str,
    replacement: &'a str,
}

/// Run the rules command
///
/// Lists the configured rules in evaluation order.
pub fn run_rules(ctx: &RunContext, json: bool) -> Result<()> {
    let source = ctx.rule_source();
    let rules = source.load()?;

    if json {
        let entries: Vec<_> = rules
            .iter()
            .map(|rule| RuleEntry {
                activator: rule.activator(),
                target: rule.target(),
                replacement: rule.replacement(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("{} ({})", "Rules".bold(), source.describe().dimmed());
    for (i, rule) in rules.iter().enumerate() {
        println!("  {:>3}. after {}", i + 1, rule.activator().cyan());
        println!("       {} {}", "-".red(), rule.target());
        println!("       {} {}", "+".green(), rule.replacement());
    }
    Ok(())
}
