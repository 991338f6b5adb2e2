//! Check command implementation

use colored::Colorize;
use postprocess_rules::RuleStatus;

use crate::context::RunContext;
use crate::error::Result;

/// Run the check command
///
/// Computes the rewrite without writing and fails if any rule would not be
/// applied.
pub fn run_check(ctx: &RunContext, show_diff: bool) -> Result<()> {
    let processor = ctx.postprocessor();
    let dry = processor.dry_run(&ctx.rule_source())?;

    if show_diff && !dry.diff.is_empty() {
        print!("{}", dry.diff);
    }

    for (i, outcome) in dry.report.outcomes.iter().enumerate() {
        let status = match outcome.status {
            RuleStatus::Spent => "spent".green(),
            RuleStatus::Active => "active".yellow(),
            RuleStatus::Pending => "pending".red(),
        };
        let location = match (outcome.activated_at, outcome.spent_at) {
            (Some(a), Some(s)) => format!("lines {}-{}", a, s),
            (Some(a), None) => format!("activated at line {}", a),
            _ => "never activated".to_string(),
        };
        println!(
            "  {:>3}. [{}] {} -> {} ({})",
            i + 1,
            status,
            outcome.rule.activator().cyan(),
            outcome.rule.target(),
            location.dimmed()
        );
    }

    dry.verify()?;
    println!(
        "{} All {} rule(s) apply to {}.",
        "OK".green().bold(),
        dry.report.outcomes.len(),
        processor.paths().target.as_str().cyan()
    );
    Ok(())
}
