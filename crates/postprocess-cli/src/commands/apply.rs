//! Apply command implementation

use colored::Colorize;
use postprocess_rules::{RuleSource, WritePolicy};

use crate::context::RunContext;
use crate::error::Result;

/// Run the apply command
///
/// Rewrites the target file in place, or prints the pending diff with
/// `dry_run`.
pub fn run_apply(ctx: &RunContext, write_then_verify: bool, dry_run: bool) -> Result<()> {
    let source = ctx.rule_source();
    let mut processor = ctx.postprocessor();
    if write_then_verify {
        processor = processor.with_policy(WritePolicy::WriteThenVerify);
    }

    if dry_run {
        let dry = processor.dry_run(&source)?;
        if dry.diff.is_empty() {
            println!("{} No changes.", "OK".green().bold());
        } else {
            print!("{}", dry.diff);
        }
        dry.verify()?;
        return Ok(());
    }

    tracing::debug!(
        source = %source.describe(),
        policy = %processor.policy(),
        "applying rules"
    );
    let report = processor.run(&source)?;

    println!(
        "{} Rewrote {} ({} rule(s) applied, {} line(s) scanned)",
        "OK".green().bold(),
        processor.paths().target.as_str().cyan(),
        report.spent_count(),
        report.lines_scanned
    );
    Ok(())
}
