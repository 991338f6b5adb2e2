//! File-level driver: load rules, rewrite the generated file, verify, commit.

use postprocess_fs::{NormalizedPath, io};
use similar::TextDiff;

use crate::config::{PostprocessPaths, WritePolicy};
use crate::error::Result;
use crate::loader::RuleSource;
use crate::rewriter::rewrite;
use crate::rule::RuleSet;
use crate::tracker::{ActivationTracker, RunReport};
use crate::verify::{verify, verify_report};

/// Result of a run that computed the output without writing it.
#[derive(Debug, Clone)]
pub struct DryRun {
    /// Full content that would be written.
    pub output: String,
    /// Unified diff from the current file content to `output`.
    pub diff: String,
    pub report: RunReport,
}

impl DryRun {
    /// Fail the same way a real run would if any rule was not applied.
    pub fn verify(&self) -> Result<()> {
        verify_report(&self.report)
    }
}

/// Runs the postprocessing step against one generated file.
#[derive(Debug, Clone)]
pub struct Postprocessor {
    paths: PostprocessPaths,
    policy: WritePolicy,
}

impl Postprocessor {
    pub fn new(paths: PostprocessPaths) -> Self {
        Self {
            paths,
            policy: WritePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: WritePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn paths(&self) -> &PostprocessPaths {
        &self.paths
    }

    pub fn policy(&self) -> WritePolicy {
        self.policy
    }

    /// Rewrite the target file in place.
    ///
    /// Rule loading happens before any file is read, so a malformed rule
    /// source never leads to a write. Whether an unsatisfied rule leaves the
    /// target untouched depends on the [`WritePolicy`].
    ///
    /// # Errors
    /// - `Error::Format` if the rule source is malformed
    /// - `Error::Fs` if a file cannot be read or written
    /// - `Error::Activation` if a rule was never applied
    pub fn run(&self, source: &dyn RuleSource) -> Result<RunReport> {
        let rules = self.load(source)?;
        let generated = io::read_text(&self.paths.target)?;
        let (output, tracker) = self.render(rules, &generated)?;

        match self.policy {
            WritePolicy::VerifyThenWrite => {
                verify(&tracker)?;
                io::write_text(&self.paths.target, &output)?;
            }
            WritePolicy::WriteThenVerify => {
                io::write_text(&self.paths.target, &output)?;
                if let Err(e) = verify(&tracker) {
                    tracing::warn!(
                        target_file = %self.paths.target,
                        "rules unsatisfied after the target was rewritten"
                    );
                    return Err(e);
                }
            }
        }

        let report = tracker.finish();
        tracing::info!(
            target_file = %self.paths.target,
            rules = report.outcomes.len(),
            lines = report.lines_scanned,
            "postprocessed generated file"
        );
        Ok(report)
    }

    /// Compute the output and a diff against the current target without writing.
    ///
    /// Unsatisfied rules do not fail the dry run; call [`DryRun::verify`].
    pub fn dry_run(&self, source: &dyn RuleSource) -> Result<DryRun> {
        let rules = self.load(source)?;
        let generated = io::read_text(&self.paths.target)?;
        let (output, tracker) = self.render(rules, &generated)?;

        let diff = unified_diff(&self.paths.target, &generated, &output);
        Ok(DryRun {
            output,
            diff,
            report: tracker.finish(),
        })
    }

    fn load(&self, source: &dyn RuleSource) -> Result<RuleSet> {
        let rules = source.load()?;
        tracing::debug!(source = %source.describe(), rules = rules.len(), "loaded rules");
        Ok(rules)
    }

    fn render(&self, rules: RuleSet, generated: &str) -> Result<(String, ActivationTracker)> {
        let prologue = io::read_text(&self.paths.prologue)?;

        let mut tracker = ActivationTracker::new(rules);
        let output = rewrite(&prologue, generated, &mut tracker);
        Ok((output, tracker))
    }
}

fn unified_diff(path: &NormalizedPath, old: &str, new: &str) -> String {
    let name = path.as_str();
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", name), &format!("b/{}", name))
        .to_string()
}
