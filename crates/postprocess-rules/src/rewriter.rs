//! Output assembly: prologue, blank separator, transformed body.

use crate::tracker::ActivationTracker;

/// Separator written between the prologue and the transformed body.
pub const SEPARATOR: &str = "\n\n";

/// Build the rewritten file from a prologue and the generated content.
///
/// Lines keep their original terminators, so `\r\n` input stays `\r\n` and a
/// final line without a newline stays without one.
///
/// # Example
/// ```
/// use postprocess_rules::{ActivationTracker, Rule, RuleSet, rewriter::rewrite};
///
/// let rules = RuleSet::new(vec![Rule::new("START", "Text", "Mapping")]).unwrap();
/// let mut tracker = ActivationTracker::new(rules);
/// let out = rewrite("// prologue\n", "START\nText\n", &mut tracker);
/// assert_eq!(out, "// prologue\n\n\nSTART\nMapping\n");
/// ```
pub fn rewrite(prologue: &str, generated: &str, tracker: &mut ActivationTracker) -> String {
    rewrite_lines(prologue, generated.split_inclusive('\n'), tracker)
}

/// Same as [`rewrite`] for content that is already split into lines.
pub fn rewrite_lines<'a, I>(prologue: &str, lines: I, tracker: &mut ActivationTracker) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut output = String::with_capacity(prologue.len() + SEPARATOR.len());
    output.push_str(prologue);
    output.push_str(SEPARATOR);

    for line in lines {
        output.push_str(&tracker.transform(line));
    }

    output
}
