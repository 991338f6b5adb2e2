//! Rule sources.
//!
//! A [`RuleSource`] produces the ordered [`RuleSet`] for a run. Two sources
//! exist: a literal in-process list ([`StaticRules`]) and a sidecar text file
//! ([`SidecarRules`]) with the stanza format:
//!
//! ```text
//! // Comments and blank lines are ignored.
//! diesel::table! {
//!     coin_store_events (id) {
//! ev_action -> Text,
//! ev_action -> crate::autogen::schema::EventActionMapping,
//! ```
//!
//! Every three significant lines form one `(activator, target, replacement)`
//! triple, each trimmed of surrounding whitespace.

use postprocess_fs::{NormalizedPath, io};

use crate::error::{Error, Result};
use crate::rule::{Rule, RuleSet};

/// Line-comment marker recognized in sidecar files unless configured otherwise.
pub const DEFAULT_COMMENT_MARKER: &str = "//";

/// Anything that can produce the rules for a run.
pub trait RuleSource {
    /// Load the rules. Must fail rather than return an empty set.
    fn load(&self) -> Result<RuleSet>;

    /// Short description for logs and error context.
    fn describe(&self) -> String;
}

/// A fixed, hardcoded rule list.
#[derive(Debug, Clone)]
pub struct StaticRules {
    rules: Vec<Rule>,
}

impl StaticRules {
    pub fn new<I, R>(rules: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Rule>,
    {
        Self {
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }
}

impl RuleSource for StaticRules {
    fn load(&self) -> Result<RuleSet> {
        RuleSet::new(self.rules.clone())
    }

    fn describe(&self) -> String {
        format!("{} static rule(s)", self.rules.len())
    }
}

/// Rules read from a sidecar text file.
#[derive(Debug, Clone)]
pub struct SidecarRules {
    path: NormalizedPath,
    comment_marker: String,
}

impl SidecarRules {
    pub fn new(path: impl Into<NormalizedPath>) -> Self {
        Self {
            path: path.into(),
            comment_marker: DEFAULT_COMMENT_MARKER.to_string(),
        }
    }

    /// Use a different line-comment marker. An empty marker disables comments.
    pub fn with_comment_marker(mut self, marker: impl Into<String>) -> Self {
        self.comment_marker = marker.into();
        self
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }
}

impl RuleSource for SidecarRules {
    fn load(&self) -> Result<RuleSet> {
        let content = io::read_text(&self.path)?;
        let rules = parse_sidecar(&content, &self.comment_marker)?;
        tracing::debug!(path = %self.path, rules = rules.len(), "loaded sidecar rules");
        Ok(rules)
    }

    fn describe(&self) -> String {
        format!("sidecar {}", self.path)
    }
}

/// Parse sidecar content into a rule set.
///
/// # Errors
/// Returns `Error::Format` when the number of significant lines is zero or
/// not a multiple of three.
///
/// # Example
/// ```
/// use postprocess_rules::loader::parse_sidecar;
///
/// let content = "// retarget the enum column\nSTART\n  Text\nMapping\n";
/// let rules = parse_sidecar(content, "//").unwrap();
/// assert_eq!(rules.len(), 1);
/// assert_eq!(rules.as_slice()[0].target(), "Text");
/// ```
pub fn parse_sidecar(content: &str, comment_marker: &str) -> Result<RuleSet> {
    let significant: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| comment_marker.is_empty() || !line.starts_with(comment_marker))
        .collect();

    if significant.is_empty() {
        return Err(Error::format(
            "rule source has no rules; it must be composed of triplets",
            0,
        ));
    }
    if significant.len() % 3 != 0 {
        return Err(Error::format(
            "rule source must be composed of (activator, target, replacement) triplets",
            significant.len(),
        ));
    }

    let rules = significant
        .chunks_exact(3)
        .map(|triple| Rule::new(triple[0], triple[1], triple[2]))
        .collect();
    RuleSet::new(rules)
}
