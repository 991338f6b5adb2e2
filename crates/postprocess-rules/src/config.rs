//! Postprocessor configuration.
//!
//! Loaded from an optional `postprocess.toml` at the project root. Every key
//! has a default matching the conventional project layout:
//!
//! ```toml
//! prologue = "scripts/schema.rs.pre"
//! rules = "scripts/schema.rs.replace"
//! target = "src/autogen/schema.rs"
//! comment_marker = "//"
//! write_policy = "verify-then-write"
//! ```

use std::fmt;
use std::str::FromStr;

use postprocess_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::loader::{DEFAULT_COMMENT_MARKER, SidecarRules};

/// Name of the config file looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "postprocess.toml";

/// Order in which the output is committed and the rules are verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WritePolicy {
    /// Verify every rule was applied before touching the target file.
    /// On failure the target keeps its generated content.
    #[default]
    VerifyThenWrite,

    /// Write the output first, then verify. On failure the target is
    /// already rewritten.
    WriteThenVerify,
}

impl FromStr for WritePolicy {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verify-then-write" => Ok(WritePolicy::VerifyThenWrite),
            "write-then-verify" => Ok(WritePolicy::WriteThenVerify),
            _ => Err(Error::InvalidConfig {
                message: format!("unknown write policy '{}'", s),
            }),
        }
    }
}

impl fmt::Display for WritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WritePolicy::VerifyThenWrite => write!(f, "verify-then-write"),
            WritePolicy::WriteThenVerify => write!(f, "write-then-verify"),
        }
    }
}

/// Raw configuration as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PostprocessConfig {
    #[serde(default = "default_prologue")]
    pub prologue: String,
    #[serde(default = "default_rules")]
    pub rules: String,
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default = "default_comment_marker")]
    pub comment_marker: String,
    #[serde(default)]
    pub write_policy: WritePolicy,
}

fn default_prologue() -> String {
    "scripts/schema.rs.pre".to_string()
}

fn default_rules() -> String {
    "scripts/schema.rs.replace".to_string()
}

fn default_target() -> String {
    "src/autogen/schema.rs".to_string()
}

fn default_comment_marker() -> String {
    DEFAULT_COMMENT_MARKER.to_string()
}

impl Default for PostprocessConfig {
    fn default() -> Self {
        Self {
            prologue: default_prologue(),
            rules: default_rules(),
            target: default_target(),
            comment_marker: default_comment_marker(),
            write_policy: WritePolicy::default(),
        }
    }
}

impl PostprocessConfig {
    /// Load `postprocess.toml` from `root`, falling back to defaults when absent.
    pub fn discover(root: &NormalizedPath) -> Result<Self> {
        let path = root.join(CONFIG_FILE_NAME);
        Ok(ConfigStore::new().load_optional(&path)?.unwrap_or_default())
    }

    /// Load an explicitly named config file. The file must exist.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }

    /// Resolve relative paths against the project root.
    pub fn resolve(&self, root: &NormalizedPath) -> PostprocessPaths {
        PostprocessPaths {
            prologue: root.resolve(&self.prologue),
            target: root.resolve(&self.target),
        }
    }

    /// The sidecar rule source described by this config.
    pub fn sidecar(&self, root: &NormalizedPath) -> SidecarRules {
        SidecarRules::new(root.resolve(&self.rules)).with_comment_marker(&self.comment_marker)
    }
}

/// Concrete files touched by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostprocessPaths {
    /// Text written verbatim ahead of the rewritten content.
    pub prologue: NormalizedPath,
    /// Generated file, read and then overwritten in place.
    pub target: NormalizedPath,
}
