//! Run context resolution
//!
//! Combines the project root, the optional config file and CLI overrides into
//! the concrete paths and rule source for one run.

use std::path::Path;

use postprocess_fs::NormalizedPath;
use postprocess_rules::{PostprocessConfig, PostprocessPaths, Postprocessor, SidecarRules};

use crate::cli::PathArgs;
use crate::error::Result;

/// Everything a command needs to know about the project.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub root: NormalizedPath,
    pub config: PostprocessConfig,
}

impl RunContext {
    /// Resolve the context for `cwd`, applying CLI overrides on top of the config.
    pub fn resolve(cwd: &Path, args: &PathArgs) -> Result<Self> {
        let root = match &args.project_root {
            Some(root) if root.is_absolute() => NormalizedPath::new(root),
            Some(root) => NormalizedPath::new(cwd.join(root)),
            None => NormalizedPath::new(cwd),
        };

        let mut config = match &args.config {
            Some(path) => {
                let path = root.resolve(&path.to_string_lossy());
                PostprocessConfig::load(&path)?
            }
            None => PostprocessConfig::discover(&root)?,
        };

        if let Some(prologue) = &args.prologue {
            config.prologue = prologue.clone();
        }
        if let Some(rules) = &args.rules {
            config.rules = rules.clone();
        }
        if let Some(target) = &args.target {
            config.target = target.clone();
        }
        if let Some(marker) = &args.comment_marker {
            config.comment_marker = marker.clone();
        }

        tracing::debug!(root = %root, ?config, "resolved run context");
        Ok(Self { root, config })
    }

    pub fn paths(&self) -> PostprocessPaths {
        self.config.resolve(&self.root)
    }

    pub fn rule_source(&self) -> SidecarRules {
        self.config.sidecar(&self.root)
    }

    pub fn postprocessor(&self) -> Postprocessor {
        Postprocessor::new(self.paths()).with_policy(self.config.write_policy)
    }
}
