//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Rewrite a generated schema file with positional, single-use rules
#[derive(Parser, Debug)]
#[command(name = "schema-postprocess")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub paths: PathArgs,

    /// The command to run (defaults to `apply`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where to find the project and its files.
///
/// Flags override values from the config file.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs {
    /// Project root that relative paths resolve against
    #[arg(short = 'C', long, global = true, env = "SCHEMA_POSTPROCESS_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Config file (default: <root>/postprocess.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Prologue written ahead of the rewritten content
    #[arg(long, global = true)]
    pub prologue: Option<String>,

    /// Sidecar rule file
    #[arg(long, global = true)]
    pub rules: Option<String>,

    /// Generated file to rewrite in place
    #[arg(long, global = true)]
    pub target: Option<String>,

    /// Line-comment marker in the rule file
    #[arg(long, global = true)]
    pub comment_marker: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Rewrite the generated file in place
    Apply {
        /// Write the output before verifying that every rule was applied
        #[arg(long)]
        write_then_verify: bool,

        /// Print a unified diff instead of writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Verify every rule would apply, without writing
    Check {
        /// Also print the unified diff of the pending rewrite
        #[arg(long)]
        diff: bool,
    },

    /// List the configured rules in evaluation order
    Rules {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Apply {
            write_then_verify: false,
            dry_run: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["schema-postprocess"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_apply_flags() {
        let cli = Cli::parse_from(["schema-postprocess", "apply", "--write-then-verify"]);
        assert_eq!(
            cli.command,
            Some(Commands::Apply {
                write_then_verify: true,
                dry_run: false,
            })
        );
    }

    #[test]
    fn test_global_path_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "schema-postprocess",
            "check",
            "-C",
            "/project",
            "--target",
            "gen/schema.rs",
        ]);
        assert_eq!(cli.paths.project_root, Some(PathBuf::from("/project")));
        assert_eq!(cli.paths.target.as_deref(), Some("gen/schema.rs"));
        assert_eq!(cli.command, Some(Commands::Check { diff: false }));
    }

    #[test]
    fn test_rules_json() {
        let cli = Cli::parse_from(["schema-postprocess", "rules", "--json"]);
        assert_eq!(cli.command, Some(Commands::Rules { json: true }));
    }
}
