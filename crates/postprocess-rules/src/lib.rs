//! Rule activation and line rewriting for the schema postprocessor.
//!
//! A generated schema file is almost usable as-is, but a few declarations must
//! be pointed at hand-written types. Each [`Rule`] names an *activator*
//! substring that opens its context and a *target* substring to replace once
//! that context has been seen. A run:
//!
//! 1. loads an ordered [`RuleSet`] from a [`RuleSource`]
//! 2. streams every line of the generated file through an [`ActivationTracker`]
//! 3. assembles prologue, blank separator and transformed lines
//! 4. checks that every rule was applied exactly once
//!
//! ```text
//! diesel::table! {            <- activator seen, rule becomes active
//!     coin_store_events (id) {
//!         ev_action -> Text,  <- first target after activation, replaced
//! ```
//!
//! A single line can activate several rules, but at most one replacement is
//! applied per line.

pub mod config;
pub mod error;
pub mod loader;
pub mod postprocess;
pub mod rewriter;
pub mod rule;
pub mod tracker;
pub mod verify;

pub use config::{CONFIG_FILE_NAME, PostprocessConfig, PostprocessPaths, WritePolicy};
pub use error::{Error, Result};
pub use loader::{DEFAULT_COMMENT_MARKER, RuleSource, SidecarRules, StaticRules, parse_sidecar};
pub use postprocess::{DryRun, Postprocessor};
pub use rewriter::rewrite;
pub use rule::{Rule, RuleSet};
pub use tracker::{ActivationTracker, RuleOutcome, RuleStatus, RunReport, TrackedRule};
pub use verify::{verify, verify_report};
