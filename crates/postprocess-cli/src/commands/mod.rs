//! Command implementations for postprocess-cli

pub mod apply;
pub mod check;
pub mod rules;

pub use apply::run_apply;
pub use check::run_check;
pub use rules::run_rules;
