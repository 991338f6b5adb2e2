//! Filesystem layer for the schema postprocessor
//!
//! Provides normalized path handling, whole-file reads, atomic writes and
//! format-agnostic config loading.

pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
