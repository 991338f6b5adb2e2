//! Error types for postprocess-rules

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] postprocess_fs::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The rule source does not group into `(activator, target, replacement)` triples.
    #[error("Malformed rule source: {message} (found {significant_lines} significant lines)")]
    Format {
        message: String,
        significant_lines: usize,
    },

    /// A rule never performed its replacement.
    #[error(
        "Rule #{index} \"{activator}\" \"{target}\" has not been applied \
         ({unsatisfied} unsatisfied rule(s) in total)"
    )]
    Activation {
        index: usize,
        activator: String,
        target: String,
        unsatisfied: usize,
    },
}

impl Error {
    pub(crate) fn format(message: impl Into<String>, significant_lines: usize) -> Self {
        Self::Format {
            message: message.into(),
            significant_lines,
        }
    }
}
