use thiserror::Error;

/// Failures surfaced by the core library.
///
/// The rewrite itself is total over text; these cover the edges around it
/// (file I/O, configuration, user-supplied debug patterns) and the
/// restoration invariant.
#[derive(Debug, Error)]
pub enum ShiftError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Restore(#[from] RestoreError),
}

/// Violations of the protect/restore contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RestoreError {
    /// A protected span never reappeared in the rewritten text.
    #[error("protected span {id} was not found in the rewritten text")]
    UnconsumedSpan { id: usize },
}

pub type ShiftResult<T> = Result<T, ShiftError>;
