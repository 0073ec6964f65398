use thiserror::Error;

/// Errors raised by member activities.
///
/// Unlike groups, these are mapped to wire errors per-route: each operation
/// has its own generic failure phrase, so conversion lives in the handlers.
#[derive(Error, Debug)]
pub enum MemberError {
    /// A required field was missing or empty.
    #[error("{0}")]
    InvalidInput(String),

    /// No member matched the lookup key. The message carries the detail for
    /// the log; it is not for callers.
    #[error("{0}")]
    NotFound(String),

    /// Store failure.
    #[error(transparent)]
    Downstream(#[from] anyhow::Error),
}
