use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// ValidationError
// ---------------------------------------------------------------------------

/// A single field-level validation failure on input to a public operation.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub path: String,
    pub expected: String,
    pub received: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"Validation failed at "{}": expected {}, received {}"#,
            self.path, self.expected, self.received
        )
    }
}

impl std::error::Error for ValidationError {}

// ---------------------------------------------------------------------------
// StoreError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Revision conflict on {id}: expected revision {expected}, found {found}")]
    Conflict {
        id: String,
        expected: u64,
        found: u64,
    },

    #[error("Store backend error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

// ---------------------------------------------------------------------------
// CopyError — top-level rollup
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("No sections found in source record")]
    EmptySource,

    #[error("Selected sections not found")]
    SelectionNotFound,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convenience alias — the default error type is `CopyError`.
pub type Result<T, E = CopyError> = std::result::Result<T, E>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
