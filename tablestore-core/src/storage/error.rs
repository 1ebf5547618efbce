//! Storage errors
//!
//! One taxonomy for every backend, so callers handle the in-process and
//! remote backends the same way.

/// Errors surfaced by adapters and tables.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A network-backed adapter could not obtain usable access configuration.
    #[error("invalid credentials: {reason}")]
    InvalidCredentials {
        /// What was missing or rejected
        reason: String,
    },

    /// `get` or `delete` targeted an identifier absent from the table.
    #[error("record not found: {table}/{id}")]
    RecordNotFound {
        /// Table that was searched
        table: String,
        /// Identifier that was requested
        id: String,
    },

    /// A record has no usable identifier field.
    #[error("invalid record identifier: {reason}")]
    InvalidRecordIdentifier {
        /// Why extraction failed
        reason: String,
    },

    /// A record could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backend could not be reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// The backend failed while reading.
    #[error("read error: {0}")]
    Read(String),

    /// The backend failed while writing.
    #[error("write error: {0}")]
    Write(String),

    /// The operation did not finish before its deadline.
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout {
        /// Operation name
        operation: &'static str,
        /// Deadline that expired
        timeout_ms: u64,
    },

    /// Anything else the backend reports.
    #[error("internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Create an invalid credentials error.
    pub fn invalid_credentials(reason: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            reason: reason.into(),
        }
    }

    /// Create a record not found error.
    pub fn not_found(table: impl Into<String>, id: impl Into<String>) -> Self {
        Self::RecordNotFound {
            table: table.into(),
            id: id.into(),
        }
    }

    /// Create an invalid record identifier error.
    pub fn invalid_record(reason: impl Into<String>) -> Self {
        Self::InvalidRecordIdentifier {
            reason: reason.into(),
        }
    }

    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a read error.
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }

    /// Create a write error.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }

    /// Create an internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The record does not exist; callers treat this as a normal outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RecordNotFound { .. })
    }

    /// The record itself is malformed.
    #[must_use]
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, Self::InvalidRecordIdentifier { .. })
    }

    /// Retrying the same call may succeed.
    #[must_use]
    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout { .. })
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
