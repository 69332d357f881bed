/// Error taxonomy for the storage boundary
///
/// Every store operation returns one of four classifications. The first
/// three are domain failures a caller can act on; `Internal` covers driver
/// and connectivity faults whose details should be logged, not shown.
/// Transport layers map the classification, never re-derive it: REST turns
/// NotFound into 404 and the other domain variants into 400, GraphQL tags
/// domain failures with a `BAD_USER_INPUT` extension code.

use thiserror::Error;

/// Result type alias for store operations
pub type DataResult<T> = Result<T, DataError>;

/// Classified storage-boundary error
#[derive(Debug, Clone, Error)]
pub enum DataError {
    /// The addressed entity does not exist
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness constraint would be violated (e.g. duplicate email)
    #[error("{0}")]
    Conflict(String),

    /// Malformed input or an invalid relational reference
    #[error("{0}")]
    BadInput(String),

    /// Driver or connectivity fault; message is for logs, not clients
    #[error("storage error: {0}")]
    Internal(String),
}

impl DataError {
    /// True for failures a well-formed client request could avoid
    pub fn is_domain(&self) -> bool {
        !matches!(self, DataError::Internal(_))
    }
}

impl From<mongodb::error::Error> for DataError {
    fn from(err: mongodb::error::Error) -> Self {
        DataError::Internal(err.to_string())
    }
}
