use std::time::Duration;

use thiserror::Error;

/// Errors raised while fetching the status message.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The connection attempt did not complete within the connect timeout.
    #[error("connection to database timed out after {0:?}")]
    ConnectTimeout(Duration),

    /// The database refused the connection, rejected the credentials or
    /// failed the query.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The gateway could not produce a message for another reason.
    #[error("status unavailable: {0}")]
    Unavailable(String),
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
