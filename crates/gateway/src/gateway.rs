use async_trait::async_trait;

use crate::Result;

/// The one query the service ever runs.
pub const STATUS_QUERY: &str = "SELECT 'PI-Credit running on EKS' AS message";

/// The value [`STATUS_QUERY`] yields.
pub const STATUS_MESSAGE: &str = "PI-Credit running on EKS";

/// Source of the status message served at `/`.
///
/// Implementations keep no state between calls; each invocation either
/// returns the message or the error that prevented it.
#[async_trait]
pub trait StatusGateway: Send + Sync {
    /// Fetches the status message.
    async fn fetch_message(&self) -> Result<String>;
}
