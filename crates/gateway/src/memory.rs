//! In-memory gateway for exercising the router without a database.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::{GatewayError, Result, STATUS_MESSAGE, StatusGateway};

#[derive(Debug)]
struct InMemoryGatewayState {
    message: String,
    failure: Option<String>,
    calls: usize,
}

impl Default for InMemoryGatewayState {
    fn default() -> Self {
        Self {
            message: STATUS_MESSAGE.to_string(),
            failure: None,
            calls: 0,
        }
    }
}

/// In-memory gateway for testing.
///
/// Clones share state, so a test can keep a handle while the router owns
/// another and still observe how often the gateway was called.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGateway {
    state: Arc<RwLock<InMemoryGatewayState>>,
}

impl InMemoryGateway {
    /// Creates a gateway answering with [`STATUS_MESSAGE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gateway answering with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        let gateway = Self::default();
        gateway.state.write().unwrap().message = message.into();
        gateway
    }

    /// Creates a gateway that fails every call with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        let gateway = Self::default();
        gateway.set_failure(Some(reason.into()));
        gateway
    }

    /// Makes subsequent calls fail with `reason`, or succeed again on `None`.
    pub fn set_failure(&self, reason: Option<String>) {
        self.state.write().unwrap().failure = reason;
    }

    /// Returns how many times the message was requested.
    pub fn calls(&self) -> usize {
        self.state.read().unwrap().calls
    }
}

#[async_trait]
impl StatusGateway for InMemoryGateway {
    async fn fetch_message(&self) -> Result<String> {
        let mut state = self.state.write().unwrap();
        state.calls += 1;

        match &state.failure {
            Some(reason) => Err(GatewayError::Unavailable(reason.clone())),
            None => Ok(state.message.clone()),
        }
    }
}
