//! Raw API port - object-safe HTTP boundary.
//!
//! The application layer works through the typed wrapper in
//! `application::api`; adapters implement this object-safe trait so the
//! wrapper can be stored behind `Arc<dyn RawApiPort>` and swapped for a mock
//! in tests.

use serde_json::Value;
use thiserror::Error;

/// Failure of a backend call.
///
/// `Backend` carries the message from the backend's `{error}` body when one
/// was present; transport and decode problems never reach the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Request could not be sent or the connection dropped
    #[error("network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
}
