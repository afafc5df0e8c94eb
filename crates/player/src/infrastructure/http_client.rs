//! reqwest adapter for the raw API port.
//!
//! Non-success statuses are mapped to [`ApiError::Backend`], carrying the
//! backend's `{error}` body when one is present so the user sees the
//! backend's own words.

use serde_json::Value;

use escapade_protocol::ErrorBody;

use crate::ports::outbound::{ApiError, RawApiPort};

pub struct HttpApiAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApiAdapter {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response(response: reqwest::Response) -> Result<Value, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::decode(e.to_string()));
        }
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("request failed with status {status}"));
        Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait::async_trait]
impl RawApiPort for HttpApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        Self::handle_response(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;
        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_normalized() {
        let adapter = HttpApiAdapter::new("http://localhost:5000/");
        assert_eq!(
            adapter.url("/start_game"),
            "http://localhost:5000/start_game"
        );
    }
}
