use async_trait::async_trait;
use gloo::net::http::Request;
use log::debug;
use shared::{FieldMapping, RequestError, SubmissionResponse, SubmitTransport};

use crate::config::AppConfig;

/// API client for posting form submissions to the backend
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(AppConfig::from_build_env().api_base_url)
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl SubmitTransport for ApiClient {
    async fn post_json(
        &self,
        path: &str,
        body: &FieldMapping,
    ) -> Result<SubmissionResponse, RequestError> {
        let url = self.endpoint_url(path);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| RequestError::Serialize(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| RequestError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RequestError::Transport(format!("Failed to read reply: {}", e)))?;

        debug!(target: "api", "{} answered with status {}", url, status);
        SubmissionResponse::from_reply(status, &text)
    }
}
