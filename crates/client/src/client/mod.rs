//! HTTP client for the rsvp API.

pub mod health;
pub mod rsvps;

use crate::error::{ClientError, Result};

/// HTTP client for the rsvp API.
#[derive(Debug, Clone)]
pub struct RsvpClient {
    client: reqwest::Client,
    base_url: String,
}

impl RsvpClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Handle error responses.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        resource: impl Into<String>,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(Self::error_from(response, resource).await)
        }
    }

    /// Handle responses whose body is ignored.
    async fn handle_empty_response(
        &self,
        response: reqwest::Response,
        resource: impl Into<String>,
    ) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response, resource).await)
        }
    }

    async fn error_from(response: reqwest::Response, resource: impl Into<String>) -> ClientError {
        let status = response.status();
        if status.as_u16() == 404 {
            return ClientError::NotFound {
                resource: resource.into(),
            };
        }
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        ClientError::ServerError {
            status: status.as_u16(),
            message,
        }
    }
}
