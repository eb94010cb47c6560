//! Health check operations.

use super::RsvpClient;
use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// Readiness of the record store.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyStatus {
    pub healthy: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Cache statistics.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub cached_rsvps: usize,
}

impl RsvpClient {
    /// Liveness probe.
    pub async fn health_live(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        self.handle_empty_response(response, "/livez").await
    }

    /// Readiness probe. A 503 still carries a status body.
    pub async fn health_ready(&self) -> Result<ReadyStatus> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        if response.status().as_u16() == 503 {
            return response.json().await.map_err(ClientError::from);
        }
        self.handle_response(response, "/readyz").await
    }

    /// Cache statistics.
    pub async fn health_cache(&self) -> Result<CacheStats> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        self.handle_response(response, "/healthz").await
    }
}
