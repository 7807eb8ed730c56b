//! ERP stock API client
//!
//! The authoritative inventory lives in the upstream ERP. This client
//! fetches the nested batches/articles response and pushes bulk quantity
//! updates back. It performs no retries; callers decide what a failed
//! update means for staged edits.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use shared::{BatchResponse, QuantityChange};

use crate::error::{AppError, AppResult};

/// Client for the upstream ERP stock API
#[derive(Clone)]
pub struct ErpStockClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Bulk update payload; `changes` is exactly the reconciler's diff
#[derive(Debug, Serialize)]
struct BulkUpdateRequest<'a> {
    changes: &'a [QuantityChange],
}

impl ErpStockClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: String, api_key: String, timeout_seconds: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_seconds))
                .build()
                .unwrap_or_default(),
            base_url,
            api_key,
        }
    }

    fn request(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.api_key.is_empty() {
            builder
        } else {
            builder.bearer_auth(&self.api_key)
        }
    }

    /// Fetch the nested stock response for the warehouse
    pub async fn fetch_batches(&self) -> AppResult<BatchResponse> {
        let url = format!("{}/stock/batches", self.base_url);

        let response = self
            .request(self.client.get(&url))
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnreachable(format!("stock fetch failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "stock fetch returned {}: {}",
                status, body
            )));
        }

        response
            .json::<BatchResponse>()
            .await
            .map_err(|e| AppError::Upstream(format!("invalid stock response: {}", e)))
    }

    /// Push a batch of staged quantity changes to the ERP
    pub async fn bulk_update_quantities(&self, changes: &[QuantityChange]) -> AppResult<()> {
        let url = format!("{}/stock/quantities", self.base_url);

        let response = self
            .request(self.client.post(&url))
            .json(&BulkUpdateRequest { changes })
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnreachable(format!("bulk update failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!(
                "bulk update returned {}: {}",
                status, body
            )));
        }

        Ok(())
    }

    /// Whether the upstream answers at all, for health reporting
    pub async fn ping(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.request(self.client.get(&url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
