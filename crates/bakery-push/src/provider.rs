//! Push provider trait and the Expo-style HTTP client.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use bakery_core::config::push::PushConfig;
use bakery_core::error::{AppError, ErrorKind};
use bakery_core::result::AppResult;

use crate::message::{PushMessage, PushTicket};

/// A push-delivery provider accepting batched messages.
///
/// Always constructor-injected (never process-global) so the dispatcher
/// can be exercised against a fake provider in tests.
#[async_trait]
pub trait PushProvider: Send + Sync {
    /// Maximum messages the provider accepts per submission call.
    fn max_batch_size(&self) -> usize;

    /// Submit one batch; tickets come back in submission order.
    ///
    /// An `Err` means the whole submission failed (network, timeout,
    /// non-2xx); per-message problems are reported through tickets.
    async fn send_batch(&self, messages: &[PushMessage]) -> AppResult<Vec<PushTicket>>;
}

/// Response envelope of the provider's batch endpoint.
#[derive(Debug, Deserialize)]
struct BatchResponse {
    data: Vec<PushTicket>,
}

/// HTTP client for the Expo push service.
#[derive(Debug, Clone)]
pub struct ExpoPushClient {
    http: reqwest::Client,
    endpoint: String,
    max_batch_size: usize,
}

impl ExpoPushClient {
    /// Build a client from configuration; the submission timeout is
    /// applied to every batch call.
    pub fn new(config: &PushConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    "Failed to build push HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            max_batch_size: config.max_batch_size,
        })
    }
}

#[async_trait]
impl PushProvider for ExpoPushClient {
    fn max_batch_size(&self) -> usize {
        self.max_batch_size
    }

    async fn send_batch(&self, messages: &[PushMessage]) -> AppResult<Vec<PushTicket>> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(messages)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Push batch submission failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "Push provider returned HTTP {status}"
            )));
        }

        let body: BatchResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Invalid push provider response: {e}"),
                e,
            )
        })?;

        Ok(body.data)
    }
}
