//! Batched push fan-out.
//!
//! Turns a (title, body, audience, data) tuple into provider-bounded
//! batches and reduces the returned tickets into a [`DeliverySummary`].
//! The dispatcher never raises on a delivery failure: every outcome,
//! including "no valid addresses", comes back as a summary.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};

use crate::audience::Audience;
use crate::message::{PushMessage, TicketStatus};
use crate::provider::PushProvider;
use crate::resolver::AddressResolver;
use crate::token::is_valid_push_token;

/// Outcome of one fan-out invocation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DeliverySummary {
    /// Messages the provider accepted.
    pub sent: usize,
    /// Messages that failed: rejected tickets, whole-batch submission
    /// failures, or the zero-valid-address condition.
    pub errors: usize,
    /// Valid addresses the fan-out attempted to reach.
    pub total_tokens: usize,
    /// Descriptive reason when nothing could be attempted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DeliverySummary {
    fn nothing_sent(reason: impl Into<String>) -> Self {
        Self {
            sent: 0,
            errors: 1,
            total_tokens: 0,
            reason: Some(reason.into()),
        }
    }
}

/// Fans one logical message out to every resolved address of an audience.
pub struct PushDispatcher {
    provider: Arc<dyn PushProvider>,
    resolver: Arc<dyn AddressResolver>,
}

impl PushDispatcher {
    /// Create a dispatcher over an injected provider and resolver.
    pub fn new(provider: Arc<dyn PushProvider>, resolver: Arc<dyn AddressResolver>) -> Self {
        Self { provider, resolver }
    }

    /// Deliver `title`/`body`/`data` to every member of `audience`.
    ///
    /// At-most-once best effort: a failed batch counts its addresses as
    /// errors and the remaining batches are still submitted. Always
    /// returns a summary, never an error.
    pub async fn send_to_audience(
        &self,
        title: &str,
        body: &str,
        audience: &Audience,
        data: Value,
    ) -> DeliverySummary {
        let tokens = match self.resolver.resolve(audience).await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(%audience, error = %e, "Address resolution failed");
                return DeliverySummary::nothing_sent(format!(
                    "address resolution failed for {audience}: {e}"
                ));
            }
        };

        let valid: Vec<String> = tokens
            .into_iter()
            .filter(|t| is_valid_push_token(t))
            .collect();

        if valid.is_empty() {
            debug!(%audience, "No valid push tokens for audience");
            return DeliverySummary::nothing_sent(format!(
                "no valid push tokens for audience {audience}"
            ));
        }

        let payload = attach_timestamp(data);
        let batch_size = self.provider.max_batch_size().max(1);
        let total_tokens = valid.len();
        let mut sent = 0usize;
        let mut errors = 0usize;

        for batch in valid.chunks(batch_size) {
            let messages: Vec<PushMessage> = batch
                .iter()
                .map(|token| PushMessage::new(token.clone(), title, body, payload.clone()))
                .collect();

            match self.provider.send_batch(&messages).await {
                Ok(tickets) => {
                    for (ticket, message) in tickets.iter().zip(&messages) {
                        match ticket.status {
                            TicketStatus::Ok => sent += 1,
                            TicketStatus::Error => {
                                errors += 1;
                                if ticket.is_device_not_registered() {
                                    warn!(
                                        to = %message.to,
                                        "Recipient no longer registered; token should be invalidated"
                                    );
                                } else {
                                    warn!(
                                        to = %message.to,
                                        error = ticket.message.as_deref().unwrap_or("unknown"),
                                        "Push ticket error"
                                    );
                                }
                            }
                        }
                    }
                    // A short ticket list leaves the tail unaccounted; count it as failed.
                    if tickets.len() < messages.len() {
                        errors += messages.len() - tickets.len();
                    }
                }
                Err(e) => {
                    errors += messages.len();
                    warn!(batch_size = messages.len(), error = %e, "Push batch submission failed");
                }
            }
        }

        debug!(%audience, sent, errors, total_tokens, "Push fan-out complete");
        DeliverySummary {
            sent,
            errors,
            total_tokens,
            reason: None,
        }
    }
}

/// Merge a generated timestamp into the outgoing payload.
fn attach_timestamp(data: Value) -> Value {
    let timestamp = Value::String(Utc::now().to_rfc3339());
    match data {
        Value::Object(mut map) => {
            map.insert("timestamp".to_string(), timestamp);
            Value::Object(map)
        }
        Value::Null => serde_json::json!({ "timestamp": timestamp }),
        other => serde_json::json!({ "payload": other, "timestamp": timestamp }),
    }
}
