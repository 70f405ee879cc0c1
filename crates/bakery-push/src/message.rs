//! Wire types of the push-provider boundary.

use serde::{Deserialize, Serialize};

/// One message in a batch submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushMessage {
    /// Recipient push address.
    pub to: String,
    /// Display title.
    pub title: String,
    /// Display body.
    pub body: String,
    /// Structured payload handed to the mobile client.
    pub data: serde_json::Value,
    /// Notification sound.
    pub sound: String,
    /// Delivery priority.
    pub priority: String,
}

impl PushMessage {
    /// Build a message with the fixed sound/priority the mobile client expects.
    pub fn new(to: String, title: &str, body: &str, data: serde_json::Value) -> Self {
        Self {
            to,
            title: title.to_string(),
            body: body.to_string(),
            data,
            sound: "default".to_string(),
            priority: "high".to_string(),
        }
    }
}

/// Per-message acknowledgment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    /// Accepted by the provider.
    Ok,
    /// Rejected; `message`/`details` carry the reason.
    Error,
}

/// Per-message delivery ticket, returned in submission order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushTicket {
    /// Acknowledgment status.
    pub status: TicketStatus,
    /// Provider-assigned receipt id, on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable error, on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Structured error details, on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PushTicket {
    /// Ticket for an accepted message.
    pub fn ok(id: impl Into<String>) -> Self {
        Self {
            status: TicketStatus::Ok,
            id: Some(id.into()),
            message: None,
            details: None,
        }
    }

    /// Ticket for a rejected message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: TicketStatus::Error,
            id: None,
            message: Some(message.into()),
            details: None,
        }
    }

    /// Whether the provider reports the recipient as no longer registered.
    ///
    /// Surfaced as a hint only; address invalidation is not performed by
    /// this subsystem.
    pub fn is_device_not_registered(&self) -> bool {
        self.details
            .as_ref()
            .and_then(|d| d.get("error"))
            .and_then(|e| e.as_str())
            .map(|e| e == "DeviceNotRegistered")
            .unwrap_or(false)
    }
}
