//! Push provider configuration.

use serde::{Deserialize, Serialize};

/// Push delivery provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Batch submission endpoint of the push provider.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Maximum messages the provider accepts per submission call.
    #[serde(default = "default_batch_size")]
    pub max_batch_size: usize,
    /// Timeout for a single batch submission, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            max_batch_size: default_batch_size(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_endpoint() -> String {
    "https://exp.host/--/api/v2/push/send".to_string()
}

fn default_batch_size() -> usize {
    100
}

fn default_timeout() -> u64 {
    10
}
