// SPDX-License-Identifier: MIT OR Apache-2.0
//! Feed connection settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Address the authoring tool listens on by default
pub const DEFAULT_FEED_ADDRESS: &str = "127.0.0.1:8765";

/// Delay between reconnection attempts by default
pub const DEFAULT_RETRY_DELAY_MS: u64 = 1000;

/// How frames are carried from the authoring tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FeedTransport {
    /// WebSocket text messages, as the authoring tool's add-on serves them
    #[default]
    WebSocket,
    /// Newline-delimited JSON over plain TCP
    TcpLines,
}

/// Settings for [`crate::FeedClient`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// `host:port` of the authoring tool, or a full `ws://` URL
    pub address: String,
    /// Framing used on the connection
    pub transport: FeedTransport,
    /// Fixed delay before reconnecting after a failure, in milliseconds
    pub retry_delay_ms: u64,
    /// Whether to connect at all
    pub enabled: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_FEED_ADDRESS.to_string(),
            transport: FeedTransport::WebSocket,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            enabled: true,
        }
    }
}

impl FeedConfig {
    /// Config for a specific address
    pub fn with_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// Reconnection delay
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = FeedConfig::default();
        assert_eq!(config.address, "127.0.0.1:8765");
        assert_eq!(config.retry_delay(), Duration::from_secs(1));
        assert!(config.enabled);
        assert_eq!(config.transport, FeedTransport::WebSocket);
    }

    #[test]
    fn test_partial_ron() {
        let config: FeedConfig = ron::from_str("(retry_delay_ms: 250)").unwrap();
        assert_eq!(config.address, DEFAULT_FEED_ADDRESS);
        assert_eq!(config.retry_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_transport_from_ron() {
        let config: FeedConfig = ron::from_str("(transport: TcpLines)").unwrap();
        assert_eq!(config.transport, FeedTransport::TcpLines);
        assert_eq!(config.address, DEFAULT_FEED_ADDRESS);
    }
}
