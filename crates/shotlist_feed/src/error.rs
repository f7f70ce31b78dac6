// SPDX-License-Identifier: MIT OR Apache-2.0
//! Feed errors.

use tokio_tungstenite::tungstenite;

/// Errors raised while talking to the authoring tool
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Socket or runtime failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// WebSocket handshake or protocol failure
    #[error("WebSocket error: {0}")]
    WebSocket(Box<tungstenite::Error>),

    /// A frame was not a valid feed message
    #[error("Failed to decode message: {0}")]
    Decode(#[from] serde_json::Error),

    /// The connection was closed or could not be opened
    #[error("Connection closed: {0}")]
    Closed(String),
}

impl From<tungstenite::Error> for FeedError {
    fn from(err: tungstenite::Error) -> Self {
        Self::WebSocket(Box::new(err))
    }
}
