// SPDX-License-Identifier: MIT OR Apache-2.0
//! Live data feed from the animation-authoring tool.
//!
//! The authoring tool pushes the pose of a selected object and its current
//! frame. This crate provides:
//! - Decoding of the tool's JSON messages into [`FeedEvent`]s
//! - A reconnecting WebSocket client with a fixed retry delay
//! - Connection settings loadable from RON
//!
//! The client never calls into the embedder. Events are queued and drained
//! with [`FeedClient::poll`] from the embedder's own loop.

pub mod client;
pub mod config;
pub mod error;
pub mod message;

pub use client::{
    FeedClient, FeedConnection, FeedConnector, FeedStats, TcpLineConnection, TcpLineConnector,
    WsConnection, WsConnector,
};
pub use config::{FeedConfig, FeedTransport, DEFAULT_FEED_ADDRESS, DEFAULT_RETRY_DELAY_MS};
pub use error::FeedError;
pub use message::{FeedEvent, FeedMessage, FrameTick, PoseUpdate, WireQuat, WireVec3};
