// SPDX-License-Identifier: MIT OR Apache-2.0
//! Reconnecting feed client.
//!
//! A worker thread runs a current-thread tokio runtime that keeps a
//! connection to the authoring tool open, retrying after a fixed delay when
//! it fails. Decoded events are queued on a channel; the render loop drains
//! them with [`FeedClient::poll`] and never waits on the network.
//!
//! The authoring tool serves WebSocket text messages ([`WsConnector`]).
//! [`TcpLineConnector`] reads newline-delimited JSON from a plain socket.

use crate::config::{FeedConfig, FeedTransport};
use crate::error::FeedError;
use crate::message::{FeedEvent, FeedMessage};
use futures::StreamExt;
use parking_lot::RwLock;
use std::future::Future;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, watch};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

/// Opens connections to the authoring tool
pub trait FeedConnector: Send + 'static {
    /// An open connection
    type Connection: FeedConnection;

    /// Try to connect once
    fn connect(&mut self) -> impl Future<Output = Result<Self::Connection, FeedError>>;
}

/// An open connection yielding text frames
pub trait FeedConnection {
    /// Next text frame, `None` once the peer closed the connection
    fn next_frame(&mut self) -> impl Future<Output = Result<Option<String>, FeedError>>;
}

/// Connector for the authoring tool's WebSocket server
#[derive(Debug, Clone)]
pub struct WsConnector {
    url: String,
}

impl WsConnector {
    /// Connect to `host:port` or a full `ws://` URL
    pub fn new(address: &str) -> Self {
        let url = if address.starts_with("ws://") || address.starts_with("wss://") {
            address.to_string()
        } else {
            format!("ws://{address}")
        };
        Self { url }
    }

    /// URL the connector opens
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl FeedConnector for WsConnector {
    type Connection = WsConnection;

    async fn connect(&mut self) -> Result<WsConnection, FeedError> {
        let (stream, response) = tokio_tungstenite::connect_async(self.url.as_str()).await?;
        tracing::debug!(url = %self.url, status = %response.status(), "WebSocket handshake done");
        Ok(WsConnection { stream })
    }
}

/// WebSocket connection yielding text messages
pub struct WsConnection {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

impl FeedConnection for WsConnection {
    async fn next_frame(&mut self) -> Result<Option<String>, FeedError> {
        while let Some(message) = self.stream.next().await {
            match message? {
                Message::Text(text) => return Ok(Some(text)),
                Message::Binary(bytes) => match String::from_utf8(bytes) {
                    Ok(text) => return Ok(Some(text)),
                    Err(_) => tracing::debug!("Ignoring non UTF-8 binary message"),
                },
                Message::Close(_) => return Ok(None),
                // Pongs are queued by the stream itself
                Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => {}
            }
        }
        Ok(None)
    }
}

/// Connector for newline-delimited JSON over TCP
#[derive(Debug, Clone)]
pub struct TcpLineConnector {
    address: String,
}

impl TcpLineConnector {
    /// Connect to `host:port`
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

impl FeedConnector for TcpLineConnector {
    type Connection = TcpLineConnection;

    async fn connect(&mut self) -> Result<TcpLineConnection, FeedError> {
        let stream = TcpStream::connect(&self.address).await?;
        stream.set_nodelay(true)?;
        Ok(TcpLineConnection {
            lines: BufReader::new(stream).lines(),
        })
    }
}

/// Line-framed TCP connection
pub struct TcpLineConnection {
    lines: Lines<BufReader<TcpStream>>,
}

impl FeedConnection for TcpLineConnection {
    async fn next_frame(&mut self) -> Result<Option<String>, FeedError> {
        Ok(self.lines.next_line().await?)
    }
}

/// Counters describing the feed's health
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedStats {
    /// Connection attempts, successful or not
    pub connection_attempts: u64,
    /// Successful connections
    pub connections: u64,
    /// Frames decoded
    pub frames: u64,
    /// Frames that failed to decode
    pub decode_errors: u64,
    /// Whether a connection is currently open
    pub connected: bool,
}

/// Handle to the background feed worker
pub struct FeedClient {
    events: mpsc::UnboundedReceiver<FeedEvent>,
    shutdown_tx: watch::Sender<bool>,
    worker: Option<JoinHandle<()>>,
    stats: Arc<RwLock<FeedStats>>,
}

impl FeedClient {
    /// Connect to the configured address with the configured transport
    pub fn connect(config: &FeedConfig) -> Result<Self, FeedError> {
        match config.transport {
            FeedTransport::WebSocket => Self::spawn(WsConnector::new(&config.address), config),
            FeedTransport::TcpLines => {
                Self::spawn(TcpLineConnector::new(config.address.clone()), config)
            }
        }
    }

    /// Start the worker with a custom connector
    pub fn spawn<T: FeedConnector>(connector: T, config: &FeedConfig) -> Result<Self, FeedError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let (event_tx, events) = mpsc::unbounded_channel();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let stats = Arc::new(RwLock::new(FeedStats::default()));

        let worker = FeedWorker {
            connector,
            retry_delay: config.retry_delay(),
            events: event_tx,
            stats: Arc::clone(&stats),
            shutdown: shutdown_rx,
        };

        let worker = std::thread::Builder::new()
            .name("shotlist-feed".to_string())
            .spawn(move || runtime.block_on(worker.run()))?;

        Ok(Self {
            events,
            shutdown_tx,
            worker: Some(worker),
            stats,
        })
    }

    /// Hand every queued event to `on_event`, returning how many there were
    pub fn poll(&mut self, mut on_event: impl FnMut(FeedEvent)) -> usize {
        let mut count = 0;
        while let Ok(event) = self.events.try_recv() {
            on_event(event);
            count += 1;
        }
        count
    }

    /// Snapshot of the feed counters
    pub fn stats(&self) -> FeedStats {
        self.stats.read().clone()
    }

    /// Whether a connection is currently open
    pub fn is_connected(&self) -> bool {
        self.stats.read().connected
    }

    /// Stop the worker and wait for it to exit
    pub fn shutdown(&mut self) {
        self.shutdown_tx.send_replace(true);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::error!("Feed worker panicked");
            }
        }
    }
}

impl Drop for FeedClient {
    fn drop(&mut self) {
        self.shutdown();
    }
}

struct FeedWorker<T> {
    connector: T,
    retry_delay: Duration,
    events: mpsc::UnboundedSender<FeedEvent>,
    stats: Arc<RwLock<FeedStats>>,
    shutdown: watch::Receiver<bool>,
}

impl<T: FeedConnector> FeedWorker<T> {
    async fn run(mut self) {
        tracing::debug!(retry_delay = ?self.retry_delay, "Feed worker started");

        loop {
            if *self.shutdown.borrow() {
                break;
            }

            self.stats.write().connection_attempts += 1;
            let connected = tokio::select! {
                result = self.connector.connect() => result,
                _ = self.shutdown.changed() => break,
            };

            match connected {
                Ok(connection) => {
                    if !self.pump(connection).await {
                        break;
                    }
                }
                Err(err) => tracing::warn!("Feed connection failed: {err}"),
            }

            tokio::select! {
                () = tokio::time::sleep(self.retry_delay) => {}
                _ = self.shutdown.changed() => break,
            }
        }

        self.stats.write().connected = false;
        tracing::debug!("Feed worker stopped");
    }

    /// Forward frames until the connection drops. Returns false to stop for good.
    async fn pump(&mut self, mut connection: T::Connection) -> bool {
        {
            let mut stats = self.stats.write();
            stats.connections += 1;
            stats.connected = true;
        }
        tracing::info!("Feed connected");

        let reconnect = loop {
            let frame = tokio::select! {
                frame = connection.next_frame() => frame,
                _ = self.shutdown.changed() => break false,
            };

            match frame {
                Ok(Some(text)) => {
                    if !self.dispatch(&text) {
                        break false;
                    }
                }
                Ok(None) => {
                    tracing::info!("Feed closed by peer");
                    break true;
                }
                Err(err) => {
                    tracing::warn!("Feed read failed: {err}");
                    break true;
                }
            }
        };

        self.stats.write().connected = false;
        reconnect
    }

    /// Decode one frame and queue its events. Returns false once nobody listens.
    fn dispatch(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            return true;
        }

        let message = match FeedMessage::parse(text) {
            Ok(message) => message,
            Err(err) => {
                self.stats.write().decode_errors += 1;
                tracing::warn!("Skipping feed frame: {err}");
                return true;
            }
        };

        self.stats.write().frames += 1;
        message
            .events()
            .into_iter()
            .all(|event| self.events.send(event).is_ok())
    }
}
