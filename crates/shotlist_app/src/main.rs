// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shotlist - live authoring-tool sync and camera shot playback
//!
//! Plays a list of camera shots in a fixed-rate loop while listening to the
//! authoring tool. When the tool reports its current frame, the shot list
//! follows it instead of playing on its own.

mod config;
mod demo;
mod session;

use anyhow::Result;
use clap::Parser;
use config::AppConfig;
use session::Session;
use shotlist_feed::FeedClient;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "shotlist")]
#[command(about = "Sequence camera shots and follow a live authoring tool")]
#[command(version)]
struct Cli {
    /// RON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Authoring tool address (host:port)
    #[arg(long)]
    address: Option<String>,

    /// Shot names to play, comma separated
    #[arg(long, value_delimiter = ',')]
    shots: Vec<String>,

    /// Loop the shot list
    #[arg(long = "loop")]
    looping: bool,

    /// Number of render ticks to run
    #[arg(long, default_value = "600")]
    ticks: u32,

    /// Do not connect to the authoring tool
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("shotlist_app=debug".parse()?)
        .add_directive("shotlist_sequencer=debug".parse()?)
        .add_directive("shotlist_feed=info".parse()?);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Shotlist v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(address) = cli.address {
        config.feed.address = address;
    }
    if !cli.shots.is_empty() {
        config.shots = cli.shots;
    }
    config.looping |= cli.looping;
    if cli.offline {
        config.feed.enabled = false;
    }

    let mut session = Session::new(&config);
    let mut feed = if config.feed.enabled {
        tracing::info!(
            address = %config.feed.address,
            transport = ?config.feed.transport,
            "Connecting to authoring tool"
        );
        Some(FeedClient::connect(&config.feed)?)
    } else {
        None
    };

    session.play();

    let tick = Duration::from_secs_f32(1.0 / config.tick_rate.max(1.0));
    let mut last = Instant::now();
    for _ in 0..cli.ticks {
        if let Some(feed) = feed.as_mut() {
            feed.poll(|event| session.handle_event(event));
        }

        let now = Instant::now();
        session.update((now - last).as_secs_f32());
        last = now;

        std::thread::sleep(tick);
    }

    let pose = session.output().borrow().pose;
    tracing::info!(state = ?session.state(), ?pose, "Stopping");

    if let Some(mut feed) = feed.take() {
        feed.shutdown();
        tracing::info!(stats = ?feed.stats(), "Feed closed");
    }

    Ok(())
}
