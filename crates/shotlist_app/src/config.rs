// SPDX-License-Identifier: MIT OR Apache-2.0
//! Application settings.
//!
//! Settings live in a RON file. Every field is optional:
//!
//! ```ron
//! (
//!     feed: (address: "127.0.0.1:8765", retry_delay_ms: 500),
//!     shots: ["wide", "close", "orbit"],
//!     looping: true,
//!     shot_durations: {"close": 3.0},
//!     cues: [(frame: 48, name: "title")],
//! )
//! ```

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use shotlist_feed::FeedConfig;
use shotlist_sequencer::{CameraClip, DEFAULT_BASE_FRAMERATE};
use std::path::Path;

/// A named point on the timeline, logged when playback passes it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    /// Frame number at `base_framerate`
    pub frame: u32,
    /// Label
    pub name: String,
}

/// Top-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Authoring tool connection
    pub feed: FeedConfig,
    /// Shot names to play, in order (empty = every clip)
    pub shots: Vec<String>,
    /// Loop the shot list
    pub looping: bool,
    /// Timeline duration overrides, in seconds
    pub shot_durations: IndexMap<String, f32>,
    /// Timeline cues
    pub cues: Vec<Cue>,
    /// Frame rate for cue frames
    pub base_framerate: f32,
    /// Camera clips (empty = built-in demo clips)
    pub clips: Vec<CameraClip>,
    /// Render loop rate in Hz
    pub tick_rate: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed: FeedConfig::default(),
            shots: Vec::new(),
            looping: false,
            shot_durations: IndexMap::new(),
            cues: Vec::new(),
            base_framerate: DEFAULT_BASE_FRAMERATE,
            clips: Vec::new(),
            tick_rate: 60.0,
        }
    }
}

impl AppConfig {
    /// Load settings from a RON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_ron(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse settings from RON text
    pub fn from_ron(text: &str) -> anyhow::Result<Self> {
        Ok(ron::from_str(text)?)
    }
}
