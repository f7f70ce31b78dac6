// SPDX-License-Identifier: MIT OR Apache-2.0
//! Glue between the feed and the shot sequencer.
//!
//! Frame ticks from the authoring tool scrub the shot list to the tool's
//! current time. Pose updates drive a separate live camera so the streamed
//! object can be previewed next to the sequenced output.

use crate::config::AppConfig;
use crate::demo::demo_clips;
use shotlist_feed::{FeedEvent, FrameTick, PoseUpdate};
use shotlist_sequencer::{
    shared, Camera, CameraPose, PerspectiveCamera, SequencerState, SharedCamera, ShotSequencer,
};
use std::rc::Rc;

/// Sequencer plus the cameras the application renders from
pub struct Session {
    sequencer: ShotSequencer<PerspectiveCamera>,
    output: SharedCamera<PerspectiveCamera>,
    live: SharedCamera<PerspectiveCamera>,
    last_tick: Option<FrameTick>,
    live_object: Option<String>,
}

impl Session {
    /// Build cameras and the sequencer from settings
    pub fn new(config: &AppConfig) -> Self {
        let clips = if config.clips.is_empty() {
            demo_clips()
        } else {
            config.clips.clone()
        };

        let cameras: Vec<_> = clips
            .iter()
            .map(|clip| (clip.name.clone(), shared(PerspectiveCamera::default())))
            .collect();

        let names: Vec<String> = if config.shots.is_empty() {
            clips.iter().map(|clip| clip.name.clone()).collect()
        } else {
            config.shots.clone()
        };

        let mut sequencer = ShotSequencer::new(cameras, clips);
        sequencer.configure(&names);
        sequencer.looping = config.looping;

        for (name, seconds) in &config.shot_durations {
            if !sequencer.set_shot_duration(name, *seconds) {
                tracing::warn!("No shot named {name:?} to set a duration on");
            }
        }

        for cue in &config.cues {
            let name = cue.name.clone();
            let frame = cue.frame;
            sequencer.register_frame_script(
                frame,
                move || tracing::info!(cue = %name, frame, "Cue reached"),
                config.base_framerate,
            );
        }

        let output = shared(PerspectiveCamera::default());
        sequencer.output_camera = Some(Rc::clone(&output));

        tracing::info!(
            shots = ?sequencer.sequence_names(),
            duration = sequencer.total_duration(),
            "Shot list ready"
        );

        Self {
            sequencer,
            output,
            live: shared(PerspectiveCamera::default()),
            last_tick: None,
            live_object: None,
        }
    }

    /// Start playback from the first shot
    pub fn play(&mut self) {
        self.last_tick = None;
        self.sequencer.play_with(|| tracing::info!("Shot list finished"));
    }

    /// Advance playback
    pub fn update(&mut self, delta: f32) {
        self.sequencer.update(delta);
    }

    /// Route one feed event
    pub fn handle_event(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::FrameTick(tick) => self.follow_tick(tick),
            FeedEvent::Pose(update) => self.apply_pose(&update),
        }
    }

    fn follow_tick(&mut self, tick: FrameTick) {
        if self.last_tick == Some(tick) {
            return;
        }
        self.last_tick = Some(tick);
        tracing::trace!(frame = tick.frame, fps = tick.fps, "Following authoring tool");
        self.sequencer.scrub(tick.seconds(), &self.output);
    }

    fn apply_pose(&mut self, update: &PoseUpdate) {
        if self.live_object.as_deref() != Some(update.object_name.as_str()) {
            tracing::info!(object = %update.object_name, kind = ?update.object_type, "Streaming object");
            self.live_object = Some(update.object_name.clone());
        }

        let mut live = self.live.borrow_mut();
        let current = live.pose();
        live.set_pose(&CameraPose {
            position: update.position,
            orientation: update.orientation,
            fov: update.fov.unwrap_or(current.fov),
        });
        live.update_projection();
    }

    /// Camera mirroring the sequenced shots
    pub fn output(&self) -> &SharedCamera<PerspectiveCamera> {
        &self.output
    }

    /// Camera following the streamed object
    pub fn live(&self) -> &SharedCamera<PerspectiveCamera> {
        &self.live
    }

    /// Sequencer state
    pub fn state(&self) -> SequencerState {
        self.sequencer.state()
    }

    /// The underlying sequencer
    pub fn sequencer(&self) -> &ShotSequencer<PerspectiveCamera> {
        &self.sequencer
    }
}
