// SPDX-License-Identifier: MIT OR Apache-2.0
//! Binding of a camera clip to the camera it animates.

use crate::camera::{Camera, SharedCamera};
use crate::clip::CameraClip;

/// What happened to a binding during an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipEvent {
    /// The binding is not advancing
    Idle,
    /// Local time moved forward
    Advanced,
    /// The binding reached its end on this update and stopped
    Finished,
}

/// One playable shot: a clip, the camera it drives, and its own play-head
///
/// The local play-head is kept in clip time, always within
/// `[0, clip.duration]`. The time scale stretches the clip onto the virtual
/// timeline: a scale of 0.5 makes a 3s clip last 6s.
pub struct ClipBinding<C> {
    camera: SharedCamera<C>,
    clip: CameraClip,
    time_scale: f32,
    local_time: f32,
    playing: bool,
    /// Armed by `play`, consumed by the update that reaches the end
    finish_armed: bool,
}

impl<C: Camera> ClipBinding<C> {
    /// Bind a clip to a caller-owned camera
    pub fn new(camera: SharedCamera<C>, clip: CameraClip) -> Self {
        Self {
            camera,
            clip,
            time_scale: 1.0,
            local_time: 0.0,
            playing: false,
            finish_armed: false,
        }
    }

    /// Clip name
    pub fn name(&self) -> &str {
        &self.clip.name
    }

    /// The bound clip
    pub fn clip(&self) -> &CameraClip {
        &self.clip
    }

    /// The bound camera
    pub fn camera(&self) -> &SharedCamera<C> {
        &self.camera
    }

    /// Clip duration before scaling
    pub fn intrinsic_duration(&self) -> f32 {
        self.clip.duration
    }

    /// Current time scale
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Local play-head in clip time
    pub fn local_time(&self) -> f32 {
        self.local_time
    }

    /// Whether the binding is advancing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Stretch or squash the clip so it lasts `target_seconds` on the timeline.
    ///
    /// The target is not validated. Zero yields an infinite scale and a
    /// negative target an inverted one; both leave playback undefined.
    pub fn set_duration(&mut self, target_seconds: f32) {
        self.time_scale = self.clip.duration / target_seconds;
    }

    /// Duration as perceived on the virtual timeline
    pub fn effective_duration(&self) -> f32 {
        self.clip.duration / self.time_scale
    }

    /// Restart from the beginning and start advancing
    pub fn play(&mut self) {
        self.local_time = 0.0;
        self.playing = true;
        self.finish_armed = true;
        self.refresh_pose();
    }

    /// Halt at the current local time
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Seek to a time expressed on the timeline relative to the shot start.
    ///
    /// Leaves the binding paused and never reports [`ClipEvent::Finished`].
    pub fn scrub_to(&mut self, local_effective_time: f32) {
        self.local_time = (local_effective_time * self.time_scale)
            .min(self.clip.duration)
            .max(0.0);
        self.playing = false;
        self.finish_armed = false;
        self.refresh_pose();
    }

    /// Advance by `delta` timeline seconds and pose the camera
    pub fn update(&mut self, delta: f32) -> ClipEvent {
        if !self.playing {
            return ClipEvent::Idle;
        }

        let next = self.local_time + delta * self.time_scale;
        let reached_end = next >= self.clip.duration;
        self.local_time = if reached_end { self.clip.duration } else { next.max(0.0) };
        self.refresh_pose();

        if reached_end {
            self.playing = false;
            if std::mem::take(&mut self.finish_armed) {
                return ClipEvent::Finished;
            }
        }
        ClipEvent::Advanced
    }

    /// Evaluate the clip at the current local time onto the camera
    fn refresh_pose(&mut self) {
        let mut camera = self.camera.borrow_mut();
        let pose = self.clip.sample(self.local_time, &camera.pose());
        camera.set_pose(&pose);
        camera.update_projection();
    }
}

impl<C> std::fmt::Debug for ClipBinding<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClipBinding")
            .field("clip", &self.clip.name)
            .field("time_scale", &self.time_scale)
            .field("local_time", &self.local_time)
            .field("playing", &self.playing)
            .finish_non_exhaustive()
    }
}
