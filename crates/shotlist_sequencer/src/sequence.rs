// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shot sequencer: an ordered, scrubbable list of camera shots.
//!
//! The sequencer owns one [`ClipBinding`] per clip and plays a configured
//! subset of them back to back with hard cuts. Time only moves when the
//! embedder calls [`ShotSequencer::update`] (play mode) or
//! [`ShotSequencer::scrub`] (seek mode).
//!
//! Within one `update` the active shot's camera is mirrored onto the output
//! camera first, then time advances, then frame scripts fire.

use crate::binding::{ClipBinding, ClipEvent};
use crate::camera::{copy_pose, Camera, SharedCamera};
use crate::clip::CameraClip;
use crate::schedule::{frame_to_time, FrameScripts, DEFAULT_BASE_FRAMERATE};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::rc::Rc;

/// Callback run once when a non-looping sequence plays its last shot out
pub type CompletionCallback = Box<dyn FnOnce()>;

/// Sequencer state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SequencerState {
    /// Nothing has been played yet
    #[default]
    Idle,
    /// Shot `index` of the running sequence is advancing
    Playing {
        /// Position in the sequence
        index: usize,
    },
    /// Shot `index` is paused at an explicit time
    Scrubbed {
        /// Position in the sequence
        index: usize,
        /// Time since the shot start, on the timeline
        local_time: f32,
    },
    /// The last shot finished and looping was off
    Completed,
}

impl SequencerState {
    /// Whether a shot is advancing
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing { .. })
    }

    /// Position of the current shot in the sequence, if any
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Playing { index } | Self::Scrubbed { index, .. } => Some(*index),
            Self::Idle | Self::Completed => None,
        }
    }
}

/// Where a shot sits on the virtual timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotInterval<'a> {
    /// Shot name
    pub name: &'a str,
    /// Inclusive start, in seconds
    pub start: f32,
    /// Exclusive end, in seconds
    pub end: f32,
}

impl ShotInterval<'_> {
    /// Effective duration of the shot
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }
}

/// Plays, loops and scrubs a list of camera shots
pub struct ShotSequencer<C> {
    /// Every known shot, keyed by clip name, in construction order
    shots: IndexMap<String, ClipBinding<C>>,
    /// Shot indices chosen by the last `configure`
    configured: Option<Vec<usize>>,
    /// Snapshot of `configured` taken by `play` or `scrub`
    running: Vec<usize>,
    state: SequencerState,
    /// Seconds since `play`
    playhead: f32,
    scripts: FrameScripts,
    on_completed: Option<CompletionCallback>,
    /// Restart from the first shot instead of completing
    pub looping: bool,
    /// Camera that mirrors the active shot during playback
    pub output_camera: Option<SharedCamera<C>>,
}

impl<C: Camera> ShotSequencer<C> {
    /// Pair every clip with the camera of the same name.
    ///
    /// Clips without a matching camera are skipped.
    pub fn new<S>(
        cameras: impl IntoIterator<Item = (S, SharedCamera<C>)>,
        clips: impl IntoIterator<Item = CameraClip>,
    ) -> Self
    where
        S: Into<String>,
    {
        let cameras: HashMap<String, SharedCamera<C>> = cameras
            .into_iter()
            .map(|(name, camera)| (name.into(), camera))
            .collect();

        Self::from_pairs(clips.into_iter().filter_map(|clip| match cameras.get(&clip.name) {
            Some(camera) => Some((Rc::clone(camera), clip)),
            None => {
                tracing::debug!("No camera named {:?}, skipping clip", clip.name);
                None
            }
        }))
    }

    /// Build from explicit (camera, clip) pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (SharedCamera<C>, CameraClip)>) -> Self {
        let mut shots = IndexMap::new();
        for (camera, clip) in pairs {
            let name = clip.name.clone();
            if shots.insert(name, ClipBinding::new(camera, clip)).is_some() {
                tracing::warn!("Duplicate shot name, keeping the last clip");
            }
        }

        Self {
            shots,
            configured: None,
            running: Vec::new(),
            state: SequencerState::Idle,
            playhead: 0.0,
            scripts: FrameScripts::new(),
            on_completed: None,
            looping: false,
            output_camera: None,
        }
    }

    /// Choose the shots to play, in order.
    ///
    /// Names that match no clip are dropped. A playback already running keeps
    /// its old list until the next `play`.
    pub fn configure<I>(&mut self, names: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let list = names
            .into_iter()
            .filter_map(|name| {
                let name = name.as_ref();
                let index = self.shots.get_index_of(name);
                if index.is_none() {
                    tracing::trace!("Unknown shot {name:?} dropped from sequence");
                }
                index
            })
            .collect();
        self.configured = Some(list);
    }

    /// Run `callback` once the playhead passes `at_frame` at `base_framerate`
    pub fn register_frame_script(
        &mut self,
        at_frame: u32,
        callback: impl FnMut() + 'static,
        base_framerate: f32,
    ) {
        self.scripts.register(frame_to_time(at_frame, base_framerate), callback);
    }

    /// [`Self::register_frame_script`] at [`DEFAULT_BASE_FRAMERATE`]
    pub fn register_frame_script_default(&mut self, at_frame: u32, callback: impl FnMut() + 'static) {
        self.register_frame_script(at_frame, callback, DEFAULT_BASE_FRAMERATE);
    }

    /// Make shot `name` last `seconds` on the timeline.
    ///
    /// Returns false when no shot has that name. See
    /// [`ClipBinding::set_duration`] for non-positive targets.
    pub fn set_shot_duration(&mut self, name: &str, seconds: f32) -> bool {
        match self.shots.get_mut(name) {
            Some(binding) => {
                binding.set_duration(seconds);
                true
            }
            None => false,
        }
    }

    /// Play the configured sequence from its first shot
    pub fn play(&mut self) {
        self.start(None);
    }

    /// Play from the first shot and run `on_completed` when the sequence ends
    pub fn play_with(&mut self, on_completed: impl FnOnce() + 'static) {
        self.start(Some(Box::new(on_completed)));
    }

    fn start(&mut self, on_completed: Option<CompletionCallback>) {
        let list = match &self.configured {
            Some(list) if !list.is_empty() => list.clone(),
            _ => {
                tracing::warn!("play() called without a configured shot sequence");
                return;
            }
        };

        self.stop_all();
        self.running = list;
        self.playhead = 0.0;
        self.scripts.reset();
        self.on_completed = on_completed;
        self.state = SequencerState::Playing { index: 0 };

        tracing::info!(shots = self.running.len(), looping = self.looping, "Playing shot sequence");
        self.start_shot(0);
    }

    /// Advance playback by `delta` seconds
    pub fn update(&mut self, delta: f32) {
        let SequencerState::Playing { index } = self.state else {
            return;
        };
        let Some(&shot) = self.running.get(index) else {
            return;
        };

        if let Some(output) = &self.output_camera {
            self.mirror_onto(shot, output);
        }

        self.playhead += delta;
        let event = match self.shots.get_index_mut(shot) {
            Some((_, binding)) => binding.update(delta),
            None => ClipEvent::Idle,
        };
        if event == ClipEvent::Finished {
            self.advance_shot(index);
        }

        let fired = self.scripts.fire_due(self.playhead);
        if fired > 0 {
            tracing::trace!(fired, playhead = self.playhead, "Frame scripts fired");
        }
    }

    /// Seek to `timeline_seconds` and pose `output` from the shot found there.
    ///
    /// Stops playback. Negative times clamp to the start, times past the end
    /// clamp to the last shot's final frame. The playhead is not touched.
    pub fn scrub(&mut self, timeline_seconds: f32, output: &SharedCamera<C>) {
        let list = match &self.configured {
            Some(list) if !list.is_empty() => list.clone(),
            _ => {
                tracing::warn!("scrub() called without a configured shot sequence");
                return;
            }
        };

        self.stop_all();
        self.on_completed = None;
        self.running = list;

        let Some((index, local_time)) = locate(&self.timeline(&self.running), timeline_seconds) else {
            return;
        };
        let shot = self.running[index];
        if let Some((_, binding)) = self.shots.get_index_mut(shot) {
            binding.scrub_to(local_time);
        }
        self.state = SequencerState::Scrubbed { index, local_time };
        self.mirror_onto(shot, output);
    }

    /// Move to the shot after `finished`, looping or completing at the end
    fn advance_shot(&mut self, finished: usize) {
        let mut next = finished + 1;
        if next >= self.running.len() {
            if !self.looping {
                self.state = SequencerState::Completed;
                tracing::info!(playhead = self.playhead, "Shot sequence completed");
                if let Some(on_completed) = self.on_completed.take() {
                    on_completed();
                }
                return;
            }
            tracing::debug!("Shot sequence looping");
            next = 0;
        }

        self.state = SequencerState::Playing { index: next };
        self.start_shot(next);
    }

    fn start_shot(&mut self, index: usize) {
        let Some(&shot) = self.running.get(index) else {
            return;
        };
        if let Some((name, binding)) = self.shots.get_index_mut(shot) {
            tracing::debug!(shot = %name, index, "Starting shot");
            binding.play();
        }
    }

    fn stop_all(&mut self) {
        for binding in self.shots.values_mut() {
            binding.stop();
        }
    }

    fn mirror_onto(&self, shot: usize, output: &SharedCamera<C>) {
        let Some((_, binding)) = self.shots.get_index(shot) else {
            return;
        };
        // Already posed when the output is the shot camera itself
        if Rc::ptr_eq(output, binding.camera()) {
            return;
        }
        copy_pose(&*binding.camera().borrow(), &mut *output.borrow_mut());
    }

    fn timeline(&self, list: &[usize]) -> Vec<ShotInterval<'_>> {
        let mut start = 0.0;
        list.iter()
            .filter_map(|&shot| self.shots.get_index(shot))
            .map(|(name, binding)| {
                let end = start + binding.effective_duration();
                let interval = ShotInterval { name, start, end };
                start = end;
                interval
            })
            .collect()
    }

    /// Layout of the configured sequence on the virtual timeline
    pub fn shot_intervals(&self) -> Vec<ShotInterval<'_>> {
        self.configured
            .as_deref()
            .map(|list| self.timeline(list))
            .unwrap_or_default()
    }

    /// Effective length of the configured sequence
    pub fn total_duration(&self) -> f32 {
        self.shot_intervals().last().map_or(0.0, |interval| interval.end)
    }

    /// Names of the configured sequence, in order
    pub fn sequence_names(&self) -> Vec<&str> {
        self.configured
            .iter()
            .flatten()
            .filter_map(|&shot| self.shots.get_index(shot))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Current state
    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// Whether a shot is advancing
    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Position of the current shot in the running sequence
    pub fn current_index(&self) -> Option<usize> {
        self.state.index()
    }

    /// The current shot, while playing or scrubbed
    pub fn current_shot(&self) -> Option<&ClipBinding<C>> {
        let shot = *self.running.get(self.current_index()?)?;
        self.shots.get_index(shot).map(|(_, binding)| binding)
    }

    /// Seconds of playback since the last `play`
    pub fn playhead(&self) -> f32 {
        self.playhead
    }

    /// Look up a shot by clip name
    pub fn shot(&self, name: &str) -> Option<&ClipBinding<C>> {
        self.shots.get(name)
    }

    /// All shots in construction order
    pub fn shots(&self) -> impl Iterator<Item = &ClipBinding<C>> {
        self.shots.values()
    }

    /// Registered frame scripts
    pub fn frame_scripts(&self) -> &FrameScripts {
        &self.scripts
    }
}

impl<C> std::fmt::Debug for ShotSequencer<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShotSequencer")
            .field("shots", &self.shots.keys().collect::<Vec<_>>())
            .field("state", &self.state)
            .field("playhead", &self.playhead)
            .field("looping", &self.looping)
            .finish_non_exhaustive()
    }
}

/// Find the interval containing `time` and the offset into it
fn locate(intervals: &[ShotInterval<'_>], time: f32) -> Option<(usize, f32)> {
    let last = intervals.last()?;
    let time = time.max(0.0);

    match intervals.iter().position(|i| time >= i.start && time < i.end) {
        Some(index) => Some((index, time - intervals[index].start)),
        None => Some((intervals.len() - 1, last.duration())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{shared, PerspectiveCamera};
    use std::cell::Cell;

    type Seq = ShotSequencer<PerspectiveCamera>;

    /// Each shot slides its camera along x from 0 to its duration, at y = `lane`
    fn clip(name: &str, duration: f32, lane: f32) -> CameraClip {
        CameraClip::new(name, duration)
            .with_position(0.0, [0.0, lane, 0.0])
            .with_position(duration, [duration, lane, 0.0])
    }

    fn sequencer(shots: &[(&str, f32)]) -> Seq {
        let mut cameras = Vec::new();
        let mut clips = Vec::new();
        for (lane, (name, duration)) in shots.iter().enumerate() {
            cameras.push((name.to_string(), shared(PerspectiveCamera::default())));
            clips.push(clip(name, *duration, lane as f32 + 1.0));
        }
        ShotSequencer::new(cameras, clips)
    }

    fn advancing(seq: &Seq) -> usize {
        seq.shots().filter(|b| b.is_playing()).count()
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnMut() + 'static) {
        let hits = Rc::new(Cell::new(0));
        let inner = Rc::clone(&hits);
        (hits, move || inner.set(inner.get() + 1))
    }

    #[test]
    fn test_clips_without_camera_are_skipped() {
        let cameras = vec![("a", shared(PerspectiveCamera::default()))];
        let clips = vec![clip("a", 1.0, 1.0), clip("orphan", 1.0, 2.0)];
        let seq = ShotSequencer::new(cameras, clips);

        assert!(seq.shot("a").is_some());
        assert!(seq.shot("orphan").is_none());
    }

    #[test]
    fn test_configure_drops_unknown_names() {
        let mut seq = sequencer(&[("a", 1.0), ("b", 1.0)]);
        seq.configure(["b", "missing", "a", "b"]);
        assert_eq!(seq.sequence_names(), vec!["b", "a", "b"]);

        seq.configure(["a"]);
        assert_eq!(seq.sequence_names(), vec!["a"]);
    }

    #[test]
    fn test_play_without_sequence_is_noop() {
        let mut seq = sequencer(&[("a", 1.0)]);
        seq.play();
        seq.play();
        seq.update(0.5);
        assert_eq!(seq.state(), SequencerState::Idle);
        assert_eq!(seq.playhead(), 0.0);

        seq.configure(["nope"]);
        seq.play();
        assert_eq!(seq.state(), SequencerState::Idle);
        assert_eq!(advancing(&seq), 0);

        let output = shared(PerspectiveCamera::default());
        seq.scrub(0.5, &output);
        assert_eq!(seq.state(), SequencerState::Idle);
    }

    #[test]
    fn test_exactly_one_shot_advances() {
        let mut seq = sequencer(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]);
        seq.configure(["a", "b", "c"]);
        seq.play();

        for _ in 0..12 {
            assert!(seq.is_playing());
            assert_eq!(advancing(&seq), 1);
            seq.update(0.25);
        }

        assert_eq!(seq.state(), SequencerState::Completed);
        assert_eq!(advancing(&seq), 0);
        assert_eq!(seq.playhead(), 3.0);
    }

    #[test]
    fn test_shots_play_in_order() {
        let mut seq = sequencer(&[("a", 1.0), ("b", 2.0)]);
        seq.configure(["b", "a"]);
        seq.play();
        assert_eq!(seq.current_shot().unwrap().name(), "b");

        seq.update(2.0);
        assert_eq!(seq.current_index(), Some(1));
        assert_eq!(seq.current_shot().unwrap().name(), "a");
        assert_eq!(seq.shot("a").unwrap().local_time(), 0.0);
    }

    #[test]
    fn test_completion_fires_once_and_stops() {
        let mut seq = sequencer(&[("a", 1.0), ("b", 1.0)]);
        seq.configure(["a", "b"]);
        let (done, on_done) = counter();
        seq.play_with(on_done);

        seq.update(1.0);
        assert_eq!(done.get(), 0);
        seq.update(1.0);
        assert_eq!(done.get(), 1);
        assert_eq!(seq.state(), SequencerState::Completed);

        seq.update(1.0);
        seq.update(1.0);
        assert_eq!(done.get(), 1);
        assert_eq!(advancing(&seq), 0);
        assert_eq!(seq.current_index(), None);
    }

    #[test]
    fn test_loop_reenters_first_shot() {
        let mut seq = sequencer(&[("a", 1.0), ("b", 1.0)]);
        seq.configure(["a", "b"]);
        seq.looping = true;
        let (done, on_done) = counter();
        seq.play_with(on_done);

        seq.update(1.0);
        assert_eq!(seq.current_shot().unwrap().name(), "b");
        seq.update(1.0);

        assert_eq!(seq.state(), SequencerState::Playing { index: 0 });
        assert_eq!(seq.shot("a").unwrap().local_time(), 0.0);
        assert!(seq.shot("a").unwrap().is_playing());
        assert_eq!(advancing(&seq), 1);
        assert_eq!(done.get(), 0);
    }

    #[test]
    fn test_scrub_selects_shot_and_local_time() {
        let mut seq = sequencer(&[("a", 2.0), ("b", 3.0)]);
        seq.configure(["a", "b"]);
        let output = shared(PerspectiveCamera::default());

        seq.scrub(2.5, &output);
        assert_eq!(seq.state(), SequencerState::Scrubbed { index: 1, local_time: 0.5 });
        assert_eq!(seq.shot("b").unwrap().local_time(), 0.5);
        assert_eq!(output.borrow().pose.position, [0.5, 2.0, 0.0]);

        seq.scrub(10.0, &output);
        assert_eq!(seq.state(), SequencerState::Scrubbed { index: 1, local_time: 3.0 });
        assert_eq!(seq.shot("b").unwrap().local_time(), 3.0);
        assert_eq!(output.borrow().pose.position, [3.0, 2.0, 0.0]);

        seq.scrub(-1.0, &output);
        assert_eq!(seq.state(), SequencerState::Scrubbed { index: 0, local_time: 0.0 });
        assert_eq!(output.borrow().pose.position, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_scrub_boundary_starts_next_shot() {
        let mut seq = sequencer(&[("a", 2.0), ("b", 3.0)]);
        seq.configure(["a", "b"]);
        let output = shared(PerspectiveCamera::default());

        seq.scrub(2.0, &output);
        assert_eq!(seq.current_index(), Some(1));
        assert_eq!(seq.shot("b").unwrap().local_time(), 0.0);
    }

    #[test]
    fn test_scrub_respects_time_scale() {
        let mut seq = sequencer(&[("a", 2.0), ("b", 3.0)]);
        seq.configure(["a", "b"]);
        assert!(seq.set_shot_duration("a", 4.0));
        let output = shared(PerspectiveCamera::default());

        seq.scrub(3.0, &output);
        assert_eq!(seq.current_index(), Some(0));
        assert_eq!(seq.shot("a").unwrap().local_time(), 1.5);

        seq.scrub(4.5, &output);
        assert_eq!(seq.current_index(), Some(1));
        assert_eq!(seq.shot("b").unwrap().local_time(), 0.5);
    }

    #[test]
    fn test_scrub_is_idempotent_and_keeps_playhead() {
        let mut seq = sequencer(&[("a", 2.0), ("b", 3.0)]);
        seq.configure(["a", "b"]);
        seq.play();
        seq.update(0.5);
        let output = shared(PerspectiveCamera::default());

        seq.scrub(3.25, &output);
        let first = output.borrow().pose;
        seq.scrub(3.25, &output);
        let second = output.borrow().pose;

        assert_eq!(first, second);
        assert_eq!(seq.playhead(), 0.5);
        assert!(!seq.is_playing());
        assert_eq!(advancing(&seq), 0);

        seq.update(1.0);
        assert_eq!(seq.playhead(), 0.5);
        assert_eq!(seq.shot("b").unwrap().local_time(), 1.25);
    }

    #[test]
    fn test_play_after_scrub_restarts_from_first_shot() {
        let mut seq = sequencer(&[("a", 2.0), ("b", 3.0)]);
        seq.configure(["a", "b"]);
        let output = shared(PerspectiveCamera::default());
        seq.scrub(4.0, &output);

        seq.play();
        assert_eq!(seq.state(), SequencerState::Playing { index: 0 });
        assert_eq!(seq.playhead(), 0.0);
        assert_eq!(seq.shot("a").unwrap().local_time(), 0.0);
        assert_eq!(advancing(&seq), 1);
    }

    #[test]
    fn test_intervals_partition_timeline() {
        let mut seq = sequencer(&[("a", 2.0), ("b", 3.0), ("c", 1.0)]);
        seq.configure(["c", "a", "b", "a"]);
        seq.set_shot_duration("b", 1.5);

        let intervals = seq.shot_intervals();
        let names: Vec<&str> = intervals.iter().map(|i| i.name).collect();
        assert_eq!(names, seq.sequence_names());
        assert_eq!(intervals[0].start, 0.0);
        for pair in intervals.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].start < pair[0].end);
        }
        assert_eq!(seq.total_duration(), 1.0 + 2.0 + 1.5 + 2.0);
    }

    #[test]
    fn test_set_shot_duration() {
        let mut seq = sequencer(&[("shotX", 3.0)]);
        assert!(seq.set_shot_duration("shotX", 6.0));
        let shot = seq.shot("shotX").unwrap();
        assert_eq!(shot.effective_duration(), 6.0);
        assert_eq!(shot.time_scale(), 0.5);

        assert!(!seq.set_shot_duration("shotY", 6.0));
    }

    #[test]
    fn test_frame_script_fires_once_per_play() {
        let mut seq = sequencer(&[("a", 5.0)]);
        seq.configure(["a"]);
        let (hits, script) = counter();
        seq.register_frame_script(48, script, 24.0);
        assert_eq!(seq.frame_scripts().iter().next().unwrap().time, 2.0);

        seq.play();
        seq.update(2.1);
        assert_eq!(hits.get(), 1);
        seq.update(1.0);
        assert_eq!(hits.get(), 1);

        seq.play();
        seq.update(2.1);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_frame_script_waits_for_playhead() {
        let mut seq = sequencer(&[("a", 5.0)]);
        seq.configure(["a"]);
        let (hits, script) = counter();
        seq.register_frame_script_default(48, script);

        seq.play();
        seq.update(1.0);
        seq.update(0.9);
        assert_eq!(hits.get(), 0);

        // Scrubbing past it does not count
        let output = shared(PerspectiveCamera::default());
        seq.scrub(4.0, &output);
        seq.update(1.0);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn test_loop_does_not_rearm_frame_scripts() {
        let mut seq = sequencer(&[("a", 1.0)]);
        seq.configure(["a"]);
        seq.looping = true;
        let (hits, script) = counter();
        seq.register_frame_script(12, script, 24.0);

        seq.play();
        for _ in 0..10 {
            seq.update(0.3);
        }
        assert!(seq.is_playing());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_update_mirrors_before_advancing() {
        let mut seq = sequencer(&[("a", 2.0)]);
        seq.configure(["a"]);
        let output = shared(PerspectiveCamera::default());
        seq.output_camera = Some(Rc::clone(&output));
        seq.play();

        seq.update(0.5);
        assert_eq!(output.borrow().pose.position, [0.0, 1.0, 0.0]);
        seq.update(0.5);
        assert_eq!(output.borrow().pose.position, [0.5, 1.0, 0.0]);
        assert_eq!(output.borrow().projection_updates(), 2);
    }

    #[test]
    fn test_output_may_be_a_shot_camera() {
        let camera = shared(PerspectiveCamera::default());
        let mut seq = ShotSequencer::from_pairs([(Rc::clone(&camera), clip("a", 1.0, 1.0))]);
        seq.configure(["a"]);
        seq.output_camera = Some(Rc::clone(&camera));
        seq.play();
        seq.update(0.5);

        seq.scrub(0.25, &camera);
        assert_eq!(camera.borrow().pose.position, [0.25, 1.0, 0.0]);
    }

    #[test]
    fn test_reconfigure_applies_on_next_play() {
        let mut seq = sequencer(&[("a", 1.0), ("b", 1.0), ("c", 1.0)]);
        seq.configure(["a", "b"]);
        seq.play();
        seq.configure(["c"]);

        seq.update(1.0);
        assert_eq!(seq.current_shot().unwrap().name(), "b");

        seq.play();
        assert_eq!(seq.current_shot().unwrap().name(), "c");
        assert_eq!(advancing(&seq), 1);
    }
}
