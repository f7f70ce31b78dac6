// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera shot sequencing for Shotlist.
//!
//! This crate turns a set of pre-baked camera clips into a shot list:
//! - Camera clips with position, rotation and field-of-view channels
//! - Per-shot bindings with their own play-head and time scale
//! - A sequencer that plays, loops and scrubs shots with hard cuts
//! - Frame scripts fired from a continuous virtual timeline
//!
//! ## Architecture
//!
//! Everything is single-threaded and tick-driven. The embedder calls
//! [`ShotSequencer::update`] from its render loop, or
//! [`ShotSequencer::scrub`] to seek. Cameras stay caller-owned and are
//! shared with the sequencer through [`SharedCamera`] handles.

pub mod binding;
pub mod camera;
pub mod clip;
pub mod keyframe;
pub mod schedule;
pub mod sequence;

pub use binding::{ClipBinding, ClipEvent};
pub use camera::{copy_pose, shared, Camera, CameraPose, PerspectiveCamera, SharedCamera};
pub use clip::{CameraClip, ClipId};
pub use keyframe::{Interpolation, InterpolationMode, Keyframe, KeyframeValue};
pub use schedule::{
    frame_to_time, time_to_frame, FrameScriptAction, FrameScripts, ScheduledCallback,
    DEFAULT_BASE_FRAMERATE,
};
pub use sequence::{CompletionCallback, SequencerState, ShotInterval, ShotSequencer};
