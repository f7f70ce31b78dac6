// SPDX-License-Identifier: MIT OR Apache-2.0
//! Pre-baked camera animation clips.

use crate::camera::CameraPose;
use crate::keyframe::{Interpolation, Keyframe, KeyframeValue};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClipId(pub Uuid);

impl ClipId {
    /// Create a new random clip ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClipId {
    fn default() -> Self {
        Self::new()
    }
}

/// A named, fixed-duration camera animation
///
/// Channels are sampled independently. A channel without keyframes leaves
/// that part of the camera's pose untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraClip {
    /// Unique clip ID
    #[serde(default)]
    pub id: ClipId,
    /// Clip name, matched against camera names
    pub name: String,
    /// Intrinsic duration in seconds
    pub duration: f32,
    /// Position channel keyframes
    #[serde(default)]
    pub position: Vec<Keyframe>,
    /// Rotation channel keyframes (quaternion)
    #[serde(default)]
    pub rotation: Vec<Keyframe>,
    /// Field of view channel keyframes (degrees)
    #[serde(default)]
    pub fov: Vec<Keyframe>,
}

impl CameraClip {
    /// Create an empty clip
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            id: ClipId::new(),
            name: name.into(),
            duration,
            position: Vec::new(),
            rotation: Vec::new(),
            fov: Vec::new(),
        }
    }

    /// Add a position keyframe
    pub fn add_position(&mut self, time: f32, value: [f32; 3]) {
        insert_sorted(&mut self.position, Keyframe::new(time, KeyframeValue::Vec3(value)));
    }

    /// Add a rotation keyframe
    pub fn add_rotation(&mut self, time: f32, value: [f32; 4]) {
        insert_sorted(&mut self.rotation, Keyframe::new(time, KeyframeValue::Vec4(value)));
    }

    /// Add a FOV keyframe
    pub fn add_fov(&mut self, time: f32, value: f32) {
        insert_sorted(&mut self.fov, Keyframe::new(time, KeyframeValue::Float(value)));
    }

    /// Builder form of [`Self::add_position`]
    pub fn with_position(mut self, time: f32, value: [f32; 3]) -> Self {
        self.add_position(time, value);
        self
    }

    /// Builder form of [`Self::add_rotation`]
    pub fn with_rotation(mut self, time: f32, value: [f32; 4]) -> Self {
        self.add_rotation(time, value);
        self
    }

    /// Builder form of [`Self::add_fov`]
    pub fn with_fov(mut self, time: f32, value: f32) -> Self {
        self.add_fov(time, value);
        self
    }

    /// Evaluate the clip at a clip-local time, starting from `base`
    pub fn sample(&self, time: f32, base: &CameraPose) -> CameraPose {
        CameraPose {
            position: evaluate_channel_vec3(&self.position, time).unwrap_or(base.position),
            orientation: evaluate_channel_vec4(&self.rotation, time).unwrap_or(base.orientation),
            fov: evaluate_channel_float(&self.fov, time).unwrap_or(base.fov),
        }
    }

    /// Whether the clip has no keyframes in any channel
    pub fn is_empty(&self) -> bool {
        self.position.is_empty() && self.rotation.is_empty() && self.fov.is_empty()
    }
}

fn insert_sorted(channel: &mut Vec<Keyframe>, keyframe: Keyframe) {
    let idx = channel.partition_point(|k| k.time <= keyframe.time);
    channel.insert(idx, keyframe);
}

/// Find the keyframe pair around `time` and the blend factor between them
fn bracket(keyframes: &[Keyframe], time: f32) -> Option<(&Keyframe, &Keyframe, f32)> {
    let first = keyframes.first()?;
    let next_idx = keyframes.iter().position(|k| k.time >= time);

    match next_idx {
        None => {
            let last = keyframes.last()?;
            Some((last, last, 0.0))
        }
        Some(0) => Some((first, first, 0.0)),
        Some(idx) => {
            let a = &keyframes[idx - 1];
            let b = &keyframes[idx];
            // Landing on a key shows that key, even after a step
            if b.time <= time || (b.time - a.time).abs() < 0.0001 {
                return Some((b, b, 0.0));
            }
            Some((a, b, (time - a.time) / (b.time - a.time)))
        }
    }
}

fn evaluate_channel(keyframes: &[Keyframe], time: f32) -> Option<KeyframeValue> {
    let (a, b, t) = bracket(keyframes, time)?;
    a.value.interpolate(&b.value, t, a.interpolation)
}

fn evaluate_channel_float(keyframes: &[Keyframe], time: f32) -> Option<f32> {
    evaluate_channel(keyframes, time)?.as_float()
}

fn evaluate_channel_vec3(keyframes: &[Keyframe], time: f32) -> Option<[f32; 3]> {
    evaluate_channel(keyframes, time)?.as_vec3()
}

fn evaluate_channel_vec4(keyframes: &[Keyframe], time: f32) -> Option<[f32; 4]> {
    evaluate_channel(keyframes, time)?.as_vec4()
}
