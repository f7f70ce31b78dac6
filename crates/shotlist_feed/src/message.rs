// SPDX-License-Identifier: MIT OR Apache-2.0
//! Messages pushed by the authoring tool.
//!
//! Every text frame is one JSON object. With an object selected the tool
//! sends its pose along with the current frame:
//!
//! ```json
//! {"position": {"x": 0, "y": 1, "z": 5},
//!  "quaternion": {"x": 0, "y": 0, "z": 0, "w": 1},
//!  "rotation": {"x": 0, "y": 0, "z": 0},
//!  "fov": 39.6, "frame": 12, "fps": 24,
//!  "objectName": "Camera", "objectType": "CAMERA"}
//! ```
//!
//! Without a selection only `{"scrubFrame": 12, "fps": 24}` is sent.

use crate::error::FeedError;
use serde::{Deserialize, Serialize};

/// 3D vector on the wire
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WireVec3 {
    /// X
    pub x: f32,
    /// Y
    pub y: f32,
    /// Z
    pub z: f32,
}

/// Quaternion on the wire
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WireQuat {
    /// X
    pub x: f32,
    /// Y
    pub y: f32,
    /// Z
    pub z: f32,
    /// W
    pub w: f32,
}

/// One decoded feed frame
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedMessage {
    /// Object position, already in the viewer's Y-up space
    #[serde(default)]
    pub position: Option<WireVec3>,
    /// Object orientation
    #[serde(default)]
    pub quaternion: Option<WireQuat>,
    /// Euler angles in radians, informational only
    #[serde(default)]
    pub rotation: Option<WireVec3>,
    /// Vertical field of view in degrees, null for non-camera objects
    #[serde(default)]
    pub fov: Option<f32>,
    /// Current frame in the authoring tool
    #[serde(default, alias = "scrubFrame")]
    pub frame: Option<i64>,
    /// Scene frame rate
    #[serde(default)]
    pub fps: Option<f32>,
    /// Name of the streamed object
    #[serde(default)]
    pub object_name: Option<String>,
    /// Kind of the streamed object (`CAMERA`, `MESH`, ...)
    #[serde(default)]
    pub object_type: Option<String>,
}

/// Pose of a streamed object
#[derive(Debug, Clone, PartialEq)]
pub struct PoseUpdate {
    /// Object name, empty if the tool did not send one
    pub object_name: String,
    /// Object kind
    pub object_type: Option<String>,
    /// Position
    pub position: [f32; 3],
    /// Orientation quaternion (x, y, z, w)
    pub orientation: [f32; 4],
    /// Field of view in degrees, cameras only
    pub fov: Option<f32>,
}

impl PoseUpdate {
    /// Whether the object is a camera
    pub fn is_camera(&self) -> bool {
        self.object_type.as_deref() == Some("CAMERA")
    }
}

/// Current frame of the authoring tool
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Frame number
    pub frame: i64,
    /// Frames per second
    pub fps: f32,
}

impl FrameTick {
    /// Frame expressed in seconds, 0 when the frame rate is unusable
    pub fn seconds(&self) -> f32 {
        if self.fps > 0.0 {
            self.frame as f32 / self.fps
        } else {
            0.0
        }
    }
}

/// Event derived from a feed message
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// An object moved
    Pose(PoseUpdate),
    /// The tool's frame changed
    FrameTick(FrameTick),
}

impl FeedMessage {
    /// Decode a text frame
    pub fn parse(text: &str) -> Result<Self, FeedError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Split into events: a pose update (if any) then a frame tick (if any)
    pub fn events(&self) -> Vec<FeedEvent> {
        let mut events = Vec::with_capacity(2);

        if let (Some(position), Some(quaternion)) = (self.position, self.quaternion) {
            events.push(FeedEvent::Pose(PoseUpdate {
                object_name: self.object_name.clone().unwrap_or_default(),
                object_type: self.object_type.clone(),
                position: [position.x, position.y, position.z],
                orientation: [quaternion.x, quaternion.y, quaternion.z, quaternion.w],
                fov: self.fov,
            }));
        }

        if let (Some(frame), Some(fps)) = (self.frame, self.fps) {
            events.push(FeedEvent::FrameTick(FrameTick { frame, fps }));
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_message() {
        let text = r#"{
            "position": {"x": 1.0, "y": 2.0, "z": -3.0},
            "quaternion": {"x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0},
            "rotation": {"x": 0.0, "y": 0.0, "z": 0.0},
            "fov": 39.6,
            "frame": 48,
            "fps": 24,
            "objectName": "Camera.001",
            "objectType": "CAMERA"
        }"#;

        let events = FeedMessage::parse(text).unwrap().events();
        assert_eq!(events.len(), 2);

        let FeedEvent::Pose(pose) = &events[0] else {
            panic!("expected a pose first, got {:?}", events[0]);
        };
        assert_eq!(pose.object_name, "Camera.001");
        assert!(pose.is_camera());
        assert_eq!(pose.position, [1.0, 2.0, -3.0]);
        assert_eq!(pose.fov, Some(39.6));

        assert_eq!(events[1], FeedEvent::FrameTick(FrameTick { frame: 48, fps: 24.0 }));
    }

    #[test]
    fn test_scrub_only_message() {
        let message = FeedMessage::parse(r#"{"scrubFrame": 36, "fps": 24}"#).unwrap();
        let events = message.events();

        assert_eq!(events, vec![FeedEvent::FrameTick(FrameTick { frame: 36, fps: 24.0 })]);
        let FeedEvent::FrameTick(tick) = events[0] else { unreachable!() };
        assert_eq!(tick.seconds(), 1.5);
    }

    #[test]
    fn test_null_fov_for_meshes() {
        let text = r#"{"position": {"x": 0, "y": 0, "z": 0},
                       "quaternion": {"x": 0, "y": 0, "z": 0, "w": 1},
                       "fov": null, "frame": 1, "fps": 30,
                       "objectName": "Cube", "objectType": "MESH"}"#;
        let events = FeedMessage::parse(text).unwrap().events();
        let FeedEvent::Pose(pose) = &events[0] else { unreachable!() };
        assert_eq!(pose.fov, None);
        assert!(!pose.is_camera());
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(FeedMessage::parse("not json"), Err(FeedError::Decode(_))));
    }

    #[test]
    fn test_zero_fps_tick() {
        assert_eq!(FrameTick { frame: 10, fps: 0.0 }.seconds(), 0.0);
    }
}
