// SPDX-License-Identifier: MIT OR Apache-2.0
//! Camera handles driven by the sequencer.
//!
//! The sequencer never constructs cameras. Callers own them and hand out
//! [`SharedCamera`] handles; the sequencer only reads and writes poses through
//! the [`Camera`] trait and asks the camera to refresh its projection after
//! every write.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// Caller-owned camera handle shared with the sequencer
pub type SharedCamera<C> = Rc<RefCell<C>>;

/// Wrap a camera into a [`SharedCamera`] handle
pub fn shared<C>(camera: C) -> SharedCamera<C> {
    Rc::new(RefCell::new(camera))
}

/// Position, orientation and field of view of a camera
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// World position
    pub position: [f32; 3],
    /// Orientation as a unit quaternion (x, y, z, w)
    pub orientation: [f32; 4],
    /// Vertical field of view in degrees
    pub fov: f32,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: [0.0; 3],
            orientation: [0.0, 0.0, 0.0, 1.0],
            fov: 50.0,
        }
    }
}

/// A mutable camera the sequencer can pose
pub trait Camera {
    /// Current pose
    fn pose(&self) -> CameraPose;

    /// Overwrite position, orientation and field of view
    fn set_pose(&mut self, pose: &CameraPose);

    /// Recompute projection state after a pose change
    fn update_projection(&mut self);
}

/// Copy `from`'s pose onto `to` and refresh `to`'s projection
pub fn copy_pose<A, B>(from: &A, to: &mut B)
where
    A: Camera + ?Sized,
    B: Camera + ?Sized,
{
    to.set_pose(&from.pose());
    to.update_projection();
}

/// Perspective camera with a cached projection matrix
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveCamera {
    /// Current pose
    pub pose: CameraPose,
    /// Viewport aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
    /// Column-major projection matrix, valid after `update_projection`
    projection: [[f32; 4]; 4],
    /// Number of projection refreshes
    projection_updates: u64,
}

impl PerspectiveCamera {
    /// Create a camera with the given vertical fov (degrees) and aspect ratio
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            pose: CameraPose {
                fov,
                ..CameraPose::default()
            },
            aspect,
            near,
            far,
            projection: [[0.0; 4]; 4],
            projection_updates: 0,
        };
        camera.update_projection();
        camera.projection_updates = 0;
        camera
    }

    /// Set the starting pose
    pub fn with_pose(mut self, pose: CameraPose) -> Self {
        self.pose = pose;
        self.update_projection();
        self.projection_updates = 0;
        self
    }

    /// Cached projection matrix
    pub fn projection(&self) -> &[[f32; 4]; 4] {
        &self.projection
    }

    /// How many times the projection was recomputed since construction
    pub fn projection_updates(&self) -> u64 {
        self.projection_updates
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(50.0, 16.0 / 9.0, 0.1, 1000.0)
    }
}

impl Camera for PerspectiveCamera {
    fn pose(&self) -> CameraPose {
        self.pose
    }

    fn set_pose(&mut self, pose: &CameraPose) {
        self.pose = *pose;
    }

    fn update_projection(&mut self) {
        let f = 1.0 / (self.pose.fov.to_radians() * 0.5).tan();
        let range = self.near - self.far;

        self.projection = [
            [f / self.aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, (self.far + self.near) / range, -1.0],
            [0.0, 0.0, 2.0 * self.far * self.near / range, 0.0],
        ];
        self.projection_updates += 1;
    }
}
