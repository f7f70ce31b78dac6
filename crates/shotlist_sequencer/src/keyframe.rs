// SPDX-License-Identifier: MIT OR Apache-2.0
//! Keyframes and interpolation for camera clip channels.

use serde::{Deserialize, Serialize};

/// Interpolation mode between keyframes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InterpolationMode {
    /// Hold the value until the next keyframe
    Constant,
    /// Linear interpolation (slerp for quaternions)
    #[default]
    Linear,
}

/// Value stored in a keyframe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum KeyframeValue {
    /// Scalar value (field of view)
    Float(f32),
    /// 3D vector (position)
    Vec3([f32; 3]),
    /// Quaternion (x, y, z, w)
    Vec4([f32; 4]),
}

/// A keyframe in a clip channel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    /// Clip-local time in seconds
    pub time: f32,
    /// Value at this keyframe
    pub value: KeyframeValue,
    /// Interpolation mode to next keyframe
    #[serde(default)]
    pub interpolation: InterpolationMode,
}

impl Keyframe {
    /// Create a new linear keyframe
    pub fn new(time: f32, value: KeyframeValue) -> Self {
        Self {
            time,
            value,
            interpolation: InterpolationMode::Linear,
        }
    }

    /// Set interpolation mode
    pub fn with_interpolation(mut self, mode: InterpolationMode) -> Self {
        self.interpolation = mode;
        self
    }
}

/// Interpolation utilities
pub struct Interpolation;

impl Interpolation {
    /// Linear interpolation between two floats
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Interpolate Vec3
    pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
        [
            Self::lerp(a[0], b[0], t),
            Self::lerp(a[1], b[1], t),
            Self::lerp(a[2], b[2], t),
        ]
    }

    /// Interpolate Vec4 component-wise
    pub fn lerp_vec4(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
        [
            Self::lerp(a[0], b[0], t),
            Self::lerp(a[1], b[1], t),
            Self::lerp(a[2], b[2], t),
            Self::lerp(a[3], b[3], t),
        ]
    }

    /// Spherical linear interpolation for quaternions
    pub fn slerp(a: [f32; 4], b: [f32; 4], t: f32) -> [f32; 4] {
        let mut dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3];

        // Take the short way around
        let mut b = b;
        if dot < 0.0 {
            b = [-b[0], -b[1], -b[2], -b[3]];
            dot = -dot;
        }

        if dot > 0.9995 {
            return normalize_quat(Self::lerp_vec4(a, b, t));
        }

        let theta_0 = dot.acos();
        let theta = theta_0 * t;
        let sin_theta_0 = theta_0.sin();

        let s0 = (theta_0 - theta).sin() / sin_theta_0;
        let s1 = theta.sin() / sin_theta_0;

        [
            a[0] * s0 + b[0] * s1,
            a[1] * s0 + b[1] * s1,
            a[2] * s0 + b[2] * s1,
            a[3] * s0 + b[3] * s1,
        ]
    }
}

/// Normalize a quaternion, falling back to identity for a zero-length input
pub fn normalize_quat(q: [f32; 4]) -> [f32; 4] {
    let len = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
    if len <= f32::EPSILON {
        return [0.0, 0.0, 0.0, 1.0];
    }
    [q[0] / len, q[1] / len, q[2] / len, q[3] / len]
}

impl KeyframeValue {
    /// Interpolate between two keyframe values of the same kind
    pub fn interpolate(&self, other: &KeyframeValue, t: f32, mode: InterpolationMode) -> Option<KeyframeValue> {
        if mode == InterpolationMode::Constant {
            return Some(*self);
        }
        match (self, other) {
            (KeyframeValue::Float(a), KeyframeValue::Float(b)) => {
                Some(KeyframeValue::Float(Interpolation::lerp(*a, *b, t)))
            }
            (KeyframeValue::Vec3(a), KeyframeValue::Vec3(b)) => {
                Some(KeyframeValue::Vec3(Interpolation::lerp_vec3(*a, *b, t)))
            }
            (KeyframeValue::Vec4(a), KeyframeValue::Vec4(b)) => {
                Some(KeyframeValue::Vec4(Interpolation::slerp(*a, *b, t)))
            }
            _ => None, // Mismatched types
        }
    }

    /// Get as float if possible
    pub fn as_float(&self) -> Option<f32> {
        match self {
            KeyframeValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as Vec3 if possible
    pub fn as_vec3(&self) -> Option<[f32; 3]> {
        match self {
            KeyframeValue::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as Vec4/quaternion if possible
    pub fn as_vec4(&self) -> Option<[f32; 4]> {
        match self {
            KeyframeValue::Vec4(v) => Some(*v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_constant_holds_left_value() {
        let a = KeyframeValue::Float(10.0);
        let b = KeyframeValue::Float(20.0);
        let v = a.interpolate(&b, 0.75, InterpolationMode::Constant).unwrap();
        assert_eq!(v, KeyframeValue::Float(10.0));
    }

    #[test]
    fn test_mismatched_values_do_not_interpolate() {
        let a = KeyframeValue::Float(1.0);
        let b = KeyframeValue::Vec3([0.0; 3]);
        assert!(a.interpolate(&b, 0.5, InterpolationMode::Linear).is_none());
    }

    #[test]
    fn test_slerp_halfway_about_y() {
        let identity = [0.0, 0.0, 0.0, 1.0];
        // 90 degrees about Y
        let half = std::f32::consts::FRAC_PI_4;
        let quarter_turn = [0.0, half.sin(), 0.0, half.cos()];

        let mid = Interpolation::slerp(identity, quarter_turn, 0.5);
        let eighth = std::f32::consts::FRAC_PI_8;
        assert!(approx(mid[1], eighth.sin()));
        assert!(approx(mid[3], eighth.cos()));
    }

    #[test]
    fn test_normalize_zero_quat() {
        assert_eq!(normalize_quat([0.0; 4]), [0.0, 0.0, 0.0, 1.0]);
    }
}
