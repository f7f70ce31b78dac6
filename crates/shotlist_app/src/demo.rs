// SPDX-License-Identifier: MIT OR Apache-2.0
//! Built-in camera clips used when the config provides none.

use shotlist_sequencer::CameraClip;

/// Quaternion for a rotation of `degrees` about the Y axis
fn yaw(degrees: f32) -> [f32; 4] {
    let half = degrees.to_radians() * 0.5;
    [0.0, half.sin(), 0.0, half.cos()]
}

/// Three short shots: a dolly, a push-in and an orbit
pub fn demo_clips() -> Vec<CameraClip> {
    let wide = CameraClip::new("wide", 4.0)
        .with_position(0.0, [-6.0, 2.0, 10.0])
        .with_position(4.0, [6.0, 2.0, 10.0])
        .with_rotation(0.0, yaw(0.0))
        .with_fov(0.0, 50.0);

    let close = CameraClip::new("close", 2.0)
        .with_position(0.0, [0.0, 1.6, 4.0])
        .with_position(2.0, [0.0, 1.6, 2.5])
        .with_rotation(0.0, yaw(0.0))
        .with_fov(0.0, 35.0)
        .with_fov(2.0, 24.0);

    let orbit = CameraClip::new("orbit", 3.0)
        .with_position(0.0, [0.0, 3.0, 8.0])
        .with_position(1.5, [8.0, 3.0, 0.0])
        .with_position(3.0, [0.0, 3.0, -8.0])
        .with_rotation(0.0, yaw(0.0))
        .with_rotation(1.5, yaw(90.0))
        .with_rotation(3.0, yaw(180.0))
        .with_fov(0.0, 45.0);

    vec![wide, close, orbit]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_clips() {
        let clips = demo_clips();
        let names: Vec<&str> = clips.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["wide", "close", "orbit"]);
        assert!(clips.iter().all(|c| c.duration > 0.0 && !c.is_empty()));
    }
}
