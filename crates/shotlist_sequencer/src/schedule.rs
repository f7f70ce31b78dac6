// SPDX-License-Identifier: MIT OR Apache-2.0
//! One-shot callbacks keyed to the virtual timeline.

/// Frame rate assumed when converting frame numbers to seconds
pub const DEFAULT_BASE_FRAMERATE: f32 = 24.0;

/// Action run when a scheduled callback fires
pub type FrameScriptAction = Box<dyn FnMut()>;

/// A callback waiting for the playhead to pass its trigger time
pub struct ScheduledCallback {
    /// Trigger time on the virtual timeline, in seconds
    pub time: f32,
    action: FrameScriptAction,
    fired: bool,
}

impl ScheduledCallback {
    /// Whether the callback already fired in the current session
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

impl std::fmt::Debug for ScheduledCallback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduledCallback")
            .field("time", &self.time)
            .field("fired", &self.fired)
            .finish_non_exhaustive()
    }
}

/// Registry of scheduled callbacks
///
/// Callbacks are never removed. Each fires at most once between two calls to
/// [`FrameScripts::reset`].
#[derive(Debug, Default)]
pub struct FrameScripts {
    callbacks: Vec<ScheduledCallback>,
}

impl FrameScripts {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback at `time` seconds
    pub fn register(&mut self, time: f32, action: impl FnMut() + 'static) {
        self.callbacks.push(ScheduledCallback {
            time,
            action: Box::new(action),
            fired: false,
        });
    }

    /// Clear every fired flag
    pub fn reset(&mut self) {
        for callback in &mut self.callbacks {
            callback.fired = false;
        }
    }

    /// Fire, in registration order, every callback the playhead has passed.
    ///
    /// Returns the number of callbacks fired.
    pub fn fire_due(&mut self, playhead: f32) -> usize {
        let mut fired = 0;
        for callback in &mut self.callbacks {
            if !callback.fired && callback.time < playhead {
                callback.fired = true;
                (callback.action)();
                fired += 1;
            }
        }
        fired
    }

    /// Registered callbacks
    pub fn iter(&self) -> impl Iterator<Item = &ScheduledCallback> {
        self.callbacks.iter()
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

/// Convert a frame number to seconds
pub fn frame_to_time(frame: u32, frame_rate: f32) -> f32 {
    frame as f32 / frame_rate
}

/// Convert seconds to the nearest frame number.
///
/// Negative times map to frame 0 and times beyond `u32::MAX` frames saturate.
pub fn time_to_frame(time: f32, frame_rate: f32) -> u32 {
    (time * frame_rate).round().max(0.0) as u32
}
