//! Per-frame input snapshot
//!
//! The host debounces devices and hands the core plain booleans. Snapshots
//! deserialize from JSON so recorded traces can be replayed frame by frame.

use serde::{Deserialize, Serialize};

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Fire went down this frame
    pub fire_pressed: bool,
    /// Fire is being held
    pub fire_held: bool,
    pub pause_pressed: bool,
    pub confirm_pressed: bool,
    /// Window has input focus
    pub focused: bool,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            up: false,
            down: false,
            left: false,
            right: false,
            fire_pressed: false,
            fire_held: false,
            pause_pressed: false,
            confirm_pressed: false,
            focused: true,
        }
    }
}

impl FrameInput {
    pub fn firing(&self) -> bool {
        self.fire_pressed || self.fire_held
    }

    /// Vertical menu step: -1 for up, +1 for down (up wins when both are held)
    pub fn vertical_step(&self) -> Option<i32> {
        if self.up {
            Some(-1)
        } else if self.down {
            Some(1)
        } else {
            None
        }
    }
}
