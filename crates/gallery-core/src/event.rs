//! Input and output records exchanged with a rendering adapter.

use serde::{Deserialize, Serialize};

/// Phase of a pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A single pointer sample in container pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub pointer_x: f64,
}

impl PointerEvent {
    pub fn down(pointer_x: f64) -> Self {
        Self { kind: PointerKind::Down, pointer_x }
    }

    pub fn moved(pointer_x: f64) -> Self {
        Self { kind: PointerKind::Move, pointer_x }
    }

    pub fn up(pointer_x: f64) -> Self {
        Self { kind: PointerKind::Up, pointer_x }
    }

    pub fn cancel(pointer_x: f64) -> Self {
        Self { kind: PointerKind::Cancel, pointer_x }
    }
}

/// Container resize, already debounced by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeEvent {
    pub new_viewport_width: f64,
}

/// Everything a renderer needs to position the track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    /// Horizontal translation of the track in pixels
    pub offset_px: f64,
    /// Committed slide index
    pub current_slide: usize,
    /// Whether offset changes should be animated
    pub transition_enabled: bool,
    /// Whether a pointer is currently held down on the track
    pub dragging: bool,
}
