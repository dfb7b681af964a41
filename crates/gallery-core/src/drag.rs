//! Per-gesture drag bookkeeping

use crate::geometry::SLIDE_COMMIT_THRESHOLD;

/// Direction a drag gesture moves the committed slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideStep {
    /// Pointer dragged right, reveal the slide to the left
    Previous,
    /// Pointer dragged left, reveal the slide to the right
    Next,
}

/// State captured at pointer-down, alive until pointer-up or cancel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Track offset when the pointer went down
    pub anchor_offset: f64,
    /// Pointer X when the pointer went down
    pub anchor_pointer_x: f64,
    /// Set once this gesture has moved the committed slide
    pub slide_changed: bool,
}

impl DragSession {
    pub fn open(anchor_offset: f64, anchor_pointer_x: f64) -> Self {
        Self {
            anchor_offset,
            anchor_pointer_x,
            slide_changed: false,
        }
    }

    /// Pointer travel since the anchor, positive to the right
    #[inline]
    pub fn delta(&self, pointer_x: f64) -> f64 {
        pointer_x - self.anchor_pointer_x
    }

    /// Step the committed slide should take for this delta, if any
    ///
    /// Only the first threshold crossing of a gesture counts.
    pub fn commit_direction(&self, delta: f64) -> Option<SlideStep> {
        if self.slide_changed {
            return None;
        }
        if delta > SLIDE_COMMIT_THRESHOLD {
            Some(SlideStep::Previous)
        } else if delta < -SLIDE_COMMIT_THRESHOLD {
            Some(SlideStep::Next)
        } else {
            None
        }
    }
}
