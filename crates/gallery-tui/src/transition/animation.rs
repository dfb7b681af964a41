//! Settle animation controller
//!
//! Follows the engine's published offset. While the engine reports the
//! transition as disabled (dragging, resizing) the rendered offset jumps
//! straight to the engine offset; otherwise it eases toward it.

use std::time::{Duration, Instant};

use gallery_core::RenderState;

use super::config::{TransitionConfig, TransitionConfigExt};
use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, lerp, progress};

/// Active settle animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone)]
pub struct SettleAnimator {
    animation: Option<ActiveAnimation>,
    config: TransitionConfig,
    /// Offset currently on screen
    current: f64,
}

impl SettleAnimator {
    pub fn new(config: TransitionConfig, initial_offset: f64) -> Self {
        Self {
            animation: None,
            config,
            current: initial_offset,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Offset currently on screen
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Offset the renderer will end up at
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    /// Take in a freshly published engine state
    pub fn follow(&mut self, state: &RenderState, now: Instant) {
        let target = state.offset_px;

        if !state.transition_enabled || !self.config.is_smooth() {
            self.jump_to(target);
            return;
        }

        if (self.target() - target).abs() < f64::EPSILON {
            return;
        }
        if (self.current - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        // Retargeting mid-flight starts from the visible position.
        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.config.duration(),
            easing: self.config.easing,
        });
    }

    /// Set the visible offset immediately, dropping any animation
    pub fn jump_to(&mut self, offset: f64) {
        self.animation = None;
        self.current = offset;
    }

    /// Advance the animation and return the visible offset
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(ref anim) = self.animation {
            if is_complete(anim.start, anim.duration, now) {
                self.current = anim.to;
                self.animation = None;
            } else {
                let t = progress(anim.start, anim.duration, now);
                self.current = lerp(anim.from, anim.to, anim.easing.apply(t));
            }
        }

        self.current
    }
}
