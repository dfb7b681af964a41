//! Configuration helpers for the settle transition

use std::time::Duration;

pub use gallery_core::TransitionConfig;

/// Extension trait for TransitionConfig with utility methods
pub trait TransitionConfigExt {
    /// Get transition duration as Duration
    fn duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;

    /// Check if the transition is effectively enabled
    fn is_smooth(&self) -> bool;
}

impl TransitionConfigExt for TransitionConfig {
    #[inline]
    fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis((1000 / self.animation_fps as u64).max(1))
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.enabled && self.duration_ms > 0
    }
}
