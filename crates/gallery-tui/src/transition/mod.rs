//! Animated settle transition for the rendered track
//!
//! The engine only says *whether* an offset change should animate. This
//! module turns that into frames.
//!
//! - `easing` - Pure easing curves (CSS ease, cubic, exponential)
//! - `timing` - Progress and interpolation helpers
//! - `config` - Duration and frame-rate helpers over `TransitionConfig`
//! - `animation` - `SettleAnimator`, which combines the above
//!
//! # Usage
//!
//! ```ignore
//! use gallery_tui::transition::SettleAnimator;
//!
//! let mut animator = SettleAnimator::new(config.transition.clone(), engine.offset());
//!
//! // After every engine transition
//! animator.follow(&engine.render_state(), Instant::now());
//!
//! // Every frame
//! let offset = animator.update(Instant::now());
//! ```

pub mod config;
pub mod easing;
pub mod timing;

pub mod animation;

pub use animation::SettleAnimator;
pub use config::{TransitionConfig, TransitionConfigExt};
pub use easing::{EasingType, EasingTypeExt};
