pub mod config;
pub mod drag;
pub mod engine;
pub mod error;
pub mod event;
pub mod geometry;

pub use config::{AppConfig, EasingType, GalleryConfig, TransitionConfig};
pub use engine::GalleryEngine;
pub use error::{Error, Result};
pub use event::{PointerEvent, PointerKind, RenderState, ResizeEvent};
pub use geometry::Geometry;
