pub mod app;
pub mod event;
pub mod input;
pub mod resize;
pub mod theme;
pub mod transition;
pub mod widgets;

pub use app::{App, Slide};
pub use theme::Theme;
