mod status_bar;
mod track;

pub use status_bar::StatusBarWidget;
pub use track::{TrackCell, TrackWidget};
