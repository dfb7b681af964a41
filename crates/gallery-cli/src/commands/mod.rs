pub mod geometry;
pub mod init_config;
pub mod run;
pub mod simulate;

use clap::Args;

use gallery_core::{AppConfig, GalleryConfig};

/// Layout options shared by the headless commands
///
/// Anything left unset falls back to the `[gallery]` section of the config.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Number of slides
    #[arg(long)]
    pub slides: Option<usize>,
    /// Container width in pixels
    #[arg(short, long, default_value_t = 300.0)]
    pub width: f64,
    /// Gap between slides in pixels
    #[arg(short, long)]
    pub margin: Option<f64>,
    /// Slide shown first
    #[arg(short, long)]
    pub initial: Option<usize>,
}

impl LayoutArgs {
    pub fn gallery_config(&self, config: &AppConfig) -> GalleryConfig {
        let section = &config.gallery;
        GalleryConfig::new(self.slides.unwrap_or(section.slides.len()))
            .with_margin(self.margin.unwrap_or(section.margin))
            .with_initial_slide(self.initial.unwrap_or(section.initial_slide))
    }
}
