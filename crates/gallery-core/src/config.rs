use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Per-instance gallery parameters handed to the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalleryConfig {
    /// Number of slides, fixed for the lifetime of the engine
    pub slide_count: usize,
    /// Horizontal gap between slides in pixels
    pub margin: f64,
    /// Slide shown before any interaction
    pub initial_slide: usize,
}

impl GalleryConfig {
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            margin: 0.0,
            initial_slide: 0,
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_initial_slide(mut self, initial_slide: usize) -> Self {
        self.initial_slide = initial_slide;
        self
    }

    /// Check the parameters that do not depend on layout
    pub fn validate(&self) -> Result<()> {
        if self.slide_count < 1 {
            return Err(Error::InvalidConfiguration(
                "slide count must be at least 1".to_string(),
            ));
        }
        if self.initial_slide >= self.slide_count {
            return Err(Error::InvalidConfiguration(format!(
                "initial slide {} is out of range for {} slides",
                self.initial_slide, self.slide_count
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "margin must be a non-negative number, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub gallery: GallerySection,
    #[serde(default)]
    pub transition: TransitionConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (logs are written here while the TUI runs)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GallerySection {
    /// Gap between slides in pixels
    #[serde(default)]
    pub margin: f64,
    /// Slide shown at startup
    #[serde(default)]
    pub initial_slide: usize,
    /// Slide titles, one slide per entry
    #[serde(default = "default_slides")]
    pub slides: Vec<String>,
}

impl Default for GallerySection {
    fn default() -> Self {
        Self {
            margin: 0.0,
            initial_slide: 0,
            slides: default_slides(),
        }
    }
}

impl GallerySection {
    pub fn gallery_config(&self) -> GalleryConfig {
        GalleryConfig::new(self.slides.len())
            .with_margin(self.margin)
            .with_initial_slide(self.initial_slide)
    }
}

/// Easing curve for the settle transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the transition
    None,
    Linear,
    /// CSS `ease`
    #[default]
    Ease,
    Cubic,
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionConfig {
    /// Animate the settle after release and programmatic slide changes
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Settle duration in milliseconds
    #[serde(default = "default_transition_duration")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while a transition is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_transition_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Quiet window before a resize is applied
    #[serde(default = "default_resize_debounce")]
    pub resize_debounce_ms: u64,
    /// Pixels per terminal column
    #[serde(default = "default_cell_width")]
    pub cell_width_px: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            resize_debounce_ms: default_resize_debounce(),
            cell_width_px: default_cell_width(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gallery")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_slides() -> Vec<String> {
    ["Aurora", "Harbor", "Meadow", "Canyon", "Glacier"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

fn default_transition_duration() -> u64 {
    250
}

fn default_animation_fps() -> u32 {
    60
}

fn default_tick_rate() -> u64 {
    100
}

fn default_resize_debounce() -> u64 {
    100
}

fn default_cell_width() -> u16 {
    8
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path();
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save configuration to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Always uses ~/.config/gallery/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("gallery")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the terminal UI owns the screen
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("gallery.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.gallery.slides.len(), 5);
        assert_eq!(config.gallery.initial_slide, 0);
        assert!(config.transition.enabled);
        assert_eq!(config.transition.duration_ms, 250);
        assert_eq!(config.transition.easing, EasingType::Ease);
        assert_eq!(config.ui.resize_debounce_ms, 100);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [gallery]
            margin = 16.0
            initial_slide = 2

            [transition]
            easing = "cubic"
            "#,
        )
        .unwrap();
        assert_eq!(config.gallery.margin, 16.0);
        assert_eq!(config.gallery.initial_slide, 2);
        assert_eq!(config.gallery.slides.len(), 5);
        assert_eq!(config.transition.easing, EasingType::Cubic);
        assert_eq!(config.transition.duration_ms, 250);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            AppConfig::from_toml("[gallery]\nmargin = \"wide\""),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_gallery_config_validation() {
        assert!(GalleryConfig::new(3).validate().is_ok());
        assert!(GalleryConfig::new(0).validate().is_err());
        assert!(GalleryConfig::new(2).with_initial_slide(2).validate().is_err());
        assert!(GalleryConfig::new(2).with_margin(-4.0).validate().is_err());
    }

    #[test]
    fn test_section_to_gallery_config() {
        let section = GallerySection {
            margin: 12.0,
            initial_slide: 1,
            slides: vec!["a".into(), "b".into()],
        };
        let gallery = section.gallery_config();
        assert_eq!(gallery.slide_count, 2);
        assert_eq!(gallery.initial_slide, 1);
        assert_eq!(gallery.margin, 12.0);
    }
}
