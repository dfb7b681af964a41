use ratatui::style::Color;

/// Runtime theme colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foreground colors
    pub fg0: Color,
    pub grey1: Color,
    pub grey2: Color,

    // Semantic colors
    pub warning: Color,

    /// Slide backgrounds, cycled by slide index
    pub slides: Vec<Color>,
}

impl Theme {
    pub fn slide_color(&self, index: usize) -> Color {
        if self.slides.is_empty() {
            self.bg1
        } else {
            self.slides[index % self.slides.len()]
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg0: Color::Rgb(0x28, 0x28, 0x28),
            bg1: Color::Rgb(0x32, 0x30, 0x2f),
            bg2: Color::Rgb(0x45, 0x40, 0x3d),
            fg0: Color::Rgb(0xd4, 0xbe, 0x98),
            grey1: Color::Rgb(0x92, 0x83, 0x74),
            grey2: Color::Rgb(0xa8, 0x99, 0x84),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
            slides: vec![
                Color::Rgb(0x45, 0x5b, 0x5e),
                Color::Rgb(0x5b, 0x4a, 0x3c),
                Color::Rgb(0x4a, 0x55, 0x3a),
                Color::Rgb(0x5e, 0x45, 0x4b),
                Color::Rgb(0x3f, 0x4a, 0x5e),
                Color::Rgb(0x5a, 0x52, 0x38),
            ],
        }
    }
}
