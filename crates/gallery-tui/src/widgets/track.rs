use gallery_core::Geometry;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// What a terminal column shows at a given track offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackCell {
    /// Outside the track, exposed while rubber-banding past an edge
    Empty,
    /// Margin between two slides
    Gap,
    /// Column `column` of slide `index`
    Slide { index: usize, column: u16 },
}

pub struct TrackWidget;

impl TrackWidget {
    /// Sample the track under a screen column, measured at the cell centre
    pub fn sample(
        geometry: &Geometry,
        offset_px: f64,
        cell_width: f64,
        screen_column: u16,
    ) -> TrackCell {
        let x = (f64::from(screen_column) + 0.5) * cell_width - offset_px;
        if x < 0.0 || x >= geometry.track_width() {
            return TrackCell::Empty;
        }

        let index = (x / geometry.stride()).floor() as usize;
        let within = x - index as f64 * geometry.stride();
        if index >= geometry.slide_count() || within >= geometry.viewport_width() {
            return TrackCell::Gap;
        }

        TrackCell::Slide {
            index,
            column: (within / cell_width).floor() as u16,
        }
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        app.set_track_area(area);

        let Some(engine) = app.engine() else {
            let message = app
                .status_message
                .clone()
                .unwrap_or_else(|| "Waiting for layout...".to_string());
            let paragraph = Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.grey1).bg(app.theme.bg0));
            frame.render_widget(paragraph, area);
            return;
        };

        let geometry = *engine.geometry();
        let dragging = engine.is_dragging();
        let cell_width = app.cell_width_px();
        let offset = app.visible_offset();
        let theme = &app.theme;
        let slide_columns = (geometry.viewport_width() / cell_width).round() as usize;
        let title_row = area.y + area.height / 2;
        let count = app.slides.len();

        let buf = frame.buffer_mut();
        for dx in 0..area.width {
            let cell = Self::sample(&geometry, offset, cell_width, dx);
            for y in area.y..area.y + area.height {
                let Some(target) = buf.cell_mut((area.x + dx, y)) else {
                    continue;
                };
                target.set_char(' ');

                let TrackCell::Slide { index, column } = cell else {
                    target.set_style(Style::default().bg(theme.bg0));
                    continue;
                };

                let mut style = Style::default().fg(theme.fg0).bg(theme.slide_color(index));
                let slide = &app.slides[index];
                let text = if y == title_row {
                    style = style.add_modifier(Modifier::BOLD);
                    if dragging {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    format!(" {} ", slide.title)
                } else if y == title_row + 1 {
                    style = style.fg(theme.grey2);
                    format!("{}/{}", slide.index + 1, count)
                } else {
                    target.set_style(style);
                    continue;
                };

                let len = text.chars().count();
                let start = slide_columns.saturating_sub(len) / 2;
                let column = usize::from(column);
                let ch = if column >= start {
                    text.chars().nth(column - start).unwrap_or(' ')
                } else {
                    ' '
                };
                target.set_char(ch).set_style(style);
            }
        }
    }
}
