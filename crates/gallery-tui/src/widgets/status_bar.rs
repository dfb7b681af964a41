use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg)
        } else if let Some(engine) = app.engine() {
            let mode_str = if engine.is_dragging() {
                "DRAG"
            } else if app.animator.is_animating() {
                "SETTLE"
            } else {
                "IDLE"
            };
            format!(
                " {} | Slide {}/{} | Offset {:.0}px | Width {:.0}px",
                mode_str,
                engine.current_slide() + 1,
                engine.slide_count(),
                app.visible_offset(),
                engine.geometry().viewport_width(),
            )
        } else {
            " LAYOUT".to_string()
        };

        let help_hint = " q:quit h/l:slide g/G:first/last drag:mouse ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let status_style = if app.status_message.is_some() {
            Style::default().fg(theme.warning).bg(theme.bg2)
        } else {
            Style::default().fg(theme.fg0).bg(theme.bg2)
        };

        let line = Line::from(vec![
            Span::styled(status_text, status_style),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
