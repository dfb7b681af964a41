use std::sync::Arc;
use std::time::Instant;

use gallery_core::{
    AppConfig, Error, GalleryConfig, GalleryEngine, PointerKind, RenderState, ResizeEvent,
};
use ratatui::layout::Rect;
use tracing::{debug, info, warn};

use crate::input::Action;
use crate::resize::ResizeDebouncer;
use crate::theme::Theme;
use crate::transition::SettleAnimator;

/// One content panel on the track
///
/// Indices are assigned once, before the engine exists, and never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub index: usize,
    pub title: String,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Slides in track order
    pub slides: Vec<Slide>,
    gallery: GalleryConfig,
    /// `None` until the terminal reports a usable width
    engine: Option<GalleryEngine>,
    /// Offset actually drawn, trailing the engine during settles
    pub animator: SettleAnimator,
    resize: ResizeDebouncer,
    /// Where the track was last drawn, for hit testing
    track_area: Rect,
    pub theme: Theme,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    /// Build the app for a terminal `columns` wide
    ///
    /// A zero-width terminal defers engine creation until the first resize.
    pub fn new(config: Arc<AppConfig>, theme: Theme, columns: u16) -> gallery_core::Result<Self> {
        let slides: Vec<Slide> = config
            .gallery
            .slides
            .iter()
            .enumerate()
            .map(|(index, title)| Slide {
                index,
                title: title.clone(),
            })
            .collect();

        let gallery = config.gallery.gallery_config();
        gallery.validate()?;

        let mut app = Self {
            slides,
            gallery,
            engine: None,
            animator: SettleAnimator::new(config.transition.clone(), 0.0),
            resize: ResizeDebouncer::from_millis(config.ui.resize_debounce_ms),
            track_area: Rect::default(),
            theme,
            should_quit: false,
            status_message: None,
            config,
        };
        app.layout(app.viewport_width(columns));

        Ok(app)
    }

    pub fn engine(&self) -> Option<&GalleryEngine> {
        self.engine.as_ref()
    }

    /// Offset currently drawn, in pixels
    pub fn visible_offset(&self) -> f64 {
        self.animator.current()
    }

    pub fn cell_width_px(&self) -> f64 {
        f64::from(self.config.ui.cell_width_px.max(1))
    }

    fn viewport_width(&self, columns: u16) -> f64 {
        f64::from(columns) * self.cell_width_px()
    }

    /// Remember where the track is drawn so pointer-down can be hit tested
    pub fn set_track_area(&mut self, area: Rect) {
        self.track_area = area;
    }

    /// Whether the loop should poll at animation frame rate
    pub fn needs_fast_update(&self) -> bool {
        self.animator.is_animating() || self.resize.is_pending()
    }

    /// Feed a left-button mouse event into the engine
    pub fn handle_pointer(&mut self, kind: PointerKind, column: u16, row: u16, now: Instant) {
        let area = self.track_area;
        let pointer_x = (f64::from(column) - f64::from(area.x)) * self.cell_width_px();
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        let state = match kind {
            PointerKind::Down => {
                let inside = column >= area.x
                    && column < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height;
                if !inside {
                    return;
                }
                match engine.pointer_down(pointer_x) {
                    Ok(state) => state,
                    Err(e) => {
                        warn!("pointer down rejected: {}", e);
                        return;
                    }
                }
            }
            PointerKind::Move => engine.pointer_move(pointer_x),
            PointerKind::Up => engine.pointer_up(),
            PointerKind::Cancel => engine.pointer_cancel(),
        };

        self.publish(state, now);
    }

    /// Apply a keyboard action
    pub fn apply_action(&mut self, action: Action, now: Instant) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }
        let Some(engine) = self.engine.as_mut() else {
            return;
        };

        let current = engine.current_slide();
        let state = match action {
            Action::PreviousSlide => engine.go_to(current.saturating_sub(1)),
            Action::NextSlide => engine.go_to(current + 1),
            Action::FirstSlide => engine.go_to(0),
            Action::LastSlide => engine.go_to(engine.slide_count() - 1),
            Action::Quit | Action::None => return,
        };

        self.publish(state, now);
    }

    /// Record a raw terminal resize; applied once the debounce window passes
    pub fn signal_resize(&mut self, columns: u16, now: Instant) {
        let width = self.viewport_width(columns);
        self.resize.signal(width, now);
    }

    /// Advance timers: debounced resize first, then the settle animation
    pub fn tick(&mut self, now: Instant) -> f64 {
        if let Some(event) = self.resize.poll(now) {
            self.apply_resize(event, now);
        }
        self.animator.update(now)
    }

    fn apply_resize(&mut self, event: ResizeEvent, now: Instant) {
        let Some(engine) = self.engine.as_mut() else {
            self.layout(event.new_viewport_width);
            return;
        };

        match engine.handle_resize(event) {
            Ok(state) => self.publish(state, now),
            Err(e) => {
                self.status_message = Some(format!("Resize ignored: {}", e));
            }
        }
    }

    /// Create the engine once a usable width is known
    fn layout(&mut self, viewport_width: f64) {
        match GalleryEngine::new(self.gallery, viewport_width) {
            Ok(engine) => {
                info!(
                    slides = engine.slide_count(),
                    width = viewport_width,
                    "gallery laid out"
                );
                self.animator.jump_to(engine.offset());
                self.engine = Some(engine);
                self.status_message = None;
            }
            Err(Error::GeometryUnavailable { width }) => {
                debug!(width, "container not laid out yet, deferring geometry");
                self.status_message = Some("Waiting for layout...".to_string());
            }
            Err(e) => {
                warn!("gallery layout failed: {}", e);
                self.status_message = Some(e.to_string());
            }
        }
    }

    fn publish(&mut self, state: RenderState, now: Instant) {
        self.status_message = None;
        self.animator.follow(&state, now);
    }
}
