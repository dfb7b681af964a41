//! Gallery position and drag state machine
//!
//! The engine owns every piece of slider state and exposes it to a renderer as
//! a [`RenderState`]. Transitions run to completion and always leave
//! `offset` and `current_slide` consistent with each other.
//!
//! ```text
//!   Idle --pointer_down--> Dragging --pointer_move--> Dragging
//!     ^                                                  |
//!     +------------- pointer_up / pointer_cancel --------+
//! ```

use tracing::{debug, warn};

use crate::config::GalleryConfig;
use crate::drag::{DragSession, SlideStep};
use crate::error::{Error, Result};
use crate::event::{PointerEvent, PointerKind, RenderState, ResizeEvent};
use crate::geometry::Geometry;

#[derive(Debug, Clone)]
pub struct GalleryEngine {
    geometry: Geometry,
    current_slide: usize,
    /// Track translation in pixels, the single value a renderer positions by
    offset: f64,
    drag: Option<DragSession>,
    transition_enabled: bool,
}

impl GalleryEngine {
    /// Lay out `config` in a container `viewport_width` pixels wide
    ///
    /// Fails with [`Error::GeometryUnavailable`] when the container has no
    /// usable width yet; callers should retry once layout has happened.
    pub fn new(config: GalleryConfig, viewport_width: f64) -> Result<Self> {
        config.validate()?;
        let geometry = Geometry::new(config.slide_count, config.margin, viewport_width)?;
        let offset = geometry.settled_offset(config.initial_slide);

        debug!(
            slides = config.slide_count,
            width = viewport_width,
            initial = config.initial_slide,
            "gallery engine created"
        );

        Ok(Self {
            geometry,
            current_slide: config.initial_slide,
            offset,
            drag: None,
            transition_enabled: false,
        })
    }

    #[inline]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.geometry.slide_count()
    }

    #[inline]
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Open drag session, if a pointer is down
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn render_state(&self) -> RenderState {
        RenderState {
            offset_px: self.offset,
            current_slide: self.current_slide,
            transition_enabled: self.transition_enabled,
            dragging: self.drag.is_some(),
        }
    }

    /// Dispatch a pointer event to the matching transition
    pub fn handle(&mut self, event: PointerEvent) -> Result<RenderState> {
        match event.kind {
            PointerKind::Down => self.pointer_down(event.pointer_x),
            PointerKind::Move => Ok(self.pointer_move(event.pointer_x)),
            PointerKind::Up => Ok(self.pointer_up()),
            PointerKind::Cancel => Ok(self.pointer_cancel()),
        }
    }

    /// Start a drag gesture anchored at the current offset
    ///
    /// A second pointer-down while a session is open is rejected and the open
    /// session is kept as is.
    pub fn pointer_down(&mut self, pointer_x: f64) -> Result<RenderState> {
        if self.drag.is_some() {
            warn!(pointer_x, "pointer down ignored, drag session already open");
            return Err(Error::SessionConflict);
        }

        self.drag = Some(DragSession::open(self.offset, pointer_x));
        self.transition_enabled = false;
        debug!(pointer_x, offset = self.offset, "drag started");

        Ok(self.render_state())
    }

    /// Track the pointer and commit at most one slide change per gesture
    ///
    /// Moves without an open session are ignored.
    pub fn pointer_move(&mut self, pointer_x: f64) -> RenderState {
        let Some(session) = self.drag.as_mut() else {
            return self.render_state();
        };

        let delta = session.delta(pointer_x);
        self.offset = self.geometry.resist(session.anchor_offset, delta);

        match session.commit_direction(delta) {
            Some(SlideStep::Previous) if self.current_slide > 0 => {
                self.current_slide -= 1;
                session.slide_changed = true;
                debug!(slide = self.current_slide, delta, "drag committed previous slide");
            }
            Some(SlideStep::Next) if self.current_slide + 1 < self.geometry.slide_count() => {
                self.current_slide += 1;
                session.slide_changed = true;
                debug!(slide = self.current_slide, delta, "drag committed next slide");
            }
            _ => {}
        }

        self.render_state()
    }

    /// End the gesture and snap to the committed slide
    pub fn pointer_up(&mut self) -> RenderState {
        self.release()
    }

    /// Cancelled gestures settle exactly like released ones
    pub fn pointer_cancel(&mut self) -> RenderState {
        self.release()
    }

    fn release(&mut self) -> RenderState {
        if self.drag.take().is_none() {
            return self.render_state();
        }
        debug!(slide = self.current_slide, "drag released");
        self.settle()
    }

    /// Snap the offset to the committed slide with an animated transition
    ///
    /// Has no effect while a drag session is open.
    pub fn settle(&mut self) -> RenderState {
        if self.drag.is_none() {
            self.offset = self.geometry.settled_offset(self.current_slide);
            self.transition_enabled = true;
        }
        self.render_state()
    }

    /// Re-lay out the track for a new container width
    ///
    /// The committed slide is kept and the offset jumps to its new settled
    /// position without animation. An open drag session is re-anchored so the
    /// gesture continues against the new geometry. Invalid widths leave all
    /// state untouched.
    pub fn resize(&mut self, viewport_width: f64) -> Result<RenderState> {
        let geometry = match self.geometry.with_viewport_width(viewport_width) {
            Ok(geometry) => geometry,
            Err(e) => {
                warn!(width = viewport_width, "resize rejected: {}", e);
                return Err(e);
            }
        };

        if let Some(session) = self.drag.as_mut() {
            // Anchors always sit on a settled offset, so scaling by stride is exact.
            session.anchor_offset *= geometry.stride() / self.geometry.stride();
        }

        self.geometry = geometry;
        self.offset = self.geometry.settled_offset(self.current_slide);
        self.transition_enabled = false;
        debug!(
            width = viewport_width,
            slide = self.current_slide,
            offset = self.offset,
            "gallery resized"
        );

        Ok(self.render_state())
    }

    pub fn handle_resize(&mut self, event: ResizeEvent) -> Result<RenderState> {
        self.resize(event.new_viewport_width)
    }

    /// Select a slide directly, for navigation built on top of the engine
    ///
    /// Out-of-range indices and requests during a drag are ignored.
    pub fn go_to(&mut self, slide: usize) -> RenderState {
        if self.drag.is_some() {
            debug!(slide, "go_to ignored while dragging");
            return self.render_state();
        }
        if slide >= self.geometry.slide_count() {
            debug!(slide, count = self.geometry.slide_count(), "go_to out of range");
            return self.render_state();
        }

        self.current_slide = slide;
        self.settle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::EDGE_RESISTANCE;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    /// Five slides, no margin, 300px wide, starting on slide 2
    fn middle_of_five() -> GalleryEngine {
        GalleryEngine::new(GalleryConfig::new(5).with_initial_slide(2), 300.0).unwrap()
    }

    #[test]
    fn test_initial_offset_for_middle_slide() {
        let engine = middle_of_five();
        assert!(approx(engine.offset(), -600.0));
        assert!(approx(engine.geometry().maximum_offset(), -1200.0));
        assert_eq!(engine.current_slide(), 2);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_drag_right_commits_previous() {
        let mut engine = middle_of_five();
        engine.pointer_down(100.0).unwrap();
        let state = engine.pointer_move(135.0);

        assert_eq!(state.current_slide, 1);
        assert!(engine.drag_session().unwrap().slide_changed);
        assert!(approx(state.offset_px, -565.0));
        assert!(state.dragging);
        assert!(!state.transition_enabled);
    }

    #[test]
    fn test_drag_left_then_release() {
        let mut engine = middle_of_five();
        engine.pointer_down(100.0).unwrap();
        let state = engine.pointer_move(60.0);
        assert_eq!(state.current_slide, 3);

        let state = engine.pointer_up();
        assert!(approx(state.offset_px, -900.0));
        assert_eq!(state.current_slide, 3);
        assert!(!state.dragging);
        assert!(state.transition_enabled);
    }

    #[test]
    fn test_left_edge_resistance() {
        let mut engine = GalleryEngine::new(GalleryConfig::new(5), 300.0).unwrap();
        engine.pointer_down(0.0).unwrap();
        let state = engine.pointer_move(250.0);

        assert!(approx(state.offset_px, 50.0));
        assert_eq!(state.current_slide, 0);
    }

    #[test]
    fn test_small_moves_do_not_commit() {
        let mut engine = middle_of_five();
        engine.pointer_down(100.0).unwrap();
        let state = engine.pointer_move(115.0);
        assert_eq!(state.current_slide, 2);
        assert!(approx(state.offset_px, -585.0));

        let state = engine.pointer_up();
        assert!(approx(state.offset_px, -600.0));
    }

    #[test]
    fn test_single_commit_per_gesture() {
        let mut engine = middle_of_five();
        engine.pointer_down(100.0).unwrap();
        for x in [150.0, 40.0, 200.0, -300.0, 400.0, 130.0] {
            let state = engine.pointer_move(x);
            let moved = state.current_slide as i64 - 2;
            assert!(moved.abs() <= 1, "moved {} slides at x={}", moved, x);
        }
        assert_eq!(engine.current_slide(), 1);
    }

    #[test]
    fn test_commit_blocked_at_edge_allows_opposite_direction() {
        let mut engine = GalleryEngine::new(GalleryConfig::new(3), 300.0).unwrap();
        engine.pointer_down(100.0).unwrap();
        engine.pointer_move(160.0);
        assert_eq!(engine.current_slide(), 0);
        assert!(!engine.drag_session().unwrap().slide_changed);

        engine.pointer_move(40.0);
        assert_eq!(engine.current_slide(), 1);
    }

    #[test]
    fn test_last_slide_does_not_advance() {
        let mut engine =
            GalleryEngine::new(GalleryConfig::new(3).with_initial_slide(2), 300.0).unwrap();
        engine.pointer_down(200.0).unwrap();
        let state = engine.pointer_move(100.0);
        assert_eq!(state.current_slide, 2);
        // raw -700, lower bound -600 + (-20)
        assert!(approx(state.offset_px, -620.0));
    }

    #[test]
    fn test_edge_resistance_rate() {
        let mut engine = GalleryEngine::new(GalleryConfig::new(5), 300.0).unwrap();
        engine.pointer_down(0.0).unwrap();
        let a = engine.pointer_move(100.0).offset_px;
        let b = engine.pointer_move(150.0).offset_px;
        assert!(b > a);
        assert!(approx(b - a, 50.0 / EDGE_RESISTANCE));
    }

    #[test]
    fn test_edge_resistance_rate_at_last_slide() {
        let mut engine = middle_of_five();
        engine.go_to(4);
        engine.pointer_down(500.0).unwrap();
        let a = engine.pointer_move(400.0).offset_px;
        let b = engine.pointer_move(340.0).offset_px;
        assert!(a < engine.geometry().maximum_offset());
        assert!(b < a);
        assert!(approx(a - b, 60.0 / EDGE_RESISTANCE));
    }

    #[test]
    fn test_release_on_first_slide_has_positive_zero_offset() {
        let mut engine = middle_of_five();
        engine.go_to(0);
        engine.pointer_down(100.0).unwrap();
        engine.pointer_move(130.0);
        let state = engine.pointer_up();
        assert!(state.offset_px.is_sign_positive());
    }

    #[test]
    fn test_settle_is_idempotent() {
        let mut engine = middle_of_five();
        engine.pointer_down(100.0).unwrap();
        engine.pointer_move(10.0);
        let first = engine.pointer_up();
        let second = engine.settle();
        let third = engine.settle();
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn test_cancel_behaves_like_up() {
        let mut up = middle_of_five();
        let mut cancel = middle_of_five();
        for engine in [&mut up, &mut cancel] {
            engine.pointer_down(100.0).unwrap();
            engine.pointer_move(50.0);
        }
        assert_eq!(up.pointer_up(), cancel.pointer_cancel());
    }

    #[test]
    fn test_second_pointer_down_is_rejected() {
        let mut engine = middle_of_five();
        engine.pointer_down(100.0).unwrap();
        engine.pointer_move(130.0);

        assert!(matches!(engine.pointer_down(500.0), Err(Error::SessionConflict)));
        let session = engine.drag_session().unwrap();
        assert!(approx(session.anchor_pointer_x, 100.0));
        assert!(approx(session.anchor_offset, -600.0));
    }

    #[test]
    fn test_events_without_session_are_noops() {
        let mut engine = middle_of_five();
        let before = engine.render_state();
        assert_eq!(engine.pointer_move(400.0), before);
        assert_eq!(engine.pointer_up(), before);
        assert_eq!(engine.pointer_cancel(), before);
    }

    #[test]
    fn test_handle_dispatches() {
        let mut engine = middle_of_five();
        engine.handle(PointerEvent::down(100.0)).unwrap();
        engine.handle(PointerEvent::moved(60.0)).unwrap();
        let state = engine.handle(PointerEvent::cancel(60.0)).unwrap();
        assert_eq!(state.current_slide, 3);
        assert!(approx(state.offset_px, -900.0));
    }

    #[test]
    fn test_resize_preserves_slide() {
        let mut engine = middle_of_five();
        let state = engine.resize(400.0).unwrap();
        assert_eq!(state.current_slide, 2);
        assert!(approx(state.offset_px, -800.0));
        assert!(!state.transition_enabled);
        assert!(approx(engine.geometry().maximum_offset(), -1600.0));
    }

    #[test]
    fn test_resize_with_margin() {
        let mut engine = GalleryEngine::new(
            GalleryConfig::new(4).with_margin(10.0).with_initial_slide(3),
            200.0,
        )
        .unwrap();
        assert!(approx(engine.offset(), -630.0));
        let state = engine.resize(300.0).unwrap();
        assert!(approx(state.offset_px, -930.0));
    }

    #[test]
    fn test_invalid_resize_keeps_state() {
        let mut engine = middle_of_five();
        let before = engine.render_state();
        assert!(matches!(
            engine.resize(0.0),
            Err(Error::GeometryUnavailable { .. })
        ));
        assert_eq!(engine.render_state(), before);
        assert!(approx(engine.geometry().viewport_width(), 300.0));
    }

    #[test]
    fn test_resize_during_drag_reanchors() {
        let mut engine = middle_of_five();
        engine.pointer_down(100.0).unwrap();
        engine.pointer_move(110.0);
        engine.resize(600.0).unwrap();
        assert!(engine.is_dragging());
        assert!(approx(engine.drag_session().unwrap().anchor_offset, -1200.0));

        let state = engine.pointer_move(110.0);
        assert!(approx(state.offset_px, -1190.0));
    }

    #[test]
    fn test_go_to() {
        let mut engine = middle_of_five();
        let state = engine.go_to(4);
        assert_eq!(state.current_slide, 4);
        assert!(approx(state.offset_px, -1200.0));
        assert!(state.transition_enabled);

        let before = engine.render_state();
        assert_eq!(engine.go_to(5), before);

        engine.pointer_down(0.0).unwrap();
        let state = engine.go_to(0);
        assert_eq!(state.current_slide, 4);
    }

    #[test]
    fn test_invalid_initial_slide() {
        assert!(matches!(
            GalleryEngine::new(GalleryConfig::new(2).with_initial_slide(2), 300.0),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_unlaid_out_container() {
        assert!(matches!(
            GalleryEngine::new(GalleryConfig::new(3), 0.0),
            Err(Error::GeometryUnavailable { .. })
        ));
    }

    #[test]
    fn test_single_slide_gallery() {
        let mut engine = GalleryEngine::new(GalleryConfig::new(1), 300.0).unwrap();
        assert!(approx(engine.offset(), 0.0));
        engine.pointer_down(0.0).unwrap();
        let state = engine.pointer_move(-100.0);
        assert_eq!(state.current_slide, 0);
        assert!(approx(state.offset_px, -20.0));
        let state = engine.pointer_up();
        assert!(approx(state.offset_px, 0.0));
    }
}
