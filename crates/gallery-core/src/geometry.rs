//! Width-dependent track geometry
//!
//! All offsets are negative translations of the track: slide 0 sits at `0.0`,
//! the last slide at [`Geometry::maximum_offset`].

use crate::error::{Error, Result};

/// Divisor applied to the pointer delta when dragging past either edge
pub const EDGE_RESISTANCE: f64 = 5.0;

/// Pointer travel (px) from the drag anchor that commits a slide change
pub const SLIDE_COMMIT_THRESHOLD: f64 = 20.0;

/// Validated slide layout for one viewport width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    slide_count: usize,
    margin: f64,
    viewport_width: f64,
}

impl Geometry {
    /// Build geometry, rejecting layouts that would produce degenerate offsets
    pub fn new(slide_count: usize, margin: f64, viewport_width: f64) -> Result<Self> {
        if slide_count < 1 {
            return Err(Error::InvalidConfiguration(
                "slide count must be at least 1".to_string(),
            ));
        }
        if !margin.is_finite() || margin < 0.0 {
            return Err(Error::InvalidConfiguration(format!(
                "margin must be a non-negative number, got {}",
                margin
            )));
        }
        check_viewport_width(viewport_width)?;

        Ok(Self {
            slide_count,
            margin,
            viewport_width,
        })
    }

    /// Same slides and margin laid out for a new container width
    pub fn with_viewport_width(&self, viewport_width: f64) -> Result<Self> {
        check_viewport_width(viewport_width)?;
        Ok(Self {
            viewport_width,
            ..*self
        })
    }

    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[inline]
    pub fn margin(&self) -> f64 {
        self.margin
    }

    #[inline]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Distance between the left edges of two neighbouring slides
    #[inline]
    pub fn stride(&self) -> f64 {
        self.viewport_width + self.margin
    }

    /// Total width of the scrolling track
    pub fn track_width(&self) -> f64 {
        self.slide_count as f64 * self.stride()
    }

    /// Offset that shows the last slide
    pub fn maximum_offset(&self) -> f64 {
        0.0 - (self.slide_count - 1) as f64 * self.stride()
    }

    /// Offset at which `slide` is exactly in view
    ///
    /// Indices past the end are treated as the last slide.
    pub fn settled_offset(&self, slide: usize) -> f64 {
        let slide = slide.min(self.slide_count - 1);
        // Subtract from zero so the first slide yields +0.0, not -0.0.
        0.0 - slide as f64 * self.stride()
    }

    /// Live drag offset with rubber-band resistance past either edge
    ///
    /// Inside the track the result follows `anchor_offset + delta` exactly;
    /// beyond an edge the overshoot is scaled down by [`EDGE_RESISTANCE`].
    pub fn resist(&self, anchor_offset: f64, delta: f64) -> f64 {
        let easing = delta / EDGE_RESISTANCE;
        let raw = anchor_offset + delta;
        raw.min(easing).max(self.maximum_offset() + easing)
    }
}

fn check_viewport_width(width: f64) -> Result<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(Error::GeometryUnavailable { width })
    }
}
