#![forbid(unsafe_code)]

//! Geometric primitives in CSS pixel space.
//!
//! Uses viewport coordinates (origin at the top-left of the visible area,
//! y growing downward) with `f64` components, matching what the host reads
//! from selection bounding boxes.

/// An axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl RectF {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge (alias for x).
    #[inline]
    #[must_use]
    pub const fn left(&self) -> f64 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    #[must_use]
    pub const fn top(&self) -> f64 {
        self.y
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal midpoint.
    #[inline]
    #[must_use]
    pub const fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical midpoint.
    #[inline]
    #[must_use]
    pub const fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// A collapsed selection reports a zero-size rect; such an anchor must
    /// hide the panel instead of positioning it.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// A panel size as measured by the host after mounting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeF {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl SizeF {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The visible viewport plus the document scroll offsets.
///
/// Placement output is in document coordinates, so the scroll offsets are
/// part of the geometry rather than host bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Visible width in pixels.
    pub width: f64,
    /// Visible height in pixels.
    pub height: f64,
    /// Horizontal document scroll offset.
    pub scroll_x: f64,
    /// Vertical document scroll offset.
    pub scroll_y: f64,
}

impl Viewport {
    /// Create a viewport with zero scroll offsets.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    /// Create a viewport with explicit scroll offsets.
    #[inline]
    #[must_use]
    pub const fn with_scroll(width: f64, height: f64, scroll_x: f64, scroll_y: f64) -> Self {
        Self {
            width,
            height,
            scroll_x,
            scroll_y,
        }
    }
}
