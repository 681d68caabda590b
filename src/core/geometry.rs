//! Viewport metrics and the frozen per-session snapshot built from them.

/// Row height used when the viewport cannot measure one.
pub const DEFAULT_ROW_HEIGHT: f64 = 30.0;

/// Horizontal gap between the viewport's right edge and the tick marks.
pub const SCROLLBAR_INSET: f64 = 3.0;

/// Position of the scroll container relative to the document.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

/// The scroll container the overlay is attached to.
pub trait Viewport {
    fn scroll_top(&self) -> f64;
    fn height(&self) -> f64;
    fn width(&self) -> f64;
    fn offset(&self) -> Offset;
    /// Total scrollable content height.
    fn scrollable_height(&self) -> f64;
    /// Height of one rendered row, if any row is rendered right now.
    fn row_height(&self) -> Option<f64>;
}

/// The top-level window the overlay is positioned in.
pub trait Window {
    fn width(&self) -> f64;
}

/// Viewport metrics frozen at the start of a scroll session.
///
/// Every position computed during a session comes from this snapshot, even if
/// the list resizes underneath it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    pub viewport_height: f64,
    pub viewport_width: f64,
    pub viewport_top_offset: f64,
    pub viewport_left_offset: f64,
    pub scrollable_height: f64,
    pub row_height: f64,
    /// Measured height of the label, used to center it vertically.
    pub indicator_height: f64,
    pub window_width: f64,
}

impl ViewportGeometry {
    /// Snapshot the viewport.  A missing, zero or non-finite row height is
    /// replaced with `default_row_height`.
    pub fn capture<V, W>(
        viewport: &V,
        window: &W,
        indicator_height: f64,
        default_row_height: f64,
    ) -> Self
    where
        V: Viewport + ?Sized,
        W: Window + ?Sized,
    {
        let offset = viewport.offset();
        let row_height = viewport
            .row_height()
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(default_row_height);

        Self {
            viewport_height: viewport.height(),
            viewport_width: viewport.width(),
            viewport_top_offset: offset.top,
            viewport_left_offset: offset.left,
            scrollable_height: viewport.scrollable_height(),
            row_height,
            indicator_height,
            window_width: window.width(),
        }
    }

    /// No scrolling is possible: the content fits in the viewport.
    pub fn is_degenerate(&self) -> bool {
        self.scrollable_height <= self.viewport_height
    }

    /// How far the content can scroll, in pixels.
    pub fn scroll_range(&self) -> f64 {
        self.scrollable_height - self.viewport_height
    }

    /// Fraction of the scroll range covered by `scroll_top`.  Can exceed `1.0`
    /// on overscroll.  Degenerate geometry reports `0.0`.
    pub fn percent_scrolled(&self, scroll_top: f64) -> f64 {
        let range = self.scroll_range();
        if range <= 0.0 {
            return 0.0;
        }
        scroll_top / range
    }

    /// Distance from the viewport's right edge to the window's right edge,
    /// plus the scrollbar inset.
    pub fn viewport_right(&self) -> f64 {
        self.right_inset_in(self.window_width)
    }

    /// [`viewport_right`](Self::viewport_right) for a window `window_width` wide.
    pub fn right_inset_in(&self, window_width: f64) -> f64 {
        window_width - (self.viewport_left_offset + self.viewport_width) + SCROLLBAR_INSET
    }
}
