//! Screen regions for the demo: a bordered list pane over a one-line
//! status bar.
//!
//! The list's right border doubles as the scrollbar track the tick marks
//! are drawn on, so the layout reports the inner viewport and that column
//! alongside the outer pane.

use ratatui::layout::{Constraint, Layout, Margin, Rect};

pub struct AppLayout {
    /// Outer list pane, border included.
    pub list_pane: Rect,
    /// Rows are drawn here; this is what the scroller sees as its viewport.
    pub viewport: Rect,
    /// Column of the right border, or `None` when the pane has no width.
    pub track_column: Option<u16>,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn from_area(area: Rect) -> Self {
        let [list_pane, status_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(area);
        let viewport = list_pane.inner(Margin::new(1, 1));
        let track_column = list_pane.right().checked_sub(1);

        Self {
            list_pane,
            viewport,
            track_column,
            status_area,
        }
    }
}
