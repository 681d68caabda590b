//! Milestone overlay — the floating label and the scrollbar tick marks,
//! converted from the pixel model back to terminal cells.
//!
//! Positions are measured from the top and right edges of the window, so a
//! cell's column is `screen.width - right / COL_PX`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use milestone_scroller::{Overlay, Position};

use crate::app::demo_grid::{COL_PX, ROW_PX};

use super::theme::Theme;

const TICK: &str = "◆";

/// Draws an [`Overlay`].  Render it over the full terminal area.
pub struct OverlayWidget<'a> {
    pub overlay: &'a Overlay,
    /// Scrollbar column; ticks snap onto it so rounding never lands them
    /// inside the list.
    pub track_column: Option<u16>,
}

/// Cell for a pixel position, or `None` if it falls outside `area`.
fn to_cell(position: Position, area: Rect) -> Option<(u16, u16)> {
    if !position.top.is_finite() || !position.right.is_finite() {
        return None;
    }
    let y = (position.top / ROW_PX).round();
    let cols_from_right = (position.right / COL_PX).floor();
    let x = f64::from(area.width) - cols_from_right;
    if y < 0.0 || x < 0.0 || y >= f64::from(area.height) || x > f64::from(area.width) {
        return None;
    }
    Some((area.x + x as u16, area.y + y as u16))
}

impl Widget for OverlayWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for tick in self.overlay.ticks() {
            if let Some((x, y)) = to_cell(*tick, area) {
                let x = self.track_column.unwrap_or(x);
                if x < area.right() {
                    buf.set_string(x, y, TICK, Theme::tick_style());
                }
            }
        }

        let Some(label) = self.overlay.label().filter(|l| l.visible) else {
            return;
        };
        if label.text.is_empty() {
            return;
        }
        let Some((right_edge, y)) = to_cell(label.position, area) else {
            return;
        };

        let text = format!(" {} ", label.text);
        let width = (text.chars().count() as u16).min(right_edge.saturating_sub(area.x));
        if width == 0 {
            return;
        }
        let x = right_edge - width;
        let line = Line::from(Span::styled(text, Theme::milestone_label_style()));
        buf.set_line(x, y, &line, width);
    }
}
