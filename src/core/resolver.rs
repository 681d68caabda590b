//! Scroll resolution — which milestone to name, and where to draw things.
//!
//! The margins below keep the label and the tick marks clear of the
//! scrollbar thumb at both ends of the track.  They are fixed design values.

use super::geometry::ViewportGeometry;
use super::milestone::Milestone;

/// Label travel starts this far below the viewport top.
const LABEL_TOP_MARGIN: f64 = 40.0;
/// Vertical space the label does not travel through (top + bottom).
const LABEL_TRACK_RESERVE: f64 = 120.0;
/// Label sits this far left of the scrollbar.
const LABEL_RIGHT_GAP: f64 = 20.0;
/// Label position before the first resolve of a session.
const LABEL_START_MARGIN: f64 = 20.0;
/// Vertical space tick marks do not occupy (top + bottom).
const TICK_TRACK_RESERVE: f64 = 60.0;
/// Tick marks start this far below the viewport top.
const TICK_TOP_MARGIN: f64 = 20.0;

/// A point in window coordinates, measured from the top and right edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub top: f64,
    pub right: f64,
}

/// Pick the milestone to display for `scroll_top`.
///
/// At (or past) the bottom the last milestone wins.  Otherwise the first
/// milestone at or beyond the scrolled fraction is a candidate; it is only
/// shown once its row has reached the viewport's vertical midpoint, and until
/// then its predecessor is shown instead.
pub fn resolve<'m>(
    milestones: &'m [Milestone],
    geometry: &ViewportGeometry,
    scroll_top: f64,
) -> Option<&'m Milestone> {
    let last = milestones.last()?;
    let percent = geometry.percent_scrolled(scroll_top);
    if percent >= 1.0 {
        return Some(last);
    }

    let midpoint = geometry.viewport_height * 0.5 + scroll_top;
    let candidate = milestones
        .iter()
        .position(|m| m.fraction >= percent)
        .unwrap_or(milestones.len() - 1);

    let m = &milestones[candidate];
    if is_in_view(m, geometry.row_height, midpoint) {
        Some(m)
    } else {
        Some(&milestones[candidate.saturating_sub(1)])
    }
}

fn is_in_view(m: &Milestone, row_height: f64, midpoint: f64) -> bool {
    row_height * (m.row_index + 1) as f64 <= midpoint
}

/// Where the label sits for a given scroll fraction.
pub fn position_label(geometry: &ViewportGeometry, percent: f64) -> Position {
    Position {
        top: geometry.viewport_top_offset
            + LABEL_TOP_MARGIN
            + (geometry.viewport_height - LABEL_TRACK_RESERVE) * percent
            - geometry.indicator_height / 2.0,
        right: geometry.viewport_right() + LABEL_RIGHT_GAP,
    }
}

/// Where the label is placed when a session starts.
pub fn initial_label_position(geometry: &ViewportGeometry) -> Position {
    Position {
        top: geometry.viewport_top_offset + LABEL_START_MARGIN - geometry.indicator_height / 2.0,
        right: geometry.viewport_right() + LABEL_RIGHT_GAP,
    }
}

/// One tick mark per milestone, top to bottom.
pub fn position_ticks<'a>(
    milestones: &'a [Milestone],
    geometry: &'a ViewportGeometry,
    window_width: f64,
) -> impl Iterator<Item = Position> + Clone + 'a {
    let right = geometry.right_inset_in(window_width);
    milestones.iter().map(move |m| Position {
        top: geometry.viewport_top_offset
            + m.fraction * (geometry.viewport_height - TICK_TRACK_RESERVE)
            + TICK_TOP_MARGIN,
        right,
    })
}
