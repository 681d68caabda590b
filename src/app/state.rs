//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use milestone_scroller::MilestoneScroller;

use super::demo_grid::{DemoGrid, DemoRow};

/// Top-level application state.
pub struct AppState {
    /// The list and its on-screen placement.
    pub grid: DemoGrid,
    /// Scroll position indicator attached to `grid`.
    pub scroller: MilestoneScroller<DemoRow>,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(grid: DemoGrid, scroller: MilestoneScroller<DemoRow>) -> Self {
        Self {
            grid,
            scroller,
            should_quit: false,
        }
    }

    /// Status-bar position readout.
    pub fn status_text(&self) -> String {
        let total = self.grid.rows.len();
        let first = if total == 0 { 0 } else { self.grid.offset + 1 };
        format!(
            "row {first}/{total} | {} milestones | ↑↓ PgUp PgDn Home End, wheel: scroll | q: quit",
            self.scroller.milestones().len()
        )
    }
}
