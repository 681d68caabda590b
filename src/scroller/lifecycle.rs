//! Scroll session lifecycle.
//!
//! ```text
//!            Scroll (starts session)
//!   Idle  ─────────────────────────────▶  Active ──┐ Scroll / Pulse
//!    ▲                                      │   ◀──┘ (re-arm idle timer)
//!    └──── idle timeout / reset ────────────┘
//! ```
//!
//! Geometry and milestones are captured once when a session starts and
//! discarded when it ends.  Both event sources go through [`dispatch`], and
//! each signal re-arms a single idle timer.
//!
//! [`dispatch`]: MilestoneScroller::dispatch

use std::time::Instant;

use crate::core::{
    geometry::ViewportGeometry,
    milestone::{self, Milestone},
    resolver,
};

use super::error::ScrollerError;
use super::host::{Grid, GridDataSource, Viewport};
use super::options::MilestoneOptions;
use super::overlay::Overlay;
use super::timer::IdleTimer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// No session: overlay hidden, no milestones loaded.
    #[default]
    Idle,
    /// Geometry and milestones loaded; scrolls refresh the label.
    Active,
}

/// The two scroll event sources, unified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollSignal {
    /// Continuous scroll position change.
    Scroll { scroll_top: f64 },
    /// A discrete wheel notch.  Only keeps the overlay alive.
    Pulse,
}

/// Scroll position indicator attached to one grid.
pub struct MilestoneScroller<R> {
    options: MilestoneOptions<R>,
    state: LifecycleState,
    attached: bool,
    geometry: Option<ViewportGeometry>,
    milestones: Vec<Milestone>,
    overlay: Overlay,
    idle: IdleTimer,
    sessions_started: u64,
}

impl<R> MilestoneScroller<R> {
    pub fn new(options: MilestoneOptions<R>) -> Self {
        let idle = IdleTimer::new(options.idle_delay);
        Self {
            options,
            state: LifecycleState::Idle,
            attached: false,
            geometry: None,
            milestones: Vec::new(),
            overlay: Overlay::default(),
            idle,
            sessions_started: 0,
        }
    }

    /// Wire the scroller to `grid` and create its label.
    pub fn init<G>(&mut self, grid: &G) -> Result<&mut Self, ScrollerError>
    where
        G: Grid,
        G::Data: GridDataSource<Row = R>,
    {
        if self.attached {
            return Err(ScrollerError::AlreadyAttached);
        }
        let viewport = grid.viewport();
        let (height, width) = (viewport.height(), viewport.width());
        let usable = |v: f64| v.is_finite() && v >= 0.0;
        if !usable(height) || !usable(width) {
            return Err(ScrollerError::InvalidViewport { height, width });
        }

        self.overlay.create_label(self.options.label_height);
        self.attached = true;
        tracing::debug!(height, width, "milestone scroller attached");
        Ok(self)
    }

    /// Feed one scroll event.  Ignored while detached.
    pub fn dispatch<G>(&mut self, grid: &G, signal: ScrollSignal, now: Instant)
    where
        G: Grid,
        G::Data: GridDataSource<Row = R>,
    {
        if !self.attached {
            tracing::trace!(?signal, "scroll signal while detached");
            return;
        }

        match signal {
            ScrollSignal::Scroll { scroll_top } => {
                if self.state == LifecycleState::Idle {
                    self.start_session(grid);
                }
                self.refresh_label(scroll_top);
            }
            ScrollSignal::Pulse => {}
        }

        self.idle.reschedule(now);
    }

    /// Scroll event reading the position straight from the grid's viewport.
    pub fn on_scroll<G>(&mut self, grid: &G, now: Instant)
    where
        G: Grid,
        G::Data: GridDataSource<Row = R>,
    {
        let scroll_top = grid.viewport().scroll_top();
        self.dispatch(grid, ScrollSignal::Scroll { scroll_top }, now);
    }

    pub fn on_pulse<G>(&mut self, grid: &G, now: Instant)
    where
        G: Grid,
        G::Data: GridDataSource<Row = R>,
    {
        self.dispatch(grid, ScrollSignal::Pulse, now);
    }

    /// Run the idle timeout if it is due.  Returns `true` if it ran.
    pub fn poll_idle(&mut self, now: Instant) -> bool {
        if !self.idle.fire_if_due(now) {
            return false;
        }
        let was_active = self.state == LifecycleState::Active;
        self.end_session();
        if was_active {
            tracing::debug!("scroll idle, overlay hidden");
        }
        true
    }

    /// When the pending idle timeout is due, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.idle.deadline()
    }

    /// Drop the current session right away, e.g. after the container
    /// resized.  The next scroll starts a fresh one.
    pub fn resize(&mut self) {
        self.idle.cancel();
        self.end_session();
        tracing::debug!("milestone scroller reset");
    }

    /// Detach from the grid and remove the label.  Safe to call repeatedly.
    pub fn destroy(&mut self) {
        self.idle.cancel();
        self.end_session();
        self.overlay.remove_label();
        if std::mem::replace(&mut self.attached, false) {
            tracing::debug!("milestone scroller detached");
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn geometry(&self) -> Option<&ViewportGeometry> {
        self.geometry.as_ref()
    }

    /// Number of sessions started since creation.
    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    fn start_session<G>(&mut self, grid: &G)
    where
        G: Grid,
        G::Data: GridDataSource<Row = R>,
    {
        let geometry = ViewportGeometry::capture(
            grid.viewport(),
            grid.window(),
            self.overlay.label_height(),
            self.options.default_row_height,
        );
        self.state = LifecycleState::Active;
        self.sessions_started += 1;

        if geometry.is_degenerate() {
            tracing::debug!(
                scrollable = geometry.scrollable_height,
                viewport = geometry.viewport_height,
                "nothing to scroll, overlay suppressed"
            );
            self.milestones.clear();
            self.geometry = Some(geometry);
            return;
        }

        let test = &self.options.milestone_test;
        self.milestones = milestone::build(grid.data(), |row| test(row), &self.options.text_property);
        self.overlay.show_ticks(resolver::position_ticks(
            &self.milestones,
            &geometry,
            geometry.window_width,
        ));
        self.overlay.show_label(resolver::initial_label_position(&geometry));
        self.geometry = Some(geometry);

        tracing::debug!(milestones = self.milestones.len(), "scroll session started");
    }

    fn refresh_label(&mut self, scroll_top: f64) {
        let Some(geometry) = self.geometry.as_ref() else {
            return;
        };
        if geometry.is_degenerate() {
            return;
        }
        let Some(milestone) = resolver::resolve(&self.milestones, geometry, scroll_top) else {
            return;
        };
        let percent = geometry.percent_scrolled(scroll_top);
        self.overlay
            .update_label(&milestone.text, resolver::position_label(geometry, percent));
    }

    fn end_session(&mut self) {
        self.overlay.clear_label();
        self.overlay.remove_ticks();
        self.milestones.clear();
        self.geometry = None;
        self.state = LifecycleState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::time::Duration;

    use super::*;
    use crate::core::geometry::{Offset, Window};

    type TestRow = HashMap<String, String>;

    struct TestGrid {
        rows: Vec<TestRow>,
        scroll_top: Cell<f64>,
        height: f64,
        scrollable: f64,
    }

    impl TestGrid {
        /// `total` rows, every tenth one a group header, 30px rows.
        fn new(total: usize, height: f64) -> Self {
            let rows = (0..total)
                .map(|i| {
                    let mut row = HashMap::new();
                    row.insert("name".to_string(), format!("row {i}"));
                    if i % 10 == 9 {
                        row.insert("group".to_string(), "yes".to_string());
                    }
                    row
                })
                .collect();
            Self {
                rows,
                scroll_top: Cell::new(0.0),
                height,
                scrollable: total as f64 * 30.0,
            }
        }

        fn scroll_to(&self, top: f64) -> ScrollSignal {
            self.scroll_top.set(top);
            ScrollSignal::Scroll { scroll_top: top }
        }
    }

    impl Viewport for TestGrid {
        fn scroll_top(&self) -> f64 {
            self.scroll_top.get()
        }
        fn height(&self) -> f64 {
            self.height
        }
        fn width(&self) -> f64 {
            300.0
        }
        fn offset(&self) -> Offset {
            Offset { top: 0.0, left: 0.0 }
        }
        fn scrollable_height(&self) -> f64 {
            self.scrollable
        }
        fn row_height(&self) -> Option<f64> {
            Some(30.0)
        }
    }

    impl Window for TestGrid {
        fn width(&self) -> f64 {
            400.0
        }
    }

    impl Grid for TestGrid {
        type Data = Vec<TestRow>;
        type Viewport = Self;
        type Window = Self;

        fn data(&self) -> &Vec<TestRow> {
            &self.rows
        }
        fn viewport(&self) -> &Self {
            self
        }
        fn window(&self) -> &Self {
            self
        }
    }

    const QUIET: Duration = Duration::from_millis(400);

    fn scroller(grid: &TestGrid) -> MilestoneScroller<TestRow> {
        let options = MilestoneOptions::default()
            .milestone_test(|row: &TestRow| row.contains_key("group"))
            .idle_delay(QUIET);
        let mut scroller = MilestoneScroller::new(options);
        scroller.init(grid).expect("valid grid");
        scroller
    }

    fn label_text(scroller: &MilestoneScroller<TestRow>) -> Option<&str> {
        scroller.overlay().label().map(|l| l.text.as_str())
    }

    #[test]
    fn first_scroll_starts_a_session() {
        let grid = TestGrid::new(30, 200.0);
        let mut s = scroller(&grid);
        assert_eq!(s.state(), LifecycleState::Idle);
        assert!(!s.overlay().is_visible());

        s.dispatch(&grid, grid.scroll_to(0.0), Instant::now());

        assert_eq!(s.state(), LifecycleState::Active);
        assert_eq!(s.milestones().len(), 3);
        assert_eq!(s.overlay().ticks().len(), 3);
        assert!(s.overlay().is_label_visible());
        assert_eq!(label_text(&s), Some("row 9"));
    }

    #[test]
    fn scrolling_updates_label_within_a_session() {
        let grid = TestGrid::new(30, 200.0);
        let mut s = scroller(&grid);
        let t0 = Instant::now();

        s.dispatch(&grid, grid.scroll_to(0.0), t0);
        s.dispatch(&grid, grid.scroll_to(500.0), t0 + Duration::from_millis(50));
        assert_eq!(label_text(&s), Some("row 19"));

        s.dispatch(&grid, grid.scroll_to(700.0), t0 + Duration::from_millis(100));
        assert_eq!(label_text(&s), Some("row 29"));
        assert_eq!(s.sessions_started(), 1);
    }

    #[test]
    fn pulse_only_extends_the_session() {
        let grid = TestGrid::new(30, 200.0);
        let mut s = scroller(&grid);
        let t0 = Instant::now();

        s.dispatch(&grid, ScrollSignal::Pulse, t0);
        assert_eq!(s.state(), LifecycleState::Idle);
        assert!(!s.overlay().is_visible());

        s.dispatch(&grid, grid.scroll_to(0.0), t0);
        let label = s.overlay().label().cloned();
        s.on_pulse(&grid, t0 + Duration::from_millis(300));
        assert_eq!(s.overlay().label().cloned(), label);

        assert!(!s.poll_idle(t0 + QUIET));
        assert!(s.poll_idle(t0 + Duration::from_millis(700)));
        assert_eq!(s.state(), LifecycleState::Idle);
    }

    #[test]
    fn bursts_coalesce_into_one_timeout() {
        let grid = TestGrid::new(30, 200.0);
        let mut s = scroller(&grid);
        let t0 = Instant::now();
        let step = Duration::from_millis(100);

        let mut fired = 0;
        for n in 0..10u32 {
            let now = t0 + step * n;
            s.dispatch(&grid, grid.scroll_to(f64::from(n) * 10.0), now);
            if s.poll_idle(now) {
                fired += 1;
            }
        }
        let last = t0 + step * 9;
        assert_eq!(s.next_deadline(), Some(last + QUIET));

        for ms in (0..=1000).step_by(50) {
            if s.poll_idle(last + Duration::from_millis(ms)) {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
        assert_eq!(s.sessions_started(), 1);
        assert!(s.milestones().is_empty());
        assert!(!s.overlay().is_visible());
    }

    #[test]
    fn reset_hides_synchronously_and_next_scroll_rebuilds() {
        let mut grid = TestGrid::new(30, 200.0);
        let mut s = scroller(&grid);
        let t0 = Instant::now();

        s.dispatch(&grid, grid.scroll_to(100.0), t0);
        assert!(s.overlay().is_visible());

        s.resize();
        assert_eq!(s.state(), LifecycleState::Idle);
        assert!(!s.overlay().is_visible());
        assert!(s.milestones().is_empty());
        assert_eq!(s.next_deadline(), None);
        assert!(!s.poll_idle(t0 + QUIET * 2));

        grid = TestGrid::new(40, 200.0);
        s.dispatch(&grid, grid.scroll_to(0.0), t0 + QUIET * 3);
        assert_eq!(s.sessions_started(), 2);
        assert_eq!(s.milestones().len(), 4);
        assert!(s.overlay().is_visible());
    }

    #[test]
    fn content_that_fits_never_shows_the_overlay() {
        // 10 rows * 30px == 300px viewport
        let grid = TestGrid::new(10, 300.0);
        let mut s = scroller(&grid);
        let t0 = Instant::now();

        for n in 0..5u32 {
            s.dispatch(&grid, grid.scroll_to(0.0), t0 + Duration::from_millis(u64::from(n) * 50));
            s.dispatch(&grid, ScrollSignal::Pulse, t0 + Duration::from_millis(u64::from(n) * 50));
            assert!(!s.overlay().is_visible());
        }
        assert_eq!(s.state(), LifecycleState::Active);
        assert_eq!(s.sessions_started(), 1);
        assert!(s.milestones().is_empty());
    }

    #[test]
    fn session_geometry_is_frozen() {
        let mut grid = TestGrid::new(30, 200.0);
        let mut s = scroller(&grid);
        let t0 = Instant::now();

        s.dispatch(&grid, grid.scroll_to(0.0), t0);
        let captured = *s.geometry().expect("active session");

        grid.scrollable = 5000.0;
        s.dispatch(&grid, grid.scroll_to(200.0), t0 + Duration::from_millis(10));
        assert_eq!(s.geometry(), Some(&captured));
    }

    #[test]
    fn destroy_is_idempotent_and_detaches() {
        let grid = TestGrid::new(30, 200.0);
        let mut never_used = scroller(&grid);
        never_used.destroy();
        never_used.destroy();
        assert!(!never_used.is_attached());

        let mut s = scroller(&grid);
        let t0 = Instant::now();
        s.dispatch(&grid, grid.scroll_to(100.0), t0);
        s.destroy();
        assert!(s.overlay().label().is_none());
        assert_eq!(s.next_deadline(), None);

        s.dispatch(&grid, grid.scroll_to(200.0), t0 + QUIET);
        assert_eq!(s.state(), LifecycleState::Idle);
        assert!(!s.overlay().is_visible());
    }

    #[test]
    fn init_rejects_double_attach_and_bad_viewports() {
        let grid = TestGrid::new(30, 200.0);
        let mut s = scroller(&grid);
        assert_eq!(s.init(&grid).err(), Some(ScrollerError::AlreadyAttached));

        let broken = TestGrid::new(30, f64::NAN);
        let mut fresh: MilestoneScroller<TestRow> = MilestoneScroller::new(MilestoneOptions::default());
        assert!(matches!(
            fresh.init(&broken),
            Err(ScrollerError::InvalidViewport { .. })
        ));
        assert!(!fresh.is_attached());
    }

    #[test]
    fn session_without_milestones_does_not_show_previous_label() {
        let mut grid = TestGrid::new(30, 200.0);
        let mut s = scroller(&grid);
        let t0 = Instant::now();

        s.dispatch(&grid, grid.scroll_to(0.0), t0);
        assert_eq!(label_text(&s), Some("row 9"));
        assert!(s.poll_idle(t0 + Duration::from_secs(1)));
        assert_eq!(label_text(&s), Some(""));

        // Same list, but the group markers are gone.
        for row in &mut grid.rows {
            row.remove("group");
        }
        s.dispatch(&grid, grid.scroll_to(100.0), t0 + Duration::from_secs(2));
        assert_eq!(s.sessions_started(), 2);
        assert!(s.milestones().is_empty());
        assert!(s.overlay().ticks().is_empty());
        let label = s.overlay().label().expect("attached");
        assert!(!(label.visible && !label.text.is_empty()));
    }

    #[test]
    fn reset_forgets_the_label_text() {
        let grid = TestGrid::new(30, 200.0);
        let mut s = scroller(&grid);
        s.dispatch(&grid, grid.scroll_to(700.0), Instant::now());
        assert_eq!(label_text(&s), Some("row 29"));

        s.resize();
        assert_eq!(label_text(&s), Some(""));
        assert!(!s.overlay().is_label_visible());
    }

    #[test]
    fn no_milestones_leaves_label_text_untouched() {
        let grid = TestGrid::new(30, 200.0);
        let mut s: MilestoneScroller<TestRow> = MilestoneScroller::new(MilestoneOptions::default());
        s.init(&grid).expect("valid grid");

        s.on_scroll(&grid, Instant::now());
        assert_eq!(s.state(), LifecycleState::Active);
        assert!(s.milestones().is_empty());
        assert_eq!(label_text(&s), Some(""));
    }
}
