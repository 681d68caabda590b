//! Input handling — maps key/wheel events to scrolling and feeds the
//! resulting scroll signals to the milestone scroller.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::AppState;

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    let page = state.grid.area.height.max(1) as isize;
    let moved = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
            return;
        }
        KeyCode::Up | KeyCode::Char('k') => state.grid.scroll_by(-1),
        KeyCode::Down | KeyCode::Char('j') => state.grid.scroll_by(1),
        KeyCode::PageUp => state.grid.scroll_by(-page),
        KeyCode::PageDown | KeyCode::Char(' ') => state.grid.scroll_by(page),
        KeyCode::Home | KeyCode::Char('g') => state.grid.scroll_to(0),
        KeyCode::End | KeyCode::Char('G') => state.grid.scroll_to(usize::MAX),
        _ => return,
    };

    if moved {
        state.scroller.on_scroll(&state.grid, now);
    }
}

/// Process one wheel notch: the pulse keeps the overlay alive, and the
/// resulting scroll (if the list moved) updates it.
pub fn handle_wheel(state: &mut AppState, delta: isize, now: Instant) {
    state.scroller.on_pulse(&state.grid, now);
    if state.grid.scroll_by(delta) {
        state.scroller.on_scroll(&state.grid, now);
    }
}

/// The terminal changed size: drop the running session.
pub fn handle_resize(state: &mut AppState) {
    state.scroller.resize();
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use ratatui::layout::Rect;

    use milestone_scroller::{LifecycleState, MilestoneOptions, MilestoneScroller};

    use super::*;
    use crate::app::demo_grid::{generate_rows, DemoGrid, DemoRow, RowKind};

    fn state(total: usize) -> AppState {
        let mut grid = DemoGrid::new(generate_rows(total, 10));
        grid.set_areas(Rect::new(1, 1, 40, 20), Rect::new(0, 0, 42, 23));
        let options = MilestoneOptions::default()
            .milestone_test(|row: &DemoRow| row.kind == RowKind::Group);
        let mut scroller = MilestoneScroller::new(options);
        scroller.init(&grid).expect("valid grid");
        AppState::new(grid, scroller)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn key_scroll_starts_a_session() {
        let mut s = state(200);
        handle_key(&mut s, key(KeyCode::Down), Instant::now());
        assert_eq!(s.grid.offset, 1);
        assert_eq!(s.scroller.state(), LifecycleState::Active);
        assert_eq!(s.scroller.milestones().len(), 20);
    }

    #[test]
    fn key_that_does_not_move_does_not_scroll() {
        let mut s = state(200);
        handle_key(&mut s, key(KeyCode::Home), Instant::now());
        assert_eq!(s.scroller.state(), LifecycleState::Idle);
    }

    #[test]
    fn wheel_at_the_top_only_pulses() {
        let mut s = state(200);
        let now = Instant::now();
        handle_wheel(&mut s, -3, now);
        assert_eq!(s.scroller.state(), LifecycleState::Idle);
        assert!(s.scroller.next_deadline().is_some());

        handle_wheel(&mut s, 3, now);
        assert_eq!(s.grid.offset, 3);
        assert_eq!(s.scroller.state(), LifecycleState::Active);
    }

    #[test]
    fn end_key_shows_last_milestone() {
        let mut s = state(200);
        handle_key(&mut s, key(KeyCode::End), Instant::now());
        let label = s.scroller.overlay().label().expect("attached");
        assert!(label.visible);
        assert_eq!(label.text, "Section 20");
    }

    #[test]
    fn resize_ends_the_session() {
        let mut s = state(200);
        let now = Instant::now();
        handle_key(&mut s, key(KeyCode::PageDown), now);
        handle_resize(&mut s);
        assert_eq!(s.scroller.state(), LifecycleState::Idle);
        assert!(!s.scroller.poll_idle(now + Duration::from_secs(1)));
    }

    #[test]
    fn quit_keys() {
        let mut s = state(10);
        handle_key(&mut s, key(KeyCode::Char('q')), Instant::now());
        assert!(s.should_quit);

        let mut s = state(10);
        handle_key(
            &mut s,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Instant::now(),
        );
        assert!(s.should_quit);
    }
}
