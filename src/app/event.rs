//! Terminal event abstraction.
//!
//! A background task polls crossterm and forwards the events the demo cares
//! about over a channel, so the main loop can also wait on the scroller's
//! idle deadline without blocking on terminal input.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;

/// Rows moved per wheel notch.
pub const WHEEL_STEP: isize = 3;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// One wheel notch; negative scrolls up.
    Wheel(isize),
    Resize(u16, u16),
    /// Nothing happened for a whole tick.
    Tick,
}

/// Map a raw terminal event, dropping the ones the demo ignores.
fn translate(ev: CtEvent) -> Option<AppEvent> {
    match ev {
        CtEvent::Key(k) if k.kind == KeyEventKind::Press => Some(AppEvent::Key(k)),
        CtEvent::Mouse(m) => match m.kind {
            MouseEventKind::ScrollUp => Some(AppEvent::Wheel(-WHEEL_STEP)),
            MouseEventKind::ScrollDown => Some(AppEvent::Wheel(WHEEL_STEP)),
            _ => None,
        },
        CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// Spawns a background task that polls the terminal for events and sends them
/// through the returned channel.
pub fn spawn_event_reader(tick_rate: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let has_event = event::poll(tick_rate).unwrap_or(false);
            let app_event = if has_event {
                match event::read() {
                    Ok(ev) => match translate(ev) {
                        Some(app_event) => app_event,
                        None => continue,
                    },
                    Err(err) => {
                        tracing::debug!("terminal read failed: {err}");
                        continue;
                    }
                }
            } else {
                AppEvent::Tick
            };
            if tx.send(app_event).is_err() {
                break; // receiver dropped
            }
        }
    });

    rx
}
