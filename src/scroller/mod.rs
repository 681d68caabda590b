//! Scroll session orchestration — lifecycle state machine, idle timer and
//! the overlay it owns.
//!
//! The host feeds [`lifecycle::ScrollSignal`]s in and polls the idle timer;
//! the overlay state comes back out for whatever renders it.

pub mod error;
pub mod host;
pub mod lifecycle;
pub mod options;
pub mod overlay;
pub mod timer;
