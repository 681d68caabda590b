//! Scroll position indicator for long virtualized lists.
//!
//! While the user scrolls, a floating label names the nearest *milestone*
//! row and tick marks along the scrollbar track show where every milestone
//! lies.  The overlay appears on the first scroll after idle and hides
//! itself once scrolling has been quiet for a while.
//!
//! * [`core`] — pure math: milestone index, viewport snapshot, resolver.
//! * [`scroller`] — the session lifecycle, idle timer and overlay state.
//! * [`config`] — persisted user settings.

pub mod config;
pub mod core;
pub mod scroller;

pub use crate::core::{
    geometry::{Offset, ViewportGeometry},
    milestone::Milestone,
    resolver::Position,
};
pub use crate::scroller::{
    error::ScrollerError,
    host::{Grid, GridDataSource, Row, Viewport, Window},
    lifecycle::{LifecycleState, MilestoneScroller, ScrollSignal},
    options::MilestoneOptions,
    overlay::Overlay,
};
