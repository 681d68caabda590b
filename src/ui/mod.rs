//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the grid and the scroller's overlay state and turns
//! them into cells on the terminal.  No scroll logic happens here.

pub mod layout;
pub mod list_widget;
pub mod overlay_widget;
pub mod theme;
