//! Application orchestration — state, event loop plumbing and input handling.

pub mod demo_grid;
pub mod event;
pub mod handler;
pub mod state;
