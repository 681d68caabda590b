//! Core algorithms – milestone indexing, viewport snapshots and scroll
//! resolution.
//!
//! Nothing in this module depends on any TUI or rendering crate, and nothing
//! here holds state between calls.  Every function is a pure function of the
//! snapshot it is given.

pub mod geometry;
pub mod milestone;
pub mod resolver;
pub mod rows;
