use thiserror::Error;

/// Failures when wiring a scroller to a grid.
#[derive(Debug, Error, PartialEq)]
pub enum ScrollerError {
    #[error("milestone scroller is already attached to a grid")]
    AlreadyAttached,

    #[error("viewport reports unusable metrics (height {height}, width {width})")]
    InvalidViewport { height: f64, width: f64 },
}
