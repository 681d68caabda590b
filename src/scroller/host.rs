//! The host grid as seen by the scroller.

pub use crate::core::geometry::{Offset, Viewport, Window};
pub use crate::core::rows::{GridDataSource, Row};

/// A grid the scroller can attach to: its scroll container, its full row
/// list and the window both live in.
pub trait Grid {
    type Data: GridDataSource + ?Sized;
    type Viewport: Viewport + ?Sized;
    type Window: Window + ?Sized;

    fn data(&self) -> &Self::Data;
    fn viewport(&self) -> &Self::Viewport;
    fn window(&self) -> &Self::Window;
}
