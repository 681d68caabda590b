//! Renders the visible slice of the demo grid.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Widget},
};

use crate::app::demo_grid::{DemoGrid, RowKind};

use super::theme::Theme;

/// The list widget itself — created fresh each frame.
pub struct ListWidget<'a> {
    grid: &'a DemoGrid,
    block: Option<Block<'a>>,
}

impl<'a> ListWidget<'a> {
    pub fn new(grid: &'a DemoGrid) -> Self {
        Self { grid, block: None }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }
}

impl Widget for ListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible = self
            .grid
            .rows
            .iter()
            .skip(self.grid.offset)
            .take(inner.height as usize);

        for (i, row) in visible.enumerate() {
            let line = match row.kind {
                RowKind::Group => Line::from(Span::styled(
                    format!("▸ {}", row.name),
                    Theme::group_style(),
                )),
                RowKind::Item => Line::from(Span::styled(
                    format!("    {}", row.name),
                    Theme::item_style(),
                )),
            };
            buf.set_line(inner.x, inner.y + i as u16, &line, inner.width);
        }
    }
}
