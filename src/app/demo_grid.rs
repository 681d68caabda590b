//! A generated, grouped row list presented as a scrollable grid.
//!
//! Terminal cells are mapped onto a pixel model so the overlay's pixel
//! margins apply unchanged: one row is [`ROW_PX`] tall, one column is
//! [`COL_PX`] wide.

use std::borrow::Cow;

use ratatui::layout::Rect;

use milestone_scroller::{Grid, Offset, Row, Viewport, Window};

pub const ROW_PX: f64 = 20.0;
pub const COL_PX: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Group,
    Item,
}

#[derive(Debug, Clone)]
pub struct DemoRow {
    pub index: usize,
    pub name: String,
    /// Name of the group this row belongs to (its own name for headers).
    pub group: String,
    pub kind: RowKind,
}

impl Row for DemoRow {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "name" => Some(Cow::Borrowed(&self.name)),
            "group" => Some(Cow::Borrowed(&self.group)),
            "kind" => Some(Cow::Borrowed(match self.kind {
                RowKind::Group => "group",
                RowKind::Item => "item",
            })),
            "index" => Some(Cow::Owned(self.index.to_string())),
            _ => None,
        }
    }
}

/// `total` rows with a group header every `group_every` rows.
pub fn generate_rows(total: usize, group_every: usize) -> Vec<DemoRow> {
    let group_every = group_every.max(1);
    let mut rows = Vec::with_capacity(total);
    let mut group = String::new();
    let mut item = 0;

    for index in 0..total {
        if index % group_every == 0 {
            group = format!("Section {}", index / group_every + 1);
            rows.push(DemoRow {
                index,
                name: group.clone(),
                group: group.clone(),
                kind: RowKind::Group,
            });
        } else {
            item += 1;
            rows.push(DemoRow {
                index,
                name: format!("item {item}"),
                group: group.clone(),
                kind: RowKind::Item,
            });
        }
    }
    rows
}

/// The list plus where it is on screen.
pub struct DemoGrid {
    pub rows: Vec<DemoRow>,
    /// First visible row.
    pub offset: usize,
    /// Inner list area (inside the border).
    pub area: Rect,
    /// Whole terminal.
    pub screen: Rect,
}

impl DemoGrid {
    pub fn new(rows: Vec<DemoRow>) -> Self {
        Self {
            rows,
            offset: 0,
            area: Rect::default(),
            screen: Rect::default(),
        }
    }

    pub fn max_offset(&self) -> usize {
        self.rows.len().saturating_sub(self.area.height as usize)
    }

    /// Move the first visible row by `delta`.  Returns `true` if it moved.
    pub fn scroll_by(&mut self, delta: isize) -> bool {
        let target = self.offset.saturating_add_signed(delta).min(self.max_offset());
        self.scroll_to(target)
    }

    pub fn scroll_to(&mut self, offset: usize) -> bool {
        let offset = offset.min(self.max_offset());
        let moved = offset != self.offset;
        self.offset = offset;
        moved
    }

    /// Record the areas from the latest layout.  Returns `true` if they
    /// changed since the last frame.
    pub fn set_areas(&mut self, area: Rect, screen: Rect) -> bool {
        let changed = area != self.area || screen != self.screen;
        self.area = area;
        self.screen = screen;
        self.offset = self.offset.min(self.max_offset());
        changed
    }
}

impl Viewport for DemoGrid {
    fn scroll_top(&self) -> f64 {
        self.offset as f64 * ROW_PX
    }

    fn height(&self) -> f64 {
        f64::from(self.area.height) * ROW_PX
    }

    fn width(&self) -> f64 {
        f64::from(self.area.width) * COL_PX
    }

    fn offset(&self) -> Offset {
        Offset {
            top: f64::from(self.area.y) * ROW_PX,
            left: f64::from(self.area.x) * COL_PX,
        }
    }

    fn scrollable_height(&self) -> f64 {
        (self.rows.len() as f64 * ROW_PX).max(Viewport::height(self))
    }

    fn row_height(&self) -> Option<f64> {
        (!self.rows.is_empty() && self.area.height > 0).then_some(ROW_PX)
    }
}

impl Window for DemoGrid {
    fn width(&self) -> f64 {
        f64::from(self.screen.width) * COL_PX
    }
}

impl Grid for DemoGrid {
    type Data = Vec<DemoRow>;
    type Viewport = Self;
    type Window = Self;

    fn data(&self) -> &Vec<DemoRow> {
        &self.rows
    }

    fn viewport(&self) -> &Self {
        self
    }

    fn window(&self) -> &Self {
        self
    }
}
