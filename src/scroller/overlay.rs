//! Overlay state — the floating label and the tick marks.
//!
//! Each scroller owns exactly one [`Overlay`].  Nothing here draws; a
//! renderer reads the current state and paints it however the host paints.

use crate::core::resolver::Position;

/// The floating milestone label.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Position,
    pub visible: bool,
    /// Measured height, used to center the label on its position.
    pub height: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    /// `None` until the scroller is attached, and again after teardown.
    label: Option<Label>,
    ticks: Vec<Position>,
}

impl Overlay {
    /// Create the (hidden, empty) label element.
    pub fn create_label(&mut self, height: f64) {
        self.label.get_or_insert(Label {
            text: String::new(),
            position: Position::default(),
            visible: false,
            height,
        });
    }

    pub fn remove_label(&mut self) {
        self.label = None;
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Height of the label element, `0.0` when there is none.
    pub fn label_height(&self) -> f64 {
        self.label.as_ref().map_or(0.0, |l| l.height)
    }

    pub fn is_label_visible(&self) -> bool {
        self.label.as_ref().is_some_and(|l| l.visible)
    }

    /// Move the label to `position` and make it visible, keeping its text.
    pub fn show_label(&mut self, position: Position) {
        if let Some(label) = self.label.as_mut() {
            label.position = position;
            label.visible = true;
        }
    }

    /// Replace the label text and position.  Visibility is unchanged.
    pub fn update_label(&mut self, text: &str, position: Position) {
        if let Some(label) = self.label.as_mut() {
            if label.text != text {
                label.text.clear();
                label.text.push_str(text);
            }
            label.position = position;
        }
    }

    pub fn hide_label(&mut self) {
        if let Some(label) = self.label.as_mut() {
            label.visible = false;
        }
    }

    /// Hide the label and forget its text, so a later session starts blank.
    pub fn clear_label(&mut self) {
        if let Some(label) = self.label.as_mut() {
            label.visible = false;
            label.text.clear();
        }
    }

    pub fn show_ticks(&mut self, ticks: impl IntoIterator<Item = Position>) {
        self.ticks.clear();
        self.ticks.extend(ticks);
    }

    pub fn remove_ticks(&mut self) {
        self.ticks.clear();
    }

    pub fn ticks(&self) -> &[Position] {
        &self.ticks
    }

    /// Anything on screen right now?
    pub fn is_visible(&self) -> bool {
        self.is_label_visible() || !self.ticks.is_empty()
    }
}
