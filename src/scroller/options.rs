//! Per-scroller options.

use std::time::Duration;

use crate::config::ScrollerConfig;
use crate::core::geometry::DEFAULT_ROW_HEIGHT;

/// Quiet period after which the overlay hides.
pub const DEFAULT_IDLE_DELAY: Duration = Duration::from_millis(400);

/// Label height assumed when the host does not measure one.
pub const DEFAULT_LABEL_HEIGHT: f64 = 20.0;

/// How milestones are picked and how the overlay behaves.
pub struct MilestoneOptions<R> {
    /// Decides whether a row is a milestone.  Default: no row is.
    pub milestone_test: Box<dyn Fn(&R) -> bool>,
    /// Row field the label text is read from.
    pub text_property: String,
    pub idle_delay: Duration,
    /// Used when the viewport cannot measure a row.
    pub default_row_height: f64,
    /// Height of the label element, used to center it on its position.
    pub label_height: f64,
}

impl<R> Default for MilestoneOptions<R> {
    fn default() -> Self {
        Self {
            milestone_test: Box::new(|_| false),
            text_property: "name".to_string(),
            idle_delay: DEFAULT_IDLE_DELAY,
            default_row_height: DEFAULT_ROW_HEIGHT,
            label_height: DEFAULT_LABEL_HEIGHT,
        }
    }
}

impl<R> MilestoneOptions<R> {
    /// Options seeded from the persisted user config.
    pub fn from_config(config: &ScrollerConfig) -> Self {
        Self {
            text_property: config.text_property.clone(),
            idle_delay: Duration::from_millis(config.idle_delay_ms),
            default_row_height: config.default_row_height,
            ..Self::default()
        }
    }

    pub fn milestone_test(mut self, test: impl Fn(&R) -> bool + 'static) -> Self {
        self.milestone_test = Box::new(test);
        self
    }

    pub fn text_property(mut self, field: impl Into<String>) -> Self {
        self.text_property = field.into();
        self
    }

    pub fn idle_delay(mut self, delay: Duration) -> Self {
        self.idle_delay = delay;
        self
    }

    pub fn label_height(mut self, height: f64) -> Self {
        self.label_height = height;
        self
    }
}
