//! Milestone index — one ordered pass over the full row list.
//!
//! A [`Milestone`] is a row that passed the caller's milestone test.  The
//! index is rebuilt from scratch at the start of every scroll session since
//! the underlying data may have changed in between.

use super::rows::{GridDataSource, Row};

/// A labeled row marking a significant position in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct Milestone {
    /// Label taken from the configured text field.
    pub text: String,
    /// `(row_index + 1) / total_rows`, so the last row sits at exactly `1.0`.
    pub fraction: f64,
    /// Absolute position in the full row list.
    pub row_index: usize,
}

/// Scan every row once and collect the milestones in ascending row order.
///
/// Rows whose `text_field` is missing still count as milestones but carry an
/// empty label.
pub fn build<D, F>(rows: &D, is_milestone: F, text_field: &str) -> Vec<Milestone>
where
    D: GridDataSource + ?Sized,
    F: Fn(&D::Row) -> bool,
{
    let total = rows.len();
    let mut milestones = Vec::new();
    if total == 0 {
        return milestones;
    }

    for row_index in 0..total {
        let Some(row) = rows.item(row_index) else {
            continue;
        };
        if !is_milestone(row) {
            continue;
        }
        let text = match row.field_text(text_field) {
            Some(text) => text.into_owned(),
            None => {
                tracing::debug!(row_index, field = text_field, "milestone row has no text field");
                String::new()
            }
        };
        milestones.push(Milestone {
            text,
            fraction: (row_index + 1) as f64 / total as f64,
            row_index,
        });
    }

    milestones
}
