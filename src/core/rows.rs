//! Row access — the read-only view of the host grid's data.
//!
//! The grid owns its rows; everything here only borrows them for the length
//! of one milestone scan.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// A single grid row whose named fields can be read as text.
pub trait Row {
    /// Text of the field called `name`, or `None` if the row has no such field.
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl Row for HashMap<String, String> {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl Row for BTreeMap<String, String> {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

/// The full (non-virtualized) row list behind a grid.
pub trait GridDataSource {
    type Row: Row;

    /// Total number of rows, including the ones not currently rendered.
    fn len(&self) -> usize;

    /// Row at absolute position `index`.
    fn item(&self, index: usize) -> Option<&Self::Row>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<R: Row> GridDataSource for [R] {
    type Row = R;

    fn len(&self) -> usize {
        <[R]>::len(self)
    }

    fn item(&self, index: usize) -> Option<&R> {
        self.get(index)
    }
}

impl<R: Row> GridDataSource for Vec<R> {
    type Row = R;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn item(&self, index: usize) -> Option<&R> {
        self.as_slice().get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_rows_expose_their_fields() {
        let mut row = HashMap::new();
        row.insert("name".to_string(), "Fruit".to_string());
        assert_eq!(row.field_text("name").as_deref(), Some("Fruit"));
        assert_eq!(row.field_text("title"), None);
    }

    #[test]
    fn vec_source_reports_length_and_items() {
        let rows: Vec<BTreeMap<String, String>> = vec![BTreeMap::new(), BTreeMap::new()];
        assert_eq!(GridDataSource::len(&rows), 2);
        assert!(rows.item(1).is_some());
        assert!(rows.item(2).is_none());
        assert!(!GridDataSource::is_empty(&rows));
    }
}
