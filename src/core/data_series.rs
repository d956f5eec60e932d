use serde::{Deserialize, Serialize};

use crate::render::Color;

/// One named bar value with its fill and border colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEntry {
    pub name: String,
    pub value: i64,
    pub fill_color: Color,
    pub border_color: Color,
}

impl DataEntry {
    /// Creates an entry whose border uses the fill color.
    #[must_use]
    pub fn new(name: impl Into<String>, value: i64, fill_color: Color) -> Self {
        Self {
            name: name.into(),
            value,
            fill_color,
            border_color: fill_color,
        }
    }

    #[must_use]
    pub fn with_border_color(mut self, border_color: Color) -> Self {
        self.border_color = border_color;
        self
    }
}

/// Ordered bar data. Insertion order is the left-to-right bar order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataSeries {
    entries: Vec<DataEntry>,
}

impl DataSeries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: DataEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[DataEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataEntry> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut DataEntry> {
        self.entries.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DataEntry> {
        self.entries.iter()
    }

    /// Returns `(min, max)` where `min` is zero unless some value is negative
    /// and `max` is the largest value. `None` for an empty series.
    #[must_use]
    pub fn value_range(&self) -> Option<(i64, i64)> {
        let max = self.entries.iter().map(|entry| entry.value).max()?;
        let min = self
            .entries
            .iter()
            .map(|entry| entry.value)
            .fold(0, i64::min);
        Some((min, max))
    }
}

impl FromIterator<DataEntry> for DataSeries {
    fn from_iter<I: IntoIterator<Item = DataEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DataSeries {
    type Item = &'a DataEntry;
    type IntoIter = std::slice::Iter<'a, DataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
