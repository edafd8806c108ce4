//! Owned row subsets of a source table.

use polars::prelude::{BooleanChunked, DataFrame, IdxCa, IdxSize, NewChunkedArray, PolarsResult};

/// A sub-table holding selected rows of a source DataFrame.
///
/// Rows are identified by their zero-based position in the source. The
/// subset owns its own DataFrame, so it can be modified or dropped without
/// touching the source or any sibling subset.
#[derive(Debug, Clone)]
pub struct RowSubset {
    rows: Vec<IdxSize>,
    frame: DataFrame,
}

impl RowSubset {
    /// Keep the source rows where `keep` is true.
    pub fn filter(source: &DataFrame, keep: &[bool]) -> PolarsResult<Self> {
        let rows = keep
            .iter()
            .enumerate()
            .filter(|(_, keep)| **keep)
            .map(|(idx, _)| idx as IdxSize)
            .collect();
        let mask = BooleanChunked::from_slice("keep".into(), keep);
        Ok(Self {
            rows,
            frame: source.filter(&mask)?,
        })
    }

    /// Take the given source rows. `rows` must be ascending.
    pub fn take(source: &DataFrame, rows: Vec<IdxSize>) -> PolarsResult<Self> {
        let idx = IdxCa::from_vec("row".into(), rows.clone());
        Ok(Self {
            rows,
            frame: source.take(&idx)?,
        })
    }

    /// Rows of `self` whose identity does not appear in `other`.
    pub fn exclude(&self, other: &RowSubset) -> PolarsResult<Self> {
        let keep: Vec<bool> = self.rows.iter().map(|row| !other.contains(*row)).collect();
        let rows = self
            .rows
            .iter()
            .zip(&keep)
            .filter(|(_, keep)| **keep)
            .map(|(row, _)| *row)
            .collect();
        let mask = BooleanChunked::from_slice("keep".into(), &keep);
        Ok(Self {
            rows,
            frame: self.frame.filter(&mask)?,
        })
    }

    /// Source row identities, ascending.
    pub fn rows(&self) -> &[IdxSize] {
        &self.rows
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut DataFrame {
        &mut self.frame
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, row: IdxSize) -> bool {
        self.rows.binary_search(&row).is_ok()
    }
}
