// Copyright 2025 the Numframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row-major table storage and accessors.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};

use crate::error::{FrameError, Result};
use crate::vector::EntryVector;

/// Value written into cells created by growing a frame, unless another fill is requested.
pub const DEFAULT_FILL: f64 = 0.0;

/// Name given to the `i`th row when it is exported, and to the `i`th entry of a column vector.
pub fn row_name(i: usize) -> String {
    format!("row_{i}")
}

/// A labeled, row-major table of `f64` values.
///
/// The header (`columns`) and the name lookup (`index`) are kept in lockstep: for every column
/// name, `index[name]` is its position in `columns`, and names are unique. Every row holds exactly
/// one value per column.
///
/// Cloning a frame produces a deep copy that shares nothing with the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<f64>>,
}

impl Frame {
    /// Assembles a frame from parts the caller has already validated.
    pub(crate) fn from_validated(
        columns: Vec<String>,
        index: HashMap<String, usize>,
        rows: Vec<Vec<f64>>,
    ) -> Self {
        debug_assert_eq!(columns.len(), index.len(), "header and index must agree");
        debug_assert!(
            rows.iter().all(|r| r.len() == columns.len()),
            "every row must match the header width"
        );
        Self {
            columns,
            index,
            rows,
        }
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    ///
    /// This is the header width, so it stays meaningful for a frame with no rows.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the frame has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column names in table order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Returns the position of a column, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Returns `true` if the frame has a column with this name.
    pub fn contains_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Reads a single cell.
    pub fn value(&self, row: usize, column: &str) -> Result<f64> {
        self.check_row(row)?;
        let col = self.resolve(column)?;
        Ok(self.rows[row][col])
    }

    /// Overwrites a single cell in place.
    ///
    /// Both the row and the column are checked before anything is written.
    pub fn set_value(&mut self, row: usize, column: &str, value: f64) -> Result<()> {
        self.check_row(row)?;
        let col = self.resolve(column)?;
        self.rows[row][col] = value;
        Ok(())
    }

    /// Exports row `i` as a vector named `row_{i}`, keyed by column name.
    pub fn row(&self, i: usize) -> Result<EntryVector> {
        self.check_row(i)?;
        Ok(EntryVector::from_unique(
            row_name(i),
            self.columns.clone(),
            self.rows[i].clone(),
        ))
    }

    /// Exports a column as a vector named after it, keyed `row_0..row_{n-1}`.
    pub fn column(&self, name: &str) -> Result<EntryVector> {
        let col = self.resolve(name)?;
        Ok(self.column_at(col))
    }

    /// Exports every row, in row order.
    pub fn rows(&self) -> Vec<EntryVector> {
        (0..self.row_count())
            .map(|i| {
                EntryVector::from_unique(row_name(i), self.columns.clone(), self.rows[i].clone())
            })
            .collect()
    }

    /// Exports every column, in table order.
    pub fn columns(&self) -> Vec<EntryVector> {
        (0..self.column_count()).map(|c| self.column_at(c)).collect()
    }

    /// Grows the frame in place.
    ///
    /// Appends `new_columns` (in the given order) to every existing row with `fill`, then appends
    /// `additional_rows` rows of `fill` spanning the widened header. Every new name is checked
    /// against the current header and against the other new names before any storage changes, so
    /// a failed call leaves the frame untouched.
    pub fn grow<N: Into<String>>(
        &mut self,
        additional_rows: usize,
        new_columns: impl IntoIterator<Item = N>,
        fill: f64,
    ) -> Result<()> {
        let new_columns: Vec<String> = new_columns.into_iter().map(Into::into).collect();
        self.check_new_columns(&new_columns)?;

        log::trace!(
            "growing frame by {} columns and {additional_rows} rows",
            new_columns.len()
        );

        for name in new_columns {
            self.index.insert(name.clone(), self.columns.len());
            self.columns.push(name);
        }
        let width = self.columns.len();
        for row in &mut self.rows {
            row.resize(width, fill);
        }
        self.rows.extend(core::iter::repeat_n(vec![fill; width], additional_rows));
        Ok(())
    }

    fn check_new_columns(&self, names: &[String]) -> Result<()> {
        let mut seen = HashSet::with_capacity(names.len());
        for name in names {
            if self.index.contains_key(name) || !seen.insert(name.as_str()) {
                return Err(FrameError::DuplicateName(name.clone()));
            }
        }
        Ok(())
    }

    fn column_at(&self, col: usize) -> EntryVector {
        let names = (0..self.row_count()).map(row_name).collect();
        let values = self.rows.iter().map(|r| r[col]).collect();
        EntryVector::from_unique(self.columns[col].clone(), names, values)
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.row_count() {
            return Err(FrameError::OutOfRange {
                row,
                row_count: self.row_count(),
            });
        }
        Ok(())
    }

    fn resolve(&self, column: &str) -> Result<usize> {
        self.column_index(column).ok_or_else(|| FrameError::UnknownName(column.into()))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn sample() -> Frame {
        Frame::from_values(["a", "b"], [[1.0, 2.0], [3.0, 4.0]]).unwrap()
    }

    #[test]
    fn dimensions_and_names() {
        let f = sample();
        assert_eq!(f.row_count(), 2);
        assert_eq!(f.column_count(), 2);
        assert_eq!(f.column_names(), ["a", "b"]);
        assert_eq!(f.column_index("b"), Some(1));
        assert!(f.contains_column("a"));
        assert!(!f.contains_column("c"));
    }

    #[test]
    fn get_value_by_row_and_name() {
        let f = sample();
        assert_eq!(f.value(1, "b"), Ok(4.0));
        assert_eq!(f.value(0, "a"), Ok(1.0));
    }

    #[test]
    fn row_equal_to_row_count_is_out_of_range() {
        let mut f = sample();
        let err = FrameError::OutOfRange {
            row: 2,
            row_count: 2,
        };
        assert_eq!(f.value(2, "a"), Err(err.clone()));
        assert_eq!(f.set_value(2, "a", 9.0), Err(err.clone()));
        assert_eq!(f.row(2), Err(err));
    }

    #[test]
    fn unknown_column_is_rejected() {
        let mut f = sample();
        let err = FrameError::UnknownName("z".into());
        assert_eq!(f.value(0, "z"), Err(err.clone()));
        assert_eq!(f.set_value(0, "z", 1.0), Err(err.clone()));
        assert_eq!(f.column("z").unwrap_err(), err);
        assert_eq!(f, sample());
    }

    #[test]
    fn set_value_touches_only_one_cell() {
        let mut f = sample();
        f.set_value(0, "b", 42.0).unwrap();
        assert_eq!(f.value(0, "b"), Ok(42.0));
        assert_eq!(f.value(0, "a"), Ok(1.0));
        assert_eq!(f.value(1, "a"), Ok(3.0));
        assert_eq!(f.value(1, "b"), Ok(4.0));
    }

    #[test]
    fn exported_row_is_keyed_by_column() {
        let r = sample().row(1).unwrap();
        assert_eq!(r.name(), "row_1");
        assert_eq!(r.entry_names(), ["a", "b"]);
        assert_eq!(r.values(), [3.0, 4.0]);
    }

    #[test]
    fn exported_column_is_keyed_by_row() {
        let c = sample().column("b").unwrap();
        assert_eq!(c.name(), "b");
        assert_eq!(c.entry_names(), ["row_0", "row_1"]);
        assert_eq!(c.values(), [2.0, 4.0]);
    }

    #[test]
    fn exports_are_detached_snapshots() {
        let mut f = sample();
        let row = f.row(0).unwrap();
        let col = f.column("a").unwrap();
        f.set_value(0, "a", -1.0).unwrap();
        assert_eq!(row.get("a"), Some(1.0));
        assert_eq!(col.get("row_0"), Some(1.0));
    }

    #[test]
    fn vector_lengths_match_dimensions() {
        let f = sample();
        for name in f.column_names() {
            assert_eq!(f.column(name).unwrap().values().len(), f.row_count());
        }
        for i in 0..f.row_count() {
            assert_eq!(f.row(i).unwrap().values().len(), f.column_count());
        }
        let rows = f.rows();
        let cols = f.columns();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name(), "row_1");
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].name(), "a");
    }

    #[test]
    fn grow_appends_columns_then_rows() {
        let mut f = sample();
        f.grow(1, ["c"], DEFAULT_FILL).unwrap();
        assert_eq!(f.column_names(), ["a", "b", "c"]);
        assert_eq!(f.row_count(), 3);
        assert_eq!(f.row(0).unwrap().values(), [1.0, 2.0, 0.0]);
        assert_eq!(f.row(1).unwrap().values(), [3.0, 4.0, 0.0]);
        assert_eq!(f.row(2).unwrap().values(), [0.0, 0.0, 0.0]);
        assert_eq!(f.column_index("c"), Some(2));
    }

    #[test]
    fn failed_grow_leaves_frame_untouched() {
        let mut f = sample();
        let err = f.grow(3, ["c", "b"], 1.0).unwrap_err();
        assert_eq!(err, FrameError::DuplicateName("b".into()));
        assert_eq!(f, sample());

        let err = f.grow(0, ["d", "d"], 1.0).unwrap_err();
        assert_eq!(err, FrameError::DuplicateName("d".into()));
        assert_eq!(f, sample());
    }

    #[test]
    fn grow_header_only_frame() {
        let mut f = Frame::with_columns(["x"]).unwrap();
        f.grow(2, ["y"], 5.0).unwrap();
        assert_eq!(f.row_count(), 2);
        assert_eq!(f.row(1).unwrap().values(), [5.0, 5.0]);
    }
}
