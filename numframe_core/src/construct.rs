// Copyright 2025 the Numframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ways to build a [`Frame`].
//!
//! Every path checks the two storage invariants up front: column names are unique
//! ([`FrameError::DuplicateName`]) and the input is rectangular ([`FrameError::ShapeMismatch`]).
//! Copying an existing frame is just [`Clone`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{FrameError, Result};
use crate::frame::Frame;
use crate::vector::{EntryVector, index_names};

/// How a list of [`EntryVector`]s maps onto a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Each vector is one row.
    Rows,
    /// Each vector is one column, named after the vector.
    Columns,
}

impl Frame {
    /// Builds a frame from a header and row-major values.
    ///
    /// Every row must have exactly one value per column name.
    pub fn from_values<N, R>(
        columns: impl IntoIterator<Item = N>,
        data: impl IntoIterator<Item = R>,
    ) -> Result<Self>
    where
        N: Into<String>,
        R: AsRef<[f64]>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let index = index_names(&columns)?;
        let width = columns.len();
        let rows = data
            .into_iter()
            .enumerate()
            .map(|(i, row)| {
                let row = row.as_ref();
                if row.len() == width {
                    Ok(row.to_vec())
                } else {
                    Err(FrameError::ShapeMismatch {
                        row: i,
                        expected: width,
                        found: row.len(),
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_validated(columns, index, rows))
    }

    /// Builds a frame with a header and no rows.
    pub fn with_columns<N: Into<String>>(columns: impl IntoIterator<Item = N>) -> Result<Self> {
        Self::from_values(columns, core::iter::empty::<[f64; 0]>())
    }

    /// Builds a frame from vectors interpreted according to `orientation`.
    pub fn from_vectors(vectors: &[EntryVector], orientation: Orientation) -> Result<Self> {
        match orientation {
            Orientation::Rows => Self::from_rows(vectors),
            Orientation::Columns => Self::from_columns(vectors),
        }
    }

    /// Builds a frame whose rows are `rows`.
    ///
    /// The header is taken from the first vector's entry names; later vectors contribute their
    /// values positionally. An empty list yields a frame with no columns. Use
    /// [`Frame::from_rows_with_header`] to keep a header when there may be no rows.
    pub fn from_rows(rows: &[EntryVector]) -> Result<Self> {
        let header = rows
            .first()
            .map(|r| r.entry_names().to_vec())
            .unwrap_or_default();
        Self::from_rows_with_header(header, rows)
    }

    /// Builds a frame from an explicit header and row vectors.
    ///
    /// Values are taken by position; each vector must have one value per header column.
    pub fn from_rows_with_header<N: Into<String>>(
        columns: impl IntoIterator<Item = N>,
        rows: &[EntryVector],
    ) -> Result<Self> {
        Self::from_values(columns, rows.iter().map(EntryVector::values))
    }

    /// Builds a frame whose columns are `columns`, in list order.
    ///
    /// Each vector's name becomes its column name and all vectors must have the same length,
    /// which becomes the row count.
    pub fn from_columns(columns: &[EntryVector]) -> Result<Self> {
        let names: Vec<String> = columns.iter().map(|c| String::from(c.name())).collect();
        let index = index_names(&names)?;
        let row_count = columns.first().map_or(0, EntryVector::len);
        if let Some((i, bad)) = columns
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != row_count)
        {
            return Err(FrameError::ShapeMismatch {
                row: i,
                expected: row_count,
                found: bad.len(),
            });
        }
        let rows = (0..row_count)
            .map(|r| columns.iter().map(|c| c.values()[r]).collect::<Vec<_>>())
            .collect();
        Ok(Self::from_validated(names, index, rows))
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use alloc::vec;

    fn col(name: &str, values: &[f64]) -> EntryVector {
        let names: Vec<String> = (0..values.len()).map(crate::row_name).collect();
        EntryVector::new(name, names, values.iter().copied()).unwrap()
    }

    #[test]
    fn from_values_keeps_header_order() {
        let f = Frame::from_values(["z", "a", "m"], [[1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(f.column_names(), ["z", "a", "m"]);
        assert_eq!(f.value(0, "m"), Ok(3.0));
    }

    #[test]
    fn from_values_rejects_ragged_rows() {
        let data = vec![vec![1.0, 2.0], vec![3.0]];
        let err = Frame::from_values(["a", "b"], &data).unwrap_err();
        assert_eq!(
            err,
            FrameError::ShapeMismatch {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn from_values_rejects_repeated_names() {
        let err = Frame::from_values(["a", "a"], [[1.0, 2.0]]).unwrap_err();
        assert_eq!(err, FrameError::DuplicateName("a".into()));
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let original = Frame::from_values(["a"], [[1.0]]).unwrap();
        let mut copy = original.clone();
        copy.set_value(0, "a", 2.0).unwrap();
        assert_eq!(original.value(0, "a"), Ok(1.0));
        assert_eq!(copy.value(0, "a"), Ok(2.0));
    }

    #[test]
    fn rows_round_trip_through_from_rows() {
        let f = Frame::from_values(["a", "b"], [[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let rebuilt = Frame::from_vectors(&f.rows(), Orientation::Rows).unwrap();
        assert_eq!(rebuilt, f);
    }

    #[test]
    fn from_rows_uses_first_header_positionally() {
        let r0 = EntryVector::new("r0", ["a", "b"], [1.0, 2.0]).unwrap();
        let r1 = EntryVector::new("r1", ["x", "y"], [3.0, 4.0]).unwrap();
        let f = Frame::from_rows(&[r0, r1]).unwrap();
        assert_eq!(f.column_names(), ["a", "b"]);
        assert_eq!(f.value(1, "b"), Ok(4.0));
    }

    #[test]
    fn from_rows_rejects_short_rows() {
        let r0 = EntryVector::new("r0", ["a", "b"], [1.0, 2.0]).unwrap();
        let r1 = EntryVector::new("r1", ["a"], [3.0]).unwrap();
        let err = Frame::from_rows(&[r0, r1]).unwrap_err();
        assert_eq!(
            err,
            FrameError::ShapeMismatch {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_row_list() {
        let f = Frame::from_rows(&[]).unwrap();
        assert_eq!(f.row_count(), 0);
        assert_eq!(f.column_count(), 0);

        let f = Frame::from_rows_with_header(["a", "b"], &[]).unwrap();
        assert_eq!(f.row_count(), 0);
        assert_eq!(f.column_names(), ["a", "b"]);
    }

    #[test]
    fn from_columns_distributes_by_position() {
        let f = Frame::from_vectors(
            &[col("a", &[1.0, 3.0]), col("b", &[2.0, 4.0])],
            Orientation::Columns,
        )
        .unwrap();
        assert_eq!(f.column_names(), ["a", "b"]);
        assert_eq!(f.row(0).unwrap().values(), [1.0, 2.0]);
        assert_eq!(f.row(1).unwrap().values(), [3.0, 4.0]);
    }

    #[test]
    fn from_columns_rejects_unequal_lengths() {
        let err = Frame::from_columns(&[col("a", &[1.0, 2.0]), col("b", &[3.0])]).unwrap_err();
        assert_eq!(
            err,
            FrameError::ShapeMismatch {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn from_columns_rejects_repeated_names() {
        let err = Frame::from_columns(&[col("a", &[1.0]), col("a", &[2.0])]).unwrap_err();
        assert_eq!(err, FrameError::DuplicateName("a".into()));
    }

    #[test]
    fn from_columns_keeps_header_without_rows() {
        let f = Frame::from_columns(&[col("a", &[]), col("b", &[])]).unwrap();
        assert_eq!(f.row_count(), 0);
        assert_eq!(f.column_names(), ["a", "b"]);
    }
}
