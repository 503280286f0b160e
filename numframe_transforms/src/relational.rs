// Copyright 2025 the Numframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row filtering, derived columns, and column-wise reduction.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use numframe_core::{EntryVector, Frame, FrameError, Result};

use crate::structural::expand;

/// Keeps the rows of `frame` for which `predicate` returns `true`, in their original order.
///
/// Each row is handed to the predicate as an exported [`EntryVector`]. The result keeps
/// `frame`'s header even when no row qualifies.
pub fn select(frame: &Frame, mut predicate: impl FnMut(&EntryVector) -> bool) -> Result<Frame> {
    let kept: Vec<EntryVector> = frame.rows().into_iter().filter(|r| predicate(r)).collect();
    log::debug!("select: kept {} of {} rows", kept.len(), frame.row_count());
    Frame::from_rows_with_header(frame.column_names(), &kept)
}

/// Returns a copy of `frame` with a new last column `name` holding `function(row)` for each row.
///
/// Fails with [`FrameError::DuplicateName`] if `name` is already a column.
pub fn compute_column(
    frame: &Frame,
    name: &str,
    function: impl FnMut(&EntryVector) -> f64,
) -> Result<Frame> {
    let values: Vec<f64> = frame.rows().iter().map(function).collect();
    if values.len() != frame.row_count() {
        return Err(FrameError::InternalInconsistency {
            expected: frame.row_count(),
            found: values.len(),
        });
    }

    log::debug!("compute_column: deriving `{name}` over {} rows", values.len());

    let mut out = expand(frame, 0, [name])?;
    for (row, value) in values.into_iter().enumerate() {
        out.set_value(row, name, value)?;
    }
    Ok(out)
}

/// Reduces every column of `frame` to one value with a left fold of `op`.
///
/// The result is a vector named `name` with one entry per column, in table order. A column with
/// a single value reduces to that value; otherwise the fold runs top to bottom as
/// `op(op(op(v0, v1), v2), ...)`, so non-associative operators give order-dependent but
/// reproducible results. Fails with [`FrameError::EmptyColumn`] if `frame` has columns but no
/// rows.
pub fn summarize(
    frame: &Frame,
    name: impl Into<String>,
    mut op: impl FnMut(f64, f64) -> f64,
) -> Result<EntryVector> {
    let name = name.into();
    log::debug!("summarize: `{name}` over {} columns", frame.column_count());

    let mut values = Vec::with_capacity(frame.column_count());
    for column in frame.columns() {
        let folded = column
            .values()
            .iter()
            .copied()
            .reduce(&mut op)
            .ok_or_else(|| FrameError::EmptyColumn(column.name().into()))?;
        values.push(folded);
    }
    EntryVector::new(name, frame.column_names(), values)
}
