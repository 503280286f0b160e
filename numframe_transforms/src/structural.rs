// Copyright 2025 the Numframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape-changing transforms: `expand` and `project`.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use numframe_core::{DEFAULT_FILL, Frame, FrameError, Result};

/// Returns a copy of `frame` with `new_columns` appended and `additional_rows` rows added.
///
/// New cells hold [`DEFAULT_FILL`]. Fails with [`FrameError::DuplicateName`] if a new column
/// name is already in use (or repeated), in which case `frame` is unaffected.
pub fn expand<N: Into<String>>(
    frame: &Frame,
    additional_rows: usize,
    new_columns: impl IntoIterator<Item = N>,
) -> Result<Frame> {
    expand_with_fill(frame, additional_rows, new_columns, DEFAULT_FILL)
}

/// Like [`expand`], with an explicit value for the new cells.
pub fn expand_with_fill<N: Into<String>>(
    frame: &Frame,
    additional_rows: usize,
    new_columns: impl IntoIterator<Item = N>,
    fill: f64,
) -> Result<Frame> {
    log::debug!(
        "expand: {}x{} frame by {additional_rows} rows",
        frame.row_count(),
        frame.column_count()
    );
    let mut out = frame.clone();
    out.grow(additional_rows, new_columns, fill)?;
    Ok(out)
}

/// Keeps only the named columns.
///
/// The result lists the retained columns in `frame`'s order, whatever order they were requested
/// in; requesting a column twice keeps it once. Fails with [`FrameError::UnknownName`] on the
/// first name that is not a column of `frame`.
pub fn project<S: AsRef<str>>(
    frame: &Frame,
    retain: impl IntoIterator<Item = S>,
) -> Result<Frame> {
    let mut keep = retain
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            frame
                .column_index(name)
                .ok_or_else(|| FrameError::UnknownName(name.into()))
        })
        .collect::<Result<Vec<usize>>>()?;
    keep.sort_unstable();
    keep.dedup();

    log::debug!("project: keeping {} of {} columns", keep.len(), frame.column_count());

    let names = frame.column_names();
    let columns = keep
        .into_iter()
        .map(|i| frame.column(&names[i]))
        .collect::<Result<Vec<_>>>()?;
    Frame::from_columns(&columns)
}
