// Copyright 2025 the Numframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for frame operations.

use alloc::string::String;
use core::fmt;

/// Errors returned when building, reading, or transforming a [`Frame`](crate::Frame).
///
/// All variants describe data errors: they are raised at the point of violation and retrying the
/// same call cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// A row index outside `[0, row_count)`.
    OutOfRange {
        /// The requested row.
        row: usize,
        /// Number of rows in the frame at the time of the call.
        row_count: usize,
    },
    /// A column (or entry) name that is not present.
    UnknownName(String),
    /// A column (or entry) name that is already present.
    DuplicateName(String),
    /// Input rows or vectors whose length disagrees with the header.
    ShapeMismatch {
        /// Position of the offending row or vector in the input.
        row: usize,
        /// Required length.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },
    /// A row-wise computation produced a different number of values than there are rows.
    InternalInconsistency {
        /// Number of rows in the frame.
        expected: usize,
        /// Number of values produced.
        found: usize,
    },
    /// A reduction was requested over a column with no values.
    EmptyColumn(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { row, row_count } => {
                write!(f, "row index {row} out of range for {row_count} rows")
            }
            Self::UnknownName(name) => write!(f, "unknown column `{name}`"),
            Self::DuplicateName(name) => write!(f, "column `{name}` is already defined"),
            Self::ShapeMismatch {
                row,
                expected,
                found,
            } => write!(f, "input {row} has {found} values, expected {expected}"),
            Self::InternalInconsistency { expected, found } => write!(
                f,
                "row-wise computation produced {found} values for {expected} rows"
            ),
            Self::EmptyColumn(name) => write!(f, "column `{name}` has no values to reduce"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}

/// Result type for frame operations.
pub type Result<T> = core::result::Result<T, FrameError>;
