// Copyright 2025 the Numframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform IR types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use numframe_core::{EntryVector, Frame, FrameError, Result};

use crate::relational::select;
use crate::structural::{expand_with_fill, project};

/// Binary operators for [`summarize`](crate::summarize).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// `acc + v`
    Sum,
    /// `acc * v`
    Product,
    /// Smaller of the two (NaN-ignoring, as [`f64::min`]).
    Min,
    /// Larger of the two (NaN-ignoring, as [`f64::max`]).
    Max,
}

impl ReduceOp {
    /// Combine an accumulator with the next value.
    pub fn combine(self, acc: f64, v: f64) -> f64 {
        match self {
            Self::Sum => acc + v,
            Self::Product => acc * v,
            Self::Min => acc.min(v),
            Self::Max => acc.max(v),
        }
    }

    /// A conventional name for the summary vector.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Product => "product",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// Comparison operators for numeric predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==` (exact float equality)
    Eq,
    /// `!=` (exact float inequality)
    Ne,
}

/// A row predicate comparing one column against a constant.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Column to read.
    pub column: String,
    /// Comparison operator.
    pub op: CompareOp,
    /// Right-hand constant.
    pub value: f64,
}

impl Predicate {
    /// Create a predicate `column <op> value`.
    pub fn new(column: impl Into<String>, op: CompareOp, value: f64) -> Self {
        Self {
            column: column.into(),
            op,
            value,
        }
    }

    /// Evaluate the predicate for a given numeric value.
    pub fn eval(&self, v: f64) -> bool {
        match self.op {
            CompareOp::Lt => v < self.value,
            CompareOp::Le => v <= self.value,
            CompareOp::Gt => v > self.value,
            CompareOp::Ge => v >= self.value,
            CompareOp::Eq => v == self.value,
            CompareOp::Ne => v != self.value,
        }
    }

    /// Evaluate the predicate against an exported row.
    ///
    /// A row without the column never matches.
    pub fn matches(&self, row: &EntryVector) -> bool {
        row.get(&self.column).is_some_and(|v| self.eval(v))
    }
}

/// A closure-free frame transform.
///
/// Row-wise functions cannot be stored here; call [`compute_column`](crate::compute_column)
/// directly for those.
#[derive(Debug, Clone, PartialEq)]
pub enum Transform {
    /// Append columns and rows filled with a constant.
    Expand {
        /// Number of rows to append.
        rows: usize,
        /// Column names to append, in order.
        columns: Vec<String>,
        /// Value for every new cell.
        fill: f64,
    },
    /// Keep a subset of columns, in table order.
    Project {
        /// Columns to keep.
        columns: Vec<String>,
    },
    /// Keep only rows that satisfy a predicate.
    Filter {
        /// Predicate to apply per row.
        predicate: Predicate,
    },
}

impl Transform {
    /// Run this transform, producing a new frame.
    pub fn apply(&self, frame: &Frame) -> Result<Frame> {
        match self {
            Self::Expand {
                rows,
                columns,
                fill,
            } => expand_with_fill(frame, *rows, columns.iter().cloned(), *fill),
            Self::Project { columns } => project(frame, columns),
            Self::Filter { predicate } => {
                if !frame.contains_column(&predicate.column) {
                    return Err(FrameError::UnknownName(predicate.column.clone()));
                }
                select(frame, |row| predicate.matches(row))
            }
        }
    }
}
