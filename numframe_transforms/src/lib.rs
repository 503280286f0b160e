// Copyright 2025 the Numframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eager table transforms for `numframe_core` frames.
//!
//! This crate provides:
//! - structural transforms: [`expand`] (append filled rows/columns) and [`project`] (keep a
//!   column subset in table order),
//! - relational transforms: [`select`] (row filter), [`compute_column`] (derived column) and
//!   [`summarize`] (column-wise left fold), and
//! - a small closure-free IR ([`Transform`], [`Program`]) for chaining the first three.
//!
//! Every transform reads its input by reference and returns a freshly built frame.
//!
//! ```
//! use numframe_core::Frame;
//! use numframe_transforms::{compute_column, summarize};
//!
//! let frame = Frame::from_values(["a", "b"], [[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! let with_c = compute_column(&frame, "c", |row| row.get("a").unwrap_or(0.0) * 10.0).unwrap();
//! assert_eq!(with_c.column("c").unwrap().values(), [10.0, 30.0]);
//!
//! let sums = summarize(&frame, "sum", |x, y| x + y).unwrap();
//! assert_eq!(sums.values(), [4.0, 6.0]);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod program;
mod relational;
mod structural;
mod transform;

pub use program::{ExecutionError, Program};
pub use relational::{compute_column, select, summarize};
pub use structural::{expand, expand_with_fill, project};
pub use transform::{CompareOp, Predicate, ReduceOp, Transform};
