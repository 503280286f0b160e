// Copyright 2025 the Numframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Labeled numeric data frames.
//!
//! This crate provides:
//! - [`Frame`], a row-major table of `f64` with uniquely named columns, and
//! - [`EntryVector`], the detached, named snapshot of one row or one column that a frame exports.
//!
//! Frames are plain values. Apart from [`Frame::set_value`] and [`Frame::grow`], nothing mutates a
//! frame in place; the transforms in `numframe_transforms` each build a fresh frame.
//!
//! ```
//! use numframe_core::Frame;
//!
//! let frame = Frame::from_values(["a", "b"], [[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! assert_eq!(frame.value(1, "b"), Ok(4.0));
//! assert_eq!(frame.column("a").unwrap().values(), [1.0, 3.0]);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod construct;
mod error;
mod frame;
mod vector;

pub use construct::Orientation;
pub use error::{FrameError, Result};
pub use frame::{DEFAULT_FILL, Frame, row_name};
pub use vector::EntryVector;
