// Copyright 2025 the Numframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eager execution of a sequence of transforms.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use numframe_core::{Frame, FrameError};

use crate::transform::Transform;

/// Error returned when a [`Program`] step fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionError {
    /// Index of the failing transform.
    pub step: usize,
    /// The underlying frame error.
    pub error: FrameError,
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transform {} failed: {}", self.step, self.error)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ExecutionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// An ordered list of transforms, run one after another.
///
/// Each step reads the previous step's output and builds a fresh frame; the input frame is never
/// modified.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    transforms: Vec<Transform>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transform.
    pub fn push(&mut self, transform: Transform) -> &mut Self {
        self.transforms.push(transform);
        self
    }

    /// The transforms, in execution order.
    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Run every transform against `input`, returning the last output.
    ///
    /// An empty program returns a copy of `input`.
    pub fn execute(&self, input: &Frame) -> Result<Frame, ExecutionError> {
        let mut current = input.clone();
        for (step, transform) in self.transforms.iter().enumerate() {
            log::debug!("program step {step}: {transform:?}");
            current = transform
                .apply(&current)
                .map_err(|error| ExecutionError { step, error })?;
        }
        Ok(current)
    }
}

impl FromIterator<Transform> for Program {
    fn from_iter<I: IntoIterator<Item = Transform>>(iter: I) -> Self {
        Self {
            transforms: iter.into_iter().collect(),
        }
    }
}
