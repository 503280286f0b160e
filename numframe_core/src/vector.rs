// Copyright 2025 the Numframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detached, named row/column snapshots.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::error::{FrameError, Result};

/// A named, ordered association from entry names to values.
///
/// An `EntryVector` is what a [`Frame`](crate::Frame) hands out when a row or a column is
/// exported: row vectors are keyed by column name, column vectors by `row_{i}`. It is a copy, so
/// later writes to the frame are not observed through it, and it is immutable once built.
///
/// Entries keep the order in which they were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryVector {
    name: String,
    names: Vec<String>,
    values: Vec<f64>,
    index: HashMap<String, usize>,
}

impl EntryVector {
    /// Builds a vector from parallel name/value lists.
    ///
    /// Fails with [`FrameError::ShapeMismatch`] if the lists differ in length and with
    /// [`FrameError::DuplicateName`] if an entry name repeats.
    pub fn new(
        name: impl Into<String>,
        names: impl IntoIterator<Item = impl Into<String>>,
        values: impl IntoIterator<Item = f64>,
    ) -> Result<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let values: Vec<f64> = values.into_iter().collect();
        if names.len() != values.len() {
            return Err(FrameError::ShapeMismatch {
                row: 0,
                expected: names.len(),
                found: values.len(),
            });
        }
        let index = index_names(&names)?;
        Ok(Self {
            name: name.into(),
            names,
            values,
            index,
        })
    }

    /// Builds a vector from `(entry name, value)` pairs.
    pub fn from_pairs<K: Into<String>>(
        name: impl Into<String>,
        entries: impl IntoIterator<Item = (K, f64)>,
    ) -> Result<Self> {
        let (names, values): (Vec<String>, Vec<f64>) =
            entries.into_iter().map(|(k, v)| (k.into(), v)).unzip();
        Self::new(name, names, values)
    }

    /// Internal constructor for names already known to be unique.
    pub(crate) fn from_unique(name: String, names: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(names.len(), values.len(), "entry names and values must align");
        let index = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        Self {
            name,
            names,
            values,
            index,
        }
    }

    /// The vector's name (`row_{i}` for rows, the column name for columns).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entry names, in order.
    pub fn entry_names(&self) -> &[String] {
        &self.names
    }

    /// Values, in entry order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the value for an entry, if present.
    pub fn get(&self, entry: &str) -> Option<f64> {
        self.index.get(entry).map(|&i| self.values[i])
    }

    /// Returns the value for an entry, or [`FrameError::UnknownName`].
    pub fn value(&self, entry: &str) -> Result<f64> {
        self.get(entry).ok_or_else(|| FrameError::UnknownName(entry.into()))
    }

    /// Iterates `(entry name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Splits the vector into its name, entry names and values.
    pub fn into_parts(self) -> (String, Vec<String>, Vec<f64>) {
        (self.name, self.names, self.values)
    }
}

/// Builds a name -> position map, rejecting repeats.
pub(crate) fn index_names(names: &[String]) -> Result<HashMap<String, usize>> {
    let mut index = HashMap::with_capacity(names.len());
    for (i, name) in names.iter().enumerate() {
        if index.insert(name.clone(), i).is_some() {
            return Err(FrameError::DuplicateName(name.clone()));
        }
    }
    Ok(index)
}
