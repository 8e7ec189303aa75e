//! Input generation for sorting benchmarks.
//!
//! A [`Dataset`] is produced once per (size, shape) pair and never mutated.
//! Candidates receive their own copy through [`Dataset::working_copy`], so no
//! two trials ever share backing storage.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{BenchError, Result};

/// Structural category of a generated dataset
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// Values drawn uniformly from `[-2*size, 2*size)`
    Random,
    /// `0..size` ascending
    Sorted,
    /// `0..size` descending
    ReverseSorted,
    /// Sorted, then `size / 10` random pairwise swaps
    NearlySorted,
}

impl Shape {
    /// Every shape, in sweep order
    pub const ALL: [Shape; 4] = [
        Shape::Random,
        Shape::Sorted,
        Shape::ReverseSorted,
        Shape::NearlySorted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Random => "Random",
            Shape::Sorted => "Sorted",
            Shape::ReverseSorted => "ReverseSorted",
            Shape::NearlySorted => "NearlySorted",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable generated input together with its shape tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i64>,
    shape: Shape,
}

impl Dataset {
    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Fresh, independently owned copy for one trial
    pub fn working_copy(&self) -> Vec<i64> {
        self.values.clone()
    }
}

/// Generate a dataset of `size` elements with the requested shape.
///
/// The generator is passed in explicitly so that seeded sweeps are
/// reproducible. A size of zero is rejected.
pub fn generate<R: Rng + ?Sized>(size: usize, shape: Shape, rng: &mut R) -> Result<Dataset> {
    if size == 0 {
        return Err(BenchError::invalid("dataset size must be positive"));
    }
    let bound = i64::try_from(size)
        .ok()
        .and_then(|s| s.checked_mul(2))
        .ok_or_else(|| BenchError::invalid(format!("dataset size {} is too large", size)))?;

    let values = match shape {
        Shape::Random => (0..size).map(|_| rng.random_range(-bound..bound)).collect(),
        Shape::Sorted => ascending(size),
        Shape::ReverseSorted => ascending(size).into_iter().rev().collect(),
        Shape::NearlySorted => {
            let mut values = ascending(size);
            for _ in 0..size / 10 {
                let i = rng.random_range(0..size);
                let j = rng.random_range(0..size);
                values.swap(i, j);
            }
            values
        }
    };

    Ok(Dataset { values, shape })
}

fn ascending(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}
