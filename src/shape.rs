// Copyright (c) 2025 the nanotensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tensor shape descriptors and dimension utilities.

use std::fmt;

use crate::ShapeError;

/// Describes the dimensionality of a [`crate::Tensor`].
///
/// Shapes are validated when created and immutable afterwards: the rank is
/// at least 1 and every extent is at least 1. Serde round-trips go through
/// the same validation, so a deserialized `Shape` upholds the same
/// invariants as a constructed one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Shape {
    dims: Vec<usize>,
}

impl Shape {
    /// Creates a new shape from the given dimensions.
    ///
    /// # Examples
    /// ```
    /// use nanotensor::Shape;
    /// let s = Shape::new(vec![2, 3, 4]).unwrap();
    /// assert_eq!(s.rank(), 3);
    /// assert_eq!(s.num_elements().unwrap(), 24);
    /// ```
    ///
    /// # Errors
    /// Returns [`ShapeError::NoDimensions`] if `dims` is empty and
    /// [`ShapeError::ZeroDim`] if any extent is 0.
    pub fn new(dims: Vec<usize>) -> Result<Self, ShapeError> {
        checked_numel(&dims)?;
        Ok(Self { dims })
    }

    /// Returns the number of dimensions (rank).
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Returns the dimensions as a slice.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Returns the extent of a specific dimension, or `None` if out of bounds.
    pub fn dim(&self, index: usize) -> Option<usize> {
        self.dims.get(index).copied()
    }

    /// Returns the total number of elements.
    ///
    /// The product is recomputed on every call rather than cached, and the
    /// extents are re-validated while multiplying. For a shape that came out
    /// of [`Shape::new`] the error paths are unreachable.
    pub fn num_elements(&self) -> Result<usize, ShapeError> {
        checked_numel(&self.dims)
    }
}

/// Validates `dims` and computes the element count in one pass.
///
/// Rejects an empty dim list, any extent of 0, and products that overflow
/// `usize`.
fn checked_numel(dims: &[usize]) -> Result<usize, ShapeError> {
    if dims.is_empty() {
        return Err(ShapeError::NoDimensions);
    }
    let mut numel = 1usize;
    for (axis, &dim) in dims.iter().enumerate() {
        if dim == 0 {
            return Err(ShapeError::ZeroDim { axis });
        }
        numel = numel.checked_mul(dim).ok_or(ShapeError::NumelOverflow)?;
    }
    Ok(numel)
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

/// Convenience: `Shape::try_from(vec![2, 3])`.
impl TryFrom<Vec<usize>> for Shape {
    type Error = ShapeError;

    fn try_from(dims: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(dims)
    }
}

impl From<Shape> for Vec<usize> {
    fn from(shape: Shape) -> Self {
        shape.dims
    }
}
