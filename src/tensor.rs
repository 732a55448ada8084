// Copyright (c) 2025 the nanotensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Core tensor container type.

use std::fmt;

use crate::{Shape, ShapeError};

/// An owned, n-dimensional `f32` tensor stored in contiguous memory.
///
/// `Tensor` is a data-holding container, not a computation engine: it has no
/// arithmetic, no views, and no in-place mutation. Once constructed it is
/// immutable, and `data.len() == shape numel` holds for its whole lifetime.
///
/// # Memory Layout
/// Data is stored in row-major (C) order as a flat `Vec<f32>`; the last axis
/// varies fastest.
#[derive(Debug, Clone)]
pub struct Tensor {
    shape: Shape,
    data: Vec<f32>,
}

impl Tensor {
    /// Creates a tensor from a validated shape and a flat data buffer.
    ///
    /// Both arguments are moved into the tensor; nothing is copied.
    ///
    /// # Examples
    /// ```
    /// use nanotensor::{Shape, Tensor};
    /// let t = Tensor::new(Shape::new(vec![2, 2]).unwrap(), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(t.numel().unwrap(), 4);
    /// ```
    ///
    /// # Errors
    /// Returns [`ShapeError::SizeMismatch`] if `data.len()` differs from the
    /// shape's element count.
    pub fn new(shape: Shape, data: Vec<f32>) -> Result<Self, ShapeError> {
        let expected = shape.num_elements()?;
        if data.len() != expected {
            return Err(ShapeError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    /// Creates a tensor from raw dimensions and a flat data buffer.
    ///
    /// Dimensions are validated before the data length is checked, so a bad
    /// shape wins over a bad length when both are wrong.
    ///
    /// # Examples
    /// ```
    /// use nanotensor::Tensor;
    /// let t = Tensor::from_vec(vec![2, 3], vec![0.0; 6]).unwrap();
    /// assert_eq!(t.shape().dims(), &[2, 3]);
    /// assert!(Tensor::from_vec(vec![2, 0], vec![1.0]).is_err());
    /// ```
    pub fn from_vec(dims: Vec<usize>, data: Vec<f32>) -> Result<Self, ShapeError> {
        let shape = Shape::new(dims)?;
        Self::new(shape, data)
    }

    /// Returns the tensor's shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the total number of elements.
    ///
    /// Recomputed from the shape on every call; see [`Shape::num_elements`].
    pub fn numel(&self) -> Result<usize, ShapeError> {
        self.shape.num_elements()
    }

    /// Returns the flat data in row-major order.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor(shape={}, dtype=float32)", self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let t = Tensor::new(Shape::new(vec![2, 3]).unwrap(), vec![0.0; 6]).unwrap();
        assert_eq!(t.shape().dims(), &[2, 3]);
        assert_eq!(t.numel().unwrap(), 6);
        assert_eq!(t.as_slice().len(), 6);
    }

    #[test]
    fn test_size_mismatch() {
        let result = Tensor::from_vec(vec![2, 2], vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(ShapeError::SizeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_zero_dim_wins_over_length() {
        // Shape validation runs before the length check.
        let result = Tensor::from_vec(vec![2, 0], vec![1.0]);
        assert!(matches!(result, Err(ShapeError::ZeroDim { axis: 1 })));
    }

    #[test]
    fn test_empty_dims_rejected() {
        assert!(matches!(
            Tensor::from_vec(vec![], vec![]),
            Err(ShapeError::NoDimensions)
        ));
    }

    #[test]
    fn test_numel_recomputed() {
        let t = Tensor::from_vec(vec![4], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(t.numel().unwrap(), 4);
        assert_eq!(t.numel().unwrap(), 4);
    }

    #[test]
    fn test_display() {
        let t = Tensor::from_vec(vec![2, 3], vec![0.0; 6]).unwrap();
        assert_eq!(format!("{t}"), "Tensor(shape=[2, 3], dtype=float32)");
    }

    #[test]
    fn test_display_rank_1() {
        let t = Tensor::from_vec(vec![4], vec![0.0; 4]).unwrap();
        assert_eq!(format!("{t}"), "Tensor(shape=[4], dtype=float32)");
    }

    #[test]
    fn test_clone_is_independent() {
        let t = Tensor::from_vec(vec![2], vec![1.0, 2.0]).unwrap();
        let u = t.clone();
        assert_eq!(t.as_slice(), u.as_slice());
    }
}
