// Copyright (c) 2025 the nanotensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Conversions across the `ndarray` ownership boundary.
//!
//! Both directions perform a full deep copy: a tensor never aliases an
//! `ndarray` buffer and an exported array never aliases a tensor. Imports
//! accept any numeric element type and any memory layout; elements are cast
//! to `f32` and gathered in logical (row-major) order during the copy.

use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn};
use num_traits::AsPrimitive;
use tracing::trace;

use crate::{Shape, ShapeError, Tensor};

impl Tensor {
    /// Exports the tensor as an owned [`ArrayD<f32>`] with the same shape.
    ///
    /// The returned array holds a fresh copy of the data; mutating it has no
    /// effect on the tensor.
    ///
    /// # Examples
    /// ```
    /// use nanotensor::Tensor;
    /// let t = Tensor::from_vec(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let arr = t.to_ndarray();
    /// assert_eq!(arr.shape(), &[2, 2]);
    /// assert_eq!(arr[[1, 0]], 3.0);
    /// ```
    pub fn to_ndarray(&self) -> ArrayD<f32> {
        trace!(shape = %self.shape(), "exporting tensor to ndarray");
        ArrayD::from_shape_vec(IxDyn(self.shape().dims()), self.as_slice().to_vec())
            .expect("tensor invariant: data length equals shape numel")
    }

    /// Imports an `ndarray` of any numeric element type and layout.
    ///
    /// Elements are cast to `f32` (`as`-cast semantics via
    /// [`AsPrimitive`]) and copied in logical order, so the resulting tensor
    /// is row-major regardless of the source array's strides. The source is
    /// not referenced after this call returns.
    ///
    /// # Examples
    /// ```
    /// use nanotensor::Tensor;
    /// let arr = ndarray::arr2(&[[1i32, 2], [3, 4]]);
    /// let t = Tensor::from_ndarray(&arr).unwrap();
    /// assert_eq!(t.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    ///
    /// # Errors
    /// Returns [`ShapeError::NoDimensions`] for rank-0 (scalar) arrays and
    /// [`ShapeError::ZeroDim`] if any axis has length 0.
    pub fn from_ndarray<A, S, D>(array: &ArrayBase<S, D>) -> Result<Self, ShapeError>
    where
        A: AsPrimitive<f32>,
        S: Data<Elem = A>,
        D: Dimension,
    {
        if array.ndim() == 0 {
            return Err(ShapeError::NoDimensions);
        }
        let shape = Shape::new(array.shape().to_vec())?;
        let data: Vec<f32> = array.iter().map(|&v| v.as_()).collect();
        let tensor = Self::new(shape, data)?;
        trace!(shape = %tensor.shape(), "imported ndarray into tensor");
        Ok(tensor)
    }
}
