// Copyright (c) 2025 the nanotensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for shape validation and tensor construction.

/// Errors that can occur while validating a shape or constructing a tensor.
#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// The shape has no dimensions; tensors require rank ≥ 1.
    #[error("tensor must have at least 1 dimension")]
    NoDimensions,

    /// A dimension with extent 0 was declared. All dims must be > 0.
    #[error("shape dims must be > 0 (axis {axis} has extent 0)")]
    ZeroDim { axis: usize },

    /// The supplied data length does not match the shape's element count.
    #[error("data size does not match shape numel: expected {expected} elements, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// The product of the shape's dims does not fit in `usize`.
    #[error("shape numel overflows usize")]
    NumelOverflow,
}
