// Copyright (c) 2025 the nanotensor contributors
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # nanotensor
//!
//! A minimal owned tensor container: a fixed-rank, row-major `f32` buffer
//! with explicit shape metadata and validated construction.
//!
//! This crate provides:
//! - [`Tensor`] — an immutable, shape-described flat buffer of `f32`.
//! - [`Shape`] — a validated dimension descriptor (rank ≥ 1, all extents > 0).
//! - [`ShapeError`] — the single error type for all construction paths.
//! - Copying conversions to and from [`ndarray`] arrays of any numeric
//!   element type and layout.
//!
//! # Design Goals
//! - Every construction path validates; an invalid tensor cannot exist.
//! - No aliasing across the `ndarray` boundary — conversions deep-copy in
//!   both directions.
//! - A container, not a compute engine: no arithmetic, no broadcasting, no
//!   views, no mutation after construction.

mod convert;
mod error;
mod shape;
mod tensor;

pub use error::ShapeError;
pub use shape::Shape;
pub use tensor::Tensor;

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Adds two integers. Smoke-test helper for bindings and examples.
pub fn add_ints(a: i32, b: i32) -> i32 {
    a + b
}

/// Returns a fixed greeting confirming the library is linked and callable.
pub fn hello() -> String {
    "nanotensor: ready".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_ints() {
        assert_eq!(add_ints(2, 3), 5);
        assert_eq!(add_ints(-2, 2), 0);
    }

    #[test]
    fn test_hello() {
        assert_eq!(hello(), "nanotensor: ready");
    }

    #[test]
    fn test_version_matches_manifest() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert!(!VERSION.is_empty());
    }
}
