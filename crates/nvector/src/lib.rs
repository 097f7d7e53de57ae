// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # NVector Library
//!
//! An N-dimensional vector of `f64` components with in-place component-wise
//! arithmetic. The dimensionality is fixed at construction; binary operations
//! on vectors of different dimensions fail with a recoverable error instead of
//! indexing out of range.
//!
//! `NVector` is not internally thread-safe; external synchronization is
//! required for shared instances.

pub mod errors;
pub mod nvector;

pub use errors::NVectorError;
pub use nvector::NVector;
