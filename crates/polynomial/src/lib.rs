// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Polynomial Library
//!
//! A dense univariate polynomial with signed integer coefficients and
//! in-place addition and subtraction.
//!
//! ## Features
//!
//! - Coefficients stored in ascending order of degree, with a cached logical
//!   degree that is renormalized after every mutation.
//! - In-place arithmetic that reallocates only when the addend does not fit
//!   in the current coefficient storage.
//! - Structural equality and a hash consistent with it.
//! - Serialization: optional serde support with bincode integration.
//!
//! ## Representation
//!
//! The backing storage may be longer than `degree + 1`; every coefficient
//! above the logical degree is zero. The zero polynomial has degree 0.
//!
//! ## Overflow
//!
//! Coefficient arithmetic uses plain `i64` operations. Overflow panics in
//! debug builds and wraps in release builds; keeping coefficients in range is
//! the caller's responsibility.
//!
//! ## Thread safety
//!
//! `Polynomial` is not internally thread-safe; external synchronization is
//! required for shared instances.

pub mod errors;
pub mod polynomial;

pub use errors::PolynomialError;
pub use polynomial::Polynomial;
