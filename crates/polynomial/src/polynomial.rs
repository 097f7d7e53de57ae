// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Polynomial arithmetic implementation.

use crate::errors::PolynomialError;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A dense polynomial represented by its coefficients in ascending order of degree.
///
/// Index `i` of the coefficient storage holds the coefficient of `x^i`:
/// `a_0 + a_1 * x + a_2 * x^2 + ... + a_n * x^n`
///
/// The storage may be longer than `degree + 1`; every coefficient above the
/// cached logical degree is zero. The degree is renormalized after every
/// mutating operation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    /// Coefficients in ascending order (constant term first).
    coefficients: Vec<i64>,
    /// Highest index with a non-zero coefficient, or 0.
    degree: usize,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;

        for i in (1..=self.degree).rev() {
            let coeff = self.coefficients[i];
            if coeff == 0 {
                continue;
            }
            if !first {
                write!(f, "+")?;
            }
            write!(f, "{coeff}x^{i}")?;
            first = false;
        }

        let constant = self.coefficients[0];
        if constant != 0 {
            if !first {
                write!(f, "+")?;
            }
            write!(f, "{constant}")?;
            first = false;
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Creates a new polynomial from a slice of coefficients.
    ///
    /// The slice is copied; the caller's storage is never aliased. The degree
    /// is computed by scanning from the top index downward for the first
    /// non-zero coefficient.
    ///
    /// # Arguments
    ///
    /// * `coefficients` - Coefficients in ascending order of degree.
    ///
    /// # Errors
    ///
    /// Returns `PolynomialError::InvalidPolynomial` if the slice is empty.
    pub fn new(coefficients: &[i64]) -> Result<Self, PolynomialError> {
        if coefficients.is_empty() {
            return Err(PolynomialError::InvalidPolynomial {
                message: "coefficient sequence must not be empty".to_string(),
            });
        }

        let coefficients = coefficients.to_vec();
        let degree = Self::renormalize(&coefficients, coefficients.len() - 1);

        Ok(Self {
            coefficients,
            degree,
        })
    }

    /// Creates the zero polynomial.
    pub fn zero() -> Self {
        Self {
            coefficients: vec![0],
            degree: 0,
        }
    }

    /// Creates a constant polynomial.
    ///
    /// # Arguments
    ///
    /// * `constant` - The constant value.
    pub fn constant(constant: i64) -> Self {
        Self {
            coefficients: vec![constant],
            degree: 0,
        }
    }

    /// Returns the backing coefficient storage.
    ///
    /// The storage may extend past the logical degree; trailing entries are
    /// always zero.
    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of a zero polynomial is 0.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.degree == 0 && self.coefficients[0] == 0
    }

    /// Returns the coefficient of the highest power of x.
    pub fn leading_coefficient(&self) -> i64 {
        self.coefficients[self.degree]
    }

    /// Adds another polynomial to `self`, in place.
    ///
    /// Storage is reallocated only when the current storage cannot hold
    /// `other`'s leading term; accumulating same-or-lower-degree addends into
    /// an oversized polynomial never reallocates. `other` is not modified.
    ///
    /// The degree is renormalized afterwards: when both operands had the same
    /// degree the leading terms may cancel, so the new degree is found by
    /// rescanning downward; otherwise it is the larger of the two degrees.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to add to `self`.
    ///
    /// # Returns
    ///
    /// The degree of the resulting polynomial.
    pub fn add(&mut self, other: &Self) -> usize {
        let prev_degree = self.degree;

        if self.coefficients.len() <= other.degree {
            self.coefficients.resize(other.degree + 1, 0);
        }

        for (i, &coeff) in other.coefficients[..=other.degree].iter().enumerate() {
            self.coefficients[i] += coeff;
        }

        self.degree = if prev_degree == other.degree {
            // Leading terms may have cancelled.
            Self::renormalize(&self.coefficients, prev_degree)
        } else {
            prev_degree.max(other.degree)
        };

        self.degree
    }

    /// Subtracts another polynomial from `self`, in place.
    ///
    /// Subtraction is the addition of the negative. The negation is a local
    /// copy; `other` is not modified.
    ///
    /// # Arguments
    ///
    /// * `other` - A reference to the polynomial to subtract from `self`.
    ///
    /// # Returns
    ///
    /// The degree of the resulting polynomial.
    pub fn subtract(&mut self, other: &Self) -> usize {
        self.add(&other.neg())
    }

    /// Returns a fresh polynomial with all coefficients negated.
    ///
    /// The result is truncated to `degree + 1` coefficients.
    pub fn neg(&self) -> Self {
        Self {
            coefficients: self.coefficients[..=self.degree].iter().map(|c| -c).collect(),
            degree: self.degree,
        }
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to evaluate the polynomial.
    pub fn evaluate(&self, x: i64) -> i64 {
        self.coefficients[..=self.degree]
            .iter()
            .rev()
            .fold(0, |acc, &coeff| acc * x + coeff)
    }

    /// Finds the highest index at or below `upper` holding a non-zero
    /// coefficient, or 0.
    fn renormalize(coefficients: &[i64], upper: usize) -> usize {
        let mut degree = upper;
        while degree > 0 && coefficients[degree] == 0 {
            degree -= 1;
        }
        degree
    }
}

/// Two polynomials are equal if they have the same degree and all
/// coefficients up to and including the degree are equal.
///
/// Coefficients above the degree are zero by invariant, so differing storage
/// lengths do not affect equality.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.degree == other.degree
            && self.coefficients[..=self.degree] == other.coefficients[..=other.degree]
    }
}

impl Eq for Polynomial {}

/// The hash is the wrapping sum of the products of the coefficients and their
/// corresponding power of x, over indices `0..=degree`.
impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sum: i64 = 0;
        for (i, &coeff) in self.coefficients[..=self.degree].iter().enumerate() {
            sum = sum.wrapping_add((i as i64).wrapping_mul(coeff));
        }
        state.write_i64(sum);
    }
}
