// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! N-dimensional vector implementation.

use crate::errors::NVectorError;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An N-dimensional vector, e.g. `(-1.34, 2.45)` in 2d or `(0.0, -1.2, 14.0)`
/// in 3d.
///
/// The component storage is set at construction and never resized.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NVector {
    coordinates: Vec<f64>,
}

impl NVector {
    /// Creates a new vector from a set of components.
    pub fn new(coordinates: Vec<f64>) -> Self {
        Self { coordinates }
    }

    /// Returns the components of the vector.
    pub fn coords(&self) -> &[f64] {
        &self.coordinates
    }

    /// Returns the dimensionality of the vector.
    pub fn dimensions(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns the Euclidean length of the vector.
    pub fn length(&self) -> f64 {
        self.coordinates
            .iter()
            .map(|c| c * c)
            .sum::<f64>()
            .sqrt()
    }

    /// Component-wise addition of another vector, in place.
    ///
    /// # Errors
    ///
    /// Returns `NVectorError::DimensionMismatch` if the dimensions differ.
    pub fn add(&mut self, other: &Self) -> Result<(), NVectorError> {
        if self.dimensions() != other.dimensions() {
            return Err(NVectorError::DimensionMismatch {
                expected: self.dimensions(),
                got: other.dimensions(),
            });
        }

        for (coord, &other_coord) in self.coordinates.iter_mut().zip(&other.coordinates) {
            *coord += other_coord;
        }

        Ok(())
    }

    /// Component-wise subtraction of another vector, in place.
    ///
    /// The negation is applied to a local copy; `other` is not modified.
    ///
    /// # Errors
    ///
    /// Returns `NVectorError::DimensionMismatch` if the dimensions differ.
    pub fn subtract(&mut self, other: &Self) -> Result<(), NVectorError> {
        let mut negated = other.clone();
        negated.invert();
        self.add(&negated)
    }

    /// Inverts the sign of every component, in place.
    pub fn invert(&mut self) {
        self.multiply(-1.0);
    }

    /// Multiplies every component by a scalar, in place.
    pub fn multiply(&mut self, scalar: f64) {
        for coord in &mut self.coordinates {
            *coord *= scalar;
        }
    }
}

/// The hash is the wrapping sum of the IEEE-754 bit patterns of the
/// components, folded to 32 bits by XOR-ing the high and low halves.
impl Hash for NVector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut bits: u64 = 0;
        for coord in &self.coordinates {
            bits = bits.wrapping_add(coord.to_bits());
        }
        state.write_u32((bits ^ (bits >> 32)) as u32);
    }
}

/// Shows dimensions and components in the form `Nd vector (x1, x2, ..., xn)`.
impl fmt::Display for NVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d vector (", self.dimensions())?;
        for (i, coord) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coord}")?;
        }
        write!(f, ")")
    }
}
