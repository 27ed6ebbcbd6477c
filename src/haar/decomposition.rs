// src/haar/decomposition.rs

use super::shrink::ShrinkageParams;
use super::transform;
use crate::image::geom::{Subband, subband_rect};
use crate::image::plane::Plane;
use crate::utils::error::{HaarError, Result};

/// A coefficient plane tied to the level count that produced it.
///
/// Carrying the level count alongside the coefficients means reconstruction
/// can never be asked to undo a different number of levels than were applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Decomposition {
    coefficients: Plane,
    levels: usize,
}

impl Decomposition {
    /// Runs the forward transform on `plane`.
    pub fn new(plane: Plane, levels: usize) -> Result<Self> {
        let coefficients = transform::forward(plane, levels)?;
        Ok(Self {
            coefficients,
            levels,
        })
    }

    /// Adopts a coefficient grid produced elsewhere, checking only that its
    /// shape supports `levels` levels.
    pub fn from_coefficients(coefficients: Plane, levels: usize) -> Result<Self> {
        let (width, height) = coefficients.dimensions();
        transform::validate_levels(width, height, levels)?;
        Ok(Self {
            coefficients,
            levels,
        })
    }

    pub fn levels(&self) -> usize {
        self.levels
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.coefficients.dimensions()
    }

    pub fn coefficients(&self) -> &Plane {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Plane {
        self.coefficients
    }

    /// Copies one quadrant of `level` (1-based, finest first) out into its
    /// own plane.
    pub fn subband(&self, level: usize, subband: Subband) -> Result<Plane> {
        if level == 0 || level > self.levels {
            return Err(HaarError::LevelOutOfRange {
                level,
                levels: self.levels,
            });
        }
        let (width, height) = self.dimensions();
        self.coefficients.crop(subband_rect(width, height, level, subband))
    }

    /// Shrinks the stored detail coefficients in place, returning how many
    /// were set to zero.
    pub fn shrink_details(&mut self, shrinkage: &ShrinkageParams) -> Result<usize> {
        transform::shrink_details(&mut self.coefficients, self.levels, shrinkage)
    }

    /// Reconstructs the sample plane, leaving the coefficients in place.
    pub fn reconstruct(&self, shrinkage: &ShrinkageParams) -> Result<Plane> {
        transform::inverse(self.coefficients.clone(), self.levels, shrinkage)
    }

    pub fn into_reconstructed(self, shrinkage: &ShrinkageParams) -> Result<Plane> {
        transform::inverse(self.coefficients, self.levels, shrinkage)
    }
}
