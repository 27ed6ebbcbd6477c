// src/haar/pipeline.rs

//! Per-call transform settings and operations over several planes at once,
//! such as the channels of one image.

use log::debug;

use super::constants::DEFAULT_LEVELS;
use super::shrink::ShrinkageParams;
use super::transform;
use crate::image::plane::Plane;
use crate::utils::error::{HaarError, Result};

/// Level count and shrinkage for a forward/inverse pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformParams {
    pub levels: usize,
    pub shrinkage: ShrinkageParams,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            levels: DEFAULT_LEVELS,
            shrinkage: ShrinkageParams::none(),
        }
    }
}

impl TransformParams {
    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_shrinkage(mut self, shrinkage: ShrinkageParams) -> Self {
        self.shrinkage = shrinkage;
        self
    }
}

/// Forward transform followed by a shrinking reconstruction.
pub fn transform_roundtrip(plane: Plane, params: &TransformParams) -> Result<Plane> {
    params.shrinkage.validate()?;
    let coeffs = transform::forward(plane, params.levels)?;
    transform::inverse(coeffs, params.levels, &params.shrinkage)
}

/// Forward transform of every plane. All planes must share dimensions; they
/// are validated before any is transformed.
pub fn forward_planes(planes: Vec<Plane>, levels: usize) -> Result<Vec<Plane>> {
    validate_batch(&planes, levels)?;
    debug!("forward_planes: {} planes", planes.len());
    map_planes(planes, |plane| transform::forward(plane, levels))
}

/// Inverse transform of every coefficient plane with the same shrinkage.
pub fn inverse_planes(
    planes: Vec<Plane>,
    levels: usize,
    shrinkage: &ShrinkageParams,
) -> Result<Vec<Plane>> {
    validate_batch(&planes, levels)?;
    shrinkage.validate()?;
    debug!("inverse_planes: {} planes", planes.len());
    map_planes(planes, |plane| transform::inverse(plane, levels, shrinkage))
}

fn validate_batch(planes: &[Plane], levels: usize) -> Result<()> {
    let Some(first) = planes.first() else {
        return Ok(());
    };
    let (width, height) = first.dimensions();
    transform::validate_levels(width, height, levels)?;
    for plane in &planes[1..] {
        if plane.dimensions() != (width, height) {
            return Err(HaarError::DimensionMismatch {
                expected: (width, height),
                actual: plane.dimensions(),
            });
        }
    }
    Ok(())
}

#[cfg(feature = "rayon")]
fn map_planes<F>(planes: Vec<Plane>, f: F) -> Result<Vec<Plane>>
where
    F: Fn(Plane) -> Result<Plane> + Sync + Send,
{
    use rayon::prelude::*;
    planes.into_par_iter().map(f).collect()
}

#[cfg(not(feature = "rayon"))]
fn map_planes<F>(planes: Vec<Plane>, f: F) -> Result<Vec<Plane>>
where
    F: Fn(Plane) -> Result<Plane>,
{
    planes.into_iter().map(f).collect()
}
