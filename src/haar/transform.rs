// src/haar/transform.rs

//! Multi-level 2D Haar transform.
//!
//! Each level maps every 2x2 neighbourhood `(a, b, c, d)` (top-left,
//! top-right, bottom-left, bottom-right) of the active region to one
//! approximation and three detail coefficients, scaled by `0.5`:
//!
//! ```text
//! approx     = 0.5 (a + b + c + d)
//! horizontal = 0.5 (a + c - b - d)
//! vertical   = 0.5 (a + b - c - d)
//! diagonal   = 0.5 (a - b - c + d)
//! ```
//!
//! The four outputs go to the quadrant layout of [`crate::image::geom`]. Each
//! call owns exactly two buffers, the plane it was handed and one scratch
//! plane; level transitions copy the active rectangle between them.

use log::{debug, trace};

use super::constants::HAAR_SCALE;
use super::shrink::ShrinkageParams;
use crate::image::geom::{Rect, Subband, active_rect, subband_rect};
use crate::image::plane::Plane;
use crate::utils::error::{HaarError, Result};

/// Largest level count a `width x height` plane supports: both dimensions
/// must stay divisible by `2^levels`.
pub fn max_levels(width: usize, height: usize) -> usize {
    if width == 0 || height == 0 {
        return 0;
    }
    width.trailing_zeros().min(height.trailing_zeros()) as usize
}

/// Checks that a `width x height` plane can be decomposed `levels` times.
pub fn validate_levels(width: usize, height: usize, levels: usize) -> Result<()> {
    if levels == 0 {
        return Err(HaarError::InvalidLevels { levels });
    }
    if width == 0 || height == 0 {
        return Err(HaarError::EmptyPlane);
    }
    if levels > max_levels(width, height) {
        return Err(HaarError::IndivisibleDimensions {
            width,
            height,
            levels,
        });
    }
    Ok(())
}

/// Forward transform of `plane` over `levels` levels.
///
/// The returned plane has the input's dimensions and holds the coefficients
/// in the quadrant layout. Fails without touching the samples if the plane
/// cannot be halved `levels` times.
pub fn forward(plane: Plane, levels: usize) -> Result<Plane> {
    let (width, height) = plane.dimensions();
    validate_levels(width, height, levels)?;
    debug!("Haar forward: {}x{}, {} levels", width, height, levels);

    let mut src = plane;
    let mut dst = Plane::new(width, height);
    for level in 1..=levels {
        forward_level(&src, &mut dst, level);
        let active = active_rect(width, height, level);
        trace!("forward level {}: active {}x{}", level, active.width, active.height);
        src.copy_region_from(&dst, active)?;
    }
    Ok(src)
}

/// One forward level: reads the 2x2 neighbourhoods of `src`'s active region
/// and writes the four quadrants of `level` into `dst`.
///
/// Nothing outside the level's active region is read or written.
pub fn forward_level(src: &Plane, dst: &mut Plane, level: usize) {
    let (width, height) = src.dimensions();
    let hw = width >> level;
    let hh = height >> level;

    for y in 0..hh {
        let top = src.row(2 * y);
        let bottom = src.row(2 * y + 1);
        for x in 0..hw {
            let a = top[2 * x];
            let b = top[2 * x + 1];
            let c = bottom[2 * x];
            let d = bottom[2 * x + 1];

            dst.set(x, y, (a + b + c + d) * HAAR_SCALE);
            dst.set(x + hw, y, (a + c - b - d) * HAAR_SCALE);
            dst.set(x, y + hh, (a + b - c - d) * HAAR_SCALE);
            dst.set(x + hw, y + hh, (a - b - c + d) * HAAR_SCALE);
        }
    }
}

/// Inverse transform of a `levels`-level coefficient plane.
///
/// Levels are undone coarsest first. Before recombination each detail
/// coefficient goes through `shrinkage`; approximation coefficients never do.
/// With [`ShrinkageParams::none`] this is the exact inverse of [`forward`] up
/// to rounding.
pub fn inverse(coeffs: Plane, levels: usize, shrinkage: &ShrinkageParams) -> Result<Plane> {
    let (width, height) = coeffs.dimensions();
    validate_levels(width, height, levels)?;
    shrinkage.validate()?;
    debug!(
        "Haar inverse: {}x{}, {} levels, {:?} shrinkage (T = {})",
        width, height, levels, shrinkage.policy, shrinkage.threshold
    );

    let mut work = coeffs;
    let mut out = Plane::new(width, height);
    for level in (1..=levels).rev() {
        let zeroed = inverse_level(&work, &mut out, level, shrinkage);
        let active = active_rect(width, height, level);
        trace!(
            "inverse level {}: active {}x{}, {} details zeroed",
            level, active.width, active.height, zeroed
        );
        work.copy_region_from(&out, active)?;
    }
    Ok(work)
}

/// One inverse level: reads the four quadrants of `level` from `src` and
/// writes the reconstructed 2x2 neighbourhoods into `dst`.
///
/// Returns how many nonzero detail coefficients the shrinkage set to zero.
pub fn inverse_level(
    src: &Plane,
    dst: &mut Plane,
    level: usize,
    shrinkage: &ShrinkageParams,
) -> usize {
    let (width, height) = src.dimensions();
    let hw = width >> level;
    let hh = height >> level;
    let mut zeroed = 0;

    for y in 0..hh {
        for x in 0..hw {
            let c = src.get(x, y);
            let mut details = [src.get(x + hw, y), src.get(x, y + hh), src.get(x + hw, y + hh)];
            if !shrinkage.is_identity() {
                for d in details.iter_mut() {
                    let shrunk = shrinkage.shrink(*d);
                    if shrunk == 0.0 && *d != 0.0 {
                        zeroed += 1;
                    }
                    *d = shrunk;
                }
            }
            let [dh, dv, dd] = details;

            dst.set(2 * x, 2 * y, (c + dh + dv + dd) * HAAR_SCALE);
            dst.set(2 * x + 1, 2 * y, (c - dh + dv - dd) * HAAR_SCALE);
            dst.set(2 * x, 2 * y + 1, (c + dh - dv - dd) * HAAR_SCALE);
            dst.set(2 * x + 1, 2 * y + 1, (c - dh - dv + dd) * HAAR_SCALE);
        }
    }
    zeroed
}

/// Applies `shrinkage` to every detail quadrant of a `levels`-level
/// coefficient plane in place. Returns the number of coefficients zeroed.
pub fn shrink_details(coeffs: &mut Plane, levels: usize, shrinkage: &ShrinkageParams) -> Result<usize> {
    let (width, height) = coeffs.dimensions();
    validate_levels(width, height, levels)?;
    shrinkage.validate()?;
    if shrinkage.is_identity() {
        return Ok(0);
    }

    let mut zeroed = 0;
    for level in 1..=levels {
        for subband in Subband::DETAILS {
            zeroed += shrink_rect(coeffs, subband_rect(width, height, level, subband), shrinkage);
        }
    }
    debug!("shrink_details: {} coefficients zeroed over {} levels", zeroed, levels);
    Ok(zeroed)
}

fn shrink_rect(plane: &mut Plane, rect: Rect, shrinkage: &ShrinkageParams) -> usize {
    let mut zeroed = 0;
    for y in rect.y..rect.y_max() {
        for d in &mut plane.row_mut(y)[rect.x..rect.x_max()] {
            let shrunk = shrinkage.shrink(*d);
            if shrunk == 0.0 && *d != 0.0 {
                zeroed += 1;
            }
            *d = shrunk;
        }
    }
    zeroed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haar::shrink::Shrinkage;

    #[test]
    fn test_max_levels() {
        assert_eq!(max_levels(0, 8), 0);
        assert_eq!(max_levels(1, 1), 0);
        assert_eq!(max_levels(8, 8), 3);
        assert_eq!(max_levels(12, 32), 2);
        assert_eq!(max_levels(640, 480), 5);
    }

    #[test]
    fn test_validate_levels() {
        assert_eq!(validate_levels(8, 8, 0), Err(HaarError::InvalidLevels { levels: 0 }));
        assert_eq!(validate_levels(0, 8, 1), Err(HaarError::EmptyPlane));
        assert_eq!(
            validate_levels(6, 8, 2),
            Err(HaarError::IndivisibleDimensions {
                width: 6,
                height: 8,
                levels: 2
            })
        );
        assert!(validate_levels(6, 8, 1).is_ok());
        assert!(validate_levels(8, 8, 200).is_err());
    }

    #[test]
    fn test_forward_level_writes_only_active_region() {
        let src = Plane::from_pixel(8, 8, 1.0);
        let mut dst = Plane::from_pixel(8, 8, -7.0);
        forward_level(&src, &mut dst, 2);
        assert_eq!(dst.get(0, 0), 2.0);
        assert_eq!(dst.get(3, 3), 0.0);
        // outside the 4x4 active region
        assert_eq!(dst.get(4, 0), -7.0);
        assert_eq!(dst.get(0, 4), -7.0);
    }

    #[test]
    fn test_forward_rejects_bad_shape_without_consuming_samples() {
        let plane = Plane::new(6, 6);
        assert!(forward(plane.clone(), 2).is_err());
        assert!(forward(plane, 1).is_ok());
    }

    #[test]
    fn test_inverse_rejects_zero_garrot() {
        let coeffs = Plane::new(4, 4);
        let params = ShrinkageParams::new(Shrinkage::Garrot, 0.0);
        assert_eq!(inverse(coeffs, 1, &params), Err(HaarError::ZeroGarrotThreshold));
    }

    #[test]
    fn test_shrink_details_skips_approximation() {
        let mut coeffs = Plane::from_pixel(4, 4, 0.25);
        let params = ShrinkageParams::new(Shrinkage::Hard, 0.5);
        let zeroed = shrink_details(&mut coeffs, 1, &params).unwrap();
        assert_eq!(zeroed, 12);
        assert_eq!(coeffs.crop(Rect::new(0, 0, 2, 2)).unwrap().as_slice(), &[0.25; 4]);
        assert_eq!(coeffs.get(3, 3), 0.0);
    }
}
