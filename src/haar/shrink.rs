// src/haar/shrink.rs

//! Coefficient shrinkage applied to detail coefficients during reconstruction.
//!
//! | Policy   | `abs(d) <= T` | `abs(d) > T`          |
//! |----------|---------------|-----------------------|
//! | `None`   | `d`           | `d`                   |
//! | `Hard`   | `0`           | `d`                   |
//! | `Soft`   | `0`           | `sign(d) (abs(d) - T)`|
//! | `Garrot` | `0`           | `d - T^2 / d`         |

use crate::utils::error::{HaarError, Result};

/// The shrinkage rule applied to detail coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Shrinkage {
    /// Coefficients pass through untouched.
    #[default]
    None,
    /// Zero below the threshold, keep as-is above it.
    Hard,
    /// Zero below the threshold, pull toward zero by `T` above it.
    Soft,
    /// Non-negative garrote: zero below, `d - T^2/d` above.
    Garrot,
}

/// How `Soft` shrinkage picks the sign of a surviving coefficient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SignMode {
    /// `sign(d)` is `-1`, `0` or `1`.
    #[default]
    Symmetric,
    /// Every nonzero `d` gets `+1`, so negative coefficients come out
    /// positive. Matches output produced by older tooling.
    Legacy,
}

impl SignMode {
    #[inline]
    fn sign(self, d: f32) -> f32 {
        if d == 0.0 {
            0.0
        } else {
            match self {
                SignMode::Symmetric if d < 0.0 => -1.0,
                _ => 1.0,
            }
        }
    }
}

#[inline]
pub fn hard_shrink(d: f32, t: f32) -> f32 {
    if d.abs() > t { d } else { 0.0 }
}

#[inline]
pub fn soft_shrink(d: f32, t: f32, sign: SignMode) -> f32 {
    if d.abs() > t {
        sign.sign(d) * (d.abs() - t)
    } else {
        0.0
    }
}

/// Garrote shrinkage. Only divides when `|d| > t`, so `d` is nonzero there.
#[inline]
pub fn garrot_shrink(d: f32, t: f32) -> f32 {
    if d.abs() > t { d - (t * t) / d } else { 0.0 }
}

impl Shrinkage {
    /// Evaluates the rule for one coefficient.
    #[inline]
    pub fn apply(self, d: f32, threshold: f32, sign: SignMode) -> f32 {
        match self {
            Shrinkage::None => d,
            Shrinkage::Hard => hard_shrink(d, threshold),
            Shrinkage::Soft => soft_shrink(d, threshold, sign),
            Shrinkage::Garrot => garrot_shrink(d, threshold),
        }
    }
}

/// A shrinkage rule together with its threshold, applied uniformly to every
/// detail coefficient at every level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShrinkageParams {
    pub policy: Shrinkage,
    pub threshold: f32,
    pub sign: SignMode,
}

impl Default for ShrinkageParams {
    fn default() -> Self {
        Self::none()
    }
}

impl ShrinkageParams {
    /// No shrinkage: reconstruction is the exact inverse of the forward pass.
    pub fn none() -> Self {
        Self {
            policy: Shrinkage::None,
            threshold: 0.0,
            sign: SignMode::Symmetric,
        }
    }

    pub fn new(policy: Shrinkage, threshold: f32) -> Self {
        Self {
            policy,
            threshold,
            sign: SignMode::Symmetric,
        }
    }

    pub fn with_sign(mut self, sign: SignMode) -> Self {
        self.sign = sign;
        self
    }

    /// Rejects negative or non-finite thresholds, and a zero threshold for
    /// garrote shrinkage.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(HaarError::InvalidThreshold(self.threshold));
        }
        if self.policy == Shrinkage::Garrot && self.threshold == 0.0 {
            return Err(HaarError::ZeroGarrotThreshold);
        }
        Ok(())
    }

    /// True when the rule cannot change any coefficient.
    pub fn is_identity(&self) -> bool {
        self.policy == Shrinkage::None
    }

    #[inline]
    pub fn shrink(&self, d: f32) -> f32 {
        self.policy.apply(d, self.threshold, self.sign)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_identity() {
        for d in [-3.0, -0.1, 0.0, 0.1, 3.0] {
            assert_eq!(Shrinkage::None.apply(d, 1.0, SignMode::Symmetric), d);
        }
    }

    #[test]
    fn test_hard_gate() {
        assert_eq!(hard_shrink(1.0, 1.0), 0.0);
        assert_eq!(hard_shrink(-1.0, 1.0), 0.0);
        assert_eq!(hard_shrink(1.5, 1.0), 1.5);
        assert_eq!(hard_shrink(-1.5, 1.0), -1.5);
    }

    #[test]
    fn test_soft_symmetric() {
        assert_eq!(soft_shrink(3.0, 1.0, SignMode::Symmetric), 2.0);
        assert_eq!(soft_shrink(-3.0, 1.0, SignMode::Symmetric), -2.0);
        assert_eq!(soft_shrink(0.5, 1.0, SignMode::Symmetric), 0.0);
    }

    #[test]
    fn test_soft_legacy_sign() {
        // Negative inputs come out positive.
        assert_eq!(soft_shrink(-3.0, 1.0, SignMode::Legacy), 2.0);
        assert_eq!(soft_shrink(3.0, 1.0, SignMode::Legacy), 2.0);
        assert_eq!(SignMode::Legacy.sign(0.0), 0.0);
    }

    #[test]
    fn test_garrot() {
        assert_eq!(garrot_shrink(2.0, 1.0), 1.5);
        assert_eq!(garrot_shrink(-2.0, 1.0), -1.5);
        assert_eq!(garrot_shrink(1.0, 1.0), 0.0);
        assert_eq!(garrot_shrink(0.0, 0.5), 0.0);
    }

    #[test]
    fn test_garrot_jumps_at_threshold() {
        let t = 1.0;
        let above = garrot_shrink(t + 1e-3, t);
        assert_eq!(garrot_shrink(t, t), 0.0);
        assert!(above > 0.0 && above < 0.01);
        // far from the threshold the rule approaches the identity
        let far = garrot_shrink(1000.0, t);
        assert!((far - 1000.0).abs() < 0.01);
    }

    #[test]
    fn test_validate() {
        assert!(ShrinkageParams::none().validate().is_ok());
        assert!(ShrinkageParams::new(Shrinkage::Hard, 0.0).validate().is_ok());
        assert_eq!(
            ShrinkageParams::new(Shrinkage::Garrot, 0.0).validate(),
            Err(HaarError::ZeroGarrotThreshold)
        );
        assert_eq!(
            ShrinkageParams::new(Shrinkage::Soft, -1.0).validate(),
            Err(HaarError::InvalidThreshold(-1.0))
        );
        assert!(matches!(
            ShrinkageParams::new(Shrinkage::Soft, f32::NAN).validate(),
            Err(HaarError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_params_dispatch() {
        let params = ShrinkageParams::new(Shrinkage::Soft, 0.5).with_sign(SignMode::Legacy);
        assert_eq!(params.shrink(-1.5), 1.0);
        assert!(!params.is_identity());
        assert!(ShrinkageParams::default().is_identity());
    }
}
