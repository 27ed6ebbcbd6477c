//! A multi-level 2D Haar wavelet engine for single-channel image planes.
//!
//! The crate turns a grid of `f32` samples into a hierarchy of averages and
//! differences and back, optionally shrinking the difference coefficients on
//! the way back (hard, soft and garrote thresholding).
//!
//! # Quick Start
//!
//! ```
//! use haar_wavelet::{Decomposition, Plane, Shrinkage, ShrinkageParams};
//!
//! let plane = Plane::from_fn(64, 64, |x, y| ((x + y) % 7) as f32 / 6.0);
//!
//! // Three levels of decomposition
//! let dec = Decomposition::new(plane.clone(), 3)?;
//!
//! // Exact reconstruction
//! let restored = dec.reconstruct(&ShrinkageParams::none())?;
//! assert!(restored.max_abs_diff(&plane)? < 1e-5);
//!
//! // Denoise by soft thresholding the detail coefficients
//! let smoothed = dec.reconstruct(&ShrinkageParams::new(Shrinkage::Soft, 0.05))?;
//! assert_eq!(smoothed.dimensions(), (64, 64));
//! # Ok::<(), haar_wavelet::HaarError>(())
//! ```
//!
//! # Features
//!
//! - **Quadrant layout**: coefficients stay in a plane of the input's shape
//! - **Validated inputs**: shapes and thresholds are checked before any work
//! - **Optional parallelism**: Enable `rayon` feature for multi-plane batches
//!
//! Logging goes through the `log` facade; install any logger to see it.

// Core modules
pub mod haar;
pub mod image;
pub mod utils;

// Transform API
pub use haar::{
    Decomposition, Shrinkage, ShrinkageParams, SignMode, TransformParams, forward, forward_planes,
    inverse, inverse_planes, max_levels, shrink_details, transform_roundtrip, validate_levels,
};

// Image types
pub use image::{GrayPixel, Plane, Rect, Subband};

// Error types
pub use utils::error::{HaarError, Result};
