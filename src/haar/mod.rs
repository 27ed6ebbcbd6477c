// src/haar/mod.rs

//! Multi-level 2D Haar wavelet transform
//!
//! Forward decomposition, inverse reconstruction, and the shrinkage rules
//! applied to detail coefficients on the way back.

pub mod constants;
pub mod decomposition;
pub mod pipeline;
pub mod shrink;
pub mod transform;


// Re-export commonly used types and functions
pub use constants::*;
pub use decomposition::Decomposition;
pub use pipeline::{TransformParams, forward_planes, inverse_planes, transform_roundtrip};
pub use shrink::{Shrinkage, ShrinkageParams, SignMode};
pub use transform::{forward, inverse, max_levels, shrink_details, validate_levels};
