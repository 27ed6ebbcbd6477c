// src/utils/error.rs

use thiserror::Error;

/// The primary error type for all operations in the Haar wavelet library.
///
/// Every transform validates its inputs before touching a sample, so an `Err`
/// always means the input was left as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HaarError {
    /// A decomposition needs at least one level.
    #[error("Invalid level count: {levels} (must be at least 1)")]
    InvalidLevels { levels: usize },

    /// The plane cannot be halved `levels` times without a remainder.
    #[error("Dimensions {width}x{height} are not divisible by 2^{levels}")]
    IndivisibleDimensions {
        width: usize,
        height: usize,
        levels: usize,
    },

    /// A plane with zero width or height.
    #[error("Plane is empty")]
    EmptyPlane,

    /// Occurs when buffer or plane dimensions do not match the expected dimensions.
    #[error(
        "Dimension mismatch: expected ({}, {}), but got ({}, {})",
        .expected.0, .expected.1, .actual.0, .actual.1
    )]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Thresholds must be finite and non-negative.
    #[error("Invalid shrinkage threshold: {0}")]
    InvalidThreshold(f32),

    /// Garrote shrinkage divides by the coefficient and squares the threshold;
    /// a zero threshold is rejected up front.
    #[error("Garrote shrinkage requires a threshold greater than zero")]
    ZeroGarrotThreshold,

    /// A sub-band was requested for a level the decomposition does not have.
    #[error("Level {level} out of range (decomposition has {levels} levels)")]
    LevelOutOfRange { level: usize, levels: usize },
}

/// A specialized `Result` type for Haar transform operations.
pub type Result<T> = std::result::Result<T, HaarError>;
