// src/haar/constants.rs

/// Level count used when the caller does not pick one.
pub const DEFAULT_LEVELS: usize = 3;

/// Scale applied to every 2x2 butterfly, in both directions.
pub const HAAR_SCALE: f32 = 0.5;

/// Full-scale value of an 8-bit sample; planes are normalised by this.
pub const SAMPLE_MAX: f32 = 255.0;
