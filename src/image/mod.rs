//! In-memory sample planes and the geometry of the coefficient layout.

pub mod geom;
pub mod plane;

pub use geom::{Rect, Subband, subband_rect};
pub use plane::{GrayPixel, Plane};
