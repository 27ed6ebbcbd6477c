// src/image/geom.rs

//! Rectangles and the quadrant layout shared by the forward and inverse
//! transforms.
//!
//! At level `k` (1-based, finest first) the active region of a `W x H` plane
//! is split into four `(W >> k) x (H >> k)` blocks anchored at the origin:
//!
//! ```text
//! +----------------+----------------+
//! | Approximation  | Horizontal     |
//! |                | (+hw, 0)       |
//! +----------------+----------------+
//! | Vertical       | Diagonal       |
//! | (0, +hh)       | (+hw, +hh)     |
//! +----------------+----------------+
//! ```
//!
//! The approximation block of level `k` is the whole active region of
//! level `k + 1`.

/// An axis-aligned rectangle inside a plane, in sample coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle anchored at the origin.
    pub fn at_origin(width: usize, height: usize) -> Self {
        Rect::new(0, 0, width, height)
    }

    /// Returns the x-coordinate of the right edge (`x + width`).
    pub fn x_max(&self) -> usize {
        self.x + self.width
    }

    /// Returns the y-coordinate of the bottom edge (`y + height`).
    pub fn y_max(&self) -> usize {
        self.y + self.height
    }

    /// Checks if the rectangle has zero width or height.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Checks if a point is contained within the rectangle's bounds.
    /// The right and bottom edges are exclusive.
    pub fn contains(&self, px: usize, py: usize) -> bool {
        !self.is_empty() && px >= self.x && px < self.x_max() && py >= self.y && py < self.y_max()
    }

    /// True if `self` lies entirely within a `width x height` plane.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.x_max() <= width && self.y_max() <= height
    }
}

/// One of the four blocks of the quadrant layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subband {
    /// Top-left: the 2x2 averages.
    Approximation,
    /// Top-right: `0.5 * (a + c - b - d)`.
    Horizontal,
    /// Bottom-left: `0.5 * (a + b - c - d)`.
    Vertical,
    /// Bottom-right: `0.5 * (a - b - c + d)`.
    Diagonal,
}

impl Subband {
    pub const ALL: [Subband; 4] = [
        Subband::Approximation,
        Subband::Horizontal,
        Subband::Vertical,
        Subband::Diagonal,
    ];

    pub const DETAILS: [Subband; 3] = [Subband::Horizontal, Subband::Vertical, Subband::Diagonal];

    /// Offset multipliers of this block in units of the half extent.
    fn offset(self) -> (usize, usize) {
        match self {
            Subband::Approximation => (0, 0),
            Subband::Horizontal => (1, 0),
            Subband::Vertical => (0, 1),
            Subband::Diagonal => (1, 1),
        }
    }
}

/// Rectangle occupied by `subband` at `level` in a `width x height` plane.
///
/// `level` is 1-based. The caller is responsible for the level being valid
/// for the plane; with `level == 0` the result degenerates to the whole plane
/// for `Approximation`.
pub fn subband_rect(width: usize, height: usize, level: usize, subband: Subband) -> Rect {
    let hw = width >> level;
    let hh = height >> level;
    let (ox, oy) = subband.offset();
    Rect::new(ox * hw, oy * hh, hw, hh)
}

/// The region a level reads from on the way down and writes on the way up:
/// twice the half extent, anchored at the origin.
pub fn active_rect(width: usize, height: usize, level: usize) -> Rect {
    let shift = level.saturating_sub(1);
    Rect::at_origin(width >> shift, height >> shift)
}
