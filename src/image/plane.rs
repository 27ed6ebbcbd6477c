// src/image/plane.rs

//! Single-channel planes of `f32` samples.
//!
//! A `Plane` holds either normalised intensities in `[0, 1]` or, after a
//! forward transform, the coefficient grid in the quadrant layout described
//! in [`crate::image::geom`]. Storage is row-major and owned.

use crate::image::geom::Rect;
use crate::utils::error::{HaarError, Result};
use bytemuck::{Pod, Zeroable};

use crate::haar::constants::SAMPLE_MAX;

/// A single grayscale pixel with an 8-bit intensity value.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GrayPixel {
    pub y: u8,
}

unsafe impl Pod for GrayPixel {}
unsafe impl Zeroable for GrayPixel {}

impl GrayPixel {
    pub fn new(y: u8) -> Self {
        GrayPixel { y }
    }

    pub fn black() -> Self {
        GrayPixel { y: 0 }
    }

    pub fn white() -> Self {
        GrayPixel { y: 255 }
    }
}

/// A 2D buffer of `f32` samples, stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Plane {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Plane {
    /// Creates a new plane with the given dimensions, initialized to zero.
    pub fn new(width: usize, height: usize) -> Self {
        Plane {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    /// Creates a plane from a raw vector of samples in row-major order.
    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != width * height {
            return Err(HaarError::DimensionMismatch {
                expected: (width, height),
                actual: (data.len(), 1),
            });
        }
        Ok(Plane {
            width,
            height,
            data,
        })
    }

    /// Creates a plane filled with a single value.
    pub fn from_pixel(width: usize, height: usize, value: f32) -> Self {
        Plane {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Creates a plane by calling a function for each sample.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Plane {
            width,
            height,
            data,
        }
    }

    /// Builds a normalised plane from 8-bit samples (`v / 255`).
    pub fn from_u8(width: usize, height: usize, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != width * height {
            return Err(HaarError::DimensionMismatch {
                expected: (width, height),
                actual: (bytes.len(), 1),
            });
        }
        let data = bytes.iter().map(|&v| v as f32 / SAMPLE_MAX).collect();
        Ok(Plane {
            width,
            height,
            data,
        })
    }

    /// Same as [`Plane::from_u8`], for a grayscale pixel buffer.
    pub fn from_gray_pixels(width: usize, height: usize, pixels: &[GrayPixel]) -> Result<Self> {
        Self::from_u8(width, height, bytemuck::cast_slice(pixels))
    }

    /// Maps normalised samples back to 8 bits, rounding and saturating.
    pub fn to_u8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| {
                let scaled = (v * SAMPLE_MAX).round();
                if scaled.is_nan() {
                    0
                } else {
                    scaled.clamp(0.0, SAMPLE_MAX) as u8
                }
            })
            .collect()
    }

    pub fn to_gray_pixels(&self) -> Vec<GrayPixel> {
        self.to_u8().into_iter().map(GrayPixel::new).collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        self.data[y * self.width + x] = value;
    }

    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Raw sample bytes in native endianness.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Sum of squared samples.
    pub fn energy(&self) -> f64 {
        self.data.iter().map(|&v| (v as f64) * (v as f64)).sum()
    }

    /// Largest absolute sample-wise difference against a plane of the same shape.
    pub fn max_abs_diff(&self, other: &Plane) -> Result<f32> {
        self.ensure_same_shape(other)?;
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max))
    }

    /// Copies `rect` from `src` into the same position of `self`.
    ///
    /// Both planes must share dimensions and `rect` must fit inside them.
    pub fn copy_region_from(&mut self, src: &Plane, rect: Rect) -> Result<()> {
        self.ensure_same_shape(src)?;
        if !rect.fits_within(self.width, self.height) {
            return Err(HaarError::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (rect.x_max(), rect.y_max()),
            });
        }
        for y in rect.y..rect.y_max() {
            let start = y * self.width + rect.x;
            let end = start + rect.width;
            self.data[start..end].copy_from_slice(&src.data[start..end]);
        }
        Ok(())
    }

    /// Copies `rect` out into a new plane of the rectangle's size.
    pub fn crop(&self, rect: Rect) -> Result<Plane> {
        if !rect.fits_within(self.width, self.height) {
            return Err(HaarError::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (rect.x_max(), rect.y_max()),
            });
        }
        let mut data = Vec::with_capacity(rect.area());
        for y in rect.y..rect.y_max() {
            let start = y * self.width + rect.x;
            data.extend_from_slice(&self.data[start..start + rect.width]);
        }
        Ok(Plane {
            width: rect.width,
            height: rect.height,
            data,
        })
    }

    pub(crate) fn ensure_same_shape(&self, other: &Plane) -> Result<()> {
        if self.dimensions() != other.dimensions() {
            return Err(HaarError::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(())
    }
}
