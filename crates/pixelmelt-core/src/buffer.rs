//! RGBA pixel buffer type and core error type.

use thiserror::Error;

/// Bytes per pixel (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Errors raised by internal pipeline stages.
///
/// None of these escape the public [`stretch_image`](crate::stretch_image)
/// boundary: the orchestrator catches them and returns an unmodified copy
/// of the input instead.
#[derive(Debug, Error)]
pub enum StretchError {
    /// The pixel data length does not match `width * height * 4`.
    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        /// Expected byte length for the declared dimensions.
        expected: usize,
        /// Actual byte length supplied.
        actual: usize,
    },

    /// A stage received a zero-sized buffer it cannot operate on.
    #[error("Empty pixel buffer")]
    EmptyBuffer,

    /// Two rows handed to the interpolator have different lengths.
    #[error("Row length mismatch: {a} vs {b}")]
    RowMismatch {
        /// Byte length of the first row.
        a: usize,
        /// Byte length of the second row.
        b: usize,
    },
}

/// An RGBA image buffer.
///
/// Pixel data is row-major, top row first, 4 bytes per pixel in R,G,B,A
/// order. The invariant `data.len() == width * height * 4` holds for every
/// buffer produced by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA pixel data (4 bytes per pixel, row-major order).
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new PixelBuffer with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * BYTES_PER_PIXEL,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a PixelBuffer, validating the size invariant.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, StretchError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(StretchError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer with every pixel set to the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);
        for _ in 0..width as usize * height as usize {
            data.extend_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a PixelBuffer from an image::RgbaImage.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let data = img.into_raw();
        Self {
            width,
            height,
            data,
        }
    }

    /// Convert to an image::RgbaImage for further processing.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
    }

    /// Byte length of a single row.
    #[inline]
    pub fn row_len(&self) -> usize {
        self.width as usize * BYTES_PER_PIXEL
    }

    /// Borrow row `y` as a byte slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.row_len();
        &self.data[start..start + self.row_len()]
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.data.len()
    }

    /// Check if this is an empty/invalid buffer.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }
}
