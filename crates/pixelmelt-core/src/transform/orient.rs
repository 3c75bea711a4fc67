//! Exact quarter-turn rotation and the per-direction orientation strategy.
//!
//! A clockwise quarter turn maps source pixel `(x, y)` of a `w x h` buffer
//! to `(h - 1 - y, x)` in an `h x w` buffer; counter-clockwise maps to
//! `(y, w - 1 - x)`. A half turn is two quarter turns.

use crate::buffer::{PixelBuffer, BYTES_PER_PIXEL};
use crate::Direction;

/// Rotate a buffer by 90 degrees, swapping its dimensions.
///
/// Every pixel is copied into a freshly allocated buffer; the source is
/// left untouched.
pub fn rotate_quarter(src: &PixelBuffer, clockwise: bool) -> PixelBuffer {
    let w = src.width as usize;
    let h = src.height as usize;
    let dst_w = h;

    let mut data = vec![0u8; src.data.len()];
    for y in 0..h {
        for x in 0..w {
            let (nx, ny) = if clockwise {
                (h - 1 - y, x)
            } else {
                (y, w - 1 - x)
            };
            let src_idx = (y * w + x) * BYTES_PER_PIXEL;
            let dst_idx = (ny * dst_w + nx) * BYTES_PER_PIXEL;
            data[dst_idx..dst_idx + BYTES_PER_PIXEL]
                .copy_from_slice(&src.data[src_idx..src_idx + BYTES_PER_PIXEL]);
        }
    }

    PixelBuffer::new(src.height, src.width, data)
}

/// Rotate a buffer by 180 degrees (two quarter turns).
pub fn rotate_half(src: &PixelBuffer) -> PixelBuffer {
    rotate_quarter(&rotate_quarter(src, true), true)
}

impl Direction {
    /// Rotate a buffer so this stretch direction becomes "downward".
    ///
    /// Down is the canonical case and returns a plain copy. Up flips the
    /// buffer upside down. Right rotates clockwise and Left
    /// counter-clockwise, so the stretch axis becomes vertical with the
    /// stretch running toward the new bottom edge.
    pub fn to_canonical(self, src: &PixelBuffer) -> PixelBuffer {
        match self {
            Direction::Down => src.clone(),
            Direction::Up => rotate_half(src),
            Direction::Right => rotate_quarter(src, true),
            Direction::Left => rotate_quarter(src, false),
        }
    }

    /// Undo [`to_canonical`](Self::to_canonical) on a processed buffer.
    pub fn from_canonical(self, src: &PixelBuffer) -> PixelBuffer {
        match self {
            Direction::Down => src.clone(),
            Direction::Up => rotate_half(src),
            Direction::Right => rotate_quarter(src, false),
            Direction::Left => rotate_quarter(src, true),
        }
    }

    /// Map a clamped starting offset into the rotated frame.
    ///
    /// For Up and Right the original offset ends up measured from the new
    /// bottom, so it becomes `rotated_height - offset - 1`; Down and Left
    /// keep it unchanged.
    pub fn adjust_offset(self, clamped_offset: u32, rotated_height: u32) -> u32 {
        match self {
            Direction::Down | Direction::Left => clamped_offset,
            Direction::Up | Direction::Right => {
                rotated_height.saturating_sub(clamped_offset + 1)
            }
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
