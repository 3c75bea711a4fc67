//! Cropping a stretched buffer back to the original canvas.
//!
//! The stretch builder grows the buffer along the canonical axis; after
//! rotating back, the result is trimmed to the original width and height.
//! The anchor window depends on the stretch direction: Down and Right keep
//! the leading rows/columns, Up keeps the trailing rows (the untouched
//! region sits at the bottom), Left keeps the trailing columns.

use crate::buffer::{PixelBuffer, BYTES_PER_PIXEL};
use crate::Direction;

/// Crop a buffer to `target_width x target_height`, anchored per direction.
///
/// A buffer that already matches the target size is returned as a copy.
/// Source indices are clamped to the last row/column rather than wrapping,
/// so a buffer smaller than the target in some axis repeats its edge line.
pub fn crop_to(
    src: &PixelBuffer,
    target_width: u32,
    target_height: u32,
    direction: Direction,
) -> PixelBuffer {
    // Fast path: already the right size
    if src.width == target_width && src.height == target_height {
        return src.clone();
    }

    let anchor_y = match direction {
        Direction::Up => src.height.saturating_sub(target_height),
        _ => 0,
    };
    let anchor_x = match direction {
        Direction::Left => src.width.saturating_sub(target_width),
        _ => 0,
    };

    let src_w = src.width as usize;
    let out_row_len = target_width as usize * BYTES_PER_PIXEL;
    let mut data = vec![0u8; target_height as usize * out_row_len];

    for y in 0..target_height {
        let src_y = (anchor_y + y).min(src.height - 1) as usize;
        let src_row_start = src_y * src_w * BYTES_PER_PIXEL;
        let dst_row_start = y as usize * out_row_len;

        for x in 0..target_width {
            let src_x = (anchor_x + x).min(src.width - 1) as usize;
            let src_idx = src_row_start + src_x * BYTES_PER_PIXEL;
            let dst_idx = dst_row_start + x as usize * BYTES_PER_PIXEL;
            data[dst_idx..dst_idx + BYTES_PER_PIXEL]
                .copy_from_slice(&src.data[src_idx..src_idx + BYTES_PER_PIXEL]);
        }
    }

    PixelBuffer::new(target_width, target_height, data)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
