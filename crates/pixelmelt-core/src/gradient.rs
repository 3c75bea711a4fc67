//! Row gradient interpolation.
//!
//! A gradient run is the block of rows inserted between two adjacent source
//! rows: the two source rows verbatim at the ends, with `gradient_size`
//! linearly interpolated rows between them. Interpolated rows always carry
//! an opaque alpha channel; the transform never introduces transparency.

use crate::buffer::{StretchError, BYTES_PER_PIXEL};

/// Produce a gradient run of `gradient_size + 2` rows between two rows.
///
/// Row 0 is `row_a` verbatim and the last row is `row_b` verbatim. Each
/// intermediate row `k` in `[1, gradient_size]` blends the R, G, B channels
/// as `round(a + (b - a) * k / (gradient_size + 1))` and forces alpha to
/// 255. `gradient_size == 0` yields just `[row_a, row_b]`.
///
/// Both rows must have the same length and hold whole RGBA pixels.
pub fn gradient_run(
    row_a: &[u8],
    row_b: &[u8],
    gradient_size: u32,
) -> Result<Vec<Vec<u8>>, StretchError> {
    if row_a.len() != row_b.len() {
        return Err(StretchError::RowMismatch {
            a: row_a.len(),
            b: row_b.len(),
        });
    }
    if row_a.is_empty() || row_a.len() % BYTES_PER_PIXEL != 0 {
        return Err(StretchError::EmptyBuffer);
    }

    let mut rows = Vec::with_capacity(gradient_size as usize + 2);
    rows.push(row_a.to_vec());

    let steps = gradient_size as f64 + 1.0;
    for k in 1..=gradient_size {
        let t = k as f64 / steps;
        let mut row = Vec::with_capacity(row_a.len());
        for (pa, pb) in row_a
            .chunks_exact(BYTES_PER_PIXEL)
            .zip(row_b.chunks_exact(BYTES_PER_PIXEL))
        {
            for c in 0..3 {
                let a = pa[c] as f64;
                let b = pb[c] as f64;
                row.push((a + (b - a) * t).round() as u8);
            }
            // Opaque regardless of source alpha
            row.push(255);
        }
        rows.push(row);
    }

    rows.push(row_b.to_vec());
    Ok(rows)
}
