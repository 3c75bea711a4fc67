//! The stretch builder and the top-level orchestrator.
//!
//! The builder only ever stretches downward: it walks source rows from the
//! starting offset and replaces each adjacent pair with a gradient run
//! whose length comes from the intensity-derived index sequence. The
//! orchestrator wraps the builder with orientation normalization, the final
//! crop, and the fail-safe boundary.

use crate::buffer::{PixelBuffer, StretchError, BYTES_PER_PIXEL};
use crate::gradient::gradient_run;
use crate::sequence::index_sequence;
use crate::transform::crop_to;
use crate::StretchParams;

/// Build the stretched (taller) buffer for the canonical downward case.
///
/// Rows `[0, start_offset)` are copied verbatim. From the offset on, step
/// `j` takes source rows `j` apart, produces a gradient run of
/// `sequence[j]` interpolated rows between them, and appends every row of
/// the run except the last; the omitted boundary row is re-read from source
/// as the next step's first row. The walk stops when the sequence or the
/// source rows run out.
///
/// The output is preallocated from the height formula
/// `start + sum(sequence[i] + 1)` over the steps that will actually run,
/// then truncated to the write cursor. Output width equals source width.
pub fn build_stretch(
    sequence: &[u32],
    source: &PixelBuffer,
    start_offset: u32,
) -> Result<PixelBuffer, StretchError> {
    if source.is_empty() {
        return Err(StretchError::EmptyBuffer);
    }

    let height = source.height as usize;
    let start = (start_offset as usize).min(height);
    let steps = sequence.len().min(height.saturating_sub(start + 1));

    let row_len = source.row_len();
    let est_rows: usize = start + sequence[..steps].iter().map(|&g| g as usize + 1).sum::<usize>();
    let mut data = vec![0u8; est_rows * row_len];

    // Untouched region above the offset
    data[..start * row_len].copy_from_slice(&source.data[..start * row_len]);

    let mut cursor = start;
    let mut source_row = start as u32;
    let mut j = 0;
    while source_row + 1 < source.height && j < sequence.len() && cursor < est_rows {
        let run = gradient_run(
            source.row(source_row),
            source.row(source_row + 1),
            sequence[j],
        )?;
        for row in &run[..run.len() - 1] {
            if cursor >= est_rows {
                break;
            }
            data[cursor * row_len..(cursor + 1) * row_len].copy_from_slice(row);
            cursor += 1;
        }
        source_row += 1;
        j += 1;
    }

    if cursor == 0 {
        // Nothing was produced (single-row source at offset 0)
        return Err(StretchError::EmptyBuffer);
    }

    data.truncate(cursor * row_len);
    Ok(PixelBuffer::new(source.width, cursor as u32, data))
}

/// Apply the directional stretch transform.
///
/// The output always has the same dimensions as `source`. The call is
/// total: invalid parameters are clamped or defaulted, a starting pixel at
/// or beyond the processable edge degrades to a no-op, and any internal
/// failure yields an unmodified copy of the input rather than an error.
pub fn stretch_image(source: &PixelBuffer, params: &StretchParams) -> PixelBuffer {
    match try_stretch(source, params) {
        Ok(result) => result,
        Err(_) => source.clone(),
    }
}

fn try_stretch(source: &PixelBuffer, params: &StretchParams) -> Result<PixelBuffer, StretchError> {
    if source.is_empty() {
        return Err(StretchError::EmptyBuffer);
    }
    let expected = source.width as usize * source.height as usize * BYTES_PER_PIXEL;
    if source.data.len() != expected {
        return Err(StretchError::SizeMismatch {
            expected,
            actual: source.data.len(),
        });
    }

    let sequence = index_sequence(params.clamped_intensity());
    let start = params.clamped_starting_pixel(source.width, source.height);
    let direction = params.direction;

    let rotated = direction.to_canonical(source);
    let offset = direction.adjust_offset(start, rotated.height);
    if offset >= rotated.height {
        return Ok(source.clone());
    }

    let stretched = build_stretch(&sequence, &rotated, offset)?;
    let restored = direction.from_canonical(&stretched);
    Ok(crop_to(&restored, source.width, source.height, direction))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
