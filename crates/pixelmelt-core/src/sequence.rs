//! Index sequence generation.
//!
//! The stretch transform is driven by a precomputed sequence of gradient-run
//! lengths derived purely from the intensity parameter. Each entry says how
//! many interpolated rows to insert between one pair of adjacent source
//! rows. The sequence is independent of image dimensions.

/// Minimum valid intensity (most aggressive stretch).
pub const MIN_INTENSITY: u8 = 1;

/// Maximum valid intensity (most gradual stretch).
pub const MAX_INTENSITY: u8 = 13;

/// Base table of (gradient run length, base repetition count).
///
/// Run lengths follow a Fibonacci progression; short runs repeat many times
/// so the effect degrades gradually near the starting offset, while the
/// long tail entries flood color over large row spans.
const BASE_TABLE: [(u32, u32); 15] = [
    (1, 13),
    (2, 8),
    (3, 5),
    (5, 3),
    (8, 2),
    (13, 1),
    (21, 1),
    (34, 1),
    (55, 1),
    (89, 1),
    (144, 1),
    (233, 1),
    (377, 1),
    (610, 1),
    (987, 1),
];

/// Repetition multiplier for an intensity value.
///
/// Intensity 13 leaves the base counts unscaled; each step down adds 0.25,
/// up to 4.00 at intensity 1. Scaled counts are floored.
fn intensity_factor(intensity: u8) -> f64 {
    let clamped = intensity.clamp(MIN_INTENSITY, MAX_INTENSITY);
    1.0 + (MAX_INTENSITY - clamped) as f64 * 0.25
}

/// Generate the gradient-run length sequence for an intensity in [1, 13].
///
/// Each base table entry `(value, count)` is expanded into
/// `floor(count * factor)` repetitions of `value`, concatenated in table
/// order. The result is non-empty for every valid intensity; out-of-range
/// intensities are clamped.
pub fn index_sequence(intensity: u8) -> Vec<u32> {
    let factor = intensity_factor(intensity);
    let mut sequence = Vec::new();
    for &(value, base_count) in BASE_TABLE.iter() {
        let count = (base_count as f64 * factor).floor() as u32;
        for _ in 0..count {
            sequence.push(value);
        }
    }
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expected sequence length for a factor: sum of floored scaled counts.
    fn expected_len(factor: f64) -> usize {
        BASE_TABLE
            .iter()
            .map(|&(_, count)| (count as f64 * factor).floor() as usize)
            .sum()
    }

    #[test]
    fn test_non_empty_for_all_intensities() {
        for intensity in MIN_INTENSITY..=MAX_INTENSITY {
            assert!(
                !index_sequence(intensity).is_empty(),
                "intensity {} produced an empty sequence",
                intensity
            );
        }
    }

    #[test]
    fn test_intensity_13_unscaled() {
        let seq = index_sequence(13);

        // Factor 1.00: base counts verbatim, 13+8+5+3+2+10 = 41 entries
        assert_eq!(seq.len(), 41);
        assert_eq!(&seq[0..13], &[1; 13]);
        assert_eq!(&seq[13..21], &[2; 8]);
        assert_eq!(&seq[21..26], &[3; 5]);
        assert_eq!(&seq[26..29], &[5; 3]);
        assert_eq!(&seq[29..31], &[8; 2]);
        assert_eq!(
            &seq[31..],
            &[13, 21, 34, 55, 89, 144, 233, 377, 610, 987]
        );
    }

    #[test]
    fn test_intensity_1_scaled_by_four() {
        let seq = index_sequence(1);

        // Factor 4.00: 52+32+20+12+8 + 10*4 = 164 entries
        assert_eq!(seq.len(), 164);
        assert_eq!(&seq[0..52], &[1; 52]);
        assert_eq!(&seq[52..84], &[2; 32]);
        // Last table entry repeats 4 times
        assert_eq!(&seq[160..], &[987; 4]);
    }

    #[test]
    fn test_lengths_match_scaled_counts() {
        for intensity in MIN_INTENSITY..=MAX_INTENSITY {
            let factor = 1.0 + (MAX_INTENSITY - intensity) as f64 * 0.25;
            assert_eq!(
                index_sequence(intensity).len(),
                expected_len(factor),
                "intensity {}",
                intensity
            );
        }
    }

    #[test]
    fn test_values_in_table_order() {
        for intensity in MIN_INTENSITY..=MAX_INTENSITY {
            let seq = index_sequence(intensity);
            let mut cursor = 0;
            for &(value, _) in BASE_TABLE.iter() {
                while cursor < seq.len() && seq[cursor] == value {
                    cursor += 1;
                }
            }
            assert_eq!(cursor, seq.len(), "intensity {} out of table order", intensity);
        }
    }

    #[test]
    fn test_lower_intensity_never_shorter() {
        // More aggressive stretch means at least as many runs
        let mut prev = index_sequence(13).len();
        for intensity in (MIN_INTENSITY..MAX_INTENSITY).rev() {
            let len = index_sequence(intensity).len();
            assert!(len >= prev, "intensity {} shrank the sequence", intensity);
            prev = len;
        }
    }

    #[test]
    fn test_out_of_range_intensity_clamped() {
        assert_eq!(index_sequence(0), index_sequence(1));
        assert_eq!(index_sequence(14), index_sequence(13));
        assert_eq!(index_sequence(255), index_sequence(13));
    }

    #[test]
    fn test_deterministic() {
        for intensity in MIN_INTENSITY..=MAX_INTENSITY {
            assert_eq!(index_sequence(intensity), index_sequence(intensity));
        }
    }
}
