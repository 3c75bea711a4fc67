//! Pixelmelt Core - Pixel-stretch transform library
//!
//! This crate implements a deterministic, directional pixel-stretching
//! transform: rows beyond a starting offset are progressively replaced by
//! interpolated gradients between adjacent source rows, producing a
//! melt/stretch effect. The result is re-oriented and cropped back to the
//! original canvas size, so output dimensions always equal input dimensions.
//!
//! The caller supplies a raw RGBA buffer and a [`StretchParams`]; decoding
//! an image file into pixels and rendering the result back out are the
//! caller's concern.

pub mod buffer;
pub mod gradient;
pub mod sequence;
pub mod stretch;
pub mod transform;

pub use buffer::{PixelBuffer, StretchError};
pub use sequence::{index_sequence, MAX_INTENSITY, MIN_INTENSITY};
pub use stretch::stretch_image;

/// Stretch direction.
///
/// All directions are processed by rotating the buffer so the stretch runs
/// downward, applying the canonical transform, and rotating back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Stretch toward the top edge.
    Up,
    /// Stretch toward the bottom edge (canonical processing direction).
    #[default]
    Down,
    /// Stretch toward the left edge.
    Left,
    /// Stretch toward the right edge.
    Right,
}

impl Direction {
    /// The dimension of the original buffer that `starting_pixel` indexes:
    /// height for vertical stretches, width for horizontal ones.
    pub fn axis_len(self, width: u32, height: u32) -> u32 {
        match self {
            Direction::Up | Direction::Down => height,
            Direction::Left | Direction::Right => width,
        }
    }
}

impl From<u32> for Direction {
    fn from(value: u32) -> Self {
        match value {
            1 => Direction::Up,
            2 => Direction::Left,
            3 => Direction::Right,
            _ => Direction::Down,
        }
    }
}

/// Parameters for the stretch transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct StretchParams {
    /// Stretch rate in [1, 13]. Inversely related to strength: 13 is the
    /// most gradual stretch, 1 the most rapid degradation. Out-of-range
    /// values are clamped, never rejected.
    pub intensity: u8,
    /// Row (Up/Down) or column (Left/Right) of the original buffer at which
    /// the effect begins. Clamped to the buffer on use.
    pub starting_pixel: u32,
    /// Direction the stretch runs toward.
    pub direction: Direction,
}

impl Default for StretchParams {
    fn default() -> Self {
        Self {
            intensity: MAX_INTENSITY,
            starting_pixel: 0,
            direction: Direction::Down,
        }
    }
}

impl StretchParams {
    /// Create params with default values (intensity 13, offset 0, down).
    pub fn new() -> Self {
        Self::default()
    }

    /// Intensity clamped into the valid [1, 13] range.
    pub fn clamped_intensity(&self) -> u8 {
        self.intensity.clamp(MIN_INTENSITY, MAX_INTENSITY)
    }

    /// Starting pixel clamped to the axis it indexes on a `width` x `height`
    /// buffer. Returns 0 for a degenerate (empty) axis.
    pub fn clamped_starting_pixel(&self, width: u32, height: u32) -> u32 {
        let len = self.direction.axis_len(width, height);
        self.starting_pixel.min(len.saturating_sub(1))
    }
}
