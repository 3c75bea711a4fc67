//! Buffer transformation operations: orientation normalization and cropping.
//!
//! The stretch builder only ever works downward. These operations map any
//! requested direction onto that canonical case and back:
//!
//! 1. Rotate the buffer so the stretch direction points down
//! 2. Build the stretched buffer
//! 3. Rotate the result back to the original orientation
//! 4. Crop to the original canvas, anchored per direction
//!
//! Rotations are exact 90-degree-increment pixel remaps; no resampling.

mod crop;
mod orient;

pub use crop::crop_to;
pub use orient::{rotate_half, rotate_quarter};
