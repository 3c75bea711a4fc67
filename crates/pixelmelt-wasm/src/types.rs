//! WASM-compatible wrapper types for pixel data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Pixelmelt types, handling the conversion between Rust and JavaScript
//! data representations.

use pixelmelt_core::{Direction, PixelBuffer};
use wasm_bindgen::prelude::*;

/// An RGBA pixel buffer wrapper for JavaScript.
///
/// Wraps the core `PixelBuffer` and exposes a JavaScript-friendly interface
/// for dimensions and pixel data. The byte layout matches canvas
/// `ImageData`: 4 bytes per pixel (R, G, B, A), row-major, top row first.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a
/// copy is made to JavaScript memory as a `Uint8Array`. The `free()` method
/// can be called to explicitly release WASM memory, but this is optional as
/// wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new JsPixelBuffer from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `data` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> JsPixelBuffer {
        JsPixelBuffer {
            width,
            height,
            data,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.data.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.data.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this if you want to immediately release memory
    /// for a large image.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    /// Create a JsPixelBuffer from a core PixelBuffer.
    pub(crate) fn from_buffer(buf: PixelBuffer) -> Self {
        Self {
            width: buf.width,
            height: buf.height,
            data: buf.data,
        }
    }

    /// Convert to a core PixelBuffer.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer {
            width: self.width,
            height: self.height,
            data: self.data.clone(),
        }
    }
}

/// Convert a u8 direction value to the core Direction enum.
///
/// Values:
/// - 0 = Down (canonical)
/// - 1 = Up
/// - 2 = Left
/// - 3 = Right
///
/// Any other value defaults to Down.
pub(crate) fn direction_from_u8(value: u8) -> Direction {
    match value {
        1 => Direction::Up,
        2 => Direction::Left,
        3 => Direction::Right,
        _ => Direction::Down, // Default
    }
}
