//! Pixelmelt WASM - WebAssembly bindings for Pixelmelt
//!
//! This crate exposes the pixelmelt-core stretch transform to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for pixel buffers
//! - `stretch` - Stretch transform bindings
//!
//! # Usage
//!
//! ```typescript
//! import init, { stretch_image, JsPixelBuffer } from '@pixelmelt/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // RGBA bytes from a canvas ImageData
//! const buffer = new JsPixelBuffer(canvas.width, canvas.height, imageData.data);
//! const melted = stretch_image(buffer, 13, 0, 0);
//! ```

use wasm_bindgen::prelude::*;

mod stretch;
mod types;

// Re-export public types
pub use stretch::{stretch_image, stretch_image_with_params};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
