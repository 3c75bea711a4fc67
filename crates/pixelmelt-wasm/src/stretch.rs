//! WASM bindings for the stretch transform.
//!
//! Two entry points are exposed: a scalar-argument form for callers wiring
//! sliders directly, and an object form deserializing a `StretchParams`
//! shape. Both are total: bad parameters are clamped or defaulted and the
//! transform itself never throws.

use crate::types::{direction_from_u8, JsPixelBuffer};
use pixelmelt_core::{stretch_image as core_stretch, StretchParams};
use wasm_bindgen::prelude::*;

/// Apply the directional pixel-stretch transform.
///
/// # Arguments
///
/// * `image` - Source RGBA buffer
/// * `intensity` - Stretch rate in [1, 13]; 13 is the most gradual,
///   1 the most aggressive. Out-of-range values are clamped.
/// * `starting_pixel` - Row (up/down) or column (left/right) where the
///   effect begins; clamped to the image.
/// * `direction` - 0 = down, 1 = up, 2 = left, 3 = right; unknown values
///   fall back to down.
///
/// # Returns
///
/// New `JsPixelBuffer` with the same dimensions as the source. On any
/// internal failure the source pixels are returned unchanged.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const melted = stretch_image(sourceImage, 8, 120, 0);
/// ctx.putImageData(new ImageData(melted.pixels(), melted.width), 0, 0);
/// ```
#[wasm_bindgen]
pub fn stretch_image(
    image: &JsPixelBuffer,
    intensity: u8,
    starting_pixel: u32,
    direction: u8,
) -> JsPixelBuffer {
    let src = image.to_buffer();
    let params = StretchParams {
        intensity,
        starting_pixel,
        direction: direction_from_u8(direction),
    };

    let result = core_stretch(&src, &params);
    JsPixelBuffer::from_buffer(result)
}

/// Apply the stretch transform with a parameter object.
///
/// Accepts a plain JS object matching `StretchParams`:
///
/// ```typescript
/// const melted = stretch_image_with_params(sourceImage, {
///     intensity: 8,
///     starting_pixel: 120,
///     direction: "down",
/// });
/// ```
///
/// Missing fields take their defaults (intensity 13, starting pixel 0,
/// direction down). A value that cannot be deserialized at all logs a
/// console warning and falls back to the defaults rather than throwing.
#[wasm_bindgen]
pub fn stretch_image_with_params(image: &JsPixelBuffer, params: JsValue) -> JsPixelBuffer {
    let params: StretchParams = match serde_wasm_bindgen::from_value(params) {
        Ok(params) => params,
        Err(_err) => {
            #[cfg(target_arch = "wasm32")]
            web_sys::console::warn_1(
                &format!("pixelmelt: invalid stretch params ({_err}), using defaults").into(),
            );
            StretchParams::default()
        }
    };

    let src = image.to_buffer();
    let result = core_stretch(&src, &params);
    JsPixelBuffer::from_buffer(result)
}
