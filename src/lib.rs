//! Dominant-color extraction and single-pixel color picking for raster images.
//!
//! The crate decodes PNG, JPEG or GIF bytes into a [`PixelBuffer`], ranks its
//! exact colors by frequency, and maps display-space clicks back to source
//! pixels. Everything is exposed both as a plain Rust API and through
//! `wasm-bindgen` for a browser front end.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

mod buffer;
mod color;
mod decode;
mod error;
mod extract;
mod sample;

pub use buffer::PixelBuffer;
pub use color::{Rgb, key_to_hex, pack, to_hex, unpack};
pub use decode::{decode, decode_with_format, decode_with_mime};
pub use error::{DecodeError, SampleError};
pub use extract::{
    ColorEntry, DEFAULT_LIMIT, Histogram, extract, extract_default, histogram, histogram_of_rows,
};
pub use image::ImageFormat;
pub use sample::{SampledColor, sample_at, sample_color, source_pixel};

/// Decode `input` and return its `limit` dominant colors in one call.
pub fn extract_palette_bytes(input: &[u8], limit: usize) -> Result<Vec<ColorEntry>, DecodeError> {
    let buffer = decode(input)?;
    Ok(extract(&buffer, limit))
}

// ------------------------------------------------------------
// JavaScript bindings
// ------------------------------------------------------------

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn colors_to_js(colors: &[ColorEntry]) -> Result<Array, JsValue> {
    let out = Array::new();
    for entry in colors {
        let obj = Object::new();
        Reflect::set(&obj, &JsValue::from_str("hex"), &JsValue::from_str(&entry.hex))?;
        Reflect::set(
            &obj,
            &JsValue::from_str("percentage"),
            &JsValue::from_f64(entry.percentage),
        )?;
        out.push(&obj);
    }
    Ok(out)
}

/// Decode an image and return its dominant colors as `[{hex, percentage}]`.
///
/// `limit` defaults to six colors.
#[wasm_bindgen(js_name = extractColors)]
pub fn extract_colors(input: Vec<u8>, limit: Option<usize>) -> Result<Array, JsValue> {
    let colors =
        extract_palette_bytes(&input, limit.unwrap_or(DEFAULT_LIMIT)).map_err(to_js_error)?;
    colors_to_js(&colors)
}

/// A decoded image kept on the Rust side so that repeated picks do not
/// decode again.
#[wasm_bindgen]
pub struct DecodedImage {
    buffer: PixelBuffer,
}

#[wasm_bindgen]
impl DecodedImage {
    #[wasm_bindgen(constructor)]
    pub fn new(input: Vec<u8>) -> Result<DecodedImage, JsValue> {
        let buffer = decode(&input).map_err(to_js_error)?;
        Ok(DecodedImage { buffer })
    }

    /// Wrap RGBA bytes already decoded by the browser (canvas `ImageData`).
    #[wasm_bindgen(js_name = fromRgba)]
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<DecodedImage, JsValue> {
        let buffer = PixelBuffer::from_rgba(width, height, rgba).map_err(to_js_error)?;
        Ok(DecodedImage { buffer })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn extract(&self, limit: Option<usize>) -> Result<Array, JsValue> {
        colors_to_js(&extract(&self.buffer, limit.unwrap_or(DEFAULT_LIMIT)))
    }

    /// Pick the color under a click on the image as rendered at
    /// `display_width × display_height`. Returns `{hex, capturedAt}` where
    /// `capturedAt` is milliseconds since the epoch.
    #[wasm_bindgen(js_name = sampleAt)]
    pub fn sample_at(
        &self,
        display_x: f64,
        display_y: f64,
        display_width: f64,
        display_height: f64,
    ) -> Result<Object, JsValue> {
        let picked = sample_color(&self.buffer, display_x, display_y, display_width, display_height)
            .map_err(to_js_error)?;
        let obj = Object::new();
        Reflect::set(&obj, &JsValue::from_str("hex"), &JsValue::from_str(&picked.hex))?;
        Reflect::set(
            &obj,
            &JsValue::from_str("capturedAt"),
            &JsValue::from_f64(picked.captured_at.timestamp_millis() as f64),
        )?;
        Ok(obj)
    }
}
