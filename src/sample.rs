//! Single-pixel color picking from a display-space coordinate.
//!
//! The image is shown scaled to `display_width × display_height`. A click is
//! mapped back with `floor(display * natural / displayed)` per axis and then
//! clamped into the pixel grid, so a click on the very right or bottom edge
//! reads the last column or row instead of failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::color::{Rgb, to_hex};
use crate::error::SampleError;

/// One picked color. The pick history itself is owned by the caller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampledColor {
    pub hex: String,
    pub captured_at: DateTime<Utc>,
}

impl SampledColor {
    pub fn new(color: Rgb, captured_at: DateTime<Utc>) -> Self {
        Self {
            hex: to_hex(color),
            captured_at,
        }
    }
}

/// Map a display coordinate to the source pixel it covers.
pub fn source_pixel(
    buffer: &PixelBuffer,
    display_x: f64,
    display_y: f64,
    display_width: f64,
    display_height: f64,
) -> Result<(u32, u32), SampleError> {
    if buffer.is_empty() {
        return Err(SampleError::OutOfBounds);
    }
    let x = map_axis(display_x, display_width, buffer.width())?;
    let y = map_axis(display_y, display_height, buffer.height())?;
    Ok((x, y))
}

fn map_axis(display: f64, display_extent: f64, natural: u32) -> Result<u32, SampleError> {
    if !display.is_finite() || !display_extent.is_finite() || display_extent <= 0.0 {
        return Err(SampleError::OutOfBounds);
    }
    let scale = natural as f64 / display_extent;
    let src = (display * scale).floor();
    Ok(src.clamp(0.0, (natural - 1) as f64) as u32)
}

/// RGB value under a display-space click. Alpha is ignored.
pub fn sample_at(
    buffer: &PixelBuffer,
    display_x: f64,
    display_y: f64,
    display_width: f64,
    display_height: f64,
) -> Result<Rgb, SampleError> {
    let (x, y) = source_pixel(buffer, display_x, display_y, display_width, display_height)?;
    buffer.rgb_at(x, y).ok_or(SampleError::OutOfBounds)
}

/// [`sample_at`], stamped with the current time.
pub fn sample_color(
    buffer: &PixelBuffer,
    display_x: f64,
    display_y: f64,
    display_width: f64,
    display_height: f64,
) -> Result<SampledColor, SampleError> {
    let color = sample_at(buffer, display_x, display_y, display_width, display_height)?;
    Ok(SampledColor::new(color, Utc::now()))
}
