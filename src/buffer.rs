use crate::color::{Rgb, pack_rgba, unpack};
use crate::error::DecodeError;

/// A decoded, immutable grid of RGBA samples (row-major, 4 bytes per pixel).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes that were decoded elsewhere, e.g. a canvas `ImageData`.
    ///
    /// A zero-area buffer is accepted; only the byte count is checked.
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, DecodeError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(DecodeError::TooLarge { width, height })?;
        if rgba.len() != expected {
            return Err(DecodeError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Raw RGBA bytes.
    pub fn samples(&self) -> &[u8] {
        &self.rgba
    }

    /// RGBA bytes of rows `start..end`, clamped to the image height.
    pub fn rows(&self, start: u32, end: u32) -> &[u8] {
        let end = end.min(self.height);
        let start = start.min(end);
        let stride = self.width as usize * 4;
        &self.rgba[start as usize * stride..end as usize * stride]
    }

    /// Color at `(x, y)` with alpha dropped. `None` outside the grid.
    pub fn rgb_at(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some(unpack(pack_rgba(&self.rgba[idx..idx + 4])))
    }
}
