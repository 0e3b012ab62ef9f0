//! Error types returned by the decoder and the point sampler.
//!
//! Extraction has no error type: it is defined for every [`PixelBuffer`].
//!
//! [`PixelBuffer`]: crate::PixelBuffer

/// Failure to turn encoded bytes into a [`PixelBuffer`](crate::PixelBuffer).
///
/// Always fatal to the single decode call. Nothing partial is returned.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The bytes do not start with the signature of any known image format.
    #[error("input is not a recognizable image")]
    UnrecognizedFormat,
    /// A real image format, but not PNG, JPEG or GIF.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),
    /// The stream claims a supported format but could not be decoded.
    #[error("corrupt image data: {0}")]
    Corrupt(String),
    #[error("image has zero area ({width}x{height})")]
    ZeroDimension { width: u32, height: u32 },
    /// `width * height * 4` does not fit in memory on this target.
    #[error("image dimensions {width}x{height} are too large")]
    TooLarge { width: u32, height: u32 },
    /// Raw RGBA input whose length does not match `width * height * 4`.
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
/// An error that can occur when sampling a single pixel.
pub enum SampleError {
    /// Degenerate display geometry, a non-finite coordinate, or an image
    /// with no pixels to read.
    #[error("sample coordinate out-of-bounds")]
    OutOfBounds,
}
