//! PNG / JPEG / GIF bytes into a [`PixelBuffer`].
//!
//! Decoding goes through the `image` crate. Only the three formats a browser
//! file picker hands us are accepted; everything else fails closed with a
//! [`DecodeError`] instead of producing samples.

use image::{DynamicImage, ImageError, ImageFormat};

use crate::buffer::PixelBuffer;
use crate::error::DecodeError;

const SUPPORTED: [ImageFormat; 3] = [ImageFormat::Png, ImageFormat::Jpeg, ImageFormat::Gif];

/// Decode an image whose format is sniffed from its leading bytes.
pub fn decode(input: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let format = image::guess_format(input).map_err(|_| DecodeError::UnrecognizedFormat)?;
    decode_with_format(input, format)
}

/// Decode an image the caller has already declared to be `format`.
///
/// Bytes that disagree with the declared format are reported as corrupt.
pub fn decode_with_format(input: &[u8], format: ImageFormat) -> Result<PixelBuffer, DecodeError> {
    if !SUPPORTED.contains(&format) {
        return Err(DecodeError::UnsupportedFormat(format!("{format:?}")));
    }

    // GIF decoding through `load_from_memory_with_format` yields the first frame only.
    let img = image::load_from_memory_with_format(input, format).map_err(map_image_error)?;
    let buffer = into_buffer(img)?;
    log::debug!("decoded {:?} image: {}x{}", format, buffer.width(), buffer.height());
    Ok(buffer)
}

/// Decode using a declared media type such as `image/png`.
pub fn decode_with_mime(input: &[u8], mime: &str) -> Result<PixelBuffer, DecodeError> {
    let format = ImageFormat::from_mime_type(mime)
        .ok_or_else(|| DecodeError::UnsupportedFormat(mime.to_string()))?;
    decode_with_format(input, format)
}

fn into_buffer(img: DynamicImage) -> Result<PixelBuffer, DecodeError> {
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(DecodeError::ZeroDimension { width, height });
    }
    PixelBuffer::from_rgba(width, height, img.to_rgba8().into_raw())
}

fn map_image_error(err: ImageError) -> DecodeError {
    match err {
        ImageError::Unsupported(e) => DecodeError::UnsupportedFormat(e.to_string()),
        other => DecodeError::Corrupt(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::gif::GifEncoder;
    use image::{Frame, Rgb, RgbImage, Rgba, RgbaImage};
    use palette::Srgb;
    use std::io::Cursor;

    fn encode(img: DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), format).unwrap();
        buf
    }

    fn checker() -> RgbaImage {
        RgbaImage::from_fn(4, 3, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            }
        })
    }

    #[test]
    fn png_keeps_exact_pixels() {
        let bytes = encode(DynamicImage::ImageRgba8(checker()), ImageFormat::Png);
        let buf = decode(&bytes).unwrap();
        assert_eq!((buf.width(), buf.height()), (4, 3));
        assert_eq!(buf.rgb_at(0, 0), Some(Srgb::new(255, 0, 0)));
        assert_eq!(buf.rgb_at(1, 0), Some(Srgb::new(0, 0, 255)));
        assert_eq!(buf.samples().len(), 4 * 3 * 4);
    }

    #[test]
    fn gif_and_jpeg_decode() {
        let gif = encode(DynamicImage::ImageRgba8(checker()), ImageFormat::Gif);
        let buf = decode(&gif).unwrap();
        assert_eq!((buf.width(), buf.height()), (4, 3));

        let jpeg = encode(
            DynamicImage::ImageRgb8(RgbImage::from_pixel(8, 8, Rgb([40, 80, 120]))),
            ImageFormat::Jpeg,
        );
        let buf = decode_with_mime(&jpeg, "image/jpeg").unwrap();
        assert_eq!((buf.width(), buf.height()), (8, 8));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(
            decode(b"definitely not an image").unwrap_err(),
            DecodeError::UnrecognizedFormat
        );
        assert_eq!(decode(&[]).unwrap_err(), DecodeError::UnrecognizedFormat);
    }

    #[test]
    fn other_formats_are_unsupported() {
        let mut bmp = b"BM".to_vec();
        bmp.extend_from_slice(&[0u8; 64]);
        assert!(matches!(decode(&bmp).unwrap_err(), DecodeError::UnsupportedFormat(_)));
        assert!(matches!(
            decode_with_mime(&bmp, "text/plain").unwrap_err(),
            DecodeError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn truncated_png_is_corrupt() {
        let bytes = encode(DynamicImage::ImageRgba8(checker()), ImageFormat::Png);
        let err = decode(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, DecodeError::Corrupt(_)), "{err:?}");
    }

    #[test]
    fn declared_format_must_match() {
        let bytes = encode(DynamicImage::ImageRgba8(checker()), ImageFormat::Png);
        assert!(decode_with_format(&bytes, ImageFormat::Gif).is_err());
        assert!(decode_with_mime(&bytes, "image/gif").is_err());
    }

    #[test]
    fn animated_gif_keeps_first_frame() {
        let mut bytes = Vec::new();
        {
            let mut encoder = GifEncoder::new(&mut bytes);
            encoder
                .encode_frames([
                    Frame::new(RgbaImage::from_pixel(3, 2, Rgba([255, 0, 0, 255]))),
                    Frame::new(RgbaImage::from_pixel(3, 2, Rgba([0, 0, 255, 255]))),
                ])
                .unwrap();
        }

        let buf = decode(&bytes).unwrap();
        assert_eq!((buf.width(), buf.height()), (3, 2));
        assert_eq!(buf.rgb_at(0, 0), Some(Srgb::new(255, 0, 0)));
        assert_eq!(buf.rgb_at(2, 1), Some(Srgb::new(255, 0, 0)));

        // Every truncated prefix fails or decodes; none may panic.
        for end in 0..bytes.len() {
            let _ = decode(&bytes[..end]);
        }
    }

    #[test]
    fn zero_area_image_is_rejected() {
        let err = into_buffer(DynamicImage::new_rgba8(0, 5)).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ZeroDimension {
                width: 0,
                height: 5
            }
        );
    }
}
