//! Image normalization for uploaded media.
//!
//! Every uploaded image is re-encoded before it reaches object storage:
//! decoded, fit-cropped to a fixed square, and written back as JPEG at a
//! fixed quality. Re-encoding also strips camera metadata, so stored
//! objects carry no EXIF payload. Pure function of the input bytes.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

/// Square edge for news post images.
pub const NEWS_IMAGE_PX: u32 = 1080;

/// Square edge for teacher portrait photos.
pub const PORTRAIT_PX: u32 = 800;

/// JPEG quality for all stored images.
pub const JPEG_QUALITY: u8 = 80;

/// Content type of every normalized image.
pub const NORMALIZED_CONTENT_TYPE: &str = "image/jpeg";

/// Errors from image normalization.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    /// The uploaded bytes could not be decoded as a supported image.
    #[error("Image decode failed: {0}")]
    Decode(image::ImageError),

    /// Re-encoding the resized image failed.
    #[error("Image encode failed: {0}")]
    Encode(image::ImageError),
}

/// Normalize uploaded image bytes to an `edge_px` × `edge_px` JPEG.
///
/// The image is resized so the shorter side matches `edge_px` and the
/// excess of the longer side is center-cropped away (fit-crop), then
/// encoded as JPEG at [`JPEG_QUALITY`]. Alpha channels are flattened to
/// RGB since JPEG carries none.
pub fn normalize_image(bytes: &[u8], edge_px: u32) -> Result<Vec<u8>, MediaError> {
    let decoded = image::load_from_memory(bytes).map_err(MediaError::Decode)?;
    let resized = decoded.resize_to_fill(edge_px, edge_px, FilterType::Lanczos3);
    let rgb: image::RgbImage = resized.to_rgb8();

    let mut out = Cursor::new(Vec::new());
    let mut encoder = JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY);
    encoder.encode_image(&rgb).map_err(MediaError::Encode)?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// Encode a small RGBA test image as PNG bytes.
    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]));
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .expect("PNG fixture encode");
        out.into_inner()
    }

    #[test]
    fn normalizes_to_requested_square() {
        let input = png_fixture(64, 32);
        let jpeg = normalize_image(&input, 16).expect("normalize");

        let round_tripped = image::load_from_memory(&jpeg).expect("decode output");
        assert_eq!(round_tripped.width(), 16);
        assert_eq!(round_tripped.height(), 16);
    }

    #[test]
    fn output_is_jpeg() {
        let input = png_fixture(20, 20);
        let jpeg = normalize_image(&input, 10).expect("normalize");
        assert_eq!(
            image::guess_format(&jpeg).expect("guess format"),
            image::ImageFormat::Jpeg
        );
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = normalize_image(b"definitely not an image", 10).unwrap_err();
        assert!(matches!(err, MediaError::Decode(_)));
    }

    #[test]
    fn alpha_input_is_flattened() {
        // Semi-transparent input must still encode (JPEG has no alpha).
        let img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 255, 128]));
        let mut out = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut out, image::ImageFormat::Png)
            .expect("PNG fixture encode");

        assert!(normalize_image(&out.into_inner(), 8).is_ok());
    }
}
