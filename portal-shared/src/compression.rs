//! Selfie compression.
//!
//! Selfies are downscaled and re-encoded as JPEG before upload so slow
//! connections do not have to push multi-megabyte camera shots.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use tracing::{debug, warn};

use crate::errors::PortalError;
use crate::models::UploadFile;

/// MIME type of every compressed output.
pub const JPEG_MIME: &str = "image/jpeg";

/// Bounds and quality used when compressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionSettings {
    /// Width cap applied to landscape images.
    pub max_width: u32,
    /// Height cap applied to portrait and square images.
    pub max_height: u32,
    /// JPEG quality, 1-100.
    pub quality: u8,
}

impl Default for CompressionSettings {
    fn default() -> Self {
        Self {
            max_width: 800,
            max_height: 600,
            quality: 80,
        }
    }
}

/// Output size for a `width` x `height` image.
///
/// Only the dominant axis is capped: landscape images are bounded by
/// `max_width`, everything else by `max_height`. Aspect ratio is kept and the
/// other side is truncated, never below one pixel.
pub fn fit_within(width: u32, height: u32, settings: CompressionSettings) -> (u32, u32) {
    let scale = |side: u32, numerator: u32, denominator: u32| -> u32 {
        let scaled = u64::from(side) * u64::from(numerator) / u64::from(denominator.max(1));
        u32::try_from(scaled).unwrap_or(u32::MAX).max(1)
    };

    if width > height {
        if width > settings.max_width {
            return (settings.max_width, scale(height, settings.max_width, width));
        }
    } else if height > settings.max_height {
        return (scale(width, settings.max_height, height), settings.max_height);
    }
    (width, height)
}

/// Decode `file`, fit it within `settings` and re-encode it as JPEG.
///
/// The file name is kept as selected; only the content and MIME type change.
///
/// # Errors
/// Returns [`PortalError::Image`] when the bytes are not a decodable image or
/// the JPEG encoder fails.
pub fn compress(file: &UploadFile, settings: CompressionSettings) -> Result<UploadFile, PortalError> {
    let decoded = image::load_from_memory(&file.bytes)?;
    let (width, height) = fit_within(decoded.width(), decoded.height(), settings);
    let resized = if (width, height) == (decoded.width(), decoded.height()) {
        decoded
    } else {
        decoded.resize_exact(width, height, FilterType::Triangle)
    };

    let mut buffer = Cursor::new(Vec::new());
    JpegEncoder::new_with_quality(&mut buffer, settings.quality).encode_image(&resized.to_rgb8())?;
    let bytes = buffer.into_inner();

    debug!(
        name = %file.name,
        original_bytes = file.len(),
        compressed_bytes = bytes.len(),
        width,
        height,
        "compressed selfie"
    );
    Ok(UploadFile::new(file.name.clone(), JPEG_MIME, bytes))
}

/// Selfie as it will be uploaded.
///
/// Images are compressed with the default settings. A file that is not an
/// image, or that fails to decode, is kept unchanged.
pub fn prepare_selfie(file: UploadFile) -> UploadFile {
    if !file.is_image() {
        warn!(name = %file.name, mime = %file.mime_type, "selfie is not an image, uploading as selected");
        return file;
    }
    match compress(&file, CompressionSettings::default()) {
        Ok(compressed) => compressed,
        Err(err) => {
            warn!(name = %file.name, error = %err, "selfie compression failed, uploading original");
            file
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};

    fn png(width: u32, height: u32) -> UploadFile {
        let pixels = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        let mut cursor = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(pixels)
            .write_to(&mut cursor, ImageFormat::Png)
            .unwrap();
        UploadFile::new("selfie.png", "image/png", cursor.into_inner())
    }

    #[test]
    fn test_fit_within_landscape() {
        let settings = CompressionSettings::default();
        assert_eq!(fit_within(1600, 1200, settings), (800, 600));
        assert_eq!(fit_within(4000, 1000, settings), (800, 200));
    }

    #[test]
    fn test_fit_within_portrait_and_square() {
        let settings = CompressionSettings::default();
        assert_eq!(fit_within(1000, 2000, settings), (300, 600));
        assert_eq!(fit_within(900, 900, settings), (600, 600));
    }

    #[test]
    fn test_fit_within_only_caps_dominant_axis() {
        // Landscape within the width cap is left alone even though it is taller than 600.
        assert_eq!(fit_within(790, 700, CompressionSettings::default()), (790, 700));
    }

    #[test]
    fn test_fit_within_small_images_unchanged() {
        assert_eq!(fit_within(640, 480, CompressionSettings::default()), (640, 480));
    }

    #[test]
    fn test_fit_within_never_zero() {
        assert_eq!(fit_within(100_000, 1, CompressionSettings::default()), (800, 1));
    }

    #[test]
    fn test_compress_large_landscape() {
        let compressed = compress(&png(1600, 1000), CompressionSettings::default()).unwrap();

        assert_eq!(compressed.mime_type, JPEG_MIME);
        assert_eq!(compressed.name, "selfie.png");
        assert_eq!(image::guess_format(&compressed.bytes).unwrap(), ImageFormat::Jpeg);

        let decoded = image::load_from_memory(&compressed.bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (800, 500));
    }

    #[test]
    fn test_compress_large_portrait_keeps_ratio() {
        let compressed = compress(&png(600, 1200), CompressionSettings::default()).unwrap();
        let decoded = image::load_from_memory(&compressed.bytes).unwrap();

        assert_eq!(decoded.height(), 600);
        assert_eq!(decoded.width(), 300);
    }

    #[test]
    fn test_compress_rejects_garbage() {
        let file = UploadFile::new("selfie.jpg", "image/jpeg", b"not an image".to_vec());
        assert!(matches!(
            compress(&file, CompressionSettings::default()),
            Err(PortalError::Image(_))
        ));
    }

    #[test]
    fn test_prepare_selfie_compresses_images() {
        let prepared = prepare_selfie(png(1200, 900));
        assert_eq!(prepared.mime_type, JPEG_MIME);
    }

    #[test]
    fn test_prepare_selfie_keeps_non_images() {
        let pdf = UploadFile::new("selfie.pdf", "application/pdf", b"%PDF-1.4".to_vec());
        assert_eq!(prepare_selfie(pdf.clone()), pdf);
    }

    #[test]
    fn test_prepare_selfie_keeps_undecodable_images() {
        let broken = UploadFile::new("selfie.heic", "image/heic", vec![0, 1, 2, 3]);
        assert_eq!(prepare_selfie(broken.clone()), broken);
    }
}
