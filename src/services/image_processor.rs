// src/services/image_processor.rs
use image::{GenericImageView, ImageFormat as ImgFormat};

use crate::errors::AssetGenError;

/// Still-image MIME types the pipeline accepts. Video uploads are converted
/// to a still frame client-side and arrive here as one of these.
pub const SUPPORTED_MIME_TYPES: [&str; 4] =
    ["image/png", "image/jpeg", "image/gif", "image/webp"];

/// Longest edge forwarded to the vision model; larger uploads are downscaled.
const MAX_VISION_EDGE: u32 = 2048;

pub struct ImageProcessor;

/// An upload that passed validation, ready for base64 data-URI encoding.
#[derive(Debug)]
pub struct PreparedUpload {
    pub data: Vec<u8>,
    pub mime: String,
}

impl ImageProcessor {
    pub fn new() -> Self {
        Self
    }

    pub fn is_supported_mime(&self, mime: &str) -> bool {
        mime.starts_with("image/") && SUPPORTED_MIME_TYPES.contains(&mime)
    }

    /// Decode the upload and downscale it when either edge exceeds the
    /// vision limit. Downscaled images are re-encoded as PNG, so the
    /// returned MIME may differ from the declared one.
    pub fn prepare_for_vision(
        &self,
        data: &[u8],
        declared_mime: &str,
    ) -> Result<PreparedUpload, AssetGenError> {
        let img = image::load_from_memory(data)
            .map_err(|e| AssetGenError::ImageProcessing(format!("Invalid image data: {}", e)))?;

        let (width, height) = img.dimensions();
        if width <= MAX_VISION_EDGE && height <= MAX_VISION_EDGE {
            return Ok(PreparedUpload {
                data: data.to_vec(),
                mime: declared_mime.to_string(),
            });
        }

        let ratio = (MAX_VISION_EDGE as f32 / width.max(height) as f32).min(1.0);
        let new_width = (width as f32 * ratio) as u32;
        let new_height = (height as f32 * ratio) as u32;

        let resized = img.resize(new_width, new_height, image::imageops::FilterType::Lanczos3);

        let mut output = Vec::new();
        resized
            .write_to(&mut std::io::Cursor::new(&mut output), ImgFormat::Png)
            .map_err(|e| {
                AssetGenError::ImageProcessing(format!("Failed to encode resized image: {}", e))
            })?;

        Ok(PreparedUpload {
            data: output,
            mime: "image/png".to_string(),
        })
    }
}

impl Default for ImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height));
        let mut out = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut out), ImgFormat::Png)
            .unwrap();
        out
    }

    #[test]
    fn supported_mime_gate() {
        let processor = ImageProcessor::new();
        for mime in SUPPORTED_MIME_TYPES {
            assert!(processor.is_supported_mime(mime));
        }
        assert!(!processor.is_supported_mime("application/pdf"));
        assert!(!processor.is_supported_mime("image/tiff"));
        assert!(!processor.is_supported_mime("video/mp4"));
        assert!(!processor.is_supported_mime(""));
    }

    #[test]
    fn small_upload_passes_through_untouched() {
        let processor = ImageProcessor::new();
        let data = png_bytes(4, 4);
        let prepared = processor.prepare_for_vision(&data, "image/png").unwrap();
        assert_eq!(prepared.data, data);
        assert_eq!(prepared.mime, "image/png");
    }

    #[test]
    fn oversized_upload_is_downscaled_to_png() {
        let processor = ImageProcessor::new();
        let data = png_bytes(MAX_VISION_EDGE + 100, 64);
        let prepared = processor.prepare_for_vision(&data, "image/png").unwrap();
        let resized = image::load_from_memory(&prepared.data).unwrap();
        assert!(resized.dimensions().0 <= MAX_VISION_EDGE);
        assert_eq!(prepared.mime, "image/png");
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let processor = ImageProcessor::new();
        let err = processor
            .prepare_for_vision(b"not an image", "image/png")
            .unwrap_err();
        assert!(matches!(err, AssetGenError::ImageProcessing(_)));
    }
}
