//! Image decoding with format detection.

use image::{DynamicImage, GenericImageView};
use std::io::Cursor;

use crate::error::{FetchError, ItemResult};

/// Result of decoding an image source.
#[derive(Debug)]
pub struct DecodedImage {
    /// The decoded pixel data
    pub image: DynamicImage,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

/// Decode an in-memory byte buffer, sniffing the format from its content.
///
/// `source` names the origin (URL or filename) for error messages only.
pub fn decode_bytes(bytes: &[u8], source: &str) -> ItemResult<DecodedImage> {
    let reader = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| FetchError::Decode {
            name: source.to_string(),
            message: format!("Cannot detect image format: {}", e),
        })?;
    let image = reader.decode().map_err(|e| FetchError::Decode {
        name: source.to_string(),
        message: e.to_string(),
    })?;

    let (width, height) = image.dimensions();
    Ok(DecodedImage {
        image,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::new_rgb8(width, height);
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_decode_valid_png() {
        let bytes = png_bytes(64, 48);
        let decoded = decode_bytes(&bytes, "test.png").unwrap();
        assert_eq!(decoded.width, 64);
        assert_eq!(decoded.height, 48);
    }

    #[test]
    fn test_decode_garbage_fails() {
        let err = decode_bytes(b"definitely not an image", "junk.bin").unwrap_err();
        match err {
            FetchError::Decode { name, .. } => assert_eq!(name, "junk.bin"),
            other => panic!("expected Decode error, got {other}"),
        }
    }

    #[test]
    fn test_decode_sniffs_content_not_name() {
        // PNG bytes under a .jpg name still decode as PNG
        let bytes = png_bytes(10, 10);
        let decoded = decode_bytes(&bytes, "misnamed.jpg").unwrap();
        assert_eq!(decoded.width, 10);
    }
}
