//! Aspect-preserving width resize with Lanczos resampling.

use image::imageops::FilterType;

use super::decode::DecodedImage;

/// Compute the target height for a width resize.
///
/// `floor(height * target_width / width)` with integer truncation; the
/// widened arithmetic keeps large dimensions from overflowing. Callers
/// guarantee `width > 0` and `target_width > 0`.
pub fn target_height(width: u32, height: u32, target_width: u32) -> u32 {
    ((height as u64 * target_width as u64) / width as u64) as u32
}

/// Resize an image to `target_width`, preserving aspect ratio.
///
/// No independent height parameter exists; the height always follows from
/// the source aspect ratio. A degenerate source (extreme aspect ratio) can
/// truncate to height 0; the orchestrator drops such items.
pub fn resize(decoded: &DecodedImage, target_width: u32) -> DecodedImage {
    let height = target_height(decoded.width, decoded.height, target_width);
    let image = decoded
        .image
        .resize_exact(target_width, height, FilterType::Lanczos3);

    DecodedImage {
        image,
        width: target_width,
        height,
    }
}
