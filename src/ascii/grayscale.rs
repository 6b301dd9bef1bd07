//! RGBA to grayscale conversion using the ITU-R BT.601 luminance formula.

use image::RgbaImage;

/// Convert an RGBA image to grayscale.
///
/// The luminance formula is: Y = 0.299*R + 0.587*G + 0.114*B
///
/// Integer math keeps the hot path free of floating point; the
/// coefficients are scaled by 1000 (299 + 587 + 114 = 1000). Alpha is
/// ignored.
///
/// # Returns
/// A vector of brightness values (0-255), one per pixel, in row-major
/// order.
pub fn to_grayscale(image: &RgbaImage) -> Vec<u8> {
    let pixel_count = (image.width() * image.height()) as usize;
    let mut gray = Vec::with_capacity(pixel_count);

    // Process RGBA quadruplets; the fourth byte is the alpha channel.
    for rgba in image.as_raw().chunks_exact(4) {
        let r = rgba[0] as u32;
        let g = rgba[1] as u32;
        let b = rgba[2] as u32;
        let luminance = (299 * r + 587 * g + 114 * b) / 1000;
        gray.push(luminance as u8);
    }

    gray
}
