//! Output grid calculation for aspect-ratio-correct ASCII rendering.

/// Output width in characters. Every conversion renders to this preset.
pub const OUTPUT_WIDTH: u32 = 75;

/// Vertical compensation factor for monospace character cells.
/// Cells are taller than wide, so mapping pixels to characters one-to-one
/// stretches the image vertically; scaling the row count by 0.55 restores
/// the source aspect ratio on screen.
pub const CHAR_ASPECT_SCALE: f32 = 0.55;

/// Calculate the character grid for a source image.
///
/// The width is fixed at [`OUTPUT_WIDTH`]; the height follows the source
/// aspect ratio, scaled by [`CHAR_ASPECT_SCALE`] and truncated:
///
/// ```text
/// height = floor(img_height * (75 / img_width) * 0.55)
/// ```
///
/// Returns `(0, 0)` when either source dimension is zero. A zero height
/// with positive inputs is a valid degenerate grid: extremely wide
/// sources produce no rows.
///
/// # Example
/// ```
/// use img2ascii::ascii::output_dimensions;
///
/// assert_eq!(output_dimensions(100, 100), (75, 41));
/// ```
pub fn output_dimensions(img_width: u32, img_height: u32) -> (u32, u32) {
    if img_width == 0 || img_height == 0 {
        return (0, 0);
    }

    let height =
        (img_height as f32 * (OUTPUT_WIDTH as f32 / img_width as f32) * CHAR_ASPECT_SCALE) as u32;

    (OUTPUT_WIDTH, height)
}
