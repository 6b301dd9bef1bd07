//! Brightness to character mapping.

/// Map brightness values to ramp characters.
///
/// Converts brightness values (0-255) to characters from the provided
/// ramp, ordered from darkest to brightest. The index is
/// `brightness * (levels - 1) / 255`, so 0 selects the first character
/// and 255 the last. The index is clamped to the ramp as a guard against
/// out-of-range arithmetic.
///
/// # Example
/// ```
/// use img2ascii::ascii::{map_to_chars, DENSITY_RAMP};
///
/// let chars = map_to_chars(&[0, 128, 255], DENSITY_RAMP);
/// assert_eq!(chars, vec!['.', '/', '@']);
/// ```
pub fn map_to_chars(brightness: &[u8], ramp: &[char]) -> Vec<char> {
    if ramp.is_empty() {
        return vec![' '; brightness.len()];
    }

    let levels = ramp.len();
    brightness
        .iter()
        .map(|&b| {
            let idx = (b as usize * (levels - 1)) / 255;
            ramp[idx.min(levels - 1)]
        })
        .collect()
}
