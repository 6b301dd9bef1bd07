//! Image to ASCII art conversion.

use super::charset::DENSITY_RAMP;
use super::dimensions::output_dimensions;
use super::grayscale::to_grayscale;
use super::mapping::map_to_chars;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// ASCII art produced by [`convert`]: rows of density ramp characters.
///
/// Each row is exactly as wide as the output grid. `Display` renders the
/// art as a single text value with every row, including the last,
/// terminated by a newline, so stdout, file, and clipboard sinks agree
/// byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    rows: Vec<String>,
}

impl AsciiArt {
    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Row width in characters; 0 for an empty art.
    pub fn width(&self) -> usize {
        self.rows.first().map(|r| r.chars().count()).unwrap_or(0)
    }

    /// True when the conversion produced no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows without line terminators.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl std::fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Errors that can occur during conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The image has a zero dimension.
    #[error("invalid image: dimensions {width}x{height} (both must be positive)")]
    InvalidImage { width: u32, height: u32 },
}

/// Convert a decoded image to ASCII art.
///
/// The image is resampled to a 75-column character grid with bilinear
/// filtering (`FilterType::Triangle`), each sample is reduced to BT.601
/// luminance, and the luminance is mapped onto [`DENSITY_RAMP`]. The
/// conversion is pure: the same pixel data always produces byte-identical
/// output.
///
/// Sources with extreme aspect ratios can yield an empty art (zero rows).
/// That is a valid result, not an error.
///
/// # Errors
/// [`ConvertError::InvalidImage`] when either image dimension is zero.
pub fn convert(image: &RgbaImage) -> Result<AsciiArt, ConvertError> {
    let (src_width, src_height) = image.dimensions();
    if src_width == 0 || src_height == 0 {
        return Err(ConvertError::InvalidImage {
            width: src_width,
            height: src_height,
        });
    }

    let (width, height) = output_dimensions(src_width, src_height);
    log::debug!(
        "converting {}x{} image to {}x{} character grid",
        src_width,
        src_height,
        width,
        height
    );

    if height == 0 {
        return Ok(AsciiArt { rows: Vec::new() });
    }

    let resampled = imageops::resize(image, width, height, FilterType::Triangle);
    let brightness = to_grayscale(&resampled);
    let chars = map_to_chars(&brightness, DENSITY_RAMP);

    let rows = chars
        .chunks_exact(width as usize)
        .map(|row| row.iter().collect::<String>())
        .collect();

    Ok(AsciiArt { rows })
}
