//! Image file decoding.
//!
//! The converter works on in-memory pixels; this module is the boundary
//! that turns a file on disk into those pixels.

use image::RgbaImage;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading an image file.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The file could not be opened or its contents are not a supported
    /// image format.
    #[error("failed to load image '{path}': {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Load and decode an image file into RGBA pixels.
///
/// Accepts the raster formats the `image` crate decodes (PNG, JPEG, GIF,
/// BMP, WebP, ...). The frame is converted to RGBA8 regardless of the
/// source color type; the converter ignores the alpha channel.
pub fn load_image(path: &Path) -> Result<RgbaImage, DecodeError> {
    let decoded = image::open(path).map_err(|source| DecodeError::Load {
        path: path.to_path_buf(),
        source,
    })?;

    let image = decoded.to_rgba8();
    log::debug!(
        "decoded '{}': {}x{}",
        path.display(),
        image.width(),
        image.height()
    );

    Ok(image)
}
