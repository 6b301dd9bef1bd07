//! ASCII converter module for turning decoded images into text art.
//!
//! This module provides the complete pipeline for converting a decoded
//! image into ASCII art:
//!
//! 1. **Grid calculation** - fixed 75-column grid with cell aspect compensation
//! 2. **Resampling** - bilinear downscale to the character grid
//! 3. **Grayscale conversion** - RGB to luminance using BT.601
//! 4. **Character mapping** - map brightness to density ramp characters

mod charset;
mod convert;
mod dimensions;
mod grayscale;
mod mapping;

pub use charset::DENSITY_RAMP;
pub use convert::{convert, AsciiArt, ConvertError};
pub use dimensions::{output_dimensions, CHAR_ASPECT_SCALE, OUTPUT_WIDTH};
pub use grayscale::to_grayscale;
pub use mapping::map_to_chars;
