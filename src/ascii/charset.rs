//! Character set definition for ASCII rendering.

/// Density ramp used for all output (8 levels).
/// Characters ordered from darkest ('.') to brightest ('@').
pub const DENSITY_RAMP: &[char] = &['.', ']', ':', '/', 'X', 'S', '#', '@'];
