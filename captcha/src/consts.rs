//! Shared constants for challenge generation and drawing.

/// Mixed-case alphanumeric alphabet the code is drawn from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default number of characters in a challenge.
pub const DEFAULT_LENGTH: usize = 6;

/// Drawing surface width in CSS pixels.
pub const SURFACE_WIDTH: u32 = 140;

/// Drawing surface height in CSS pixels.
pub const SURFACE_HEIGHT: u32 = 48;

/// Maximum absolute glyph rotation in radians.
pub const MAX_GLYPH_TILT: f64 = 0.2;

/// Number of random strokes drawn over the glyphs.
pub const NOISE_LINES: usize = 5;

/// Upper bound (exclusive) for a noise stroke's alpha.
pub const MAX_NOISE_ALPHA: f64 = 0.5;

pub const BACKGROUND: &str = "#f3f4f6";
pub const FOREGROUND: &str = "#374151";
pub const FONT: &str = "bold 24px 'Courier New', monospace";
