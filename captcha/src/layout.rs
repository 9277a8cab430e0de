//! Glyph placement and noise strokes, computed before drawing.
//!
//! Glyphs sit at evenly spaced horizontal slots (`width / (len + 1)` apart) on
//! the vertical centre line, each with a small random tilt. Noise strokes have
//! both endpoints inside the surface.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use rand::Rng;

use crate::CaptchaError;
use crate::consts::{MAX_GLYPH_TILT, MAX_NOISE_ALPHA, NOISE_LINES};

/// One character placed on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub ch: char,
    pub x: f64,
    pub y: f64,
    /// Rotation in radians around the glyph centre.
    pub angle: f64,
}

/// A random stroke drawn over the glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseLine {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub alpha: f64,
}

impl NoiseLine {
    /// CSS stroke colour for this line.
    #[must_use]
    pub fn stroke_style(&self) -> String {
        format!("rgba(100, 100, 100, {:.3})", self.alpha)
    }
}

/// Everything needed to draw one challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub glyphs: Vec<Glyph>,
    pub noise: Vec<NoiseLine>,
}

impl Layout {
    /// Place `text` on a `width` x `height` surface.
    ///
    /// # Errors
    ///
    /// Returns [`CaptchaError::ZeroLength`] for empty text and
    /// [`CaptchaError::SurfaceTooSmall`] when either dimension is zero.
    pub fn compute<R: Rng + ?Sized>(text: &str, width: u32, height: u32, rng: &mut R) -> Result<Self, CaptchaError> {
        if text.is_empty() {
            return Err(CaptchaError::ZeroLength);
        }
        if width == 0 || height == 0 {
            return Err(CaptchaError::SurfaceTooSmall { width, height });
        }
        let w = f64::from(width);
        let h = f64::from(height);
        let slots = text.chars().count() + 1;
        #[allow(clippy::cast_precision_loss)]
        let gap = w / slots as f64;

        #[allow(clippy::cast_precision_loss)]
        let glyphs = text
            .chars()
            .enumerate()
            .map(|(i, ch)| Glyph {
                ch,
                x: gap * (i + 1) as f64,
                y: h / 2.0,
                angle: rng.random_range(-MAX_GLYPH_TILT..MAX_GLYPH_TILT),
            })
            .collect();

        let noise = (0..NOISE_LINES)
            .map(|_| NoiseLine {
                from: (rng.random_range(0.0..w), rng.random_range(0.0..h)),
                to: (rng.random_range(0.0..w), rng.random_range(0.0..h)),
                alpha: rng.random_range(0.0..MAX_NOISE_ALPHA),
            })
            .collect();

        Ok(Self { width: w, height: h, glyphs, noise })
    }

    /// The text the glyphs spell, in order.
    #[must_use]
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.ch).collect()
    }
}
