//! Visual CAPTCHA challenge for the tailoring-shop login form.
//!
//! This crate keeps the challenge itself pure: code generation and comparison
//! do not know about canvases, and glyph placement is computed as plain data
//! before anything is drawn. Only [`render`] talks to the browser.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`code`] | Code generation and case-policy comparison |
//! | [`layout`] | Glyph positions, rotations and noise strokes for a surface |
//! | [`render`] | Draws a [`layout::Layout`] onto a 2D canvas context |
//! | [`consts`] | Alphabet, surface size, font and noise constants |

pub mod code;
pub mod consts;
pub mod layout;
pub mod render;

pub use code::{CasePolicy, generate, validate};
pub use layout::{Glyph, Layout, NoiseLine};

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Errors produced while building a challenge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaptchaError {
    /// A challenge must contain at least one character.
    #[error("captcha length must be at least 1")]
    ZeroLength,
    /// The drawing surface cannot hold any glyphs.
    #[error("captcha surface too small: {width}x{height}")]
    SurfaceTooSmall { width: u32, height: u32 },
}

/// Build the non-cryptographic generator used for codes and layouts.
///
/// Callers supply the seed; in the browser it comes from the clock and
/// `Math.random`, in tests it is fixed.
#[must_use]
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
