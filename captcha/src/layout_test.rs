use super::*;
use crate::consts::{SURFACE_HEIGHT, SURFACE_WIDTH};
use crate::seeded_rng;

#[test]
fn glyphs_are_evenly_spaced_on_centre_line() {
    let layout = Layout::compute("aB3", 140, 48, &mut seeded_rng(3)).expect("layout");
    let xs: Vec<f64> = layout.glyphs.iter().map(|g| g.x).collect();
    assert_eq!(xs, vec![35.0, 70.0, 105.0]);
    assert!(layout.glyphs.iter().all(|g| (g.y - 24.0).abs() < f64::EPSILON));
}

#[test]
fn glyph_tilt_stays_within_bounds() {
    let layout = Layout::compute("ABCDEFGHIJ", SURFACE_WIDTH, SURFACE_HEIGHT, &mut seeded_rng(11)).expect("layout");
    assert!(layout.glyphs.iter().all(|g| g.angle.abs() <= MAX_GLYPH_TILT));
}

#[test]
fn noise_lines_stay_inside_surface() {
    let layout = Layout::compute("xyz", SURFACE_WIDTH, SURFACE_HEIGHT, &mut seeded_rng(21)).expect("layout");
    assert_eq!(layout.noise.len(), NOISE_LINES);
    for line in &layout.noise {
        for (x, y) in [line.from, line.to] {
            assert!((0.0..140.0).contains(&x));
            assert!((0.0..48.0).contains(&y));
        }
        assert!((0.0..MAX_NOISE_ALPHA).contains(&line.alpha));
    }
}

#[test]
fn text_reads_back_glyphs_in_order() {
    let layout = Layout::compute("Qw7Zp2", SURFACE_WIDTH, SURFACE_HEIGHT, &mut seeded_rng(8)).expect("layout");
    assert_eq!(layout.text(), "Qw7Zp2");
}

#[test]
fn empty_text_is_rejected() {
    let err = Layout::compute("", SURFACE_WIDTH, SURFACE_HEIGHT, &mut seeded_rng(0)).unwrap_err();
    assert_eq!(err, CaptchaError::ZeroLength);
}

#[test]
fn zero_sized_surface_is_rejected() {
    let err = Layout::compute("abc", 0, 48, &mut seeded_rng(0)).unwrap_err();
    assert_eq!(err, CaptchaError::SurfaceTooSmall { width: 0, height: 48 });
}

#[test]
fn stroke_style_formats_alpha() {
    let line = NoiseLine { from: (0.0, 0.0), to: (1.0, 1.0), alpha: 0.25 };
    assert_eq!(line.stroke_style(), "rgba(100, 100, 100, 0.250)");
}
