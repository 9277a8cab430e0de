//! Rendering: draws a computed [`Layout`] to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{BACKGROUND, FONT, FOREGROUND};
use crate::layout::{Glyph, Layout, NoiseLine};

/// Clear the surface and draw background, glyphs and noise.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, layout: &Layout) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, layout.width, layout.height);
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

    ctx.set_font(FONT);
    ctx.set_fill_style_str(FOREGROUND);
    ctx.set_text_baseline("middle");
    ctx.set_text_align("center");
    for glyph in &layout.glyphs {
        draw_glyph(ctx, glyph)?;
    }

    for line in &layout.noise {
        draw_noise(ctx, line);
    }
    Ok(())
}

/// Blank the surface, e.g. while a server challenge is loading.
pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.clear_rect(0.0, 0.0, width, height);
}

fn draw_glyph(ctx: &CanvasRenderingContext2d, glyph: &Glyph) -> Result<(), JsValue> {
    ctx.save();
    ctx.translate(glyph.x, glyph.y)?;
    ctx.rotate(glyph.angle)?;
    ctx.fill_text(&glyph.ch.to_string(), 0.0, 0.0)?;
    ctx.restore();
    Ok(())
}

fn draw_noise(ctx: &CanvasRenderingContext2d, line: &NoiseLine) {
    ctx.set_stroke_style_str(&line.stroke_style());
    ctx.set_line_width(1.0);
    ctx.begin_path();
    ctx.move_to(line.from.0, line.from.1);
    ctx.line_to(line.to.0, line.to.1);
    ctx.stroke();
}
