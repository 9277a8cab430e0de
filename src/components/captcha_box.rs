//! Canvas showing the current CAPTCHA challenge with a refresh button.
//!
//! DESIGN
//! ======
//! The canvas redraws whenever `CaptchaState::generation` moves. Glyph
//! placement comes from `captcha::Layout`, seeded per draw, so the same code
//! never renders twice the same way.

use leptos::prelude::*;

use crate::state::captcha::CaptchaState;

#[component]
pub fn CaptchaBox(state: RwSignal<CaptchaState>, on_refresh: Callback<()>) -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Typing into the answer field must not redraw the canvas.
    let generation = Memo::new(move |_| state.with(|s| s.generation));

    #[cfg(feature = "csr")]
    Effect::new(move || {
        generation.track();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let code = state.with_untracked(|s| s.code.clone());
        draw_challenge(&canvas, &code);
    });

    view! {
        <div class="captcha-box">
            <canvas
                class="captcha-box__canvas"
                data-generation=move || generation.get()
                class:captcha-box__canvas--loading=move || state.with(|s| s.loading)
                node_ref=canvas_ref
                width=captcha::consts::SURFACE_WIDTH
                height=captcha::consts::SURFACE_HEIGHT
                title="Click to refresh captcha"
                on:click=move |_| on_refresh.run(())
            ></canvas>
            <button
                type="button"
                class="btn captcha-box__refresh"
                title="Refresh Captcha"
                disabled=move || state.with(|s| s.loading)
                on:click=move |_| on_refresh.run(())
            >
                "↻"
            </button>
        </div>
    }
}

#[cfg(feature = "csr")]
fn draw_challenge(canvas: &web_sys::HtmlCanvasElement, code: &str) {
    use wasm_bindgen::JsCast as _;

    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx,
        _ => {
            log::warn!("captcha canvas has no 2d context");
            return;
        }
    };
    let Ok(ctx) = ctx.dyn_into::<web_sys::CanvasRenderingContext2d>() else {
        return;
    };
    let (width, height) = (canvas.width(), canvas.height());
    if code.is_empty() {
        captcha::render::clear(&ctx, f64::from(width), f64::from(height));
        return;
    }
    let mut rng = captcha::seeded_rng(crate::util::entropy::seed());
    match captcha::Layout::compute(code, width, height, &mut rng) {
        Ok(layout) => {
            if let Err(e) = captcha::render::draw(&ctx, &layout) {
                log::warn!("captcha draw failed: {e:?}");
            }
        }
        Err(e) => log::warn!("captcha layout failed: {e}"),
    }
}
