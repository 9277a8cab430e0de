//! Browser entry point (built with `trunk serve --features csr`).

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            web_sys::console::warn_1(&format!("logger init failed: {e}").into());
        }
        log::info!("tailorshop starting");
        leptos::mount::mount_to_body(tailorshop::app::App);
    }
}
