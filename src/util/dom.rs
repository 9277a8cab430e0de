//! Small browser helpers. Native builds answer conservatively.

/// Ask the user to confirm a destructive action via `window.confirm`.
/// Returns `false` when no window is available.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}
