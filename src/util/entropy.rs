//! Seeds for the CAPTCHA generator.
//!
//! The challenge only has to look random to a person, so the seed mixes the
//! clock with `Math.random()` in the browser and the system clock natively.

/// A fresh 64-bit seed.
pub fn seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let random = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        random ^ now.rotate_left(32)
    }
    #[cfg(not(feature = "csr"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};

        #[allow(clippy::cast_possible_truncation)]
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_nanos() as u64);
        nanos
    }
}
