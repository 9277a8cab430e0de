//! CAPTCHA challenge state for the login form.
//!
//! The challenge text either comes from [`captcha::generate`] (local mode) or
//! from the API (server mode). `generation` increases with every new text so
//! the canvas knows when to redraw.

#[cfg(test)]
#[path = "captcha_test.rs"]
mod captcha_test;

use captcha::{CaptchaError, CasePolicy};

use crate::net::types::CaptchaChallenge;

pub const MISMATCH_MESSAGE: &str = "Invalid security code. Please try again.";
pub const LOAD_FAILED_MESSAGE: &str = "Could not load security check.";

const MAX_REGENERATE_ATTEMPTS: u64 = 8;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CaptchaState {
    /// Text currently drawn.
    pub code: String,
    /// Server challenge id; `None` for locally generated codes.
    pub captcha_id: Option<String>,
    pub input: String,
    pub error: Option<String>,
    pub generation: u64,
    pub loading: bool,
}

impl CaptchaState {
    /// Draw a fresh local code, clearing input and error. The new code always
    /// differs from the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`CaptchaError::ZeroLength`] when `length` is zero.
    pub fn refresh(&mut self, length: usize, seed: u64) -> Result<(), CaptchaError> {
        let mut next = String::new();
        for attempt in 0..MAX_REGENERATE_ATTEMPTS {
            let mut rng = captcha::seeded_rng(seed.wrapping_add(attempt));
            next = captcha::generate(length, &mut rng)?;
            if next != self.code {
                break;
            }
        }
        self.code = next;
        self.captcha_id = None;
        self.input.clear();
        self.error = None;
        self.loading = false;
        self.generation += 1;
        Ok(())
    }

    /// Compare the typed input with the local code. A mismatch regenerates
    /// the code and then records the error so it survives the refresh.
    ///
    /// # Errors
    ///
    /// Propagates a regeneration failure.
    pub fn check(&mut self, policy: CasePolicy, length: usize, seed: u64) -> Result<bool, CaptchaError> {
        if captcha::validate(&self.input, &self.code, policy) {
            self.error = None;
            return Ok(true);
        }
        self.refresh(length, seed)?;
        self.error = Some(MISMATCH_MESSAGE.to_owned());
        Ok(false)
    }

    /// Start fetching a server challenge: blank the canvas and input.
    pub fn begin_server_load(&mut self) {
        self.code.clear();
        self.captcha_id = None;
        self.input.clear();
        self.loading = true;
        self.generation += 1;
    }

    pub fn apply_server(&mut self, challenge: CaptchaChallenge) {
        self.code = challenge.captcha_text;
        self.captcha_id = Some(challenge.captcha_id);
        self.input.clear();
        self.error = None;
        self.loading = false;
        self.generation += 1;
    }

    pub fn server_failed(&mut self) {
        self.loading = false;
        self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
    }

    /// Whether there is a challenge to answer.
    pub fn ready(&self) -> bool {
        !self.loading && !self.code.is_empty()
    }
}
