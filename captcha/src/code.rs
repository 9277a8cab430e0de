//! Challenge code generation and comparison.

#[cfg(test)]
#[path = "code_test.rs"]
mod code_test;

use rand::Rng;

use crate::CaptchaError;
use crate::consts::ALPHABET;

/// How user input is compared against the generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CasePolicy {
    /// Exact byte-for-byte match.
    #[default]
    Sensitive,
    /// Both sides are uppercased before comparing.
    Insensitive,
}

impl CasePolicy {
    /// Parse a policy name (`sensitive` / `insensitive`), ignoring case.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sensitive" => Some(Self::Sensitive),
            "insensitive" => Some(Self::Insensitive),
            _ => None,
        }
    }
}

/// Generate a `length`-character code from [`ALPHABET`].
///
/// # Errors
///
/// Returns [`CaptchaError::ZeroLength`] when `length` is zero.
pub fn generate<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<String, CaptchaError> {
    if length == 0 {
        return Err(CaptchaError::ZeroLength);
    }
    let code = (0..length)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect();
    Ok(code)
}

/// Compare `input` against `code` under `policy`.
///
/// Surrounding whitespace in the input is ignored. Empty input never matches.
#[must_use]
pub fn validate(input: &str, code: &str, policy: CasePolicy) -> bool {
    let input = input.trim();
    if input.is_empty() || code.is_empty() {
        return false;
    }
    match policy {
        CasePolicy::Sensitive => input == code,
        CasePolicy::Insensitive => input.to_ascii_uppercase() == code.to_ascii_uppercase(),
    }
}
