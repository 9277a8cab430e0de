use super::*;
use crate::consts::DEFAULT_LENGTH;
use crate::seeded_rng;

#[test]
fn generate_produces_requested_length() {
    let mut rng = seeded_rng(7);
    let code = generate(DEFAULT_LENGTH, &mut rng).expect("code");
    assert_eq!(code.chars().count(), 6);
}

#[test]
fn generate_uses_only_alphanumeric_characters() {
    let mut rng = seeded_rng(42);
    for _ in 0..50 {
        let code = generate(12, &mut rng).expect("code");
        assert!(code.bytes().all(|b| ALPHABET.contains(&b)), "unexpected char in {code}");
    }
}

#[test]
fn generate_rejects_zero_length() {
    let mut rng = seeded_rng(1);
    assert_eq!(generate(0, &mut rng), Err(CaptchaError::ZeroLength));
}

#[test]
fn successive_codes_differ() {
    let mut rng = seeded_rng(99);
    let first = generate(DEFAULT_LENGTH, &mut rng).expect("first");
    let second = generate(DEFAULT_LENGTH, &mut rng).expect("second");
    assert_ne!(first, second);
}

#[test]
fn same_seed_is_deterministic() {
    let a = generate(8, &mut seeded_rng(5)).expect("a");
    let b = generate(8, &mut seeded_rng(5)).expect("b");
    assert_eq!(a, b);
}

#[test]
fn sensitive_match_requires_exact_case() {
    assert!(validate("aB3xY9", "aB3xY9", CasePolicy::Sensitive));
    assert!(!validate("AB3XY9", "aB3xY9", CasePolicy::Sensitive));
}

#[test]
fn insensitive_match_ignores_case() {
    assert!(validate("ab3xy9", "aB3xY9", CasePolicy::Insensitive));
    assert!(!validate("ab3xy8", "aB3xY9", CasePolicy::Insensitive));
}

#[test]
fn validate_trims_input_and_rejects_empty() {
    assert!(validate("  aB3xY9 ", "aB3xY9", CasePolicy::Sensitive));
    assert!(!validate("   ", "aB3xY9", CasePolicy::Sensitive));
    assert!(!validate("", "", CasePolicy::Insensitive));
}

#[test]
fn case_policy_parses_known_names() {
    assert_eq!(CasePolicy::parse("Sensitive"), Some(CasePolicy::Sensitive));
    assert_eq!(CasePolicy::parse(" insensitive "), Some(CasePolicy::Insensitive));
    assert_eq!(CasePolicy::parse("loose"), None);
}
