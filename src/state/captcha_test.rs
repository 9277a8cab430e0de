use super::*;

fn fresh(seed: u64) -> CaptchaState {
    let mut state = CaptchaState::default();
    state.refresh(6, seed).unwrap();
    state
}

#[test]
fn refresh_produces_configured_length() {
    assert_eq!(fresh(1).code.chars().count(), 6);
    let mut state = CaptchaState::default();
    state.refresh(4, 1).unwrap();
    assert_eq!(state.code.len(), 4);
}

#[test]
fn refresh_yields_new_code_and_clears_input_and_error() {
    let mut state = fresh(1);
    let before = state.code.clone();
    let generation = state.generation;
    state.input = "typed".to_owned();
    state.error = Some("old".to_owned());

    state.refresh(6, 1).unwrap();
    assert_ne!(state.code, before, "same seed must still give a different code");
    assert!(state.input.is_empty());
    assert_eq!(state.error, None);
    assert_eq!(state.generation, generation + 1);
}

#[test]
fn matching_input_passes() {
    let mut state = fresh(7);
    state.input = state.code.clone();
    assert_eq!(state.check(CasePolicy::Sensitive, 6, 8), Ok(true));
    assert_eq!(state.error, None);
}

#[test]
fn mismatch_fails_regenerates_and_sets_error() {
    let mut state = fresh(7);
    let before = state.code.clone();
    state.input = "nope".to_owned();

    assert_eq!(state.check(CasePolicy::Sensitive, 6, 8), Ok(false));
    assert_ne!(state.code, before);
    assert!(state.input.is_empty());
    assert_eq!(state.error.as_deref(), Some(MISMATCH_MESSAGE));
}

#[test]
fn case_policy_is_honoured() {
    let mut state = CaptchaState { code: "aB3xY9".to_owned(), input: "AB3XY9".to_owned(), ..CaptchaState::default() };
    assert_eq!(state.check(CasePolicy::Insensitive, 6, 1), Ok(true));

    let mut state = CaptchaState { code: "aB3xY9".to_owned(), input: "AB3XY9".to_owned(), ..CaptchaState::default() };
    assert_eq!(state.check(CasePolicy::Sensitive, 6, 1), Ok(false));
}

#[test]
fn zero_length_refresh_is_an_error() {
    let mut state = CaptchaState::default();
    assert_eq!(state.refresh(0, 1), Err(CaptchaError::ZeroLength));
}

#[test]
fn server_challenge_lifecycle() {
    let mut state = CaptchaState { input: "old".to_owned(), ..CaptchaState::default() };
    state.begin_server_load();
    assert!(state.loading);
    assert!(!state.ready());
    assert!(state.input.is_empty());

    state.apply_server(CaptchaChallenge { captcha_id: "c-1".to_owned(), captcha_text: "Qw3rTy".to_owned() });
    assert!(state.ready());
    assert_eq!(state.code, "Qw3rTy");
    assert_eq!(state.captcha_id.as_deref(), Some("c-1"));
}

#[test]
fn server_failure_reports_error() {
    let mut state = CaptchaState::default();
    state.begin_server_load();
    state.server_failed();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
}
