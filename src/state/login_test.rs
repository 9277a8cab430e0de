use super::*;
use crate::net::api::interpret_login as decode;
use crate::state::captcha::CaptchaState;
use crate::state::session::{SessionState, TOKEN_KEY};
use crate::util::storage::{KeyValueStore, MemoryStorage};
use captcha::CasePolicy;

// =============================================================
// Input handling
// =============================================================

#[test]
fn whitespace_is_stripped_from_credentials() {
    assert_eq!(strip_whitespace(" de mo\t"), "demo");
}

#[test]
fn missing_username_or_password_is_rejected_first() {
    assert_eq!(validate_credentials("", "x", "abc"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_credentials("demo", "", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn missing_captcha_is_rejected() {
    assert_eq!(validate_credentials("demo", "x", "  "), Err(MISSING_CAPTCHA));
    assert_eq!(validate_credentials("demo", "x", "aB3"), Ok(()));
}

#[test]
fn otp_must_be_numeric() {
    assert_eq!(parse_otp(" 1234 "), Some(1234));
    assert_eq!(parse_otp("12a4"), None);
    assert_eq!(parse_otp(""), None);
    assert_eq!(parse_otp("-12"), None);
}

// =============================================================
// Responses
// =============================================================

#[test]
fn captcha_error_type_requests_refresh() {
    let outcome = interpret_login(
        decode(400, r#"{"success":false,"message":"Wrong code","errorType":"captcha_invalid"}"#).unwrap(),
    );
    assert_eq!(outcome, LoginOutcome::Failed { message: "Wrong code".to_owned(), refresh_captcha: true });
}

#[test]
fn captcha_in_message_requests_refresh() {
    let outcome = interpret_login(decode(200, r#"{"success":false,"message":"Captcha expired"}"#).unwrap());
    assert!(matches!(outcome, LoginOutcome::Failed { refresh_captcha: true, .. }));
}

#[test]
fn bad_password_does_not_refresh_captcha() {
    let outcome = interpret_login(decode(401, r#"{"success":false}"#).unwrap());
    assert_eq!(outcome, LoginOutcome::Failed { message: "Login failed".to_owned(), refresh_captcha: false });
}

#[test]
fn success_without_token_is_a_failure() {
    let outcome = interpret_login(decode(200, r#"{"success":true,"data":{"userName":"demo"}}"#).unwrap());
    assert!(matches!(outcome, LoginOutcome::Failed { .. }));
}

#[test]
fn otp_failure_uses_server_message() {
    let outcome = interpret_otp(decode(200, r#"{"success":false,"message":"OTP expired"}"#).unwrap());
    assert_eq!(outcome, LoginOutcome::Failed { message: "OTP expired".to_owned(), refresh_captcha: false });
}

// =============================================================
// Scenario: demo / x / matching captcha -> OTP -> dashboard
// =============================================================

#[test]
fn demo_login_goes_through_otp_before_persisting_token() {
    let mut store = MemoryStorage::new();
    let mut captcha = CaptchaState::default();
    captcha.refresh(6, 42).unwrap();
    captcha.input = captcha.code.clone();

    let username = strip_whitespace("demo");
    let password = strip_whitespace("x");
    assert_eq!(validate_credentials(&username, &password, &captcha.input), Ok(()));
    assert_eq!(captcha.check(CasePolicy::Sensitive, 6, 43), Ok(true));

    let request = build_login_request(&username, &password, captcha.captcha_id.as_deref(), &captcha.input);
    assert_eq!(request.user_name, "demo");
    assert_eq!(request.captcha_code.len(), 6);

    let response = decode(
        200,
        r#"{"success":true,"message":"OTP sent","data":{"requiresOTP":true,"userId":9,"userLoginId":"55"}}"#,
    )
    .unwrap();
    let LoginOutcome::OtpRequired(challenge) = interpret_login(response) else {
        panic!("expected OTP step");
    };
    assert_eq!(challenge.message, "OTP sent");
    assert_eq!(store.get(TOKEN_KEY), None, "no token before OTP");

    let mut state = LoginState { step: LoginStep::Otp(challenge.clone()), ..LoginState::default() };
    state.otp = "4821".to_owned();
    let verify = build_verify_request(&challenge, &state.otp).unwrap();
    assert_eq!(verify, VerifyOtpRequest { user_id: 9, otp: 4821, user_login_id: "55".to_owned() });

    let response = decode(
        200,
        r#"{"success":true,"token":"jwt-1","data":{"userName":"demo","userLoginId":"55"},"userRights":[]}"#,
    )
    .unwrap();
    let LoginOutcome::Authenticated(grant) = interpret_otp(response) else {
        panic!("expected authenticated");
    };
    let session = SessionState::establish(&mut store, grant.token, grant.user, grant.rights);
    assert!(session.is_authenticated());
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt-1"));
    assert_eq!(crate::util::auth::guard(&session), crate::util::auth::GuardDecision::Render);
}

#[test]
fn direct_login_without_otp_is_authenticated() {
    let response = decode(200, r#"{"success":true,"token":"jwt-2","data":{"userName":"demo","requiresOTP":false}}"#)
        .unwrap();
    let LoginOutcome::Authenticated(grant) = interpret_login(response) else {
        panic!("expected authenticated");
    };
    assert_eq!(grant.token, "jwt-2");
    assert_eq!(grant.user.and_then(|u| u.user_name).as_deref(), Some("demo"));
    assert_eq!(grant.rights, None);
}

#[test]
fn back_to_credentials_clears_otp() {
    let mut state = LoginState {
        otp: "12".to_owned(),
        step: LoginStep::Otp(OtpChallenge { user_id: 1, user_login_id: "2".to_owned(), message: String::new() }),
        ..LoginState::default()
    };
    state.back_to_credentials();
    assert_eq!(state.step, LoginStep::Credentials);
    assert!(state.otp.is_empty());
}

#[test]
fn local_captcha_is_regenerated_after_any_failure() {
    assert!(refresh_after_failure(CaptchaMode::Local, false));
    assert!(refresh_after_failure(CaptchaMode::Local, true));
}

#[test]
fn server_captcha_refreshes_only_when_flagged() {
    assert!(!refresh_after_failure(CaptchaMode::Server, false));
    assert!(refresh_after_failure(CaptchaMode::Server, true));
}
