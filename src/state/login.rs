//! Login and OTP state machine.
//!
//! `Credentials` -> (`OtpRequired` -> `Otp`) -> `Authenticated`. A token is
//! persisted only on `Authenticated`; the OTP step holds just the handshake
//! ids the verify call needs.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::config::CaptchaMode;
use crate::net::types::{LoginData, LoginRequest, LoginResponse, UserInfo, UserRight, VerifyOtpRequest};

pub const MISSING_CREDENTIALS: &str = "Username and password are required.";
pub const MISSING_CAPTCHA: &str = "Please enter the security code.";
pub const DEFAULT_OTP_PROMPT: &str = "Enter the OTP sent to your email/mobile";
pub const INVALID_OTP: &str = "Invalid OTP";
const LOGIN_FAILED: &str = "Login failed";
const CAPTCHA_ERROR_TYPE: &str = "captcha_invalid";

/// Whether a failed attempt needs a fresh CAPTCHA. A locally checked code is
/// single-use, so every failure regenerates it; the server flags its own.
pub fn refresh_after_failure(mode: CaptchaMode, flagged: bool) -> bool {
    flagged || mode == CaptchaMode::Local
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OtpChallenge {
    pub user_id: i64,
    pub user_login_id: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoginStep {
    #[default]
    Credentials,
    Otp(OtpChallenge),
}

/// What a successful login hands to the session owner.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionGrant {
    pub token: String,
    pub user: Option<UserInfo>,
    pub rights: Option<Vec<UserRight>>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    OtpRequired(OtpChallenge),
    Authenticated(SessionGrant),
    Failed { message: String, refresh_captcha: bool },
}

/// Form fields of the login card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub show_password: bool,
    pub otp: String,
    pub step: LoginStep,
}

impl LoginState {
    pub fn back_to_credentials(&mut self) {
        self.step = LoginStep::Credentials;
        self.otp.clear();
    }
}

/// Usernames and passwords never contain whitespace; it is dropped as typed.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Presence checks run before any request.
///
/// # Errors
///
/// Returns the message to show when a field is missing.
pub fn validate_credentials(username: &str, password: &str, captcha_input: &str) -> Result<(), &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    if captcha_input.trim().is_empty() {
        return Err(MISSING_CAPTCHA);
    }
    Ok(())
}

pub fn build_login_request(username: &str, password: &str, captcha_id: Option<&str>, captcha_code: &str) -> LoginRequest {
    LoginRequest {
        user_name: username.to_owned(),
        password: password.to_owned(),
        captcha_id: captcha_id.map(str::to_owned),
        captcha_code: captcha_code.trim().to_owned(),
    }
}

fn grant(response: LoginResponse) -> Option<SessionGrant> {
    let token = response.token.filter(|t| !t.trim().is_empty())?;
    let user = response.data.and_then(|data| serde_json::from_value::<UserInfo>(data).ok());
    Some(SessionGrant { token, user, rights: response.user_rights })
}

/// Interpret the answer to `POST /api/Auth/login`.
pub fn interpret_login(response: LoginResponse) -> LoginOutcome {
    if !response.success {
        let mentions_captcha = response.message.as_deref().is_some_and(|m| m.to_lowercase().contains("captcha"));
        let refresh_captcha = response.error_type.as_deref() == Some(CAPTCHA_ERROR_TYPE) || mentions_captcha;
        return LoginOutcome::Failed {
            message: response.message.unwrap_or_else(|| LOGIN_FAILED.to_owned()),
            refresh_captcha,
        };
    }

    let handshake = response
        .data
        .as_ref()
        .and_then(|data| serde_json::from_value::<LoginData>(data.clone()).ok())
        .unwrap_or_default();
    if handshake.requires_otp {
        return LoginOutcome::OtpRequired(OtpChallenge {
            user_id: handshake.user_id,
            user_login_id: handshake.user_login_id,
            message: response.message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| DEFAULT_OTP_PROMPT.to_owned()),
        });
    }

    grant(response).map_or_else(
        || LoginOutcome::Failed { message: LOGIN_FAILED.to_owned(), refresh_captcha: false },
        LoginOutcome::Authenticated,
    )
}

/// Interpret the answer to `POST /api/Auth/verify-otp`.
pub fn interpret_otp(response: LoginResponse) -> LoginOutcome {
    if !response.success {
        return LoginOutcome::Failed {
            message: response.message.unwrap_or_else(|| INVALID_OTP.to_owned()),
            refresh_captcha: false,
        };
    }
    grant(response).map_or_else(
        || LoginOutcome::Failed { message: INVALID_OTP.to_owned(), refresh_captcha: false },
        LoginOutcome::Authenticated,
    )
}

/// The OTP is sent as a number.
pub fn parse_otp(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

pub fn build_verify_request(challenge: &OtpChallenge, otp: &str) -> Option<VerifyOtpRequest> {
    Some(VerifyOtpRequest {
        user_id: challenge.user_id,
        otp: parse_otp(otp)?,
        user_login_id: challenge.user_login_id.clone(),
    })
}
