//! REST client for the ERP API.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: every call resolves to [`ApiError::Unavailable`] so the
//! pure request/response helpers stay testable without a browser.
//!
//! ERROR HANDLING
//! ==============
//! The API answers with a `{success, message, data}` envelope. A non-2xx
//! status or `success: false` becomes an [`ApiError`] carrying the server's
//! message, which screens surface verbatim in a notification.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    CaptchaChallenge, Company, Envelope, LoginRequest, LoginResponse, LogoutRequest, PageRight, SaveRightsRequest,
    User, UserQuery, VerifyOtpRequest,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("{0}")]
    Rejected(String),
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text for a notification: the server's message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected(message) | Self::Status { message: Some(message), .. } if !message.trim().is_empty() => {
                message.clone()
            }
            _ => fallback.to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// CRUD collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Contacts,
    Users,
    Measurements,
    TailoringItems,
}

impl Resource {
    pub fn collection(self) -> &'static str {
        match self {
            Self::Contacts => "/api/Contact",
            Self::Users => "/api/user",
            Self::Measurements => "/api/measurement",
            Self::TailoringItems => "/api/tailoring-items",
        }
    }

    pub fn item(self, id: i64) -> String {
        format!("{}/{id}", self.collection())
    }

    /// Create when `id` is 0, otherwise update the existing record.
    pub fn save_target(self, id: i64) -> (Method, String) {
        if id == 0 {
            (Method::Post, self.collection().to_owned())
        } else {
            (Method::Put, self.item(id))
        }
    }
}

pub const LOGIN_PATH: &str = "/api/Auth/login";
pub const VERIFY_OTP_PATH: &str = "/api/Auth/verify-otp";
pub const CAPTCHA_PATH: &str = "/api/Auth/generate-captcha";
pub const LOGOUT_PATH: &str = "/api/Auth/logout";
pub const COMPANIES_PATH: &str = "/api/company";
pub const SAVE_RIGHTS_PATH: &str = "/api/user/save-rights";

pub fn user_rights_path(user_id: i64) -> String {
    format!("/api/user/rights/{user_id}")
}

/// `/api/user?pageIndex=..&pageCount=..[&search=..][&active=..]`.
pub fn user_list_path(query: &UserQuery) -> String {
    match serde_urlencoded::to_string(query) {
        Ok(qs) if !qs.is_empty() => format!("{}?{qs}", Resource::Users.collection()),
        Ok(_) => Resource::Users.collection().to_owned(),
        Err(e) => {
            log::warn!("user query encode failed: {e}");
            Resource::Users.collection().to_owned()
        }
    }
}

fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

fn parse_json(body: &str) -> Option<serde_json::Value> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str(body).ok()
}

fn message_of(value: &serde_json::Value) -> Option<String> {
    value.get("message").and_then(serde_json::Value::as_str).map(str::to_owned)
}

/// Fail on a non-2xx status, keeping any server message.
fn check_status(status: u16, body: &str) -> Result<Option<serde_json::Value>, ApiError> {
    let json = parse_json(body);
    if is_success_status(status) {
        return Ok(json);
    }
    Err(ApiError::Status { status, message: json.as_ref().and_then(message_of) })
}

/// Accept either `{data: [...]}` or a bare array; anything else is empty.
pub fn extract_list<T: DeserializeOwned>(value: serde_json::Value) -> Result<Vec<T>, ApiError> {
    let rows = match value {
        serde_json::Value::Array(_) => value,
        serde_json::Value::Object(mut map) => match map.remove("data") {
            Some(data @ serde_json::Value::Array(_)) => data,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };
    serde_json::from_value(rows).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a list response.
pub fn interpret_list<T: DeserializeOwned>(status: u16, body: &str) -> Result<Vec<T>, ApiError> {
    match check_status(status, body)? {
        Some(value) => extract_list(value),
        None => Ok(Vec::new()),
    }
}

/// Interpret a mutation response. An explicit `success: false` is a
/// rejection; an empty 2xx body counts as success.
pub fn interpret_mutation(status: u16, body: &str) -> Result<(), ApiError> {
    let Some(value) = check_status(status, body)? else {
        return Ok(());
    };
    match value.get("success").and_then(serde_json::Value::as_bool) {
        Some(false) => Err(ApiError::Rejected(message_of(&value).unwrap_or_else(|| "Request failed".to_owned()))),
        _ => Ok(()),
    }
}

/// Interpret a login or OTP response. The body is read even on a non-2xx
/// status because the API explains failures in it; `success` is forced off
/// in that case.
pub fn interpret_login(status: u16, body: &str) -> Result<LoginResponse, ApiError> {
    match serde_json::from_str::<LoginResponse>(body) {
        Ok(mut response) => {
            response.success &= is_success_status(status);
            Ok(response)
        }
        Err(_) if !is_success_status(status) => Err(ApiError::Status { status, message: None }),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

/// Interpret `GET /api/Auth/generate-captcha`.
pub fn interpret_captcha(status: u16, body: &str) -> Result<CaptchaChallenge, ApiError> {
    let value = check_status(status, body)?.ok_or_else(|| ApiError::Decode("empty captcha response".to_owned()))?;
    let envelope: Envelope = serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success || envelope.data.is_null() {
        return Err(ApiError::Rejected(
            envelope.message.unwrap_or_else(|| "Could not load security check.".to_owned()),
        ));
    }
    serde_json::from_value(envelope.data).map_err(|e| ApiError::Decode(e.to_string()))
}

/// HTTP client bound to a base URL and the session's bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self { base_url: base_url.into(), token: token.filter(|t| !t.is_empty()) }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// Send one request and return `(status, body)`.
    async fn send(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let url = self.endpoint(path);
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            }
            .header("Content-Type", "application/json");
            if let Some(auth) = self.authorization() {
                builder = builder.header("Authorization", &auth);
            }
            let request = match body {
                Some(json) => builder.json(&json),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let response = request.send().await.map_err(|e| {
                log::warn!("{method:?} {url} failed: {e}");
                ApiError::Network(e.to_string())
            })?;
            let status = response.status();
            let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !is_success_status(status) {
                log::warn!("{method:?} {url} -> {status}");
            }
            Ok((status, text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn send_json<T: Serialize>(&self, method: Method, path: &str, body: &T) -> Result<(u16, String), ApiError> {
        let json = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.send(method, path, Some(json)).await
    }

    // ---------------------------------------------------------
    // Auth
    // ---------------------------------------------------------

    pub async fn fetch_captcha(&self) -> Result<CaptchaChallenge, ApiError> {
        let (status, body) = self.send(Method::Get, CAPTCHA_PATH, None).await?;
        interpret_captcha(status, &body)
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let (status, body) = self.send_json(Method::Post, LOGIN_PATH, request).await?;
        interpret_login(status, &body)
    }

    pub async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<LoginResponse, ApiError> {
        let (status, body) = self.send_json(Method::Post, VERIFY_OTP_PATH, request).await?;
        interpret_login(status, &body)
    }

    pub async fn logout(&self, request: &LogoutRequest) -> Result<(), ApiError> {
        let (status, body) = self.send_json(Method::Post, LOGOUT_PATH, request).await?;
        interpret_mutation(status, &body)
    }

    // ---------------------------------------------------------
    // CRUD
    // ---------------------------------------------------------

    pub async fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>, ApiError> {
        let (status, body) = self.send(Method::Get, resource.collection(), None).await?;
        interpret_list(status, &body)
    }

    /// `POST` the collection when `id` is 0, otherwise `PUT` the item.
    pub async fn save<T: Serialize>(&self, resource: Resource, id: i64, payload: &T) -> Result<(), ApiError> {
        let (method, path) = resource.save_target(id);
        let (status, body) = self.send_json(method, &path, payload).await?;
        interpret_mutation(status, &body)
    }

    pub async fn delete(&self, resource: Resource, id: i64) -> Result<(), ApiError> {
        let (status, body) = self.send(Method::Delete, &resource.item(id), None).await?;
        interpret_mutation(status, &body)
    }

    // ---------------------------------------------------------
    // Users
    // ---------------------------------------------------------

    pub async fn list_users(&self, query: &UserQuery) -> Result<Vec<User>, ApiError> {
        let (status, body) = self.send(Method::Get, &user_list_path(query), None).await?;
        interpret_list(status, &body)
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, ApiError> {
        let (status, body) = self.send(Method::Get, COMPANIES_PATH, None).await?;
        interpret_list(status, &body)
    }

    pub async fn fetch_user_rights(&self, user_id: i64) -> Result<Vec<PageRight>, ApiError> {
        let (status, body) = self.send(Method::Get, &user_rights_path(user_id), None).await?;
        interpret_list(status, &body)
    }

    pub async fn save_user_rights(&self, request: &SaveRightsRequest) -> Result<(), ApiError> {
        let (status, body) = self.send_json(Method::Post, SAVE_RIGHTS_PATH, request).await?;
        interpret_mutation(status, &body)
    }
}
