//! Wire DTOs mirrored from the ERP REST API.
//!
//! DESIGN
//! ======
//! The API is loosely typed: ids arrive as numbers or numeric strings, text
//! columns arrive as `null`, and some list endpoints wrap rows in an envelope
//! while others return a bare array. Read-side types absorb that with lenient
//! deserializers and container defaults. Write-side payloads are separate
//! structs so the exact request body stays visible in one place.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// `{success, message, data}` wrapper used by most endpoints.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Envelope {
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub success: bool,
    #[serde(deserialize_with = "deserialize_opt_string_lenient")]
    pub message: Option<String>,
    pub data: serde_json::Value,
}

/// A contact (customer, supplier, vendor or staff member).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub contact_id: i64,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub contact_no: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub person_name: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub company_name: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub designation: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub email_id: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub work_notes: String,
    /// Ledger account id as text; `""` when unset.
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub ledger_id: String,
    /// API form, e.g. `2025-12-17T00:00:00`.
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub birthday: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub remark1: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub remark2: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub contact_type: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub broadcast: String,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub is_active: bool,
}

/// Body for `POST /api/Contact` and `PUT /api/Contact/:id` from the contacts screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    pub contact_id: i64,
    pub person_name: String,
    pub contact_no: String,
    pub company_name: String,
    pub designation: String,
    pub email_id: String,
    pub work_notes: String,
    pub ledger_id: Option<i64>,
    /// `dd/MM/yyyy`.
    pub birthday: Option<String>,
    pub remark1: String,
    pub remark2: String,
    pub contact_type: String,
    pub broadcast: String,
    pub is_active: bool,
    pub created_by: String,
    pub created_from: String,
    pub created_on: String,
}

/// Body for contact writes from the customers side panel.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub contact_id: i64,
    pub person_name: String,
    pub contact_no: String,
    pub email_id: String,
    pub company_name: String,
    pub designation: String,
    pub contact_type: String,
    pub is_active: bool,
    pub created_by: String,
    pub created_from: String,
    pub created_on: String,
}

/// A named body dimension.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Measurement {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub measurement_id: i64,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub measurement_name: String,
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub display_order: i64,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub is_active: bool,
    #[serde(deserialize_with = "deserialize_opt_string_lenient", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A stitchable product and the measurements it requires.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TailoringItem {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub item_id: i64,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub item_name: String,
    #[serde(deserialize_with = "deserialize_opt_string_lenient", skip_serializing_if = "Option::is_none")]
    pub item_code: Option<String>,
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub display_order: i64,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub is_active: bool,
    #[serde(deserialize_with = "deserialize_ids_lenient")]
    pub measurement_ids: Vec<i64>,
}

/// An ERP login account.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub user_id: i64,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub user_name: String,
    /// Write-only. Never populated from a read; omitted from updates when blank.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub user_password: Option<String>,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub first_name: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub last_name: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub email_id: String,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub mobile_no: String,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub active: bool,
    #[serde(rename = "cId", deserialize_with = "deserialize_i64_lenient")]
    pub c_id: i64,
    #[serde(rename = "whatsappOTP", deserialize_with = "deserialize_bool_lenient")]
    pub whatsapp_otp: bool,
    #[serde(rename = "emailOTP", deserialize_with = "deserialize_bool_lenient")]
    pub email_otp: bool,
    #[serde(deserialize_with = "deserialize_opt_string_lenient", skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    #[serde(rename = "cId", deserialize_with = "deserialize_i64_lenient")]
    pub c_id: i64,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub company_name: String,
}

/// Per-page capability flags for one user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageRight {
    #[serde(deserialize_with = "deserialize_i64_lenient")]
    pub page_id: i64,
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub page_name: String,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub allow_access: bool,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub allow_insert: bool,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub allow_update: bool,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub allow_delete: bool,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub allow_print: bool,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub allow_export: bool,
}

/// Body for `POST /api/user/save-rights`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRightsRequest {
    pub user_id: i64,
    pub rights: Vec<PageRight>,
}

/// Profile persisted under `userInfo` after login.
///
/// Fields the front-end does not read are kept in `extra` so the stored JSON
/// round-trips unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserInfo {
    #[serde(deserialize_with = "deserialize_opt_string_lenient", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_string_lenient", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_string_lenient", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_string_lenient", skip_serializing_if = "Option::is_none")]
    pub user_login_id: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Menu entry persisted under `userRights` after login.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRight {
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub page_name: String,
    #[serde(deserialize_with = "deserialize_opt_string_lenient", skip_serializing_if = "Option::is_none")]
    pub menu_name: Option<String>,
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub allow_access: bool,
}

/// Server-issued CAPTCHA challenge.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptchaChallenge {
    #[serde(deserialize_with = "deserialize_string_lenient")]
    pub captcha_id: String,
    pub captcha_text: String,
}

/// Body for `POST /api/Auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
    /// `None` when the challenge was generated in the browser.
    pub captcha_id: Option<String>,
    pub captcha_code: String,
}

/// Response of `POST /api/Auth/login` and `POST /api/Auth/verify-otp`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginResponse {
    #[serde(deserialize_with = "deserialize_bool_lenient")]
    pub success: bool,
    #[serde(deserialize_with = "deserialize_opt_string_lenient")]
    pub message: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_string_lenient")]
    pub error_type: Option<String>,
    #[serde(deserialize_with = "deserialize_opt_string_lenient")]
    pub token: Option<String>,
    /// Profile object on success, OTP handshake data when `requiresOTP`.
    pub data: Option<serde_json::Value>,
    pub user_rights: Option<Vec<UserRight>>,
}

/// The OTP handshake fields inside `LoginResponse::data`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoginData {
    #[serde(rename = "requiresOTP", deserialize_with = "deserialize_bool_lenient")]
    pub requires_otp: bool,
    #[serde(rename = "userId", deserialize_with = "deserialize_i64_lenient")]
    pub user_id: i64,
    #[serde(rename = "userLoginId", deserialize_with = "deserialize_string_lenient")]
    pub user_login_id: String,
}

/// Body for `POST /api/Auth/verify-otp`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub user_id: i64,
    pub otp: u32,
    pub user_login_id: String,
}

/// Body for `POST /api/Auth/logout`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub user_login_id: String,
}

/// Query string of `GET /api/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub page_index: u32,
    pub page_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
}

fn deserialize_i64_lenient<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    i64_from_value(&value).map_err(D::Error::custom)
}

fn i64_from_value(value: &serde_json::Value) -> Result<i64, String> {
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err("expected integer-compatible number".to_owned())
        }
        serde_json::Value::String(text) if text.trim().is_empty() => Ok(0),
        serde_json::Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("expected numeric string, got {text:?}")),
        _ => Err("expected number".to_owned()),
    }
}

fn deserialize_ids_lenient<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::Array(items) => items
            .iter()
            .map(|item| i64_from_value(item).map_err(D::Error::custom))
            .collect(),
        _ => Err(D::Error::custom("expected array of ids")),
    }
}

fn deserialize_string_lenient<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_opt_string_lenient(deserializer)?.unwrap_or_default())
}

fn deserialize_opt_string_lenient<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        serde_json::Value::Bool(flag) => Ok(Some(flag.to_string())),
        _ => Err(D::Error::custom("expected string")),
    }
}

fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        serde_json::Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            _ => Err(D::Error::custom(format!("expected boolean, got {text:?}"))),
        },
        _ => Err(D::Error::custom("expected boolean")),
    }
}
