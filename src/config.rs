//! Build-time application configuration.
//!
//! A browser bundle has no process environment, so values are baked in from
//! the environment of the build (`option_env!`) and parsed once at startup.
//!
//! Recognised variables:
//! - `TAILORSHOP_API_URL`: REST API base URL (default `https://localhost:7260`)
//! - `TAILORSHOP_CAPTCHA_MODE`: `server` (default) or `local`
//! - `TAILORSHOP_CAPTCHA_CASE`: `sensitive` (default) or `insensitive`
//! - `TAILORSHOP_CAPTCHA_LENGTH`: characters per local challenge (default 6)

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use captcha::CasePolicy;

pub const DEFAULT_API_BASE_URL: &str = "https://localhost:7260";
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZES: &[usize] = &[10, 20, 50];
pub const MAX_CAPTCHA_LENGTH: usize = 12;

/// Where CAPTCHA challenges are generated and checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptchaMode {
    /// Challenge fetched from `/api/Auth/generate-captcha`; the API checks the answer.
    #[default]
    Server,
    /// Challenge generated and checked in the browser before the login request.
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown captcha mode: {0}")]
    CaptchaMode(String),
    #[error("unknown captcha case policy: {0}")]
    CaptchaCase(String),
    #[error("invalid captcha length: {0}")]
    CaptchaLength(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub captcha_mode: CaptchaMode,
    pub captcha_case: CasePolicy,
    pub captcha_length: usize,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            captcha_mode: CaptchaMode::Server,
            captcha_case: CasePolicy::Sensitive,
            captcha_length: captcha::consts::DEFAULT_LENGTH,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Read the values baked in at build time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("TAILORSHOP_API_URL"),
            option_env!("TAILORSHOP_CAPTCHA_MODE"),
            option_env!("TAILORSHOP_CAPTCHA_CASE"),
            option_env!("TAILORSHOP_CAPTCHA_LENGTH"),
        )
    }

    /// Build a config from raw values. Invalid values are logged and replaced
    /// by their defaults so a bad build variable never blanks the page.
    pub fn from_values(api_url: Option<&str>, mode: Option<&str>, case: Option<&str>, length: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: resolve_base_url(api_url),
            captcha_mode: parse_captcha_mode(mode).unwrap_or_else(|e| {
                log::warn!("{e}; using default");
                defaults.captcha_mode
            }),
            captcha_case: parse_captcha_case(case).unwrap_or_else(|e| {
                log::warn!("{e}; using default");
                defaults.captcha_case
            }),
            captcha_length: parse_captcha_length(length).unwrap_or_else(|e| {
                log::warn!("{e}; using default");
                defaults.captcha_length
            }),
            page_size: defaults.page_size,
        }
    }
}

/// Trim whitespace and trailing slashes; fall back to the default when blank.
pub fn resolve_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}

fn parse_captcha_mode(raw: Option<&str>) -> Result<CaptchaMode, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("" | "server") => Ok(CaptchaMode::Server),
        Some("local") => Ok(CaptchaMode::Local),
        Some(other) => Err(ConfigError::CaptchaMode(other.to_owned())),
    }
}

fn parse_captcha_case(raw: Option<&str>) -> Result<CasePolicy, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(CasePolicy::Sensitive),
        Some(value) => CasePolicy::parse(value).ok_or_else(|| ConfigError::CaptchaCase(value.to_owned())),
    }
}

fn parse_captcha_length(raw: Option<&str>) -> Result<usize, ConfigError> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(captcha::consts::DEFAULT_LENGTH);
    };
    match value.parse::<usize>() {
        Ok(n) if (1..=MAX_CAPTCHA_LENGTH).contains(&n) => Ok(n),
        _ => Err(ConfigError::CaptchaLength(value.to_owned())),
    }
}
