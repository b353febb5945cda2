use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Timed out while checking your session")]
    Timeout,
    #[error("Storage unavailable: {0}")]
    Storage(String),
}

impl IntoView for AuthError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthEvent {
    SignedIn,
    SignedOut,
    TokenRefreshed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Value,
}

impl SessionUser {
    pub fn display_name(&self) -> String {
        self.user_metadata
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .or_else(|| self.email.clone())
            .unwrap_or_else(|| self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: SessionUser,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at
            .map(|at| at <= now.timestamp())
            .unwrap_or(false)
    }

    /// Fills `expires_at` from `expires_in` when the server only sent the latter.
    pub fn with_expiry_from(mut self, now: DateTime<Utc>) -> Self {
        if self.expires_at.is_none() {
            self.expires_at = self.expires_in.map(|secs| now.timestamp() + secs);
        }
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PasswordCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    /// Stored by the auth service as `user_metadata`.
    pub data: Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SignUpResponse {
    Session(Session),
    User(SessionUser),
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    error_description: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    JobSeeker,
    #[serde(alias = "employer")]
    Company,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::JobSeeker => "job_seeker",
            UserType::Company => "company",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserType {
    type Err = SignupError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim() {
            "job_seeker" => Ok(UserType::JobSeeker),
            "company" | "employer" => Ok(UserType::Company),
            other => Err(SignupError::UnknownRole(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignupError {
    #[error("Please enter your full name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("Unknown account type: {0}")]
    UnknownRole(String),
}

impl IntoView for SignupError {
    fn into_view(self) -> View {
        self.to_string().into_view()
    }
}

/// Raw values collected by the sign-up modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: String,
}

/// Prospective account held in memory until profile completion finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupIntent {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

pub const MIN_PASSWORD_LEN: usize = 6;

impl TryFrom<SignupForm> for SignupIntent {
    type Error = SignupError;

    fn try_from(form: SignupForm) -> Result<Self, Self::Error> {
        let user_type = form.user_type.parse::<UserType>()?;
        let name = form.name.trim().to_string();
        if name.is_empty() {
            return Err(SignupError::MissingName);
        }
        let email = form.email.trim().to_string();
        let valid_email = email
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && !domain.is_empty())
            .unwrap_or(false);
        if !valid_email {
            return Err(SignupError::InvalidEmail);
        }
        if form.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(SignupError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        Ok(SignupIntent {
            name,
            email,
            password: form.password,
            user_type,
        })
    }
}
