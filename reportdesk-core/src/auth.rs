//! Login and registration forms.
//!
//! Forms hold raw field text as typed by the user. `validate()` checks the
//! fields in display order and turns them into the request payload sent to
//! the auth backend.

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Path of the login endpoint, relative to `api_url`.
pub const LOGIN_PATH: &str = "auth/login";
/// Path of the registration endpoint, relative to `api_url`.
pub const REGISTER_PATH: &str = "auth/register";

/// Raw login form fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    /// Email as typed
    pub email: String,
    /// Password as typed
    pub password: String,
}

/// Raw registration form fields
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    /// Display name
    pub name: String,
    /// Email as typed
    pub email: String,
    /// Password
    pub password: String,
    /// Password confirmation
    pub confirm_password: String,
    /// Terms-of-service checkbox
    pub accept_terms: bool,
}

/// Body of `POST auth/login`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    /// Normalised email
    pub email: String,
    /// Password
    pub password: String,
}

/// Body of `POST auth/register`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    /// Trimmed display name
    pub name: String,
    /// Normalised email
    pub email: String,
    /// Password
    pub password: String,
}

/// Signed-in user as reported by the backend
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email
    pub email: String,
}

/// Successful auth response
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for later calls
    pub token: String,
    /// The authenticated user
    pub user: User,
}

impl Session {
    /// Name to greet the user with; falls back to the email's local part.
    pub fn display_name(&self) -> &str {
        if self.user.name.trim().is_empty() {
            self.user
                .email
                .split('@')
                .next()
                .unwrap_or(&self.user.email)
        } else {
            self.user.name.trim()
        }
    }
}

impl LoginForm {
    /// Validate fields and build the request.
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        let email = normalize_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

impl RegisterForm {
    /// Validate fields and build the request.
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let email = normalize_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !self.accept_terms {
            return Err(FormError::TermsNotAccepted);
        }
        Ok(RegisterRequest {
            name: name.to_owned(),
            email,
            password: self.password.clone(),
        })
    }
}

/// Trim and lower-case an email, rejecting obviously malformed ones.
pub fn normalize_email(raw: &str) -> Result<String, FormError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(FormError::MissingEmail);
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(email)
    } else {
        Err(FormError::InvalidEmail(raw.trim().to_owned()))
    }
}
