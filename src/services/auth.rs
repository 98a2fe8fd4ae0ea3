//! Authentication boundary.
//!
//! DESIGN
//! ======
//! Login is deliberately fake: any syntactically valid email plus any
//! non-empty password passes. The `Authenticator` trait is still the
//! same seam a real credential check would occupy, so swapping in a
//! verifying implementation never touches the dashboard or routes.
//! Passwords are validated and dropped; nothing retains them.

use crate::error::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("password is required")]
    EmptyPassword,
}

impl ErrorCode for AuthError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "E_INVALID_EMAIL",
            Self::EmptyPassword => "E_EMPTY_PASSWORD",
        }
    }
}

/// Lowercase and validate an email address. `None` when the input is
/// not of the form `local@domain` with both parts non-empty.
#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || !normalized.contains('@') {
        return None;
    }
    let parts = normalized.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return None;
    }
    Some(normalized)
}

/// Credential check seam. Returns the normalized email on success.
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`AuthError`] describing which field failed.
    async fn verify(&self, email: &str, password: &str) -> Result<String, AuthError>;
}

/// Accepts any well-formed email and non-empty password. No store, no
/// verification.
pub struct StubAuthenticator;

#[async_trait::async_trait]
impl Authenticator for StubAuthenticator {
    async fn verify(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let normalized = normalize_email(email).ok_or(AuthError::InvalidEmail)?;
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }
        Ok(normalized)
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
